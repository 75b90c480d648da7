//! Per-resource clients over [`BaseService`].

use async_trait::async_trait;
use domain_villas::{VillaCreateDto, VillaNumberCreateDto, VillaNumberUpdateDto, VillaUpdateDto};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::request::{ApiRequest, BaseService};

#[async_trait]
pub trait VillaService: Send + Sync {
    async fn get_all<T: DeserializeOwned + Send>(&self) -> ClientResult<T>;

    async fn get<T: DeserializeOwned + Send>(&self, id: i32) -> ClientResult<T>;

    async fn create<T: DeserializeOwned + Send>(&self, dto: &VillaCreateDto) -> ClientResult<T>;

    /// PUT to the villa named by `dto.id`.
    async fn update<T: DeserializeOwned + Send>(&self, dto: &VillaUpdateDto) -> ClientResult<T>;

    async fn delete<T: DeserializeOwned + Send>(&self, id: i32) -> ClientResult<T>;
}

#[async_trait]
pub trait VillaNumberService: Send + Sync {
    async fn get_all<T: DeserializeOwned + Send>(&self) -> ClientResult<T>;

    async fn get<T: DeserializeOwned + Send>(&self, villa_no: i32) -> ClientResult<T>;

    async fn create<T: DeserializeOwned + Send>(
        &self,
        dto: &VillaNumberCreateDto,
    ) -> ClientResult<T>;

    /// PUT to the villa number named by `dto.villa_no`.
    async fn update<T: DeserializeOwned + Send>(
        &self,
        dto: &VillaNumberUpdateDto,
    ) -> ClientResult<T>;

    async fn delete<T: DeserializeOwned + Send>(&self, villa_no: i32) -> ClientResult<T>;
}

fn encode(dto: &impl Serialize) -> ClientResult<Value> {
    serde_json::to_value(dto).map_err(ClientError::Encode)
}

#[derive(Clone)]
pub struct VillaServiceClient {
    base: BaseService,
    url: String,
}

impl VillaServiceClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_base(BaseService::default(), config)
    }

    /// Share one connection pool between clients.
    pub fn with_base(base: BaseService, config: &ClientConfig) -> Self {
        Self {
            base,
            url: format!("{}/api/VillaAPI", config.base_url),
        }
    }
}

#[async_trait]
impl VillaService for VillaServiceClient {
    async fn get_all<T: DeserializeOwned + Send>(&self) -> ClientResult<T> {
        self.base.send(ApiRequest::get(&self.url)).await
    }

    async fn get<T: DeserializeOwned + Send>(&self, id: i32) -> ClientResult<T> {
        self.base
            .send(ApiRequest::get(format!("{}/{id}", self.url)))
            .await
    }

    async fn create<T: DeserializeOwned + Send>(&self, dto: &VillaCreateDto) -> ClientResult<T> {
        self.base
            .send(ApiRequest::post(&self.url, encode(dto)?))
            .await
    }

    async fn update<T: DeserializeOwned + Send>(&self, dto: &VillaUpdateDto) -> ClientResult<T> {
        self.base
            .send(ApiRequest::put(format!("{}/{}", self.url, dto.id), encode(dto)?))
            .await
    }

    async fn delete<T: DeserializeOwned + Send>(&self, id: i32) -> ClientResult<T> {
        self.base
            .send(ApiRequest::delete(format!("{}/{id}", self.url)))
            .await
    }
}

#[derive(Clone)]
pub struct VillaNumberServiceClient {
    base: BaseService,
    url: String,
}

impl VillaNumberServiceClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_base(BaseService::default(), config)
    }

    pub fn with_base(base: BaseService, config: &ClientConfig) -> Self {
        Self {
            base,
            url: format!("{}/api/VillaNumberAPI", config.base_url),
        }
    }
}

#[async_trait]
impl VillaNumberService for VillaNumberServiceClient {
    async fn get_all<T: DeserializeOwned + Send>(&self) -> ClientResult<T> {
        self.base.send(ApiRequest::get(&self.url)).await
    }

    async fn get<T: DeserializeOwned + Send>(&self, villa_no: i32) -> ClientResult<T> {
        self.base
            .send(ApiRequest::get(format!("{}/{villa_no}", self.url)))
            .await
    }

    async fn create<T: DeserializeOwned + Send>(
        &self,
        dto: &VillaNumberCreateDto,
    ) -> ClientResult<T> {
        self.base
            .send(ApiRequest::post(&self.url, encode(dto)?))
            .await
    }

    async fn update<T: DeserializeOwned + Send>(
        &self,
        dto: &VillaNumberUpdateDto,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.url, dto.villa_no);
        self.base.send(ApiRequest::put(url, encode(dto)?)).await
    }

    async fn delete<T: DeserializeOwned + Send>(&self, villa_no: i32) -> ClientResult<T> {
        self.base
            .send(ApiRequest::delete(format!("{}/{villa_no}", self.url)))
            .await
    }
}
