use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::entity::{villa, villa_number};

pub(crate) fn now() -> DateTimeWithTimeZone {
    Utc::now().fixed_offset()
}

/// Villa as returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VillaDto {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Royal Villa")]
    pub name: String,
    pub details: String,
    #[schema(example = 200.0)]
    pub rate: f64,
    pub occupancy: i32,
    pub sqft: i32,
    pub image_url: String,
    pub amenity: String,
}

/// Body of `POST /api/VillaAPI`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VillaCreateDto {
    #[validate(length(min = 1, max = 30, message = "must be between 1 and 30 characters"))]
    #[schema(example = "Royal Villa")]
    pub name: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub rate: f64,
    #[serde(default)]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub occupancy: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub sqft: i32,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub amenity: String,
}

/// Body of `PUT /api/VillaAPI/{id}` and the document a patch is applied to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VillaUpdateDto {
    #[validate(range(min = 1, message = "must be a positive integer"))]
    #[schema(example = 1)]
    pub id: i32,
    #[validate(length(min = 1, max = 30, message = "must be between 1 and 30 characters"))]
    pub name: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub rate: f64,
    #[serde(default)]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub occupancy: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub sqft: i32,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub amenity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VillaNumberDto {
    #[schema(example = 101)]
    pub villa_no: i32,
    #[serde(rename = "villaID")]
    #[schema(example = 1)]
    pub villa_id: i32,
    pub special_details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VillaNumberCreateDto {
    #[validate(range(min = 1, message = "must be a positive integer"))]
    #[schema(example = 101)]
    pub villa_no: i32,
    #[serde(rename = "villaID")]
    #[validate(range(min = 1, message = "must be a positive integer"))]
    #[schema(example = 1)]
    pub villa_id: i32,
    #[serde(default)]
    pub special_details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VillaNumberUpdateDto {
    #[validate(range(min = 1, message = "must be a positive integer"))]
    pub villa_no: i32,
    #[serde(rename = "villaID")]
    #[validate(range(min = 1, message = "must be a positive integer"))]
    pub villa_id: i32,
    #[serde(default)]
    pub special_details: String,
}

impl From<villa::Model> for VillaDto {
    fn from(model: villa::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            details: model.details,
            rate: model.rate,
            occupancy: model.occupancy,
            sqft: model.sqft,
            image_url: model.image_url,
            amenity: model.amenity,
        }
    }
}

impl From<villa::Model> for VillaUpdateDto {
    fn from(model: villa::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            details: model.details,
            rate: model.rate,
            occupancy: model.occupancy,
            sqft: model.sqft,
            image_url: model.image_url,
            amenity: model.amenity,
        }
    }
}

impl VillaCreateDto {
    /// New row; the store assigns the id.
    pub fn into_model(self, now: DateTimeWithTimeZone) -> villa::Model {
        villa::Model {
            id: 0,
            name: self.name,
            details: self.details,
            rate: self.rate,
            sqft: self.sqft,
            occupancy: self.occupancy,
            image_url: self.image_url,
            amenity: self.amenity,
            created_date: now,
            updated_date: now,
        }
    }
}

impl VillaUpdateDto {
    /// Full replacement of a stored row; `created_date` is carried over.
    pub fn into_model(
        self,
        created_date: DateTimeWithTimeZone,
        now: DateTimeWithTimeZone,
    ) -> villa::Model {
        villa::Model {
            id: self.id,
            name: self.name,
            details: self.details,
            rate: self.rate,
            sqft: self.sqft,
            occupancy: self.occupancy,
            image_url: self.image_url,
            amenity: self.amenity,
            created_date,
            updated_date: now,
        }
    }
}

impl From<villa_number::Model> for VillaNumberDto {
    fn from(model: villa_number::Model) -> Self {
        Self {
            villa_no: model.villa_no,
            villa_id: model.villa_id,
            special_details: model.special_details,
        }
    }
}

impl From<villa_number::Model> for VillaNumberUpdateDto {
    fn from(model: villa_number::Model) -> Self {
        Self {
            villa_no: model.villa_no,
            villa_id: model.villa_id,
            special_details: model.special_details,
        }
    }
}

impl VillaNumberCreateDto {
    pub fn into_model(self, now: DateTimeWithTimeZone) -> villa_number::Model {
        villa_number::Model {
            villa_no: self.villa_no,
            villa_id: self.villa_id,
            special_details: self.special_details,
            created_date: now,
            updated_date: now,
        }
    }
}

impl VillaNumberUpdateDto {
    pub fn into_model(
        self,
        created_date: DateTimeWithTimeZone,
        now: DateTimeWithTimeZone,
    ) -> villa_number::Model {
        villa_number::Model {
            villa_no: self.villa_no,
            villa_id: self.villa_id,
            special_details: self.special_details,
            created_date,
            updated_date: now,
        }
    }
}
