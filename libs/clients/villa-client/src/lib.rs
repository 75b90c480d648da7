//! Typed HTTP client for the villa API.
//!
//! Every call returns the response body deserialized into the caller's
//! type, normally `ApiResponse<VillaDto>` or `ApiResponse<Vec<VillaDto>>`.
//! Error statuses still carry an envelope, so they decode the same way and
//! only transport or decode failures surface as [`ClientError`].
//!
//! ```rust,ignore
//! use villa_client::{ClientConfig, VillaService, VillaServiceClient};
//!
//! let client = VillaServiceClient::new(&ClientConfig::from_env()?);
//! let villas: ApiResponse<Vec<VillaDto>> = client.get_all().await?;
//! ```

pub mod config;
pub mod error;
pub mod request;
pub mod services;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use request::{ApiRequest, ApiType, BaseService};
pub use services::{VillaNumberService, VillaNumberServiceClient, VillaService, VillaServiceClient};
