//! Villas Domain
//!
//! Villas and the numbered units that belong to them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← /api/VillaAPI, /api/VillaNumberAPI
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, uniqueness, JSON Patch
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← database::Repository (SeaORM or in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Entity    │  ← villas, villa_numbers tables
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_villas::{
//!     handlers,
//!     repository::{InMemoryVillaNumberRepository, InMemoryVillaRepository},
//!     service::{VillaNumberService, VillaService},
//! };
//!
//! let villas = InMemoryVillaRepository::new();
//! let numbers = InMemoryVillaNumberRepository::new();
//!
//! let villa_router = handlers::villa::router(VillaService::new(villas.clone()));
//! let number_router = handlers::villa_number::router(VillaNumberService::new(numbers, villas));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod patch;
pub mod repository;
pub mod service;

pub use error::{VillaError, VillaResult};
pub use models::{
    VillaCreateDto, VillaDto, VillaNumberCreateDto, VillaNumberDto, VillaNumberUpdateDto,
    VillaUpdateDto,
};
pub use patch::{PatchDocument, PatchError, PatchOperation};
pub use repository::{
    InMemoryVillaNumberRepository, InMemoryVillaRepository, PgVillaNumberRepository,
    PgVillaRepository,
};
pub use service::{VillaNumberService, VillaService};
