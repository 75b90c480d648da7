//! HTTP surface for both resources.
//!
//! Each submodule exposes a `router` to be nested under `/api` and an
//! `ApiDoc` describing its paths.

pub mod villa;
pub mod villa_number;
