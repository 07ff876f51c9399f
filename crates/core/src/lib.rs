//! Domain layer for the dam inventory service.
//!
//! Holds the dam submission/validation contract, GeoJSON point geometry,
//! typed map-widget configuration, and the static drought layer catalog.
//! Everything here is pure: persistence lives in `dam-inventory-db` and the
//! HTTP surface in `dam-inventory-api`.

pub mod catalog;
pub mod dam;
pub mod error;
pub mod geometry;
pub mod gizmos;
pub mod types;
