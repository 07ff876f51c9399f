//! Dam row model and creation DTO.

use chrono::NaiveDate;
use dam_inventory_core::dam::ValidatedDam;
use dam_inventory_core::geometry::GeoPoint;
use dam_inventory_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `dams` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Dam {
    pub id: DbId,
    pub name: String,
    pub owner: String,
    pub river: String,
    pub date_built: NaiveDate,
    pub longitude: f64,
    pub latitude: f64,
    pub created_at: Timestamp,
}

impl Dam {
    /// The dam's location as a typed GeoJSON point.
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.longitude, self.latitude)
    }
}

/// DTO for appending a new dam record.
#[derive(Debug, Clone)]
pub struct CreateDam {
    pub name: String,
    pub owner: String,
    pub river: String,
    pub date_built: NaiveDate,
    pub longitude: f64,
    pub latitude: f64,
}

impl From<ValidatedDam> for CreateDam {
    fn from(dam: ValidatedDam) -> Self {
        Self {
            name: dam.name,
            owner: dam.owner,
            river: dam.river,
            date_built: dam.date_built,
            longitude: dam.location.longitude,
            latitude: dam.location.latitude,
        }
    }
}
