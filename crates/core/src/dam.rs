//! The dam record contract: submission fields, validation, display formats.
//!
//! Validation is deliberately non-short-circuiting so a single submission
//! pass surfaces every missing field at once.

use chrono::NaiveDate;
use serde::Serialize;

use crate::geometry::GeoPoint;

/// Owner choices offered by the UI. The store itself accepts any non-empty
/// text; this list only feeds the select widget.
pub const OWNER_OPTIONS: [&str; 3] = ["Reclamation", "Army Corp", "Other"];

/// Pre-selected owner on a fresh form.
pub const DEFAULT_OWNER: &str = "Reclamation";

/// Boundary format for `date_built`, e.g. `January 1, 2020` (parse side;
/// chrono accepts unpadded day digits here).
pub const DATE_BUILT_PARSE_FORMAT: &str = "%B %d, %Y";

/// Display format for `date_built`; `%-d` suppresses day zero-padding so a
/// stored date round-trips to the submitted text.
pub const DATE_BUILT_DISPLAY_FORMAT: &str = "%B %-d, %Y";

/// Raw field values from an add-dam form submission. `None` and the empty
/// string are both "missing".
#[derive(Debug, Default, Clone)]
pub struct DamSubmission {
    /// Serialized GeoJSON point from the drawing control.
    pub geometry: Option<String>,
    pub name: Option<String>,
    pub owner: Option<String>,
    pub river: Option<String>,
    pub date_built: Option<String>,
}

impl DamSubmission {
    /// Field values for a fresh Form Display: everything empty except the
    /// pre-selected owner.
    pub fn form_defaults() -> Self {
        Self {
            owner: Some(DEFAULT_OWNER.to_string()),
            ..Self::default()
        }
    }
}

/// A submission that passed validation, with typed location and date.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDam {
    pub location: GeoPoint,
    pub name: String,
    pub owner: String,
    pub river: String,
    pub date_built: NaiveDate,
}

/// Per-field error messages from one validation pass.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct DamFieldErrors {
    pub location: Option<String>,
    pub name: Option<String>,
    pub owner: Option<String>,
    pub river: Option<String>,
    pub date_built: Option<String>,
}

impl DamFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.location.is_none()
            && self.name.is_none()
            && self.owner.is_none()
            && self.river.is_none()
            && self.date_built.is_none()
    }
}

/// Treat `None` and `""` alike.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Validate an add-dam submission.
///
/// Every field is checked independently; the result carries either a fully
/// typed dam or the complete set of field errors. A non-empty `geometry`
/// must parse as a single GeoJSON `Point`, and a non-empty `date-built`
/// must parse with [`DATE_BUILT_PARSE_FORMAT`].
pub fn validate_submission(submission: &DamSubmission) -> Result<ValidatedDam, DamFieldErrors> {
    let mut errors = DamFieldErrors::default();

    let location = match present(&submission.geometry) {
        None => {
            errors.location = Some("Location is required.".to_string());
            None
        }
        Some(raw) => match GeoPoint::parse_geojson(raw) {
            Ok(point) => Some(point),
            Err(_) => {
                errors.location = Some("Location must be a single point.".to_string());
                None
            }
        },
    };

    let name = present(&submission.name);
    if name.is_none() {
        errors.name = Some("Name is required.".to_string());
    }

    let owner = present(&submission.owner);
    if owner.is_none() {
        errors.owner = Some("Owner is required.".to_string());
    }

    let river = present(&submission.river);
    if river.is_none() {
        errors.river = Some("River is required.".to_string());
    }

    let date_built = match present(&submission.date_built) {
        None => {
            errors.date_built = Some("Date Built is required.".to_string());
            None
        }
        Some(raw) => match NaiveDate::parse_from_str(raw, DATE_BUILT_PARSE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.date_built = Some("Date Built must be a valid date.".to_string());
                None
            }
        },
    };

    match (location, name, owner, river, date_built) {
        (Some(location), Some(name), Some(owner), Some(river), Some(date_built))
            if errors.is_empty() =>
        {
            Ok(ValidatedDam {
                location,
                name: name.to_string(),
                owner: owner.to_string(),
                river: river.to_string(),
                date_built,
            })
        }
        _ => Err(errors),
    }
}

/// Format a stored date for table rows and form round-trips.
pub fn format_date_built(date: NaiveDate) -> String {
    date.format(DATE_BUILT_DISPLAY_FORMAT).to_string()
}
