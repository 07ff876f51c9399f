//! Form widget configuration for the add-dam page and the listing table.

use serde::Serialize;

use crate::gizmos::map::{Basemap, MapViewport};

/// Single-line text input with an optional inline error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextInput {
    pub display_text: String,
    pub name: String,
    pub initial: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `(value, label)` entry for a select widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Single-choice select input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectInput {
    pub display_text: String,
    pub name: String,
    pub options: Vec<SelectOption>,
    pub initial: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SelectInput {
    /// Build from a list of values where value and label coincide.
    pub fn with_plain_options(
        display_text: &str,
        name: &str,
        values: &[&str],
        initial: &str,
    ) -> Self {
        Self {
            display_text: display_text.to_string(),
            name: name.to_string(),
            options: values
                .iter()
                .map(|v| SelectOption {
                    value: (*v).to_string(),
                    label: (*v).to_string(),
                })
                .collect(),
            initial: initial.to_string(),
            error: None,
        }
    }
}

/// Calendar picker configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatePicker {
    pub display_text: String,
    pub name: String,
    /// Front-end picker format (`MM d, yyyy` renders `January 1, 2020`).
    pub format: String,
    pub autoclose: bool,
    pub start_view: String,
    pub today_button: bool,
    pub initial: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Drawing control options for the location picker map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawOptions {
    pub controls: Vec<&'static str>,
    pub initial: &'static str,
    pub output_format: &'static str,
    pub point_color: String,
}

impl DrawOptions {
    /// Point-only drawing emitting GeoJSON, as the submission handler
    /// expects.
    pub fn point_picker() -> Self {
        Self {
            controls: vec!["Modify", "Delete", "Move", "Point"],
            initial: "Point",
            output_format: "GeoJSON",
            point_color: "#FF0000".to_string(),
        }
    }
}

/// Small map widget with a drawing control, used as the location input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawMap {
    pub height: String,
    pub width: String,
    pub basemap: Basemap,
    pub draw: DrawOptions,
    pub view: MapViewport,
}

/// Button descriptor (submit or link).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    pub display_text: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub submit: bool,
}

/// Page-length choice for the table widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthOption {
    /// `-1` means "all rows".
    pub value: i64,
    pub label: String,
}

/// Client-side data table; paging and sorting happen in the front-end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataTable {
    pub column_names: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    pub searching: bool,
    pub order_classes: bool,
    pub length_menu: Vec<LengthOption>,
}

impl DataTable {
    /// Standard 10/25/50/All length menu.
    pub fn default_length_menu() -> Vec<LengthOption> {
        [(10, "10"), (25, "25"), (50, "50"), (-1, "All")]
            .into_iter()
            .map(|(value, label)| LengthOption {
                value,
                label: label.to_string(),
            })
            .collect()
    }
}
