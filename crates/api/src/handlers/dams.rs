//! Handlers for the add-dam form and the dam listing table.
//!
//! The form follows a two-state contract: Form Display (GET, or POST with
//! validation errors) and a redirect to the home view on success. Validation
//! checks every field in one pass so all errors surface together.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use dam_inventory_core::catalog::DEFAULT_MAP_CENTER;
use dam_inventory_core::dam::{
    format_date_built, validate_submission, DamFieldErrors, DamSubmission, OWNER_OPTIONS,
};
use dam_inventory_core::error::CoreError;
use dam_inventory_core::gizmos::{
    Basemap, Button, DataTable, DatePicker, DrawMap, DrawOptions, MapViewport, SelectInput,
    TextInput,
};
use dam_inventory_db::models::dam::CreateDam;
use dam_inventory_db::repositories::DamRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Form body for `POST /dam-inventory/dams/add`.
///
/// The `add-button` field is the submission marker; a POST without it
/// renders the default Form Display instead of validating.
#[derive(Debug, Default, Deserialize)]
pub struct AddDamPayload {
    #[serde(rename = "add-button")]
    pub add_button: Option<String>,
    pub geometry: Option<String>,
    pub name: Option<String>,
    pub owner: Option<String>,
    pub river: Option<String>,
    #[serde(rename = "date-built")]
    pub date_built: Option<String>,
}

impl From<AddDamPayload> for DamSubmission {
    fn from(payload: AddDamPayload) -> Self {
        Self {
            geometry: payload.geometry,
            name: payload.name,
            owner: payload.owner,
            river: payload.river,
            date_built: payload.date_built,
        }
    }
}

/// Typed widget set for the add-dam Form Display.
#[derive(Debug, Serialize)]
pub struct AddDamForm {
    pub location_input: DrawMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_error: Option<String>,
    pub name_input: TextInput,
    pub owner_input: SelectInput,
    pub river_input: TextInput,
    pub date_built_input: DatePicker,
    pub add_button: Button,
    pub cancel_button: Button,
}

/// Form Display response: the widgets plus an optional top-level notice.
#[derive(Debug, Serialize)]
pub struct AddDamFormView {
    pub form: AddDamForm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
}

/// Build the Form Display from submitted values and their field errors.
///
/// On a fresh GET the values come from [`DamSubmission::form_defaults`];
/// after a failed submission the user's input is preserved verbatim.
fn build_form(values: &DamSubmission, errors: &DamFieldErrors) -> AddDamForm {
    let initial = |value: &Option<String>| value.clone().unwrap_or_default();

    let location_input = DrawMap {
        height: "300px".to_string(),
        width: "100%".to_string(),
        basemap: Basemap::OpenStreetMap,
        draw: DrawOptions::point_picker(),
        view: MapViewport::new(DEFAULT_MAP_CENTER, 3.5),
    };

    let mut owner_input = SelectInput::with_plain_options(
        "Owner",
        "owner",
        &OWNER_OPTIONS,
        &initial(&values.owner),
    );
    owner_input.error = errors.owner.clone();

    AddDamForm {
        location_input,
        location_error: errors.location.clone(),
        name_input: TextInput {
            display_text: "Name".to_string(),
            name: "name".to_string(),
            initial: initial(&values.name),
            placeholder: None,
            error: errors.name.clone(),
        },
        owner_input,
        river_input: TextInput {
            display_text: "River".to_string(),
            name: "river".to_string(),
            initial: initial(&values.river),
            placeholder: Some("e.g.: Mississippi River".to_string()),
            error: errors.river.clone(),
        },
        date_built_input: DatePicker {
            display_text: "Date Built".to_string(),
            name: "date-built".to_string(),
            format: "MM d, yyyy".to_string(),
            autoclose: true,
            start_view: "decade".to_string(),
            today_button: true,
            initial: initial(&values.date_built),
            error: errors.date_built.clone(),
        },
        add_button: Button {
            display_text: "Add".to_string(),
            name: "add-button".to_string(),
            icon: Some("glyphicon glyphicon-plus".to_string()),
            style: Some("success".to_string()),
            href: None,
            submit: true,
        },
        cancel_button: Button {
            display_text: "Cancel".to_string(),
            name: "cancel-button".to_string(),
            icon: None,
            style: None,
            href: Some("/dam-inventory".to_string()),
            submit: false,
        },
    }
}

fn form_display(values: &DamSubmission, errors: &DamFieldErrors, notice: Option<&'static str>) -> Json<DataResponse<AddDamFormView>> {
    Json(DataResponse {
        data: AddDamFormView {
            form: build_form(values, errors),
            notice,
        },
    })
}

/// GET /dam-inventory/dams/add -- render the empty Form Display.
pub async fn show_add_form(_user: AuthUser) -> Json<DataResponse<AddDamFormView>> {
    form_display(
        &DamSubmission::form_defaults(),
        &DamFieldErrors::default(),
        None,
    )
}

/// POST /dam-inventory/dams/add -- validate and create a dam.
///
/// Any validation failure re-renders the Form Display (422) with the
/// submitted values preserved and every field error attached. A valid
/// submission appends exactly one dam and redirects to the home view.
pub async fn submit_add_form(
    user: AuthUser,
    State(state): State<AppState>,
    Form(payload): Form<AddDamPayload>,
) -> AppResult<Response> {
    if payload.add_button.is_none() {
        return Ok(form_display(
            &DamSubmission::form_defaults(),
            &DamFieldErrors::default(),
            None,
        )
        .into_response());
    }

    let submission = DamSubmission::from(payload);
    let validated = match validate_submission(&submission) {
        Ok(validated) => validated,
        Err(errors) => {
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                form_display(&submission, &errors, Some("Please fix errors.")),
            )
                .into_response());
        }
    };

    let dto = CreateDam::from(validated);
    let dam = match state.config.max_dams {
        Some(max_dams) => DamRepo::insert_within_limit(&state.pool, &dto, max_dams)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Conflict(
                    "Maximum number of dams reached".to_string(),
                ))
            })?,
        None => DamRepo::insert(&state.pool, &dto).await?,
    };
    tracing::info!(dam_id = dam.id, user = %user.username, "Dam created");

    Ok(Redirect::to("/dam-inventory").into_response())
}

/// Table view for the dam listing page.
#[derive(Debug, Serialize)]
pub struct DamTableView {
    pub table: DataTable,
}

/// GET /dam-inventory/dams -- all dams as display rows, in store order.
///
/// Paging and sorting are the table widget's job; no server-side
/// pagination.
pub async fn list_dams(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DamTableView>>> {
    let dams = DamRepo::list_all(&state.pool).await?;

    let rows = dams
        .into_iter()
        .map(|dam| {
            vec![
                dam.name,
                dam.owner,
                dam.river,
                format_date_built(dam.date_built),
            ]
        })
        .collect();

    let table = DataTable {
        column_names: vec!["Name", "Owner", "River", "Date Built"],
        rows,
        searching: false,
        order_classes: false,
        length_menu: DataTable::default_length_menu(),
    };

    Ok(Json(DataResponse {
        data: DamTableView { table },
    }))
}
