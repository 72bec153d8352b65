//! Venue handlers

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use fyyur_common::{db, time};
use serde::Serialize;

use crate::error::{parse_id, ApiError, ApiResult};
use crate::forms::{FieldErrors, SearchForm, VenueForm};
use crate::views::{self, forms::FormMode};
use crate::AppState;

/// Body returned by a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// GET /venues
pub async fn list_venues(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let areas = db::venues::list_areas(&state.db).await?;
    let upcoming = db::venues::upcoming_show_counts(&state.db, time::now()).await?;
    Ok(Html(views::venues::list_page(&areas, &upcoming)))
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> ApiResult<Html<String>> {
    let results = db::venues::search_venues(&state.db, &form.search_term).await?;
    Ok(Html(views::venues::search_page(&form.search_term, &results)))
}

/// GET /venues/:venue_id
pub async fn show_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
) -> ApiResult<Html<String>> {
    let id = parse_id("venue", &venue_id)?;
    let detail = db::venues::venue_detail(&state.db, id, time::now()).await?;
    Ok(Html(views::venues::detail_page(&detail)))
}

/// GET /venues/create
pub async fn create_venue_form() -> Html<String> {
    Html(views::venues::form_page(
        FormMode::Create,
        &VenueForm::default(),
        &FieldErrors::default(),
    ))
}

/// POST /venues/create
pub async fn create_venue_submission(
    State(state): State<AppState>,
    Form(form): Form<VenueForm>,
) -> ApiResult<Response> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return Ok(Html(views::venues::form_page(FormMode::Create, &form, &errors))
                .into_response())
        }
    };

    let venue = db::venues::create_venue(&state.db, &input)
        .await
        .map_err(|e| {
            ApiError::write_failed(
                e,
                format!("An error occurred. Venue {} could not be listed.", input.name),
            )
        })?;

    let notice = format!("Venue {} was successfully listed!", venue.name);
    Ok(Html(views::home::home_page(Some(&notice))).into_response())
}

/// GET /venues/:venue_id/edit
pub async fn edit_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
) -> ApiResult<Html<String>> {
    let id = parse_id("venue", &venue_id)?;
    let venue = db::venues::get_venue(&state.db, id).await?;
    Ok(Html(views::venues::form_page(
        FormMode::Edit(id),
        &VenueForm::from(&venue),
        &FieldErrors::default(),
    )))
}

/// POST /venues/:venue_id/edit
///
/// Overwrites every column and redirects to the detail page
pub async fn edit_venue_submission(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
    Form(form): Form<VenueForm>,
) -> ApiResult<Response> {
    let id = parse_id("venue", &venue_id)?;
    db::venues::get_venue(&state.db, id).await?;

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return Ok(Html(views::venues::form_page(FormMode::Edit(id), &form, &errors))
                .into_response())
        }
    };

    db::venues::update_venue(&state.db, id, &input)
        .await
        .map_err(|e| {
            ApiError::write_failed(
                e,
                format!("An error occurred. Venue {} could not be updated.", input.name),
            )
        })?;

    Ok(Redirect::to(&format!("/venues/{}", id)).into_response())
}

/// DELETE /venues/:venue_id
///
/// Shows at the venue go with it. A venue that is already gone still
/// reports success.
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = parse_id("venue", &venue_id)?;

    db::venues::delete_venue(&state.db, id)
        .await
        .map_err(|e| ApiError::write_failed(e, "An error occurred. Venue could not be deleted."))?;

    Ok(Json(DeleteResponse { success: true }))
}
