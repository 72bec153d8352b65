//! Show handlers

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Form,
};
use fyyur_common::{db, time};

use crate::error::{ApiError, ApiResult};
use crate::forms::{FieldErrors, ShowForm};
use crate::views;
use crate::AppState;

/// GET /shows
pub async fn list_shows(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let shows = db::shows::list_shows(&state.db).await?;
    Ok(Html(views::shows::list_page(&shows)))
}

/// GET /shows/create
///
/// Start time is pre-filled with the current time
pub async fn create_show_form() -> Html<String> {
    Html(views::shows::form_page(
        &ShowForm::starting_at(time::now()),
        &FieldErrors::default(),
    ))
}

/// POST /shows/create
///
/// Unknown artist or venue ids are rejected by the foreign keys and
/// nothing is written.
pub async fn create_show_submission(
    State(state): State<AppState>,
    Form(form): Form<ShowForm>,
) -> ApiResult<Response> {
    let new_show = match form.validate() {
        Ok(show) => show,
        Err(errors) => return Ok(Html(views::shows::form_page(&form, &errors)).into_response()),
    };

    db::shows::create_show(&state.db, &new_show)
        .await
        .map_err(|e| ApiError::write_failed(e, "An error occurred. Show could not be listed."))?;

    Ok(Html(views::home::home_page(Some("Show was successfully listed!"))).into_response())
}
