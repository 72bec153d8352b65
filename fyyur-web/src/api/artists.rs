//! Artist handlers

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use fyyur_common::{db, time};

use crate::error::{parse_id, ApiError, ApiResult};
use crate::forms::{ArtistForm, FieldErrors, SearchForm};
use crate::views::{self, forms::FormMode};
use crate::AppState;

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let artists = db::artists::list_artists(&state.db).await?;
    Ok(Html(views::artists::list_page(&artists)))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> ApiResult<Html<String>> {
    let results = db::artists::search_artists(&state.db, &form.search_term).await?;
    Ok(Html(views::artists::search_page(&form.search_term, &results)))
}

/// GET /artists/:artist_id
pub async fn show_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
) -> ApiResult<Html<String>> {
    let id = parse_id("artist", &artist_id)?;
    let detail = db::artists::artist_detail(&state.db, id, time::now()).await?;
    Ok(Html(views::artists::detail_page(&detail)))
}

/// GET /artists/create
pub async fn create_artist_form() -> Html<String> {
    Html(views::artists::form_page(
        FormMode::Create,
        &ArtistForm::default(),
        &FieldErrors::default(),
    ))
}

/// POST /artists/create
pub async fn create_artist_submission(
    State(state): State<AppState>,
    Form(form): Form<ArtistForm>,
) -> ApiResult<Response> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return Ok(Html(views::artists::form_page(FormMode::Create, &form, &errors))
                .into_response())
        }
    };

    let artist = db::artists::create_artist(&state.db, &input)
        .await
        .map_err(|e| {
            ApiError::write_failed(
                e,
                format!("An error occurred. Artist {} could not be listed.", input.name),
            )
        })?;

    let notice = format!("Artist {} was successfully listed!", artist.name);
    Ok(Html(views::home::home_page(Some(&notice))).into_response())
}

/// GET /artists/:artist_id/edit
pub async fn edit_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
) -> ApiResult<Html<String>> {
    let id = parse_id("artist", &artist_id)?;
    let artist = db::artists::get_artist(&state.db, id).await?;
    Ok(Html(views::artists::form_page(
        FormMode::Edit(id),
        &ArtistForm::from(&artist),
        &FieldErrors::default(),
    )))
}

/// POST /artists/:artist_id/edit
pub async fn edit_artist_submission(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    Form(form): Form<ArtistForm>,
) -> ApiResult<Response> {
    let id = parse_id("artist", &artist_id)?;
    db::artists::get_artist(&state.db, id).await?;

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return Ok(Html(views::artists::form_page(FormMode::Edit(id), &form, &errors))
                .into_response())
        }
    };

    db::artists::update_artist(&state.db, id, &input)
        .await
        .map_err(|e| {
            ApiError::write_failed(
                e,
                format!("An error occurred. Artist {} could not be updated.", input.name),
            )
        })?;

    Ok(Redirect::to(&format!("/artists/{}", id)).into_response())
}
