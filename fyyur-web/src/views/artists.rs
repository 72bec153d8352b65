//! Artist pages

use fyyur_common::db::{Artist, ArtistDetail};
use fyyur_common::SearchResults;

use super::forms::{checkbox, form, text_area, text_field, FormMode};
use super::shows::{show_section, Counterpart};
use super::{escape, external_link, image, layout, search_box};
use crate::forms::{ArtistForm, FieldErrors};

fn artist_item(artist: &Artist) -> String {
    format!(
        r#"<li><a href="/artists/{}">{}</a></li>"#,
        artist.id,
        escape(&artist.name)
    )
}

pub fn list_page(artists: &[Artist]) -> String {
    let items: Vec<String> = artists.iter().map(artist_item).collect();
    let body = if items.is_empty() {
        r#"<p class="empty">No artists listed yet.</p>"#.to_string()
    } else {
        format!(r#"<ul class="items">{}</ul>"#, items.join("\n"))
    };

    layout(
        "Artists",
        None,
        &format!(
            "<h2>Artists</h2>\n{}\n{}",
            search_box("/artists/search", "Find an artist", ""),
            body
        ),
    )
}

pub fn search_page(term: &str, results: &SearchResults<Artist>) -> String {
    let items: Vec<String> = results.data.iter().map(artist_item).collect();
    let plural = if results.count == 1 { "" } else { "s" };

    layout(
        "Artist Search",
        None,
        &format!(
            r#"{search}
        <h3 class="results">Number of search results for "{term}": {count}</h3>
        <p class="summary">Found {count} artist{plural}</p>
        <ul class="items">{items}</ul>"#,
            search = search_box("/artists/search", "Find an artist", term),
            term = escape(term),
            count = results.count,
            plural = plural,
            items = items.join("\n"),
        ),
    )
}

pub fn detail_page(detail: &ArtistDetail) -> String {
    let artist = &detail.artist;
    let shows = &detail.shows;

    let genres: Vec<String> = artist
        .genre_list()
        .into_iter()
        .map(|genre| format!(r#"<span class="genre">{}</span>"#, escape(genre)))
        .collect();

    let seeking = if artist.seeking_venue {
        format!(
            r#"<div class="seeking"><p class="lead">Currently seeking performance venues</p><p>{}</p></div>"#,
            escape(artist.seeking_description.as_deref().unwrap_or_default())
        )
    } else {
        r#"<p class="not-seeking">Not currently seeking performance venues</p>"#.to_string()
    };

    layout(
        &artist.name,
        None,
        &format!(
            r#"<section class="detail">
        <h1>{name}</h1>
        <p class="subtitle">ID: {id}</p>
        <div class="genres">{genres}</div>
        <p><span class="label">Location</span> {city}, {state}</p>
        <p><span class="label">Phone</span> {phone}</p>
        {website}
        {facebook}
        {seeking}
        {image}
        <div class="actions">
            <a class="button" href="/artists/{id}/edit">Edit</a>
        </div>
    </section>
    {upcoming}
    {past}"#,
            id = artist.id,
            name = escape(&artist.name),
            genres = genres.join(" "),
            city = escape(&artist.city),
            state = escape(&artist.state),
            phone = escape(artist.phone.as_deref().unwrap_or("No phone")),
            website = external_link("Website", artist.website.as_deref()),
            facebook = external_link("Facebook", artist.facebook_link.as_deref()),
            seeking = seeking,
            image = image(artist.image_link.as_deref(), &artist.name),
            upcoming = show_section(
                "Upcoming",
                shows.upcoming_shows_count,
                &shows.upcoming_shows,
                Counterpart::Venue
            ),
            past = show_section(
                "Past",
                shows.past_shows_count,
                &shows.past_shows,
                Counterpart::Venue
            ),
        ),
    )
}

pub fn form_page(mode: FormMode, artist: &ArtistForm, errors: &FieldErrors) -> String {
    let (title, heading, action, submit) = match mode {
        FormMode::Create => (
            "New Artist".to_string(),
            "List a new artist".to_string(),
            "/artists/create".to_string(),
            "Create Artist",
        ),
        FormMode::Edit(id) => (
            "Edit Artist".to_string(),
            format!("Edit artist {}", artist.name),
            format!("/artists/{}/edit", id),
            "Edit Artist",
        ),
    };

    let fields = vec![
        text_field("name", "Name", &artist.name, true, errors),
        text_field("city", "City", &artist.city, true, errors),
        text_field("state", "State", &artist.state, true, errors),
        text_field("phone", "Phone", &artist.phone, false, errors),
        text_field("genres", "Genres (comma separated)", &artist.genres, true, errors),
        text_field("image_link", "Image link", &artist.image_link, false, errors),
        text_field("facebook_link", "Facebook link", &artist.facebook_link, false, errors),
        text_field("website", "Website", &artist.website, false, errors),
        checkbox("seeking_venue", "Seeking venues", artist.is_seeking_venue()),
        text_area(
            "seeking_description",
            "Seeking description",
            &artist.seeking_description,
            errors,
        ),
    ];

    layout(&title, None, &form(&heading, &action, &fields, submit))
}
