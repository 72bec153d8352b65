//! Venue pages

use std::collections::HashMap;

use fyyur_common::db::{Venue, VenueDetail};
use fyyur_common::{Area, SearchResults};

use super::forms::{checkbox, form, text_area, text_field, FormMode};
use super::shows::{show_section, Counterpart};
use super::{escape, external_link, image, layout, search_box};
use crate::forms::{FieldErrors, VenueForm};

fn venue_item(venue: &Venue, upcoming: Option<usize>) -> String {
    let upcoming = upcoming
        .map(|n| format!(r#"<span class="count">{} upcoming</span>"#, n))
        .unwrap_or_default();
    format!(
        r#"<li><a href="/venues/{}">{}</a> {}</li>"#,
        venue.id,
        escape(&venue.name),
        upcoming
    )
}

/// Venues grouped by area, each with its number of upcoming shows
pub fn list_page(areas: &[Area], upcoming: &HashMap<i64, usize>) -> String {
    let sections: Vec<String> = areas
        .iter()
        .map(|area| {
            let items: Vec<String> = area
                .venues
                .iter()
                .map(|v| venue_item(v, Some(upcoming.get(&v.id).copied().unwrap_or(0))))
                .collect();
            format!(
                r#"<section class="area">
            <h3>{}, {}</h3>
            <ul class="items">{}</ul>
        </section>"#,
                escape(&area.city),
                escape(&area.state),
                items.join("\n")
            )
        })
        .collect();

    let body = if sections.is_empty() {
        r#"<p class="empty">No venues listed yet.</p>"#.to_string()
    } else {
        sections.join("\n")
    };

    layout(
        "Venues",
        None,
        &format!(
            "<h2>Venues</h2>\n{}\n{}",
            search_box("/venues/search", "Find a venue", ""),
            body
        ),
    )
}

pub fn search_page(term: &str, results: &SearchResults<Venue>) -> String {
    let items: Vec<String> = results.data.iter().map(|v| venue_item(v, None)).collect();
    let plural = if results.count == 1 { "" } else { "s" };

    layout(
        "Venue Search",
        None,
        &format!(
            r#"{search}
        <h3 class="results">Number of search results for "{term}": {count}</h3>
        <p class="summary">Found {count} venue{plural}</p>
        <ul class="items">{items}</ul>"#,
            search = search_box("/venues/search", "Find a venue", term),
            term = escape(term),
            count = results.count,
            plural = plural,
            items = items.join("\n"),
        ),
    )
}

pub fn detail_page(detail: &VenueDetail) -> String {
    let venue = &detail.venue;
    let shows = &detail.shows;

    let seeking = if venue.seeking_talent {
        format!(
            r#"<div class="seeking"><p class="lead">Currently seeking talent</p><p>{}</p></div>"#,
            escape(venue.seeking_description.as_deref().unwrap_or_default())
        )
    } else {
        r#"<p class="not-seeking">Not currently seeking talent</p>"#.to_string()
    };

    layout(
        &venue.name,
        None,
        &format!(
            r#"<section class="detail" data-venue-id="{id}">
        <h1>{name}</h1>
        <p class="subtitle">ID: {id}</p>
        <p><span class="label">Address</span> {address}</p>
        <p><span class="label">Location</span> {city}, {state}</p>
        <p><span class="label">Phone</span> {phone}</p>
        {website}
        {facebook}
        {seeking}
        {image}
        <div class="actions">
            <a class="button" href="/venues/{id}/edit">Edit</a>
            <button class="danger" data-delete-venue="{id}">Delete</button>
        </div>
    </section>
    {upcoming}
    {past}"#,
            id = venue.id,
            name = escape(&venue.name),
            address = escape(&venue.address),
            city = escape(&venue.city),
            state = escape(&venue.state),
            phone = escape(venue.phone.as_deref().unwrap_or("No phone")),
            website = external_link("Website", venue.website.as_deref()),
            facebook = external_link("Facebook", venue.facebook_link.as_deref()),
            seeking = seeking,
            image = image(venue.image_link.as_deref(), &venue.name),
            upcoming = show_section(
                "Upcoming",
                shows.upcoming_shows_count,
                &shows.upcoming_shows,
                Counterpart::Artist
            ),
            past = show_section(
                "Past",
                shows.past_shows_count,
                &shows.past_shows,
                Counterpart::Artist
            ),
        ),
    )
}

pub fn form_page(mode: FormMode, venue: &VenueForm, errors: &FieldErrors) -> String {
    let (title, heading, action, submit) = match mode {
        FormMode::Create => (
            "New Venue".to_string(),
            "List a new venue".to_string(),
            "/venues/create".to_string(),
            "Create Venue",
        ),
        FormMode::Edit(id) => (
            "Edit Venue".to_string(),
            format!("Edit venue {}", venue.name),
            format!("/venues/{}/edit", id),
            "Edit Venue",
        ),
    };

    let fields = vec![
        text_field("name", "Name", &venue.name, true, errors),
        text_field("city", "City", &venue.city, true, errors),
        text_field("state", "State", &venue.state, true, errors),
        text_field("address", "Address", &venue.address, true, errors),
        text_field("phone", "Phone", &venue.phone, false, errors),
        text_field("image_link", "Image link", &venue.image_link, false, errors),
        text_field("facebook_link", "Facebook link", &venue.facebook_link, false, errors),
        text_field("website", "Website", &venue.website, false, errors),
        checkbox("seeking_talent", "Seeking talent", venue.is_seeking_talent()),
        text_area(
            "seeking_description",
            "Seeking description",
            &venue.seeking_description,
            errors,
        ),
    ];

    layout(&title, None, &form(&heading, &action, &fields, submit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(id: i64, name: &str) -> Venue {
        Venue {
            id,
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_list_page_shows_upcoming_counts() {
        let areas = vec![Area {
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            venues: vec![venue(1, "The Musical Hop"), venue(3, "Park Square")],
        }];
        let upcoming = HashMap::from([(1, 2)]);

        let page = list_page(&areas, &upcoming);
        assert!(page.contains("<h3>San Francisco, CA</h3>"));
        assert!(page.contains(r#"<a href="/venues/1">The Musical Hop</a> <span class="count">2 upcoming</span>"#));
        assert!(page.contains(r#"<a href="/venues/3">Park Square</a> <span class="count">0 upcoming</span>"#));
    }

    #[test]
    fn test_form_page_action_follows_mode() {
        let form = VenueForm::from(&venue(5, "The Musical Hop"));
        let errors = FieldErrors::default();

        assert!(form_page(FormMode::Create, &form, &errors).contains(r#"action="/venues/create""#));
        let edit = form_page(FormMode::Edit(5), &form, &errors);
        assert!(edit.contains(r#"action="/venues/5/edit""#));
        assert!(edit.contains(r#"value="The Musical Hop""#));
    }
}
