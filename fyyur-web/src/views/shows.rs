//! Show pages and the show lists embedded in detail pages

use fyyur_common::db::ShowListing;

use super::forms::{form, text_field};
use super::{escape, image, layout, show_time};
use crate::forms::{FieldErrors, ShowForm};

/// Which side of a show a detail page lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counterpart {
    Artist,
    Venue,
}

fn show_card(show: &ShowListing, counterpart: Counterpart) -> String {
    let (href, name, image_link) = match counterpart {
        Counterpart::Artist => (
            format!("/artists/{}", show.artist_id),
            &show.artist_name,
            show.artist_image_link.as_deref(),
        ),
        Counterpart::Venue => (
            format!("/venues/{}", show.venue_id),
            &show.venue_name,
            show.venue_image_link.as_deref(),
        ),
    };

    format!(
        r#"<div class="show-card">
            {image}
            <h5><a href="{href}">{name}</a></h5>
            <h6>{time}</h6>
        </div>"#,
        image = image(image_link, name),
        href = href,
        name = escape(name),
        time = show_time(&show.start_time),
    )
}

/// "N Upcoming Shows" / "N Past Shows" section of a detail page
pub fn show_section(
    heading: &str,
    count: usize,
    shows: &[ShowListing],
    counterpart: Counterpart,
) -> String {
    let cards: Vec<String> = shows.iter().map(|s| show_card(s, counterpart)).collect();
    let plural = if count == 1 { "" } else { "s" };

    format!(
        r#"<section class="shows">
        <h3>{count} {heading} Show{plural}</h3>
        <div class="show-cards">{cards}</div>
    </section>"#,
        count = count,
        heading = escape(heading),
        plural = plural,
        cards = cards.join("\n"),
    )
}

pub fn list_page(shows: &[ShowListing]) -> String {
    let rows: Vec<String> = shows
        .iter()
        .map(|show| {
            format!(
                r#"<li class="show">
                {image}
                <div>
                    <a href="/artists/{artist_id}">{artist}</a> at
                    <a href="/venues/{venue_id}">{venue}</a>
                    <div class="time">{time}</div>
                </div>
            </li>"#,
                image = image(show.artist_image_link.as_deref(), &show.artist_name),
                artist_id = show.artist_id,
                artist = escape(&show.artist_name),
                venue_id = show.venue_id,
                venue = escape(&show.venue_name),
                time = show_time(&show.start_time),
            )
        })
        .collect();

    let content = if rows.is_empty() {
        r#"<h2>Shows</h2><p class="empty">No shows listed yet.</p>"#.to_string()
    } else {
        format!(r#"<h2>Shows</h2><ul class="shows">{}</ul>"#, rows.join("\n"))
    };

    layout("Shows", None, &content)
}

pub fn form_page(show: &ShowForm, errors: &FieldErrors) -> String {
    let fields = vec![
        text_field("artist_id", "Artist ID", &show.artist_id, true, errors),
        text_field("venue_id", "Venue ID", &show.venue_id, true, errors),
        text_field(
            "start_time",
            "Start time (YYYY-MM-DD HH:MM:SS, UTC)",
            &show.start_time,
            true,
            errors,
        ),
    ];

    layout(
        "New Show",
        None,
        &form("List a new show", "/shows/create", &fields, "Create Show"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn listing() -> ShowListing {
        ShowListing {
            id: 1,
            venue_id: 2,
            venue_name: "The Musical Hop".to_string(),
            venue_image_link: None,
            artist_id: 3,
            artist_name: "Guns N Petals".to_string(),
            artist_image_link: Some("https://example.com/petals.jpg".to_string()),
            start_time: Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_section_links_counterpart() {
        let venue_side = show_section("Upcoming", 1, &[listing()], Counterpart::Artist);
        assert!(venue_side.contains("1 Upcoming Show<"));
        assert!(venue_side.contains(r#"href="/artists/3""#));
        assert!(venue_side.contains("petals.jpg"));

        let artist_side = show_section("Past", 0, &[], Counterpart::Venue);
        assert!(artist_side.contains("0 Past Shows"));
    }

    #[test]
    fn test_list_page() {
        let page = list_page(&[listing()]);
        assert!(page.contains("Guns N Petals"));
        assert!(page.contains("The Musical Hop"));
        assert!(page.contains("Tue 05, 21, 2019 9:30PM"));
        assert!(list_page(&[]).contains("No shows listed yet."));
    }
}
