//! Form bodies and their validation
//!
//! Forms arrive as `application/x-www-form-urlencoded`. Every field is
//! decoded as text so that a bad value can be reported next to the input
//! and echoed back, instead of failing the whole request.

use chrono::{DateTime, Utc};
use fyyur_common::db::{Artist, ArtistInput, NewShow, Venue, VenueInput};
use fyyur_common::time::{format_show_time, parse_show_time};
use serde::Deserialize;

/// Value a checked checkbox submits
pub const CHECKBOX_MARKER: &str = "y";

/// Column width of the short text columns
pub const MAX_TEXT_LEN: usize = 120;

/// Column width of `image_link`
pub const MAX_IMAGE_LINK_LEN: usize = 500;

/// A checkbox counts as checked only when it carries the literal marker
pub fn checkbox_checked(value: Option<&str>) -> bool {
    value == Some(CHECKBOX_MARKER)
}

fn checkbox_value(checked: bool) -> Option<String> {
    checked.then(|| CHECKBOX_MARKER.to_string())
}

/// Field-level validation messages, in form order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    fn required(&mut self, field: &'static str, value: &str) -> String {
        let value = self.present(field, value);
        if !value.is_empty() {
            self.max_len(field, &value, MAX_TEXT_LEN);
        }
        value
    }

    /// Required with no length limit (the `name` columns are unbounded)
    fn present(&mut self, field: &'static str, value: &str) -> String {
        let value = value.trim();
        if value.is_empty() {
            self.add(field, "This field is required.");
        }
        value.to_string()
    }

    fn optional(&mut self, field: &'static str, value: &str) -> Option<String> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        self.max_len(field, value, MAX_TEXT_LEN);
        Some(value.to_string())
    }

    fn optional_link(&mut self, field: &'static str, value: &str, max: usize) -> Option<String> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        if !is_web_url(value) {
            self.add(field, "Invalid URL.");
        } else {
            self.max_len(field, value, max);
        }
        Some(value.to_string())
    }

    fn max_len(&mut self, field: &'static str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.add(field, format!("Must be at most {} characters.", max));
        }
    }
}

/// Absolute http(s) URL with a host
fn is_web_url(value: &str) -> bool {
    url::Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
        .unwrap_or(false)
}

/// Venue create/edit form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub seeking_talent: Option<String>,
    pub seeking_description: String,
}

impl VenueForm {
    pub fn validate(&self) -> Result<VenueInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        let input = VenueInput {
            name: errors.present("name", &self.name),
            city: errors.required("city", &self.city),
            state: errors.required("state", &self.state),
            address: errors.required("address", &self.address),
            phone: errors.optional("phone", &self.phone),
            image_link: errors.optional_link("image_link", &self.image_link, MAX_IMAGE_LINK_LEN),
            facebook_link: errors.optional_link("facebook_link", &self.facebook_link, MAX_TEXT_LEN),
            website: errors.optional_link("website", &self.website, MAX_TEXT_LEN),
            seeking_talent: checkbox_checked(self.seeking_talent.as_deref()),
            seeking_description: non_blank(&self.seeking_description),
        };

        errors.into_result(input)
    }

    pub fn is_seeking_talent(&self) -> bool {
        checkbox_checked(self.seeking_talent.as_deref())
    }
}

impl From<&Venue> for VenueForm {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone().unwrap_or_default(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            website: venue.website.clone().unwrap_or_default(),
            seeking_talent: checkbox_value(venue.seeking_talent),
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }
}

/// Artist create/edit form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub seeking_venue: Option<String>,
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn validate(&self) -> Result<ArtistInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        let input = ArtistInput {
            name: errors.present("name", &self.name),
            city: errors.required("city", &self.city),
            state: errors.required("state", &self.state),
            phone: errors.optional("phone", &self.phone),
            genres: errors.required("genres", &normalize_genres(&self.genres)),
            image_link: errors.optional_link("image_link", &self.image_link, MAX_IMAGE_LINK_LEN),
            facebook_link: errors.optional_link("facebook_link", &self.facebook_link, MAX_TEXT_LEN),
            website: errors.optional_link("website", &self.website, MAX_TEXT_LEN),
            seeking_venue: checkbox_checked(self.seeking_venue.as_deref()),
            seeking_description: non_blank(&self.seeking_description),
        };

        errors.into_result(input)
    }

    pub fn is_seeking_venue(&self) -> bool {
        checkbox_checked(self.seeking_venue.as_deref())
    }
}

impl From<&Artist> for ArtistForm {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone().unwrap_or_default(),
            genres: artist.genres.clone(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            website: artist.website.clone().unwrap_or_default(),
            seeking_venue: checkbox_value(artist.seeking_venue),
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }
}

/// "Jazz ,, Rock" -> "Jazz,Rock"
fn normalize_genres(raw: &str) -> String {
    fyyur_common::db::split_genres(raw).join(",")
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Show create form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    /// Blank form with the start time preset to `now`
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            start_time: format_show_time(&now),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<NewShow, FieldErrors> {
        let mut errors = FieldErrors::default();

        let artist_id = parse_row_id(&mut errors, "artist_id", &self.artist_id);
        let venue_id = parse_row_id(&mut errors, "venue_id", &self.venue_id);
        let start_time = if self.start_time.trim().is_empty() {
            errors.add("start_time", "This field is required.");
            None
        } else {
            let parsed = parse_show_time(&self.start_time);
            if parsed.is_none() {
                errors.add("start_time", "Not a valid datetime value.");
            }
            parsed
        };

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) => Ok(NewShow {
                venue_id,
                artist_id,
                start_time,
            }),
            _ => Err(errors),
        }
    }
}

fn parse_row_id(errors: &mut FieldErrors, field: &'static str, raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.add(field, "This field is required.");
        return None;
    }
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.add(field, "Must be a positive whole number.");
            None
        }
    }
}

/// Body of the two search endpoints
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub search_term: String,
}
