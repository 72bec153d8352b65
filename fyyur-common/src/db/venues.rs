//! Venue database operations

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::areas::{group_by_area, Area};
use crate::db::models::{ShowListing, Venue, VenueDetail, VenueInput};
use crate::schedule::{is_upcoming, ClassifiedShows};
use crate::search::SearchResults;
use crate::{Error, Result};

const VENUE_COLUMNS: &str = "v.id, v.name, v.city, v.state, v.address, v.phone, v.image_link, \
     v.facebook_link, v.website, v.seeking_talent, v.seeking_description";

/// One row of the venue ⟕ shows ⟕ artists join
#[derive(Debug, sqlx::FromRow)]
struct VenueShowRow {
    #[sqlx(flatten)]
    venue: Venue,
    show_id: Option<i64>,
    show_start_time: Option<DateTime<Utc>>,
    show_artist_id: Option<i64>,
    show_artist_name: Option<String>,
    show_artist_image_link: Option<String>,
}

impl VenueShowRow {
    fn listing(&self) -> Option<ShowListing> {
        Some(ShowListing {
            id: self.show_id?,
            venue_id: self.venue.id,
            venue_name: self.venue.name.clone(),
            venue_image_link: self.venue.image_link.clone(),
            artist_id: self.show_artist_id?,
            artist_name: self.show_artist_name.clone()?,
            artist_image_link: self.show_artist_image_link.clone(),
            start_time: self.show_start_time?,
        })
    }
}

/// All venues in insertion order
pub async fn list_venues(pool: &SqlitePool) -> Result<Vec<Venue>> {
    let venues = sqlx::query_as::<_, Venue>(&format!(
        "SELECT {} FROM venues v ORDER BY v.id ASC",
        VENUE_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    Ok(venues)
}

/// All venues grouped by (city, state)
pub async fn list_areas(pool: &SqlitePool) -> Result<Vec<Area>> {
    let venues = list_venues(pool).await?;
    Ok(group_by_area(venues))
}

/// Number of upcoming shows per venue id; venues without any are absent
pub async fn upcoming_show_counts(
    pool: &SqlitePool,
    now: DateTime<Utc>,
) -> Result<HashMap<i64, usize>> {
    let rows = sqlx::query_as::<_, (i64, DateTime<Utc>)>("SELECT venue_id, start_time FROM shows")
        .fetch_all(pool)
        .await?;

    let mut counts = HashMap::new();
    for (venue_id, start_time) in rows {
        if is_upcoming(start_time, now) {
            *counts.entry(venue_id).or_insert(0) += 1;
        }
    }

    Ok(counts)
}

/// Venues whose name contains `term`, ignoring case, in id order
pub async fn search_venues(pool: &SqlitePool, term: &str) -> Result<SearchResults<Venue>> {
    let results = SearchResults::matching(list_venues(pool).await?, term, |venue: &Venue| {
        venue.name.as_str()
    });

    debug!("Venue search {:?} matched {} rows", term, results.count);
    Ok(results)
}

/// Load a venue by id
pub async fn get_venue(pool: &SqlitePool, id: i64) -> Result<Venue> {
    sqlx::query_as::<_, Venue>(&format!(
        "SELECT {} FROM venues v WHERE v.id = ?",
        VENUE_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| Error::NotFound(format!("venue {}", id)))
}

/// Load a venue with its shows split around `now`.
///
/// Uses an outer join so a venue without shows still comes back with
/// empty lists.
pub async fn venue_detail(pool: &SqlitePool, id: i64, now: DateTime<Utc>) -> Result<VenueDetail> {
    let rows = sqlx::query_as::<_, VenueShowRow>(&format!(
        r#"
        SELECT {},
               s.id AS show_id,
               s.start_time AS show_start_time,
               a.id AS show_artist_id,
               a.name AS show_artist_name,
               a.image_link AS show_artist_image_link
        FROM venues v
        LEFT OUTER JOIN shows s ON s.venue_id = v.id
        LEFT OUTER JOIN artists a ON a.id = s.artist_id
        WHERE v.id = ?
        ORDER BY s.start_time ASC, s.id ASC
        "#,
        VENUE_COLUMNS
    ))
    .bind(id)
    .fetch_all(pool)
    .await?;

    let venue = rows
        .first()
        .map(|row| row.venue.clone())
        .ok_or_else(|| Error::NotFound(format!("venue {}", id)))?;
    let shows = ClassifiedShows::classify(rows.iter().filter_map(VenueShowRow::listing), now);

    Ok(VenueDetail { venue, shows })
}

/// Insert a venue and commit
pub async fn create_venue(pool: &SqlitePool, input: &VenueInput) -> Result<Venue> {
    let mut tx = pool.begin().await?;

    let id = sqlx::query(
        r#"
        INSERT INTO venues (
            name, city, state, address, phone, image_link, facebook_link,
            website, seeking_talent, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(&input.image_link)
    .bind(&input.facebook_link)
    .bind(&input.website)
    .bind(input.seeking_talent)
    .bind(&input.seeking_description)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    tx.commit().await?;

    info!("Created venue {} ({})", id, input.name);
    Ok(input.clone().into_venue(id))
}

/// Overwrite every mutable column of an existing venue
pub async fn update_venue(pool: &SqlitePool, id: i64, input: &VenueInput) -> Result<Venue> {
    let mut tx = pool.begin().await?;

    let affected = sqlx::query(
        r#"
        UPDATE venues SET
            name = ?, city = ?, state = ?, address = ?, phone = ?,
            image_link = ?, facebook_link = ?, website = ?,
            seeking_talent = ?, seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(&input.image_link)
    .bind(&input.facebook_link)
    .bind(&input.website)
    .bind(input.seeking_talent)
    .bind(&input.seeking_description)
    .bind(id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if affected == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }

    tx.commit().await?;

    info!("Updated venue {} ({})", id, input.name);
    Ok(input.clone().into_venue(id))
}

/// Delete a venue and, through the foreign key, its shows.
///
/// Returns whether a row was removed; a missing id is not an error.
pub async fn delete_venue(pool: &SqlitePool, id: i64) -> Result<bool> {
    let mut tx = pool.begin().await?;

    let affected = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    tx.commit().await?;

    if affected > 0 {
        info!("Deleted venue {}", id);
    } else {
        debug!("Delete of missing venue {} ignored", id);
    }
    Ok(affected > 0)
}
