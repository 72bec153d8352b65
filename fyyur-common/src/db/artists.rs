//! Artist database operations

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::db::models::{Artist, ArtistDetail, ArtistInput, ShowListing};
use crate::schedule::ClassifiedShows;
use crate::search::SearchResults;
use crate::{Error, Result};

const ARTIST_COLUMNS: &str = "a.id, a.name, a.city, a.state, a.phone, a.genres, a.image_link, \
     a.facebook_link, a.website, a.seeking_venue, a.seeking_description";

/// One row of the artist ⟕ shows ⟕ venues join
#[derive(Debug, sqlx::FromRow)]
struct ArtistShowRow {
    #[sqlx(flatten)]
    artist: Artist,
    show_id: Option<i64>,
    show_start_time: Option<DateTime<Utc>>,
    show_venue_id: Option<i64>,
    show_venue_name: Option<String>,
    show_venue_image_link: Option<String>,
}

impl ArtistShowRow {
    fn listing(&self) -> Option<ShowListing> {
        Some(ShowListing {
            id: self.show_id?,
            venue_id: self.show_venue_id?,
            venue_name: self.show_venue_name.clone()?,
            venue_image_link: self.show_venue_image_link.clone(),
            artist_id: self.artist.id,
            artist_name: self.artist.name.clone(),
            artist_image_link: self.artist.image_link.clone(),
            start_time: self.show_start_time?,
        })
    }
}

/// All artists in insertion order
pub async fn list_artists(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let artists = sqlx::query_as::<_, Artist>(&format!(
        "SELECT {} FROM artists a ORDER BY a.id ASC",
        ARTIST_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    Ok(artists)
}

/// Artists whose name contains `term`, ignoring case, in id order
pub async fn search_artists(pool: &SqlitePool, term: &str) -> Result<SearchResults<Artist>> {
    let results = SearchResults::matching(list_artists(pool).await?, term, |artist: &Artist| {
        artist.name.as_str()
    });

    debug!("Artist search {:?} matched {} rows", term, results.count);
    Ok(results)
}

/// Load an artist by id
pub async fn get_artist(pool: &SqlitePool, id: i64) -> Result<Artist> {
    sqlx::query_as::<_, Artist>(&format!(
        "SELECT {} FROM artists a WHERE a.id = ?",
        ARTIST_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| Error::NotFound(format!("artist {}", id)))
}

/// Load an artist with its shows split around `now`
pub async fn artist_detail(
    pool: &SqlitePool,
    id: i64,
    now: DateTime<Utc>,
) -> Result<ArtistDetail> {
    let rows = sqlx::query_as::<_, ArtistShowRow>(&format!(
        r#"
        SELECT {},
               s.id AS show_id,
               s.start_time AS show_start_time,
               v.id AS show_venue_id,
               v.name AS show_venue_name,
               v.image_link AS show_venue_image_link
        FROM artists a
        LEFT OUTER JOIN shows s ON s.artist_id = a.id
        LEFT OUTER JOIN venues v ON v.id = s.venue_id
        WHERE a.id = ?
        ORDER BY s.start_time ASC, s.id ASC
        "#,
        ARTIST_COLUMNS
    ))
    .bind(id)
    .fetch_all(pool)
    .await?;

    let artist = rows
        .first()
        .map(|row| row.artist.clone())
        .ok_or_else(|| Error::NotFound(format!("artist {}", id)))?;
    let shows = ClassifiedShows::classify(rows.iter().filter_map(ArtistShowRow::listing), now);

    Ok(ArtistDetail { artist, shows })
}

/// Insert an artist and commit
pub async fn create_artist(pool: &SqlitePool, input: &ArtistInput) -> Result<Artist> {
    let mut tx = pool.begin().await?;

    let id = sqlx::query(
        r#"
        INSERT INTO artists (
            name, city, state, phone, genres, image_link, facebook_link,
            website, seeking_venue, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.phone)
    .bind(&input.genres)
    .bind(&input.image_link)
    .bind(&input.facebook_link)
    .bind(&input.website)
    .bind(input.seeking_venue)
    .bind(&input.seeking_description)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    tx.commit().await?;

    info!("Created artist {} ({})", id, input.name);
    Ok(input.clone().into_artist(id))
}

/// Overwrite every mutable column of an existing artist
pub async fn update_artist(pool: &SqlitePool, id: i64, input: &ArtistInput) -> Result<Artist> {
    let mut tx = pool.begin().await?;

    let affected = sqlx::query(
        r#"
        UPDATE artists SET
            name = ?, city = ?, state = ?, phone = ?, genres = ?,
            image_link = ?, facebook_link = ?, website = ?,
            seeking_venue = ?, seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.phone)
    .bind(&input.genres)
    .bind(&input.image_link)
    .bind(&input.facebook_link)
    .bind(&input.website)
    .bind(input.seeking_venue)
    .bind(&input.seeking_description)
    .bind(id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if affected == 0 {
        return Err(Error::NotFound(format!("artist {}", id)));
    }

    tx.commit().await?;

    info!("Updated artist {} ({})", id, input.name);
    Ok(input.clone().into_artist(id))
}
