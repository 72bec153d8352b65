//! Show database operations

use sqlx::SqlitePool;
use tracing::info;

use crate::db::models::{NewShow, Show, ShowListing};
use crate::Result;

/// Every show with its venue and artist display fields, soonest first
pub async fn list_shows(pool: &SqlitePool) -> Result<Vec<ShowListing>> {
    let shows = sqlx::query_as::<_, ShowListing>(
        r#"
        SELECT s.id,
               s.venue_id,
               v.name AS venue_name,
               v.image_link AS venue_image_link,
               s.artist_id,
               a.name AS artist_name,
               a.image_link AS artist_image_link,
               s.start_time
        FROM shows s
        JOIN venues v ON v.id = s.venue_id
        JOIN artists a ON a.id = s.artist_id
        ORDER BY s.start_time ASC, s.id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(shows)
}

/// Number of stored shows
pub async fn count_shows(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shows")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Insert a show and commit.
///
/// An unknown venue or artist id fails the foreign key check and nothing
/// is written.
pub async fn create_show(pool: &SqlitePool, show: &NewShow) -> Result<Show> {
    let mut tx = pool.begin().await?;

    let id = sqlx::query("INSERT INTO shows (venue_id, artist_id, start_time) VALUES (?, ?, ?)")
        .bind(show.venue_id)
        .bind(show.artist_id)
        .bind(show.start_time)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

    tx.commit().await?;

    info!(
        "Created show {} (venue {}, artist {}) at {}",
        id, show.venue_id, show.artist_id, show.start_time
    );
    Ok(Show {
        id,
        venue_id: show.venue_id,
        artist_id: show.artist_id,
        start_time: show.start_time,
    })
}
