//! Upcoming/past show classification
//!
//! A show is upcoming when its start time is strictly after the reference
//! time. Everything else, including a show starting exactly at the
//! reference time, is past.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Anything with a scheduled start time
pub trait Scheduled {
    fn start_time(&self) -> DateTime<Utc>;
}

/// Shows split around a reference time
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedShows<T> {
    pub upcoming_shows: Vec<T>,
    pub past_shows: Vec<T>,
    pub upcoming_shows_count: usize,
    pub past_shows_count: usize,
}

impl<T: Scheduled> ClassifiedShows<T> {
    /// Partition `shows` around `now`, keeping input order within each list
    pub fn classify(shows: impl IntoIterator<Item = T>, now: DateTime<Utc>) -> Self {
        let (upcoming_shows, past_shows): (Vec<T>, Vec<T>) = shows
            .into_iter()
            .partition(|show| is_upcoming(show.start_time(), now));

        Self {
            upcoming_shows_count: upcoming_shows.len(),
            past_shows_count: past_shows.len(),
            upcoming_shows,
            past_shows,
        }
    }
}

impl<T> Default for ClassifiedShows<T> {
    fn default() -> Self {
        Self {
            upcoming_shows: Vec::new(),
            past_shows: Vec::new(),
            upcoming_shows_count: 0,
            past_shows_count: 0,
        }
    }
}

/// Strict greater-than: a show starting right now has already begun
pub fn is_upcoming(start_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start_time > now
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[derive(Debug, Clone, PartialEq)]
    struct Slot(i64, DateTime<Utc>);

    impl Scheduled for Slot {
        fn start_time(&self) -> DateTime<Utc> {
            self.1
        }
    }

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 6, 15, 20, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_input_yields_zero_counts() {
        let classified = ClassifiedShows::<Slot>::classify(Vec::new(), reference());
        assert!(classified.upcoming_shows.is_empty());
        assert!(classified.past_shows.is_empty());
        assert_eq!(classified.upcoming_shows_count, 0);
        assert_eq!(classified.past_shows_count, 0);
    }

    #[test]
    fn test_show_at_reference_time_is_past() {
        let now = reference();
        let classified = ClassifiedShows::classify(vec![Slot(1, now)], now);
        assert_eq!(classified.past_shows, vec![Slot(1, now)]);
        assert_eq!(classified.upcoming_shows_count, 0);
    }

    #[test]
    fn test_partition_keeps_order_and_counts() {
        let now = reference();
        let shows = vec![
            Slot(1, now - Duration::days(30)),
            Slot(2, now + Duration::seconds(1)),
            Slot(3, now - Duration::seconds(1)),
            Slot(4, now + Duration::days(365)),
        ];

        let classified = ClassifiedShows::classify(shows.clone(), now);

        let upcoming: Vec<i64> = classified.upcoming_shows.iter().map(|s| s.0).collect();
        let past: Vec<i64> = classified.past_shows.iter().map(|s| s.0).collect();
        assert_eq!(upcoming, vec![2, 4]);
        assert_eq!(past, vec![1, 3]);
        assert_eq!(classified.upcoming_shows_count, classified.upcoming_shows.len());
        assert_eq!(classified.past_shows_count, classified.past_shows.len());
        assert_eq!(
            classified.upcoming_shows_count + classified.past_shows_count,
            shows.len()
        );
    }

    #[test]
    fn test_every_show_lands_on_the_correct_side() {
        let now = reference();
        let shows: Vec<Slot> = (-50..50)
            .map(|offset| Slot(offset, now + Duration::minutes(offset * 7)))
            .collect();

        let classified = ClassifiedShows::classify(shows, now);

        assert!(classified.upcoming_shows.iter().all(|s| s.1 > now));
        assert!(classified.past_shows.iter().all(|s| s.1 <= now));
        assert_eq!(classified.upcoming_shows_count, 49);
        assert_eq!(classified.past_shows_count, 51);
    }
}
