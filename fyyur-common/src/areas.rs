//! Grouping of venues by (city, state)

use std::collections::HashMap;

use serde::Serialize;

use crate::db::Venue;

/// All venues sharing one exact (city, state) pair
#[derive(Debug, Clone, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<Venue>,
}

/// Group venues by exact (city, state).
///
/// Areas appear in order of first observation; venues keep their input
/// order inside each area.
pub fn group_by_area(venues: impl IntoIterator<Item = Venue>) -> Vec<Area> {
    let mut areas: Vec<Area> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for venue in venues {
        let key = (venue.city.clone(), venue.state.clone());
        match index.get(&key) {
            Some(&position) => areas[position].venues.push(venue),
            None => {
                index.insert(key, areas.len());
                areas.push(Area {
                    city: venue.city.clone(),
                    state: venue.state.clone(),
                    venues: vec![venue],
                });
            }
        }
    }

    areas
}
