// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Feature classification into rooms and staircases.

use crate::config::DistanceConfig;
use crate::error::Result;
use crate::feature::{Feature, FeatureCollection};
use crate::space::{Room, Staircase};

/// What a feature contributes to the distance matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceKind {
    Room,
    Staircase,
}

/// Classifies a feature by its function property.
///
/// Features without geometry are never classified. Matching is a
/// case-sensitive substring test; room keywords are checked first, so a
/// feature matching both sets counts as a room only.
pub fn classify(feature: &Feature, config: &DistanceConfig) -> Option<SpaceKind> {
    feature.geometry.as_ref()?;

    let function = feature
        .property_text(&config.properties.function)
        .unwrap_or_default();

    if config
        .room_type_keywords
        .iter()
        .any(|keyword| function.contains(keyword.as_str()))
    {
        Some(SpaceKind::Room)
    } else if !config.staircase_keyword.is_empty()
        && function.contains(config.staircase_keyword.as_str())
    {
        Some(SpaceKind::Staircase)
    } else {
        None
    }
}

/// Feature indices grouped by kind, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub rooms: Vec<usize>,
    pub staircases: Vec<usize>,
}

/// Partitions a collection without building any spaces.
pub fn partition(collection: &FeatureCollection, config: &DistanceConfig) -> Partition {
    let mut result = Partition::default();
    for (index, feature) in collection.features.iter().enumerate() {
        match classify(feature, config) {
            Some(SpaceKind::Room) => result.rooms.push(index),
            Some(SpaceKind::Staircase) => result.staircases.push(index),
            None => {}
        }
    }
    result
}

/// Rooms and staircases of a collection, each carrying its centroid.
#[derive(Debug, Clone, Default)]
pub struct Spaces {
    pub rooms: Vec<Room>,
    pub staircases: Vec<Staircase>,
}

/// Filters the collection and builds rooms and staircases.
///
/// Fails on the first classified feature with missing attributes or an
/// unusable polygon.
pub fn extract_spaces(collection: &FeatureCollection, config: &DistanceConfig) -> Result<Spaces> {
    let Partition { rooms, staircases } = partition(collection, config);

    tracing::debug!(
        features = collection.features.len(),
        rooms = rooms.len(),
        staircases = staircases.len(),
        "Classified features"
    );

    let rooms = rooms
        .into_iter()
        .map(|i| Room::from_feature(i, &collection.features[i], config))
        .collect::<Result<Vec<_>>>()?;
    let staircases = staircases
        .into_iter()
        .map(|i| Staircase::from_feature(i, &collection.features[i], config))
        .collect::<Result<Vec<_>>>()?;

    Ok(Spaces { rooms, staircases })
}
