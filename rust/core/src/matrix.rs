// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room-by-room distance matrix.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::DistanceConfig;
use crate::error::{Error, Result};
use crate::estimator::DistanceEstimator;
use crate::space::{Room, Staircase};

/// Distances in meters keyed by room name, then room name.
///
/// Serializes as a nested JSON object: `{"A001": {"A001": 0, "A002": 17}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistanceMatrix {
    rows: BTreeMap<String, BTreeMap<String, i64>>,
}

impl DistanceMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distance from `from` to `to`, if both are in the matrix.
    pub fn get(&self, from: &str, to: &str) -> Option<i64> {
        self.rows.get(from)?.get(to).copied()
    }

    /// Number of rooms (rows).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn room_names(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// Replaces the row for `from`.
    pub fn insert_row(&mut self, from: String, row: BTreeMap<String, i64>) {
        self.rows.insert(from, row);
    }

    /// True when every row has exactly one column per row key.
    pub fn is_square(&self) -> bool {
        self.rows.values().all(|row| {
            row.len() == self.rows.len() && row.keys().all(|k| self.rows.contains_key(k))
        })
    }
}

/// Runs the estimator over every ordered pair of rooms.
///
/// Each room's nearest staircase is located once up front. Rooms sharing a
/// name collapse into a single row and column; the later room wins.
pub fn build_matrix(
    rooms: &[Room],
    staircases: &[Staircase],
    config: &DistanceConfig,
) -> Result<DistanceMatrix> {
    for (index, staircase) in staircases.iter().enumerate() {
        staircase
            .centroid
            .validate()
            .map_err(|source| Error::InvalidGeometry {
                feature: format!("staircase #{}", index),
                source,
            })?;
    }

    let estimator = DistanceEstimator::new(staircases, config);
    let nearest: Vec<_> = rooms.iter().map(|room| estimator.nearest(room)).collect();

    let mut seen = FxHashSet::default();
    for room in rooms {
        if !seen.insert(room.name.as_str()) {
            tracing::warn!(
                room = %room.name,
                building = %room.building,
                "Duplicate room name, later room wins"
            );
        }
    }

    let sentinels = nearest.iter().filter(|n| n.is_sentinel()).count();
    tracing::debug!(
        rooms = rooms.len(),
        staircases = staircases.len(),
        rooms_without_staircase = sentinels,
        "Building distance matrix"
    );

    let mut matrix = DistanceMatrix::new();
    for (a, near_a) in rooms.iter().zip(&nearest) {
        let mut row = BTreeMap::new();
        for (b, near_b) in rooms.iter().zip(&nearest) {
            row.insert(b.name.clone(), estimator.estimate_with(a, near_a, b, near_b)?);
        }
        matrix.insert_row(a.name.clone(), row);
    }

    Ok(matrix)
}
