// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pipeline configuration.
//!
//! Defaults reproduce the campus dataset: German function labels and
//! property names, coordinate pairs stored as `[lat, lon]`.

use room_distances_geometry::AxisOrder;
use serde::{Deserialize, Serialize};

/// Function labels that identify an occupiable room.
pub const DEFAULT_ROOM_TYPES: &[&str] = &["Hörsaal", "PC-Pool", "Vorlesung", "Seminar", "Labor"];

/// Function label that identifies a staircase.
pub const DEFAULT_STAIRCASE_KEYWORD: &str = "Treppenhaus";

/// Meters of walking added per floor level.
pub const DEFAULT_FLOOR_PENALTY_METERS: f64 = 5.0;

/// Names of the feature properties read by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyNames {
    /// Free-text function / purpose of the space.
    pub function: String,
    pub building: String,
    pub floor: String,
    /// Room name, used as the matrix key.
    pub name: String,
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self {
            function: "Funktion".into(),
            building: "Gebaeude".into(),
            floor: "Ebene".into(),
            name: "Raum".into(),
        }
    }
}

/// Configuration for filtering features and estimating distances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceConfig {
    /// Substrings of the function property that mark a room (case-sensitive).
    pub room_type_keywords: Vec<String>,
    /// Substring of the function property that marks a staircase.
    pub staircase_keyword: String,
    pub floor_penalty_meters: f64,
    /// How raw coordinate pairs are read.
    pub axis_order: AxisOrder,
    pub properties: PropertyNames,
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            room_type_keywords: DEFAULT_ROOM_TYPES.iter().map(|s| s.to_string()).collect(),
            staircase_keyword: DEFAULT_STAIRCASE_KEYWORD.into(),
            floor_penalty_meters: DEFAULT_FLOOR_PENALTY_METERS,
            axis_order: AxisOrder::default(),
            properties: PropertyNames::default(),
        }
    }
}

impl DistanceConfig {
    /// Replaces the room keywords.
    pub fn with_room_types<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.room_type_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_staircase_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.staircase_keyword = keyword.into();
        self
    }

    pub fn with_axis_order(mut self, order: AxisOrder) -> Self {
        self.axis_order = order;
        self
    }
}
