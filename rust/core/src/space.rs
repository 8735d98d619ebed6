// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rooms and staircases with their precomputed centroids.
//!
//! Both are built once from a classified feature and never change
//! afterwards. The input feature is left untouched.

use room_distances_geometry::{ring_centroid, GeoPoint};
use serde::Serialize;

use crate::config::DistanceConfig;
use crate::error::{Error, Result};
use crate::feature::Feature;

/// Floor level as labelled in the source data.
///
/// Equality is on the label; the numeric level is parsed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Floor(String);

impl Floor {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }

    /// Numeric level, e.g. `-1`, `0`, `2.5`.
    pub fn level(&self) -> Option<f64> {
        self.0.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl std::fmt::Display for Floor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Common view of rooms and staircases used by the locator.
pub trait Space {
    fn building(&self) -> &str;
    fn floor(&self) -> &Floor;
    fn centroid(&self) -> GeoPoint;
}

/// An occupiable room; its name is the matrix key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    pub name: String,
    pub building: String,
    pub floor: Floor,
    pub outline: Vec<Vec<f64>>,
    pub centroid: GeoPoint,
}

/// A staircase, only ever used as a waypoint between floors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Staircase {
    pub name: Option<String>,
    pub building: String,
    pub floor: Floor,
    pub outline: Vec<Vec<f64>>,
    pub centroid: GeoPoint,
}

impl Room {
    pub fn new(
        name: impl Into<String>,
        building: impl Into<String>,
        floor: Floor,
        centroid: GeoPoint,
    ) -> Self {
        Self {
            name: name.into(),
            building: building.into(),
            floor,
            outline: Vec::new(),
            centroid,
        }
    }

    /// Builds a room from the feature at `index` in the collection.
    pub fn from_feature(index: usize, feature: &Feature, config: &DistanceConfig) -> Result<Self> {
        let label = feature_label(index);
        let key = &config.properties.name;
        let name = feature
            .property_text(key)
            .ok_or_else(|| Error::room_data(&label, format!("missing '{}'", key)))?;
        let parts = Parts::extract(&format!("room '{}' ({})", name, label), feature, config)?;

        Ok(Self {
            name,
            building: parts.building,
            floor: parts.floor,
            outline: parts.outline,
            centroid: parts.centroid,
        })
    }

    /// Numeric floor level, failing with `InvalidRoomData` when the label is not a number.
    pub fn level(&self) -> Result<f64> {
        self.floor.level().ok_or_else(|| {
            Error::room_data(&self.name, format!("floor '{}' is not numeric", self.floor))
        })
    }
}

impl Staircase {
    pub fn new(building: impl Into<String>, floor: Floor, centroid: GeoPoint) -> Self {
        Self {
            name: None,
            building: building.into(),
            floor,
            outline: Vec::new(),
            centroid,
        }
    }

    pub fn from_feature(index: usize, feature: &Feature, config: &DistanceConfig) -> Result<Self> {
        let label = feature_label(index);
        let name = feature.property_text(&config.properties.name);
        let parts = Parts::extract(&format!("staircase ({})", label), feature, config)?;

        Ok(Self {
            name,
            building: parts.building,
            floor: parts.floor,
            outline: parts.outline,
            centroid: parts.centroid,
        })
    }
}

impl Space for Room {
    fn building(&self) -> &str {
        &self.building
    }

    fn floor(&self) -> &Floor {
        &self.floor
    }

    fn centroid(&self) -> GeoPoint {
        self.centroid
    }
}

impl Space for Staircase {
    fn building(&self) -> &str {
        &self.building
    }

    fn floor(&self) -> &Floor {
        &self.floor
    }

    fn centroid(&self) -> GeoPoint {
        self.centroid
    }
}

fn feature_label(index: usize) -> String {
    format!("feature #{}", index)
}

/// Attributes shared by rooms and staircases.
struct Parts {
    building: String,
    floor: Floor,
    outline: Vec<Vec<f64>>,
    centroid: GeoPoint,
}

impl Parts {
    fn extract(label: &str, feature: &Feature, config: &DistanceConfig) -> Result<Self> {
        let props = &config.properties;
        let building = feature
            .property_text(&props.building)
            .ok_or_else(|| Error::room_data(label, format!("missing '{}'", props.building)))?;
        let floor = feature
            .property_text(&props.floor)
            .map(Floor::new)
            .ok_or_else(|| Error::room_data(label, format!("missing '{}'", props.floor)))?;

        let invalid = |reason: String| Error::InvalidGeometry {
            feature: label.to_string(),
            source: room_distances_geometry::Error::InvalidGeometry(reason),
        };
        let geometry = feature
            .geometry
            .as_ref()
            .ok_or_else(|| invalid("geometry is null".into()))?;
        let ring = geometry.outer_ring().map_err(invalid)?;

        let centroid =
            ring_centroid(&ring, config.axis_order).map_err(|source| Error::InvalidGeometry {
                feature: label.to_string(),
                source,
            })?;

        Ok(Self {
            building,
            floor,
            outline: ring,
            centroid,
        })
    }
}
