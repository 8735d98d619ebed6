// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! GeoJSON input model.
//!
//! Only the parts of a feature collection the pipeline reads are typed:
//! polygonal geometry and a free-form property map. Everything else in the
//! document is ignored on deserialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// A parsed GeoJSON `FeatureCollection`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// A single GeoJSON feature.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

/// Feature geometry. Non-polygonal types are kept as `Unsupported`.
///
/// Coordinates stay untyped until a ring is actually needed, so a malformed
/// geometry only matters on features that get classified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon {
        #[serde(default)]
        coordinates: Value,
    },
    MultiPolygon {
        #[serde(default)]
        coordinates: Value,
    },
    #[serde(other)]
    Unsupported,
}

impl Geometry {
    /// The outer ring of the (first) polygon as numeric coordinate tuples.
    pub fn outer_ring(&self) -> std::result::Result<Vec<Vec<f64>>, String> {
        let ring = match self {
            Geometry::Polygon { coordinates } => coordinates.get(0),
            Geometry::MultiPolygon { coordinates } => coordinates.get(0).and_then(|p| p.get(0)),
            Geometry::Unsupported => None,
        }
        .and_then(Value::as_array)
        .ok_or_else(|| format!("{} geometry has no polygon ring", self.type_name()))?;

        ring.iter()
            .enumerate()
            .map(|(i, vertex)| {
                vertex
                    .as_array()
                    .and_then(|c| c.iter().map(Value::as_f64).collect::<Option<Vec<_>>>())
                    .ok_or_else(|| format!("vertex {} is not a list of numbers: {}", i, vertex))
            })
            .collect()
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Polygon { .. } => "Polygon",
            Geometry::MultiPolygon { .. } => "MultiPolygon",
            Geometry::Unsupported => "unsupported",
        }
    }
}

impl Feature {
    /// Property value as text. Strings are returned verbatim, numbers and
    /// booleans in their JSON form; null and missing values yield `None`.
    pub fn property_text(&self, key: &str) -> Option<String> {
        match self.properties.as_ref()?.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
