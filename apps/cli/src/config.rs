// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Job configuration loaded from environment variables.

use std::fmt;
use std::path::PathBuf;

use room_distances_core::{AxisOrder, DistanceConfig};

/// Default dataset location.
pub const DEFAULT_MAP_SOURCE: &str = "https://assets.neuland.app/rooms_neuland_v2.3.geojson";

/// Where the feature collection is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapSource {
    Url(String),
    File(PathBuf),
}

impl MapSource {
    /// `http://` and `https://` locations are fetched, anything else is a file path.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            MapSource::Url(location.to_string())
        } else {
            MapSource::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for MapSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapSource::Url(url) => f.write_str(url),
            MapSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Job configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Dataset location.
    pub map_source: MapSource,
    /// Path of the JSON matrix to write.
    pub output_path: PathBuf,
    /// HTTP timeout in seconds.
    pub fetch_timeout_secs: u64,
    /// Indent the written JSON.
    pub pretty_output: bool,
    /// Keywords, floor penalty and axis order handed to the pipeline.
    pub distance: DistanceConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = DistanceConfig::default();

        let room_type_keywords = var("ROOM_TYPES")
            .map(|list| {
                list.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|list| !list.is_empty())
            .unwrap_or(defaults.room_type_keywords);

        Self {
            map_source: MapSource::parse(
                &var("MAP_SOURCE").unwrap_or_else(|| DEFAULT_MAP_SOURCE.into()),
            ),
            output_path: var("OUTPUT_PATH")
                .unwrap_or_else(|| "room-distances.json".into())
                .into(),
            fetch_timeout_secs: var("FETCH_TIMEOUT_SECS")
                .unwrap_or_else(|| "5".into())
                .parse()
                .unwrap_or(5),
            pretty_output: var("PRETTY_OUTPUT")
                .unwrap_or_else(|| "false".into())
                .parse()
                .unwrap_or(false),
            distance: DistanceConfig {
                room_type_keywords,
                staircase_keyword: var("STAIRCASE_KEYWORD")
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or(defaults.staircase_keyword),
                floor_penalty_meters: var("FLOOR_PENALTY_METERS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.floor_penalty_meters),
                axis_order: var("COORDINATE_ORDER")
                    .and_then(|v| v.parse::<AxisOrder>().ok())
                    .unwrap_or(defaults.axis_order),
                properties: defaults.properties,
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
