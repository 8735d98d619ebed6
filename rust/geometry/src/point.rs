// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geographic point and coordinate pair interpretation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A point on the earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Rejects points outside ±90° latitude or ±180° longitude.
    pub fn validate(self) -> Result<Self> {
        if (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon) {
            Ok(self)
        } else {
            Err(Error::InvalidGeometry(format!(
                "point (lat {}, lon {}) is out of range",
                self.lat, self.lon
            )))
        }
    }

    /// Converts to a `geo` point (x = longitude, y = latitude).
    #[inline]
    pub fn to_geo(self) -> geo::Point<f64> {
        geo::Point::new(self.lon, self.lat)
    }
}

/// Order of the two components in a raw coordinate pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrder {
    /// `[lat, lon]`, the convention of the campus room dataset.
    #[default]
    LatLon,
    /// `[lon, lat]`, the RFC 7946 GeoJSON convention.
    LonLat,
}

impl AxisOrder {
    /// Interprets a raw coordinate pair. Extra components (altitude) are ignored.
    pub fn point(self, pair: &[f64]) -> Result<GeoPoint> {
        let (a, b) = match pair {
            [a, b, ..] => (*a, *b),
            _ => {
                return Err(Error::InvalidGeometry(format!(
                    "coordinate has {} component(s), expected at least 2",
                    pair.len()
                )))
            }
        };

        if !a.is_finite() || !b.is_finite() {
            return Err(Error::InvalidGeometry(format!(
                "coordinate [{}, {}] is not finite",
                a, b
            )));
        }

        let point = match self {
            AxisOrder::LatLon => GeoPoint::new(a, b),
            AxisOrder::LonLat => GeoPoint::new(b, a),
        };
        point.validate()
    }
}

impl std::str::FromStr for AxisOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latlon" | "lat,lon" => Ok(AxisOrder::LatLon),
            "lonlat" | "lon,lat" => Ok(AxisOrder::LonLat),
            other => Err(format!("unknown axis order '{}'", other)),
        }
    }
}
