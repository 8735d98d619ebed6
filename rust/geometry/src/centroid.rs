// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vertex-mean centroid of a polygon ring.
//!
//! This is the unweighted mean of the ring's vertices, not the area centroid.
//! A closing vertex that repeats the first one is counted like any other.

use crate::error::{Error, Result};
use crate::point::{AxisOrder, GeoPoint};

/// Mean latitude and mean longitude of `points`.
pub fn centroid(points: &[GeoPoint]) -> Result<GeoPoint> {
    if points.is_empty() {
        return Err(Error::InvalidGeometry("polygon ring has no vertices".into()));
    }

    let n = points.len() as f64;
    let (lat_sum, lon_sum) = points
        .iter()
        .fold((0.0, 0.0), |(lat, lon), p| (lat + p.lat, lon + p.lon));

    Ok(GeoPoint::new(lat_sum / n, lon_sum / n))
}

/// Centroid of a raw coordinate ring as found in a GeoJSON polygon.
pub fn ring_centroid(ring: &[Vec<f64>], order: AxisOrder) -> Result<GeoPoint> {
    let points = ring
        .iter()
        .map(|pair| order.point(pair))
        .collect::<Result<Vec<_>>>()?;
    centroid(&points)
}
