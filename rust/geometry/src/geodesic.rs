// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use geo::GeodesicDistance;

use crate::point::GeoPoint;

/// Shortest surface distance in meters on the WGS-84 ellipsoid (Karney).
#[inline]
pub fn geodesic_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    a.to_geo().geodesic_distance(&b.to_geo())
}
