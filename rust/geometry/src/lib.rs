// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room Distances Geometry
//!
//! Geographic primitives for reducing room footprints to representative
//! points and measuring the surface distance between them. Distances are
//! geodesics on the WGS-84 ellipsoid computed through the `geo` crate.

pub mod centroid;
pub mod error;
pub mod geodesic;
pub mod point;

pub use centroid::{centroid, ring_centroid};
pub use error::{Error, Result};
pub use geodesic::geodesic_distance;
pub use point::{AxisOrder, GeoPoint};
