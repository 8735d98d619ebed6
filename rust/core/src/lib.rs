// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Room Distances Core
//!
//! Estimated walking distances between the rooms of a campus floor-plan
//! dataset (a GeoJSON feature collection).
//!
//! ## Pipeline
//!
//! 1. **Filter**: features are classified as rooms or staircases by keywords
//!    in their function property; features without geometry are dropped.
//! 2. **Centroid**: each footprint is reduced to the mean of its outer ring.
//! 3. **Locate**: every room gets its nearest staircase on the same building
//!    and floor.
//! 4. **Estimate**: a piecewise model combines surface distances and a
//!    per-level penalty depending on building and floor of the two rooms.
//! 5. **Matrix**: the estimate for every ordered pair of rooms.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use room_distances_core::{compute_distances, DistanceConfig, FeatureCollection};
//!
//! let collection = FeatureCollection::from_json(&geojson)?;
//! let matrix = compute_distances(&collection, &DistanceConfig::default())?;
//! println!("{:?}", matrix.get("G101", "K012"));
//! ```
//!
//! Loading the dataset and writing the result are left to the caller.

pub mod config;
pub mod error;
pub mod estimator;
pub mod feature;
pub mod filter;
pub mod locator;
pub mod matrix;
pub mod space;

pub use config::{DistanceConfig, PropertyNames};
pub use error::{Error, Result};
pub use estimator::{DistanceEstimator, RouteKind};
pub use feature::{Feature, FeatureCollection, Geometry};
pub use filter::{classify, extract_spaces, partition, Partition, SpaceKind, Spaces};
pub use locator::{nearest_staircase, NearestStaircase, Waypoint};
pub use matrix::{build_matrix, DistanceMatrix};
pub use room_distances_geometry::{AxisOrder, GeoPoint};
pub use space::{Floor, Room, Space, Staircase};

/// Runs the full pipeline over a parsed feature collection.
pub fn compute_distances(
    collection: &FeatureCollection,
    config: &DistanceConfig,
) -> Result<DistanceMatrix> {
    let spaces = extract_spaces(collection, config)?;
    build_matrix(&spaces.rooms, &spaces.staircases, config)
}
