// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the distance pipeline.

/// Result type alias for distance computations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a distance matrix run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A classified feature has an empty or malformed coordinate ring.
    #[error("invalid geometry for {feature}: {source}")]
    InvalidGeometry {
        feature: String,
        #[source]
        source: room_distances_geometry::Error,
    },

    /// A room or staircase lacks an attribute the estimator needs, or it is not numeric.
    #[error("invalid room data for {room}: {reason}")]
    InvalidRoomData { room: String, reason: String },

    /// The input is not a valid GeoJSON feature collection.
    #[error("failed to parse feature collection: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn room_data(room: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidRoomData {
            room: room.into(),
            reason: reason.into(),
        }
    }
}
