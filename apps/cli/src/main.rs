// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room Distances - walking distance matrix for the campus room dataset.
//!
//! Loads the room feature collection, estimates the walking distance between
//! every pair of rooms and writes the result as a nested JSON object.
//!
//! # Environment
//!
//! - `MAP_SOURCE` - dataset URL or file path
//! - `OUTPUT_PATH` - where to write the matrix (`room-distances.json`)
//! - `ROOM_TYPES` - comma-separated room keywords
//! - `STAIRCASE_KEYWORD` - staircase keyword
//! - `FLOOR_PENALTY_METERS` - meters per floor level (`5`)
//! - `COORDINATE_ORDER` - `latlon` or `lonlat`
//! - `FETCH_TIMEOUT_SECS` - HTTP timeout (`5`)
//! - `PRETTY_OUTPUT` - indent the JSON (`false`)
//! - `RUST_LOG` - log filter

use std::time::{Duration, Instant};

use anyhow::Context;
use room_distances_core::compute_distances;

mod config;
mod error;
mod services;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,room_distances=debug".into()),
        )
        .pretty()
        .init();

    let config = Config::from_env();

    tracing::info!(
        map_source = %config.map_source,
        output_path = %config.output_path.display(),
        room_types = ?config.distance.room_type_keywords,
        staircase_keyword = %config.distance.staircase_keyword,
        axis_order = ?config.distance.axis_order,
        "Starting room distance calculation"
    );

    let collection = services::load_features(
        &config.map_source,
        Duration::from_secs(config.fetch_timeout_secs),
    )
    .await
    .context("loading feature collection")?;

    let started = Instant::now();
    let matrix = compute_distances(&collection, &config.distance)
        .context("computing distance matrix")?;
    tracing::info!(
        rooms = matrix.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Computed distance matrix"
    );

    services::write_matrix(&matrix, &config.output_path, config.pretty_output)
        .await
        .context("writing distance matrix")?;

    Ok(())
}
