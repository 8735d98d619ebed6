// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;

use room_distances_core::DistanceMatrix;

use crate::error::CliError;

/// Serializes the matrix as a nested JSON object and writes it to `path`.
pub async fn write_matrix(
    matrix: &DistanceMatrix,
    path: &Path,
    pretty: bool,
) -> Result<(), CliError> {
    let data = if pretty {
        serde_json::to_vec_pretty(matrix)?
    } else {
        serde_json::to_vec(matrix)?
    };

    let write_error = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(write_error)?;
    }
    tokio::fs::write(path, &data).await.map_err(write_error)?;

    tracing::info!(
        path = %path.display(),
        rooms = matrix.len(),
        size = data.len(),
        "Wrote distance matrix"
    );
    Ok(())
}
