// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Loads the feature collection over HTTP or from disk.

use std::path::Path;
use std::time::Duration;

use room_distances_core::FeatureCollection;

use crate::config::MapSource;
use crate::error::CliError;

/// Loads and parses the feature collection. Fetch failures are not retried.
pub async fn load_features(
    source: &MapSource,
    timeout: Duration,
) -> Result<FeatureCollection, CliError> {
    let bytes = match source {
        MapSource::Url(url) => fetch(url, timeout).await?,
        MapSource::File(path) => read(path).await?,
    };

    let collection = FeatureCollection::from_slice(&bytes)?;
    tracing::info!(
        source = %source,
        size = bytes.len(),
        features = collection.features.len(),
        "Loaded feature collection"
    );
    Ok(collection)
}

async fn fetch(url: &str, timeout: Duration) -> Result<Vec<u8>, CliError> {
    let to_error = |source| CliError::Fetch {
        url: url.to_string(),
        source,
    };

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(to_error)?;

    tracing::debug!(url = %url, timeout_secs = timeout.as_secs(), "Fetching dataset");
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(to_error)?;
    let body = response.bytes().await.map_err(to_error)?;

    Ok(body.to_vec())
}

async fn read(path: &Path) -> Result<Vec<u8>, CliError> {
    tokio::fs::read(path).await.map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(tag: &str) -> std::path::PathBuf {
        let name = format!("room-distances-{}-{}.geojson", tag, std::process::id());
        std::env::temp_dir().join(name)
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let path = temp_file("source");
        let json = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "geometry": null, "properties": {}}
        ]}"#;
        std::fs::write(&path, json).unwrap();

        let collection = load_features(&MapSource::File(path.clone()), Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(collection.features.len(), 1);

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let source = MapSource::File("/nonexistent/room-distances/rooms.geojson".into());
        let err = load_features(&source, Duration::from_secs(1)).await.unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }

    #[tokio::test]
    async fn test_invalid_document_is_core_error() {
        let path = temp_file("invalid");
        std::fs::write(&path, "not json").unwrap();

        let err = load_features(&MapSource::File(path.clone()), Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Core(room_distances_core::Error::Parse(_))));

        std::fs::remove_file(&path).ok();
    }
}
