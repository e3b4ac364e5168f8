//! Raw CSV retrieval.
//!
//! Reads the payload for a [`DataLocation`] (over HTTP for URLs, from
//! disk for paths) and gunzips it when the definition asks for it.

use std::io::Read as _;
use std::sync::Arc;

use crate::SourceError;
use crate::location::DataLocation;
use crate::progress::ProgressCallback;

/// Fetches the raw CSV bytes for `location`.
///
/// # Errors
///
/// Returns [`SourceError`] if the request fails, the server answers with
/// an error status, the file cannot be read, or decompression fails.
pub async fn fetch_csv_bytes(
    location: &DataLocation,
    gzipped: bool,
    progress: &Arc<dyn ProgressCallback>,
) -> Result<Vec<u8>, SourceError> {
    progress.set_message(format!("Fetching {location}"));

    let bytes = match location {
        DataLocation::Url(url) => download(url, progress).await?,
        DataLocation::File(path) => {
            let bytes = tokio::fs::read(path).await?;
            progress.inc(bytes.len() as u64);
            bytes
        }
    };

    log::debug!("Read {} bytes from {location}", bytes.len());

    let bytes = if gzipped {
        let mut decoder = flate2::read::GzDecoder::new(bytes.as_slice());
        let mut decompressed = Vec::new();
        decoder.read_to_end(&mut decompressed)?;
        log::debug!("Decompressed to {} bytes", decompressed.len());
        decompressed
    } else {
        bytes
    };

    progress.finish(format!("Fetched {location} ({} bytes)", bytes.len()));

    Ok(bytes)
}

async fn download(url: &str, progress: &Arc<dyn ProgressCallback>) -> Result<Vec<u8>, SourceError> {
    let client = reqwest::Client::new();
    let mut response = client.get(url).send().await?.error_for_status()?;

    if let Some(total) = response.content_length() {
        progress.set_total(total);
    }

    let mut bytes = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        progress.inc(chunk.len() as u64);
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use flate2::Compression;
    use flate2::write::GzEncoder;

    use super::*;
    use crate::progress::null_progress;

    #[tokio::test]
    async fn gunzips_local_files() {
        let path = std::env::temp_dir().join(format!("trace_report_{}.csv.gz", std::process::id()));
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"date_in\n2013-05-01\n").unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let location = DataLocation::File(path.clone());
        assert!(location.looks_gzipped());
        let bytes = fetch_csv_bytes(&location, true, &null_progress()).await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(bytes, b"date_in\n2013-05-01\n");
    }

    #[tokio::test]
    async fn plain_files_are_read_as_is() {
        let location =
            DataLocation::File(std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/sample.csv"));
        let bytes = fetch_csv_bytes(&location, false, &null_progress()).await.unwrap();
        assert!(bytes.starts_with(b"date_in,"));
    }
}
