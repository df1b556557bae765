//! Gzip-compressed JSON persistence for the place index.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use placedex_core::PlaceIndex;

use crate::error::StoreError;

/// Write the index as gzip-compressed JSON.
///
/// # Errors
///
/// Returns [`StoreError::Io`] on filesystem failure or [`StoreError::Json`]
/// if serialization fails.
pub fn write_index(path: &Path, index: &PlaceIndex) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    serde_json::to_writer(&mut encoder, index).map_err(|source| StoreError::Json {
        context: format!("index file {}", path.display()),
        source,
    })?;
    encoder.finish().map_err(io_err)?;
    Ok(())
}

/// Read an index previously written by [`write_index`].
///
/// # Errors
///
/// Returns [`StoreError::Io`] on filesystem failure or [`StoreError::Json`]
/// if the decompressed content is not a valid index.
pub fn read_index(path: &Path) -> Result<PlaceIndex, StoreError> {
    let file = File::open(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let decoder = GzDecoder::new(BufReader::new(file));
    serde_json::from_reader(decoder).map_err(|source| StoreError::Json {
        context: format!("index file {}", path.display()),
        source,
    })
}
