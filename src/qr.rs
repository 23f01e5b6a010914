//! QR code artifacts
//!
//! Encodes a map link for the collection coordinates and stores it as
//! `<dir>/qr_<num>.png`. Files are overwritten on rerun and never removed.

use crate::error::{ArherbError, Result};
use image::Luma;
use qrcode::QrCode;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Artifact directory used when none is configured
pub const DEFAULT_QR_DIR: &str = "qr_codes";

/// Map link for a coordinate pair
pub fn map_url(latitude: &str, longitude: &str) -> String {
    format!("https://www.google.com/maps?q={},{}", latitude.trim(), longitude.trim())
}

/// Artifact path for `identifier` inside `dir`
pub fn qr_path(dir: &Path, identifier: &str) -> PathBuf {
    dir.join(format!("qr_{}.png", identifier))
}

/// Empty text and numeric zero count as "no coordinate".
pub fn coordinate_present(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    match value.parse::<f64>() {
        Ok(n) => n != 0.0,
        Err(_) => true,
    }
}

/// Writes the QR image for one specimen. Returns None without touching the
/// filesystem when either coordinate is absent.
pub fn generate_qr(
    dir: &Path,
    latitude: &str,
    longitude: &str,
    identifier: &str,
) -> Result<Option<PathBuf>> {
    if !coordinate_present(latitude) || !coordinate_present(longitude) {
        return Ok(None);
    }

    let url = map_url(latitude, longitude);
    let code = QrCode::new(url.as_bytes())
        .map_err(|e| ArherbError::QrGeneration(format!("{}: {}", url, e)))?;
    let image = code.render::<Luma<u8>>().build();

    std::fs::create_dir_all(dir)?;
    let path = qr_path(dir, identifier);
    image
        .save(&path)
        .map_err(|e| ArherbError::QrGeneration(format!("{}: {}", path.display(), e)))?;

    tracing::debug!(path = %path.display(), %url, "QR code written");
    Ok(Some(path))
}

/// QR generator for one run. Remembers identifiers so a repeated `num`
/// is reported; the later image still replaces the earlier one.
#[derive(Debug)]
pub struct QrGenerator {
    dir: PathBuf,
    written: HashSet<String>,
}

impl QrGenerator {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), written: HashSet::new() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of distinct artifacts written so far
    pub fn count(&self) -> usize {
        self.written.len()
    }

    pub fn generate(&mut self, latitude: &str, longitude: &str, identifier: &str) -> Result<Option<PathBuf>> {
        let path = generate_qr(&self.dir, latitude, longitude, identifier)?;
        if path.is_some() && !self.written.insert(identifier.to_string()) {
            tracing::warn!(num = identifier, "duplicate specimen number, QR code overwritten");
        }
        Ok(path)
    }
}
