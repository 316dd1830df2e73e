use std::path::PathBuf;

use serde::Serialize;

/// Metadata for one embedded raster image found in a PDF page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedImage {
    /// Owning page number, 1-indexed.
    pub page: u32,
    /// Where the image bytes were saved.
    pub image_path: PathBuf,
    /// Placement on the page, when it could be resolved.
    pub bbox: Option<BoundingBox>,
    /// Object number of the image stream in the source PDF.
    pub xref: u32,
}

/// Four page coordinates (left, top, right, bottom), rounded to two decimal
/// places. Serializes as an array of exactly four numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox([f64; 4]);

impl BoundingBox {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self([round2(left), round2(top), round2(right), round2(bottom)])
    }

    pub fn left(&self) -> f64 {
        self.0[0]
    }

    pub fn top(&self) -> f64 {
        self.0[1]
    }

    pub fn right(&self) -> f64 {
        self.0[2]
    }

    pub fn bottom(&self) -> f64 {
        self.0[3]
    }

    pub fn as_array(&self) -> [f64; 4] {
        self.0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
