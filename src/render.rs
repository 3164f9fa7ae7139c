//! Debug rendering of a symbol layout
//!
//! Produces grayscale images and ASCII dumps from the geometry and traversal
//! output. Block shading only visualizes placement order and carries no
//! meaning for the encoded symbol.

use std::path::{Path, PathBuf};

use image::{GrayImage, ImageFormat, Luma};
use thiserror::Error;
use tracing::{debug, info};

use crate::QrLayout;
use crate::config::RenderOptions;
use crate::error::LayoutError;
use crate::geometry::ReservedMask;
use crate::layout::EncodingRegion;
use crate::models::{BitMatrix, ModuleCoord};

const LIGHT: u8 = 255;
const DARK: u8 = 0;

/// Errors from the presentation layer
#[derive(Debug, Error)]
pub enum RenderError {
    /// The requested version was rejected
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// The image could not be written
    #[error("failed to write image {path}: {source}")]
    Write {
        /// Destination that failed
        path: PathBuf,
        /// Underlying encoder or I/O error
        #[source]
        source: image::ImageError,
    },
}

/// Gray level for the block at `index`. Cycles through eight mid-tones so
/// neighbouring blocks stay distinguishable from each other and from the
/// black and white structural modules.
pub fn block_shade(index: usize) -> u8 {
    (index % 8) as u8 * 16 + 64
}

fn canvas(width: usize, opts: &RenderOptions) -> GrayImage {
    let side = (width as u32 + 2 * opts.quiet_zone) * opts.scale;
    GrayImage::from_pixel(side, side, Luma([LIGHT]))
}

fn paint_module(img: &mut GrayImage, coord: ModuleCoord, opts: &RenderOptions, level: u8) {
    let left = (coord.x as u32 + opts.quiet_zone) * opts.scale;
    let top = (coord.y as u32 + opts.quiet_zone) * opts.scale;
    for dy in 0..opts.scale {
        for dx in 0..opts.scale {
            img.put_pixel(left + dx, top + dy, Luma([level]));
        }
    }
}

/// Draw a module matrix (dark = black, light = white)
pub fn matrix_image(matrix: &BitMatrix, opts: &RenderOptions) -> GrayImage {
    let opts = opts.normalized();
    let mut img = canvas(matrix.width(), &opts);
    for coord in matrix.iter_set() {
        paint_module(&mut img, coord, &opts, DARK);
    }
    img
}

/// Blank symbol: timing, finder and alignment patterns only
pub fn blank_image(layout: &QrLayout, opts: &RenderOptions) -> GrayImage {
    matrix_image(&layout.blank_symbol(), opts)
}

/// Blank symbol with every codeword block painted in its shade
///
/// Blocks are painted over the structural patterns unless
/// `opts.exclude_reserved` is set.
pub fn debug_image(layout: &QrLayout, opts: &RenderOptions) -> GrayImage {
    let opts = opts.normalized();
    let mut img = blank_image(layout, &opts);

    let excluded;
    let region = if opts.exclude_reserved {
        excluded = EncodingRegion::generate_excluding(&ReservedMask::new(layout.version()));
        &excluded
    } else {
        layout.encoding_region()
    };

    for (index, block) in region.blocks().iter().enumerate() {
        let shade = block_shade(index);
        for &coord in block {
            paint_module(&mut img, coord, &opts, shade);
        }
    }

    debug!(
        version = %layout.version(),
        blocks = region.len(),
        width = img.width(),
        "rendered debug image"
    );
    img
}

/// Write `img` as PNG
pub fn save_png(img: &GrayImage, path: &Path) -> Result<(), RenderError> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| RenderError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), "wrote image");
    Ok(())
}

/// One line per row, `#` for dark and `.` for light
pub fn to_ascii(matrix: &BitMatrix) -> String {
    let mut out = String::with_capacity((matrix.width() + 1) * matrix.height());
    for y in 0..matrix.height() {
        for x in 0..matrix.width() {
            out.push(if matrix.get(x, y) { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}
