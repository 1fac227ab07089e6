//! Open Graph preview card generation.
//!
//! Social crawlers expect a 1200x630 card and drop the preview entirely
//! on a non-200 response, so this module never fails outward: any
//! problem with the background photo produces a solid placeholder card
//! instead of an error status.

use std::io::Cursor;
use std::path::Path;

use image::imageops::FilterType;
use image::{ImageFormat, Rgb, RgbImage};
use tracing::error;

/// Standard Open Graph card dimensions.
pub const OG_WIDTH: u32 = 1200;
pub const OG_HEIGHT: u32 = 630;

/// Produce the PNG served at the Open Graph image endpoint.
///
/// The background photo is stretched to exactly 1200x630 and re-encoded
/// as PNG, whatever its source format or aspect ratio.
pub fn render_card(background: &Path) -> Vec<u8> {
    match render_from_background(background) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(
                "Failed to render Open Graph card from {}: {}",
                background.display(),
                e
            );
            error_card()
        }
    }
}

fn render_from_background(background: &Path) -> Result<Vec<u8>, image::ImageError> {
    let source = image::open(background)?;
    let card = source.resize_exact(OG_WIDTH, OG_HEIGHT, FilterType::Triangle);

    let mut bytes = Vec::new();
    card.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Solid red card served when the background cannot be used.
fn error_card() -> Vec<u8> {
    let card = RgbImage::from_pixel(OG_WIDTH, OG_HEIGHT, Rgb([255, 0, 0]));

    let mut bytes = Vec::new();
    if let Err(e) = card.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png) {
        error!("Failed to encode placeholder card: {}", e);
    }
    bytes
}
