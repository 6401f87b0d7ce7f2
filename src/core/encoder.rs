//! Turns a text payload into a black-on-white PNG.
//!
//! Symbol construction (version selection, error-correction codewords, masking)
//! is done by the `qrcode` crate; this module only rasterises the module grid
//! at the requested box size and border and encodes it with `image`.

use crate::domain::model::RenderOptions;
use crate::utils::error::{QrError, Result};
use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use qrcode::{Color, QrCode};
use std::io::Cursor;

pub const DARK: Luma<u8> = Luma([0]);
pub const LIGHT: Luma<u8> = Luma([255]);

#[derive(Debug, Clone)]
pub struct RenderedQr {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Modules per side of the symbol, excluding the border.
    pub modules: u32,
}

/// Builds the smallest symbol that holds `url` at the configured EC level.
pub fn encode(url: &str, options: &RenderOptions) -> Result<QrCode> {
    QrCode::with_error_correction_level(url.as_bytes(), options.ec_level).map_err(|source| {
        QrError::Encode {
            url: url.to_string(),
            source,
        }
    })
}

pub fn rasterize(code: &QrCode, options: &RenderOptions) -> GrayImage {
    let modules = code.width() as u32;
    let colors = code.to_colors();
    let box_size = options.box_size.max(1);
    let border = options.border;
    let side = (modules + 2 * border) * box_size;

    GrayImage::from_fn(side, side, |x, y| {
        let column = (x / box_size).checked_sub(border);
        let row = (y / box_size).checked_sub(border);

        match (column, row) {
            (Some(column), Some(row)) if column < modules && row < modules => {
                match colors[(row * modules + column) as usize] {
                    Color::Dark => DARK,
                    Color::Light => LIGHT,
                }
            }
            _ => LIGHT,
        }
    })
}

pub fn render_png(url: &str, options: &RenderOptions) -> Result<RenderedQr> {
    let code = encode(url, options)?;
    let modules = code.width() as u32;
    let image = rasterize(&code, options);
    let (width, height) = image.dimensions();

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(image).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    Ok(RenderedQr {
        png,
        width,
        height,
        modules,
    })
}
