//! Image file loading into surfaces and PNG export of rasters

use std::path::Path;

use image::{DynamicImage, RgbaImage};

use crate::io::error::{EngineError, Result};
use crate::raster::color::to_nrgba8;
use crate::raster::surface::{PackedFormat, Raster, Surface};
use crate::spatial::rect::Rect;

/// Decode an image file into a surface at the origin
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn load_surface(path: &Path) -> Result<Surface> {
    let image = image::open(path).map_err(|source| EngineError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(from_dynamic(image))
}

/// Wrap a decoded image in the closest packed layout
///
/// 8-bit gray and straight RGBA keep their layout, 16-bit gray keeps its
/// depth and RGB becomes opaque RGBA. Everything else is widened to 16-bit
/// straight RGBA.
pub fn from_dynamic(image: DynamicImage) -> Surface {
    let rect = Rect::from_size(image.width() as usize, image.height() as usize);
    match image {
        DynamicImage::ImageLuma8(gray) => {
            Surface::from_packed(rect, PackedFormat::Gray, gray.into_raw())
        }
        DynamicImage::ImageLuma16(gray) => Surface::from_packed(
            rect,
            PackedFormat::Gray16,
            gray.into_raw().iter().flat_map(|v| v.to_be_bytes()).collect(),
        ),
        DynamicImage::ImageRgba8(rgba) => {
            Surface::from_packed(rect, PackedFormat::Nrgba, rgba.into_raw())
        }
        // Opaque pixels are identical premultiplied or straight
        DynamicImage::ImageRgb8(rgb) => Surface::from_packed(
            rect,
            PackedFormat::Rgba,
            rgb.pixels()
                .flat_map(|px| [px.0[0], px.0[1], px.0[2], u8::MAX])
                .collect(),
        ),
        other => Surface::from_packed(
            rect,
            PackedFormat::Nrgba64,
            other
                .to_rgba16()
                .into_raw()
                .iter()
                .flat_map(|v| v.to_be_bytes())
                .collect(),
        ),
    }
}

/// Render any raster as a straight-alpha 8-bit image
///
/// The returned buffer starts at the raster's minimum corner.
pub fn to_rgba_image(raster: &dyn Raster) -> RgbaImage {
    let bounds = raster.bounds();
    let width = u32::try_from(bounds.width()).unwrap_or(u32::MAX);
    let height = u32::try_from(bounds.height()).unwrap_or(u32::MAX);
    RgbaImage::from_fn(width, height, |x, y| {
        let px = i32::try_from(x).map_or(bounds.max[0], |x| bounds.min[0].saturating_add(x));
        let py = i32::try_from(y).map_or(bounds.max[1], |y| bounds.min[1].saturating_add(y));
        to_nrgba8(raster.rgba64_at(px, py))
    })
}

/// Save a raster as an image, the format picked from the path extension
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns `FileSystem` if a parent directory cannot be created and
/// `ImageExport` if encoding or writing fails
pub fn save_image(raster: &dyn Raster, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| EngineError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    to_rgba_image(raster)
        .save(path)
        .map_err(|e| EngineError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}
