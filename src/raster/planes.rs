//! Per-channel byte planes and their bridge to matrices

use image::GrayImage;
use std::collections::BTreeMap;
use std::fmt;

use crate::io::error::{Cause, Result, dimension_error};
use crate::matrix::Matrix;
use crate::raster::canonical::canonicalize;
use crate::raster::regularize::to_rgba;
use crate::raster::surface::{Layout, PackedFormat, Raster, Surface, YCbCrPlanes};
use crate::spatial::rect::Rect;

/// Label of an extracted plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    /// Red
    R,
    /// Green
    G,
    /// Blue
    B,
    /// Alpha of a colour layout
    A,
    /// Luma
    Y,
    /// Blue-difference chroma
    Cb,
    /// Red-difference chroma
    Cr,
    /// Gray level
    Gray,
    /// Alpha of an alpha-only layout
    Alpha,
}

impl Channel {
    /// Short conventional name
    pub const fn label(self) -> &'static str {
        match self {
            Self::R => "R",
            Self::G => "G",
            Self::B => "B",
            Self::A => "A",
            Self::Y => "Y",
            Self::Cb => "Cb",
            Self::Cr => "Cr",
            Self::Gray => "Gray",
            Self::Alpha => "Alpha",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const RGBA_CHANNELS: [Channel; 4] = [Channel::R, Channel::G, Channel::B, Channel::A];

fn gray_image(width: usize, height: usize, pix: Vec<u8>) -> GrayImage {
    let (w, h) = (to_u32(width), to_u32(height));
    GrayImage::from_raw(w, h, pix).unwrap_or_else(|| GrayImage::new(w, h))
}

fn to_u32(v: usize) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}

/// Every `bpp`-th byte starting at `first`
fn strided(surface: &Surface, pix: &[u8], bpp: usize, first: usize) -> GrayImage {
    let samples = pix
        .chunks_exact(bpp)
        .map(|px| px.get(first).copied().unwrap_or(0))
        .collect();
    gray_image(surface.width(), surface.height(), samples)
}

fn chroma_planes(planes: &YCbCrPlanes, out: &mut BTreeMap<Channel, GrayImage>) {
    let stride = planes.c_stride;
    let rows = planes.cb.len().checked_div(stride).unwrap_or(0);
    out.insert(Channel::Cb, gray_image(stride, rows, planes.cb.clone()));
    out.insert(Channel::Cr, gray_image(stride, rows, planes.cr.clone()));
}

/// Split a raster into labelled byte planes
///
/// The raster is canonicalized first. 16-bit layouts keep the most
/// significant byte of each sample. For YCbCr with alpha the luma plane is
/// weighted by alpha (`y · a / 255`). CMYK, paletted and uniform layouts have
/// no plane decomposition and give an empty map.
pub fn dimensions(raster: &dyn Raster) -> BTreeMap<Channel, GrayImage> {
    let surface = canonicalize(raster);
    let mut out = BTreeMap::new();
    match &surface.layout {
        Layout::Packed { format, pix, .. } => {
            let bpp = format.bytes_per_pixel();
            match format {
                PackedFormat::Rgba | PackedFormat::Nrgba => {
                    for (i, channel) in RGBA_CHANNELS.into_iter().enumerate() {
                        out.insert(channel, strided(&surface, pix, bpp, i));
                    }
                }
                PackedFormat::Rgba64 | PackedFormat::Nrgba64 => {
                    for (i, channel) in RGBA_CHANNELS.into_iter().enumerate() {
                        out.insert(channel, strided(&surface, pix, bpp, 2 * i));
                    }
                }
                PackedFormat::Gray | PackedFormat::Gray16 => {
                    out.insert(Channel::Gray, strided(&surface, pix, bpp, 0));
                }
                PackedFormat::Alpha | PackedFormat::Alpha16 => {
                    out.insert(Channel::Alpha, strided(&surface, pix, bpp, 0));
                }
                PackedFormat::Cmyk => {}
            }
        }
        Layout::YCbCr(planes) => {
            out.insert(
                Channel::Y,
                gray_image(surface.width(), surface.height(), planes.y.clone()),
            );
            chroma_planes(planes, &mut out);
        }
        Layout::NYCbCrA { planes, alpha, .. } => {
            let luma = planes
                .y
                .iter()
                .zip(alpha)
                .map(|(&y, &a)| (u16::from(y) * u16::from(a) / 255) as u8)
                .collect();
            out.insert(
                Channel::Y,
                gray_image(surface.width(), surface.height(), luma),
            );
            out.insert(
                Channel::A,
                gray_image(surface.width(), surface.height(), alpha.clone()),
            );
            chroma_planes(planes, &mut out);
        }
        Layout::Paletted { .. } | Layout::Uniform(_) => {}
    }
    out
}

/// Byte plane to matrix
pub fn gray_to_matrix(plane: &GrayImage) -> Matrix<u8> {
    Matrix::from_values(
        plane.width() as usize,
        plane.height() as usize,
        plane.as_raw().iter().copied(),
    )
}

/// Matrix to byte plane
pub fn matrix_to_gray(matrix: &Matrix<u8>) -> GrayImage {
    gray_image(matrix.width(), matrix.height(), matrix.to_vec())
}

/// R, G, B and A matrices of the regularized 8-bit premultiplied raster
pub fn rgba_planes(raster: &dyn Raster) -> [Matrix<u8>; 4] {
    let rgba = to_rgba(raster);
    let (w, h) = (rgba.width(), rgba.height());
    let pix: &[u8] = match &rgba.layout {
        Layout::Packed { pix, .. } => pix.as_slice(),
        _ => &[],
    };
    std::array::from_fn(|i| {
        Matrix::from_values(
            w,
            h,
            pix.chunks_exact(4)
                .map(|px| px.get(i).copied().unwrap_or(0)),
        )
    })
}

fn interleave(operation: &'static str, planes: &[&Matrix<u8>], opaque: bool) -> Result<Surface> {
    let Some(first) = planes.first() else {
        return Ok(Surface::packed(Rect::default(), PackedFormat::Rgba));
    };
    let dims = first.dims();
    if planes.iter().any(|p| p.dims() != dims) {
        return Err(dimension_error(
            operation,
            planes.iter().map(|p| p.dims()).collect(),
            Cause::Dimensions,
        ));
    }
    let rect = Rect::from_size(dims.x, dims.y);
    let mut surface = Surface::packed(rect, PackedFormat::Rgba);
    for (x, y) in rect.points() {
        let Some(px) = surface.pixel_mut(x, y) else {
            continue;
        };
        for (slot, plane) in px.iter_mut().zip(planes) {
            *slot = plane
                .get(x.unsigned_abs() as usize, y.unsigned_abs() as usize)
                .unwrap_or(0);
        }
        if let Some(alpha) = px.get_mut(3).filter(|_| opaque) {
            *alpha = u8::MAX;
        }
    }
    Ok(surface)
}

/// Interleave four planes into an 8-bit premultiplied RGBA surface
///
/// # Errors
///
/// Returns `Dimensions` if the planes differ in shape
pub fn planes_to_rgba(planes: &[Matrix<u8>; 4]) -> Result<Surface> {
    let refs: Vec<&Matrix<u8>> = planes.iter().collect();
    interleave("planes_to_rgba", &refs, false)
}

/// Interleave three planes into an opaque RGBA surface
///
/// # Errors
///
/// Returns `Dimensions` if the planes differ in shape
pub fn planes_to_rgb(planes: &[Matrix<u8>; 3]) -> Result<Surface> {
    let refs: Vec<&Matrix<u8>> = planes.iter().collect();
    interleave("planes_to_rgb", &refs, true)
}
