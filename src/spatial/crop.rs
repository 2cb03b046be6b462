//! Rectangular cropping of rasters

use crate::raster::canonical::canonicalize;
use crate::raster::color::{Rgba64, TRANSPARENT};
use crate::raster::surface::{Raster, Surface};
use crate::spatial::rect::Rect;

/// View of a raster restricted to a rectangle
///
/// Pixels outside the rectangle read as transparent; inside it they read
/// through to the wrapped raster.
#[derive(Clone, Copy)]
pub struct CroppedView<'a> {
    source: &'a dyn Raster,
    rect: Rect,
}

impl<'a> CroppedView<'a> {
    /// Restrict `source` to `rect`
    pub const fn new(source: &'a dyn Raster, rect: Rect) -> Self {
        Self { source, rect }
    }
}

impl std::fmt::Debug for CroppedView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CroppedView")
            .field("rect", &self.rect)
            .finish_non_exhaustive()
    }
}

impl Raster for CroppedView<'_> {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn rgba64_at(&self, x: i32, y: i32) -> Rgba64 {
        if self.rect.contains(x, y) {
            self.source.rgba64_at(x, y)
        } else {
            TRANSPARENT
        }
    }
}

/// Result of [`crop`]
#[derive(Debug, Clone)]
pub enum Crop<'a> {
    /// Canonical copy produced through the native sub-region accessor
    Canonical(Surface),
    /// Clamped view over a raster without one
    View(CroppedView<'a>),
}

impl Raster for Crop<'_> {
    fn bounds(&self) -> Rect {
        match self {
            Self::Canonical(surface) => surface.bounds(),
            Self::View(view) => view.bounds(),
        }
    }

    fn rgba64_at(&self, x: i32, y: i32) -> Rgba64 {
        match self {
            Self::Canonical(surface) => surface.rgba64_at(x, y),
            Self::View(view) => view.rgba64_at(x, y),
        }
    }

    fn as_surface(&self) -> Option<&Surface> {
        match self {
            Self::Canonical(surface) => Some(surface),
            Self::View(_) => None,
        }
    }

    fn sub_image(&self, rect: &Rect) -> Option<Surface> {
        match self {
            Self::Canonical(surface) => surface.sub_image(rect),
            Self::View(_) => None,
        }
    }
}

impl Crop<'_> {
    /// Materialize as an origin-anchored surface
    pub fn to_surface(&self) -> Surface {
        canonicalize(self)
    }
}

/// Restrict a raster to `rect`
///
/// Rasters with a native sub-region accessor are cropped through it and
/// canonicalized; others are wrapped in a [`CroppedView`].
pub fn crop<'a>(source: &'a dyn Raster, rect: &Rect) -> Crop<'a> {
    match source.sub_image(rect) {
        Some(sub) => Crop::Canonical(canonicalize(&sub)),
        None => Crop::View(CroppedView::new(source, *rect)),
    }
}
