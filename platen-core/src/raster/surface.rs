/// Mutable pixel target used for overlay compositing.
///
/// The layout core treats images as opaque resources: it needs dimensions
/// for compatibility checks and an in-place paste operation, nothing else.
/// Decode and encode concerns stay with the caller.
pub trait Surface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Copy `src`'s pixels into `self`, with `src`'s top-left corner at
    /// `(left, top)`.
    ///
    /// Callers guarantee `src` fits within bounds; size compatibility is
    /// validated before any paste reaches this method.
    fn paste(&mut self, src: &Self, left: u32, top: u32);
}

impl Surface for image::RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn paste(&mut self, src: &Self, left: u32, top: u32) {
        image::imageops::replace(self, src, i64::from(left), i64::from(top));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/surface.rs"]
mod tests;
