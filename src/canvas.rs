use crate::color::{Color, Rgbw};

/// Drawing surface for effects
///
/// Writes only touch memory; flushing to hardware is up to the owner of the
/// surface.
pub trait Canvas {
    /// Number of pixels
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Set a pixel. Indices outside of `[0, len)` are ignored.
    fn set(&mut self, index: usize, color: Color);

    /// Read back a pixel as written, before brightness scaling
    fn get(&self, index: usize) -> Option<Rgbw>;

    /// Set every pixel to one color
    fn fill(&mut self, color: Color) {
        for index in 0..self.len() {
            self.set(index, color);
        }
    }
}
