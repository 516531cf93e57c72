use crate::core::data::colour::Colour;

/// A drawable grid of pixels.
pub trait RasterSurface {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);

    fn clear(&mut self, colour: Colour);

    /// Writes outside the surface are dropped.
    fn plot(&mut self, x: u32, y: u32, colour: Colour);
}
