use crate::core::actions::render_point_cloud::ports::raster_surface::RasterSurface;
use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub enum FrameBufferError {
    InvalidSize {
        width: u32,
        height: u32,
    },
    PixelOutsideBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "frame buffer size must be positive: {}x{}", width, height)
            }
            Self::PixelOutsideBounds { x, y, width, height } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of frame bounds {}x{}",
                    x, y, width, height
                )
            }
        }
    }
}

impl Error for FrameBufferError {}

/// Row-major RGBA8 raster, laid out the way the `pixels` surface expects.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, FrameBufferError> {
        if width == 0 || height == 0 {
            return Err(FrameBufferError::InvalidSize { width, height });
        }

        Ok(Self {
            width,
            height,
            buffer: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), FrameBufferError> {
        *self = Self::new(width, height)?;
        Ok(())
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), FrameBufferError> {
        if x >= self.width || y >= self.height {
            return Err(FrameBufferError::PixelOutsideBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        let index = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;
        self.buffer[index + 3] = 255;

        Ok(())
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;

        Some(Colour::rgb(
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ))
    }

    /// Number of pixels currently holding `colour`.
    #[must_use]
    pub fn count_pixels(&self, colour: Colour) -> usize {
        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|px| px[0] == colour.r && px[1] == colour.g && px[2] == colour.b)
            .count()
    }
}

impl RasterSurface for FrameBuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, colour: Colour) {
        for px in self.buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            px[0] = colour.r;
            px[1] = colour.g;
            px[2] = colour.b;
            px[3] = 255;
        }
    }

    fn plot(&mut self, x: u32, y: u32, colour: Colour) {
        let _ = self.set_pixel(x, y, colour);
    }
}
