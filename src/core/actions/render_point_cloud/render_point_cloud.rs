use crate::core::actions::render_point_cloud::ports::raster_surface::RasterSurface;
use crate::core::data::canvas::CanvasSize;
use crate::core::data::colour::Colour;
use crate::core::data::point_cloud::PointCloud;
use crate::core::view::Viewport;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub background: Colour,
    pub point: Colour,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: Colour::rgb(0x11, 0x11, 0x11),
            point: Colour::rgb(0x00, 0xff, 0x00),
        }
    }
}

/// Clears the surface and plots every visible point as a single pixel.
///
/// Returns the number of points that landed on the surface.
pub fn render_point_cloud<S: RasterSurface>(
    cloud: &PointCloud,
    viewport: &Viewport,
    surface: &mut S,
    style: &RenderStyle,
) -> usize {
    let (width, height) = surface.size();
    surface.clear(style.background);

    if width == 0 || height == 0 {
        return 0;
    }

    let canvas = CanvasSize {
        width: f64::from(width),
        height: f64::from(height),
    };

    let pixels: Vec<(u32, u32)> = cloud
        .points()
        .par_iter()
        .filter_map(|point| {
            let screen = viewport.world_to_screen(*point, canvas);
            let x = screen.x.floor();
            let y = screen.y.floor();

            // NaN fails both comparisons.
            if x >= 0.0 && x < canvas.width && y >= 0.0 && y < canvas.height {
                Some((x as u32, y as u32))
            } else {
                None
            }
        })
        .collect();

    for &(x, y) in &pixels {
        surface.plot(x, y, style.point);
    }

    pixels.len()
}
