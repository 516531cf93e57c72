use fern_explorer::{CanvasRect, FernExplorer, FrameBuffer};
use tracing_subscriber::EnvFilter;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A second init (the smoke test) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    let canvas = CanvasRect::full_window(f64::from(WIDTH), f64::from(HEIGHT))?;
    let explorer = FernExplorer::new(canvas);
    let mut frame = FrameBuffer::new(WIDTH, HEIGHT)?;

    let plotted = explorer.render(&mut frame);
    let lit = frame.count_pixels(explorer.settings().style.point);

    tracing::info!(
        points = explorer.point_cloud().len(),
        plotted,
        lit,
        scale = explorer.scale(),
        "rendered default fern at {}x{}",
        WIDTH,
        HEIGHT
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_returns_ok() {
        let result = main();

        assert!(result.is_ok());
    }
}
