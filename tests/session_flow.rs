use fern_explorer::{
    CanvasRect, CoefficientField, ExplorerSettings, FernExplorer, FrameBuffer, GestureMode, InputEvent, MapId, MapSet,
    ScreenPoint, TouchPoint, Viewport, point_cloud_len,
};
use std::time::Duration;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn explorer() -> FernExplorer {
    FernExplorer::with_seed(
        CanvasRect::full_window(800.0, 600.0).unwrap(),
        ExplorerSettings::default(),
        2024,
    )
}

fn wheel_up_at(x: f64, y: f64) -> InputEvent {
    InputEvent::Wheel {
        delta_y: -100.0,
        client: ScreenPoint::new(x, y),
    }
}

#[test]
fn edit_burst_regenerates_once_with_final_coefficients() {
    let mut explorer = explorer();
    let initial = explorer.point_cloud().clone();

    // Zeroing the first three weights leaves only the right-leaflet map in play.
    explorer.set_coefficient(MapId::Stem, CoefficientField::P, 0.0, ms(0));
    assert!(!explorer.tick(ms(29)));
    explorer.set_coefficient(MapId::MainLeaflets, CoefficientField::P, 0.0, ms(30));
    assert!(!explorer.tick(ms(59)));
    explorer.set_coefficient(MapId::LeftLeaflet, CoefficientField::P, 0.0, ms(60));

    let fired: Vec<u64> = (60..=400).filter(|t| explorer.tick(ms(*t))).collect();

    assert_eq!(fired, vec![160]);
    assert_eq!(explorer.generation(), 2);
    assert_ne!(explorer.point_cloud(), &initial);

    let right_leaflet = *explorer.map_set().get(MapId::RightLeaflet);
    for point in explorer.point_cloud().points() {
        let image = right_leaflet.apply(*point);
        assert!((image.x - point.x).abs() < 1e-6 && (image.y - point.y).abs() < 1e-6);
    }
}

#[test]
fn reset_from_any_state_restores_defaults() {
    let mut explorer = explorer();

    explorer.handle_input_event(&InputEvent::PointerDown {
        client: ScreenPoint::new(100.0, 100.0),
    });
    explorer.handle_input_event(&InputEvent::PointerMove {
        client: ScreenPoint::new(180.0, 40.0),
    });
    for _ in 0..40 {
        explorer.handle_input_event(&wheel_up_at(300.0, 200.0));
    }
    explorer.set_coefficient(MapId::Stem, CoefficientField::D, 0.5, ms(0));

    assert_eq!(explorer.render_count(), 100_000);
    assert!(matches!(explorer.gesture_mode(), GestureMode::Panning { .. }));

    explorer.reset();
    explorer.reset();

    assert_eq!(explorer.viewport(), &Viewport::with_offset(50.0, 0.0, 0.0));
    assert_eq!(explorer.render_count(), 10_000);
    assert_eq!(explorer.map_set(), &MapSet::default());
    assert_eq!(explorer.gesture_mode(), GestureMode::Idle);
    assert_eq!(explorer.point_cloud().len(), point_cloud_len(10_000));
    assert!(!explorer.tick(ms(1_000)));
}

#[test]
fn render_count_only_ratchets_up() {
    let mut explorer = explorer();
    let mut counts = vec![explorer.render_count()];

    for _ in 0..35 {
        explorer.handle_input_event(&wheel_up_at(400.0, 300.0));
        counts.push(explorer.render_count());
    }
    for _ in 0..60 {
        explorer.handle_input_event(&InputEvent::Wheel {
            delta_y: 100.0,
            client: ScreenPoint::new(400.0, 300.0),
        });
        counts.push(explorer.render_count());
    }

    assert!(counts.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(counts.iter().all(|count| [10_000, 50_000, 100_000].contains(count)));
    assert_eq!(explorer.render_count(), 100_000);
    assert_eq!(explorer.point_cloud().len(), point_cloud_len(100_000));
    // Startup plus one regeneration per ladder step.
    assert_eq!(explorer.generation(), 3);
}

#[test]
fn double_tap_drag_zooms_around_tap_point() {
    let mut explorer = explorer();
    let tap = ScreenPoint::new(600.0, 150.0);
    let canvas = explorer.canvas_rect().size();
    let world = explorer.viewport().screen_to_world(tap, canvas);

    explorer.handle_input_event(&InputEvent::TouchStart {
        touches: vec![TouchPoint::new(0, tap.x, tap.y)],
        timestamp: ms(500),
    });
    explorer.handle_input_event(&InputEvent::TouchEnd { touches: vec![] });
    explorer.handle_input_event(&InputEvent::TouchStart {
        touches: vec![TouchPoint::new(0, tap.x, tap.y)],
        timestamp: ms(650),
    });
    for step in 1..=5 {
        explorer.handle_input_event(&InputEvent::TouchMove {
            touches: vec![TouchPoint::new(0, tap.x + 3.0 * f64::from(step), tap.y - 20.0 * f64::from(step))],
        });
    }
    explorer.handle_input_event(&InputEvent::TouchEnd { touches: vec![] });

    let back = explorer.viewport().world_to_screen(world, canvas);
    assert!(explorer.scale() > 50.0 * 1.19_f64.powi(5));
    assert!((back.x - tap.x).abs() < 1e-6);
    assert!((back.y - tap.y).abs() < 1e-6);
    assert_eq!(explorer.gesture_mode(), GestureMode::Idle);
}

#[test]
fn malformed_touch_sequence_leaves_view_untouched() {
    let mut explorer = explorer();
    let before = *explorer.viewport();

    explorer.handle_input_event(&InputEvent::TouchMove {
        touches: vec![TouchPoint::new(3, 10.0, 10.0)],
    });
    explorer.handle_input_event(&InputEvent::TouchEnd { touches: vec![] });
    explorer.handle_input_event(&InputEvent::PointerMove {
        client: ScreenPoint::new(50.0, 50.0),
    });

    assert_eq!(explorer.viewport(), &before);
    assert_eq!(explorer.generation(), 1);
}

#[test]
fn default_fern_grows_up_from_canvas_center() {
    let explorer = explorer();
    let canvas = explorer.canvas_rect().size();
    let cloud = explorer.point_cloud();

    // Base at the canvas midpoint, about ten world units (500px) tall.
    let in_band = cloud
        .points()
        .iter()
        .map(|point| explorer.viewport().world_to_screen(*point, canvas))
        .filter(|screen| (0.0..=800.0).contains(&screen.x) && (-225.0..=325.0).contains(&screen.y))
        .count();

    assert!(
        in_band as f64 > 0.95 * cloud.len() as f64,
        "{} of {} points in band",
        in_band,
        cloud.len()
    );
}

#[test]
fn zoomed_out_fern_fits_800_by_600_canvas() {
    let explorer = explorer();
    let canvas = explorer.canvas_rect().size();
    let cloud = explorer.point_cloud();
    let viewport = Viewport::new(25.0);

    let inside = cloud
        .points()
        .iter()
        .map(|point| viewport.world_to_screen(*point, canvas))
        .filter(|screen| (0.0..=800.0).contains(&screen.x) && (0.0..=600.0).contains(&screen.y))
        .count();

    assert!(
        inside as f64 > 0.95 * cloud.len() as f64,
        "{} of {} points inside",
        inside,
        cloud.len()
    );
}

#[test]
fn rendered_frame_shows_green_fern_on_dark_background() {
    let explorer = explorer();
    let mut frame = FrameBuffer::new(800, 600).unwrap();
    let style = explorer.settings().style;

    let plotted = explorer.render(&mut frame);

    let lit = frame.count_pixels(style.point);
    assert!(plotted > 0);
    assert!(lit > 500, "only {} lit pixels", lit);
    assert_eq!(lit + frame.count_pixels(style.background), 800 * 600);
}
