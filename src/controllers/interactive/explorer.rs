use crate::controllers::interactive::coefficient_editor::CoefficientEditor;
use crate::controllers::interactive::data::fractal_config::FractalConfig;
use crate::controllers::interactive::settings::ExplorerSettings;
use crate::core::actions::generate_point_cloud::generate_point_cloud::generate_point_cloud;
use crate::core::actions::render_point_cloud::ports::raster_surface::RasterSurface;
use crate::core::actions::render_point_cloud::render_point_cloud::render_point_cloud;
use crate::core::data::affine_map::CoefficientField;
use crate::core::data::canvas::CanvasRect;
use crate::core::data::map_set::{MapId, MapSet};
use crate::core::data::point_cloud::PointCloud;
use crate::core::gesture::{GestureMode, InputEvent, StateDelta, handle_input_event};
use crate::core::session::SessionState;
use crate::core::view::Viewport;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RegenerationReason {
    Startup,
    DetailLevel,
    CoefficientEdit,
    Reset,
}

/// One explorer session: the map set, the view onto it and the sampled cloud.
///
/// Single-threaded. The host feeds input events and clock ticks; the
/// explorer regenerates the cloud when the map set or render count changes
/// and draws on request.
pub struct FernExplorer {
    settings: ExplorerSettings,
    session: SessionState,
    config: FractalConfig,
    editor: CoefficientEditor,
    rng: SmallRng,
    cloud: PointCloud,
    canvas: CanvasRect,
    generation: u64,
    selected_map: MapId,
    coefficient_panel_visible: bool,
}

impl FernExplorer {
    #[must_use]
    pub fn new(canvas: CanvasRect) -> Self {
        Self::with_settings(canvas, ExplorerSettings::default())
    }

    #[must_use]
    pub fn with_settings(canvas: CanvasRect, settings: ExplorerSettings) -> Self {
        Self::build(canvas, settings, SmallRng::from_os_rng())
    }

    /// Deterministic sampling, for tests and benchmarks.
    #[must_use]
    pub fn with_seed(canvas: CanvasRect, settings: ExplorerSettings, seed: u64) -> Self {
        Self::build(canvas, settings, SmallRng::seed_from_u64(seed))
    }

    fn build(canvas: CanvasRect, settings: ExplorerSettings, rng: SmallRng) -> Self {
        let mut explorer = Self {
            session: SessionState::new(&settings.rules),
            config: FractalConfig::default(),
            editor: CoefficientEditor::new(&settings.editor),
            settings,
            rng,
            cloud: PointCloud::default(),
            canvas,
            generation: 0,
            selected_map: MapId::default(),
            coefficient_panel_visible: true,
        };

        explorer.regenerate(RegenerationReason::Startup);
        explorer
    }

    /// Interprets one input event. Level-of-detail increases regenerate
    /// the cloud before returning.
    pub fn handle_input_event(&mut self, event: &InputEvent) -> StateDelta {
        let previous_count = self.session.render_count;
        let delta = handle_input_event(&mut self.session, event, &self.canvas, &self.settings.rules);

        if delta.needs_regeneration() {
            tracing::info!(
                scale = self.session.viewport.scale(),
                from = previous_count,
                to = self.session.render_count,
                "level of detail raised"
            );
            self.regenerate(RegenerationReason::DetailLevel);
        }

        delta
    }

    pub fn set_canvas_rect(&mut self, canvas: CanvasRect) {
        self.canvas = canvas;
    }

    #[must_use]
    pub fn canvas_rect(&self) -> CanvasRect {
        self.canvas
    }

    /// Applies the edit now and schedules a debounced regeneration.
    pub fn set_coefficient(&mut self, map: MapId, field: CoefficientField, value: f64, now: Duration) -> bool {
        self.editor
            .set_coefficient(&mut self.config.map_set, map, field, value, now)
    }

    pub fn set_coefficient_str(&mut self, map: &str, field: &str, value: &str, now: Duration) -> bool {
        self.editor
            .set_coefficient_str(&mut self.config.map_set, map, field, value, now)
    }

    /// Runs the pending regeneration if its quiet period has elapsed.
    /// Returns whether the cloud was regenerated.
    pub fn tick(&mut self, now: Duration) -> bool {
        if !self.editor.poll_regeneration(now) {
            return false;
        }

        self.regenerate(RegenerationReason::CoefficientEdit);
        true
    }

    /// When the host should call [`Self::tick`] next, if anything is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.editor.next_deadline()
    }

    /// Back to the default view, density, map set and an idle gesture.
    pub fn reset(&mut self) {
        tracing::info!("resetting explorer");

        self.session.reset(&self.settings.rules);
        self.config.reset();
        self.editor.cancel_pending();
        self.regenerate(RegenerationReason::Reset);
    }

    pub fn toggle_coefficient_panel(&mut self) {
        self.coefficient_panel_visible = !self.coefficient_panel_visible;
    }

    #[must_use]
    pub fn coefficient_panel_visible(&self) -> bool {
        self.coefficient_panel_visible
    }

    pub fn select_map(&mut self, map: MapId) {
        self.selected_map = map;
    }

    #[must_use]
    pub fn selected_map(&self) -> MapId {
        self.selected_map
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.session.viewport.scale()
    }

    #[must_use]
    pub fn render_count(&self) -> usize {
        self.session.render_count
    }

    #[must_use]
    pub fn map_set(&self) -> &MapSet {
        &self.config.map_set
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.session.viewport
    }

    #[must_use]
    pub fn gesture_mode(&self) -> GestureMode {
        self.session.gesture.mode
    }

    #[must_use]
    pub fn point_cloud(&self) -> &PointCloud {
        &self.cloud
    }

    /// Number of regenerations so far, the startup one included.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn settings(&self) -> &ExplorerSettings {
        &self.settings
    }

    /// Draws the current cloud; returns how many points landed on the surface.
    pub fn render<S: RasterSurface>(&self, surface: &mut S) -> usize {
        render_point_cloud(&self.cloud, &self.session.viewport, surface, &self.settings.style)
    }

    fn regenerate(&mut self, reason: RegenerationReason) {
        let start = Instant::now();
        let count = self.session.render_count;

        self.cloud = generate_point_cloud(&self.config.map_set, count, &mut self.rng);
        self.generation += 1;

        tracing::debug!(
            ?reason,
            generation = self.generation,
            count,
            points = self.cloud.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "point cloud regenerated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_point_cloud::generate_point_cloud::point_cloud_len;
    use crate::core::data::frame_buffer::FrameBuffer;
    use crate::core::data::point::ScreenPoint;

    fn explorer() -> FernExplorer {
        FernExplorer::with_seed(
            CanvasRect::full_window(800.0, 600.0).unwrap(),
            ExplorerSettings::default(),
            7,
        )
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_startup_generates_initial_cloud() {
        let explorer = explorer();

        assert_eq!(explorer.generation(), 1);
        assert_eq!(explorer.render_count(), 10_000);
        assert_eq!(explorer.point_cloud().len(), point_cloud_len(10_000));
        assert_eq!(explorer.selected_map(), MapId::MainLeaflets);
        assert!(explorer.coefficient_panel_visible());
    }

    #[test]
    fn test_pan_does_not_regenerate() {
        let mut explorer = explorer();

        explorer.handle_input_event(&InputEvent::PointerDown { client: ScreenPoint::new(0.0, 0.0) });
        explorer.handle_input_event(&InputEvent::PointerMove { client: ScreenPoint::new(40.0, 0.0) });

        assert_eq!(explorer.generation(), 1);
        assert_eq!(explorer.viewport().offset(), (40.0, 0.0));
    }

    #[test]
    fn test_detail_increase_regenerates_with_new_count() {
        let mut explorer = explorer();
        let wheel_up = InputEvent::Wheel {
            delta_y: -1.0,
            client: ScreenPoint::new(400.0, 300.0),
        };

        // 50 * 1.1^15 ~ 208.9
        for _ in 0..15 {
            explorer.handle_input_event(&wheel_up);
        }

        assert_eq!(explorer.render_count(), 50_000);
        assert_eq!(explorer.generation(), 2);
        assert_eq!(explorer.point_cloud().len(), point_cloud_len(50_000));
    }

    #[test]
    fn test_edit_regenerates_only_after_tick_past_deadline() {
        let mut explorer = explorer();

        assert!(explorer.set_coefficient(MapId::Stem, CoefficientField::F, 0.5, ms(0)));
        assert_eq!(explorer.next_deadline(), Some(ms(100)));
        assert!(!explorer.tick(ms(50)));
        assert_eq!(explorer.generation(), 1);

        assert!(explorer.tick(ms(100)));
        assert_eq!(explorer.generation(), 2);
        assert_eq!(explorer.next_deadline(), None);
    }

    #[test]
    fn test_reset_cancels_pending_edit_regeneration() {
        let mut explorer = explorer();
        explorer.set_coefficient(MapId::Stem, CoefficientField::F, 0.5, ms(0));

        explorer.reset();

        assert_eq!(explorer.map_set(), &MapSet::default());
        assert_eq!(explorer.generation(), 2);
        assert!(!explorer.tick(ms(500)));
    }

    #[test]
    fn test_toggle_panel_and_select_map_are_ui_only() {
        let mut explorer = explorer();

        explorer.toggle_coefficient_panel();
        explorer.select_map(MapId::RightLeaflet);

        assert!(!explorer.coefficient_panel_visible());
        assert_eq!(explorer.selected_map(), MapId::RightLeaflet);
        assert_eq!(explorer.generation(), 1);
        assert_eq!(explorer.map_set(), &MapSet::default());
    }

    #[test]
    fn test_canvas_rect_offsets_input() {
        let mut explorer = explorer();
        explorer.set_canvas_rect(CanvasRect::new(20.0, 10.0, 400.0, 300.0).unwrap());

        explorer.handle_input_event(&InputEvent::PointerDown { client: ScreenPoint::new(20.0, 10.0) });

        assert_eq!(
            explorer.gesture_mode(),
            GestureMode::Panning {
                last: ScreenPoint::new(0.0, 0.0)
            }
        );
    }

    #[test]
    fn test_render_draws_fern_into_frame() {
        let explorer = explorer();
        let mut frame = FrameBuffer::new(800, 600).unwrap();

        let plotted = explorer.render(&mut frame);

        assert!(plotted > 0);
        assert!(frame.count_pixels(explorer.settings().style.point) > 0);
    }
}
