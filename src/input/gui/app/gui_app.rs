use crate::controllers::interactive::FernExplorer;
use crate::core::data::affine_map::CoefficientField;
use crate::core::data::canvas::CanvasRect;
use crate::core::data::map_set::MapId;
use crate::input::gui::app::input_translator::{InputTranslator, ends_interaction};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use egui::Context;
use egui_winit::State as EguiWinitState;
use std::error::Error;
use std::time::{Duration, Instant};
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    pub scale_factor: f64,
    presenter: T,
    pub explorer: FernExplorer,
    translator: InputTranslator,
    started_at: Instant,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
    ) -> Result<Self, Box<dyn Error>> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        let canvas = CanvasRect::full_window(f64::from(size.width.max(1)), f64::from(size.height.max(1)))?;

        Ok(Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            explorer: FernExplorer::new(canvas),
            translator: InputTranslator::default(),
            started_at: Instant::now(),
            egui_ctx,
            egui_state,
        })
    }

    /// Session clock fed to the explorer.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Wall-clock instant of the next pending regeneration, if any.
    #[must_use]
    pub fn next_wake(&self) -> Option<Instant> {
        self.explorer
            .next_deadline()
            .map(|deadline| self.started_at + deadline)
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.presenter.render(&self.explorer, egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Box<dyn Error>> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.presenter.resize(width, height)?;
        self.explorer
            .set_canvas_rect(CanvasRect::full_window(f64::from(width), f64::from(height))?);

        Ok(())
    }

    /// Forwards the event to egui, then to the explorer unless egui claimed it.
    /// Returns whether a redraw is needed.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(window, event);
        let now = self.now();

        let Some(input) = self.translator.translate(event, now) else {
            return response.repaint;
        };

        if response.consumed && !ends_interaction(&input) {
            return response.repaint;
        }

        self.explorer.handle_input_event(&input).needs_redraw() || response.repaint
    }

    /// Runs a due coefficient regeneration. Returns whether one ran.
    pub fn tick(&mut self) -> bool {
        let now = self.now();
        self.explorer.tick(now)
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let now = self.now();
        let explorer = &mut self.explorer;

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Barnsley Fern")
                .default_pos([10.0, 10.0])
                .default_size([280.0, 320.0])
                .show(ctx, |ui| {
                    ui.label(format!("Scale: {:.1}", explorer.scale()));
                    ui.label(format!("Points: {}", explorer.render_count()));

                    ui.horizontal(|ui| {
                        if ui.button("Reset view").clicked() {
                            explorer.reset();
                        }

                        let toggle_label = if explorer.coefficient_panel_visible() {
                            "Hide coefficients"
                        } else {
                            "Show coefficients"
                        };
                        if ui.button(toggle_label).clicked() {
                            explorer.toggle_coefficient_panel();
                        }
                    });

                    if explorer.coefficient_panel_visible() {
                        ui.separator();
                        coefficient_panel(ui, explorer, now);
                    }
                });
        })
    }
}

fn coefficient_panel(ui: &mut egui::Ui, explorer: &mut FernExplorer, now: Duration) {
    let mut selected = explorer.selected_map();

    ui.horizontal(|ui| {
        for &id in MapId::ALL {
            ui.selectable_value(&mut selected, id, id.key())
                .on_hover_text(id.display_name());
        }
    });
    explorer.select_map(selected);

    let map = *explorer.map_set().get(selected);
    ui.label(selected.display_name());
    ui.monospace(map.equation());
    ui.label(format!("Probability: {:.0}%", map.probability_percent()));

    for &field in CoefficientField::ALL {
        let mut value = map.get(field);
        let slider = egui::Slider::new(&mut value, field.slider_range())
            .step_by(field.step())
            .text(field.name());

        if ui.add(slider).changed() {
            explorer.set_coefficient(selected, field, value, now);
        }
    }
}
