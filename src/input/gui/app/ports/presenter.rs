use crate::controllers::interactive::FernExplorer;
use egui::Context as EguiContext;
use std::error::Error;
use winit::window::Window;

pub trait GuiPresenterPort: Sized {
    fn new(window: &'static Window) -> Result<Self, Box<dyn Error>>;
    /// Draws the explorer's current cloud with the egui overlay on top.
    fn render(
        &mut self,
        explorer: &FernExplorer,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), Box<dyn Error>>;
}
