use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use std::error::Error;
use winit::window::Window;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(&self, window: &'static Window) -> Result<T, Box<dyn Error>>;
}
