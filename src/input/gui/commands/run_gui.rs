use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use std::error::Error;
use std::marker::PhantomData;
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoop::new()?;

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Barnsley Fern Explorer")
                .with_inner_size(LogicalSize::new(800.0, 600.0))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window)?;
        let mut app = GuiApp::new(window, &event_loop, presenter)?;
        let mut redraw_pending = true;

        tracing::info!(
            width = window.inner_size().width,
            height = window.inner_size().height,
            "explorer window opened"
        );

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent { ref event, window_id } if window_id == window.id() => {
                if app.handle_window_event(window, event) {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        let egui_output = app.update_ui(window);

                        app.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if egui_output
                            .viewport_output
                            .values()
                            .any(|v| v.repaint_delay.is_zero())
                        {
                            redraw_pending = true;
                        }

                        if let Err(e) = app.render(egui_output) {
                            tracing::error!(error = %e, "render failed");
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(e) = app.resize(size.width, size.height) {
                            tracing::error!(error = %e, "resize failed");
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.scale_factor = *scale_factor;
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);

                        let size = window.inner_size();
                        if let Err(e) = app.resize(size.width, size.height) {
                            tracing::error!(error = %e, "resize failed");
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                if app.tick() {
                    redraw_pending = true;
                }

                match app.next_wake() {
                    Some(wake) => elwt.set_control_flow(ControlFlow::WaitUntil(wake)),
                    None => elwt.set_control_flow(ControlFlow::Wait),
                }

                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
