//! winit + pixels host loop for the sandbox.
//!
//! One redraw per poll iteration: collect input, run the panel frame
//! against the game state bindings, clear the framebuffer, draw the
//! panel scene, present. F1 toggles the panel, Escape quits.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use overlay::{draw_panel, screen_area_of_viewport, CheatPanel, PanelInput, Vec2};
use pixels::{Error as PixelsError, Pixels, SurfaceTexture};
use thiserror::Error;
use tracing::{info, warn};
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowBuilder};

use super::config::HostConfig;
use super::state::GameState;

const CLEAR_COLOR: [u8; 4] = [20, 22, 28, 255];

#[derive(Debug, Error)]
pub(crate) enum HostError {
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("failed to create application window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to create framebuffer surface: {0}")]
    CreateSurface(#[source] PixelsError),
    #[error("event loop failed: {0}")]
    EventLoopRun(#[source] EventLoopError),
}

pub(crate) fn run_host(config: HostConfig) -> Result<(), HostError> {
    let event_loop = EventLoop::new().map_err(HostError::CreateEventLoop)?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.window_title.clone())
            .with_inner_size(LogicalSize::new(
                config.window_width as f64,
                config.window_height as f64,
            ))
            .build(&event_loop)
            .map_err(HostError::CreateWindow)?,
    );
    let size = window.inner_size();
    let mut surface_size = (size.width.max(1), size.height.max(1));
    let mut pixels = build_pixels(Arc::clone(&window), surface_size.0, surface_size.1)
        .map_err(HostError::CreateSurface)?;

    // The panel's screen area is fixed at startup from the configured
    // camera viewport; window resizes rebuild the surface only.
    let screen_area = screen_area_of_viewport(
        config.camera_viewport.into(),
        (config.window_width, config.window_height),
    );
    let mut panel = CheatPanel::new(screen_area);
    panel.set_visible(config.panel_visible_at_start);
    let mut state = GameState::default();
    let mut input = InputCollector::default();

    let render_cap = normalize_render_fps_cap(config.max_render_fps);
    let frame_target = target_frame_duration(render_cap);
    let mut last_present = Instant::now();

    info!(
        width = config.window_width,
        height = config.window_height,
        panel_visible = panel.is_visible(),
        render_fps_cap = ?render_cap,
        "startup"
    );

    event_loop.set_control_flow(ControlFlow::Poll);
    let window_for_loop = Arc::clone(&window);
    event_loop
        .run(move |event, window_target| match event {
            Event::WindowEvent { window_id, event } if window_id == window_for_loop.id() => {
                match event {
                    WindowEvent::CloseRequested => {
                        info!(reason = "window_close", "shutdown_requested");
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        if new_size.width == 0 || new_size.height == 0 {
                            return;
                        }
                        match build_pixels(
                            Arc::clone(&window_for_loop),
                            new_size.width,
                            new_size.height,
                        ) {
                            Ok(rebuilt) => {
                                pixels = rebuilt;
                                surface_size = (new_size.width, new_size.height);
                            }
                            Err(error) => {
                                warn!(error = %error, "surface_resize_failed");
                                window_target.exit();
                            }
                        }
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        input.set_cursor_position(position.x as f32, position.y as f32);
                    }
                    WindowEvent::CursorLeft { .. } => {
                        input.clear_cursor_position();
                    }
                    WindowEvent::MouseInput { state: button_state, button, .. } => {
                        input.handle_mouse_input(button, button_state);
                    }
                    WindowEvent::KeyboardInput { event, .. } => {
                        input.handle_keyboard_input(&event);
                        if input.quit_requested {
                            info!(reason = "escape_key", "shutdown_requested");
                            window_target.exit();
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        if input.take_panel_toggle_pressed() {
                            panel.toggle_visible();
                            info!(visible = panel.is_visible(), "panel_toggled");
                        }

                        let elapsed = Instant::now().saturating_duration_since(last_present);
                        let cap_sleep = compute_cap_sleep(elapsed, frame_target);
                        if cap_sleep > Duration::ZERO {
                            thread::sleep(cap_sleep);
                        }

                        let panel_input = input.snapshot_for_frame();
                        let mut bindings = state.panel_bindings();
                        let scene = panel.frame(&panel_input, &mut bindings);

                        let frame = pixels.frame_mut();
                        for chunk in frame.chunks_exact_mut(4) {
                            chunk.copy_from_slice(&CLEAR_COLOR);
                        }
                        if let Some(scene) = &scene {
                            draw_panel(frame, surface_size.0, surface_size.1, scene);
                        }
                        if let Err(error) = pixels.render() {
                            warn!(error = %error, "render_failed");
                            window_target.exit();
                        }
                        last_present = Instant::now();
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                window_for_loop.request_redraw();
            }
            Event::LoopExiting => {
                info!("shutdown");
            }
            _ => {}
        })
        .map_err(HostError::EventLoopRun)
}

fn build_pixels(window: Arc<Window>, width: u32, height: u32) -> Result<Pixels<'static>, PixelsError> {
    let surface = SurfaceTexture::new(width, height, window);
    Pixels::new(width, height, surface)
}

#[derive(Debug, Default)]
struct InputCollector {
    quit_requested: bool,
    panel_toggle_is_down: bool,
    panel_toggle_pressed_edge: bool,
    left_mouse_is_down: bool,
    left_pressed_edge: bool,
    cursor_position: Option<Vec2>,
}

impl InputCollector {
    fn handle_keyboard_input(&mut self, key_event: &KeyEvent) {
        let is_pressed = key_event.state == ElementState::Pressed;
        match key_event.physical_key {
            PhysicalKey::Code(KeyCode::F1) => self.handle_panel_toggle_key_state(is_pressed),
            PhysicalKey::Code(KeyCode::Escape) => {
                if is_pressed {
                    self.quit_requested = true;
                }
            }
            _ => {}
        }
    }

    fn handle_panel_toggle_key_state(&mut self, is_pressed: bool) {
        if is_pressed {
            if !self.panel_toggle_is_down {
                self.panel_toggle_pressed_edge = true;
            }
            self.panel_toggle_is_down = true;
        } else {
            self.panel_toggle_is_down = false;
        }
    }

    fn handle_mouse_input(&mut self, button: MouseButton, state: ElementState) {
        if button != MouseButton::Left {
            return;
        }
        match state {
            ElementState::Pressed => {
                if !self.left_mouse_is_down {
                    self.left_pressed_edge = true;
                }
                self.left_mouse_is_down = true;
            }
            ElementState::Released => self.left_mouse_is_down = false,
        }
    }

    fn set_cursor_position(&mut self, x: f32, y: f32) {
        self.cursor_position = Some(Vec2 { x, y });
    }

    fn clear_cursor_position(&mut self) {
        self.cursor_position = None;
    }

    fn take_panel_toggle_pressed(&mut self) -> bool {
        let was_pressed = self.panel_toggle_pressed_edge;
        self.panel_toggle_pressed_edge = false;
        was_pressed
    }

    /// Builds the panel's per-frame input and consumes the click edge
    /// so a held button reports a single press.
    fn snapshot_for_frame(&mut self) -> PanelInput {
        let snapshot = PanelInput {
            cursor: self.cursor_position,
            left_down: self.left_mouse_is_down,
            left_pressed: self.left_pressed_edge,
        };
        self.left_pressed_edge = false;
        snapshot
    }
}

fn normalize_render_fps_cap(cap: Option<u32>) -> Option<u32> {
    cap.filter(|value| *value > 0)
}

fn target_frame_duration(max_render_fps: Option<u32>) -> Option<Duration> {
    max_render_fps.map(|fps| Duration::from_secs_f64(1.0 / fps as f64))
}

fn compute_cap_sleep(elapsed: Duration, target: Option<Duration>) -> Duration {
    match target {
        Some(frame_target) if elapsed < frame_target => frame_target - elapsed,
        _ => Duration::ZERO,
    }
}
