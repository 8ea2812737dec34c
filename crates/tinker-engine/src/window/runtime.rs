use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::core::{FrameCtx, Game, GameCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::{InputFrame, Key};
use crate::render::shapes::CircleRenderer;
use crate::scene::DrawList;
use crate::time::{DEFAULT_UPS, TickClock};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Target tick frequency (updates per second). `0` = uncapped.
    pub target_ups: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "tinker".to_string(),
            initial_size: LogicalSize::new(960.0, 720.0),
            target_ups: DEFAULT_UPS,
        }
    }
}

/// Loop driver state, mutated once per tick.
#[derive(Debug, Clone)]
pub struct LoopState {
    /// Cleared by a buffered stop request; checked at the top of each tick.
    pub running: bool,
    /// Target tick frequency.
    pub target_ups: u32,
    /// Elapsed wall-clock time of the last tick, in milliseconds.
    pub dt_ms: f32,
}

impl LoopState {
    fn new(target_ups: u32) -> Self {
        Self {
            running: true,
            target_ups,
            dt_ms: 0.0,
        }
    }
}

/// Entry point for the runtime.
///
/// Owns the event loop, a single window, and the tick cadence; the game only
/// sees the contexts handed to its hooks.
pub struct Runtime;

impl Runtime {
    pub fn run<G>(config: RuntimeConfig, gpu_init: GpuInit, game: G) -> Result<()>
    where
        G: 'static + Game,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut driver = LoopDriver::new(config, gpu_init, game);

        event_loop
            .run_app(&mut driver)
            .context("winit event loop terminated with error")?;

        if let Some(err) = driver.init_error.take() {
            return Err(err);
        }
        Ok(())
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct LoopDriver<G>
where
    G: Game + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    game: G,

    entry: Option<WindowEntry>,
    state: LoopState,
    clock: TickClock,
    ctx: GameCtx,
    input_frame: InputFrame,
    circles: CircleRenderer,
    draw_list: DrawList,

    init_error: Option<anyhow::Error>,
}

impl<G> LoopDriver<G>
where
    G: Game + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, game: G) -> Self {
        let target_ups = config.target_ups;
        let viewport = Viewport::new(
            config.initial_size.width as f32,
            config.initial_size.height as f32,
        );
        Self {
            config,
            gpu_init,
            game,
            entry: None,
            state: LoopState::new(target_ups),
            clock: TickClock::new(target_ups),
            ctx: GameCtx::new(viewport),
            input_frame: InputFrame::default(),
            circles: CircleRenderer::new(),
            draw_list: DrawList::new(),
            init_error: None,
        }
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let entry = WindowEntryBuilder {
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init))
                    .expect("GPU initialization failed for window")
            },
        }
        .build();

        self.entry = Some(entry);
        Ok(())
    }

    /// Runs one tick: pace, measure dt, dispatch hooks, apply the stop flag.
    fn run_tick(&mut self) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        let dt = self.clock.wait();
        self.state.dt_ms = dt;

        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (game, ctx, input_frame, circles, draw_list) = (
            &mut self.game,
            &mut self.ctx,
            &self.input_frame,
            &mut self.circles,
            &mut self.draw_list,
        );

        let mut keep_running = true;
        entry.with_mut(|fields| {
            ctx.set_viewport(logical_viewport(fields.window));

            keep_running = dispatch_tick(game, ctx, input_frame, dt, |g, c| {
                let mut frame =
                    FrameCtx::new(fields.window, fields.gpu, circles, draw_list, c.viewport());
                g.render(c, &mut frame);
                if frame.surface_fatal {
                    c.stop();
                }
            });
        });

        if !keep_running {
            log::info!("stop requested, loop will exit");
            self.state.running = false;
        }

        self.input_frame.end_tick();
    }
}

impl<G> ApplicationHandler for LoopDriver<G>
where
    G: Game + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            log::error!("failed to create window: {e:#}");
            self.init_error = Some(e);
            event_loop.exit();
            return;
        }

        if let Some(entry) = self.entry.as_ref() {
            self.ctx
                .set_viewport(entry.with_window(|w| logical_viewport(w)));
        }

        // Display surface is ready; give the scene its one-time init.
        self.game.init(&mut self.ctx);
        self.clock.reset();

        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.state.running {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: each redraw is one paced tick.
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                // Routed through the input hook rather than exiting here, so
                // the scene's `input` owns the quit decision.
                self.input_frame.request_quit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.entry.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                }
            }

            WindowEvent::Focused(false) => {
                self.input_frame.drop_held();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let key = map_key(event.physical_key);
                match event.state {
                    ElementState::Pressed => self.input_frame.press(key),
                    ElementState::Released => self.input_frame.release(key),
                }
            }

            WindowEvent::RedrawRequested => {
                // Stop takes effect here, before the next tick starts.
                if !self.state.running {
                    event_loop.exit();
                    return;
                }
                self.run_tick();
            }

            _ => {}
        }
    }
}

/// Runs one tick's hook sequence: `input` → `update` → `render`, each to
/// completion, then consumes any buffered stop request.
///
/// Returns `false` when the loop should stop before the next tick.
fn dispatch_tick<G, R>(
    game: &mut G,
    ctx: &mut GameCtx,
    input: &InputFrame,
    dt_ms: f32,
    render: R,
) -> bool
where
    G: Game,
    R: FnOnce(&mut G, &mut GameCtx),
{
    game.input(ctx, input);
    game.update(ctx, dt_ms);
    render(game, ctx);
    !ctx.take_stop()
}

fn logical_viewport(window: &Window) -> Viewport {
    let phys = window.inner_size();
    let scale = window.scale_factor();
    let logical: LogicalSize<f64> = phys.to_logical(scale);
    Viewport::new(logical.width as f32, logical.height as f32)
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::Enter => Key::Enter,
            KeyCode::Space => Key::Space,

            KeyCode::ArrowUp => Key::ArrowUp,
            KeyCode::ArrowDown => Key::ArrowDown,
            KeyCode::ArrowLeft => Key::ArrowLeft,
            KeyCode::ArrowRight => Key::ArrowRight,

            KeyCode::KeyW => Key::W,
            KeyCode::KeyA => Key::A,
            KeyCode::KeyS => Key::S,
            KeyCode::KeyD => Key::D,

            other => Key::Unknown(other as u32),
        },

        // No stable numeric exists for unidentified native keycodes.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    /// Records hook invocation order; optionally stops during `input`.
    #[derive(Default)]
    struct ProbeGame {
        calls: Vec<&'static str>,
        stop_in_input: bool,
    }

    impl Game for ProbeGame {
        fn input(&mut self, ctx: &mut GameCtx, input: &InputFrame) {
            self.calls.push("input");
            if self.stop_in_input || input.quit_requested() {
                ctx.stop();
            }
        }

        fn update(&mut self, _ctx: &mut GameCtx, _dt_ms: f32) {
            self.calls.push("update");
        }

        fn render(&mut self, _ctx: &mut GameCtx, _frame: &mut FrameCtx<'_, '_>) {
            unreachable!("tests drive render through the closure");
        }
    }

    fn ctx() -> GameCtx {
        GameCtx::new(Viewport::new(960.0, 720.0))
    }

    #[test]
    fn hooks_run_in_order() {
        let mut game = ProbeGame::default();
        let mut ctx = ctx();
        let keep = dispatch_tick(&mut game, &mut ctx, &InputFrame::default(), 16.0, |g, _| {
            g.calls.push("render");
        });
        assert!(keep);
        assert_eq!(game.calls, ["input", "update", "render"]);
    }

    #[test]
    fn stop_during_input_finishes_the_tick() {
        let mut game = ProbeGame {
            stop_in_input: true,
            ..Default::default()
        };
        let mut ctx = ctx();
        let keep = dispatch_tick(&mut game, &mut ctx, &InputFrame::default(), 16.0, |g, _| {
            g.calls.push("render");
        });
        // In-flight hooks still ran; the loop stops before the next tick.
        assert!(!keep);
        assert_eq!(game.calls, ["input", "update", "render"]);
    }

    #[test]
    fn stop_is_consumed_not_sticky() {
        let mut game = ProbeGame {
            stop_in_input: true,
            ..Default::default()
        };
        let mut ctx = ctx();
        assert!(!dispatch_tick(&mut game, &mut ctx, &InputFrame::default(), 16.0, |_, _| {}));

        game.stop_in_input = false;
        assert!(dispatch_tick(&mut game, &mut ctx, &InputFrame::default(), 16.0, |_, _| {}));
    }

    #[test]
    fn quit_event_stops_through_default_input_path() {
        let mut game = ProbeGame::default();
        let mut ctx = ctx();
        let mut input = InputFrame::default();
        input.request_quit();
        let keep = dispatch_tick(&mut game, &mut ctx, &input, 16.0, |_, _| {});
        assert!(!keep);
    }

    /// A game relying entirely on the trait defaults (no overrides except a
    /// render stub, which the dispatcher replaces anyway).
    struct DefaultGame;
    impl Game for DefaultGame {}

    #[test]
    fn default_hooks_set_black_clear_and_honor_quit() {
        let mut game = DefaultGame;
        let mut ctx = ctx();
        game.init(&mut ctx);
        assert_eq!(ctx.clear_color(), Color::BLACK);

        let mut input = InputFrame::default();
        input.request_quit();
        let keep = dispatch_tick(&mut game, &mut ctx, &input, 16.0, |_, _| {});
        assert!(!keep);
    }

    #[test]
    fn loop_state_starts_running_at_target_ups() {
        let state = LoopState::new(60);
        assert!(state.running);
        assert_eq!(state.target_ups, 60);
        assert_eq!(state.dt_ms, 0.0);
    }
}
