use winit::window::Window;

use crate::coords::Viewport;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::paint::Color;
use crate::render::shapes::CircleRenderer;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::DrawList;

/// Loop-visible scene state, persistent across ticks.
///
/// Handed to every hook. Carries the framebuffer extent, the clear color,
/// and the stop buffer; the runtime owns everything behind it.
#[derive(Debug)]
pub struct GameCtx {
    viewport: Viewport,
    clear_color: Color,
    stop_requested: bool,
}

impl GameCtx {
    /// Builds a context with the given framebuffer extent.
    ///
    /// Public so scenes can be driven by hand in tests; at runtime the loop
    /// driver constructs and owns the context.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            clear_color: Color::BLACK,
            stop_requested: false,
        }
    }

    /// Current framebuffer extent in logical pixels.
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub(crate) fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[inline]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    #[inline]
    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    /// Requests loop termination.
    ///
    /// Buffered: the remaining hooks of the current tick still run; the loop
    /// observes the flag before starting the next tick.
    #[inline]
    pub fn stop(&mut self) {
        self.stop_requested = true;
    }

    /// True when a stop has been requested but not yet consumed.
    #[inline]
    pub fn stop_requested(&self) -> bool {
        self.stop_requested
    }

    /// Consumes the buffered stop request.
    pub(crate) fn take_stop(&mut self) -> bool {
        std::mem::take(&mut self.stop_requested)
    }
}

/// Per-frame GPU handles passed to the `render` hook.
pub struct FrameCtx<'a, 'w> {
    window: &'a Window,
    gpu: &'a mut Gpu<'w>,
    circles: &'a mut CircleRenderer,
    draw_list: &'a mut DrawList,
    viewport: Viewport,
    pub(crate) surface_fatal: bool,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    pub(crate) fn new(
        window: &'a Window,
        gpu: &'a mut Gpu<'w>,
        circles: &'a mut CircleRenderer,
        draw_list: &'a mut DrawList,
        viewport: Viewport,
    ) -> Self {
        Self {
            window,
            gpu,
            circles,
            draw_list,
            viewport,
            surface_fatal: false,
        }
    }

    /// Clears the surface with `clear`, records draw commands via `record`,
    /// replays them, and presents the frame.
    ///
    /// Transient surface errors skip the frame; a lost surface is
    /// reconfigured for the next one. A fatal surface error is remembered and
    /// the runtime turns it into a stop.
    pub fn draw<F>(&mut self, clear: Color, record: F)
    where
        F: FnOnce(&mut DrawList),
    {
        self.draw_list.clear();
        record(self.draw_list);

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let action = self.gpu.handle_surface_error(err);
                if action == SurfaceErrorAction::Fatal {
                    log::error!("fatal surface error, stopping");
                    self.surface_fatal = true;
                }
                return;
            }
        };

        // Clear pass — dropped before the encoder is moved into submit().
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("tinker clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear.r as f64,
                            g: clear.g as f64,
                            b: clear.b as f64,
                            a: clear.a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            self.viewport,
        );

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            self.circles.render(&rctx, &mut target, self.draw_list);
        }

        self.window.pre_present_notify();
        self.gpu.submit(frame);
    }
}
