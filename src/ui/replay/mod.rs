pub mod config;
pub(crate) mod replay_view;

use config::AppConfig;
use egui::{Color32, Visuals, style::Widgets};
use log::error;

use crate::replay::clock::{TickHandle, TickScheduler};
use crate::replay::{PlaybackController, SceneRenderer};
use crate::session::{RaceSession, Selection};

pub(crate) const PALETTE_BLACK: Color32 = Color32::from_rgb(12, 12, 12);
pub(crate) const PALETTE_BROWN: Color32 = Color32::from_rgb(72, 30, 20);
pub(crate) const PALETTE_MAROON: Color32 = Color32::from_rgb(155, 57, 34);

/// `TickScheduler` backed by egui's repaint request.
///
/// egui delivers at most one repaint per request, so the scheduler keeps a
/// single pending slot. `cancel` empties the slot: a repaint that still
/// arrives afterwards finds no callback to deliver, which is what makes a
/// stop cancel the tick itself rather than flag it away.
pub struct RepaintScheduler {
    ctx: egui::Context,
    next_id: u64,
    pending: Option<TickHandle>,
}

impl RepaintScheduler {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            next_id: 0,
            pending: None,
        }
    }

    /// Take the callback due for the repaint currently being processed
    pub fn fire(&mut self) -> Option<TickHandle> {
        self.pending.take()
    }
}

impl TickScheduler for RepaintScheduler {
    fn schedule(&mut self) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.pending = Some(handle);
        self.ctx.request_repaint();
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

/// `ReplayApp` plays a recorded race session back as a looping animation:
/// the track outline stays fixed while one marker per driver moves along
/// its position timeline, one step per display refresh.
pub struct ReplayApp {
    selection: Selection,
    controller: PlaybackController,
    scheduler: RepaintScheduler,
    renderer: SceneRenderer,
    app_config: AppConfig,
}

impl ReplayApp {
    pub fn new(
        session: RaceSession,
        selection: Selection,
        app_config: AppConfig,
        cc: &eframe::CreationContext<'_>,
    ) -> Self {
        let default_visuals = Visuals {
            dark_mode: true,
            hyperlink_color: PALETTE_MAROON,
            faint_bg_color: PALETTE_BLACK,
            extreme_bg_color: PALETTE_BROWN,
            panel_fill: PALETTE_BLACK,
            button_frame: true,
            widgets: Widgets::dark(),
            striped: false,
            ..Default::default()
        };
        cc.egui_ctx.set_visuals(default_visuals);

        let mut scheduler = RepaintScheduler::new(cc.egui_ctx.clone());
        let mut controller = PlaybackController::new();
        if let Err(e) = controller.mount(session, &mut scheduler) {
            error!("Error mounting session: {}", e);
        }

        let renderer = SceneRenderer::new(app_config.surface.clone());
        Self {
            selection,
            controller,
            scheduler,
            renderer,
            app_config,
        }
    }
}

impl eframe::App for ReplayApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // tearing down the view must always stop the clock
        self.controller.unmount(&mut self.scheduler);

        if let Err(e) = self.app_config.save() {
            error!("Error while saving config file: {}", e);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // advance the clock for this refresh before drawing, so the frame
        // painted below is the one the tick produced
        if let Some(fired) = self.scheduler.fire() {
            self.controller.on_tick(fired, &mut self.scheduler);
        }

        if let Some(outer_rect) = ctx.input(|is| is.viewport().outer_rect) {
            self.app_config.replay_window_position = outer_rect.min.into();
        }

        self.replay_view(ctx, _frame);
    }
}
