use egui::{Align2, Color32, FontId, Layout, Sense, Vec2};
use log::debug;

use crate::render::{self, CanvasBackend};
use crate::replay::geometry::Projection;
use crate::replay::scene::DrawCommand;
use crate::replay::ViewTransform;

use super::ReplayApp;

impl ReplayApp {
    pub(crate) fn replay_view(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").min_height(30.).show(ctx, |ui| {
            ui.with_layout(Layout::left_to_right(egui::Align::Center), |ui| {
                ui.add_space(10.);
                ui.label(format!(
                    "{} {}",
                    self.selection.year, self.selection.event_name
                ));

                let play_label = if self.controller.is_running() {
                    "Pause"
                } else {
                    "Play"
                };
                if ui.button(play_label).clicked() {
                    if self.controller.is_running() {
                        self.controller.pause(&mut self.scheduler);
                    } else if let Err(e) = self.controller.resume(&mut self.scheduler) {
                        debug!("cannot resume playback: {}", e);
                    }
                }

                if ui
                    .selectable_label(self.app_config.show_labels, "Labels")
                    .clicked()
                {
                    self.app_config.show_labels = !self.app_config.show_labels;
                }

                ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(10.);
                    ui.label(format!(
                        "frame {} / {}",
                        self.controller.frame_index(),
                        self.controller.max_frames()
                    ));
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (width, height) = self.renderer.config().surface_size;
            let (response, painter) =
                ui.allocate_painter(Vec2::new(width as f32, height as f32), Sense::hover());

            // white replay surface; the window chrome stays dark
            painter.rect_filled(response.rect, 0, Color32::WHITE);

            let Some(session) = self.controller.session() else {
                return;
            };

            match ViewTransform::fit(&session.track, self.renderer.config(), Projection::Scaled) {
                Ok(transform) => {
                    let mut commands = self.renderer.render_frame(
                        session,
                        self.controller.frame_index(),
                        &transform,
                    );
                    if !self.app_config.show_labels {
                        commands.retain(|command| !matches!(command, DrawCommand::Label { .. }));
                    }

                    let mut backend = CanvasBackend::new(&painter, response.rect.min);
                    render::submit(&mut backend, &commands);
                }
                Err(_) => {
                    // degenerate geometry: nothing to draw yet
                    painter.text(
                        response.rect.center(),
                        Align2::CENTER_CENTER,
                        "Waiting for track data",
                        FontId::proportional(14.),
                        Color32::GRAY,
                    );
                }
            }
        });
    }
}
