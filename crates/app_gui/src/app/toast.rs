use super::UiApp;
use eframe::egui;
use retina_core::NotificationKind;
use std::time::Instant;

impl UiApp {
    pub(super) fn render_toast(&self, ctx: &egui::Context, now: Instant) {
        let Some(notification) = self.session.notification(now) else {
            return;
        };
        let fill = match notification.kind {
            NotificationKind::Info => egui::Color32::from_gray(60),
            NotificationKind::Success => egui::Color32::from_rgb(46, 125, 50),
            NotificationKind::Error => egui::Color32::from_rgb(183, 28, 28),
        };
        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -48.0))
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(fill)
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&notification.message).color(egui::Color32::WHITE),
                        );
                    });
            });
    }
}
