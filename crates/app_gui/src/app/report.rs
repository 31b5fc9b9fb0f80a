//! Report box for the graded scan.

use super::UiApp;
use eframe::egui;

impl UiApp {
    /// Renders the authored report for the current diagnosis; nothing while
    /// the box is hidden or the label has no entry.
    pub(super) fn render_report(&self, ui: &mut egui::Ui) {
        let Some(report) = self.session.report() else {
            return;
        };
        ui.add_space(16.0);
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.heading("Diagnosis Report");
                if let Some(diagnosis) = self.session.diagnosis() {
                    ui.label(egui::RichText::new(&diagnosis.label).strong());
                }
                if let Some(confidence) = self.session.confidence() {
                    ui.label(format!("Confidence: {:.0}%", confidence * 100.0));
                }
                section(ui, "Report Overview", report.overview);
                section(ui, "Symptoms", report.symptoms);
                section(ui, "Treatment", report.treatment);
            });
    }
}

fn section(ui: &mut egui::Ui, title: &str, text: &str) {
    ui.add_space(10.0);
    ui.label(egui::RichText::new(title).size(16.0).strong());
    ui.label(text);
}
