//! Main window: drop zone, actions, preview and report.

mod report;
mod toast;

use eframe::{App, Frame, egui};
use retina_core::upload::{SUPPORTED_EXTENSIONS, UploadError};
use retina_core::{PredictionWorker, Session, SubmitOutcome, UploadedFile};
use rfd::FileDialog;
use std::path::PathBuf;
use std::time::Instant;

const PREVIEW_SIZE: u32 = 480;
const APP_VERSION: &str = env!("RETINASCAN_VERSION");

pub struct UiApp {
    session: Session<egui::TextureHandle>,
    worker: PredictionWorker,
    endpoint: String,
}

/// Where a picked or dropped image comes from. Drops on some platforms carry
/// bytes instead of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Path(PathBuf),
    Bytes { name: String, bytes: Vec<u8> },
}

impl UiApp {
    pub fn new(worker: PredictionWorker, endpoint: String) -> Self {
        Self {
            session: Session::new(),
            worker,
            endpoint,
        }
    }

    fn load(&mut self, ctx: &egui::Context, source: Source) {
        let file = match source {
            Source::Path(path) => UploadedFile::from_path(&path),
            Source::Bytes { name, bytes } => UploadedFile::from_bytes(name, bytes),
        };
        let loaded = file.and_then(|file| {
            let color = preview_image(&file)?;
            Ok((file, color))
        });
        match loaded {
            Ok((file, color)) => {
                let name = format!("preview:{}", file.name);
                let texture = ctx.load_texture(name, color, egui::TextureOptions::LINEAR);
                self.session.set_file(file, texture);
            }
            Err(e) => self.session.reject_file(&e, Instant::now()),
        }
    }

    fn submit(&mut self, ctx: &egui::Context) {
        match self.session.submit(Instant::now()) {
            SubmitOutcome::Dispatch(request) => {
                let ctx = ctx.clone();
                self.worker.dispatch(request, move || ctx.request_repaint());
            }
            SubmitOutcome::Busy(token) => {
                tracing::debug!(?token, "submit ignored, request pending");
            }
            SubmitOutcome::NoFile => {}
        }
    }

    fn poll_worker(&mut self) {
        while let Some(done) = self.worker.try_recv() {
            self.session.complete(done.token, done.result, Instant::now());
        }
    }

    fn handle_file_drag(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                dropped_source(&i.raw.dropped_files),
            )
        });
        if hovering != self.session.drop_zone_active() {
            self.session.drag_hover(hovering);
        }
        if let Some(source) = dropped {
            self.load(ctx, source);
        }
    }

    fn render_drop_zone(&mut self, ui: &mut egui::Ui) {
        let active = self.session.drop_zone_active();
        let visuals = ui.visuals();
        let (stroke, fill) = if active {
            (
                egui::Stroke::new(2.0, visuals.selection.stroke.color),
                visuals.selection.bg_fill.gamma_multiply(0.25),
            )
        } else {
            (
                egui::Stroke::new(1.0, visuals.widgets.noninteractive.bg_stroke.color),
                visuals.faint_bg_color,
            )
        };

        egui::Frame::group(ui.style())
            .stroke(stroke)
            .fill(fill)
            .inner_margin(egui::Margin::same(24))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    if ui.button("Choose image...").clicked()
                        && let Some(path) = FileDialog::new()
                            .add_filter("Image", SUPPORTED_EXTENSIONS)
                            .pick_file()
                    {
                        let ctx = ui.ctx().clone();
                        self.load(&ctx, Source::Path(path));
                    }
                    ui.add_space(6.0);
                    ui.label("Drag and drop an image here to upload");
                });
            });
    }

    fn render_preview(&self, ui: &mut egui::Ui) {
        let Some(upload) = self.session.upload() else {
            return;
        };
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            let size = egui::vec2(PREVIEW_SIZE as f32, PREVIEW_SIZE as f32);
            let texture = egui::load::SizedTexture::from_handle(&upload.preview);
            ui.add(egui::Image::from_texture(texture).max_size(size));
            ui.small(&upload.file.name);
        });
    }
}

impl App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let now = Instant::now();
        self.poll_worker();
        self.handle_file_drag(ctx);

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(6.0);
                ui.heading("DIABETIC RETINOPATHY");
                ui.label("Upload your image here");
                ui.add_space(6.0);
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small(format!("Service: {}", self.endpoint));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(format!("v{APP_VERSION}"));
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.render_drop_zone(ui);
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        let busy = self.session.is_busy();
                        let label = if busy { "Submitting..." } else { "Submit" };
                        if ui.add_enabled(!busy, egui::Button::new(label)).clicked() {
                            self.submit(ctx);
                        }
                        if ui.button("Clear").clicked() {
                            self.session.clear();
                        }
                        if busy {
                            ui.spinner();
                        }
                    });
                    self.render_preview(ui);
                    self.render_report(ui);
                });
        });

        self.render_toast(ctx, now);
        if let Some(left) = self.session.tick(now) {
            ctx.request_repaint_after(left);
        }
    }
}

fn dropped_source(files: &[egui::DroppedFile]) -> Option<Source> {
    let file = files.first()?;
    if let Some(path) = &file.path {
        return Some(Source::Path(path.clone()));
    }
    file.bytes.as_ref().map(|bytes| Source::Bytes {
        name: file.name.clone(),
        bytes: bytes.to_vec(),
    })
}

fn preview_image(file: &UploadedFile) -> Result<egui::ColorImage, UploadError> {
    let img = image::load_from_memory(&file.bytes).map_err(|e| {
        tracing::warn!("cannot decode {}: {e}", file.name);
        UploadError::NotAnImage {
            name: file.name.clone(),
        }
    })?;
    let thumb = img.thumbnail(PREVIEW_SIZE, PREVIEW_SIZE).to_rgba8();
    let (w, h) = thumb.dimensions();
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        [w as usize, h as usize],
        thumb.as_raw(),
    ))
}
