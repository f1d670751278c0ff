use super::results;
use super::FeedbackReporter;
use eframe::egui::{self, Color32, RichText};
use rfd::FileDialog;

const ACCENT: Color32 = Color32::from_rgb(161, 89, 225);
const ERROR_RED: Color32 = Color32::from_rgb(220, 50, 50);

impl FeedbackReporter {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.heading("Customer Feedback Sentiment Reporter");
                    ui.add_space(5.0);
                    ui.label(
                        RichText::new(
                            "Upload a CSV of customer feedback to uncover sentiment trends, \
                             key themes, and the top improvement opportunities.",
                        )
                        .color(ui.visuals().text_color().gamma_multiply(0.7)),
                    );
                });

                ui.add_space(20.0);
                self.render_upload(ui);

                if let Some(error) = self.submission().error_message() {
                    ui.add_space(10.0);
                    ui.vertical_centered(|ui| {
                        ui.colored_label(ERROR_RED, error);
                    });
                }

                let mut reset_clicked = false;
                if let Some(result) = self.submission().result() {
                    ui.add_space(20.0);
                    reset_clicked = results::show(ui, result);
                }
                if reset_clicked {
                    self.reset();
                }

                ui.add_space(20.0);
            });
        });
    }

    fn render_upload(&mut self, ui: &mut egui::Ui) {
        let busy = self.is_busy();

        ui.group(|ui| {
            ui.label("Select feedback CSV file");
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.add_enabled_ui(!busy, |ui| {
                    if ui.button("📁 Choose File").clicked() {
                        let picked = FileDialog::new()
                            .add_filter("CSV", &["csv"])
                            .pick_file();
                        self.select_file(picked);
                    }
                });
                if let Some(file) = self.form().selected() {
                    ui.label(format!("Selected: {}", file.name));
                }
            });

            if let Some(message) = self.form().validation_message() {
                ui.add_space(5.0);
                ui.colored_label(ERROR_RED, message);
            }
        });

        ui.add_space(20.0);

        ui.vertical_centered(|ui| {
            let label = if busy {
                "Uploading..."
            } else {
                "📤 Analyze Feedback"
            };
            ui.add_enabled_ui(self.form().can_submit(busy), |ui| {
                let button = egui::Button::new(label).min_size(egui::vec2(200.0, 40.0));
                if ui.add(button).clicked() {
                    self.start_analysis();
                }
            });

            if busy {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("⏳ Analyzing feedback...").color(ACCENT));
                });
            }
        });
    }
}
