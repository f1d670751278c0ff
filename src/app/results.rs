use crate::analysis::{AnalysisResult, SentimentLabel};
use eframe::egui::{self, Color32, RichText};

/// One line of the sentiment breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentRow {
    pub label: SentimentLabel,
    pub count: u64,
    pub percent: String,
}

impl SentimentRow {
    pub fn title(&self) -> &'static str {
        self.label.title()
    }
}

/// Always three rows, positive first, whatever the counts are.
pub fn sentiment_rows(result: &AnalysisResult) -> [SentimentRow; 3] {
    SentimentLabel::ALL.map(|label| {
        let bucket = result.sentiment_stats.bucket(label);
        SentimentRow {
            label,
            count: bucket.count,
            percent: format_percent(bucket.percent),
        }
    })
}

pub fn format_percent(percent: f64) -> String {
    format!("{:.2}%", percent)
}

fn label_color(label: SentimentLabel) -> Color32 {
    match label {
        SentimentLabel::Positive => Color32::from_rgb(0, 160, 90),
        SentimentLabel::Neutral => Color32::from_rgb(150, 150, 150),
        SentimentLabel::Negative => Color32::from_rgb(220, 50, 50),
    }
}

/// Draws the results of one analysis. Returns `true` when the user asked to
/// analyze another file.
pub fn show(ui: &mut egui::Ui, result: &AnalysisResult) -> bool {
    let mut reset_clicked = false;

    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.heading("Sentiment Breakdown");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🔄 Analyze Another File").clicked() {
                    reset_clicked = true;
                }
            });
        });

        ui.add_space(10.0);

        egui::Grid::new("sentiment_breakdown")
            .num_columns(3)
            .spacing([40.0, 8.0])
            .striped(true)
            .show(ui, |ui| {
                for row in sentiment_rows(result) {
                    ui.label(
                        RichText::new(row.title())
                            .strong()
                            .color(label_color(row.label)),
                    );
                    ui.label(RichText::new(row.count.to_string()).size(18.0).strong());
                    ui.label(row.percent.as_str());
                    ui.end_row();
                }
            });
    });

    ui.add_space(10.0);

    ui.group(|ui| {
        ui.heading("Summary of Key Themes");
        ui.add_space(5.0);
        ui.label(result.summary.as_str());
    });

    ui.add_space(10.0);

    ui.group(|ui| {
        ui.heading("Improvement Suggestions");
        ui.add_space(5.0);
        for (index, suggestion) in result.improvement_suggestions.iter().enumerate() {
            ui.label(format!("{}. {}", index + 1, suggestion));
        }
    });

    reset_clicked
}
