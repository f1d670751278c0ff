use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Display order of the sentiment buckets.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SentimentBucket {
    pub count: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SentimentStats {
    pub positive: SentimentBucket,
    pub neutral: SentimentBucket,
    pub negative: SentimentBucket,
}

impl SentimentStats {
    pub fn bucket(&self, label: SentimentLabel) -> &SentimentBucket {
        match label {
            SentimentLabel::Positive => &self.positive,
            SentimentLabel::Neutral => &self.neutral,
            SentimentLabel::Negative => &self.negative,
        }
    }
}

/// Body of a successful `/analyze` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub improvement_suggestions: Vec<String>,
    pub sentiment_stats: SentimentStats,
}

impl AnalysisResult {
    /// Parses a response body, rejecting missing fields and percentages
    /// outside `0..=100`.
    pub fn from_json(body: &[u8]) -> Result<Self, String> {
        let result: AnalysisResult =
            serde_json::from_slice(body).map_err(|e| format!("invalid analysis body: {}", e))?;

        for label in SentimentLabel::ALL {
            let percent = result.sentiment_stats.bucket(label).percent;
            if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
                return Err(format!(
                    "{} percent out of range: {}",
                    label.as_str(),
                    percent
                ));
            }
        }

        Ok(result)
    }
}
