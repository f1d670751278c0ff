mod client;
mod error;
mod types;

pub use client::AnalysisClient;
pub use error::{AnalysisError, FALLBACK_ERROR_MESSAGE};
pub use types::{AnalysisResult, SentimentLabel};
