//! Terminal render sink.

use mr_or_ms_core::traits::{Region, RenderSink};

/// Render sink that writes each region update as a labelled line.
///
/// An empty string clears a region; on a line-oriented terminal that
/// means printing nothing.
pub struct ConsoleSink;

impl RenderSink for ConsoleSink {
    fn render(&self, region: Region, text: &str) {
        if text.is_empty() {
            return;
        }
        let label = match region {
            Region::Error => "error",
            Region::Prediction => "prediction",
            Region::SavedAnswer => "saved",
        };
        println!("{label}: {text}");
    }
}
