//! Report generation port trait.

use crate::domain::error::GuideError;
use crate::domain::guide::MarketGuide;

/// Port for writing market guide reports.
pub trait ReportPort {
    fn render(&self, guide: &MarketGuide) -> String;

    /// Default implementation: writes the rendered report to `output_path`.
    fn write(&self, guide: &MarketGuide, output_path: &str) -> Result<(), GuideError> {
        std::fs::write(output_path, self.render(guide))?;
        Ok(())
    }
}
