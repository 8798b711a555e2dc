//! CSV export of trend series.

use punnett_sim::errors::OutputError;
use punnett_sim::simulation::{TrendSeries, TrendSink};
use std::fs;
use std::path::{Path, PathBuf};

/// Column header written by [`CsvTrendWriter`].
pub const CSV_HEADER: &str = "generation,green,wrinkled,both,population_size";

/// Writes one CSV row per recorded generation.
#[derive(Debug, Clone)]
pub struct CsvTrendWriter {
    path: PathBuf,
}

impl CsvTrendWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render `trends` as CSV text, header first.
    pub fn to_csv(trends: &TrendSeries) -> String {
        let mut csv = String::with_capacity(64 * (trends.len() + 1));
        csv.push_str(CSV_HEADER);
        csv.push('\n');
        for record in trends.records() {
            csv.push_str(&format!(
                "{},{:.4},{:.4},{:.4},{}\n",
                record.generation,
                record.green,
                record.wrinkled,
                record.both,
                record.population_size
            ));
        }
        csv
    }
}

impl TrendSink for CsvTrendWriter {
    fn write_trends(&mut self, trends: &TrendSeries) -> Result<(), OutputError> {
        fs::write(&self.path, Self::to_csv(trends)).map_err(|e| OutputError::new(&self.path, e))?;
        log::info!("Wrote {} rows to {}", trends.len(), self.path.display());
        Ok(())
    }
}
