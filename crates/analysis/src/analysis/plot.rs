//! SVG trend chart.

use plotters::prelude::*;
use punnett_sim::errors::OutputError;
use punnett_sim::simulation::{TrendSeries, TrendSink};
use std::error::Error;
use std::path::{Path, PathBuf};

/// Renders the three recessive-phenotype series as one line chart.
///
/// Green is drawn in green, wrinkled in blue and green-and-wrinkled in red,
/// over generation on the x axis and percent (0 to 100) on the y axis.
#[derive(Debug, Clone)]
pub struct SvgTrendPlot {
    path: PathBuf,
    size: (u32, u32),
    title: String,
}

impl SvgTrendPlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: (800, 600),
            title: "Recessive phenotypes by generation".to_string(),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn draw(&self, trends: &TrendSeries) -> Result<(), Box<dyn Error>> {
        let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
        root.fill(&WHITE)?;

        let x_max = trends.generations.last().copied().unwrap_or(0).max(1) as f64;
        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", 24))
            .margin(16)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(0f64..x_max, 0f64..100f64)?;

        chart
            .configure_mesh()
            .x_desc("Generation")
            .y_desc("Percent of population")
            .draw()?;

        let series = [
            ("green", &trends.green, GREEN),
            ("wrinkled", &trends.wrinkled, BLUE),
            ("green and wrinkled", &trends.both, RED),
        ];
        for (label, values, color) in series {
            let points = trends
                .generations
                .iter()
                .zip(values)
                .map(|(&generation, &percent)| (generation as f64, percent));
            chart
                .draw_series(LineSeries::new(points, color.stroke_width(2)))?
                .label(label)
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }
}

impl TrendSink for SvgTrendPlot {
    fn write_trends(&mut self, trends: &TrendSeries) -> Result<(), OutputError> {
        self.draw(trends)
            .map_err(|e| OutputError::new(&self.path, e))?;
        log::info!("Wrote trend chart to {}", self.path.display());
        Ok(())
    }
}
