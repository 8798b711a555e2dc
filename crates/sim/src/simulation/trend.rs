//! Per-generation phenotype records and the sink they are handed to.

use crate::errors::OutputError;
use crate::simulation::PhenotypeStats;
use serde::{Deserialize, Serialize};

/// Statistics recorded for one generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Generation index (0 = founders)
    pub generation: usize,
    /// Percentage green
    pub green: f64,
    /// Percentage wrinkled
    pub wrinkled: f64,
    /// Percentage green and wrinkled
    pub both: f64,
    /// Number of individuals the percentages were computed over
    pub population_size: usize,
}

impl GenerationRecord {
    pub fn new(generation: usize, stats: PhenotypeStats, population_size: usize) -> Self {
        Self {
            generation,
            green: stats.green,
            wrinkled: stats.wrinkled,
            both: stats.both,
            population_size,
        }
    }
}

/// Parallel series of recorded statistics, indexed by generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub generations: Vec<usize>,
    pub green: Vec<f64>,
    pub wrinkled: Vec<f64>,
    pub both: Vec<f64>,
    pub population_sizes: Vec<usize>,
}

impl TrendSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            generations: Vec::with_capacity(capacity),
            green: Vec::with_capacity(capacity),
            wrinkled: Vec::with_capacity(capacity),
            both: Vec::with_capacity(capacity),
            population_sizes: Vec::with_capacity(capacity),
        }
    }

    /// Append one generation's record.
    pub fn push(&mut self, record: GenerationRecord) {
        self.generations.push(record.generation);
        self.green.push(record.green);
        self.wrinkled.push(record.wrinkled);
        self.both.push(record.both);
        self.population_sizes.push(record.population_size);
    }

    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    /// Record at position `index`.
    pub fn get(&self, index: usize) -> Option<GenerationRecord> {
        Some(GenerationRecord {
            generation: *self.generations.get(index)?,
            green: *self.green.get(index)?,
            wrinkled: *self.wrinkled.get(index)?,
            both: *self.both.get(index)?,
            population_size: *self.population_sizes.get(index)?,
        })
    }

    /// Most recent record.
    pub fn last(&self) -> Option<GenerationRecord> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterate over the records in generation order.
    pub fn records(&self) -> impl Iterator<Item = GenerationRecord> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}

impl FromIterator<GenerationRecord> for TrendSeries {
    fn from_iter<T: IntoIterator<Item = GenerationRecord>>(iter: T) -> Self {
        let mut series = Self::new();
        for record in iter {
            series.push(record);
        }
        series
    }
}

/// Destination for a finished run's trend series (a chart, a CSV file, ...).
///
/// A sink must either persist the whole series or fail; partial artifacts are
/// reported as [`OutputError`].
pub trait TrendSink {
    fn write_trends(&mut self, trends: &TrendSeries) -> Result<(), OutputError>;
}

impl<S: TrendSink + ?Sized> TrendSink for &mut S {
    fn write_trends(&mut self, trends: &TrendSeries) -> Result<(), OutputError> {
        (**self).write_trends(trends)
    }
}

/// A sink that keeps the series in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub received: Vec<TrendSeries>,
}

impl TrendSink for MemorySink {
    fn write_trends(&mut self, trends: &TrendSeries) -> Result<(), OutputError> {
        self.received.push(trends.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(generation: usize, green: f64) -> GenerationRecord {
        GenerationRecord {
            generation,
            green,
            wrinkled: green / 2.0,
            both: green / 4.0,
            population_size: 100,
        }
    }

    #[test]
    fn test_trend_series_push_and_get() {
        let mut series = TrendSeries::with_capacity(2);
        series.push(record(0, 0.0));
        series.push(record(1, 8.0));

        assert_eq!(series.len(), 2);
        assert_eq!(series.generations, [0, 1]);
        assert_eq!(series.wrinkled, [0.0, 4.0]);
        assert_eq!(series.get(1), Some(record(1, 8.0)));
        assert_eq!(series.get(2), None);
        assert_eq!(series.last(), Some(record(1, 8.0)));
    }

    #[test]
    fn test_trend_series_empty() {
        let series = TrendSeries::new();
        assert!(series.is_empty());
        assert_eq!(series.last(), None);
        assert_eq!(series.records().count(), 0);
    }

    #[test]
    fn test_trend_series_from_records() {
        let series: TrendSeries = (0..5).map(|g| record(g, g as f64)).collect();
        let collected: Vec<_> = series.records().collect();

        assert_eq!(collected.len(), 5);
        assert_eq!(collected[3], record(3, 3.0));
    }

    #[test]
    fn test_memory_sink_through_mut_ref() {
        let mut sink = MemorySink::default();
        let series: TrendSeries = std::iter::once(record(0, 1.0)).collect();

        fn write_via<S: TrendSink>(mut sink: S, trends: &TrendSeries) {
            sink.write_trends(trends).unwrap();
        }

        write_via(&mut sink, &series);
        assert_eq!(sink.received, vec![series]);
    }
}
