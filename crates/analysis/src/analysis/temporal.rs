//! Temporal analysis
//!
//! Functions for tracking changes over generations and summarizing
//! replicate runs.

use crate::analysis::composition::recessive_allele_frequency;
use punnett_sim::base::{GeneticModel, LocusKind};
use punnett_sim::errors::EmptyPopulation;
use punnett_sim::simulation::{GenerationRecord, Population, TrendSeries};
use std::error;
use std::fmt;

/// Errors from combining replicate trend series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrendError {
    /// No runs were supplied
    NoRuns,
    /// A run does not cover the same generations as the first run
    MismatchedRuns { run: usize, expected: usize, found: usize },
}

impl fmt::Display for TrendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRuns => write!(f, "No trend series to combine"),
            Self::MismatchedRuns {
                run,
                expected,
                found,
            } => write!(
                f,
                "Run {run} has {found} generations, expected the {expected} of run 0"
            ),
        }
    }
}

impl error::Error for TrendError {}

/// Track the recessive allele frequency at `kind` over a sequence of
/// populations.
///
/// # Returns
///
/// One frequency per population, in input order
pub fn allele_trajectory(
    populations: &[Population],
    kind: LocusKind,
    model: &GeneticModel,
) -> Result<Vec<f64>, EmptyPopulation> {
    populations
        .iter()
        .map(|population| recessive_allele_frequency(population, kind, model))
        .collect()
}

/// Percentage of recessive homozygotes expected under Hardy-Weinberg
/// equilibrium for recessive allele frequency `q`.
#[inline]
pub fn hardy_weinberg_recessive_percentage(q: f64) -> f64 {
    q * q * 100.0
}

/// Generation-wise mean of replicate trend series.
///
/// Population sizes are averaged and rounded to the nearest individual.
///
/// # Examples
///
/// ```
/// use punnett_analysis::mean_trends;
/// use punnett_sim::simulation::SimulationBuilder;
///
/// let runs: Vec<_> = (0..3)
///     .map(|seed| {
///         let mut sim = SimulationBuilder::new()
///             .generations(3)
///             .trials_per_generation(500)
///             .seed(seed)
///             .build()
///             .unwrap();
///         sim.run().unwrap();
///         sim.into_trends()
///     })
///     .collect();
///
/// let mean = mean_trends(&runs).unwrap();
/// assert_eq!(mean.generations, [0, 1, 2]);
/// ```
pub fn mean_trends(runs: &[TrendSeries]) -> Result<TrendSeries, TrendError> {
    let (first, rest) = runs.split_first().ok_or(TrendError::NoRuns)?;
    let len = first.len();

    for (index, run) in runs.iter().enumerate() {
        let columns = [
            run.green.len(),
            run.wrinkled.len(),
            run.both.len(),
            run.population_sizes.len(),
        ];
        let aligned = index == 0 || run.generations == first.generations;
        if !aligned || columns.iter().any(|&n| n != len) {
            return Err(TrendError::MismatchedRuns {
                run: index,
                expected: len,
                found: run.len(),
            });
        }
    }
    log::debug!("Averaging {} runs of {len} generations", rest.len() + 1);

    Ok((0..len)
        .map(|i| GenerationRecord {
            generation: first.generations[i],
            green: column_mean(runs, |run| run.green[i]),
            wrinkled: column_mean(runs, |run| run.wrinkled[i]),
            both: column_mean(runs, |run| run.both[i]),
            population_size: column_mean(runs, |run| run.population_sizes[i] as f64).round()
                as usize,
        })
        .collect())
}

fn column_mean(runs: &[TrendSeries], value: impl Fn(&TrendSeries) -> f64) -> f64 {
    runs.iter().map(value).sum::<f64>() / runs.len() as f64
}

/// True if no value drops more than `tolerance` below its predecessor.
pub fn is_non_decreasing(values: &[f64], tolerance: f64) -> bool {
    values.windows(2).all(|pair| pair[1] >= pair[0] - tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use punnett_sim::simulation::SimulationBuilder;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn record(generation: usize, green: f64, population_size: usize) -> GenerationRecord {
        GenerationRecord {
            generation,
            green,
            wrinkled: green / 2.0,
            both: 0.0,
            population_size,
        }
    }

    #[test]
    fn test_hardy_weinberg() {
        assert_eq!(hardy_weinberg_recessive_percentage(0.0), 0.0);
        assert_eq!(hardy_weinberg_recessive_percentage(0.5), 25.0);
        let expected = hardy_weinberg_recessive_percentage(1.0 / 3.0);
        assert!((expected - 11.111).abs() < 0.001);
    }

    #[test]
    fn test_mean_trends() {
        let a: TrendSeries = [record(0, 0.0, 9), record(1, 10.0, 100)].into_iter().collect();
        let b: TrendSeries = [record(0, 0.0, 9), record(1, 20.0, 103)].into_iter().collect();

        let mean = mean_trends(&[a, b]).unwrap();
        assert_eq!(mean.generations, [0, 1]);
        assert_eq!(mean.green, [0.0, 15.0]);
        assert_eq!(mean.wrinkled, [0.0, 7.5]);
        assert_eq!(mean.population_sizes, [9, 102]);
    }

    #[test]
    fn test_mean_of_single_run_is_identity() {
        let run: TrendSeries = [record(0, 1.0, 9), record(1, 2.0, 10)].into_iter().collect();
        assert_eq!(mean_trends(std::slice::from_ref(&run)).unwrap(), run);
    }

    #[test]
    fn test_mean_trends_errors() {
        assert_eq!(mean_trends(&[]), Err(TrendError::NoRuns));

        let long: TrendSeries = [record(0, 0.0, 9), record(1, 1.0, 9)].into_iter().collect();
        let short: TrendSeries = [record(0, 0.0, 9)].into_iter().collect();
        assert_eq!(
            mean_trends(&[long, short]),
            Err(TrendError::MismatchedRuns {
                run: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_is_non_decreasing() {
        assert!(is_non_decreasing(&[], 0.0));
        assert!(is_non_decreasing(&[0.0, 10.4, 11.1, 11.1], 0.0));
        assert!(!is_non_decreasing(&[0.0, 11.0, 10.5], 0.0));
        assert!(is_non_decreasing(&[0.0, 11.0, 10.5], 1.0));
    }

    #[test]
    fn test_allele_trajectory_holds_near_one_third() {
        let model = GeneticModel::default();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
        let mut populations = vec![Population::founders(&model)];
        for _ in 0..4 {
            let next = populations[populations.len() - 1]
                .advance(20_000, &mut rng)
                .unwrap();
            populations.push(next);
        }

        let trajectory = allele_trajectory(&populations, LocusKind::Color, &model).unwrap();
        assert_eq!(trajectory.len(), 5);
        for q in trajectory {
            assert!((0.30..0.37).contains(&q), "q = {q}");
        }
    }

    #[test]
    fn test_allele_trajectory_empty_population() {
        let model = GeneticModel::default();
        let populations = [Population::founders(&model), Population::new("x", Vec::new())];
        assert!(allele_trajectory(&populations, LocusKind::Shape, &model).is_err());
    }

    #[test]
    fn test_simulated_green_tracks_hardy_weinberg() {
        let model = GeneticModel::default();
        let q = recessive_allele_frequency(&Population::founders(&model), LocusKind::Color, &model)
            .unwrap();
        let expected = hardy_weinberg_recessive_percentage(q);

        let runs: Vec<TrendSeries> = (0..5)
            .map(|seed| {
                let mut sim = SimulationBuilder::new()
                    .generations(5)
                    .trials_per_generation(10_000)
                    .seed(seed)
                    .build()
                    .unwrap();
                sim.run().unwrap();
                sim.into_trends()
            })
            .collect();
        let mean = mean_trends(&runs).unwrap();

        for &green in &mean.green[2..] {
            assert!((green - expected).abs() < 2.0, "green {green} vs {expected}");
        }
        assert!(is_non_decreasing(&mean.green, 1.0), "{:?}", mean.green);
        assert!(is_non_decreasing(&mean.wrinkled, 1.0), "{:?}", mean.wrinkled);
    }
}
