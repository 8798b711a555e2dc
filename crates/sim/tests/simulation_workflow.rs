//! End-to-end tests of the generation loop.

use punnett_sim::base::{GeneticModel, Locus};
use punnett_sim::errors::SimulationError;
use punnett_sim::simulation::{
    Configuration, ExecutionConfig, MemorySink, Population, Simulation, SimulationBuilder,
    TrendSeries,
};

/// Run one seeded simulation and return its trends.
fn run_simulation(seed: u64, generations: usize, trials: usize) -> TrendSeries {
    let mut sim = SimulationBuilder::new()
        .generations(generations)
        .trials_per_generation(trials)
        .seed(seed)
        .build()
        .unwrap();
    sim.run().unwrap();
    sim.into_trends()
}

fn column_means(runs: &[TrendSeries], column: impl Fn(&TrendSeries) -> &Vec<f64>) -> Vec<f64> {
    let len = runs[0].len();
    (0..len)
        .map(|i| runs.iter().map(|run| column(run)[i]).sum::<f64>() / runs.len() as f64)
        .collect()
}

#[test]
fn test_generation_zero_is_all_dominant() {
    let trends = run_simulation(42, 3, 1_000);
    let first = trends.get(0).unwrap();

    assert_eq!(first.generation, 0);
    assert_eq!(first.green, 0.0);
    assert_eq!(first.wrinkled, 0.0);
    assert_eq!(first.both, 0.0);
    assert_eq!(first.population_size, 9);
}

#[test]
fn test_default_run_records_ten_generations() {
    let mut sim = Simulation::new(Configuration::new(
        ExecutionConfig::new(10, 50_000, Some(2024)),
        GeneticModel::default(),
    ))
    .unwrap();
    let mut sink = MemorySink::default();

    sim.run_into(&mut sink).unwrap();

    let trends = &sink.received[0];
    assert_eq!(trends.generations, (0..10).collect::<Vec<_>>());
    // Fixed trial count with self-pairs discarded: 9 founders self-pair in
    // about 1/9 of the trials, later populations almost never.
    let gen1 = trends.get(1).unwrap().population_size;
    assert!((43_000..46_000).contains(&gen1), "generation 1 size {gen1}");
    for record in trends.records().skip(2) {
        assert!(record.population_size <= 50_000);
        assert!(record.population_size > 49_900);
    }
}

#[test]
fn test_recessive_traits_emerge_and_do_not_decline() {
    let runs: Vec<TrendSeries> = (0..10).map(|seed| run_simulation(seed, 6, 5_000)).collect();

    let green = column_means(&runs, |t| &t.green);
    let wrinkled = column_means(&runs, |t| &t.wrinkled);
    let both = column_means(&runs, |t| &t.both);

    assert_eq!(green[0], 0.0);
    assert_eq!(wrinkled[0], 0.0);

    // Founders carry the recessive allele at q = 1/3, so random mating
    // exposes it in about q^2 = 11.1% of offspring.
    for series in [&green, &wrinkled] {
        for &p in &series[1..] {
            assert!((8.5..=14.0).contains(&p), "mean percentage {p}");
        }
        for window in series.windows(2) {
            assert!(window[1] >= window[0] - 1.0, "{window:?}");
        }
    }
    for &p in &both[1..] {
        assert!((0.3..=3.0).contains(&p), "mean double-recessive percentage {p}");
    }
}

#[test]
fn test_same_seed_same_trends() {
    assert_eq!(run_simulation(42, 4, 2_000), run_simulation(42, 4, 2_000));
}

#[test]
fn test_different_seeds_different_trends() {
    assert_ne!(run_simulation(42, 4, 2_000), run_simulation(123, 4, 2_000));
}

#[test]
fn test_custom_alphabet_run() {
    let mut sim = SimulationBuilder::new()
        .generations(3)
        .trials_per_generation(3_000)
        .shape_locus(Locus::new("height", 'T', 't').unwrap())
        .color_locus(Locus::new("flower", 'P', 'p').unwrap())
        .seed(8)
        .build()
        .unwrap();

    let trends = sim.run().unwrap();
    assert_eq!(trends.green[0], 0.0);
    assert!(trends.green[1] > 0.0);
    assert!(trends.wrinkled[1] > 0.0);
}

#[test]
fn test_config_file_drives_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    Configuration::new(ExecutionConfig::new(2, 500, Some(1)), GeneticModel::default())
        .save(&path)
        .unwrap();

    let config = Configuration::load(&path).unwrap();
    let mut sim = SimulationBuilder::from_configuration(config).build().unwrap();
    assert_eq!(sim.run().unwrap().len(), 2);
}

#[test]
fn test_population_collapse_is_fatal() {
    let mut sim = SimulationBuilder::new()
        .generations(2)
        .trials_per_generation(0)
        .seed(3)
        .build()
        .unwrap();

    assert!(matches!(sim.run(), Err(SimulationError::EmptyPopulation(_))));
    // The founder generation was still recorded
    assert_eq!(sim.trends().len(), 1);
}

#[test]
fn test_manual_generation_loop_matches_engine() {
    use punnett_sim::simulation::PhenotypeStats;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    let model = GeneticModel::default();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(77);
    let mut population = Population::founders(&model);
    let mut green = Vec::new();
    for _ in 0..3 {
        green.push(PhenotypeStats::of(&population, &model).unwrap().green);
        population = population.advance(1_000, &mut rng).unwrap();
    }

    let mut sim = Simulation::with_rng(
        Configuration::new(ExecutionConfig::new(3, 1_000, None), model),
        Xoshiro256PlusPlus::seed_from_u64(77),
    )
    .unwrap();
    assert_eq!(sim.run().unwrap().green, green);
}
