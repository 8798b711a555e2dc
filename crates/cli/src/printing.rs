use punnett_analysis::{
    genotype_counts, hardy_weinberg_recessive_percentage, recessive_allele_frequency,
};
use punnett_sim::base::{Locus, LocusKind};
use punnett_sim::simulation::{Configuration, Population, TrendSeries};

pub fn print_parameters(config: &Configuration) {
    let execution = &config.execution;
    let model = &config.model;

    println!("\n📋 Simulation Configuration");
    println!("  • Generations: {} [-g, --generations]", execution.generations);
    println!(
        "  • Trials per Generation: {} [-n, --trials]",
        execution.trials_per_generation
    );
    if let Some(seed) = execution.seed {
        println!("  • Random Seed: {seed} [--seed]");
    } else {
        println!("  • Random Seed: Random [--seed]");
    }

    println!("\n🧬 Genetic Model");
    print_locus(&model.shape, "--shape-alleles");
    print_locus(&model.color, "--color-alleles");
    println!();
}

fn print_locus(locus: &Locus, flag: &str) {
    println!(
        "  • {}: {} over {} (recessive form {}) [{flag}]",
        locus.name,
        locus.dominant,
        locus.recessive,
        locus.recessive_pair()
    );
}

/// Genotype classes and recessive allele frequency of the founders.
pub fn print_founders(config: &Configuration) {
    let model = &config.model;
    let founders = Population::founders(model);

    println!("🌱 Founder Population ({} individuals)", founders.size());
    for individual in &founders {
        println!("  • {individual}");
    }

    for kind in [LocusKind::Shape, LocusKind::Color] {
        let locus = model.locus(kind);
        let counts = genotype_counts(&founders, kind, model);
        println!(
            "  • {}: {} homozygous dominant, {} heterozygous, {} homozygous recessive",
            locus.name, counts.homozygous_dominant, counts.heterozygous, counts.homozygous_recessive
        );
        if let Ok(q) = recessive_allele_frequency(&founders, kind, model) {
            println!(
                "    - q = {q:.3}, expected {}{} at equilibrium: {:.2}%",
                locus.recessive,
                locus.recessive,
                hardy_weinberg_recessive_percentage(q)
            );
        }
    }
    println!();
}

pub fn print_trend_table(trends: &TrendSeries) {
    println!(
        "{:>10}  {:>10}  {:>9}  {:>11}  {:>8}",
        "Generation", "Size", "Green %", "Wrinkled %", "Both %"
    );
    for record in trends.records() {
        println!(
            "{:>10}  {:>10}  {:>9.3}  {:>11.3}  {:>8.3}",
            record.generation,
            record.population_size,
            record.green,
            record.wrinkled,
            record.both
        );
    }
}
