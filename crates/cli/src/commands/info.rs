use anyhow::{Context, Result};
use punnett_sim::simulation::Configuration;
use std::path::Path;

use crate::printing::{print_founders, print_parameters};

pub fn show_info(path: &Path) -> Result<()> {
    let config = Configuration::load(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

    println!("🫛 Configuration: {}", path.display());
    print_parameters(&config);
    print_founders(&config);

    Ok(())
}
