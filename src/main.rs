use std::io::{self, Write};

use u_lineq::ga::{EvolutionController, GaConfig, LinearEquation};
use u_lineq::random::RngSource;
use u_lineq::{report, Result};

const COEFFICIENTS: [i64; 4] = [1, 2, 3, 4];
const TARGET: i64 = 30;
const CROSSOVER_RATE: f64 = 0.25;
const MUTATION_RATE: f64 = 0.1;
const POPULATION_SIZE: usize = 6;
const MAX_GENERATIONS: usize = 1_000_000;

fn main() -> Result<()> {
    env_logger::init();

    let problem = LinearEquation::new(COEFFICIENTS.to_vec(), TARGET)?;
    let config = GaConfig::default()
        .with_population_size(POPULATION_SIZE)
        .with_max_generations(MAX_GENERATIONS)
        .with_crossover_rate(CROSSOVER_RATE)
        .with_mutation_rate(MUTATION_RATE);

    let mut controller = EvolutionController::new(&problem, config, RngSource::from_entropy())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_initial(&mut out, controller.population())?;
    out.flush()?;

    let result = controller.run()?;
    report::write_final(&mut out, &result)?;
    out.flush()?;
    Ok(())
}
