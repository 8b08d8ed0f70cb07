use nbsim::{bench_gravity, bench_step};
use nbsim::{three_body_seed, Engine, Parameters, ScenarioConfig};

use anyhow::Result;
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML to load; omit for the defaults
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Run the fixed three-body orbit instead of random bodies
    #[arg(long)]
    three_body: bool,

    /// Number of integration steps to run
    #[arg(long, default_value_t = 1000)]
    steps: u64,

    /// Run the force/step micro-benchmarks and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(path: &PathBuf) -> Result<ScenarioConfig> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_step();
        return Ok(());
    }

    let mut engine = Engine::new();

    if let Some(path) = &args.file {
        let cfg = load_scenario_from_yaml(path)?;
        info!("loading scenario from {:?}", path);
        engine.initialize_from_config(cfg)?;
    } else if args.three_body {
        engine.initialize(Parameters::default(), Some(three_body_seed()))?;
        info!("initialized fixed three-body orbit");
    } else {
        let parameters = Parameters::default();
        info!(
            "initialized {} random bodies (seed {})",
            parameters.num_bodies, parameters.seed
        );
        engine.initialize(parameters, None)?;
    }

    for _ in 0..args.steps {
        engine.step()?;
    }

    let scenario = engine.scenario().expect("engine was initialized above");
    info!(
        "ran {} steps, t = {}",
        scenario.system.steps, scenario.system.t
    );

    for (i, b) in scenario.system.bodies.iter().enumerate() {
        println!(
            "body {i:4}: x = [{:10.4} {:10.4} {:10.4}]  v = [{:8.4} {:8.4} {:8.4}]  m = {:.4}  trail = {}",
            b.x.x, b.x.y, b.x.z, b.v.x, b.v.y, b.v.z, b.m,
            b.trail.len()
        );
    }

    Ok(())
}
