use gravsim::{bench_gravity, bench_step_curve};
use gravsim::{build_scenario, compose_frame, ScenarioConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under scenarios/
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Number of ticks to run
    #[arg(short = 'n', long, default_value_t = 1000)]
    ticks: u64,

    /// Run the timing sweeps instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_step_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut sim = build_scenario(scenario_cfg)?;

    println!(
        "running {} ticks with {} bodies, dt = {} s",
        args.ticks,
        sim.bodies().len(),
        sim.clock.dt
    );

    // The clock starts paused, as the interactive loop would
    sim.toggle_pause();
    for _ in 0..args.ticks {
        sim.tick();
    }

    let frame = compose_frame(&sim);
    println!("{}", frame.clock_label);
    for (b, sprite) in sim.bodies().iter().zip(frame.sprites.iter()) {
        println!(
            "{:12}  x = ({:+.4e}, {:+.4e})  |v| = {:9.1} m/s  display = ({:9.1}, {:9.1})",
            b.name,
            b.x.x,
            b.x.y,
            b.v.norm(),
            sprite.position.x,
            sprite.position.y,
        );
    }

    Ok(())
}
