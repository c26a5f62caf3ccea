//! OrbitLab experiment driver CLI
//!
//! Run one LEO-constellation emulation experiment for a given satellite
//! count.

use clap::error::ErrorKind;
use clap::Parser;
use orbitlab_driver::cli::{self, Args};
use orbitlab_driver::{Experiment, ExperimentSettings};
use orbitlab_env::CommandBackend;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let sat_count = match cli::parse_sat_count(&args.sat_count) {
        Ok(n) => n,
        Err(_) => {
            eprintln!("{} is not an integer", args.sat_count);
            std::process::exit(1);
        }
    };

    let settings = match &args.settings {
        Some(path) => match ExperimentSettings::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                eprintln!("Error: {err}");
                std::process::exit(1);
            }
        },
        None => ExperimentSettings::default(),
    };

    let experiment = match Experiment::new(settings, sat_count) {
        Ok(experiment) => experiment,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let backend = CommandBackend::new(&args.emulator);

    println!("Start emulation.");
    match experiment.run(&backend) {
        Ok(report) => {
            println!("Experiment took {} seconds", report.elapsed.as_secs_f64());
        }
        Err(err) => {
            error!("Emulation run failed: {err}");
            std::process::exit(1);
        }
    }
}
