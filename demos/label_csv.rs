//! Example: label every row of one CSV file
//!
//! Usage:
//!   cargo run --example label_csv -- [--artifacts DIR] <input.csv> [output.csv]
//!
//! The input must carry the trained feature columns by name; extra columns
//! are preserved. Without an output path the labelled table goes to stdout.

use std::env;
use std::fs;

use pedalcast::{label_csv, ArtifactBundle, PredictorConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut config = PredictorConfig::default();
    let mut paths: Vec<String> = Vec::new();

    while let Some(a) = args.first().cloned() {
        args.remove(0);
        match a.as_str() {
            "--artifacts" => {
                let dir = args.first().cloned().ok_or("--artifacts requires a value")?;
                args.remove(0);
                config.artifact_dir = dir.into();
            }
            "--help" | "-h" => {
                eprintln!("Usage: label_csv [--artifacts DIR] <input.csv> [output.csv]");
                return Ok(());
            }
            _ => paths.push(a),
        }
    }

    if paths.is_empty() || paths.len() > 2 {
        eprintln!("ERROR: Provide an input CSV (and optionally an output path). Use --help for usage.");
        std::process::exit(2);
    }

    let bundle = ArtifactBundle::load(&config)?;

    let input = fs::read_to_string(&paths[0])?;
    match label_csv(&bundle, &input, &config.output_column) {
        Ok(labelled) => {
            if let Some(out_path) = paths.get(1) {
                fs::write(out_path, &labelled)?;
                println!("Wrote {}", out_path);
            } else {
                print!("{}", labelled);
            }
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
