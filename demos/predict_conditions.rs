//! Example: label one set of conditions
//!
//! Usage:
//!   cargo run --example predict_conditions -- [--artifacts DIR] [--centroids FILE]
//!       [--season 1-4] [--holiday 0|1] [--weather 1-4]
//!       [--temp F] [--atemp F] [--hum F] [--wind F]
//!
//! Prints a recap of the entered conditions and the predicted demand level,
//! with the nearest-centroid diagnostic when centroids are configured.

use std::env;

use pedalcast::{
    compute_confidence, predict_demand, ArtifactBundle, Conditions, PredictorConfig, Season,
    Weather,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut config = PredictorConfig::default();
    let mut conditions = Conditions::default();

    while let Some(a) = args.first().cloned() {
        args.remove(0);
        let mut take = || -> Result<String, Box<dyn std::error::Error>> {
            let v = args
                .first()
                .cloned()
                .ok_or_else(|| format!("{} requires a value", a))?;
            args.remove(0);
            Ok(v)
        };
        match a.as_str() {
            "--artifacts" => config.artifact_dir = take()?.into(),
            "--centroids" => config.centroids_file = Some(take()?),
            "--season" => {
                let code = take()?.parse::<u32>()?;
                conditions.season =
                    Season::from_code(code).ok_or("season code must be 1-4")?;
            }
            "--holiday" => conditions.holiday = take()?.parse::<u32>()? != 0,
            "--weather" => {
                let code = take()?.parse::<u32>()?;
                conditions.weathersit =
                    Weather::from_code(code).ok_or("weather code must be 1-4")?;
            }
            "--temp" => conditions.temp = take()?.parse()?,
            "--atemp" => conditions.atemp = take()?.parse()?,
            "--hum" => conditions.hum = take()?.parse()?,
            "--wind" => conditions.windspeed = take()?.parse()?,
            "--help" | "-h" => {
                eprintln!(
                    "Usage: predict_conditions [--artifacts DIR] [--centroids FILE]\n\
                     \n\
                     Condition flags (defaults in parentheses):\n\
                     --season 1-4   Season code (1, Spring)\n\
                     --holiday 0|1  Public holiday (0)\n\
                     --weather 1-4  Weather situation code (1, clear)\n\
                     --temp F       Normalized temperature (0.5)\n\
                     --atemp F      Normalized feels-like temperature (0.5)\n\
                     --hum F        Normalized humidity (0.6)\n\
                     --wind F       Normalized wind speed (0.3)\n"
                );
                return Ok(());
            }
            _ => {
                eprintln!("ERROR: Unknown flag: {}. Use --help for usage.", a);
                std::process::exit(2);
            }
        }
    }

    let bundle = ArtifactBundle::load(&config)?;
    let prediction = predict_demand(&bundle, &conditions)?;
    let confidence = compute_confidence(&prediction);

    println!("Entered conditions:");
    for line in conditions.summary().lines() {
        println!("  {}", line);
    }

    println!();
    println!(
        "Prediction: {} {} (class {})",
        prediction.level.badge(),
        prediction.level.name(),
        prediction.class_id
    );
    println!("  {}", prediction.level.description());
    println!("  Insight: {}", prediction.level.insight());
    println!(
        "  Confidence: {} ({:.2})",
        confidence.confidence_level(),
        confidence.overall_confidence
    );

    if let Some(diagnostic) = prediction.nearest_centroid {
        println!(
            "  Nearest centroid: {} (distance {:.3} in scaled space)",
            diagnostic.index, diagnostic.distance
        );
    }

    println!(
        "  Processing time: {:.1} us",
        prediction.metadata.processing_time_us
    );

    Ok(())
}
