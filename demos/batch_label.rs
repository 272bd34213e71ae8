//! Example: label multiple CSV files in parallel
//!
//! Usage:
//!   cargo run --release --example batch_label -- [--jobs N] [--json] [--artifacts DIR] <file1> <file2> ...
//!
//! Notes:
//! - Parallelism is across files (batch-level). Each table is still labelled
//!   row-sequentially.
//! - The loaded artifact bundle is read-only and shared by every worker.
//! - Default workers: (available CPU threads - 1), keeping one core free.
//!
//! Each input `foo.csv` produces `foo.labelled.csv` next to it.

use std::env;
use std::fs;
use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;

use pedalcast::{label_table, ArtifactBundle, CsvTable, PredictorConfig};

fn default_jobs() -> usize {
    let n = std::thread::available_parallelism().map(|v| v.get()).unwrap_or(1);
    std::cmp::max(1, n.saturating_sub(1))
}

fn percentile(mut xs: Vec<f32>, p: f32) -> Option<f32> {
    if xs.is_empty() {
        return None;
    }
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let idx = ((xs.len() - 1) as f32 * p.clamp(0.0, 1.0)).round() as usize;
    Some(xs[idx.min(xs.len() - 1)])
}

fn label_file(bundle: &ArtifactBundle, path: &str, output_column: &str) -> Result<usize, String> {
    let input = fs::read_to_string(path).map_err(|e| format!("read failed: {}", e))?;
    let table = CsvTable::parse(&input).map_err(|e| e.to_string())?;
    let predictions = label_table(bundle, &table).map_err(|e| e.to_string())?;

    let labels = predictions
        .iter()
        .map(|p| p.level.name().to_string())
        .collect();
    let labelled = table
        .with_column(output_column, labels)
        .map_err(|e| e.to_string())?;

    let out_path = Path::new(path).with_extension("labelled.csv");
    fs::write(&out_path, labelled.to_csv()).map_err(|e| format!("write failed: {}", e))?;

    Ok(predictions.len())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut json = false;
    let mut jobs: Option<usize> = None;
    let mut config = PredictorConfig::default();
    let mut paths: Vec<String> = Vec::new();

    while let Some(a) = args.first().cloned() {
        args.remove(0);
        match a.as_str() {
            "--json" => json = true,
            "--jobs" => {
                let v = args
                    .first()
                    .ok_or("--jobs requires a value")?
                    .parse::<usize>()?;
                args.remove(0);
                jobs = Some(std::cmp::max(1, v));
            }
            "--artifacts" => {
                let dir = args.first().cloned().ok_or("--artifacts requires a value")?;
                args.remove(0);
                config.artifact_dir = dir.into();
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: batch_label [--jobs N] [--json] [--artifacts DIR] <file1> <file2> ...\n\
                     \n\
                     --jobs N        Parallel workers (default: CPU-1)\n\
                     --json          Emit one JSON object per line (JSONL)\n\
                     --artifacts DIR Artifact directory (default: artifacts)\n"
                );
                return Ok(());
            }
            _ => paths.push(a),
        }
    }

    if paths.is_empty() {
        eprintln!("ERROR: Provide at least one CSV file path. Use --help for usage.");
        std::process::exit(2);
    }

    let jobs = jobs.unwrap_or_else(default_jobs);
    eprintln!("Batch: {} files, jobs={}", paths.len(), jobs);

    let bundle = ArtifactBundle::load(&config)?;

    let t0 = Instant::now();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .expect("Failed to build rayon thread pool");

    #[derive(Clone)]
    struct ItemOut {
        path: String,
        ok: bool,
        rows: usize,
        processing_ms: f32,
        error: Option<String>,
    }

    let outs: Vec<ItemOut> = pool.install(|| {
        paths
            .par_iter()
            .map(|path| {
                let started = Instant::now();
                match label_file(&bundle, path, &config.output_column) {
                    Ok(rows) => ItemOut {
                        path: path.clone(),
                        ok: true,
                        rows,
                        processing_ms: started.elapsed().as_secs_f32() * 1000.0,
                        error: None,
                    },
                    Err(e) => ItemOut {
                        path: path.clone(),
                        ok: false,
                        rows: 0,
                        processing_ms: 0.0,
                        error: Some(e),
                    },
                }
            })
            .collect()
    });

    if json {
        for o in &outs {
            if o.ok {
                println!(
                    "{{\"file\":{},\"rows\":{},\"processing_time_ms\":{:.2}}}",
                    serde_json::to_string(&o.path).unwrap(),
                    o.rows,
                    o.processing_ms,
                );
            } else {
                println!(
                    "{{\"file\":{},\"error\":{}}}",
                    serde_json::to_string(&o.path).unwrap(),
                    serde_json::to_string(o.error.as_deref().unwrap_or("unknown error")).unwrap()
                );
            }
        }
    } else {
        for (idx, o) in outs.iter().enumerate() {
            if o.ok {
                println!(
                    "[{}/{}] {}: {} rows labelled in {:.2} ms",
                    idx + 1,
                    outs.len(),
                    o.path,
                    o.rows,
                    o.processing_ms
                );
            } else {
                println!(
                    "[{}/{}] {}: ERROR: {}",
                    idx + 1,
                    outs.len(),
                    o.path,
                    o.error.as_deref().unwrap_or("unknown error")
                );
            }
        }
    }

    let ok_times: Vec<f32> = outs.iter().filter(|o| o.ok).map(|o| o.processing_ms).collect();
    let wall = t0.elapsed();

    eprintln!(
        "Done: ok={}/{} wall={:.0}ms",
        ok_times.len(),
        outs.len(),
        wall.as_secs_f64() * 1000.0
    );
    if !ok_times.is_empty() {
        let mean = ok_times.iter().sum::<f32>() / ok_times.len() as f32;
        let p50 = percentile(ok_times.clone(), 0.50).unwrap_or(mean);
        let p90 = percentile(ok_times.clone(), 0.90).unwrap_or(mean);
        eprintln!("processing_time_ms: mean={:.2} p50={:.2} p90={:.2}", mean, p50, p90);
    }

    Ok(())
}
