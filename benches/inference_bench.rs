//! Performance benchmarks for the inference pipeline

use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pedalcast::{label_table, predict_demand, ArtifactBundle, Conditions, CsvTable, PredictorConfig};

fn fixture_bundle() -> ArtifactBundle {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("four_level");
    let config = PredictorConfig {
        centroids_file: Some("kmeans_centroids.json".to_string()),
        ..PredictorConfig::with_artifact_dir(dir)
    };
    ArtifactBundle::load(&config).expect("bench fixture should load")
}

fn bench_predict_demand(c: &mut Criterion) {
    let bundle = fixture_bundle();
    let conditions = Conditions::default();

    c.bench_function("predict_demand", |b| {
        b.iter(|| {
            let _ = predict_demand(black_box(&bundle), black_box(&conditions));
        });
    });
}

fn bench_label_table_1k(c: &mut Criterion) {
    let bundle = fixture_bundle();

    // Synthetic 1000-row table sweeping the normalized ranges
    let mut csv = String::from("season,holiday,weathersit,temp,atemp,hum,windspeed\n");
    for i in 0..1000 {
        let t = (i % 100) as f32 / 100.0;
        csv.push_str(&format!(
            "{},{},{},{:.2},{:.2},{:.2},{:.2}\n",
            i % 4 + 1,
            i % 2,
            i % 3 + 1,
            t,
            t,
            1.0 - t,
            t / 2.0
        ));
    }
    let table = CsvTable::parse(&csv).expect("synthetic table parses");

    c.bench_function("label_table_1k_rows", |b| {
        b.iter(|| {
            let _ = label_table(black_box(&bundle), black_box(&table));
        });
    });
}

criterion_group!(benches, bench_predict_demand, bench_label_table_1k);
criterion_main!(benches);
