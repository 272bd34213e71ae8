//! Integration tests for the demand inference engine

use std::path::PathBuf;

use pedalcast::{
    compute_confidence, label_csv, predict_demand, ArtifactBundle, Conditions, CsvTable,
    DemandLevel, PredictError, PredictorConfig, Season, Weather,
};

fn fixture_dir(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Config for the four-class fixture, centroid diagnostic enabled
fn four_level_config() -> PredictorConfig {
    PredictorConfig {
        centroids_file: Some("kmeans_centroids.json".to_string()),
        ..PredictorConfig::with_artifact_dir(fixture_dir("four_level"))
    }
}

/// Config for the binary fixture (no centroids persisted)
fn binary_config() -> PredictorConfig {
    PredictorConfig::with_artifact_dir(fixture_dir("binary"))
}

/// Scenario conditions used throughout: the form defaults of the original UI
fn scenario_a() -> Conditions {
    Conditions {
        season: Season::Spring,
        holiday: false,
        weathersit: Weather::Clear,
        temp: 0.5,
        atemp: 0.5,
        hum: 0.6,
        windspeed: 0.3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_a_four_level() {
        let bundle = ArtifactBundle::load(&four_level_config()).expect("fixture should load");
        let prediction = predict_demand(&bundle, &scenario_a()).expect("prediction should succeed");

        // Membership in the configured label set, and the exact level for
        // this fixed fixture artifact.
        assert!(bundle.label_map().levels().contains(&prediction.level));
        assert_eq!(prediction.level, DemandLevel::Medium);
        assert_eq!(prediction.class_id, 2);
        assert_eq!(prediction.probabilities.len(), 4);
        assert!((prediction.probabilities.iter().sum::<f32>() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_predictions_are_deterministic() {
        let bundle = ArtifactBundle::load(&four_level_config()).expect("fixture should load");

        let first = predict_demand(&bundle, &scenario_a()).unwrap();
        let second = predict_demand(&bundle, &scenario_a()).unwrap();

        assert_eq!(first.level, second.level);
        assert_eq!(first.class_id, second.class_id);
        assert_eq!(first.probabilities, second.probabilities);
        assert_eq!(first.nearest_centroid, second.nearest_centroid);
    }

    #[test]
    fn test_feature_order_changes_the_label() {
        // The one real correctness hazard: the same seven values assembled
        // in the wrong order must be able to produce a different label.
        let bundle = ArtifactBundle::load(&four_level_config()).expect("fixture should load");

        let correct = [1.0, 0.0, 1.0, 1.0, 0.5, 0.25, 0.25];
        let mut swapped = correct;
        swapped.swap(3, 5); // temp and hum trade places

        let predict_raw = |row: &[f32]| {
            let scaled = bundle.scaler().transform_row(row).unwrap();
            bundle.classifier().predict(&scaled).unwrap()
        };

        let class_correct = predict_raw(&correct);
        let class_swapped = predict_raw(&swapped);

        assert_eq!(class_correct, 3);
        assert_eq!(class_swapped, 0);
        assert_ne!(class_correct, class_swapped);
    }

    #[test]
    fn test_label_map_is_total_over_classifier_range() {
        let bundle = ArtifactBundle::load(&four_level_config()).expect("fixture should load");

        assert_eq!(bundle.label_map().len(), bundle.n_classes());
        for class_id in bundle.classifier().classes() {
            bundle
                .label_map()
                .level(*class_id)
                .expect("every emittable class id must have a label");
        }
    }

    #[test]
    fn test_boundary_inputs_do_not_fault() {
        let bundle = ArtifactBundle::load(&four_level_config()).expect("fixture should load");

        for value in [0.0f32, 1.0] {
            let conditions = Conditions {
                temp: value,
                atemp: value,
                hum: value,
                windspeed: value,
                ..scenario_a()
            };
            let prediction = predict_demand(&bundle, &conditions)
                .expect("boundary values must produce a defined label");
            assert!(bundle.label_map().levels().contains(&prediction.level));
        }
    }

    #[test]
    fn test_out_of_range_hum_still_labels() {
        // Scenario C: no bounds check anywhere in the chain.
        let bundle = ArtifactBundle::load(&four_level_config()).expect("fixture should load");

        let in_range = predict_demand(&bundle, &scenario_a()).unwrap();
        let out_of_range = predict_demand(
            &bundle,
            &Conditions {
                hum: 1.7,
                ..scenario_a()
            },
        )
        .expect("out-of-range hum must not fault");

        assert!(bundle.label_map().levels().contains(&in_range.level));
        assert!(bundle.label_map().levels().contains(&out_of_range.level));
    }

    #[test]
    fn test_centroid_diagnostic_is_independent() {
        let bundle = ArtifactBundle::load(&four_level_config()).expect("fixture should load");
        assert!(bundle.has_centroid_diagnostic());

        let prediction = predict_demand(&bundle, &scenario_a()).unwrap();
        let diagnostic = prediction
            .nearest_centroid
            .expect("centroids are loaded for this fixture");

        assert!(diagnostic.index < 4);
        assert!(diagnostic.distance.is_finite());

        // For this input the nearest centroid is cluster 1 while the
        // classifier says class 2: the two readouts are independent and no
        // reconciliation happens.
        assert_eq!(diagnostic.index, 1);
        assert_ne!(diagnostic.index as u32, prediction.class_id);
    }

    #[test]
    fn test_binary_bundle() {
        let bundle = ArtifactBundle::load(&binary_config()).expect("fixture should load");

        assert_eq!(bundle.n_classes(), 2);
        assert!(!bundle.has_centroid_diagnostic());

        let prediction = predict_demand(&bundle, &scenario_a()).unwrap();
        assert!(prediction.nearest_centroid.is_none());
        assert_eq!(prediction.level, DemandLevel::High);
        assert_eq!(prediction.class_id, 1);

        // Decision score for this fixture is 0.28, so the class-1
        // probability sits just above the 0.5 threshold.
        assert!(prediction.probabilities[1] > 0.5);
        assert!(prediction.probabilities[1] < 0.6);

        let confidence = compute_confidence(&prediction);
        assert!(confidence.is_low_confidence());
    }

    #[test]
    fn test_csv_labelling_appends_demand_column() {
        let bundle = ArtifactBundle::load(&four_level_config()).expect("fixture should load");
        let config = four_level_config();

        let input = std::fs::read_to_string(fixture_dir("conditions_sample.csv"))
            .expect("sample CSV fixture should exist");
        let output = label_csv(&bundle, &input, &config.output_column).expect("labelling succeeds");

        let table = CsvTable::parse(&output).unwrap();
        assert_eq!(table.headers().last().unwrap(), "demand");
        assert_eq!(table.n_rows(), 3);

        // Column selection is by name, so the scrambled column order and the
        // extra date column change nothing.
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[1].ends_with("Medium Demand"));
        assert!(lines[2].ends_with("High Demand"));
        assert!(lines[3].ends_with("Very Low Demand"));
        assert!(lines[1].starts_with("2012-01-08"));
    }

    #[test]
    fn test_csv_missing_column_fails_before_scaling() {
        // Scenario B: the batch contract requires every trained feature
        // column by name.
        let bundle = ArtifactBundle::load(&four_level_config()).expect("fixture should load");

        let input = "season,holiday,weathersit,temp,atemp,windspeed\n1,0,1,0.5,0.5,0.3\n";
        let result = label_csv(&bundle, input, "demand");

        match result {
            Err(PredictError::MissingColumn(msg)) => assert!(msg.contains("hum")),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_artifact_is_fatal() {
        let config = PredictorConfig::with_artifact_dir(fixture_dir("does_not_exist"));
        let result = ArtifactBundle::load(&config);
        assert!(matches!(result, Err(PredictError::ArtifactError(_))));
    }

    #[test]
    fn test_reordered_feature_list_is_rejected_at_load() {
        // The persisted feature list must match the canonical in-code order
        // exactly; a swap is a schema mismatch, not a silent corruption.
        let config = PredictorConfig {
            features_file: "logreg_features_swapped.json".to_string(),
            ..four_level_config()
        };
        let result = ArtifactBundle::load(&config);

        match result {
            Err(PredictError::SchemaMismatch(msg)) => {
                assert!(msg.contains("windspeed") || msg.contains("hum"));
            }
            other => panic!("expected SchemaMismatch, got {:?}", other),
        }
    }
}
