use super::*;
use crate::yield_model::{Crop, Soil};
use tempfile::tempdir;

fn with_config_home<T>(dir: &std::path::Path, f: impl FnOnce() -> T) -> T {
    let _guard = crate::app_dirs::ConfigBaseGuard::set(dir.to_path_buf());
    f()
}

#[test]
fn saves_and_reloads_settings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("cfg.toml");
    let settings = AppSettings {
        estimator: EstimatorSettings {
            delay_ms: 250,
            stale_results: StaleResults::Discard,
        },
        defaults: InputDefaults {
            crop: Crop::Rice,
            soil: Soil::Clay,
            rainfall: 800.0,
            temperature: 26.0,
            fertilizer: 140.0,
        },
    };
    save_to_path(&settings, &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("stale_results = \"discard\""));
    assert_eq!(load_settings_from(&path).unwrap(), settings);
}

#[test]
fn missing_keys_take_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cfg.toml");
    std::fs::write(&path, "[estimator]\ndelay_ms = 50\n").unwrap();
    let loaded = load_settings_from(&path).unwrap();
    assert_eq!(loaded.estimator.delay_ms, 50);
    assert_eq!(loaded.estimator.stale_results, StaleResults::Keep);
    assert_eq!(loaded.defaults, InputDefaults::default());
}

#[test]
fn out_of_range_values_are_normalized() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cfg.toml");
    std::fs::write(
        &path,
        "[estimator]\ndelay_ms = 999999\n\n[defaults]\nrainfall = 42.0\ntemperature = 22.3\nfertilizer = 500.0\n",
    )
    .unwrap();
    let loaded = load_settings_from(&path).unwrap();
    assert_eq!(loaded.estimator.delay_ms, MAX_DELAY_MS);
    assert_eq!(loaded.defaults.rainfall, 300.0);
    assert_eq!(loaded.defaults.temperature, 22.5);
    assert_eq!(loaded.defaults.fertilizer, 200.0);
}

#[test]
fn invalid_toml_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cfg.toml");
    std::fs::write(&path, "[estimator\n").unwrap();
    let err = load_settings_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseToml { .. }));
    assert!(err.to_string().contains("cfg.toml"));
}

#[test]
fn load_or_default_writes_defaults_when_missing() {
    let dir = tempdir().unwrap();
    with_config_home(dir.path(), || {
        let path = config_path().unwrap();
        assert!(!path.exists());
        let loaded = load_or_default().unwrap();
        assert_eq!(loaded, AppSettings::default());
        assert!(path.exists());
        assert_eq!(load_or_default().unwrap(), loaded);
    });
}

#[test]
fn save_leaves_no_temp_files() {
    let dir = tempdir().unwrap();
    with_config_home(dir.path(), || {
        save(&AppSettings::default()).unwrap();
        save(&AppSettings::default()).unwrap();
        let root = dir.path().join(crate::app_dirs::APP_DIR_NAME);
        let names: Vec<_> = std::fs::read_dir(root)
            .unwrap()
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec![CONFIG_FILE_NAME.to_string()]);
    });
}
