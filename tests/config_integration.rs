//! Integration tests for configuration loading across file formats

use bounty_board::config::{Config, DollarConvention};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

fn utf8_dir(temp_dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from(temp_dir.path().to_string_lossy().into_owned())
}

#[test]
fn test_round_trip_each_format() {
    let temp_dir = tempfile::tempdir().unwrap();
    let base = utf8_dir(&temp_dir);

    let config = Config {
        repos: vec!["ergoplatform/sigma-rust".to_owned()],
        dollar_convention: DollarConvention::Usd,
        github_timeout_secs: 7,
        ..Config::default()
    };

    for filename in ["bounties.toml", "bounties.yml", "bounties.json"] {
        let path = base.join(filename);
        config.save(&path).unwrap();

        let (loaded, warnings) = Config::load(&base, Some(&path)).unwrap();
        assert_eq!(loaded, config, "round trip through {filename}");
        assert!(warnings.is_empty(), "unexpected warnings for {filename}: {warnings:?}");

        std::fs::remove_file(&path).unwrap();
    }
}

#[test]
fn test_candidate_discovery_prefers_toml() {
    let temp_dir = tempfile::tempdir().unwrap();
    let base = utf8_dir(&temp_dir);

    std::fs::write(base.join("bounties.toml"), "repos = [\"a/toml\"]\n").unwrap();
    std::fs::write(base.join("bounties.yml"), "repos: [\"a/yml\"]\n").unwrap();

    let (config, _) = Config::load(&base, None).unwrap();
    assert_eq!(config.repos, vec!["a/toml".to_owned()]);
}

#[test]
fn test_missing_file_uses_defaults_with_warning() {
    let temp_dir = tempfile::tempdir().unwrap();
    let base = utf8_dir(&temp_dir);

    let (config, warnings) = Config::load(&base, None).unwrap();
    assert_eq!(config, Config::default());
    assert!(warnings.iter().any(|warning| warning.contains("no repositories configured")));
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();
    let base = utf8_dir(&temp_dir);
    let path = base.join("bounties.toml");

    std::fs::write(&path, "repos = [\"ergoplatform/oracle-core\"]\n").unwrap();

    let (config, warnings) = Config::load(&base, Some(&path)).unwrap();
    assert_eq!(config.repos, vec!["ergoplatform/oracle-core".to_owned()]);
    assert_eq!(config.dollar_convention, DollarConvention::SigUsd);
    assert_eq!(config.oracle_gold_scale, 100);
    assert!(!config.market_api_url.is_empty());
    assert!(warnings.is_empty());
}

#[test]
fn test_explicit_path_with_unknown_extension_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let base = utf8_dir(&temp_dir);
    let path = base.join("bounties.ini");

    std::fs::write(&path, "whatever").unwrap();
    assert!(Config::load(&base, Some(&path)).is_err());
}

#[test]
fn test_validation_warnings_surface_problems() {
    let temp_dir = tempfile::tempdir().unwrap();
    let base = utf8_dir(&temp_dir);
    let path = base.join("bounties.toml");

    std::fs::write(
        &path,
        "repos = [\"bad-entry\"]\nmarket_api_url = \"not a url\"\noracle_gold_scale = 0\n",
    )
    .unwrap();

    let (_, warnings) = Config::load(Utf8Path::new("."), Some(&path)).unwrap();
    assert!(warnings.iter().any(|warning| warning.contains("bad-entry")));
    assert!(warnings.iter().any(|warning| warning.contains("market_api_url")));
    assert!(warnings.iter().any(|warning| warning.contains("oracle_gold_scale")));
}
