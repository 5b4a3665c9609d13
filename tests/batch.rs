use fightsheet::batch::run_batch;
use fightsheet::config::GeneratorConfig;
use fightsheet::roster::{Character, builtin_roster, low_res_roster};
use fightsheet::verify::verify_assets;
use fightsheet::{Color, Variant};
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> GeneratorConfig {
    GeneratorConfig { assets_root: dir.path().to_path_buf(), ..GeneratorConfig::default() }
}

#[test]
fn default_config_builds_everything_under_assets() {
    let config = GeneratorConfig::default();
    assert_eq!(config.assets_root, std::path::PathBuf::from("assets"));
    assert!(config.includes(Variant::Low) && config.includes(Variant::High));
    assert!(!config.write_manifest);
}

#[test]
fn low_res_batch_writes_one_file_per_fighter() {
    let dir = TempDir::new().unwrap();
    let report = run_batch(&low_res_roster(), &config_in(&dir));

    assert!(report.is_success());
    assert_eq!(report.written.len(), 2);
    for id in ["ryu", "ken"] {
        let path = dir.path().join(format!("fighters/{id}/{id}.png"));
        assert_eq!(image::image_dimensions(&path).unwrap(), (1800, 200));
        assert!(!dir.path().join(format!("fighters/{id}/{id}.json")).exists());
    }
}

#[test]
fn full_batch_passes_verification() {
    let dir = TempDir::new().unwrap();
    let roster = builtin_roster(&Variant::ALL);
    let report = run_batch(&roster, &config_in(&dir));
    assert_eq!(report.written.len(), 8);

    for id in ["ann", "mom", "dad", "brother", "fat", "fresway_worker"] {
        let path = dir.path().join(format!("fighters/{id}/{id}.png"));
        assert_eq!(image::image_dimensions(&path).unwrap(), (1600, 1600));
    }

    let verified = verify_assets(dir.path(), &roster).unwrap();
    assert!(verified.is_ok(), "{:?}", verified.problems);
    assert_eq!(verified.checked, 8);
}

#[test]
fn one_failure_does_not_stop_the_rest() {
    let dir = TempDir::new().unwrap();
    let roster = vec![
        Character::new("ryu", "Ryu", Color::WHITE, Variant::Low),
        Character::new("nameless", "", Color::WHITE, Variant::Low),
        Character::new("ken", "Ken", Color::RED, Variant::Low),
    ];

    let report = run_batch(&roster, &config_in(&dir));

    assert!(!report.is_success());
    assert_eq!(report.written.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "nameless");
    assert!(dir.path().join("fighters/ken/ken.png").is_file());
    assert!(!dir.path().join("fighters/nameless").exists());
}

#[test]
fn unrequested_variants_are_skipped() {
    let dir = TempDir::new().unwrap();
    let config = GeneratorConfig { variants: vec![Variant::Low], ..config_in(&dir) };

    let report = run_batch(&builtin_roster(&Variant::ALL), &config);

    assert_eq!(report.written.len(), 2);
    assert_eq!(report.skipped, 6);
    assert!(!dir.path().join("fighters/ann").exists());
}

#[test]
fn manifest_is_written_when_requested() {
    let dir = TempDir::new().unwrap();
    let config = GeneratorConfig { write_manifest: true, ..config_in(&dir) };

    run_batch(&low_res_roster()[..1], &config);

    let json = std::fs::read_to_string(dir.path().join("fighters/ryu/ryu.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["image"], "ryu.png");
    assert_eq!(value["total_frames"], 18);
    assert_eq!(value["animations"][4]["action"], "attack");
    assert_eq!(value["animations"][4]["start"], 12);
    assert_eq!(value["animations"][4]["end"], 14);
}
