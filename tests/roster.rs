use std::path::Path;

use fightsheet::roster::*;
use fightsheet::{Color, SheetError, Variant};

#[test]
fn builtin_low_res_is_ryu_and_ken() {
    let roster = low_res_roster();
    let ids: Vec<_> = roster.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["ryu", "ken"]);
    assert_eq!(roster[0].color, Color::WHITE);
    assert_eq!(roster[1].color, Color::RED);
    assert!(roster.iter().all(|c| c.variant == Variant::Low));
}

#[test]
fn builtin_high_res_entries_are_valid() {
    let roster = high_res_roster();
    assert_eq!(roster.len(), 6);
    for c in &roster {
        c.validate().unwrap();
        assert_eq!(c.variant, Variant::High);
    }
    assert!(roster.iter().any(|c| c.id == "fresway_worker" && c.name == "Fresway Worker"));
}

#[test]
fn builtin_roster_filters_by_variant() {
    assert_eq!(builtin_roster(&[Variant::Low]).len(), 2);
    assert_eq!(builtin_roster(&[Variant::High]).len(), 6);
    assert_eq!(builtin_roster(&Variant::ALL).len(), 8);
    assert!(builtin_roster(&[]).is_empty());
}

#[test]
fn sheet_path_follows_fighters_layout() {
    let ryu = &low_res_roster()[0];
    assert_eq!(ryu.sheet_path(Path::new("assets")), Path::new("assets/fighters/ryu/ryu.png"));
    assert_eq!(ryu.manifest_path(Path::new("out")), Path::new("out/fighters/ryu/ryu.json"));
}

#[test]
fn validate_rejects_bad_ids_and_names() {
    let bad_id = Character::new("Old Witch", "Old Witch", Color::WHITE, Variant::High);
    assert!(matches!(bad_id.validate(), Err(SheetError::InvalidEntry { .. })));

    let empty_id = Character::new("", "Nobody", Color::WHITE, Variant::High);
    assert!(empty_id.validate().is_err());

    let empty_name = Character::new("old_witch", " ", Color::WHITE, Variant::High);
    assert!(empty_name.validate().is_err());
}

#[test]
fn json_roster_parses() {
    let json = r##"[
        { "id": "ryu", "name": "Ryu", "color": "white", "variant": "low" },
        { "id": "old_witch", "name": "Old Witch", "color": "#4b0082", "variant": "high" }
    ]"##;
    let roster = roster_from_json(json).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[1].color, Color::rgb(75, 0, 130));
    assert_eq!(roster[1].variant, Variant::High);
}

#[test]
fn json_roster_rejects_duplicates() {
    let json = r#"[
        { "id": "ken", "name": "Ken", "color": "red", "variant": "low" },
        { "id": "ken", "name": "Ken 2", "color": "red", "variant": "low" }
    ]"#;
    assert!(matches!(roster_from_json(json), Err(SheetError::InvalidEntry { .. })));
}

#[test]
fn json_roster_rejects_unknown_color() {
    let json = r#"[{ "id": "ken", "name": "Ken", "color": "sparkly", "variant": "low" }]"#;
    assert!(matches!(roster_from_json(json), Err(SheetError::Json(_))));
}

#[test]
fn load_roster_reports_missing_file() {
    let err = load_roster(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, SheetError::Io { .. }));
}
