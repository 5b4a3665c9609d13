use fightsheet::action::*;
use fightsheet::layout::*;
use fightsheet::{Color, SheetError};

// ── Action tables ─────────────────────────────────────────────────────────────

#[test]
fn low_res_table_has_18_frames() {
    assert_eq!(total_frames(LOW_RES_ACTIONS), 18);
    assert_eq!(frames(LOW_RES_ACTIONS).count(), 18);
}

#[test]
fn high_res_table_has_32_frames() {
    assert_eq!(total_frames(HIGH_RES_ACTIONS), 32);
    assert_eq!(frames(HIGH_RES_ACTIONS).count(), 32);
}

#[test]
fn frames_number_within_action_from_one() {
    let all: Vec<_> = frames(LOW_RES_ACTIONS).collect();
    assert_eq!((all[0].index, all[0].action.name, all[0].number), (0, "idle", 1));
    assert_eq!((all[3].action.name, all[3].number), ("idle", 4));
    assert_eq!((all[4].action.name, all[4].number), ("walk", 1));
    assert_eq!((all[17].index, all[17].action.name, all[17].number), (17, "die", 1));
}

#[test]
fn overrides_only_for_hit_block_die() {
    let base = Color::rgb(1, 2, 3);
    for action in LOW_RES_ACTIONS.iter().chain(HIGH_RES_ACTIONS) {
        let expected = match action.name {
            "hit" => Color::RED,
            "block" => Color::BLUE,
            "die" => Color::BLACK,
            _ => base,
        };
        assert_eq!(action.body_color(base), expected, "{}", action.name);
    }
}

#[test]
fn low_res_frame_ranges() {
    let ranges = frame_ranges(LOW_RES_ACTIONS);
    let flat: Vec<_> = ranges.iter().map(|r| (r.action.as_str(), r.start, r.end)).collect();
    assert_eq!(flat, vec![
        ("idle", 0, 3),
        ("walk", 4, 9),
        ("jump", 10, 10),
        ("crouch", 11, 11),
        ("attack", 12, 14),
        ("hit", 15, 15),
        ("block", 16, 16),
        ("die", 17, 17),
    ]);
}

#[test]
fn frame_ranges_skip_empty_actions() {
    let table = [Action::new("idle", 2), Action::new("taunt", 0), Action::new("walk", 1)];
    let ranges = frame_ranges(&table);
    assert_eq!(ranges.len(), 2);
    assert_eq!((ranges[1].start, ranges[1].end), (2, 2));
}

// ── SheetLayout ───────────────────────────────────────────────────────────────

#[test]
fn single_row_offsets() {
    let layout = Variant::Low.layout().unwrap();
    for i in 0..18 {
        assert_eq!(layout.cell(i), (i, 0));
        assert_eq!(layout.frame_origin(i), (i * 100, 0));
    }
    assert_eq!((layout.columns(), layout.rows()), (18, 1));
    assert_eq!(layout.sheet_size(), (1800, 200));
}

#[test]
fn grid_offsets() {
    let layout = Variant::High.layout().unwrap();
    for i in 0..32 {
        let (col, row) = (i % 8, i / 8);
        assert_eq!(layout.cell(i), (col, row));
        assert_eq!(layout.frame_origin(i), (col * 200, row * 400));
    }
    assert_eq!((layout.columns(), layout.rows()), (8, 4));
    assert_eq!(layout.sheet_size(), (1600, 1600));
}

#[test]
fn grid_with_gaps_is_rejected() {
    let err = SheetLayout::new(200, 400, 30, Arrangement::Grid { columns: 8 }).unwrap_err();
    assert!(matches!(err, SheetError::InvalidLayout(_)));
}

#[test]
fn zero_sized_layouts_are_rejected() {
    assert!(SheetLayout::new(0, 200, 18, Arrangement::SingleRow).is_err());
    assert!(SheetLayout::new(100, 200, 0, Arrangement::SingleRow).is_err());
    assert!(SheetLayout::new(100, 200, 8, Arrangement::Grid { columns: 0 }).is_err());
}

#[test]
fn single_row_never_wraps() {
    let layout = SheetLayout::new(10, 10, 1000, Arrangement::SingleRow).unwrap();
    assert_eq!(layout.frame_origin(999), (9990, 0));
    assert_eq!(layout.rows(), 1);
}

// ── Frame geometry ────────────────────────────────────────────────────────────

#[test]
fn geometry_fits_inside_a_frame() {
    for variant in Variant::ALL {
        let layout = variant.layout().unwrap();
        let g = variant.geometry();
        for shape in [g.torso, g.head] {
            assert!(shape.x0 >= 0 && shape.y0 >= 0, "{variant}");
            assert!(shape.x1 < layout.frame_width as i32, "{variant}");
            assert!(shape.y1 < layout.frame_height as i32, "{variant}");
        }
        // Head sits above the torso, label below it.
        assert!(g.head.y0 < g.torso.y0);
        assert!(g.torso.y1 < g.label_origin.1, "{variant}");
    }
}

#[test]
fn variant_parses_lowercase() {
    let v: Variant = serde_json::from_str("\"high\"").unwrap();
    assert_eq!(v, Variant::High);
    assert!(serde_json::from_str::<Variant>("\"medium\"").is_err());
}
