use gradecheck::compliance::MIN_GRADE_DISTANCE;
use gradecheck::model::Palette;
use gradecheck::sweep::sweep;

fn two_ramps() -> Palette {
    Palette::from_triples([
        ("gray", "gray-5", Some("#f0f0f0")),
        ("gray", "gray-10", Some("#e6e6e6")),
        ("gray", "gray-20", Some("#c9c9c9")),
        ("gray", "gray-30", Some("#adadad")),
        ("gray", "gray-40", Some("#919191")),
        ("gray", "gray-50", Some("#757575")),
        ("gray", "gray-60", Some("#5c5c5c")),
        ("gray", "gray-70", Some("#454545")),
        ("gray", "gray-80", Some("#2e2e2e")),
        ("gray", "gray-90", Some("#1b1b1b")),
        ("flat", "flat-10", Some("#dddddd")),
        ("flat", "flat-20", Some("#cccccc")),
        ("flat", "flat-30", Some("#bbbbbb")),
        ("flat", "flat-40", Some("#999999")),
        ("flat", "flat-50", Some("#888888")),
        ("flat", "flat-60", Some("#777777")),
        ("flat", "flat-70", Some("#666666")),
        ("flat", "flat-80", Some("#555555")),
        ("flat", "flat-90", Some("#444444")),
    ])
}

#[test]
fn test_records_passing_and_failing_pairs() {
    let results = sweep(&two_ramps());

    assert_eq!(results.len(), 20);
    assert!(results.iter().any(|r| r.ratio >= 4.5));
    assert!(results.iter().any(|r| r.ratio < 3.0));
}

#[test]
fn test_pairs_respect_minimum_distance() {
    for result in sweep(&two_ramps()) {
        assert!(result.distance() >= MIN_GRADE_DISTANCE);
    }
}

#[test]
fn test_base_comes_from_earlier_family() {
    let results = sweep(&two_ramps());

    assert_eq!(results[0].base.to_string(), "gray-5");
    assert_eq!(results[0].contrast.to_string(), "flat-50");
    assert!(results.iter().all(|r| r.base.to_string().starts_with("gray-")));
    assert!(results.iter().all(|r| r.contrast.to_string().starts_with("flat-")));

    let last = results.last().unwrap();
    assert_eq!(last.base.to_string(), "gray-50");
    assert_eq!(last.contrast.to_string(), "flat-90");
}

#[test]
fn test_single_family_has_nothing_to_sweep() {
    let palette = Palette::from_triples([
        ("gray", "gray-10", Some("#f0f0f0")),
        ("gray", "gray-90", Some("#1b1b1b")),
    ]);
    assert!(sweep(&palette).is_empty());
}

#[test]
fn test_every_family_pair_visited() {
    let palette = Palette::from_triples([
        ("a", "a-10", Some("#f0f0f0")),
        ("a", "a-20", Some("#e0e0e0")),
        ("b", "b-10", Some("#f0f0f0")),
        ("b", "b-90", Some("#1b1b1b")),
        ("c", "c-10", Some("#f0f0f0")),
        ("c", "c-80", Some("#2e2e2e")),
    ]);

    let pairs: Vec<String> = sweep(&palette)
        .iter()
        .map(|r| format!("{}/{}", r.base, r.contrast))
        .collect();
    assert_eq!(pairs, ["a-10/b-90", "a-10/c-80", "b-10/c-80"]);
}
