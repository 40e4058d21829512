use gradecheck::model::{Grade, Palette, PaletteBuilder, PaletteError};
use gradecheck::tokens::{TokenFormat, parse_tokens};

const TOKENS: &str = r##"
colors:
  system:
    blue_vivid:
      - utility: blue-5v
        value: "#e8f5ff"
      - utility: blue-10v
        value: "#cfe8ff"
      - utility: blue-40v
        value: false
      - utility: blue-60v
        value: "#005ea2"
    gray:
      - utility: gray-90
        value: "#1b1b1b"
      - utility: gray-10
        value: "rgb(230, 230, 230)"
      - utility: gray
        value: "#808080"
      - utility: gray-50
        value: "not a color"
"##;

#[test]
fn test_grades_come_from_utilities() {
    let palette = parse_tokens(TOKENS, TokenFormat::Yaml).unwrap();
    let blue = palette.family("blue_vivid").unwrap();

    let grades: Vec<u32> = blue.colors().map(|c| c.grade.value()).collect();
    assert_eq!(grades, [5, 10, 60]);
}

#[test]
fn test_colors_sorted_by_grade() {
    let palette = parse_tokens(TOKENS, TokenFormat::Yaml).unwrap();
    let gray = palette.family("gray").unwrap();

    // gray-50 has an invalid value and "gray" has no grade
    assert_eq!(gray.len(), 2);
    assert_eq!(gray.get(0).unwrap().hex(), "#e6e6e6");
    assert_eq!(gray.get(1).unwrap().hex(), "#1b1b1b");
    assert!(gray.get(2).is_none());
}

#[test]
fn test_find_by_grade() {
    let palette = parse_tokens(TOKENS, TokenFormat::Yaml).unwrap();

    let found = palette.find_by_grade("blue_vivid", Grade(60)).unwrap();
    assert_eq!(found.map(|c| c.hex()), Some("#005ea2".to_string()));

    // Dropped entry is simply absent
    assert_eq!(palette.find_by_grade("blue_vivid", Grade(40)).unwrap(), None);

    assert!(matches!(
        palette.find_by_grade("red", Grade(40)),
        Err(PaletteError::UnknownFamily { .. })
    ));
}

#[test]
fn test_family_order_and_counts() {
    let palette = parse_tokens(TOKENS, TokenFormat::Yaml).unwrap();

    assert_eq!(palette.len(), 2);
    assert_eq!(palette.color_count(), 5);
    assert_eq!(palette.family_names().collect::<Vec<_>>(), ["blue_vivid", "gray"]);
}

#[test]
fn test_builder_registers_empty_families() {
    let mut builder = PaletteBuilder::default();
    builder
        .add("mint", "mint-10", None)
        .add("mint", "mint-20", Some(""));
    let palette = builder.build();

    assert!(palette.family("mint").unwrap().is_empty());
}

#[test]
fn test_from_triples_matches_token_file() {
    let from_tokens = parse_tokens(TOKENS, TokenFormat::Yaml).unwrap();
    let from_triples = Palette::from_triples([
        ("blue_vivid", "blue-5v", Some("#e8f5ff")),
        ("blue_vivid", "blue-10v", Some("#cfe8ff")),
        ("blue_vivid", "blue-40v", None),
        ("blue_vivid", "blue-60v", Some("#005ea2")),
        ("gray", "gray-90", Some("#1b1b1b")),
        ("gray", "gray-10", Some("#e6e6e6")),
    ]);

    assert_eq!(from_tokens, from_triples);
}
