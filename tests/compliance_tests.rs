use gradecheck::compliance::{
    ContrastResult, MIN_CONTRAST_AA, MIN_CONTRAST_AA_LARGE, Tier, Violation, is_aa_compliant,
    is_aa_large_compliant,
};
use gradecheck::model::{FamilyName, Grade, Swatch};

fn graded(family: &str, grade: u32) -> Swatch {
    Swatch::Graded {
        family: FamilyName::new(family),
        grade: Grade(grade),
    }
}

#[test]
fn test_thresholds_are_inclusive() {
    assert!(is_aa_compliant(4.5));
    assert!(!is_aa_compliant(4.499));
    assert!(is_aa_large_compliant(3.0));
    assert!(!is_aa_large_compliant(2.999));
}

#[test]
fn test_aa_implies_aa_large() {
    let mut ratio = 1.0;
    while ratio <= 21.0 {
        if is_aa_compliant(ratio) {
            assert!(is_aa_large_compliant(ratio), "ratio {ratio}");
        }
        ratio += 0.05;
    }
}

#[test]
fn test_tier_boundary_at_fifty() {
    assert_eq!(Tier::for_distance(50), Tier::Aa);
    assert_eq!(Tier::for_distance(49), Tier::AaLarge);
    assert_eq!(Tier::for_distance(40), Tier::AaLarge);
    assert_eq!(Tier::for_distance(100), Tier::Aa);
}

#[test]
fn test_tier_thresholds() {
    assert_eq!(Tier::Aa.min_ratio(), MIN_CONTRAST_AA);
    assert_eq!(Tier::AaLarge.min_ratio(), MIN_CONTRAST_AA_LARGE);
    assert!(!Tier::Aa.passes(3.5));
    assert!(Tier::AaLarge.passes(3.5));
}

#[test]
fn test_result_distance_uses_endpoint_grades() {
    let result = ContrastResult {
        ratio: 2.0,
        base: graded("gray", 40),
        contrast: Swatch::White,
    };
    assert_eq!(result.distance(), 40);

    let result = ContrastResult {
        ratio: 2.0,
        base: graded("gray", 30),
        contrast: Swatch::Black,
    };
    assert_eq!(result.distance(), 70);
}

#[test]
fn test_violation_display_and_json() {
    let violation = Violation {
        result: ContrastResult {
            ratio: 3.9494,
            base: graded("gray", 50),
            contrast: Swatch::White,
        },
        required: Tier::Aa,
    };

    assert_eq!(
        violation.to_string(),
        "gray-50 on white: 3.95:1 (required: 4.5 for AA)"
    );

    let json = serde_json::to_value(&violation).unwrap();
    assert_eq!(json["base"], "gray-50");
    assert_eq!(json["contrast"], "white");
    assert_eq!(json["required"], "AA");
    assert_eq!(json["ratio"], 3.9494);
}
