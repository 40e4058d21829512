//! Contrast check within a single color family.
//!
//! Every color at grade 40 or above is compared against the grades 40, 50,
//! 60, ... steps lighter and darker than itself. Grade 0 and grade 100 are
//! absolute white and black. A walk stops at the first grade the family does
//! not have, so a gap hides everything beyond it.
//!
//! Pairs at least 50 grades apart must pass AA (4.5:1); closer pairs only
//! need AA Large (3:1).

use palette::Srgb;
use tracing::{debug, trace};

#[cfg(debug_assertions)]
use tracing::instrument;

use crate::compliance::{ContrastResult, MIN_GRADE_DISTANCE, Tier, Violation};
use crate::model::{
    BLACK, BLACK_GRADE, Color, ColorFamily, GRADE_STEP, Grade, Palette, PaletteError, Swatch,
    WHITE, WHITE_GRADE,
};
use crate::wcag::contrast_ratio;

/// Which way a walk moves along the grade scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Lighter,
    Darker,
}

/// Something a base color is compared against.
#[derive(Debug, Clone, Copy)]
enum Partner<'a> {
    Stored(&'a Color),
    White,
    Black,
}

impl Partner<'_> {
    fn value(&self) -> Srgb<u8> {
        match self {
            Self::Stored(color) => color.value,
            Self::White => WHITE,
            Self::Black => BLACK,
        }
    }

    fn swatch(&self, family: &ColorFamily) -> Swatch {
        match self {
            Self::Stored(color) => family.swatch(color),
            Self::White => Swatch::White,
            Self::Black => Swatch::Black,
        }
    }
}

/// Walks away from `base` in one direction, starting 40 grades out.
struct GradeWalk<'a> {
    family: &'a ColorFamily,
    base: Grade,
    direction: Direction,
    offset: u32,
    done: bool,
}

impl<'a> GradeWalk<'a> {
    fn new(family: &'a ColorFamily, base: Grade, direction: Direction) -> Self {
        Self {
            family,
            base,
            direction,
            offset: MIN_GRADE_DISTANCE,
            done: false,
        }
    }

    fn candidate(&self) -> Option<Grade> {
        let base = self.base.value();
        let grade = match self.direction {
            Direction::Lighter => base.checked_sub(self.offset),
            Direction::Darker => base
                .checked_add(self.offset)
                .filter(|&g| g <= BLACK_GRADE.value()),
        };
        grade.map(Grade)
    }
}

impl<'a> Iterator for GradeWalk<'a> {
    type Item = Partner<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Some(grade) = self.candidate() else {
            self.done = true;
            return None;
        };
        self.offset += GRADE_STEP;

        // The scale ends at the endpoints.
        if grade == WHITE_GRADE {
            self.done = true;
            return Some(Partner::White);
        }
        if grade == BLACK_GRADE {
            self.done = true;
            return Some(Partner::Black);
        }

        match self.family.find_by_grade(grade) {
            Some(color) => Some(Partner::Stored(color)),
            None => {
                trace!(
                    family = %self.family.name(),
                    base = %self.base,
                    %grade,
                    "grade missing, walk stopped"
                );
                self.done = true;
                None
            }
        }
    }
}

/// Every pair the walk compares, compliant or not.
///
/// Pairs come out grouped by base color in ascending grade order; for each
/// base the lighter walk precedes the darker one.
#[cfg_attr(debug_assertions, instrument(skip(family), fields(family = %family.name())))]
pub fn family_comparisons(family: &ColorFamily) -> Vec<ContrastResult> {
    let mut results = Vec::new();

    for color in family
        .colors()
        .filter(|c| c.grade.value() >= MIN_GRADE_DISTANCE)
    {
        for direction in [Direction::Lighter, Direction::Darker] {
            for partner in GradeWalk::new(family, color.grade, direction) {
                let result = ContrastResult {
                    ratio: contrast_ratio(color.value, partner.value()),
                    base: family.swatch(color),
                    contrast: partner.swatch(family),
                };
                debug!(
                    base = %result.base,
                    contrast = %result.contrast,
                    ratio = result.ratio,
                    "compared"
                );
                results.push(result);
            }
        }
    }

    results
}

/// Pairs in `family` that miss the tier their grade distance requires.
pub fn check_family(family: &ColorFamily) -> Vec<Violation> {
    let violations: Vec<Violation> = family_comparisons(family)
        .into_iter()
        .filter_map(|result| {
            let required = Tier::for_distance(result.distance());
            (!required.passes(result.ratio)).then_some(Violation { result, required })
        })
        .collect();

    debug!(
        family = %family.name(),
        violations = violations.len(),
        "family check finished"
    );
    violations
}

/// Look up `name` in `palette` and check it.
pub fn check_palette_family(palette: &Palette, name: &str) -> Result<Vec<Violation>, PaletteError> {
    palette.family(name).map(check_family)
}
