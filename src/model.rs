//! In-memory palette model: color families indexed by numeric grade.
//!
//! A palette is built once from raw family/utility/value triples and is
//! read-only afterwards. Grades are plain integers end-to-end; the only place
//! a grade is ever parsed from text is [`grade_from_utility`].

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use csscolorparser::Color as CssColor;
use palette::Srgb;
use serde::{Serialize, Serializer};
use tracing::{debug, warn};

/// Absolute white, standing in for grade 0.
pub const WHITE: Srgb<u8> = Srgb::new(255, 255, 255);
/// Absolute black, standing in for grade 100.
pub const BLACK: Srgb<u8> = Srgb::new(0, 0, 0);

/// Grade represented by [`WHITE`].
pub const WHITE_GRADE: Grade = Grade(0);
/// Grade represented by [`BLACK`].
pub const BLACK_GRADE: Grade = Grade(100);
/// Spacing between neighbouring grades on the scale.
pub const GRADE_STEP: u32 = 10;

/// Position of a color on its family's light-to-dark scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Grade(pub u32);

impl Grade {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Absolute difference between two grades.
    pub const fn distance(self, other: Grade) -> u32 {
        self.0.abs_diff(other.0)
    }
}

impl From<u32> for Grade {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extract the grade embedded in a utility name.
///
/// The first run of ASCII digits wins: `"gray-cool-40v"` yields 40.
/// Returns `None` when the name has no digits or the run overflows.
pub fn grade_from_utility(utility: &str) -> Option<Grade> {
    let start = utility.find(|c: char| c.is_ascii_digit())?;
    let digits = &utility[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok().map(Grade)
}

/// Name of a color family, e.g. `blue_vivid`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FamilyName(String);

impl FamilyName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FamilyName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FamilyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single graded color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub grade: Grade,
    pub value: Srgb<u8>,
}

impl Color {
    pub fn new(grade: Grade, value: Srgb<u8>) -> Self {
        Self { grade, value }
    }

    /// Lowercase `#rrggbb` form of the color value.
    pub fn hex(&self) -> String {
        srgb_to_hex(self.value)
    }
}

/// Format an sRGB color as lowercase `#rrggbb`.
pub fn srgb_to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Parse any CSS color syntax into an opaque sRGB color (alpha is dropped).
pub fn parse_color(input: &str) -> Result<Srgb<u8>, String> {
    let css_color: CssColor = input
        .parse()
        .map_err(|e| format!("Invalid color '{}': {}", input, e))?;
    let [r, g, b, _a] = css_color.to_rgba8();
    Ok(Srgb::new(r, g, b))
}

/// A named set of colors keyed by grade.
///
/// At most one color exists per grade.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorFamily {
    name: FamilyName,
    colors: BTreeMap<Grade, Color>,
}

impl ColorFamily {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: FamilyName::new(name),
            colors: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &FamilyName {
        &self.name
    }

    /// Add a color. Returns `false` and leaves the family unchanged when the
    /// grade is already taken.
    pub fn insert(&mut self, color: Color) -> bool {
        if self.colors.contains_key(&color.grade) {
            return false;
        }
        self.colors.insert(color.grade, color);
        true
    }

    /// Look up the color at exactly `grade`.
    pub fn find_by_grade(&self, grade: Grade) -> Option<&Color> {
        self.colors.get(&grade)
    }

    /// Colors in ascending grade order.
    pub fn colors(&self) -> impl ExactSizeIterator<Item = &Color> + Clone + '_ {
        self.colors.values()
    }

    /// The `index`-th color in ascending grade order.
    pub fn get(&self, index: usize) -> Option<&Color> {
        self.colors.values().nth(index)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Swatch label for a color of this family.
    pub fn swatch(&self, color: &Color) -> Swatch {
        Swatch::Graded {
            family: self.name.clone(),
            grade: color.grade,
        }
    }
}

/// Error type for palette lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// The requested family does not exist
    UnknownFamily { name: String, known: Vec<String> },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFamily { name, known } if known.is_empty() => {
                write!(f, "Unknown color family '{}' (palette is empty)", name)
            }
            Self::UnknownFamily { name, known } => write!(
                f,
                "Unknown color family '{}' (available: {})",
                name,
                known.join(", ")
            ),
        }
    }
}

impl std::error::Error for PaletteError {}

/// All color families, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    families: Vec<ColorFamily>,
    index: HashMap<FamilyName, usize>,
}

impl Palette {
    /// Build a palette from `(family, utility, value)` triples.
    ///
    /// See [`PaletteBuilder::add`] for how each triple is interpreted.
    pub fn from_triples<'a, I>(triples: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, Option<&'a str>)>,
    {
        let mut builder = PaletteBuilder::default();
        for (family, utility, value) in triples {
            builder.add(family, utility, value);
        }
        builder.build()
    }

    /// Look up a family by name.
    pub fn family(&self, name: &str) -> Result<&ColorFamily, PaletteError> {
        self.index
            .get(name)
            .map(|&i| &self.families[i])
            .ok_or_else(|| PaletteError::UnknownFamily {
                name: name.to_string(),
                known: self.family_names().map(str::to_string).collect(),
            })
    }

    /// Look up the color at `grade` in `family`.
    ///
    /// A missing grade is `Ok(None)`; only an unknown family is an error.
    pub fn find_by_grade(
        &self,
        family: &str,
        grade: Grade,
    ) -> Result<Option<&Color>, PaletteError> {
        Ok(self.family(family)?.find_by_grade(grade))
    }

    pub fn families(&self) -> impl ExactSizeIterator<Item = &ColorFamily> + Clone + '_ {
        self.families.iter()
    }

    pub fn family_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.families.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Total number of colors across all families.
    pub fn color_count(&self) -> usize {
        self.families.iter().map(ColorFamily::len).sum()
    }
}

/// Incremental palette construction.
#[derive(Debug, Default)]
pub struct PaletteBuilder {
    palette: Palette,
}

impl PaletteBuilder {
    /// Register a family even if none of its entries end up usable.
    pub fn family(&mut self, name: &str) -> &mut ColorFamily {
        let idx = match self.palette.index.get(name) {
            Some(&idx) => idx,
            None => {
                let idx = self.palette.families.len();
                self.palette.families.push(ColorFamily::new(name));
                self.palette.index.insert(FamilyName::new(name), idx);
                idx
            }
        };
        &mut self.palette.families[idx]
    }

    /// Add one raw entry.
    ///
    /// Entries without a value, without a digit run in `utility`, or with an
    /// unparseable color are dropped. A repeated grade keeps the first color.
    pub fn add(&mut self, family: &str, utility: &str, value: Option<&str>) -> &mut Self {
        self.family(family);

        let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            debug!(family, utility, "dropping entry without a value");
            return self;
        };
        let Some(grade) = grade_from_utility(utility) else {
            warn!(family, utility, "utility has no numeric grade, dropping entry");
            return self;
        };
        let color = match parse_color(value) {
            Ok(color) => color,
            Err(e) => {
                warn!(family, utility, error = %e, "dropping entry with invalid color");
                return self;
            }
        };

        if !self.family(family).insert(Color::new(grade, color)) {
            warn!(family, utility, %grade, "duplicate grade, keeping first color");
        }
        self
    }

    pub fn build(self) -> Palette {
        self.palette
    }
}

/// Identifies one side of a contrast comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Swatch {
    /// A stored color, labelled `family-grade`
    Graded { family: FamilyName, grade: Grade },
    /// Absolute white (grade 0)
    White,
    /// Absolute black (grade 100)
    Black,
}

impl Swatch {
    /// Grade used for distance calculations.
    pub fn grade(&self) -> Grade {
        match self {
            Self::Graded { grade, .. } => *grade,
            Self::White => WHITE_GRADE,
            Self::Black => BLACK_GRADE,
        }
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Graded { family, grade } => write!(f, "{family}-{grade}"),
            Self::White => f.write_str("white"),
            Self::Black => f.write_str("black"),
        }
    }
}

impl Serialize for Swatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
