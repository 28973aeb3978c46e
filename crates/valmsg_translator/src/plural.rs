use std::fmt;

use serde::Serialize;

/// CLDR cardinal plural categories. Only `One` and `Other` are produced by
/// the default rule, but stores can carry patterns for any category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub(crate) const COUNT: usize = 6;

    pub(crate) const ALL: [PluralCategory; Self::COUNT] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cardinal plural rule: maps a magnitude and its visible fraction digit
/// count to a category.
pub type PluralRuleFn = fn(magnitude: f64, digits: usize) -> PluralCategory;

/// Default cardinal rule: `One` for exactly 1 with no fraction digits,
/// `Other` for everything else (0, 2+, and any fractional magnitude).
pub fn cardinal_one_other(magnitude: f64, digits: usize) -> PluralCategory {
    if digits == 0 && magnitude == 1.0 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}
