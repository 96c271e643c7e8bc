//! The J-Rayting letter-grade scale.
//!
//! A rating is either a single grade (`"B+"`) or a combo of two adjacent
//! grades (`"B+/A-"`) expressing an in-between judgment. Every label on the
//! scale has a fixed score; combos resolve to their higher grade when
//! filtering and ranking.

use std::fmt;

/// A single letter grade, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grade {
    APlus,
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    CMinus,
    DPlus,
    D,
}

/// All grades, best first.
pub const ALL_GRADES: &[Grade] = &[
    Grade::APlus,
    Grade::A,
    Grade::AMinus,
    Grade::BPlus,
    Grade::B,
    Grade::BMinus,
    Grade::CPlus,
    Grade::C,
    Grade::CMinus,
    Grade::DPlus,
    Grade::D,
];

/// Every label on the scale with its score, best first.
pub const SCALE: &[(&str, i32)] = &[
    ("A+", 20),
    ("A/A+", 19),
    ("A", 18),
    ("A-/A", 17),
    ("A-", 16),
    ("B+/A-", 15),
    ("B+", 14),
    ("B/B+", 13),
    ("B", 12),
    ("B-/B", 11),
    ("B-", 10),
    ("C+/B-", 9),
    ("C+", 8),
    ("C/C+", 7),
    ("C", 6),
    ("C-", 5),
    ("D+", 4),
    ("D", 3),
];

impl Grade {
    pub fn label(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        let s = s.trim();
        ALL_GRADES.iter().copied().find(|g| g.label().eq_ignore_ascii_case(s))
    }

    pub fn score(&self) -> i32 {
        score_for_label(self.label())
    }

    /// The better of two grades.
    pub fn best(self, other: Self) -> Self {
        self.min(other)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A parsed J-Rayting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Single(Grade),
    Combo(Grade, Grade),
}

impl Rating {
    /// Parse a label from the scale. Whitespace around the grades is ignored;
    /// anything that is not a single grade or a combo of two grades is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        match s.split_once('/') {
            Some((a, b)) => Some(Self::Combo(Grade::from_label(a)?, Grade::from_label(b)?)),
            None => Grade::from_label(s).map(Self::Single),
        }
    }

    /// The grade used for filtering and ranking: the higher of a combo.
    pub fn effective(&self) -> Grade {
        match *self {
            Self::Single(g) => g,
            Self::Combo(a, b) => a.best(b),
        }
    }

    pub fn is_combo(&self) -> bool {
        matches!(self, Self::Combo(..))
    }

    /// Score on the fixed scale. Combos outside the scale fall back to the
    /// score of their effective grade.
    pub fn score(&self) -> i32 {
        match score_for_label(&self.to_string()) {
            0 => self.effective().score(),
            s => s,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(g) => write!(f, "{g}"),
            Self::Combo(a, b) => write!(f, "{a}/{b}"),
        }
    }
}

/// Score for a raw label; 0 for anything not on the scale.
pub fn score_for_label(label: &str) -> i32 {
    let compact: String = label.chars().filter(|c| !c.is_whitespace()).collect();
    SCALE
        .iter()
        .find(|(l, _)| l.eq_ignore_ascii_case(&compact))
        .map(|(_, s)| *s)
        .unwrap_or(0)
}

/// Resolve raw rating text to the grade label used for filtering.
///
/// Valid combos resolve to their higher grade; everything else (single grades
/// and unrecognised text) is returned unchanged.
pub fn effective_label(raw: &str) -> String {
    match Rating::parse(raw) {
        Some(r @ Rating::Combo(..)) => r.effective().label().to_string(),
        _ => raw.to_string(),
    }
}
