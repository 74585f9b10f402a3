//! Message categories and their section headers.

use std::fmt;

/// Every bucket of response messages, in classification order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Silly,
    Zero,
    One,
    Negative,
    Decimal,
    SpecificPun,
    Large,
    Prime,
    PerfectSquare,
    Double,
    Even,
    Odd,
    Any,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Self::Silly,
        Self::Zero,
        Self::One,
        Self::Negative,
        Self::Decimal,
        Self::SpecificPun,
        Self::Large,
        Self::Prime,
        Self::PerfectSquare,
        Self::Double,
        Self::Even,
        Self::Odd,
        Self::Any,
    ];

    /// The section header that introduces this category in a lines file.
    pub fn header(self) -> &'static str {
        match self {
            Self::Silly => "Answers Just Plain Silly & Cute",
            Self::Zero => "Answers For the Number 0",
            Self::One => "Answers For the Number 1",
            Self::Negative => "Answers For Negative Numbers",
            Self::Decimal => "Answers For Decimal Answers",
            Self::SpecificPun => "Answers For Numbers 1-10 (Specific Puns)",
            Self::Large => "Answers For Large Numbers",
            Self::Prime => "Answers For Prime Numbers",
            Self::PerfectSquare => "Answers For Perfect Squares (e.g., 4, 9, 16, 25)",
            Self::Double => "Answers For Double Numbers (e.g., 11, 22, 33, 44)",
            Self::Even => "Answers For Even Numbers",
            Self::Odd => "Answers For Odd Numbers",
            Self::Any => "Answers For Any Number",
        }
    }

    /// Match a header line to its category (case and spacing insensitive).
    pub fn from_header(line: &str) -> Option<Self> {
        let wanted = squash(line);
        Self::ALL
            .into_iter()
            .find(|category| squash(category.header()) == wanted)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

fn squash(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
