/*!
 * Line classification.
 *
 * A filter mode selects an ordered list of rejection checks. A line is
 * rejected by the first check that matches and accepted when none do.
 */

use std::fmt;

use super::predicates::{has_latin_letters, has_quoted_latin_word, has_roman_numeral};

/// A single non-empty, trimmed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    /// 1-based physical line number in the input file
    pub line_number: usize,
    /// Trimmed line text
    pub text: String,
}

impl LineRecord {
    pub fn new(line_number: usize, text: impl Into<String>) -> Self {
        Self {
            line_number,
            text: text.into(),
        }
    }
}

/// Why a line was removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    /// Contains an ASCII letter
    Latin,
    /// Contains a whole-word Roman numeral token
    Roman,
    /// Contains a Latin word wrapped in quote characters
    QuotedLatin,
}

impl RejectionReason {
    /// Run the predicate behind this reason
    pub fn matches(self, text: &str) -> bool {
        match self {
            Self::Latin => has_latin_letters(text),
            Self::Roman => has_roman_numeral(text),
            Self::QuotedLatin => has_quoted_latin_word(text),
        }
    }

    // @returns: Human readable category name
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Latin => "Latin letters",
            Self::Roman => "Roman numerals",
            Self::QuotedLatin => "Quoted Latin words",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Outcome of classifying one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Accepted,
    Rejected(RejectionReason),
}

impl Classification {
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Filter strictness level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Latin letters only, no log file
    Quick,
    /// Latin letters, Roman numerals and quoted Latin words
    Strict,
    /// Latin letters only, with a log file and detailed report
    Legacy,
}

const LATIN_ONLY: &[RejectionReason] = &[RejectionReason::Latin];

const STRICT_ORDER: &[RejectionReason] = &[
    RejectionReason::Latin,
    RejectionReason::Roman,
    RejectionReason::QuotedLatin,
];

impl FilterMode {
    /// Checks applied by this mode, in priority order
    pub fn checks(self) -> &'static [RejectionReason] {
        match self {
            Self::Quick | Self::Legacy => LATIN_ONLY,
            Self::Strict => STRICT_ORDER,
        }
    }

    /// Maximum number of example lines retained per rejection category
    pub fn example_limit(self, reason: RejectionReason) -> usize {
        match (self, reason) {
            (Self::Strict, RejectionReason::Latin) => 10,
            (Self::Strict, _) => 5,
            (Self::Quick | Self::Legacy, _) => 100,
        }
    }

    /// Suffix used to derive the log file path, if this mode writes one
    pub fn log_suffix(self) -> Option<&'static str> {
        match self {
            Self::Quick => None,
            Self::Strict => Some("_strict_filter.log"),
            Self::Legacy => Some("_removed_latin.log"),
        }
    }

    // @returns: Capitalized mode name
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Quick => "Quick",
            Self::Strict => "Strict",
            Self::Legacy => "Legacy full",
        }
    }

    /// Classify a trimmed, non-empty line
    pub fn classify(self, text: &str) -> Classification {
        self.checks()
            .iter()
            .copied()
            .find(|reason| reason.matches(text))
            .map_or(Classification::Accepted, Classification::Rejected)
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Split raw file content into numbered, trimmed, non-empty records.
///
/// Line numbers count every physical line, blank ones included.
pub fn non_empty_records(content: &str) -> impl Iterator<Item = LineRecord> + '_ {
    content.lines().enumerate().filter_map(|(index, line)| {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(LineRecord::new(index + 1, trimmed))
        }
    })
}
