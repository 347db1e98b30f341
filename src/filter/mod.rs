/*!
 * Line classification and filtering.
 *
 * - `predicates`: character-class checks (Latin letters, Roman numerals, quoted Latin words)
 * - `classifier`: filter modes and first-match classification
 * - `summary`: per-run counts and bounded example lists
 * - `report`: log file rendering
 * - `pipeline`: file-to-file filter runs
 */

pub mod classifier;
pub mod pipeline;
pub mod predicates;
pub mod report;
pub mod summary;

pub use classifier::{Classification, FilterMode, LineRecord, RejectionReason};
pub use pipeline::{FilterOutcome, FilterResult, LineFilter};
pub use predicates::{has_latin_letters, has_quoted_latin_word, has_roman_numeral};
pub use summary::{CategoryStats, FilterSummary};
