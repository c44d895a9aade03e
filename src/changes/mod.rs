//! Change location: which methods did a revision touch?
//!
//! - `hunks` - parse zero-context unified diff hunk headers into line spans
//! - `locator` - run the revision comparison and intersect spans with method ranges

pub mod hunks;
pub mod locator;

pub use hunks::{parse_hunk_spans, ChangeSpan};
pub use locator::{affected, changed_spans, ChangeLocator, DiffProvider, GitDiff, DEFAULT_COMPARE_REF};
