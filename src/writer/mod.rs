//! Test file writing.
//!
//! - `layout` - where a class's composite test file lives
//! - `scaffold` - boilerplate for a brand new test file
//! - `merger` - create-if-absent, append-if-novel, skip-if-present

pub mod layout;
pub mod merger;
pub mod scaffold;

pub use layout::TestLayout;
pub use merger::{contains_test_marker, test_method_name, with_test_marker, TestFileMerger};
