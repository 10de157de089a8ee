#![allow(unused)] // Ignore due to all constants not being utilized across all test targets

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!(env!("CARGO_MANIFEST_DIR"), "..", "tests", "test_files"));

pub const BASE_TEXT: &str = "The sun shines over the lake";

pub const EXPECTED_HIGHEST_FREQUENCY_PREFIX: &str = "EXPECTED_HIGHEST_FREQUENCY:";
pub const EXPECTED_FREQUENCY_PREFIX: &str = "EXPECTED_FREQUENCY:";
pub const EXPECTED_TOP_PREFIX: &str = "EXPECTED_TOP:";
pub const EXPECTED_TOP_N_PREFIX: &str = "EXPECTED_TOP_N:";
pub const COMMENT_PREFIX: &str = "COMMENT:";
