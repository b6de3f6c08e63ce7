//! Test fixture loading utilities

use std::path::PathBuf;

use catalog_core::domain::{Item, Work};

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a fixture file as a string
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Load an item fixture
#[allow(dead_code)]
pub fn load_item_fixture(name: &str) -> Item {
    serde_json::from_str(&load_fixture(&format!("items/{}", name)))
        .unwrap_or_else(|e| panic!("Invalid item fixture {}: {}", name, e))
}

/// Load a work fixture
#[allow(dead_code)]
pub fn load_work_fixture(name: &str) -> Work {
    serde_json::from_str(&load_fixture(&format!("works/{}", name)))
        .unwrap_or_else(|e| panic!("Invalid work fixture {}: {}", name, e))
}
