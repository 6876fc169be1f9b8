//! Configuration access port trait.

use std::path::PathBuf;

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_double(&self, section: &str, key: &str, default: f64) -> f64;

    /// A non-blank value read as a filesystem path.
    fn get_path(&self, section: &str, key: &str) -> Option<PathBuf> {
        self.get_string(section, key)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }

    /// All `key = value` pairs of a section, sorted by key. Keys without a
    /// value are skipped; a missing section yields an empty list.
    fn section_entries(&self, section: &str) -> Vec<(String, String)>;
}
