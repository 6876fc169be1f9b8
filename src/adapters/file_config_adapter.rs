//! INI file configuration adapter.
//!
//! Section and key names are case-insensitive (configparser lower-cases
//! them); values keep their case.

use crate::domain::error::GuideError;
use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

#[derive(Debug)]
pub struct FileConfigAdapter {
    ini: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GuideError> {
        let path = path.as_ref();
        let mut ini = Ini::new();
        ini.load(path).map_err(|reason| GuideError::ConfigParse {
            file: path.display().to_string(),
            reason,
        })?;
        Ok(Self { ini })
    }

    pub fn from_string(content: &str) -> Result<Self, GuideError> {
        let mut ini = Ini::new();
        ini.read(content.to_string())
            .map_err(|reason| GuideError::ConfigParse {
                file: "<inline>".to_string(),
                reason,
            })?;
        Ok(Self { ini })
    }

    /// Section names present in the file, sorted.
    pub fn sections(&self) -> Vec<String> {
        let mut names = self.ini.sections();
        names.sort();
        names
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.ini.get(section, key)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        match self.ini.getfloat(section, key) {
            Ok(Some(v)) if v.is_finite() => v,
            _ => default,
        }
    }

    fn section_entries(&self, section: &str) -> Vec<(String, String)> {
        let Some(entries) = self.ini.get_map_ref().get(&section.to_lowercase()) else {
            return Vec::new();
        };
        let mut pairs: Vec<(String, String)> = entries
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.clone(), v.clone())))
            .collect();
        pairs.sort();
        pairs
    }
}
