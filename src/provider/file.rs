//! Record file provider.
//!
//! Reads discovery records that another tool already produced, as a JSON array
//! of `{"name": ..., "url": ..., "tags": [...]}` objects. A path of `-` reads
//! standard input.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use log::info;

use super::Provider;
use crate::discovery::DiscoveryRecord;
use crate::error::Result;

/// Parse a JSON array of discovery records.
pub fn parse_records(json: &str) -> Result<Vec<DiscoveryRecord>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(json)?)
}

#[derive(Debug, Clone)]
pub struct FileProvider {
    pub path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_source(&self) -> Result<String> {
        if self.path.as_os_str() == "-" {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        } else {
            Ok(fs::read_to_string(&self.path)?)
        }
    }
}

impl Provider for FileProvider {
    fn name(&self) -> &str {
        "file"
    }

    fn discover(&self) -> Result<Vec<DiscoveryRecord>> {
        let records = parse_records(&self.read_source()?)?;
        info!("Read {} records from {}", records.len(), self.path.display());
        Ok(records)
    }
}
