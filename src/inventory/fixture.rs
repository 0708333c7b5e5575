//! Resource fixture loading
//!
//! A fixture file is a JSONL sequence of `{"name": ..., "kind": "DESK"}`
//! records naming the resources to pre-populate the inventory with before
//! generation. Blank lines are ignored; a malformed line is fatal.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{SeedError, SeedResult};
use crate::types::ResourceKind;

/// One candidate resource from a fixture file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceFixture {
    /// Display name of the resource
    pub name: String,
    /// Desk or room
    pub kind: ResourceKind,
}

/// Load a JSONL resource fixture file
pub fn load_fixture(path: impl AsRef<Path>) -> SeedResult<Vec<ResourceFixture>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let mut fixtures = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fixture: ResourceFixture = serde_json::from_str(line).map_err(|e| {
            SeedError::fixture(format!("{}:{}: {}", path.display(), index + 1, e))
        })?;
        fixtures.push(fixture);
    }

    debug!(count = fixtures.len(), path = %path.display(), "loaded resource fixture");
    Ok(fixtures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_fixture_parses_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{{\"name\": \"Desk 1\", \"kind\": \"DESK\"}}").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "{{\"name\": \"Boardroom\", \"kind\": \"ROOM\"}}").unwrap();

        let fixtures = load_fixture(file.path()).unwrap();
        assert_eq!(fixtures.len(), 2);
        assert_eq!(fixtures[0].name, "Desk 1");
        assert_eq!(fixtures[0].kind, ResourceKind::Desk);
        assert_eq!(fixtures[1].kind, ResourceKind::Room);
    }

    #[test]
    fn test_load_fixture_rejects_malformed_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{{\"name\": \"Desk 1\", \"kind\": \"DESK\"}}").unwrap();
        writeln!(file, "not json").unwrap();

        let result = load_fixture(file.path());
        match result {
            Err(SeedError::Fixture(msg)) => assert!(msg.contains(":2:")),
            other => panic!("expected fixture error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_fixture_missing_file() {
        let result = load_fixture("/nonexistent/resources.jsonl");
        assert!(matches!(result, Err(SeedError::Io(_))));
    }
}
