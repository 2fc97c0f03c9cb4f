// ============================================================================
// Company Data Parsing
// ============================================================================
//
// File-based and string-based parsing for a company data document: the full
// set of actors, scenes, timeslots and already-booked rehearsals that the
// scheduler operates over. Used to seed the in-memory repository.

use crate::db::checksum::calculate_checksum;
use crate::models::{Actor, Rehearsal, Scene, Timeslot};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A full company dataset, as loaded from an exported JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyData {
    #[serde(default)]
    pub name: String,
    /// SHA-256 of the raw document; computed at parse time when absent.
    #[serde(default)]
    pub checksum: String,
    #[serde(default)]
    pub actors: Vec<Actor>,
    #[serde(default)]
    pub scenes: Vec<Scene>,
    #[serde(default)]
    pub timeslots: Vec<Timeslot>,
    #[serde(default)]
    pub rehearsals: Vec<Rehearsal>,
}

fn validate_input_company(company_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(company_json).context("Invalid company JSON")?;
    let has_actors = value.as_object().and_then(|obj| obj.get("actors")).is_some();
    if !has_actors {
        anyhow::bail!("Missing required 'actors' field");
    }
    Ok(())
}

/// Parse a company dataset from a JSON string.
///
/// Performs a shallow structural check (the `actors` key must be present)
/// before full deserialization, and backfills the checksum from the raw
/// document when the export did not include one.
pub fn parse_company_json_str(company_json: &str) -> Result<CompanyData> {
    validate_input_company(company_json)?;

    let mut company: CompanyData = serde_json::from_str(company_json)
        .context("Failed to deserialize company JSON using Serde")?;

    if company.checksum.is_empty() {
        company.checksum = calculate_checksum(company_json);
    }

    Ok(company)
}

/// Parse a company dataset from a JSON file on disk.
pub fn parse_company_json_file<P: AsRef<Path>>(path: P) -> Result<CompanyData> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read company file {}", path.display()))?;
    parse_company_json_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TimeslotId;

    #[test]
    fn test_parse_minimal_company() {
        let company_json = r#"{
            "name": "Midsummer Players",
            "actors": [
                {
                    "id": "a1",
                    "name": "Alice",
                    "availableTimeslots": ["t1"],
                    "sceneIds": ["s1"]
                }
            ],
            "scenes": [
                { "id": "s1", "title": "Hamlet", "actorsRequired": 2 }
            ],
            "timeslots": [
                {
                    "id": "t1",
                    "label": "Monday evening",
                    "day": "Monday",
                    "startTime": "6:00 PM",
                    "endTime": "8:00 PM"
                }
            ]
        }"#;

        let result = parse_company_json_str(company_json);
        assert!(result.is_ok(), "Should parse minimal company: {:?}", result.err());

        let company = result.unwrap();
        assert_eq!(company.name, "Midsummer Players");
        assert_eq!(company.actors.len(), 1);
        assert_eq!(company.scenes.len(), 1);
        assert_eq!(company.timeslots.len(), 1);
        assert!(company.rehearsals.is_empty());
        assert!(company.actors[0].is_available_for(&TimeslotId::new("t1")));
    }

    #[test]
    fn test_checksum_backfilled_when_absent() {
        let company_json = r#"{"actors": []}"#;
        let company = parse_company_json_str(company_json).unwrap();
        assert_eq!(company.checksum, calculate_checksum(company_json));
    }

    #[test]
    fn test_provided_checksum_kept() {
        let company_json = r#"{"actors": [], "checksum": "abc123"}"#;
        let company = parse_company_json_str(company_json).unwrap();
        assert_eq!(company.checksum, "abc123");
    }

    #[test]
    fn test_missing_actors_key() {
        let company_json = r#"{"scenes": []}"#;
        let result = parse_company_json_str(company_json);
        assert!(result.is_err(), "Should fail without actors key");
    }

    #[test]
    fn test_invalid_json() {
        let company_json = "not valid json {";
        let result = parse_company_json_str(company_json);
        assert!(result.is_err(), "Should fail with invalid JSON");
    }
}
