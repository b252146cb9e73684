use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants::TIMESTAMP_FORMAT;

/// One pothole report: a coordinate, a photo and a display timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PotholeReport {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    /// Photo path relative to the photos directory (e.g. "pothole1.jpg").
    pub image: String,
    /// Display string, nominally "YYYY-MM-DD HH:MM:SS".
    pub timestamp: String,
}

/// Immutable report collection, loaded once at startup.
#[derive(Clone)]
pub struct ReportStore {
    reports: Arc<Vec<PotholeReport>>,
}

impl ReportStore {
    /// The built-in sample set: three reports near RTO Pune.
    pub fn builtin() -> Self {
        let reports = vec![
            PotholeReport {
                id: "1".to_string(),
                lat: 18.5312,
                lng: 73.8619,
                image: "pothole1.jpg".to_string(),
                timestamp: "2024-01-30 14:30:00".to_string(),
            },
            PotholeReport {
                id: "2".to_string(),
                lat: 18.5307,
                lng: 73.8605,
                image: "pothole2.jpg".to_string(),
                timestamp: "2024-01-30 15:10:00".to_string(),
            },
            PotholeReport {
                id: "3".to_string(),
                lat: 18.5321,
                lng: 73.8593,
                image: "pothole3.jpg".to_string(),
                timestamp: "2024-01-30 16:00:00".to_string(),
            },
        ];
        Self { reports: Arc::new(reports) }
    }

    /// Wraps an already-validated report list.
    pub fn from_reports(reports: Vec<PotholeReport>) -> Self {
        Self { reports: Arc::new(reports) }
    }

    /// Loads reports from a JSON file (an array of report records).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read reports file: {}", path.display()))?;
        let reports = parse_reports(&content)
            .with_context(|| format!("Invalid reports file: {}", path.display()))?;
        info!("Loaded {} reports from {}", reports.len(), path.display());
        Ok(Self { reports: Arc::new(reports) })
    }

    pub fn get(&self, id: &str) -> Option<&PotholeReport> {
        self.reports.iter().find(|r| r.id == id)
    }

    pub fn count(&self) -> usize {
        self.reports.len()
    }

    /// Reports in input order. The marker list mirrors this order.
    pub fn all(&self) -> &[PotholeReport] {
        &self.reports
    }
}

/// Parses a JSON array of report records, rejecting duplicate ids.
///
/// Timestamps that do not match the expected format are kept verbatim
/// (they are display strings) but logged as a warning.
pub fn parse_reports(content: &str) -> Result<Vec<PotholeReport>> {
    let reports: Vec<PotholeReport> =
        serde_json::from_str(content).context("Failed to parse reports JSON")?;

    let mut seen = HashSet::new();
    for report in &reports {
        if !seen.insert(report.id.as_str()) {
            bail!("Duplicate report id: {}", report.id);
        }
        if NaiveDateTime::parse_from_str(&report.timestamp, TIMESTAMP_FORMAT).is_err() {
            warn!(
                "Report {} has a non-standard timestamp: {:?}",
                report.id, report.timestamp
            );
        }
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_set_has_three_reports() {
        let store = ReportStore::builtin();
        assert_eq!(store.count(), 3);
        assert_eq!(store.all()[0].id, "1");
        assert_eq!(store.all()[2].image, "pothole3.jpg");
    }

    #[test]
    fn lookup_by_id() {
        let store = ReportStore::builtin();
        let report = store.get("2").unwrap();
        assert_eq!(report.lat, 18.5307);
        assert_eq!(report.lng, 73.8605);
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn parse_valid_reports() {
        let json = r#"[
            {"id": "a", "lat": 18.53, "lng": 73.86, "image": "a.jpg", "timestamp": "2024-01-30 14:30:00"},
            {"id": "b", "lat": 18.531, "lng": 73.861, "image": "b.jpg", "timestamp": "2024-01-30 15:00:00"}
        ]"#;
        let reports = parse_reports(json).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[1].id, "b");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"id": "a", "lat": 18.53, "lng": 73.86, "image": "a.jpg", "timestamp": "2024-01-30 14:30:00"},
            {"id": "a", "lat": 18.531, "lng": 73.861, "image": "b.jpg", "timestamp": "2024-01-30 15:00:00"}
        ]"#;
        let err = parse_reports(json).unwrap_err();
        assert!(err.to_string().contains("Duplicate report id"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_reports("not json").is_err());
        assert!(parse_reports(r#"{"id": "a"}"#).is_err());
    }

    #[test]
    fn odd_timestamp_is_kept_verbatim() {
        let json = r#"[
            {"id": "a", "lat": 18.53, "lng": 73.86, "image": "a.jpg", "timestamp": "yesterday"}
        ]"#;
        let reports = parse_reports(json).unwrap();
        assert_eq!(reports[0].timestamp, "yesterday");
    }
}
