//! Course and curriculum domain types.
//!
//! These mirror the JSON documents produced by the course provider's
//! curriculum API. The ingestion collaborator fetches and stores them; the
//! scheduling core only reads the section/unit structure.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::models::checksum::calculate_checksum;

/// Course identifier assigned by the course provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(pub String);

impl CourseId {
    pub fn new(value: impl Into<String>) -> Self {
        CourseId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CourseId {
    fn from(v: String) -> Self {
        CourseId(v)
    }
}

/// Lecture unit identifier, unique within a course.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct UnitId(pub i64);

impl UnitId {
    pub fn new(value: i64) -> Self {
        UnitId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UnitId {
    fn from(v: i64) -> Self {
        UnitId(v)
    }
}

/// One video lecture unit. Immutable once fetched.
///
/// The `is_preview`/`has_attachment`/`is_complete` flags come from the
/// provider and are not consulted by scheduling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: UnitId,
    pub title: String,
    /// Raw runtime in seconds.
    pub runtime: u32,
    pub is_preview: bool,
    pub has_attachment: bool,
    pub is_complete: bool,
}

/// An ordered group of units under one heading. Ordering is significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    pub units: Vec<Unit>,
}

/// A course's full curriculum document.
///
/// The published/updated timestamps are provider metadata and are kept as
/// received; scheduling never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumData {
    pub published_at: String,
    pub last_updated_at: String,
    pub curriculum: Vec<Section>,
    /// SHA-256 of the source document, filled in on parse when absent.
    #[serde(default)]
    pub checksum: String,
}

impl CurriculumData {
    /// Total number of units across all sections.
    pub fn unit_count(&self) -> usize {
        self.curriculum.iter().map(|s| s.units.len()).sum()
    }

    /// Total raw runtime in seconds across all sections.
    pub fn total_runtime(&self) -> u64 {
        self.curriculum
            .iter()
            .flat_map(|s| s.units.iter())
            .map(|u| u64::from(u.runtime))
            .sum()
    }
}

/// Envelope the curriculum API wraps its payload in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumApiResponse {
    pub status_code: String,
    pub message: String,
    pub error_code: Option<String>,
    pub data: CurriculumData,
}

/// A stored course with its metadata and (optionally) its curriculum.
///
/// `curriculum` is optional so course listings can carry the metadata alone
/// without the full document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub instructors: Vec<String>,
    pub lecture_unit_count: u32,
    pub runtime: u32,
    pub curriculum: Option<CurriculumData>,
}

fn validate_curriculum_document(json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(json).context("Invalid curriculum JSON")?;
    let has_curriculum = value
        .as_object()
        .map(|obj| {
            obj.contains_key("curriculum")
                || obj
                    .get("data")
                    .and_then(|d| d.as_object())
                    .is_some_and(|d| d.contains_key("curriculum"))
        })
        .unwrap_or(false);
    if !has_curriculum {
        anyhow::bail!("Missing required 'curriculum' field");
    }
    Ok(())
}

fn deserialize_with_path<T: DeserializeOwned>(json: &str) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| anyhow::anyhow!("Deserialization failed at {}: {}", e.path(), e))
}

/// Parse a curriculum document from a JSON string.
///
/// Accepts either the provider's response envelope (`{"statusCode": ...,
/// "data": {...}}`) or a bare curriculum document. The returned value carries
/// a checksum of the source text, computed here when the document does not
/// already declare one.
///
/// # Arguments
///
/// * `json` - Curriculum JSON, as fetched by the ingestion layer
///
/// # Returns
///
/// A fully populated `CurriculumData` with its checksum set.
pub fn parse_curriculum_json_str(json: &str) -> Result<CurriculumData> {
    validate_curriculum_document(json)?;

    // Try the envelope form first, then fall back to the bare document.
    let mut data = match deserialize_with_path::<CurriculumApiResponse>(json) {
        Ok(envelope) => envelope.data,
        Err(_) => deserialize_with_path::<CurriculumData>(json)
            .context("Failed to deserialize curriculum JSON")?,
    };

    if data.checksum.is_empty() {
        data.checksum = calculate_checksum(json);
    }

    Ok(data)
}
