use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{HotmapError, Result};

/// One hotspot as stored in the data file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HotspotRecord {
    pub id: String,
    /// Horizontal position, 0-100, relative to the image width.
    pub x_percent: f32,
    /// Vertical position, 0-100, relative to the image height.
    pub y_percent: f32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub coordinates: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_description: Option<String>,
}

impl HotspotRecord {
    /// Whether the record offers a detail panel.
    pub fn has_detail(&self) -> bool {
        self.detailed_description
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty())
    }

    fn in_range(&self) -> bool {
        (0.0..=100.0).contains(&self.x_percent) && (0.0..=100.0).contains(&self.y_percent)
    }
}

/// Ordered, immutable set of hotspots with unique ids.
#[derive(Clone, Debug, Default)]
pub struct HotspotCatalog {
    records: Vec<HotspotRecord>,
}

impl HotspotCatalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(records: Vec<HotspotRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(HotmapError::DuplicateId(record.id.clone()));
            }
            if !record.in_range() {
                tracing::warn!(
                    id = %record.id,
                    x = record.x_percent,
                    y = record.y_percent,
                    "hotspot position outside 0-100%"
                );
            }
        }
        Ok(Self { records })
    }

    /// Parse a JSON array of records.
    pub fn from_json(body: &str) -> Result<Self> {
        let records: Vec<HotspotRecord> = serde_json::from_str(body)?;
        Self::new(records)
    }

    pub fn get(&self, id: &str) -> Option<&HotspotRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn records(&self) -> &[HotspotRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
