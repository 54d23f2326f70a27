//! # Project Data Structures
//!
//! The `Project` struct is the root container for all calculation data.
//! Projects serialize to `.wpn` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: DesignSettings (connector φ, penetration limits)
//! └── items: HashMap<Uuid, CalculationItem> (all calculations)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use peno_core::project::Project;
//!
//! let project = Project::new("Jane Engineer", "25-042", "ACME Corp");
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("connector_phi"));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::calculations::penetration::PenetrationLimits;
use crate::calculations::{CalculationItem, ItemResult};
use crate::equations::forces::DEFAULT_CONNECTOR_PHI;
use crate::errors::CalcError;

/// Current schema version for .wpn files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// Items are stored in a flat UUID-keyed map so references stay stable when
/// items are reordered or removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Design settings shared by every item
    #[serde(default)]
    pub settings: DesignSettings,

    /// All calculation items, keyed by UUID
    pub items: HashMap<Uuid, CalculationItem>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Example
    ///
    /// ```rust
    /// use peno_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "25-001", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// ```
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: DesignSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a calculation item to the project.
    ///
    /// Returns the UUID assigned to the item.
    pub fn add_item(&mut self, item: CalculationItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a calculation item by UUID.
    ///
    /// Returns the removed item if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<CalculationItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get a calculation item by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&CalculationItem> {
        self.items.get(id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Evaluate every item with the project settings.
    ///
    /// A failing item does not stop the others; its error is kept in the
    /// report. Items are ordered by label, then id.
    pub fn evaluate(&self) -> ProjectReport {
        let mut entries: Vec<(&Uuid, &CalculationItem)> = self.items.iter().collect();
        entries.sort_by(|a, b| a.1.label().cmp(b.1.label()).then(a.0.cmp(b.0)));

        let items = entries
            .into_iter()
            .map(|(id, item)| {
                let outcome = match item.evaluate(&self.settings) {
                    Ok(result) => ItemOutcome::Completed(result),
                    Err(error) => {
                        warn!(label = item.label(), code = error.error_code(), "{}", error);
                        ItemOutcome::Failed(error)
                    }
                };
                ItemReport {
                    id: *id,
                    label: item.label().to_string(),
                    calc_type: item.calc_type().to_string(),
                    outcome,
                }
            })
            .collect::<Vec<_>>();

        debug!(job_id = %self.meta.job_id, items = items.len(), "project evaluated");
        ProjectReport {
            job_id: self.meta.job_id.clone(),
            engineer: self.meta.engineer.clone(),
            generated: Utc::now(),
            settings: self.settings,
            items,
        }
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Design settings applied to every calculation in a project.
///
/// Missing fields take their defaults when a file is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Shear connector capacity reduction factor φ
    #[serde(alias = "phi")]
    pub connector_phi: f64,

    /// Geometric limits for web openings
    pub penetration_limits: PenetrationLimits,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            connector_phi: DEFAULT_CONNECTOR_PHI,
            penetration_limits: PenetrationLimits::default(),
        }
    }
}

/// Outcome of one item in a [`ProjectReport`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", content = "output")]
pub enum ItemOutcome {
    Completed(ItemResult),
    Failed(CalcError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemReport {
    pub id: Uuid,
    pub label: String,
    pub calc_type: String,
    pub outcome: ItemOutcome,
}

impl ItemReport {
    /// True when the item ran and every check passed
    pub fn passes(&self) -> bool {
        matches!(&self.outcome, ItemOutcome::Completed(result) if result.passes())
    }
}

/// Results of evaluating a whole project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectReport {
    pub job_id: String,
    pub engineer: String,
    pub generated: DateTime<Utc>,
    pub settings: DesignSettings,
    pub items: Vec<ItemReport>,
}

impl ProjectReport {
    pub fn all_pass(&self) -> bool {
        self.items.iter().all(ItemReport::passes)
    }

    pub fn failure_count(&self) -> usize {
        self.items.iter().filter(|item| !item.passes()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::composite::tests::test_input;
    use crate::calculations::penetration::PenetrationInput;

    fn opening(label: &str, height: f64) -> CalculationItem {
        CalculationItem::Penetration(PenetrationInput {
            label: label.to_string(),
            depth_of_beam: 400.0,
            height,
            length: 400.0,
            top_gap: 100.0,
            bottom_gap: 100.0,
            left_distance: 1500.0,
            right_distance: 3000.0,
            composite: true,
        })
    }

    #[test]
    fn test_project_creation() {
        let project = Project::new("John Doe", "25-001", "Acme Corp");
        assert_eq!(project.meta.engineer, "John Doe");
        assert_eq!(project.meta.job_id, "25-001");
        assert_eq!(project.meta.client, "Acme Corp");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
        assert_eq!(project.settings.connector_phi, 0.85);
    }

    #[test]
    fn test_project_serialization() {
        let mut project = Project::new("Jane Engineer", "25-042", "Test Client");
        project.add_item(opening("P-1", 200.0));
        let json = serde_json::to_string_pretty(&project).unwrap();

        assert!(json.contains("Jane Engineer"));
        assert!(json.contains("penetration_limits"));

        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.engineer, "Jane Engineer");
        assert_eq!(roundtrip.item_count(), 1);
    }

    #[test]
    fn test_add_remove_item() {
        let mut project = Project::new("Engineer", "25-001", "Client");
        let id = project.add_item(opening("P-1", 200.0));
        assert_eq!(project.item_count(), 1);
        assert!(project.get_item(&id).is_some());

        let removed = project.remove_item(&id);
        assert!(removed.is_some());
        assert_eq!(project.item_count(), 0);
        assert!(project.remove_item(&id).is_none());
    }

    #[test]
    fn test_settings_defaults_fill_missing_fields() {
        let settings: DesignSettings = serde_json::from_str(r#"{ "phi": 0.75 }"#).unwrap();
        assert_eq!(settings.connector_phi, 0.75);
        assert_eq!(settings.penetration_limits, PenetrationLimits::default());

        let empty: DesignSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, DesignSettings::default());
    }

    #[test]
    fn test_evaluate_collects_each_item() {
        let mut project = Project::new("Engineer", "25-001", "Client");
        project.add_item(opening("P-2", 300.0));
        project.add_item(opening("P-1", 200.0));
        project.add_item(opening("P-3", 0.0));
        project.add_item(CalculationItem::CompositeSection(test_input()));

        let report = project.evaluate();
        let labels: Vec<&str> = report.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["P-1", "P-2", "P-3", "S-1"]);

        assert!(report.items[0].passes());
        // h_0 = 300 > 0.7 * 400
        assert!(!report.items[1].passes());
        assert!(matches!(
            report.items[2].outcome,
            ItemOutcome::Failed(CalcError::InvalidInput { .. })
        ));
        assert!(report.items[3].passes());
        assert_eq!(report.failure_count(), 2);
        assert!(!report.all_pass());
    }

    #[test]
    fn test_report_serialization() {
        let mut project = Project::new("Engineer", "25-001", "Client");
        project.add_item(opening("P-1", 0.0));
        let json = serde_json::to_string(&project.evaluate()).unwrap();
        assert!(json.contains("\"status\":\"Failed\""));
        assert!(json.contains("INVALID_INPUT") || json.contains("InvalidInput"));
    }
}
