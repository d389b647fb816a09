use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::jsonapi::{Entity, Page, Relationship};
use crate::query::{Field, QueryParams};

/// Progress counters for one resource in one language.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceLanguageStatsAttributes {
    pub total_strings: u64,
    pub total_words: u64,
    pub translated_strings: u64,
    pub translated_words: u64,
    pub untranslated_strings: u64,
    pub untranslated_words: u64,
    pub reviewed_strings: u64,
    pub reviewed_words: u64,
    pub proofread_strings: u64,
    pub proofread_words: u64,
    pub last_update: Option<DateTime<Utc>>,
    pub last_translation_update: Option<DateTime<Utc>>,
    pub last_review_update: Option<DateTime<Utc>>,
    pub last_proofread_update: Option<DateTime<Utc>>,
}

impl ResourceLanguageStatsAttributes {
    /// Translated share of strings, `0.0..=100.0`.
    pub fn translated_percent(&self) -> f64 {
        percent(self.translated_strings, self.total_strings)
    }

    pub fn reviewed_percent(&self) -> f64 {
        percent(self.reviewed_strings, self.total_strings)
    }
}

#[allow(clippy::cast_precision_loss, clippy::as_conversions)]
fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / total as f64
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceLanguageStatsRelationships {
    pub resource: Relationship,
    pub language: Relationship,
}

pub type ResourceLanguageStats =
    Entity<ResourceLanguageStatsAttributes, ResourceLanguageStatsRelationships>;

/// Filters for `GET /resource_language_stats`.
#[derive(Debug, Clone, Default)]
pub struct ListResourceLanguageStatsParams {
    pub project: String,
    pub resource: String,
    pub language: String,
    pub cursor: String,
}

impl ListResourceLanguageStatsParams {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            ..Self::default()
        }
    }
}

impl QueryParams for ListResourceLanguageStatsParams {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("project", "filter[project]", &self.project),
            Field::text("filter[resource]", &self.resource),
            Field::text("filter[language]", &self.language),
            Field::cursor(&self.cursor),
        ]
    }
}

impl Client {
    /// `GET /resource_language_stats`
    pub async fn list_resource_language_stats(
        &self,
        params: &ListResourceLanguageStatsParams,
    ) -> Result<Page<ResourceLanguageStats>, Error> {
        self.list("/resource_language_stats", params).await
    }

    /// `GET /resource_language_stats/{id}`
    ///
    /// Ids look like `o:acme:p:demo:r:ui:l:fr`.
    pub async fn get_resource_language_stats(
        &self,
        stats_id: &str,
    ) -> Result<ResourceLanguageStats, Error> {
        self.get_by_id("/resource_language_stats", "resource_language_stats", stats_id)
            .await
    }
}
