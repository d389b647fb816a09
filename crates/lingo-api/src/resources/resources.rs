use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::Client;
use crate::error::Error;
use crate::jsonapi::{Entity, Page, Relationship, null_default};
use crate::query::{Field, QueryParams};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceAttributes {
    pub name: String,
    pub slug: String,
    pub priority: Option<String>,
    pub i18n_type: String,
    pub i18n_version: Option<u32>,
    pub accept_translations: bool,
    pub string_count: u64,
    pub word_count: u64,
    #[serde(deserialize_with = "null_default")]
    pub categories: Vec<String>,
    /// Format-specific options; shape varies per `i18n_type`.
    #[serde(deserialize_with = "null_default")]
    pub i18n_options: Value,
    pub mp4_url: Option<String>,
    pub ogg_url: Option<String>,
    pub webm_url: Option<String>,
    pub youtube_url: Option<String>,
    pub datetime_created: Option<DateTime<Utc>>,
    pub datetime_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceRelationships {
    pub project: Relationship,
    pub i18n_format: Relationship,
    #[serde(deserialize_with = "null_default")]
    pub base: Relationship,
}

pub type Resource = Entity<ResourceAttributes, ResourceRelationships>;

/// Filters for `GET /resources`.
#[derive(Debug, Clone, Default)]
pub struct ListResourcesParams {
    /// Mandatory, e.g. `o:acme:p:demo`.
    pub project: String,
    pub cursor: String,
    pub slug: String,
    pub name: String,
}

impl ListResourcesParams {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            ..Self::default()
        }
    }
}

impl QueryParams for ListResourcesParams {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("project", "filter[project]", &self.project),
            Field::cursor(&self.cursor),
            Field::text("filter[slug]", &self.slug),
            Field::text("filter[name]", &self.name),
        ]
    }
}

impl Client {
    /// `GET /resources`
    pub async fn list_resources(
        &self,
        params: &ListResourcesParams,
    ) -> Result<Page<Resource>, Error> {
        self.list("/resources", params).await
    }

    /// `GET /resources/{resource_id}`
    pub async fn get_resource(&self, resource_id: &str) -> Result<Resource, Error> {
        self.get_by_id("/resources", "resource", resource_id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn project_only_query() {
        let q = ListResourcesParams::new("o:acme:p:demo").to_query().unwrap();
        assert_eq!(q, "?filter[project]=o:acme:p:demo");
    }

    #[test]
    fn resource_decodes_null_base() {
        let r: Resource = serde_json::from_value(json!({
            "id": "o:acme:p:demo:r:ui",
            "type": "resources",
            "attributes": {
                "slug": "ui",
                "i18n_type": "PO",
                "string_count": 12,
                "i18n_options": {},
                "mp4_url": null
            },
            "relationships": {
                "project": {"data": {"type": "projects", "id": "o:acme:p:demo"}},
                "base": null
            }
        }))
        .unwrap();
        assert_eq!(r.attributes.string_count, 12);
        assert_eq!(r.relationships.project.id(), Some("o:acme:p:demo"));
        assert_eq!(r.relationships.base.id(), None);
    }
}
