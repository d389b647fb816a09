use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::jsonapi::{Entity, Page, Relationship, null_default};
use crate::query::{Field, QueryParams};

/// Source text keyed by plural category (`one`, `other`, ...).
pub type PluralStrings = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceStringAttributes {
    pub key: String,
    pub context: Option<String>,
    pub pluralized: bool,
    #[serde(deserialize_with = "null_default")]
    pub strings: PluralStrings,
    pub string_hash: String,
    pub appearance_order: Option<u64>,
    pub character_limit: Option<u32>,
    pub developer_comment: Option<String>,
    pub instructions: Option<String>,
    pub occurrences: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub tags: Vec<String>,
    pub datetime_created: Option<DateTime<Utc>>,
    pub metadata_datetime_modified: Option<DateTime<Utc>>,
    pub strings_datetime_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceStringRelationships {
    pub resource: Relationship,
    pub language: Relationship,
    #[serde(deserialize_with = "null_default")]
    pub committer: Relationship,
}

pub type ResourceString = Entity<ResourceStringAttributes, ResourceStringRelationships>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceStringRevisionAttributes {
    #[serde(deserialize_with = "null_default")]
    pub strings: PluralStrings,
    pub datetime_created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceStringRevisionRelationships {
    pub resource_string: Relationship,
}

pub type ResourceStringRevision =
    Entity<ResourceStringRevisionAttributes, ResourceStringRevisionRelationships>;

/// Filters for `GET /resource_strings`.
#[derive(Debug, Clone, Default)]
pub struct ListResourceStringsParams {
    /// Mandatory resource id, e.g. `o:acme:p:demo:r:ui`.
    pub resource: String,
    pub cursor: String,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub key: String,
    pub tags: Vec<String>,
    /// Page size in `[150, 1000]`; empty means 150.
    pub limit: String,
}

impl ListResourceStringsParams {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            ..Self::default()
        }
    }
}

impl QueryParams for ListResourceStringsParams {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("resource", "filter[resource]", &self.resource),
            Field::cursor(&self.cursor),
            Field::time("filter[datetime_created][gte]", self.created_after),
            Field::time("filter[datetime_created][lt]", self.created_before),
            Field::text("filter[key]", &self.key),
            Field::tags("filter[tags][all]", &self.tags),
            Field::limit(&self.limit),
        ]
    }
}

/// Filters for `GET /resource_strings_revisions`.
#[derive(Debug, Clone, Default)]
pub struct ListResourceStringRevisionsParams {
    pub resource: String,
    pub key: String,
    pub tags: Vec<String>,
    pub cursor: String,
    pub limit: String,
}

impl ListResourceStringRevisionsParams {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            ..Self::default()
        }
    }
}

impl QueryParams for ListResourceStringRevisionsParams {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required(
                "resource",
                "filter[resource_string][resource]",
                &self.resource,
            ),
            Field::cursor(&self.cursor),
            Field::text("filter[resource_string][key]", &self.key),
            Field::tags("filter[resource_string][tags][all]", &self.tags),
            Field::limit(&self.limit),
        ]
    }
}

impl Client {
    /// `GET /resource_strings`
    pub async fn list_resource_strings(
        &self,
        params: &ListResourceStringsParams,
    ) -> Result<Page<ResourceString>, Error> {
        self.list("/resource_strings", params).await
    }

    /// `GET /resource_strings/{resource_string_id}`
    pub async fn get_resource_string(
        &self,
        resource_string_id: &str,
    ) -> Result<ResourceString, Error> {
        self.get_by_id("/resource_strings", "resource_string", resource_string_id)
            .await
    }

    /// `GET /resource_strings_revisions`
    pub async fn list_resource_string_revisions(
        &self,
        params: &ListResourceStringRevisionsParams,
    ) -> Result<Page<ResourceStringRevision>, Error> {
        self.list("/resource_strings_revisions", params).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults_add_limit_after_resource() {
        let q = ListResourceStringsParams::new("o:a:p:b:r:c").to_query().unwrap();
        assert_eq!(q, "?filter[resource]=o:a:p:b:r:c&limit=150");
    }

    #[test]
    fn every_filter_in_order() {
        let params = ListResourceStringsParams {
            resource: "r1".into(),
            cursor: "c".into(),
            created_after: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            created_before: Some(Utc.with_ymd_and_hms(2024, 2, 1, 12, 30, 0).unwrap()),
            key: "greeting".into(),
            tags: vec!["a".into(), "b".into()],
            limit: "500".into(),
        };
        assert_eq!(
            params.to_query().unwrap(),
            "?filter[resource]=r1&page[cursor]=c\
             &filter[datetime_created][gte]=2024-01-01T00:00:00Z\
             &filter[datetime_created][lt]=2024-02-01T12:30:00Z\
             &filter[key]=greeting&filter[tags][all]=a,b&limit=500"
        );
    }

    #[test]
    fn bad_limit_is_rejected() {
        let params = ListResourceStringsParams {
            limit: "1001".into(),
            ..ListResourceStringsParams::new("r1")
        };
        assert!(matches!(
            params.to_query().unwrap_err(),
            Error::InvalidRange { field: "limit", .. }
        ));
    }

    #[test]
    fn revisions_use_nested_resource_string_keys() {
        let params = ListResourceStringRevisionsParams {
            key: "k".into(),
            tags: vec!["t".into()],
            ..ListResourceStringRevisionsParams::new("r1")
        };
        assert_eq!(
            params.to_query().unwrap(),
            "?filter[resource_string][resource]=r1&filter[resource_string][key]=k\
             &filter[resource_string][tags][all]=t&limit=150"
        );
    }

    #[test]
    fn revisions_require_resource() {
        let err = ListResourceStringRevisionsParams::default()
            .to_query()
            .unwrap_err();
        assert!(matches!(err, Error::MissingParameter { field: "resource" }));
    }

    #[test]
    fn resource_string_decodes_plural_strings() {
        let s: ResourceString = serde_json::from_value(json!({
            "id": "o:a:p:b:r:c:s:abc",
            "type": "resource_strings",
            "attributes": {
                "key": "items",
                "pluralized": true,
                "strings": {"one": "{n} item", "other": "{n} items"},
                "character_limit": null,
                "tags": ["ui"]
            },
            "relationships": {"committer": null}
        }))
        .unwrap();
        assert!(s.attributes.pluralized);
        assert_eq!(s.attributes.strings["other"], "{n} items");
        assert_eq!(s.attributes.character_limit, None);
        assert_eq!(s.relationships.committer.id(), None);
    }
}
