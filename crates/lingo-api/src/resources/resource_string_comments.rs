use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr, VariantNames};

use crate::client::Client;
use crate::error::Error;
use crate::jsonapi::{Entity, Page, Relationship, null_default};
use crate::query::{Field, QueryParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr, VariantNames)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CommentPriority {
    Low,
    Normal,
    High,
    Critical,
    Blocker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr, VariantNames)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CommentStatus {
    Open,
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr, VariantNames)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CommentType {
    Issue,
    Comment,
}

// Priority/status/type stay strings here so unknown server values still decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceStringCommentAttributes {
    pub message: String,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub comment_type: Option<String>,
    pub datetime_created: Option<DateTime<Utc>>,
    pub datetime_modified: Option<DateTime<Utc>>,
    pub datetime_resolved: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceStringCommentRelationships {
    #[serde(deserialize_with = "null_default")]
    pub author: Relationship,
    #[serde(deserialize_with = "null_default")]
    pub resolver: Relationship,
    pub language: Relationship,
    pub resource: Relationship,
    pub resource_string: Relationship,
}

pub type ResourceStringComment =
    Entity<ResourceStringCommentAttributes, ResourceStringCommentRelationships>;

/// Filters for `GET /resource_string_comments`.
///
/// `priority`, `status` and `comment_type` accept any casing of the
/// [`CommentPriority`], [`CommentStatus`] and [`CommentType`] variants.
#[derive(Debug, Clone, Default)]
pub struct ListResourceStringCommentsParams {
    pub organization: String,
    pub cursor: String,
    pub project: String,
    pub category: String,
    pub author: String,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub priority: String,
    pub resource: String,
    pub resource_string: String,
    pub status: String,
    pub comment_type: String,
}

impl ListResourceStringCommentsParams {
    pub fn new(organization: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            ..Self::default()
        }
    }
}

impl QueryParams for ListResourceStringCommentsParams {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("organization", "filter[organization]", &self.organization),
            Field::cursor(&self.cursor),
            Field::text("filter[project]", &self.project),
            Field::text("filter[category]", &self.category),
            Field::text("filter[author]", &self.author),
            Field::time("filter[datetime_created][gte]", self.created_after),
            Field::time("filter[datetime_created][lt]", self.created_before),
            Field::one_of::<CommentPriority>("priority", "filter[priority]", &self.priority),
            Field::text("filter[resource]", &self.resource),
            Field::text("filter[resource_string]", &self.resource_string),
            Field::one_of::<CommentStatus>("status", "filter[status]", &self.status),
            Field::one_of::<CommentType>("type", "filter[type]", &self.comment_type),
        ]
    }
}

impl Client {
    /// `GET /resource_string_comments`
    pub async fn list_resource_string_comments(
        &self,
        params: &ListResourceStringCommentsParams,
    ) -> Result<Page<ResourceStringComment>, Error> {
        self.list("/resource_string_comments", params).await
    }

    /// `GET /resource_string_comments/{comment_id}`
    pub async fn get_resource_string_comment(
        &self,
        comment_id: &str,
    ) -> Result<ResourceStringComment, Error> {
        self.get_by_id(
            "/resource_string_comments",
            "resource_string_comment",
            comment_id,
        )
        .await
    }
}
