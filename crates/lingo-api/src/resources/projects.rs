use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{Client, item_path};
use crate::error::Error;
use crate::jsonapi::{Document, Entity, Identifier, Page, Relationship, null_default};
use crate::query::{Field, QueryParams};
use crate::resources::languages::Language;
use crate::resources::users::Maintainer;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectAttributes {
    pub name: String,
    pub slug: String,
    /// `file` or `live`.
    #[serde(rename = "type")]
    pub project_type: String,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub homepage_url: Option<String>,
    pub instructions_url: Option<String>,
    pub repository_url: Option<String>,
    pub logo_url: Option<String>,
    pub license: Option<String>,
    pub private: bool,
    pub archived: bool,
    pub machine_translation_fillup: bool,
    pub translation_memory_fillup: bool,
    #[serde(deserialize_with = "null_default")]
    pub tags: Vec<String>,
    pub datetime_created: Option<DateTime<Utc>>,
    pub datetime_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRelationships {
    pub organization: Relationship,
    pub source_language: Relationship,
    pub team: Relationship,
    pub languages: Relationship,
    pub maintainers: Relationship,
    pub resources: Relationship,
}

pub type Project = Entity<ProjectAttributes, ProjectRelationships>;

/// Filters for `GET /projects`.
#[derive(Debug, Clone, Default)]
pub struct ListProjectsParams {
    /// Mandatory, e.g. `o:acme`.
    pub organization: String,
    pub cursor: String,
    pub slug: String,
    pub name: String,
}

impl ListProjectsParams {
    pub fn new(organization: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            ..Self::default()
        }
    }
}

impl QueryParams for ListProjectsParams {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("organization", "filter[organization]", &self.organization),
            Field::cursor(&self.cursor),
            Field::text("filter[slug]", &self.slug),
            Field::text("filter[name]", &self.name),
        ]
    }
}

const PROJECTS: &str = "/projects";

impl Client {
    /// `GET /projects`
    pub async fn list_projects(&self, params: &ListProjectsParams) -> Result<Page<Project>, Error> {
        self.list(PROJECTS, params).await
    }

    /// `GET /projects/{project_id}`
    pub async fn get_project(&self, project_id: &str) -> Result<Project, Error> {
        self.get_by_id(PROJECTS, "project", project_id).await
    }

    /// `GET /projects/{project_id}/languages`
    pub async fn list_project_languages(&self, project_id: &str) -> Result<Page<Language>, Error> {
        self.list_related(PROJECTS, "project", project_id, "/languages")
            .await
    }

    /// `GET /projects/{project_id}/relationships/languages`
    pub async fn list_project_language_relationships(
        &self,
        project_id: &str,
    ) -> Result<Page<Identifier>, Error> {
        self.list_related(PROJECTS, "project", project_id, "/relationships/languages")
            .await
    }

    /// `GET /projects/{project_id}/maintainers`
    pub async fn list_project_maintainers(
        &self,
        project_id: &str,
    ) -> Result<Page<Maintainer>, Error> {
        self.list_related(PROJECTS, "project", project_id, "/maintainers")
            .await
    }

    /// `GET /projects/{project_id}/relationships/maintainers`
    pub async fn list_project_maintainer_relationships(
        &self,
        project_id: &str,
    ) -> Result<Page<Identifier>, Error> {
        self.list_related(PROJECTS, "project", project_id, "/relationships/maintainers")
            .await
    }

    /// `GET /projects/{project_id}/relationships/team`
    ///
    /// `data` is `None` when the project has no team.
    pub async fn get_project_team_relationship(
        &self,
        project_id: &str,
    ) -> Result<Document<Option<Identifier>>, Error> {
        let path = item_path(PROJECTS, "project", project_id)?;
        self.get_document(&format!("{path}/relationships/team"), "")
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn organization_only_query() {
        let q = ListProjectsParams::new("o:acme").to_query().unwrap();
        assert_eq!(q, "?filter[organization]=o:acme");
    }

    #[test]
    fn missing_organization_is_rejected() {
        let err = ListProjectsParams::default().to_query().unwrap_err();
        assert!(matches!(err, Error::MissingParameter { field: "organization" }));
    }

    #[test]
    fn all_filters_in_order() {
        let params = ListProjectsParams {
            organization: "o:acme".into(),
            cursor: "c".into(),
            slug: "demo".into(),
            name: "Demo".into(),
        };
        assert_eq!(
            params.to_query().unwrap(),
            "?filter[organization]=o:acme&page[cursor]=c&filter[slug]=demo&filter[name]=Demo"
        );
    }

    #[test]
    fn project_decodes_with_nulls() {
        let p: Project = serde_json::from_value(json!({
            "id": "o:acme:p:demo",
            "type": "projects",
            "attributes": {
                "slug": "demo",
                "type": "file",
                "description": null,
                "tags": null,
                "datetime_created": "2023-01-02T03:04:05Z"
            },
            "relationships": {
                "organization": {
                    "data": {"type": "organizations", "id": "o:acme"},
                    "links": {"related": "https://rest.api.transifex.com/organizations/o:acme"}
                },
                "team": {"data": null}
            },
            "links": {"self": "https://rest.api.transifex.com/projects/o:acme:p:demo"}
        }))
        .unwrap();
        assert_eq!(p.attributes.slug, "demo");
        assert_eq!(p.attributes.project_type, "file");
        assert!(p.attributes.tags.is_empty());
        assert!(p.attributes.datetime_created.is_some());
        assert_eq!(p.relationships.organization.id(), Some("o:acme"));
        assert_eq!(p.relationships.team.id(), None);
    }
}
