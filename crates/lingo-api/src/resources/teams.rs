use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::jsonapi::{Entity, Identifier, Page, Relationship};
use crate::query::{Field, QueryParams};
use crate::resources::users::User;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamAttributes {
    pub name: String,
    pub slug: String,
    pub auto_join: bool,
    pub cla_required: bool,
    pub cla: Option<String>,
    pub datetime_created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamRelationships {
    pub organization: Relationship,
    pub managers: Relationship,
}

pub type Team = Entity<TeamAttributes, TeamRelationships>;

/// Filters for `GET /teams`.
#[derive(Debug, Clone, Default)]
pub struct ListTeamsParams {
    pub organization: String,
    pub cursor: String,
    pub name: String,
    pub slug: String,
}

impl ListTeamsParams {
    pub fn new(organization: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            ..Self::default()
        }
    }
}

impl QueryParams for ListTeamsParams {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("organization", "filter[organization]", &self.organization),
            Field::cursor(&self.cursor),
            Field::text("filter[name]", &self.name),
            Field::text("filter[slug]", &self.slug),
        ]
    }
}

const TEAMS: &str = "/teams";

impl Client {
    /// `GET /teams`
    pub async fn list_teams(&self, params: &ListTeamsParams) -> Result<Page<Team>, Error> {
        self.list(TEAMS, params).await
    }

    /// `GET /teams/{team_id}`
    pub async fn get_team(&self, team_id: &str) -> Result<Team, Error> {
        self.get_by_id(TEAMS, "team", team_id).await
    }

    /// `GET /teams/{team_id}/managers`
    pub async fn list_team_managers(&self, team_id: &str) -> Result<Page<User>, Error> {
        self.list_related(TEAMS, "team", team_id, "/managers").await
    }

    /// `GET /teams/{team_id}/relationships/managers`
    pub async fn list_team_manager_relationships(
        &self,
        team_id: &str,
    ) -> Result<Page<Identifier>, Error> {
        self.list_related(TEAMS, "team", team_id, "/relationships/managers")
            .await
    }
}
