use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr, VariantNames};

use crate::client::Client;
use crate::error::Error;
use crate::jsonapi::{Document, Entity, Page, Relationship};
use crate::query::{Field, QueryParams};

/// Only side-loadable relationship on memberships.
pub const INCLUDE_USER: &str = "user";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr, VariantNames)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MembershipRole {
    Coordinator,
    Translator,
    Reviewer,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMembershipAttributes {
    pub role: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMembershipRelationships {
    pub team: Relationship,
    pub language: Relationship,
    pub user: Relationship,
}

pub type TeamMembership = Entity<TeamMembershipAttributes, TeamMembershipRelationships>;

/// Filters for `GET /team_memberships`.
#[derive(Debug, Clone, Default)]
pub struct ListTeamMembershipsParams {
    pub organization: String,
    pub team: String,
    pub language: String,
    pub user: String,
    /// Any casing of a [`MembershipRole`].
    pub role: String,
    pub cursor: String,
    /// Empty or `user`.
    pub include: String,
}

impl ListTeamMembershipsParams {
    pub fn new(organization: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            ..Self::default()
        }
    }
}

impl QueryParams for ListTeamMembershipsParams {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("organization", "filter[organization]", &self.organization),
            Field::text("filter[team]", &self.team),
            Field::text("filter[language]", &self.language),
            Field::text("filter[user]", &self.user),
            Field::one_of::<MembershipRole>("role", "filter[role]", &self.role),
            Field::cursor(&self.cursor),
            Field::include(INCLUDE_USER, &self.include),
        ]
    }
}

/// Parameters for `GET /team_memberships/{id}`.
#[derive(Debug, Clone, Default)]
pub struct GetTeamMembershipParams {
    pub team_membership: String,
    pub include: String,
}

impl QueryParams for GetTeamMembershipParams {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::include(INCLUDE_USER, &self.include)]
    }
}

const TEAM_MEMBERSHIPS: &str = "/team_memberships";

impl Client {
    /// `GET /team_memberships`
    pub async fn list_team_memberships(
        &self,
        params: &ListTeamMembershipsParams,
    ) -> Result<Page<TeamMembership>, Error> {
        self.list(TEAM_MEMBERSHIPS, params).await
    }

    /// `GET /team_memberships/{id}`
    pub async fn get_team_membership(
        &self,
        params: &GetTeamMembershipParams,
    ) -> Result<Document<TeamMembership>, Error> {
        self.get_with(
            TEAM_MEMBERSHIPS,
            "team_membership",
            &params.fields(),
            &params.team_membership,
        )
        .await
    }
}
