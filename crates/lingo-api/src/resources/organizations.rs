use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::jsonapi::{Entity, Page, Relationship};
use crate::query::{Field, QueryParams};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationAttributes {
    pub name: String,
    pub slug: String,
    pub logo_url: Option<String>,
    pub private: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationRelationships {
    pub projects: Relationship,
    pub teams: Relationship,
}

pub type Organization = Entity<OrganizationAttributes, OrganizationRelationships>;

/// Filters for `GET /organizations`. Nothing is mandatory.
#[derive(Debug, Clone, Default)]
pub struct ListOrganizationsParams {
    pub cursor: String,
    pub slug: String,
}

impl QueryParams for ListOrganizationsParams {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::cursor(&self.cursor),
            Field::text("filter[slug]", &self.slug),
        ]
    }
}

impl Client {
    /// `GET /organizations`
    pub async fn list_organizations(
        &self,
        params: &ListOrganizationsParams,
    ) -> Result<Page<Organization>, Error> {
        self.list("/organizations", params).await
    }

    /// `GET /organizations/{organization_id}`
    pub async fn get_organization(&self, organization_id: &str) -> Result<Organization, Error> {
        self.get_by_id("/organizations", "organization", organization_id)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn no_filters_renders_empty_query() {
        assert_eq!(ListOrganizationsParams::default().to_query().unwrap(), "");
    }

    #[test]
    fn slug_after_cursor() {
        let params = ListOrganizationsParams {
            cursor: "c1".into(),
            slug: "acme".into(),
        };
        assert_eq!(params.to_query().unwrap(), "?page[cursor]=c1&filter[slug]=acme");
    }
}
