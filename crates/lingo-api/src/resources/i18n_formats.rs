use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::jsonapi::{Entity, Page, null_default};
use crate::query::{Field, QueryParams};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nFormatAttributes {
    pub name: String,
    pub media_type: String,
    #[serde(deserialize_with = "null_default")]
    pub file_extensions: Vec<String>,
    pub description: Option<String>,
}

pub type I18nFormat = Entity<I18nFormatAttributes>;

/// Filters for `GET /i18n_formats`.
#[derive(Debug, Clone, Default)]
pub struct ListI18nFormatsParams {
    pub organization: String,
    pub name: String,
}

impl ListI18nFormatsParams {
    pub fn new(organization: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            ..Self::default()
        }
    }
}

impl QueryParams for ListI18nFormatsParams {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("organization", "filter[organization]", &self.organization),
            Field::text("filter[name]", &self.name),
        ]
    }
}

impl Client {
    /// `GET /i18n_formats`
    ///
    /// The collection is not paginated; `links` is usually empty.
    pub async fn list_i18n_formats(
        &self,
        params: &ListI18nFormatsParams,
    ) -> Result<Page<I18nFormat>, Error> {
        self.list("/i18n_formats", params).await
    }
}
