use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::jsonapi::{Entity, Page};
use crate::query::{Field, QueryParams};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageAttributes {
    pub code: String,
    pub name: String,
    pub rtl: bool,
    pub plural_equation: Option<String>,
    pub plural_rules: PluralRules,
}

/// CLDR plural categories; only those the language uses are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluralRules {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub few: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub many: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
}

pub type Language = Entity<LanguageAttributes>;

/// Filters for `GET /languages`. Nothing is mandatory.
#[derive(Debug, Clone, Default)]
pub struct ListLanguagesParams {
    /// Comma-separated language codes, e.g. `en,fr`.
    pub code: String,
    pub cursor: String,
}

impl QueryParams for ListLanguagesParams {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::text("filter[code][any]", &self.code),
            Field::cursor(&self.cursor),
        ]
    }
}

impl Client {
    /// `GET /languages`
    pub async fn list_languages(
        &self,
        params: &ListLanguagesParams,
    ) -> Result<Page<Language>, Error> {
        self.list("/languages", params).await
    }

    /// `GET /languages/{language_id}`
    pub async fn get_language(&self, language_id: &str) -> Result<Language, Error> {
        self.get_by_id("/languages", "language", language_id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn code_filter() {
        let params = ListLanguagesParams {
            code: "en,fr".into(),
            ..ListLanguagesParams::default()
        };
        assert_eq!(params.to_query().unwrap(), "?filter[code][any]=en,fr");
    }

    #[test]
    fn language_decodes_plural_rules() {
        let l: Language = serde_json::from_value(json!({
            "id": "l:fr",
            "type": "languages",
            "attributes": {
                "code": "fr",
                "name": "French",
                "rtl": false,
                "plural_equation": "(n > 1)",
                "plural_rules": {"one": "n in 0..1", "many": "e = 0", "other": "everything else"}
            }
        }))
        .unwrap();
        assert_eq!(l.attributes.code, "fr");
        assert_eq!(l.attributes.plural_rules.one.as_deref(), Some("n in 0..1"));
        assert_eq!(l.attributes.plural_rules.two, None);
    }
}
