//! JSON:API envelope types shared by every resource collection.
//!
//! Single-entity lookups decode into `Document<T>`, collections into
//! `Page<T>`. Entity attribute and relationship structs live with their
//! resource module; this file only knows the generic shape.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use url::{Url, form_urlencoded};

/// Base used to resolve relative pagination links before reading their query.
const LINK_BASE: &str = "http://localhost/";

/// Single-entity response: `{ "data": {...}, "included": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document<T> {
    pub data: T,
    #[serde(default, deserialize_with = "null_default", skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<Value>,
}

/// Collection response: `{ "data": [...], "links": {...}, "included": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub links: PageLinks,
    #[serde(default, deserialize_with = "null_default", skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<Value>,
}

impl<T> Page<T> {
    /// Cursor to pass back for the following page, if there is one.
    pub fn next_cursor(&self) -> Option<String> {
        self.links.next_cursor()
    }

    pub fn previous_cursor(&self) -> Option<String> {
        self.links.previous_cursor()
    }

    pub fn has_next(&self) -> bool {
        self.links.next.is_some()
    }
}

/// Collection navigation links.
///
/// The service sends either `""` or `null` for a missing link; both
/// decode to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(rename = "self", default, deserialize_with = "non_empty")]
    pub self_link: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub next: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub previous: Option<String>,
}

impl PageLinks {
    pub fn next_cursor(&self) -> Option<String> {
        self.next.as_deref().and_then(cursor_of)
    }

    pub fn previous_cursor(&self) -> Option<String> {
        self.previous.as_deref().and_then(cursor_of)
    }
}

/// Pull the opaque cursor out of a pagination link.
///
/// Accepts absolute or relative links and both the `page[cursor]` and bare
/// `cursor` spellings of the parameter.
pub fn cursor_of(link: &str) -> Option<String> {
    let base = Url::parse(LINK_BASE).ok()?;
    let url = base.join(link).ok()?;
    // The value stays percent-encoded; it is sent back verbatim.
    url.query()?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| is_cursor_key(key))
        .map(|(_, value)| value.to_owned())
        .filter(|v| !v.is_empty())
}

fn is_cursor_key(raw: &str) -> bool {
    form_urlencoded::parse(raw.as_bytes())
        .next()
        .is_some_and(|(key, _)| key == "page[cursor]" || key == "cursor")
}

/// A typed JSON:API resource object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity<A, R = NoRelationships> {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub attributes: A,
    #[serde(default)]
    pub relationships: R,
    #[serde(default)]
    pub links: ResourceLinks,
}

/// Relationship block for entities that declare none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoRelationships {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLinks {
    #[serde(rename = "self", default, deserialize_with = "non_empty")]
    pub self_link: Option<String>,
}

/// `{ "type": "...", "id": "..." }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// A to-one reference plus its navigation links.
///
/// To-many relationships only carry `links`; `data` stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: Option<Identifier>,
    #[serde(default)]
    pub links: RelationshipLinks,
}

impl Relationship {
    pub fn id(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.id.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipLinks {
    #[serde(default, deserialize_with = "non_empty")]
    pub related: Option<String>,
    #[serde(rename = "self", default, deserialize_with = "non_empty")]
    pub self_link: Option<String>,
}

/// One entry of a JSON:API `errors` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorObject {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ApiErrorObject {
    /// Best human-readable text: detail, then title, then code.
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_deref()
            .or(self.title.as_deref())
            .or(self.code.as_deref())
    }
}

/// `{ "errors": [...] }`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorDocument {
    pub errors: Vec<ApiErrorObject>,
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()))
}

/// Treat an explicit `null` like a missing field.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Default, Deserialize)]
    struct Named {
        #[serde(default)]
        name: String,
    }

    #[test]
    fn empty_and_null_links_are_absent() {
        let links: PageLinks =
            serde_json::from_value(json!({"self": "https://x/a", "next": "", "previous": null}))
                .unwrap();
        assert_eq!(links.self_link.as_deref(), Some("https://x/a"));
        assert_eq!(links.next, None);
        assert_eq!(links.previous, None);
    }

    #[test]
    fn missing_links_object_decodes_to_default() {
        let page: Page<Named> = serde_json::from_value(json!({"data": []})).unwrap();
        assert_eq!(page.links, PageLinks::default());
        assert!(!page.has_next());
        assert!(page.included.is_empty());
    }

    #[test]
    fn cursor_from_absolute_link() {
        let link = "https://rest.api.transifex.com/projects?filter[organization]=o:acme&page[cursor]=abc";
        assert_eq!(cursor_of(link).as_deref(), Some("abc"));
    }

    #[test]
    fn cursor_from_relative_link_with_bare_key() {
        assert_eq!(cursor_of("/projects?cursor=abc&x=1").as_deref(), Some("abc"));
    }

    #[test]
    fn cursor_keeps_its_percent_encoding() {
        let link = "https://x/projects?filter[organization]=o:acme&page[cursor]=ab%2Bcd%2Fe%3D";
        let cursor = cursor_of(link).unwrap();
        assert_eq!(cursor, "ab%2Bcd%2Fe%3D");

        let decoded: Vec<_> = form_urlencoded::parse(format!("c={cursor}").as_bytes())
            .map(|(_, v)| v.into_owned())
            .collect();
        assert_eq!(decoded, ["ab+cd/e="]);
    }

    #[test]
    fn encoded_cursor_key_is_recognised() {
        let link = "https://x/y?page%5Bcursor%5D=a%3D%3D";
        assert_eq!(cursor_of(link).as_deref(), Some("a%3D%3D"));
    }

    #[test]
    fn link_without_cursor_yields_none() {
        assert_eq!(cursor_of("https://x/y?limit=150"), None);
        assert_eq!(cursor_of("https://x/y?page[cursor]="), None);
    }

    #[test]
    fn page_exposes_next_cursor() {
        let page: Page<Named> = serde_json::from_value(json!({
            "data": [{"name": "a"}],
            "links": {"next": "https://x/projects?page[cursor]=n1", "previous": "https://x/projects?page[cursor]=p0"}
        }))
        .unwrap();
        assert_eq!(page.data[0].name, "a");
        assert_eq!(page.next_cursor().as_deref(), Some("n1"));
        assert_eq!(page.previous_cursor().as_deref(), Some("p0"));
    }

    #[test]
    fn entity_tolerates_missing_blocks() {
        let e: Entity<Named> = serde_json::from_value(json!({"id": "x", "type": "things"})).unwrap();
        assert_eq!(e.id, "x");
        assert_eq!(e.kind, "things");
        assert_eq!(e.attributes.name, "");
        assert_eq!(e.links.self_link, None);
    }

    #[test]
    fn relationship_with_null_data() {
        let r: Relationship = serde_json::from_value(json!({
            "data": null,
            "links": {"related": "https://x/users/u:1"}
        }))
        .unwrap();
        assert_eq!(r.id(), None);
        assert_eq!(r.links.related.as_deref(), Some("https://x/users/u:1"));
    }

    #[test]
    fn error_object_message_prefers_detail() {
        let e = ApiErrorObject {
            title: Some("Not found".into()),
            detail: Some("Project p:x does not exist".into()),
            ..ApiErrorObject::default()
        };
        assert_eq!(e.message(), Some("Project p:x does not exist"));
    }
}
