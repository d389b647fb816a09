//! Query-string assembly for list and detail operations.
//!
//! Every operation describes its filters as an ordered table of [`Field`]
//! descriptors. [`build`] walks the table once, validating and rendering
//! each entry in table order, so resource modules never concatenate query
//! strings themselves.
//!
//! Values are interpolated raw. `reqwest`/`url` percent-encode whatever is
//! not legal in a query when the request is constructed; callers are
//! expected to pass URL-safe identifiers.

use std::borrow::Cow;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use strum::{Display, EnumString, IntoStaticStr, VariantNames};

use crate::error::Error;

/// Page size the service uses when `limit` is omitted.
pub const DEFAULT_LIMIT: u32 = 150;
pub const MIN_LIMIT: u32 = 150;
pub const MAX_LIMIT: u32 = 1000;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// `true`/`false` state filters on resource translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr, VariantNames)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BoolFilter {
    True,
    False,
}

/// How a field's raw value is validated and rendered.
#[derive(Debug, Clone, Copy)]
enum Rule {
    /// Must be non-empty.
    Required,
    /// Emitted only when non-empty.
    Optional,
    /// Empty means absent; otherwise mapped to its canonical spelling.
    OneOf(fn(&str) -> Option<&'static str>),
    /// Empty means absent; otherwise must equal the single allowed value.
    Include(&'static str),
    /// Empty means the default page size; otherwise an integer in range.
    Limit,
}

#[derive(Debug, Clone, Copy)]
enum Value<'a> {
    Text(&'a str),
    Time(Option<DateTime<Utc>>),
    Tags(&'a [String]),
}

impl Value<'_> {
    /// The wire value, or `None` when the field is at its zero value.
    fn raw(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Text(s) if s.is_empty() => None,
            Value::Text(s) => Some(Cow::Borrowed(s)),
            Value::Time(t) => t.map(|t| Cow::Owned(t.format(TIMESTAMP_FORMAT).to_string())),
            Value::Tags(tags) if tags.is_empty() => None,
            Value::Tags(tags) => Some(Cow::Owned(tags.join(","))),
        }
    }
}

/// One entry of an operation's filter table.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    name: &'static str,
    key: &'static str,
    value: Value<'a>,
    rule: Rule,
}

impl<'a> Field<'a> {
    /// The operation's identifying filter; empty fails with `MissingParameter`.
    pub fn required(name: &'static str, key: &'static str, value: &'a str) -> Self {
        Self {
            name,
            key,
            value: Value::Text(value),
            rule: Rule::Required,
        }
    }

    /// A free-form string filter, omitted when empty.
    pub fn text(key: &'static str, value: &'a str) -> Self {
        Self {
            name: key,
            key,
            value: Value::Text(value),
            rule: Rule::Optional,
        }
    }

    /// An enumerated filter validated against `E`'s variants.
    ///
    /// Matching is case-insensitive; the emitted value is `E`'s canonical
    /// spelling.
    pub fn one_of<E>(name: &'static str, key: &'static str, value: &'a str) -> Self
    where
        E: FromStr + Into<&'static str>,
    {
        Self {
            name,
            key,
            value: Value::Text(value),
            rule: Rule::OneOf(canonical::<E>),
        }
    }

    /// A timestamp bound, omitted when `None`.
    pub fn time(key: &'static str, value: Option<DateTime<Utc>>) -> Self {
        Self {
            name: key,
            key,
            value: Value::Time(value),
            rule: Rule::Optional,
        }
    }

    /// A tag set joined with commas, omitted when empty.
    pub fn tags(key: &'static str, value: &'a [String]) -> Self {
        Self {
            name: key,
            key,
            value: Value::Tags(value),
            rule: Rule::Optional,
        }
    }

    /// The opaque pagination cursor, passed through verbatim.
    pub fn cursor(value: &'a str) -> Self {
        Self {
            name: "cursor",
            key: "page[cursor]",
            value: Value::Text(value),
            rule: Rule::Optional,
        }
    }

    /// The page size, defaulting to [`DEFAULT_LIMIT`].
    pub fn limit(value: &'a str) -> Self {
        Self {
            name: "limit",
            key: "limit",
            value: Value::Text(value),
            rule: Rule::Limit,
        }
    }

    /// Side-loading of related entities; only `allowed` is accepted.
    pub fn include(allowed: &'static str, value: &'a str) -> Self {
        Self {
            name: "include",
            key: "include",
            value: Value::Text(value),
            rule: Rule::Include(allowed),
        }
    }

    fn render(&self) -> Result<Option<String>, Error> {
        let raw = self.value.raw();
        let value = match (self.rule, raw) {
            (Rule::Required, None) => return Err(Error::MissingParameter { field: self.name }),
            (Rule::Limit, None) => Cow::Owned(DEFAULT_LIMIT.to_string()),
            (_, None) => return Ok(None),
            (Rule::Required | Rule::Optional, Some(v)) => v,
            (Rule::OneOf(canonicalize), Some(v)) => match canonicalize(&v) {
                Some(canonical) => Cow::Borrowed(canonical),
                None => return Err(self.invalid_value(&v)),
            },
            (Rule::Include(allowed), Some(v)) => {
                if v != allowed {
                    return Err(self.invalid_value(&v));
                }
                v
            }
            (Rule::Limit, Some(v)) => {
                check_limit(&v)?;
                v
            }
        };
        Ok(Some(format!("{}={value}", self.key)))
    }

    fn invalid_value(&self, value: &str) -> Error {
        Error::InvalidEnumValue {
            field: self.name,
            value: value.to_owned(),
        }
    }
}

fn canonical<E>(raw: &str) -> Option<&'static str>
where
    E: FromStr + Into<&'static str>,
{
    raw.parse::<E>().ok().map(Into::into)
}

fn check_limit(raw: &str) -> Result<(), Error> {
    let out_of_range = || Error::InvalidRange {
        field: "limit",
        value: raw.to_owned(),
        min: MIN_LIMIT,
        max: MAX_LIMIT,
    };
    let n: i64 = raw.parse().map_err(|_| out_of_range())?;
    if n < i64::from(MIN_LIMIT) || n > i64::from(MAX_LIMIT) {
        return Err(out_of_range());
    }
    Ok(())
}

/// Render a filter table into a query string.
///
/// Returns `?k=v&k=v` in table order, or an empty string when every field
/// was absent. The first failing field aborts the build.
pub fn build(fields: &[Field<'_>]) -> Result<String, Error> {
    let mut fragments = Vec::with_capacity(fields.len());
    for field in fields {
        if let Some(fragment) = field.render()? {
            fragments.push(fragment);
        }
    }
    if fragments.is_empty() {
        return Ok(String::new());
    }
    Ok(format!("?{}", fragments.join("&")))
}

/// A parameter object that knows its own filter table.
pub trait QueryParams {
    fn fields(&self) -> Vec<Field<'_>>;

    fn to_query(&self) -> Result<String, Error> {
        build(&self.fields())
    }
}
