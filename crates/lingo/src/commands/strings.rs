//! Resource string and revision command handlers.

use lingo_api::{
    ListResourceStringRevisionsParams, ListResourceStringsParams, PluralStrings, ResourceString,
    ResourceStringRevision,
};
use tabled::Tabled;

use crate::cli::{StringsArgs, StringsCommand};
use crate::config::Context;
use crate::error::CliError;

use super::util;

const PREVIEW_CHARS: usize = 60;

#[derive(Tabled)]
struct StringRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

impl From<&ResourceString> for StringRow {
    fn from(s: &ResourceString) -> Self {
        Self {
            id: s.id.clone(),
            key: s.attributes.key.clone(),
            source: preview(&s.attributes.strings),
            tags: s.attributes.tags.join(", "),
        }
    }
}

#[derive(Tabled)]
struct RevisionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Strings")]
    strings: String,
}

impl From<&ResourceStringRevision> for RevisionRow {
    fn from(r: &ResourceStringRevision) -> Self {
        Self {
            id: r.id.clone(),
            created: r
                .attributes
                .datetime_created
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
            strings: preview(&r.attributes.strings),
        }
    }
}

/// The `other` plural form (or the first one), cut to fit a table cell.
fn preview(strings: &PluralStrings) -> String {
    let text = strings
        .get("other")
        .or_else(|| strings.values().next())
        .map_or("", String::as_str);
    let mut cut: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().count() > PREVIEW_CHARS {
        cut.push('…');
    }
    cut
}

pub async fn handle(ctx: &Context, args: StringsArgs) -> Result<(), CliError> {
    let client = &ctx.client;
    match args.command {
        StringsCommand::List {
            resource,
            created_after,
            created_before,
            key,
            tags,
            limit,
            page,
        } => {
            let params = ListResourceStringsParams {
                created_after,
                created_before,
                key: key.unwrap_or_default(),
                tags,
                limit: limit.unwrap_or_default(),
                ..ListResourceStringsParams::new(resource)
            };
            let strings = util::fetch_pages(&page, |cursor| {
                let params = ListResourceStringsParams {
                    cursor,
                    ..params.clone()
                };
                async move { client.list_resource_strings(&params).await }
            })
            .await?;
            util::print_page(ctx, &strings, |item| StringRow::from(item))
        }
        StringsCommand::Get(id) => {
            let string = client.get_resource_string(&id.id).await?;
            util::print_single(ctx, &string)
        }
        StringsCommand::Revisions {
            resource,
            key,
            tags,
            limit,
            page,
        } => {
            let params = ListResourceStringRevisionsParams {
                key: key.unwrap_or_default(),
                tags,
                limit: limit.unwrap_or_default(),
                ..ListResourceStringRevisionsParams::new(resource)
            };
            let revisions = util::fetch_pages(&page, |cursor| {
                let params = ListResourceStringRevisionsParams {
                    cursor,
                    ..params.clone()
                };
                async move { client.list_resource_string_revisions(&params).await }
            })
            .await?;
            util::print_page(ctx, &revisions, |item| RevisionRow::from(item))
        }
    }
}
