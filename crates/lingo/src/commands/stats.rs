//! Resource language statistics handlers.

use lingo_api::{ListResourceLanguageStatsParams, ResourceLanguageStats};
use tabled::Tabled;

use crate::cli::{StatsArgs, StatsCommand};
use crate::config::Context;
use crate::error::CliError;

use super::util;

#[derive(Tabled)]
struct StatsRow {
    #[tabled(rename = "Resource")]
    resource: String,
    #[tabled(rename = "Language")]
    language: String,
    #[tabled(rename = "Strings")]
    strings: u64,
    #[tabled(rename = "Translated")]
    translated: String,
    #[tabled(rename = "Reviewed")]
    reviewed: String,
}

impl From<&ResourceLanguageStats> for StatsRow {
    fn from(s: &ResourceLanguageStats) -> Self {
        let a = &s.attributes;
        Self {
            resource: s.relationships.resource.id().unwrap_or_default().to_owned(),
            language: s.relationships.language.id().unwrap_or_default().to_owned(),
            strings: a.total_strings,
            translated: format!("{:.1}%", a.translated_percent()),
            reviewed: format!("{:.1}%", a.reviewed_percent()),
        }
    }
}

pub async fn handle(ctx: &Context, args: StatsArgs) -> Result<(), CliError> {
    match args.command {
        StatsCommand::List {
            project,
            resource,
            language,
            page,
        } => {
            let params = ListResourceLanguageStatsParams {
                resource: resource.unwrap_or_default(),
                language: language.unwrap_or_default(),
                ..ListResourceLanguageStatsParams::new(project)
            };
            let client = &ctx.client;
            let stats = util::fetch_pages(&page, |cursor| {
                let params = ListResourceLanguageStatsParams {
                    cursor,
                    ..params.clone()
                };
                async move { client.list_resource_language_stats(&params).await }
            })
            .await?;
            util::print_page(ctx, &stats, |item| StatsRow::from(item))
        }
        StatsCommand::Get(id) => {
            let stats = ctx.client.get_resource_language_stats(&id.id).await?;
            util::print_single(ctx, &stats)
        }
    }
}
