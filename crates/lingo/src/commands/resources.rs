//! Resource command handlers.

use lingo_api::{ListResourcesParams, Resource};
use tabled::Tabled;

use crate::cli::{ResourcesArgs, ResourcesCommand};
use crate::config::Context;
use crate::error::CliError;

use super::util;

#[derive(Tabled)]
struct ResourceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Format")]
    format: String,
    #[tabled(rename = "Strings")]
    strings: u64,
    #[tabled(rename = "Words")]
    words: u64,
}

impl From<&Resource> for ResourceRow {
    fn from(r: &Resource) -> Self {
        Self {
            id: r.id.clone(),
            name: r.attributes.name.clone(),
            format: r.attributes.i18n_type.clone(),
            strings: r.attributes.string_count,
            words: r.attributes.word_count,
        }
    }
}

pub async fn handle(ctx: &Context, args: ResourcesArgs) -> Result<(), CliError> {
    match args.command {
        ResourcesCommand::List {
            project,
            slug,
            name,
            page,
        } => {
            let params = ListResourcesParams {
                slug: slug.unwrap_or_default(),
                name: name.unwrap_or_default(),
                ..ListResourcesParams::new(project)
            };
            let client = &ctx.client;
            let resources = util::fetch_pages(&page, |cursor| {
                let params = ListResourcesParams {
                    cursor,
                    ..params.clone()
                };
                async move { client.list_resources(&params).await }
            })
            .await?;
            util::print_page(ctx, &resources, |item| ResourceRow::from(item))
        }
        ResourcesCommand::Get(id) => {
            let resource = ctx.client.get_resource(&id.id).await?;
            util::print_single(ctx, &resource)
        }
    }
}
