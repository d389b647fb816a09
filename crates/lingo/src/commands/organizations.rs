//! Organization command handlers.

use lingo_api::{ListOrganizationsParams, Organization};

use crate::cli::{OrganizationsArgs, OrganizationsCommand};
use crate::config::Context;
use crate::error::CliError;
use crate::output::EntityRow;

use super::util;

fn row(o: &Organization) -> EntityRow {
    EntityRow::new(&o.id, &o.kind, o.attributes.name.as_str())
}

pub async fn handle(ctx: &Context, args: OrganizationsArgs) -> Result<(), CliError> {
    match args.command {
        OrganizationsCommand::List { slug, page } => {
            let params = ListOrganizationsParams {
                slug: slug.unwrap_or_default(),
                ..ListOrganizationsParams::default()
            };
            let client = &ctx.client;
            let orgs = util::fetch_pages(&page, |cursor| {
                let params = ListOrganizationsParams {
                    cursor,
                    ..params.clone()
                };
                async move { client.list_organizations(&params).await }
            })
            .await?;
            util::print_page(ctx, &orgs, row)
        }
        OrganizationsCommand::Get(id) => {
            let org = ctx.client.get_organization(&id.id).await?;
            util::print_single(ctx, &org)
        }
    }
}
