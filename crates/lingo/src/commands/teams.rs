//! Team command handlers.

use lingo_api::{ListTeamsParams, Team, User};

use crate::cli::{TeamsArgs, TeamsCommand};
use crate::config::Context;
use crate::error::CliError;
use crate::output::EntityRow;

use super::util;

fn team_row(t: &Team) -> EntityRow {
    EntityRow::new(&t.id, &t.kind, t.attributes.name.as_str())
}

fn user_row(u: &User) -> EntityRow {
    EntityRow::new(&u.id, &u.kind, u.attributes.username.as_str())
}

pub async fn handle(ctx: &Context, args: TeamsArgs) -> Result<(), CliError> {
    let client = &ctx.client;
    match args.command {
        TeamsCommand::List {
            organization,
            name,
            slug,
            page,
        } => {
            let params = ListTeamsParams {
                name: name.unwrap_or_default(),
                slug: slug.unwrap_or_default(),
                ..ListTeamsParams::new(ctx.organization(organization))
            };
            let teams = util::fetch_pages(&page, |cursor| {
                let params = ListTeamsParams {
                    cursor,
                    ..params.clone()
                };
                async move { client.list_teams(&params).await }
            })
            .await?;
            util::print_page(ctx, &teams, team_row)
        }
        TeamsCommand::Get(id) => {
            let team = client.get_team(&id.id).await?;
            util::print_single(ctx, &team)
        }
        TeamsCommand::Managers(id) => {
            let managers = client.list_team_managers(&id.id).await?;
            util::print_page(ctx, &managers, user_row)
        }
        TeamsCommand::ManagerRelationships(id) => {
            let ids = client.list_team_manager_relationships(&id.id).await?;
            util::print_identifiers(ctx, &ids)
        }
    }
}
