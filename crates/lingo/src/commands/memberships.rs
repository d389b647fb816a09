//! Team membership handlers.

use lingo_api::{GetTeamMembershipParams, ListTeamMembershipsParams, TeamMembership};
use tabled::Tabled;

use crate::cli::{MembershipsArgs, MembershipsCommand};
use crate::config::Context;
use crate::error::CliError;

use super::util;

#[derive(Tabled)]
struct MembershipRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Language")]
    language: String,
    #[tabled(rename = "User")]
    user: String,
}

impl From<&TeamMembership> for MembershipRow {
    fn from(m: &TeamMembership) -> Self {
        let rel = &m.relationships;
        Self {
            id: m.id.clone(),
            role: m.attributes.role.clone(),
            team: rel.team.id().unwrap_or_default().to_owned(),
            language: rel.language.id().unwrap_or_default().to_owned(),
            user: rel.user.id().unwrap_or_default().to_owned(),
        }
    }
}

pub async fn handle(ctx: &Context, args: MembershipsArgs) -> Result<(), CliError> {
    match args.command {
        MembershipsCommand::List {
            organization,
            team,
            language,
            user,
            role,
            include,
            page,
        } => {
            let params = ListTeamMembershipsParams {
                team: team.unwrap_or_default(),
                language: language.unwrap_or_default(),
                user: user.unwrap_or_default(),
                role: role.unwrap_or_default(),
                include: include.unwrap_or_default(),
                ..ListTeamMembershipsParams::new(ctx.organization(organization))
            };
            let client = &ctx.client;
            let memberships = util::fetch_pages(&page, |cursor| {
                let params = ListTeamMembershipsParams {
                    cursor,
                    ..params.clone()
                };
                async move { client.list_team_memberships(&params).await }
            })
            .await?;
            util::print_page(ctx, &memberships, |item| MembershipRow::from(item))
        }
        MembershipsCommand::Get { id, include } => {
            let params = GetTeamMembershipParams {
                team_membership: id,
                include: include.unwrap_or_default(),
            };
            let document = ctx.client.get_team_membership(&params).await?;
            util::print_single(ctx, &document)
        }
    }
}
