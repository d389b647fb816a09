//! Project command handlers, including the language, maintainer and team
//! sub-collections.

use lingo_api::{Language, ListProjectsParams, Maintainer, Project};
use tabled::Tabled;

use crate::cli::{ProjectsArgs, ProjectsCommand};
use crate::config::Context;
use crate::error::CliError;
use crate::output::EntityRow;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    project_type: String,
    #[tabled(rename = "Private")]
    private: bool,
    #[tabled(rename = "Archived")]
    archived: bool,
}

impl From<&Project> for ProjectRow {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id.clone(),
            name: p.attributes.name.clone(),
            project_type: p.attributes.project_type.clone(),
            private: p.attributes.private,
            archived: p.attributes.archived,
        }
    }
}

fn language_row(l: &Language) -> EntityRow {
    EntityRow::new(&l.id, &l.attributes.code, l.attributes.name.as_str())
}

fn maintainer_row(m: &Maintainer) -> EntityRow {
    EntityRow::new(&m.id, &m.kind, m.attributes.username.as_str())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(ctx: &Context, args: ProjectsArgs) -> Result<(), CliError> {
    let client = &ctx.client;
    match args.command {
        ProjectsCommand::List {
            organization,
            slug,
            name,
            page,
        } => {
            let params = ListProjectsParams {
                slug: slug.unwrap_or_default(),
                name: name.unwrap_or_default(),
                ..ListProjectsParams::new(ctx.organization(organization))
            };
            let projects = util::fetch_pages(&page, |cursor| {
                let params = ListProjectsParams {
                    cursor,
                    ..params.clone()
                };
                async move { client.list_projects(&params).await }
            })
            .await?;
            util::print_page(ctx, &projects, |item| ProjectRow::from(item))
        }
        ProjectsCommand::Get(id) => {
            let project = client.get_project(&id.id).await?;
            util::print_single(ctx, &project)
        }
        ProjectsCommand::Languages(id) => {
            let languages = client.list_project_languages(&id.id).await?;
            util::print_page(ctx, &languages, language_row)
        }
        ProjectsCommand::LanguageRelationships(id) => {
            let ids = client.list_project_language_relationships(&id.id).await?;
            util::print_identifiers(ctx, &ids)
        }
        ProjectsCommand::Maintainers(id) => {
            let maintainers = client.list_project_maintainers(&id.id).await?;
            util::print_page(ctx, &maintainers, maintainer_row)
        }
        ProjectsCommand::MaintainerRelationships(id) => {
            let ids = client.list_project_maintainer_relationships(&id.id).await?;
            util::print_identifiers(ctx, &ids)
        }
        ProjectsCommand::Team(id) => {
            let team = client.get_project_team_relationship(&id.id).await?;
            util::print_single(ctx, &team)
        }
    }
}
