//! Resource string comment handlers.

use lingo_api::{ListResourceStringCommentsParams, ResourceStringComment};
use tabled::Tabled;

use crate::cli::{CommentsArgs, CommentsCommand, CommentsListArgs};
use crate::config::Context;
use crate::error::CliError;

use super::util;

#[derive(Tabled)]
struct CommentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    comment_type: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Message")]
    message: String,
}

impl From<&ResourceStringComment> for CommentRow {
    fn from(c: &ResourceStringComment) -> Self {
        let a = &c.attributes;
        Self {
            id: c.id.clone(),
            comment_type: a.comment_type.clone().unwrap_or_default(),
            status: a.status.clone().unwrap_or_default(),
            priority: a.priority.clone().unwrap_or_default(),
            message: a.message.lines().next().unwrap_or_default().to_owned(),
        }
    }
}

fn list_params(ctx: &Context, args: CommentsListArgs) -> ListResourceStringCommentsParams {
    ListResourceStringCommentsParams {
        project: args.project.unwrap_or_default(),
        category: args.category.unwrap_or_default(),
        author: args.author.unwrap_or_default(),
        created_after: args.created_after,
        created_before: args.created_before,
        priority: args.priority.unwrap_or_default(),
        resource: args.resource.unwrap_or_default(),
        resource_string: args.resource_string.unwrap_or_default(),
        status: args.status.unwrap_or_default(),
        comment_type: args.comment_type.unwrap_or_default(),
        ..ListResourceStringCommentsParams::new(ctx.organization(args.organization))
    }
}

pub async fn handle(ctx: &Context, args: CommentsArgs) -> Result<(), CliError> {
    match args.command {
        CommentsCommand::List(list) => {
            let page = list.page.clone();
            let params = list_params(ctx, list);
            let client = &ctx.client;
            let comments = util::fetch_pages(&page, |cursor| {
                let params = ListResourceStringCommentsParams {
                    cursor,
                    ..params.clone()
                };
                async move { client.list_resource_string_comments(&params).await }
            })
            .await?;
            util::print_page(ctx, &comments, |item| CommentRow::from(item))
        }
        CommentsCommand::Get(id) => {
            let comment = ctx.client.get_resource_string_comment(&id.id).await?;
            util::print_single(ctx, &comment)
        }
    }
}
