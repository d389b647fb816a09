//! User lookup.

use crate::cli::{UsersArgs, UsersCommand};
use crate::config::Context;
use crate::error::CliError;

use super::util;

pub async fn handle(ctx: &Context, args: UsersArgs) -> Result<(), CliError> {
    match args.command {
        UsersCommand::Get(id) => {
            let user = ctx.client.get_user(&id.id).await?;
            util::print_single(ctx, &user)
        }
    }
}
