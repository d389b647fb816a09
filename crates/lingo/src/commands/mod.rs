//! Command dispatch: bridges CLI args -> API calls -> output formatting.

pub mod comments;
pub mod config_cmd;
pub mod formats;
pub mod languages;
pub mod memberships;
pub mod organizations;
pub mod projects;
pub mod resources;
pub mod stats;
pub mod strings;
pub mod teams;
pub mod translations;
pub mod users;
pub mod util;

use crate::cli::Command;
use crate::config::Context;
use crate::error::CliError;

/// Dispatch an API-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, ctx: &Context) -> Result<(), CliError> {
    match cmd {
        Command::Organizations(args) => organizations::handle(ctx, args).await,
        Command::Projects(args) => projects::handle(ctx, args).await,
        Command::Resources(args) => resources::handle(ctx, args).await,
        Command::Languages(args) => languages::handle(ctx, args).await,
        Command::Strings(args) => strings::handle(ctx, args).await,
        Command::Comments(args) => comments::handle(ctx, args).await,
        Command::Translations(args) => translations::handle(ctx, args).await,
        Command::Teams(args) => teams::handle(ctx, args).await,
        Command::Memberships(args) => memberships::handle(ctx, args).await,
        Command::Stats(args) => stats::handle(ctx, args).await,
        Command::Formats(args) => formats::handle(ctx, args).await,
        Command::Users(args) => users::handle(ctx, args).await,
        // Handled in main before a client exists
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
