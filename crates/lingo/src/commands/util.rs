//! Shared helpers for command handlers.

use std::future::Future;

use lingo_api::{Identifier, Page};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::cli::PageArgs;
use crate::config::Context;
use crate::error::CliError;
use crate::output;

/// Row for relationship listings, which carry identifiers only.
#[derive(Tabled)]
pub struct IdentifierRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    kind: String,
}

impl From<&Identifier> for IdentifierRow {
    fn from(i: &Identifier) -> Self {
        Self {
            id: i.id.clone(),
            kind: i.kind.clone(),
        }
    }
}

/// Fetch the requested page, or every page when `--all` is set.
///
/// `fetch` receives the cursor to request; an empty cursor means the
/// first page. Merged pages keep the links of the last one fetched.
pub async fn fetch_pages<T, F, Fut>(args: &PageArgs, mut fetch: F) -> Result<Page<T>, CliError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Page<T>, lingo_api::Error>>,
{
    let mut page = fetch(args.cursor.clone().unwrap_or_default()).await?;
    if !args.all {
        return Ok(page);
    }

    let mut seen = Vec::new();
    while let Some(cursor) = page.next_cursor() {
        if seen.contains(&cursor) {
            debug!(cursor = %cursor, "cursor repeated, stopping");
            break;
        }
        debug!(cursor = %cursor, fetched = page.data.len(), "following next link");
        let next = fetch(cursor.clone()).await?;
        seen.push(cursor);
        page.data.extend(next.data);
        page.included.extend(next.included);
        page.links = next.links;
    }
    Ok(page)
}

/// Render a page, then point at the next cursor if one remains.
pub fn print_page<T, R>(
    ctx: &Context,
    page: &Page<T>,
    to_row: impl Fn(&T) -> R,
) -> Result<(), CliError>
where
    T: Serialize,
    R: Tabled,
{
    let out = output::render_page(ctx.output, page, to_row)?;
    output::print_output(&out, ctx.quiet);
    output::print_cursor_hint(page.next_cursor(), ctx.quiet);
    Ok(())
}

pub fn print_single<T: Serialize>(ctx: &Context, data: &T) -> Result<(), CliError> {
    let out = output::render_single(ctx.output, data)?;
    output::print_output(&out, ctx.quiet);
    Ok(())
}

pub fn print_identifiers(ctx: &Context, page: &Page<Identifier>) -> Result<(), CliError> {
    print_page(ctx, page, |item| IdentifierRow::from(item))
}
