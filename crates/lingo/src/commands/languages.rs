//! Language command handlers.

use lingo_api::{Language, ListLanguagesParams};
use tabled::Tabled;

use crate::cli::{LanguagesArgs, LanguagesCommand};
use crate::config::Context;
use crate::error::CliError;

use super::util;

#[derive(Tabled)]
struct LanguageRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "RTL")]
    rtl: bool,
}

impl From<&Language> for LanguageRow {
    fn from(l: &Language) -> Self {
        Self {
            id: l.id.clone(),
            code: l.attributes.code.clone(),
            name: l.attributes.name.clone(),
            rtl: l.attributes.rtl,
        }
    }
}

pub async fn handle(ctx: &Context, args: LanguagesArgs) -> Result<(), CliError> {
    match args.command {
        LanguagesCommand::List { code, page } => {
            let params = ListLanguagesParams {
                code: code.unwrap_or_default(),
                ..ListLanguagesParams::default()
            };
            let client = &ctx.client;
            let languages = util::fetch_pages(&page, |cursor| {
                let params = ListLanguagesParams {
                    cursor,
                    ..params.clone()
                };
                async move { client.list_languages(&params).await }
            })
            .await?;
            util::print_page(ctx, &languages, |item| LanguageRow::from(item))
        }
        LanguagesCommand::Get(id) => {
            let language = ctx.client.get_language(&id.id).await?;
            util::print_single(ctx, &language)
        }
    }
}
