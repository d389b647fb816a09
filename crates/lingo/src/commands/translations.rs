//! Resource translation handlers.

use lingo_api::{GetResourceTranslationParams, ListResourceTranslationsParams, ResourceTranslation};
use tabled::Tabled;

use crate::cli::{TranslationsArgs, TranslationsCommand, TranslationsListArgs};
use crate::config::Context;
use crate::error::CliError;

use super::util;

#[derive(Tabled)]
struct TranslationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Translation")]
    text: String,
    #[tabled(rename = "Reviewed")]
    reviewed: bool,
    #[tabled(rename = "Proofread")]
    proofread: bool,
    #[tabled(rename = "Origin")]
    origin: String,
}

impl From<&ResourceTranslation> for TranslationRow {
    fn from(t: &ResourceTranslation) -> Self {
        let a = &t.attributes;
        let text = a
            .strings
            .as_ref()
            .and_then(|s| s.get("other").or_else(|| s.values().next()))
            .cloned()
            .unwrap_or_default();
        Self {
            id: t.id.clone(),
            text,
            reviewed: a.reviewed,
            proofread: a.proofread,
            origin: a.origin.clone().unwrap_or_default(),
        }
    }
}

fn list_params(args: TranslationsListArgs) -> ListResourceTranslationsParams {
    ListResourceTranslationsParams {
        translated_after: args.translated_after,
        translated_before: args.translated_before,
        key: args.key.unwrap_or_default(),
        modified_after: args.modified_after,
        modified_before: args.modified_before,
        translated: args.translated.unwrap_or_default(),
        reviewed: args.reviewed.unwrap_or_default(),
        proofread: args.proofread.unwrap_or_default(),
        finalized: args.finalized.unwrap_or_default(),
        translated_by: args.translated_by.unwrap_or_default(),
        origin: args.origin.unwrap_or_default(),
        include: args.include.unwrap_or_default(),
        tags: args.tags,
        limit: args.limit.unwrap_or_default(),
        ..ListResourceTranslationsParams::new(args.resource, args.language)
    }
}

pub async fn handle(ctx: &Context, args: TranslationsArgs) -> Result<(), CliError> {
    match args.command {
        TranslationsCommand::List(list) => {
            let page = list.page.clone();
            let params = list_params(list);
            let client = &ctx.client;
            let translations = util::fetch_pages(&page, |cursor| {
                let params = ListResourceTranslationsParams {
                    cursor,
                    ..params.clone()
                };
                async move { client.list_resource_translations(&params).await }
            })
            .await?;
            util::print_page(ctx, &translations, |item| TranslationRow::from(item))
        }
        TranslationsCommand::Get { id, include } => {
            let params = GetResourceTranslationParams {
                resource_translation: id,
                include: include.unwrap_or_default(),
            };
            let document = ctx.client.get_resource_translation(&params).await?;
            util::print_single(ctx, &document)
        }
    }
}
