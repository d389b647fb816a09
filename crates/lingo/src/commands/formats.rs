//! i18n format listing.

use lingo_api::{I18nFormat, ListI18nFormatsParams};
use tabled::Tabled;

use crate::cli::{FormatsArgs, FormatsCommand};
use crate::config::Context;
use crate::error::CliError;

use super::util;

#[derive(Tabled)]
struct FormatRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Media type")]
    media_type: String,
    #[tabled(rename = "Extensions")]
    extensions: String,
}

impl From<&I18nFormat> for FormatRow {
    fn from(f: &I18nFormat) -> Self {
        Self {
            name: f.attributes.name.clone(),
            media_type: f.attributes.media_type.clone(),
            extensions: f.attributes.file_extensions.join(", "),
        }
    }
}

pub async fn handle(ctx: &Context, args: FormatsArgs) -> Result<(), CliError> {
    match args.command {
        FormatsCommand::List { organization, name } => {
            let params = ListI18nFormatsParams {
                name: name.unwrap_or_default(),
                ..ListI18nFormatsParams::new(ctx.organization(organization))
            };
            let formats = ctx.client.list_i18n_formats(&params).await?;
            util::print_page(ctx, &formats, |item| FormatRow::from(item))
        }
    }
}
