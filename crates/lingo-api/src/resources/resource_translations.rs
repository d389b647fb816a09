use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr, VariantNames};

use crate::client::Client;
use crate::error::Error;
use crate::jsonapi::{Document, Entity, Page, Relationship, null_default};
use crate::query::{BoolFilter, Field, QueryParams};
use crate::resources::resource_strings::PluralStrings;

/// Only side-loadable relationship on translations.
pub const INCLUDE_RESOURCE_STRING: &str = "resource_string";

/// Where a translation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr, VariantNames)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum TranslationOrigin {
    Api,
    Editor,
    Upload,
    Tm,
    #[strum(serialize = "VENDORS:GENGO")]
    VendorsGengo,
    #[strum(serialize = "VENDORS:TEXTMASTER")]
    VendorsTextmaster,
    #[strum(serialize = "VENDORS:E2F")]
    VendorsE2f,
    #[strum(serialize = "MT:GOOGLE")]
    MtGoogle,
    #[strum(serialize = "MT:MICROSOFT")]
    MtMicrosoft,
    #[strum(serialize = "MT:AMAZON")]
    MtAmazon,
    #[strum(serialize = "MT:DEEPL")]
    MtDeepl,
    Autofetch,
    #[strum(serialize = "TX:AUTOMATED")]
    TxAutomated,
    #[strum(serialize = "TX:NATIVE_MIGRATION")]
    TxNativeMigration,
    #[strum(serialize = "TX:PROPAGATED")]
    TxPropagated,
    #[strum(serialize = "TX:MERGED")]
    TxMerged,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceTranslationAttributes {
    /// `None` while the string is untranslated.
    pub strings: Option<PluralStrings>,
    pub reviewed: bool,
    pub proofread: bool,
    pub finalized: bool,
    pub origin: Option<String>,
    pub datetime_created: Option<DateTime<Utc>>,
    pub datetime_translated: Option<DateTime<Utc>>,
    pub datetime_reviewed: Option<DateTime<Utc>>,
    pub datetime_proofread: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceTranslationRelationships {
    pub resource: Relationship,
    pub language: Relationship,
    pub resource_string: Relationship,
    #[serde(deserialize_with = "null_default")]
    pub translator: Relationship,
    #[serde(deserialize_with = "null_default")]
    pub reviewer: Relationship,
    #[serde(deserialize_with = "null_default")]
    pub proofreader: Relationship,
}

pub type ResourceTranslation =
    Entity<ResourceTranslationAttributes, ResourceTranslationRelationships>;

/// Filters for `GET /resource_translations`.
///
/// The service needs both `resource` and `language`. The four state
/// flags take `true`/`false` in any case.
#[derive(Debug, Clone, Default)]
pub struct ListResourceTranslationsParams {
    pub resource: String,
    /// Language id, e.g. `l:fr`.
    pub language: String,
    pub cursor: String,
    pub translated_after: Option<DateTime<Utc>>,
    pub translated_before: Option<DateTime<Utc>>,
    pub key: String,
    pub modified_after: Option<DateTime<Utc>>,
    pub modified_before: Option<DateTime<Utc>>,
    pub translated: String,
    pub reviewed: String,
    pub proofread: String,
    pub finalized: String,
    /// User id of the translator.
    pub translated_by: String,
    pub origin: String,
    /// Empty or `resource_string`.
    pub include: String,
    pub tags: Vec<String>,
    pub limit: String,
}

impl ListResourceTranslationsParams {
    pub fn new(resource: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            language: language.into(),
            ..Self::default()
        }
    }
}

impl QueryParams for ListResourceTranslationsParams {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("resource", "filter[resource]", &self.resource),
            Field::required("language", "filter[language]", &self.language),
            Field::cursor(&self.cursor),
            Field::time("filter[date_translated][gt]", self.translated_after),
            Field::time("filter[date_translated][lt]", self.translated_before),
            Field::text("filter[resource_string][key]", &self.key),
            Field::time(
                "filter[resource_string][date_modified][gte]",
                self.modified_after,
            ),
            Field::time(
                "filter[resource_string][date_modified][lte]",
                self.modified_before,
            ),
            Field::one_of::<BoolFilter>("translated", "filter[translated]", &self.translated),
            Field::one_of::<BoolFilter>("reviewed", "filter[reviewed]", &self.reviewed),
            Field::one_of::<BoolFilter>("proofread", "filter[proofread]", &self.proofread),
            Field::one_of::<BoolFilter>("finalized", "filter[finalized]", &self.finalized),
            Field::text("filter[translator]", &self.translated_by),
            Field::one_of::<TranslationOrigin>("origin", "filter[origin]", &self.origin),
            Field::include(INCLUDE_RESOURCE_STRING, &self.include),
            Field::tags("filter[resource_string][tags][all]", &self.tags),
            Field::limit(&self.limit),
        ]
    }
}

/// Parameters for `GET /resource_translations/{id}`.
#[derive(Debug, Clone, Default)]
pub struct GetResourceTranslationParams {
    pub resource_translation: String,
    /// Empty or `resource_string`.
    pub include: String,
}

impl QueryParams for GetResourceTranslationParams {
    // The id travels in the path; only `include` is a query field.
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::include(INCLUDE_RESOURCE_STRING, &self.include)]
    }
}

const RESOURCE_TRANSLATIONS: &str = "/resource_translations";

impl Client {
    /// `GET /resource_translations`
    pub async fn list_resource_translations(
        &self,
        params: &ListResourceTranslationsParams,
    ) -> Result<Page<ResourceTranslation>, Error> {
        self.list(RESOURCE_TRANSLATIONS, params).await
    }

    /// `GET /resource_translations/{id}`
    ///
    /// Returns the whole document so a side-loaded resource string is
    /// available in `included`.
    pub async fn get_resource_translation(
        &self,
        params: &GetResourceTranslationParams,
    ) -> Result<Document<ResourceTranslation>, Error> {
        self.get_with(
            RESOURCE_TRANSLATIONS,
            "resource_translation",
            &params.fields(),
            &params.resource_translation,
        )
        .await
    }
}
