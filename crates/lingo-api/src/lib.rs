//! Async Rust client for the Transifex REST API (JSON:API v3).

pub mod client;
pub mod error;
pub mod jsonapi;
pub mod query;
pub mod resources;
pub mod transport;

pub use client::{Client, DEFAULT_API_URL, JSON_API_MEDIA_TYPE};
pub use error::{Error, ErrorKind};
pub use jsonapi::{
    ApiErrorObject, Document, Entity, Identifier, NoRelationships, Page, PageLinks, Relationship,
    RelationshipLinks, ResourceLinks,
};
pub use query::{BoolFilter, DEFAULT_LIMIT, Field, MAX_LIMIT, MIN_LIMIT, QueryParams};
pub use transport::{TlsMode, TransportConfig};

pub use resources::i18n_formats::{I18nFormat, I18nFormatAttributes, ListI18nFormatsParams};
pub use resources::languages::{Language, LanguageAttributes, ListLanguagesParams, PluralRules};
pub use resources::organizations::{
    ListOrganizationsParams, Organization, OrganizationAttributes, OrganizationRelationships,
};
pub use resources::projects::{
    ListProjectsParams, Project, ProjectAttributes, ProjectRelationships,
};
pub use resources::resource_string_comments::{
    CommentPriority, CommentStatus, CommentType, ListResourceStringCommentsParams,
    ResourceStringComment, ResourceStringCommentAttributes, ResourceStringCommentRelationships,
};
pub use resources::resource_strings::{
    ListResourceStringRevisionsParams, ListResourceStringsParams, PluralStrings, ResourceString,
    ResourceStringAttributes, ResourceStringRelationships, ResourceStringRevision,
    ResourceStringRevisionAttributes, ResourceStringRevisionRelationships,
};
pub use resources::resource_translations::{
    GetResourceTranslationParams, ListResourceTranslationsParams, ResourceTranslation,
    ResourceTranslationAttributes, ResourceTranslationRelationships, TranslationOrigin,
};
pub use resources::resources::{
    ListResourcesParams, Resource, ResourceAttributes, ResourceRelationships,
};
pub use resources::statistics::{
    ListResourceLanguageStatsParams, ResourceLanguageStats, ResourceLanguageStatsAttributes,
    ResourceLanguageStatsRelationships,
};
pub use resources::team_memberships::{
    GetTeamMembershipParams, ListTeamMembershipsParams, MembershipRole, TeamMembership,
    TeamMembershipAttributes, TeamMembershipRelationships,
};
pub use resources::teams::{ListTeamsParams, Team, TeamAttributes, TeamRelationships};
pub use resources::users::{Maintainer, User, UserAttributes};
