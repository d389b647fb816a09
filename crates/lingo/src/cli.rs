//! Clap derive structures for the `lingo` CLI.
//!
//! Defines the command tree, global flags, and shared argument groups.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// lingo -- browse a Transifex workspace from the command line
#[derive(Debug, Parser)]
#[command(
    name = "lingo",
    version,
    about = "Browse Transifex organizations, projects and translations",
    long_about = "Read-only command-line client for the Transifex REST API (v3).\n\n\
        Every command issues authenticated GET requests and prints the\n\
        decoded JSON:API entities as text, tables, JSON or YAML.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration profile to use
    #[arg(long, short = 'p', env = "LINGO_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Path to the configuration file
    #[arg(long, env = "LINGO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// API base URL (overrides profile)
    #[arg(long, env = "LINGO_API_URL", global = true)]
    pub api_url: Option<String>,

    /// API bearer token
    #[arg(long, env = "LINGO_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(long, short = 'o', env = "LINGO_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', env = "LINGO_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "LINGO_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented key/value tree
    Text,
    /// Pretty table (lists), key/value tree (single entities)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse organizations
    #[command(alias = "orgs")]
    Organizations(OrganizationsArgs),

    /// Browse projects and their languages, maintainers and team
    #[command(alias = "p")]
    Projects(ProjectsArgs),

    /// Browse resources (translatable files)
    #[command(alias = "r")]
    Resources(ResourcesArgs),

    /// Browse supported languages
    Languages(LanguagesArgs),

    /// Browse source strings and their revisions
    Strings(StringsArgs),

    /// Browse comments and issues on source strings
    Comments(CommentsArgs),

    /// Browse translations
    #[command(alias = "tr")]
    Translations(TranslationsArgs),

    /// Browse teams and their managers
    Teams(TeamsArgs),

    /// Browse team memberships
    Memberships(MembershipsArgs),

    /// Show per-language translation progress
    Stats(StatsArgs),

    /// List file formats supported by an organization
    Formats(FormatsArgs),

    /// Look up users
    Users(UsersArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared Arguments ─────────────────────────────────────────────────

/// Pagination arguments shared by every paginated list command.
#[derive(Debug, Clone, Default, Args)]
pub struct PageArgs {
    /// Resume from a cursor printed by a previous page
    #[arg(long)]
    pub cursor: Option<String>,

    /// Follow `next` links until the collection is exhausted
    #[arg(long, conflicts_with = "cursor")]
    pub all: bool,
}

/// Entity id argument for detail commands.
#[derive(Debug, Args)]
pub struct IdArg {
    /// Entity id (e.g. `o:acme:p:demo`)
    pub id: String,
}

// ── Organizations ────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct OrganizationsArgs {
    #[command(subcommand)]
    pub command: OrganizationsCommand,
}

#[derive(Debug, Subcommand)]
pub enum OrganizationsCommand {
    /// List organizations the token can see
    #[command(alias = "ls")]
    List {
        /// Filter by slug
        #[arg(long)]
        slug: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show one organization
    Get(IdArg),
}

// ── Projects ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ProjectsArgs {
    #[command(subcommand)]
    pub command: ProjectsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProjectsCommand {
    /// List projects of an organization
    #[command(alias = "ls")]
    List {
        /// Organization id (defaults to the profile's organization)
        #[arg(long)]
        organization: Option<String>,
        /// Filter by slug
        #[arg(long)]
        slug: Option<String>,
        /// Filter by name
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show one project
    Get(IdArg),
    /// List a project's target languages
    Languages(IdArg),
    /// List ids of a project's target languages
    LanguageRelationships(IdArg),
    /// List a project's maintainers
    Maintainers(IdArg),
    /// List ids of a project's maintainers
    MaintainerRelationships(IdArg),
    /// Show the team assigned to a project
    Team(IdArg),
}

// ── Resources ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ResourcesArgs {
    #[command(subcommand)]
    pub command: ResourcesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ResourcesCommand {
    /// List resources of a project
    #[command(alias = "ls")]
    List {
        /// Project id
        #[arg(long)]
        project: String,
        /// Filter by slug
        #[arg(long)]
        slug: Option<String>,
        /// Filter by name
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show one resource
    Get(IdArg),
}

// ── Languages ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LanguagesArgs {
    #[command(subcommand)]
    pub command: LanguagesCommand,
}

#[derive(Debug, Subcommand)]
pub enum LanguagesCommand {
    /// List languages
    #[command(alias = "ls")]
    List {
        /// Comma-separated language codes (e.g. `fr,de`)
        #[arg(long)]
        code: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show one language
    Get(IdArg),
}

// ── Resource strings ─────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct StringsArgs {
    #[command(subcommand)]
    pub command: StringsCommand,
}

#[derive(Debug, Subcommand)]
pub enum StringsCommand {
    /// List source strings of a resource
    #[command(alias = "ls")]
    List {
        /// Resource id
        #[arg(long)]
        resource: String,
        /// Created at or after (RFC 3339)
        #[arg(long)]
        created_after: Option<DateTime<Utc>>,
        /// Created before (RFC 3339)
        #[arg(long)]
        created_before: Option<DateTime<Utc>>,
        /// Filter by string key
        #[arg(long)]
        key: Option<String>,
        /// Require a tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Page size, 150-1000
        #[arg(long)]
        limit: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show one source string
    Get(IdArg),
    /// List revisions of a resource's strings
    Revisions {
        /// Resource id
        #[arg(long)]
        resource: String,
        /// Filter by string key
        #[arg(long)]
        key: Option<String>,
        /// Require a tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Page size, 150-1000
        #[arg(long)]
        limit: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
}

// ── Comments ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CommentsArgs {
    #[command(subcommand)]
    pub command: CommentsCommand,
}

#[derive(Debug, Subcommand)]
pub enum CommentsCommand {
    /// List comments in an organization
    #[command(alias = "ls")]
    List(CommentsListArgs),
    /// Show one comment
    Get(IdArg),
}

#[derive(Debug, Args)]
pub struct CommentsListArgs {
    /// Organization id (defaults to the profile's organization)
    #[arg(long)]
    pub organization: Option<String>,
    /// Project id
    #[arg(long)]
    pub project: Option<String>,
    /// Comment category
    #[arg(long)]
    pub category: Option<String>,
    /// Author user id
    #[arg(long)]
    pub author: Option<String>,
    /// Created at or after (RFC 3339)
    #[arg(long)]
    pub created_after: Option<DateTime<Utc>>,
    /// Created before (RFC 3339)
    #[arg(long)]
    pub created_before: Option<DateTime<Utc>>,
    /// low, normal, high, critical or blocker
    #[arg(long)]
    pub priority: Option<String>,
    /// Resource id
    #[arg(long)]
    pub resource: Option<String>,
    /// Resource string id
    #[arg(long = "string")]
    pub resource_string: Option<String>,
    /// open or resolved
    #[arg(long)]
    pub status: Option<String>,
    /// issue or comment
    #[arg(long = "type")]
    pub comment_type: Option<String>,
    #[command(flatten)]
    pub page: PageArgs,
}

// ── Translations ─────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct TranslationsArgs {
    #[command(subcommand)]
    pub command: TranslationsCommand,
}

#[derive(Debug, Subcommand)]
pub enum TranslationsCommand {
    /// List translations of a resource in one language
    #[command(alias = "ls")]
    List(TranslationsListArgs),
    /// Show one translation
    Get {
        /// Translation id
        id: String,
        /// Side-load related entities (`resource_string`)
        #[arg(long)]
        include: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct TranslationsListArgs {
    /// Resource id
    #[arg(long)]
    pub resource: String,
    /// Language id (e.g. `l:fr`)
    #[arg(long)]
    pub language: String,
    /// Translated after (RFC 3339)
    #[arg(long)]
    pub translated_after: Option<DateTime<Utc>>,
    /// Translated before (RFC 3339)
    #[arg(long)]
    pub translated_before: Option<DateTime<Utc>>,
    /// Filter by source string key
    #[arg(long)]
    pub key: Option<String>,
    /// Source string modified at or after (RFC 3339)
    #[arg(long)]
    pub modified_after: Option<DateTime<Utc>>,
    /// Source string modified at or before (RFC 3339)
    #[arg(long)]
    pub modified_before: Option<DateTime<Utc>>,
    /// true or false
    #[arg(long)]
    pub translated: Option<String>,
    /// true or false
    #[arg(long)]
    pub reviewed: Option<String>,
    /// true or false
    #[arg(long)]
    pub proofread: Option<String>,
    /// true or false
    #[arg(long)]
    pub finalized: Option<String>,
    /// Translator user id
    #[arg(long)]
    pub translated_by: Option<String>,
    /// Translation origin (e.g. `EDITOR`, `MT:DEEPL`)
    #[arg(long)]
    pub origin: Option<String>,
    /// Side-load related entities (`resource_string`)
    #[arg(long)]
    pub include: Option<String>,
    /// Require a source string tag (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    /// Page size, 150-1000
    #[arg(long)]
    pub limit: Option<String>,
    #[command(flatten)]
    pub page: PageArgs,
}

// ── Teams ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct TeamsArgs {
    #[command(subcommand)]
    pub command: TeamsCommand,
}

#[derive(Debug, Subcommand)]
pub enum TeamsCommand {
    /// List teams of an organization
    #[command(alias = "ls")]
    List {
        /// Organization id (defaults to the profile's organization)
        #[arg(long)]
        organization: Option<String>,
        /// Filter by name
        #[arg(long)]
        name: Option<String>,
        /// Filter by slug
        #[arg(long)]
        slug: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show one team
    Get(IdArg),
    /// List a team's managers
    Managers(IdArg),
    /// List ids of a team's managers
    ManagerRelationships(IdArg),
}

// ── Memberships ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct MembershipsArgs {
    #[command(subcommand)]
    pub command: MembershipsCommand,
}

#[derive(Debug, Subcommand)]
pub enum MembershipsCommand {
    /// List team memberships in an organization
    #[command(alias = "ls")]
    List {
        /// Organization id (defaults to the profile's organization)
        #[arg(long)]
        organization: Option<String>,
        /// Team id
        #[arg(long)]
        team: Option<String>,
        /// Language id
        #[arg(long)]
        language: Option<String>,
        /// User id
        #[arg(long)]
        user: Option<String>,
        /// coordinator, translator or reviewer
        #[arg(long)]
        role: Option<String>,
        /// Side-load related entities (`user`)
        #[arg(long)]
        include: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show one membership
    Get {
        /// Membership id
        id: String,
        /// Side-load related entities (`user`)
        #[arg(long)]
        include: Option<String>,
    },
}

// ── Statistics ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[command(subcommand)]
    pub command: StatsCommand,
}

#[derive(Debug, Subcommand)]
pub enum StatsCommand {
    /// List progress per resource and language of a project
    #[command(alias = "ls")]
    List {
        /// Project id
        #[arg(long)]
        project: String,
        /// Resource id
        #[arg(long)]
        resource: Option<String>,
        /// Language id
        #[arg(long)]
        language: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show progress of one resource in one language
    Get(IdArg),
}

// ── i18n formats ─────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct FormatsArgs {
    #[command(subcommand)]
    pub command: FormatsCommand,
}

#[derive(Debug, Subcommand)]
pub enum FormatsCommand {
    /// List supported file formats
    #[command(alias = "ls")]
    List {
        /// Organization id (defaults to the profile's organization)
        #[arg(long)]
        organization: Option<String>,
        /// Filter by format name (e.g. `PO`)
        #[arg(long)]
        name: Option<String>,
    },
}

// ── Users ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// Show one user
    Get(IdArg),
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create or update a profile
    Init {
        /// Profile name
        #[arg(long, default_value = "default")]
        name: String,
        /// API base URL
        #[arg(long)]
        api_url: Option<String>,
        /// Store this token in the config file (plaintext)
        #[arg(long = "with-token")]
        with_token: Option<String>,
        /// Read the token from this environment variable instead
        #[arg(long)]
        token_env: Option<String>,
        /// Default organization id for list commands
        #[arg(long)]
        organization: Option<String>,
        /// Make this the default profile
        #[arg(long)]
        set_default: bool,
    },
    /// Print the effective configuration (tokens redacted)
    Show,
    /// Print the configuration file location
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}
