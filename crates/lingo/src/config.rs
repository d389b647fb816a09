//! CLI-owned configuration: TOML profiles, token resolution, and
//! translation into a ready-to-use `lingo_api::Client`.
//!
//! The library never sees these types; it receives a base URL, a token and
//! a `TransportConfig`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::ValueEnum;
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use lingo_api::{Client, DEFAULT_API_URL, TlsMode, TransportConfig};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

const DEFAULT_PROFILE: &str = "default";

// ── TOML config structs ──────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when --profile is not given.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some(DEFAULT_PROFILE.into()),
            defaults: Defaults::default(),
            profiles: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default)]
    pub insecure: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            timeout: default_timeout(),
            insecure: false,
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_timeout() -> u64 {
    30
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    /// API base URL; the public Transifex endpoint when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Plaintext token (prefer `token_env`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Name of an environment variable holding the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_env: Option<String>,

    /// Default `--organization` for list commands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub insecure: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

// ── Config file path ─────────────────────────────────────────────────

/// `--config`/`LINGO_CONFIG`, else the platform config dir.
pub fn config_path(global: &GlobalOpts) -> PathBuf {
    if let Some(ref path) = global.config {
        return path.clone();
    }
    ProjectDirs::from("dev", "lingo", "lingo").map_or_else(
        || PathBuf::from(".lingo").join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Config loading ───────────────────────────────────────────────────

fn file_figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
}

/// Load defaults, then the TOML file, then `LINGO_*` overrides.
///
/// Nested keys use a double underscore: `LINGO_DEFAULTS__OUTPUT=json`.
pub fn load_config(path: &Path) -> Result<Config, CliError> {
    let config = file_figment(path)
        .merge(Env::prefixed("LINGO_").split("__"))
        .extract()?;
    Ok(config)
}

/// The file contents only, for rewriting it without baking in env overrides.
pub fn load_config_file(path: &Path) -> Result<Config, CliError> {
    Ok(file_figment(path).extract()?)
}

pub fn save_config(path: &Path, config: &Config) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(config).map_err(|e| CliError::Output {
        message: format!("failed to serialize config: {e}"),
    })?;
    std::fs::write(path, text)?;
    Ok(())
}

// ── Profile resolution ───────────────────────────────────────────────

pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| DEFAULT_PROFILE.into())
}

/// The active profile, or an empty one when only flags/env are used.
///
/// Naming a profile explicitly that does not exist is an error.
pub fn active_profile(global: &GlobalOpts, config: &Config) -> Result<(String, Profile), CliError> {
    let name = active_profile_name(global, config);
    if let Some(profile) = config.profiles.get(&name) {
        return Ok((name, profile.clone()));
    }
    if global.profile.is_some() {
        return Err(CliError::ProfileNotFound {
            available: available_profiles(config),
            name,
        });
    }
    Ok((name, Profile::default()))
}

fn available_profiles(config: &Config) -> String {
    if config.profiles.is_empty() {
        return "(none)".into();
    }
    config
        .profiles
        .keys()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Token chain: flag/`LINGO_TOKEN`, then `token_env`, then `token`.
pub fn resolve_token(
    global: &GlobalOpts,
    profile: &Profile,
    profile_name: &str,
) -> Result<SecretString, CliError> {
    if let Some(ref token) = global.token {
        return Ok(SecretString::from(token.clone()));
    }
    if let Some(ref env_name) = profile.token_env {
        if let Ok(value) = std::env::var(env_name) {
            return Ok(SecretString::from(value));
        }
        debug!(env = %env_name, "token_env variable not set");
    }
    if let Some(ref token) = profile.token {
        return Ok(SecretString::from(token.clone()));
    }
    Err(CliError::NoCredentials {
        profile: profile_name.to_owned(),
    })
}

pub fn resolve_output(global: &GlobalOpts, config: &Config) -> Result<OutputFormat, CliError> {
    if let Some(format) = global.output {
        return Ok(format);
    }
    OutputFormat::from_str(&config.defaults.output, true).map_err(|_| CliError::Validation {
        field: "defaults.output".into(),
        reason: format!(
            "expected text, table, json, json-compact or yaml, got '{}'",
            config.defaults.output
        ),
    })
}

pub fn transport_config(global: &GlobalOpts, config: &Config, profile: &Profile) -> TransportConfig {
    let tls = if global.insecure || profile.insecure.unwrap_or(config.defaults.insecure) {
        TlsMode::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsMode::CustomCa(ca_path.clone())
    } else {
        TlsMode::System
    };
    let seconds = global
        .timeout
        .or(profile.timeout)
        .unwrap_or(config.defaults.timeout);

    TransportConfig::default()
        .with_tls(tls)
        .with_timeout(Duration::from_secs(seconds))
}

// ── Context ──────────────────────────────────────────────────────────

/// Everything a resource command needs.
pub struct Context {
    pub client: Client,
    pub output: OutputFormat,
    pub quiet: bool,
    organization: Option<String>,
}

impl Context {
    /// Resolve profile, token and transport, then build the API client.
    pub fn from_global(global: &GlobalOpts) -> Result<Self, CliError> {
        let path = config_path(global);
        let config = load_config(&path)?;
        let (profile_name, profile) = active_profile(global, &config)?;
        debug!(profile = %profile_name, config = %path.display(), "resolved profile");

        let token = resolve_token(global, &profile, &profile_name)?;
        let api_url = global
            .api_url
            .clone()
            .or_else(|| profile.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.into());
        let transport = transport_config(global, &config, &profile);
        let client = Client::new(&api_url, &token, &transport)?;

        Ok(Self {
            client,
            output: resolve_output(global, &config)?,
            quiet: global.quiet,
            organization: profile.organization,
        })
    }

    /// `--organization`, else the profile default, else empty.
    ///
    /// An empty organization is rejected by the list call itself.
    pub fn organization(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.organization.clone()).unwrap_or_default()
    }
}
