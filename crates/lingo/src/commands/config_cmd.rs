//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

const REDACTED: &str = "********";

/// Copy of the config safe to print.
fn redacted(mut cfg: Config) -> Config {
    for profile in cfg.profiles.values_mut() {
        if profile.token.is_some() {
            profile.token = Some(REDACTED.into());
        }
    }
    cfg
}

fn render(cfg: &Config, format: Option<OutputFormat>) -> Result<String, CliError> {
    match format {
        Some(f @ (OutputFormat::Json | OutputFormat::JsonCompact | OutputFormat::Yaml)) => {
            output::render_single(f, cfg)
        }
        _ => toml::to_string_pretty(cfg).map_err(|e| CliError::Output {
            message: e.to_string(),
        }),
    }
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let path = config::config_path(global);
    match args.command {
        ConfigCommand::Init {
            name,
            api_url,
            with_token,
            token_env,
            organization,
            set_default,
        } => {
            let mut cfg = config::load_config_file(&path)?;
            let profile = cfg.profiles.entry(name.clone()).or_insert_with(Profile::default);
            if api_url.is_some() {
                profile.api_url = api_url;
            }
            if with_token.is_some() {
                profile.token = with_token;
            }
            if token_env.is_some() {
                profile.token_env = token_env;
            }
            if organization.is_some() {
                profile.organization = organization;
            }
            if set_default || cfg.profiles.len() == 1 {
                cfg.default_profile = Some(name.clone());
            }
            config::save_config(&path, &cfg)?;
            if !global.quiet {
                eprintln!("Profile '{name}' saved to {}", path.display());
            }
            Ok(())
        }
        ConfigCommand::Show => {
            let cfg = redacted(config::load_config(&path)?);
            let out = render(&cfg, global.output)?;
            output::print_output(out.trim_end(), global.quiet);
            Ok(())
        }
        ConfigCommand::Path => {
            output::print_output(&path.display().to_string(), global.quiet);
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_redacted() {
        let mut cfg = Config::default();
        cfg.profiles.insert(
            "work".into(),
            Profile {
                token: Some("1/secret".into()),
                token_env: Some("TX_TOKEN".into()),
                ..Profile::default()
            },
        );
        let out = render(&redacted(cfg), None).unwrap();
        assert!(!out.contains("1/secret"));
        assert!(out.contains(REDACTED));
        assert!(out.contains("TX_TOKEN"));
    }
}
