//! Path and setting resolution: flags and env vars first, then the config
//! file, then XDG defaults.

use std::path::{Path, PathBuf};

use tracing::debug;

use fincontrol_core::Locale;

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, xdg_data_dir, FincontrolConfig};
use crate::errors::CliError;

/// Load the config file.
///
/// An explicitly requested file (`--config` or `FINCONTROL_CONFIG`) must
/// exist. A missing default file just means defaults.
pub fn resolve_config(cli: &Cli) -> anyhow::Result<FincontrolConfig> {
    if let Some(path) = cli.config.as_deref().filter(|p| !p.trim().is_empty()) {
        let path = Path::new(path);
        if !path.exists() {
            return Err(CliError::not_found(
                format!("Config file not found: {}", path.display()),
                "Hint: Check --config or FINCONTROL_CONFIG",
            )
            .into());
        }
        return read_config(path);
    }

    let path = default_config_path()?;
    if !path.exists() {
        debug!(path = %path.display(), "no config file; using defaults");
        return Ok(FincontrolConfig::default());
    }
    read_config(&path)
}

/// Resolve the data directory.
pub fn resolve_data_dir(cli: &Cli, config: &FincontrolConfig) -> anyhow::Result<PathBuf> {
    if let Some(dir) = cli.data_dir.as_deref().filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dir) = config.storage.data_dir.as_deref() {
        return Ok(PathBuf::from(dir));
    }
    xdg_data_dir()
}

/// Resolve the display locale.
pub fn resolve_locale(cli: &Cli, config: &FincontrolConfig) -> anyhow::Result<Locale> {
    let Some(tag) = cli.locale.as_deref().or(config.display.locale.as_deref()) else {
        return Ok(Locale::default());
    };
    tag.parse::<Locale>()
        .map_err(|e| CliError::invalid_input(e.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["fincontrol"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn config_with(data_dir: Option<&str>, locale: Option<&str>) -> FincontrolConfig {
        let mut config = FincontrolConfig::default();
        config.storage.data_dir = data_dir.map(str::to_string);
        config.display.locale = locale.map(str::to_string);
        config
    }

    #[test]
    fn test_flag_beats_config_data_dir() {
        let config = config_with(Some("/from/config"), None);
        let dir = resolve_data_dir(&cli(&["--data-dir", "/from/flag", "summary"]), &config).unwrap();
        assert_eq!(dir, PathBuf::from("/from/flag"));
    }

    #[test]
    fn test_config_data_dir_used_without_flag() {
        let config = config_with(Some("/from/config"), None);
        let mut parsed = cli(&["summary"]);
        parsed.data_dir = None;
        let dir = resolve_data_dir(&parsed, &config).unwrap();
        assert_eq!(dir, PathBuf::from("/from/config"));
    }

    #[test]
    fn test_locale_precedence() {
        let config = config_with(None, Some("en-US"));
        let from_config = resolve_locale(&cli(&["summary"]), &config).unwrap();
        assert_eq!(from_config, Locale::EnUs);

        let from_flag = resolve_locale(&cli(&["--locale", "pt-BR", "summary"]), &config).unwrap();
        assert_eq!(from_flag, Locale::PtBr);
    }

    #[test]
    fn test_locale_defaults_to_pt_br() {
        let locale = resolve_locale(&cli(&["summary"]), &FincontrolConfig::default()).unwrap();
        assert_eq!(locale, Locale::PtBr);
    }

    #[test]
    fn test_bad_locale_is_invalid_input() {
        let err = resolve_locale(&cli(&["--locale", "fr-FR", "summary"]), &FincontrolConfig::default())
            .unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_missing_explicit_config_is_not_found() {
        let mut parsed = cli(&["summary"]);
        parsed.config = Some("/definitely/not/here/config.toml".to_string());
        let err = resolve_config(&parsed).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NotFound { .. })
        ));
    }
}
