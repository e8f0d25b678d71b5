//! Run settings: CLI flags layered over the config file.

use std::path::PathBuf;

use super::error::ConfigError;
use super::types::Config;
use crate::Cli;
use crate::ignore::IgnoreFilter;

#[derive(Debug, Clone)]
pub struct Settings {
    pub root: PathBuf,
    pub ignore: IgnoreFilter,
    pub fix_list: Option<PathBuf>,
    pub allow_obscurity: bool,
}

impl Settings {
    /// Merge `cli` over `config`.
    ///
    /// `--ignore` names are added to the config list, `--fix-list` replaces
    /// the configured path, `--allow-obscurity` can only switch the policy on.
    pub fn merge(cli: &Cli, config: Config) -> Self {
        let ignore = IgnoreFilter::from_spec(cli.ignore.as_deref()).with_names(config.ignore);
        Self {
            root: cli.path.clone(),
            ignore,
            fix_list: cli.fix_list.clone().or(config.fix_list),
            allow_obscurity: cli.allow_obscurity || config.allow_obscurity,
        }
    }

    /// Load the config file named by `--config` (or the default one) and merge.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let config = Config::load(cli.config.as_deref())?;
        Ok(Self::merge(cli, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["checkperms"];
        full.extend(args);
        Cli::parse_from(full)
    }

    #[test]
    fn test_merge_cli_only() {
        let settings = Settings::merge(
            &cli(&["--ignore", "a,b", "--fix-list", "/tmp/f.txt", "/nfs"]),
            Config::default(),
        );
        assert_eq!(settings.root, PathBuf::from("/nfs"));
        assert!(settings.ignore.is_ignored("a"));
        assert!(settings.ignore.is_ignored("b"));
        assert_eq!(settings.fix_list, Some(PathBuf::from("/tmp/f.txt")));
        assert!(!settings.allow_obscurity);
    }

    #[test]
    fn test_merge_config_fills_gaps() {
        let config = Config {
            ignore: vec!["scratch".to_string()],
            fix_list: Some(PathBuf::from("/var/fix.sh")),
            allow_obscurity: true,
        };
        let settings = Settings::merge(&cli(&["--ignore", "a", "/nfs"]), config);
        assert!(settings.ignore.is_ignored("a"));
        assert!(settings.ignore.is_ignored("scratch"));
        assert_eq!(settings.fix_list, Some(PathBuf::from("/var/fix.sh")));
        assert!(settings.allow_obscurity);
    }

    #[test]
    fn test_cli_fix_list_overrides_config() {
        let config = Config {
            fix_list: Some(PathBuf::from("/var/fix.sh")),
            ..Config::default()
        };
        let settings = Settings::merge(&cli(&["--fix-list", "/tmp/mine.sh", "/nfs"]), config);
        assert_eq!(settings.fix_list, Some(PathBuf::from("/tmp/mine.sh")));
    }

    #[test]
    fn test_resolve_explicit_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("c.yaml");
        fs::write(&path, "allow_obscurity: true\n").unwrap();

        let settings =
            Settings::resolve(&cli(&["--config", path.to_str().unwrap(), "/nfs"])).unwrap();
        assert!(settings.allow_obscurity);
    }

    #[test]
    fn test_resolve_missing_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.yaml");
        let err = Settings::resolve(&cli(&["--config", path.to_str().unwrap(), "/nfs"]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Missing(_)));
    }
}
