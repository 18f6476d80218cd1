//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "meeting-protocol";
const PROJECT_FILES: [&str; 2] = ["protocol.toml", ".protocol.toml"];

/// Prefix of environment overrides, e.g. `MEETING_PROTOCOL_RENDER__CONCURRENCY=4`
pub const ENV_PREFIX: &str = "MEETING_PROTOCOL_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `MEETING_PROTOCOL_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./protocol.toml` or `./.protocol.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/meeting-protocol/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/meeting-protocol/config.toml if set,
    /// otherwise falls back to ~/.config/meeting-protocol/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] Environment: {}*", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./protocol.toml or ./.protocol.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use protocol_domain::Locale;

    fn isolate(jail: &mut Jail) {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(!config.company.is_configured());
        assert_eq!(config.qr.width, 160);
        assert_eq!(config.render.concurrency, 8);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("meeting-protocol"));
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(
                "protocol.toml",
                r#"
[company]
name = "KSK Samal"

[render]
concurrency = 2
"#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.company.name, "KSK Samal");
            assert_eq!(config.render.concurrency, 2);
            assert_eq!(config.qr.width, 160);
            Ok(())
        });
    }

    #[test]
    fn test_hidden_project_file_is_found() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(".protocol.toml", "[document]\nlocale = \"kk\"\n")?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.document.locale, Locale::Kk);
            Ok(())
        });
    }

    #[test]
    fn test_priority_order() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_dir("xdg/meeting-protocol")?;
            jail.create_file(
                "xdg/meeting-protocol/config.toml",
                "[qr]\nwidth = 100\nmargin = 3\n",
            )?;
            jail.create_file("protocol.toml", "[qr]\nwidth = 200\n")?;
            jail.create_file("custom.toml", "[qr]\nwidth = 300\n")?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.qr.width, 200);
            assert_eq!(config.qr.margin, 3);

            let explicit = PathBuf::from("custom.toml");
            let config = ConfigLoader::load(Some(explicit.as_path())).map_err(|e| *e)?;
            assert_eq!(config.qr.width, 300);
            assert_eq!(config.qr.margin, 3);

            jail.set_env("MEETING_PROTOCOL_QR__WIDTH", 400);
            let config = ConfigLoader::load(Some(explicit.as_path())).map_err(|e| *e)?;
            assert_eq!(config.qr.width, 400);
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("protocol.toml", "[render]\nconcurrency = \"many\"\n")?;

            assert!(ConfigLoader::load(None).is_err());
            Ok(())
        });
    }
}
