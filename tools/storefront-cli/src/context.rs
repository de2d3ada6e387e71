//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront::data::{FixtureContent, InMemoryPayments, StaticIdentity};
use storefront::Storefront;
use storefront_commerce::identity::Shopper;
use storefront_observability::{LogLevel, RequestId, StructuredLogger};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(ref path) = config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Directory that relative paths in the config are taken from: the
    /// config file's directory if one was loaded, else the working directory.
    pub fn base_dir(&self) -> PathBuf {
        match self.config_path.as_deref().and_then(Path::parent) {
            Some(dir) if !dir.as_os_str().is_empty() => self.cwd.join(dir),
            _ => self.cwd.clone(),
        }
    }

    /// Resolve a configured path against [`base_dir`](Self::base_dir).
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.base_dir().join(path)
        }
    }

    /// Logger for one command run. `--verbose` lowers the level to debug.
    pub fn logger(&self) -> Result<StructuredLogger> {
        let mut level = self.config.log_level()?;
        if self.output.is_verbose() && level > LogLevel::Debug {
            level = LogLevel::Debug;
        }

        Ok(StructuredLogger::new(RequestId::generate())
            .with_component(self.config.store.name.clone())
            .with_min_level(level)
            .with_format(self.config.log_format()?))
    }

    /// Build a storefront session from the configured fixtures, with the
    /// catalog loaded.
    pub async fn storefront(&self, shopper: Shopper) -> Result<Storefront> {
        let config = self.config.to_storefront_config()?;

        let catalog_path = self.resolve_path(&self.config.content.catalog_path);
        let content = FixtureContent::from_path(&catalog_path, config.currency)
            .with_context(|| format!("Failed to load catalog: {}", catalog_path.display()))?;

        let sessions_path = self.resolve_path(&self.config.payment.sessions_path);
        let payments = if sessions_path.exists() {
            InMemoryPayments::from_path(&sessions_path).with_context(|| {
                format!("Failed to load payment sessions: {}", sessions_path.display())
            })?
        } else {
            self.output.debug(&format!(
                "No payment sessions at {}, starting empty",
                sessions_path.display()
            ));
            InMemoryPayments::new()
        };

        let mut storefront = Storefront::new(
            config,
            self.logger()?,
            Box::new(content),
            Box::new(payments),
            Box::new(StaticIdentity::new(shopper)),
        );
        storefront.load_catalog().await?;
        Ok(storefront)
    }
}
