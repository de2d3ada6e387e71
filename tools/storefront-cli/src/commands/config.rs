//! Configuration management commands.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use storefront_commerce::Currency;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[store]");
    ctx.output.kv("name", &ctx.config.store.name);
    ctx.output.kv("title", &ctx.config.store.title);
    ctx.output.kv("currency", &ctx.config.store.currency);
    ctx.output.kv("shipping_cents", &ctx.config.store.shipping_cents.to_string());
    if let Some(ref css) = ctx.config.store.css_path {
        ctx.output.kv("css_path", css);
    }

    ctx.output.info("");
    ctx.output.info("[content]");
    ctx.output.kv("catalog_path", &ctx.config.content.catalog_path);

    ctx.output.info("");
    ctx.output.info("[payment]");
    ctx.output.kv("sessions_path", &ctx.config.payment.sessions_path);

    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level);
    ctx.output.kv("format", &ctx.config.logging.format);

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        if ctx.output.is_json() {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }

        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", config_path.display()))
            .default(false)
            .interact()?;

        if !overwrite {
            ctx.output.warn("Config init cancelled");
            return Ok(());
        }
    }

    let name = ctx
        .cwd
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("storefront")
        .to_string();

    std::fs::write(&config_path, generate_default_config(&name))?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

/// Check the loaded configuration, returning errors and warnings.
pub fn check_config(ctx: &Context) -> (Vec<String>, Vec<String>) {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();
    let config = &ctx.config;

    if config.store.name.trim().is_empty() {
        errors.push("store.name is required".to_string());
    }

    if Currency::from_code(&config.store.currency).is_none() {
        errors.push(format!("store.currency '{}' is not supported", config.store.currency));
    }

    if config.store.shipping_cents < 0 {
        errors.push("store.shipping_cents must not be negative".to_string());
    }

    if let Err(e) = config.log_level() {
        errors.push(format!("logging.level: {}", e));
    }

    if let Err(e) = config.log_format() {
        errors.push(format!("logging.format: {}", e));
    }

    let catalog = ctx.resolve_path(&config.content.catalog_path);
    if !catalog.exists() {
        errors.push(format!("content.catalog_path not found: {}", catalog.display()));
    }

    let sessions = ctx.resolve_path(&config.payment.sessions_path);
    if !sessions.exists() {
        warnings.push(format!(
            "payment.sessions_path not found: {} (only new sessions will be available)",
            sessions.display()
        ));
    }

    (errors, warnings)
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check_config(ctx);

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use crate::output::Output;
    use tempfile::TempDir;

    fn context(dir: &TempDir, config: CliConfig) -> Context {
        Context {
            config,
            config_path: None,
            output: Output::new(false, false),
            cwd: dir.path().to_path_buf(),
        }
    }

    #[test]
    fn test_check_config_reports_errors() {
        let dir = TempDir::new().unwrap();
        let mut config = CliConfig::default();
        config.store.currency = "XYZ".to_string();
        config.logging.format = "xml".to_string();

        let (errors, warnings) = check_config(&context(&dir, config));
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("XYZ"));
        assert!(errors[1].starts_with("logging.format"));
        assert!(errors[2].starts_with("content.catalog_path"));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_check_config_clean() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("catalog.json"), "{}").unwrap();
        std::fs::write(dir.path().join("sessions.json"), "{}").unwrap();

        let mut config = CliConfig::default();
        config.content.catalog_path = "catalog.json".to_string();
        config.payment.sessions_path = "sessions.json".to_string();

        let (errors, warnings) = check_config(&context(&dir, config));
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[tokio::test]
    async fn test_init_config_with_force() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir, CliConfig::default());

        init_config(true, &ctx).await.unwrap();
        let written = CliConfig::load(dir.path().join("storefront.toml").to_str().unwrap()).unwrap();
        assert_eq!(written.store.shipping_cents, 2000);
    }
}
