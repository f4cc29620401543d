//! Logging initialization and startup diagnostics
//!
//! This module provides:
//! - Logger initialization (console + appended file)
//! - Configuration check logged at startup

use anyhow::Result;
use simplelog::*;
use std::fs::OpenOptions;

use crate::core::config;

/// Crates whose debug output drowns the bot's own lines
const NOISY_TARGETS: [&str; 4] = ["hyper", "reqwest", "rustls", "h2"];

fn logger_config() -> simplelog::Config {
    let mut builder = ConfigBuilder::new();
    for target in NOISY_TARGETS {
        builder.add_filter_ignore_str(target);
    }
    builder.set_time_format_rfc3339().build()
}

/// Logs to the console and appends to `log_file_path`, so restarts keep
/// earlier history.
pub fn init_logger(log_file_path: &str, level: LevelFilter) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .map_err(|e| anyhow::anyhow!("Failed to open log file {}: {}", log_file_path, e))?;

    CombinedLogger::init(vec![
        TermLogger::new(level, logger_config(), TerminalMode::Mixed, ColorChoice::Auto),
        WriteLogger::new(level, logger_config(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs which settings are configured. Missing values only produce warnings;
/// the bot still starts and interpolates empty links.
pub fn log_bot_configuration() {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("⚙️  Bot Configuration Check");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if config::BOT_TOKEN.is_empty() {
        log::error!("❌ BOT_TOKEN: not set");
    } else {
        log::info!("✅ BOT_TOKEN: set");
    }

    let admin = *config::admin::ADMIN_ID;
    if admin == 0 {
        log::warn!("⚠️  ADMIN_ID: not set, premium checks will not be forwarded");
    } else {
        log::info!("✅ ADMIN_ID: {}", admin);
    }

    for (name, value) in [
        ("TOPIK_LINK", config::links::TOPIK_LINK.as_str()),
        ("TOPIK2_LINK", config::links::TOPIK2_LINK.as_str()),
        ("PREMIUM_LINK", config::links::PREMIUM_LINK.as_str()),
    ] {
        if value.is_empty() {
            log::warn!("⚠️  {}: not set", name);
        } else {
            log::info!("✅ {}: {}", name, value);
        }
    }

    match config::webhook::WEBHOOK_URL.as_deref() {
        Some(url) => log::info!("✅ Webhook URL: {}", url),
        None => log::info!("ℹ️  Webhook URL: not set, long polling will be used"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_init_logger_keeps_existing_lines() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "previous run").unwrap();
        let path = temp_file.path().to_str().unwrap();

        // A second global logger cannot be installed, so either outcome is fine;
        // the earlier content has to survive.
        let _ = init_logger(path, LevelFilter::Info);
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("previous run\n"));
    }

    #[test]
    fn test_init_logger_rejects_bad_path() {
        let result = init_logger("/nonexistent-dir/hangeulbot/app.log", LevelFilter::Info);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_bot_configuration_runs() {
        log_bot_configuration();
    }
}
