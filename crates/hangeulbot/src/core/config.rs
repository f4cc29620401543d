//! Configuration read once from the environment (and `.env`, loaded in `main`).

use log::LevelFilter;
use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: app.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "app.log".to_string()));

/// Log level for console and file output
/// Read from LOG_LEVEL environment variable (error, warn, info, debug, trace)
/// Default: info
pub static LOG_LEVEL: Lazy<LevelFilter> = Lazy::new(|| parse_log_level(env::var("LOG_LEVEL").ok().as_deref()));

pub fn parse_log_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(LevelFilter::Info)
}

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Custom Bot API server (e.g. a local telegram-bot-api instance)
pub static BOT_API_URL: Lazy<Option<String>> = Lazy::new(|| non_empty_var("BOT_API_URL"));

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Admin configuration
pub mod admin {
    use once_cell::sync::Lazy;
    use std::env;

    /// Chat that receives premium payment checks
    /// Read from ADMIN_ID, falling back to ADMIN_USER_ID
    /// Defaults to 0 if not set (checks are not forwarded)
    pub static ADMIN_ID: Lazy<i64> = Lazy::new(|| {
        env::var("ADMIN_ID")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .or_else(|| env::var("ADMIN_USER_ID").ok().and_then(|s| s.trim().parse().ok()))
            .unwrap_or(0)
    });
}

/// Outbound links shown to users. Interpolated as-is, not validated.
pub mod links {
    use once_cell::sync::Lazy;
    use std::env;

    pub static TOPIK_LINK: Lazy<String> = Lazy::new(|| env::var("TOPIK_LINK").unwrap_or_default());

    pub static TOPIK2_LINK: Lazy<String> = Lazy::new(|| env::var("TOPIK2_LINK").unwrap_or_default());

    /// Invite link of the premium group, sent after a check is accepted
    pub static PREMIUM_LINK: Lazy<String> = Lazy::new(|| env::var("PREMIUM_LINK").unwrap_or_default());

    /// Snapshot of the configured links for the router
    pub fn current() -> hangeulcore::Links {
        hangeulcore::Links {
            topik1: TOPIK_LINK.clone(),
            topik2: TOPIK2_LINK.clone(),
            premium_group: PREMIUM_LINK.clone(),
        }
    }
}

/// Webhook server configuration
pub mod webhook {
    use once_cell::sync::Lazy;
    use std::env;

    pub const DEFAULT_PATH: &str = "/webhook";

    /// Public webhook URL
    /// Read from WEBHOOK_URL, or derived from RENDER_EXTERNAL_HOSTNAME as
    /// `https://{host}/webhook`
    pub static WEBHOOK_URL: Lazy<Option<String>> = Lazy::new(|| {
        resolve_url(
            super::non_empty_var("WEBHOOK_URL"),
            super::non_empty_var("RENDER_EXTERNAL_HOSTNAME").as_deref(),
        )
    });

    /// Interface the webhook server binds to
    pub static WEBAPP_HOST: Lazy<String> =
        Lazy::new(|| env::var("WEBAPP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()));

    /// Port the webhook server binds to
    /// Read from PORT environment variable
    /// Default: 8000
    pub static PORT: Lazy<u16> = Lazy::new(|| {
        env::var("PORT")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(8000)
    });

    pub fn resolve_url(explicit: Option<String>, external_host: Option<&str>) -> Option<String> {
        explicit.or_else(|| external_host.map(|host| format!("https://{}{}", host, DEFAULT_PATH)))
    }
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API calls (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}
