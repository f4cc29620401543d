use std::collections::HashMap;

use fluent_templates::{
    fluent_bundle::{FluentArgs, FluentValue},
    static_loader, Loader,
};
use unic_langid::{langid, LanguageIdentifier};

static_loader! {
    static LOCALES = {
        locales: "./locales",
        fallback_language: "uz",
        // Bidi isolation marks around placeables break Telegram link detection.
        customise: |bundle| bundle.set_use_isolating(false),
    };
}

/// The bot speaks Uzbek only.
pub const UZ: LanguageIdentifier = langid!("uz");

/// Returns the UI string for `key`, or the key itself when it is missing.
pub fn t(key: &str) -> String {
    LOCALES.lookup(&UZ, key).unwrap_or_else(|| key.to_string())
}

/// Returns the UI string for `key` with `args` interpolated verbatim.
pub fn t_args(key: &str, args: &FluentArgs) -> String {
    let args_map: HashMap<String, FluentValue> = args.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();

    LOCALES
        .lookup_with_args(&UZ, key, &args_map)
        .unwrap_or_else(|| key.to_string())
}

/// Shorthand for a message with a single string argument.
pub fn t_with(key: &str, name: &'static str, value: &str) -> String {
    let mut args = FluentArgs::new();
    args.set(name, value.to_string());
    t_args(key, &args)
}
