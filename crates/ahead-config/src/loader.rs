// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./ahead.toml` > `~/.config/ahead/ahead.toml` > `/etc/ahead/ahead.toml`
//! with environment variable overrides via the `AHEAD_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::AheadConfig;

/// System-wide config file location.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/ahead/ahead.toml";

/// Local config file name, resolved against the working directory.
pub const LOCAL_CONFIG_FILE: &str = "ahead.toml";

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/ahead/ahead.toml` (system-wide)
/// 3. `~/.config/ahead/ahead.toml` (user XDG config)
/// 4. `./ahead.toml` (local directory)
/// 5. `OPENAI_API_KEY` (conventional provider variable)
/// 6. `AHEAD_*` environment variables
pub fn load_config() -> Result<AheadConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<AheadConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AheadConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<AheadConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AheadConfig::default()))
        .merge(Toml::file(path))
        .merge(provider_key_env())
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(AheadConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(provider_key_env())
        .merge(env_provider())
}

/// Path of the per-user config file, if the platform has a config dir.
pub fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|d| d.join("ahead").join(LOCAL_CONFIG_FILE))
}

/// Maps the conventional `OPENAI_API_KEY` variable onto `openai.api_key`.
///
/// Merged before [`env_provider`] so `AHEAD_OPENAI_API_KEY` wins when both are set.
fn provider_key_env() -> Env {
    Env::raw()
        .only(&["OPENAI_API_KEY"])
        .map(|_| "openai.api_key".into())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `AHEAD_OPENAI_API_KEY` must map to `openai.api_key`, not
/// `openai.api.key`.
fn env_provider() -> Env {
    Env::prefixed("AHEAD_").map(|key| {
        // Lowercased name with prefix stripped, e.g. "openai_timeout_secs".
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("server_", "server.", 1)
            .replacen("openai_", "openai.", 1)
            .replacen("limits_", "limits.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_env_maps_to_sections() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("AHEAD_SERVER_PORT", "9000");
            jail.set_env("AHEAD_OPENAI_TIMEOUT_SECS", "30");
            jail.set_env("AHEAD_LIMITS_MAX_FIELD_BYTES", "512");

            let config: AheadConfig = Figment::new()
                .merge(Serialized::defaults(AheadConfig::default()))
                .merge(env_provider())
                .extract()?;

            assert_eq!(config.server.port, 9000);
            assert_eq!(config.openai.timeout_secs, 30);
            assert_eq!(config.limits.max_field_bytes, 512);
            Ok(())
        });
    }

    #[test]
    fn conventional_key_variable_is_honored() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("OPENAI_API_KEY", "sk-conventional");

            let config: AheadConfig = Figment::new()
                .merge(Serialized::defaults(AheadConfig::default()))
                .merge(provider_key_env())
                .merge(env_provider())
                .extract()?;

            assert_eq!(config.openai.api_key.as_deref(), Some("sk-conventional"));
            Ok(())
        });
    }

    #[test]
    fn prefixed_key_beats_conventional_key() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("OPENAI_API_KEY", "sk-conventional");
            jail.set_env("AHEAD_OPENAI_API_KEY", "sk-prefixed");

            let config: AheadConfig = Figment::new()
                .merge(Serialized::defaults(AheadConfig::default()))
                .merge(provider_key_env())
                .merge(env_provider())
                .extract()?;

            assert_eq!(config.openai.api_key.as_deref(), Some("sk-prefixed"));
            Ok(())
        });
    }

    #[test]
    fn local_file_is_read_from_working_directory() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                LOCAL_CONFIG_FILE,
                r#"
[openai]
model = "gpt-4o"
"#,
            )?;

            let config: AheadConfig = Figment::new()
                .merge(Serialized::defaults(AheadConfig::default()))
                .merge(Toml::file(LOCAL_CONFIG_FILE))
                .extract()?;

            assert_eq!(config.openai.model, "gpt-4o");
            Ok(())
        });
    }
}
