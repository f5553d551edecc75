//! Build-time application configuration.
//!
//! Values default to a same-origin deployment and may be overridden when the
//! WASM bundle is built (`CODEGEN_API_BASE`, `CODEGEN_MOUNT_ID`,
//! `CODEGEN_APP_TITLE`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_API_BASE: &str = "/";
const DEFAULT_MOUNT_ID: &str = "app";
const DEFAULT_APP_TITLE: &str = "代码生成器平台";

/// Application-wide settings, provided to components via context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Base address every HTTP request path is joined onto.
    pub api_base: String,
    /// Id of the DOM element the application mounts into.
    pub mount_id: String,
    /// Document title used before any route sets its own.
    pub app_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            mount_id: DEFAULT_MOUNT_ID.to_owned(),
            app_title: DEFAULT_APP_TITLE.to_owned(),
        }
    }
}

impl AppConfig {
    /// Build the configuration from compile-time environment overrides.
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("CODEGEN_API_BASE"),
            option_env!("CODEGEN_MOUNT_ID"),
            option_env!("CODEGEN_APP_TITLE"),
        )
    }

    fn from_overrides(api_base: Option<&str>, mount_id: Option<&str>, app_title: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: non_empty(api_base).map_or(defaults.api_base, normalize_base),
            mount_id: non_empty(mount_id).map_or(defaults.mount_id, |id| id.trim_start_matches('#').to_owned()),
            app_title: non_empty(app_title).map_or(defaults.app_title, str::to_owned),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Ensure the base ends with exactly one `/` so paths can be appended.
fn normalize_base(base: &str) -> String {
    format!("{}/", base.trim_end_matches('/'))
}
