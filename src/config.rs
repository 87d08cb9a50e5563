use once_cell::sync::OnceCell;

use crate::theme::ThemeName;
#[cfg(any(feature = "server", test))]
use crate::theme::UnknownTheme;

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub default_theme: ThemeName,
    /// Read by the server's tracing subscriber.
    #[cfg_attr(not(feature = "server"), allow(dead_code))]
    pub log_filter: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_theme: ThemeName::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Builds a config from raw variable values. Blank values fall back to defaults.
    #[cfg(any(feature = "server", test))]
    pub fn from_vars(theme: Option<&str>, log_filter: Option<&str>) -> Result<Self, UnknownTheme> {
        let default_theme = match theme.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw.parse()?,
            None => ThemeName::default(),
        };
        let log_filter = log_filter
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
            .to_string();
        Ok(Self {
            default_theme,
            log_filter,
        })
    }

    /// Reads `DASHBOARD_THEME` and `RUST_LOG`, loading `.env` first if present.
    #[cfg(feature = "server")]
    pub fn from_env() -> Result<Self, UnknownTheme> {
        dotenvy::dotenv().ok();
        let theme = std::env::var("DASHBOARD_THEME").ok();
        let filter = std::env::var("RUST_LOG").ok();
        Self::from_vars(theme.as_deref(), filter.as_deref())
    }
}

static CONFIG: OnceCell<DashboardConfig> = OnceCell::new();

/// Installs the process-wide config. Returns false if one was already set.
#[cfg(any(feature = "server", test))]
pub fn init(cfg: DashboardConfig) -> bool {
    CONFIG.set(cfg).is_ok()
}

pub fn current() -> &'static DashboardConfig {
    CONFIG.get_or_init(DashboardConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_vars_use_defaults() {
        assert_eq!(DashboardConfig::from_vars(None, None), Ok(DashboardConfig::default()));
        assert_eq!(
            DashboardConfig::from_vars(Some("  "), Some("")),
            Ok(DashboardConfig::default())
        );
    }

    #[test]
    fn theme_and_filter_are_read() {
        let cfg = DashboardConfig::from_vars(Some("Classic"), Some("debug,dioxus=warn")).unwrap();
        assert_eq!(cfg.default_theme, ThemeName::Classic);
        assert_eq!(cfg.log_filter, "debug,dioxus=warn");
    }

    #[test]
    fn bad_theme_is_rejected() {
        let err = DashboardConfig::from_vars(Some("neon"), None).unwrap_err();
        assert_eq!(err, UnknownTheme("neon".to_string()));
    }

    #[test]
    fn current_is_stable() {
        assert!(std::ptr::eq(current(), current()));
    }
}
