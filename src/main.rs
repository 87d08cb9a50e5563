use dioxus::prelude::*;

mod app;
mod charts;
mod components;
mod config;
mod theme;
mod utils;

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const DASHBOARD_CSS: Asset = asset!("/assets/dashboard.css");

#[cfg(feature = "server")]
fn init_tracing(filter: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init();
}

/// Prints every chart specification for one theme as pretty JSON.
#[cfg(feature = "server")]
fn export_specs(slug: Option<String>) -> anyhow::Result<()> {
    use anyhow::Context;

    let name = match slug {
        Some(raw) => raw.parse::<theme::ThemeName>()?,
        None => config::current().default_theme,
    };
    let specs = charts::data::for_theme(name).map_err(|e| e.clone())?;
    let json = serde_json::to_string_pretty(specs)
        .with_context(|| format!("serialising {name} chart specs"))?;
    println!("{json}");
    Ok(())
}

fn main() {
    #[cfg(feature = "server")]
    {
        let (cfg, bad_theme) = match config::DashboardConfig::from_env() {
            Ok(cfg) => (cfg, None),
            Err(e) => (config::DashboardConfig::default(), Some(e)),
        };
        init_tracing(&cfg.log_filter);
        if let Some(e) = bad_theme {
            dioxus::logger::tracing::warn!("[config] DASHBOARD_THEME ignored: {e}");
        }
        config::init(cfg);

        let mut args = std::env::args();
        let _bin = args.next();
        if let Some(cmd) = args.next() {
            if cmd == "export-specs" {
                if let Err(e) = export_specs(args.next()) {
                    eprintln!("export-specs: {e:#}");
                    std::process::exit(1);
                }
                return;
            }
            eprintln!("unknown command `{cmd}` (expected: export-specs [theme])");
            std::process::exit(2);
        }
    }

    let registry = charts::registry::elements();
    dioxus::logger::tracing::info!(elements = registry.len(), "[main] chart elements registered");
    dioxus::launch(app::App);
}
