use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::components::Dashboard;
use crate::config;
use crate::theme::{Theme, ThemeName};
use crate::{DASHBOARD_CSS, FAVICON};

#[derive(Debug, Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/theme/:name")]
    Themed { name: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: DASHBOARD_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        Router::<Route> {}
    }
}

#[allow(non_snake_case)]
#[component]
fn Home() -> Element {
    let theme = Theme::by_name(config::current().default_theme);
    rsx! { Dashboard { theme } }
}

#[allow(non_snake_case)]
#[component]
fn Themed(name: String) -> Element {
    match name.parse::<ThemeName>() {
        Ok(found) => rsx! { Dashboard { theme: Theme::by_name(found) } },
        Err(e) => {
            warn!("[router] {e}");
            rsx! { Missing { message: e.to_string() } }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! { Missing { message: format!("no page at /{path}") } }
}

#[allow(non_snake_case)]
#[component]
fn Missing(message: String) -> Element {
    rsx! {
        div { class: "page not-found",
            div { class: "card",
                h1 { "Page not found" }
                p { "{message}" }
                a { href: "/", "Back to the dashboard" }
                ul { class: "theme-links",
                    for name in ThemeName::ALL {
                        li { key: "{name}",
                            a { href: "/theme/{name}", "{name}" }
                        }
                    }
                }
            }
        }
    }
}
