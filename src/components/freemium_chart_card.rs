use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use super::chart_card::{ChartHeading, Heading, CHART_REGION_HEIGHT};
use crate::theme::Palette;

pub const UPGRADE_PROMPT: &str = "Upgrade to Pro Plan!\n\n✨ Unlock full data insights\n📊 Advanced analytics\n🔄 Real-time updates\n💎 Premium features";

/// Shows the upgrade message in a blocking dialog.
pub fn show_upgrade_prompt() {
    info!("[freemium] upgrade prompt requested");
    let eval = document::eval(&alert_script(UPGRADE_PROMPT));
    spawn(async move {
        if let Err(e) = eval.await {
            warn!("[freemium] upgrade prompt failed: {e}");
        }
    });
}

/// `alert(...)` call with `message` as an escaped JS string literal.
fn alert_script(message: &str) -> String {
    format!("alert({})", serde_json::Value::from(message))
}

/// Chart card for plan-limited data. The locked region itself is painted by
/// the chart's freemium plugin.
#[allow(non_snake_case)]
#[component]
pub fn FreemiumChartCard(
    heading: Heading,
    palette: Palette,
    #[props(default = 1)] columns: u8,
    on_upgrade: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let grid_style = if columns > 1 {
        format!("grid-column:span {columns}")
    } else {
        String::new()
    };
    let cta_style = format!("background:{}", palette.gradient());
    rsx! {
        div { class: "card chart-card freemium-card", style: "{grid_style}",
            div { class: "freemium-header",
                ChartHeading { heading, palette: palette.clone() }
                button { class: "upgrade-cta", r#type: "button", style: "{cta_style}",
                    onclick: move |evt| on_upgrade.call(evt),
                    "⚡ Upgrade"
                }
            }
            div { class: "chart-region", style: "height:{CHART_REGION_HEIGHT}px", {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Element {
        rsx! {
            FreemiumChartCard {
                heading: Heading::new("Analytics Overview", Some("Free plan: Limited data view")),
                palette: Palette::cool(),
                columns: 3,
                on_upgrade: move |_| {},
                span { "chart" }
            }
        }
    }

    #[test]
    fn renders_call_to_action_with_brand_gradient() {
        let mut dom = VirtualDom::new(card);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("⚡ Upgrade"));
        assert!(html.contains("linear-gradient(135deg, #2563EB 0%, #06B6D4 100%)"));
        assert!(html.contains("Free plan: Limited data view"));
        assert!(html.contains("grid-column:span 3"));
    }

    #[test]
    fn alert_script_escapes_the_message() {
        assert_eq!(alert_script("a \"b\"\nc"), "alert(\"a \\\"b\\\"\\nc\")");
        assert!(alert_script(UPGRADE_PROMPT).starts_with("alert(\"Upgrade to Pro Plan!\\n\\n"));
    }

    #[test]
    fn prompt_lists_pro_features() {
        assert!(UPGRADE_PROMPT.starts_with("Upgrade to Pro Plan!"));
        assert_eq!(UPGRADE_PROMPT.lines().filter(|l| !l.is_empty()).count(), 5);
    }
}
