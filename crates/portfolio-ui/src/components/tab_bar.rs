//! Catalog Tab Bar
//!
//! ARIA tablist with one button per catalog tab. The Scenes tab swaps to a
//! shorter label on narrow screens via CSS.

use dioxus::prelude::*;
use portfolio_core::CatalogTab;

/// Id of the panel the tabs control
pub const PROJECTS_PANEL_ID: &str = "projects-panel";

/// CSS class for a tab button
pub fn tab_class(tab: CatalogTab, active: CatalogTab) -> String {
    if tab == active {
        format!("{} active", tab.class())
    } else {
        tab.class().to_string()
    }
}

/// Properties for the TabBar component
#[derive(Clone, PartialEq, Props)]
pub struct TabBarProps {
    /// Currently active tab
    pub active: CatalogTab,
    /// Handler called when a tab is selected
    pub on_select: EventHandler<CatalogTab>,
}

/// Row of catalog tabs
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TabBar {
///         active: state.tab(),
///         on_select: move |tab| dispatch(ViewAction::SelectTab(tab)),
///     }
/// }
/// ```
#[component]
pub fn TabBar(props: TabBarProps) -> Element {
    rsx! {
        div {
            class: "tabs",
            role: "tablist",
            "aria-label": "Project categories",
            for tab in CatalogTab::ALL {
                {
                    let is_active = tab == props.active;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{tab.class()}",
                            class: tab_class(tab, props.active),
                            role: "tab",
                            "aria-selected": if is_active { "true" } else { "false" },
                            "aria-controls": PROJECTS_PANEL_ID,
                            onclick: move |_| on_select.call(tab),
                            if tab.label() == tab.short_label() {
                                "{tab.label()}"
                            } else {
                                span { class: "tab-text-full", "{tab.label()}" }
                                span { class: "tab-text-mobile", "{tab.short_label()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
