//! Structural primitives for the persistent application chrome.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::cn;

fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[component]
/// Root container for the application shell.
pub fn ShellFrame(
    /// Layout-only class hook.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    /// Child content.
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=cn!("ui-shell-frame min-h-screen", layout_class)
            data-ui-primitive="true"
            data-ui-kind="shell-frame"
        >
            {children()}
        </div>
    }
}

#[component]
/// Collapsible side panel anchored to the leading edge of the viewport.
pub fn SidebarPanel(
    /// Whether the panel is expanded.
    #[prop(into)]
    open: MaybeSignal<bool>,
    /// Accessible name for the navigation landmark.
    #[prop(optional, into)]
    aria_label: MaybeSignal<String>,
    /// Panel width in CSS pixels. Falls back to the stylesheet width when absent.
    #[prop(optional)]
    width_px: Option<i32>,
    /// Child content.
    children: Children,
) -> impl IntoView {
    view! {
        <aside
            style=width_px.map(|width| format!("width: {width}px"))
            class=move || {
                cn!(
                    "ui-sidebar fixed inset-y-0 left-0 z-30 w-64 transition-transform",
                    (!open.get()).then_some("-translate-x-full"),
                )
            }
            aria-label=move || aria_label.get()
            aria-hidden=move || bool_token(!open.get())
            data-ui-primitive="true"
            data-ui-kind="sidebar"
            data-ui-open=move || bool_token(open.get())
        >
            {children()}
        </aside>
    }
}

#[component]
/// Top bar spanning the content region.
pub fn TopBar(
    /// Layout-only class hook.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    /// Child content.
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=cn!("ui-topbar sticky top-0 z-20 flex h-14 items-center", layout_class)
            data-ui-primitive="true"
            data-ui-kind="topbar"
        >
            {children()}
        </header>
    }
}

#[component]
/// Content region wrapper. The caller owns the offset class derived from shell state.
pub fn ContentRegion(
    /// Composed class string for the region, including any leading offset.
    #[prop(into)]
    region_class: Signal<String>,
    /// Inline style overriding the class-based offset once the viewport width is known.
    #[prop(optional, into)]
    region_style: MaybeSignal<Option<String>>,
    /// Child content.
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=move || region_class.get()
            style=move || region_style.get()
            data-ui-primitive="true"
            data-ui-kind="content-region"
        >
            {children()}
        </div>
    }
}

#[component]
/// Main page slot inside the content region.
pub fn PageSlot(children: Children) -> impl IntoView {
    view! {
        <main class="ui-page-slot p-6" data-ui-primitive="true" data-ui-kind="page-slot">
            {children()}
        </main>
    }
}

#[component]
/// Shared chrome button used by the sidebar and top bar controls.
pub fn ChromeButton(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=cn!("ui-chrome-button", layout_class)
            aria-label=move || aria_label.get()
            aria-pressed=move || bool_token(pressed.get())
            title=move || title.get()
            data-ui-primitive="true"
            data-ui-kind="chrome-button"
            data-ui-slot=ui_slot
            data-ui-pressed=move || bool_token(pressed.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
