//! Shell UI composition: persistent chrome around the page slot.

use leptos::*;
use system_ui::{ChromeButton, ContentRegion, PageSlot, ShellFrame, SidebarPanel, TopBar};

use crate::{
    effect_executor,
    i18n::{tx, Localized},
    layout::{content_offset_class, content_offset_style},
    model::{Theme, UiLanguage},
    reducer::ShellAction,
};

pub use crate::runtime_context::{use_shell_runtime, ShellProvider, ShellRuntimeContext};

const APP_TITLE: Localized = Localized::new("创作工作台", "Writing Studio");
const NAVIGATION_LABEL: Localized = Localized::new("主导航", "Main navigation");
const TOGGLE_SIDEBAR_LABEL: Localized = Localized::new("切换侧边栏", "Toggle sidebar");

fn theme_toggle_label(theme: Theme, language: UiLanguage) -> &'static str {
    match theme {
        Theme::Light => tx(language, "切换到深色模式", "Switch to dark mode"),
        Theme::Dark => tx(language, "切换到浅色模式", "Switch to light mode"),
    }
}

fn language_toggle_text(language: UiLanguage) -> &'static str {
    // Shows the language the button switches to.
    tx(language, "EN", "中文")
}

#[component]
fn ShellSidebar(children: Children) -> impl IntoView {
    let runtime = use_shell_runtime();
    let open = create_memo(move |_| runtime.state.with(|state| state.sidebar_open));
    let language = create_memo(move |_| runtime.state.with(|state| state.ui_language));
    let width_px = runtime.config.with_value(|config| config.sidebar_width_px);

    view! {
        <SidebarPanel
            open=open
            width_px=width_px
            aria_label=Signal::derive(move || NAVIGATION_LABEL.resolve(language.get()).to_string())
        >
            <div data-ui-slot="sidebar-header">
                <span data-ui-slot="brand">{move || APP_TITLE.resolve(language.get())}</span>
                <ChromeButton
                    ui_slot="sidebar-close"
                    layout_class="md:hidden"
                    aria_label=Signal::derive(move || {
                        TOGGLE_SIDEBAR_LABEL.resolve(language.get()).to_string()
                    })
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(ShellAction::SetSidebarOpen { open: false })
                    })
                >
                    "×"
                </ChromeButton>
            </div>
            <nav data-ui-slot="sidebar-nav">{children()}</nav>
        </SidebarPanel>
    }
}

#[component]
fn ShellTopbar() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;
    let language = create_memo(move |_| state.with(|state| state.ui_language));
    let theme = create_memo(move |_| state.with(|state| state.theme));
    let sidebar_open = create_memo(move |_| state.with(|state| state.sidebar_open));

    view! {
        <TopBar>
            <ChromeButton
                ui_slot="sidebar-toggle"
                pressed=sidebar_open
                aria_label=Signal::derive(move || {
                    TOGGLE_SIDEBAR_LABEL.resolve(language.get()).to_string()
                })
                on_click=Callback::new(move |_| runtime.dispatch_action(ShellAction::ToggleSidebar))
            >
                "☰"
            </ChromeButton>
            <span data-ui-slot="topbar-spacer" class="flex-1"></span>
            <ChromeButton
                ui_slot="language-toggle"
                aria_label=Signal::derive(move || {
                    tx(language.get(), "切换语言", "Switch language").to_string()
                })
                on_click=Callback::new(move |_| {
                    runtime.dispatch_action(ShellAction::ToggleUiLanguage)
                })
            >
                {move || language_toggle_text(language.get())}
            </ChromeButton>
            <ChromeButton
                ui_slot="theme-toggle"
                pressed=Signal::derive(move || theme.get().is_dark())
                title=Signal::derive(move || {
                    theme_toggle_label(theme.get(), language.get()).to_string()
                })
                aria_label=Signal::derive(move || {
                    theme_toggle_label(theme.get(), language.get()).to_string()
                })
                on_click=Callback::new(move |_| runtime.dispatch_action(ShellAction::ToggleTheme))
            >
                {move || if theme.get().is_dark() { "☀" } else { "☾" }}
            </ChromeButton>
        </TopBar>
    }
}

#[component]
/// Renders the sidebar region and then the content region around `children`, and keeps the
/// document root's theme marker and `lang` attribute in sync with shell state.
pub fn ShellLayout(
    /// Optional sidebar navigation content.
    #[prop(optional)]
    sidebar: Option<ChildrenFn>,
    /// Page content rendered in the main slot.
    children: Children,
) -> impl IntoView {
    let runtime = use_shell_runtime();
    let sidebar_open = create_memo(move |_| runtime.state.with(|state| state.sidebar_open));
    let content_class = Signal::derive(move || {
        runtime
            .config
            .with_value(|config| content_offset_class(sidebar_open.get(), config))
    });

    let viewport_width = create_rw_signal(platform_host_web::viewport_width_px());
    let resize_listener = window_event_listener(ev::resize, move |_| {
        viewport_width.set(platform_host_web::viewport_width_px());
    });
    on_cleanup(move || resize_listener.remove());
    let content_style = Signal::derive(move || {
        runtime.config.with_value(|config| {
            content_offset_style(sidebar_open.get(), viewport_width.get(), config)
        })
    });

    let chrome = view! {
        <ShellFrame>
            <ShellSidebar>
                {sidebar.as_ref().map(|sidebar| sidebar())}
            </ShellSidebar>
            <ContentRegion region_class=content_class region_style=content_style>
                <ShellTopbar />
                <PageSlot>{children()}</PageSlot>
            </ContentRegion>
        </ShellFrame>
    };

    effect_executor::install(runtime);

    chrome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_labels_follow_language_and_theme() {
        assert_eq!(theme_toggle_label(Theme::Light, UiLanguage::En), "Switch to dark mode");
        assert_eq!(theme_toggle_label(Theme::Dark, UiLanguage::Zh), "切换到浅色模式");
        assert_eq!(language_toggle_text(UiLanguage::Zh), "EN");
        assert_eq!(language_toggle_text(UiLanguage::En), "中文");
        assert_eq!(APP_TITLE.resolve(UiLanguage::En), "Writing Studio");
    }
}
