use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use shell_runtime::{tx, use_shell_runtime, ShellLayout, ShellProvider};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Writing Studio" />
        <Meta name="description" content="A bilingual writing workspace." />

        <ShellEntry />
    }
}

#[component]
pub fn ShellEntry() -> impl IntoView {
    view! {
        <ShellProvider>
            <ShellLayout sidebar=Rc::new(|| Fragment::new(vec![view! { <SidebarLinks /> }.into_view()]))>
                <WelcomePage />
            </ShellLayout>
        </ShellProvider>
    }
}

#[component]
fn SidebarLinks() -> impl IntoView {
    let runtime = use_shell_runtime();
    let language = create_memo(move |_| runtime.state.with(|state| state.ui_language));

    view! {
        <ul data-ui-slot="nav-list">
            <li>{move || tx(language.get(), "项目", "Projects")}</li>
            <li>{move || tx(language.get(), "设置", "Settings")}</li>
        </ul>
    }
}

#[component]
fn WelcomePage() -> impl IntoView {
    let runtime = use_shell_runtime();
    let language = create_memo(move |_| runtime.state.with(|state| state.ui_language));

    view! {
        <section class="canonical-content">
            <h1>{move || tx(language.get(), "欢迎回来", "Welcome back")}</h1>
            <p>
                {move || {
                    tx(
                        language.get(),
                        "使用顶部栏切换主题与语言。",
                        "Use the top bar to switch theme and language.",
                    )
                }}
            </p>
        </section>
    }
}
