use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use nationpost::{NavEvent, Page, Theme};

use crate::auth::use_auth;
use crate::theme::use_theme;
use crate::web::router::use_router;

const NAV_ITEMS: [(Page, &str); 5] = [
    (Page::Home, "Home"),
    (Page::Dashboard, "Verify News"),
    (Page::Upload, "Upload News"),
    (Page::BlockVerify, "Block Verify"),
    (Page::About, "About"),
];

#[component]
pub fn Header() -> impl IntoView {
    let router = use_router();
    let auth = use_auth();
    let theme = use_theme();

    let (query, set_query) = signal(router.search_query());

    let on_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        router.dispatch(NavEvent::Search(query.get_untracked()));
    };

    let on_logout = move |_| auth.logout();

    view! {
        <header class="navbar bg-base-100 border-b border-base-300 sticky top-0 z-40 px-4">
            <div class="flex-1 gap-6">
                <button class="text-xl font-bold" on:click=move |_| router.navigate(Page::Home)>
                    "Nation Post"
                </button>
                <nav class="hidden md:flex gap-1">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(page, label)| {
                            view! {
                                <button
                                    class="btn btn-ghost btn-sm"
                                    class:btn-active=move || router.page() == page
                                    on:click=move |_| router.navigate(page)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>

            <div class="flex-none gap-2">
                <form on:submit=on_search>
                    <input
                        type="search"
                        placeholder="Search news..."
                        class="input input-bordered input-sm w-40 md:w-64"
                        prop:value=query
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                </form>

                <button
                    class="btn btn-ghost btn-sm"
                    title="Toggle theme"
                    on:click=move |_| theme.toggle()
                >
                    {move || match theme.theme() {
                        Theme::Light => "Dark",
                        Theme::Dark => "Light",
                    }}
                </button>

                {move || match auth.session() {
                    Some(session) => view! {
                        <div class="flex items-center gap-2">
                            <button class="btn btn-ghost btn-sm" on:click=move |_| router.navigate(Page::Profile)>
                                {session.avatar.clone().map(|src| view! {
                                    <img src=src class="w-6 h-6 rounded-full" alt="" />
                                })}
                                {session.name.clone()}
                            </button>
                            <button class="btn btn-outline btn-sm" on:click=on_logout>"Sign Out"</button>
                        </div>
                    }
                        .into_any(),
                    None => view! {
                        <div class="flex items-center gap-2">
                            <button class="btn btn-ghost btn-sm" on:click=move |_| router.navigate(Page::Login)>
                                "Sign In"
                            </button>
                            <button class="btn btn-primary btn-sm" on:click=move |_| router.navigate(Page::Signup)>
                                "Sign Up"
                            </button>
                        </div>
                    }
                        .into_any(),
                }}
            </div>
        </header>
    }
}
