use leptos::prelude::*;
use nationpost::Page;

use crate::web::router::use_router;

const LINKS: [(Page, &str); 4] = [
    (Page::About, "About Us"),
    (Page::About, "How It Works"),
    (Page::Dashboard, "Verification Process"),
    (Page::Upload, "Upload News"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let router = use_router();

    view! {
        <footer class="footer p-10 bg-base-200 text-base-content">
            <aside>
                <p class="text-lg font-bold">"Nation Post"</p>
                <p class="text-sm text-base-content/70 max-w-xs">
                    "Reliable news, scored for credibility and anchored with a block hash."
                </p>
            </aside>
            <nav>
                <h6 class="footer-title">"Platform"</h6>
                {LINKS
                    .into_iter()
                    .map(|(page, label)| {
                        view! {
                            <button class="link link-hover text-left" on:click=move |_| router.navigate(page)>
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </footer>
    }
}
