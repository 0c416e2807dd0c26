use leptos::prelude::*;
use nationpost::Page;

use crate::web::router::use_router;

const FEATURES: [(&str, &str); 4] = [
    (
        "AI Verification",
        "Every headline is scored for reliability by a trained credibility model.",
    ),
    (
        "Blockchain Ledger",
        "Published articles are anchored with a block hash so tampering is detectable.",
    ),
    (
        "Community Uploads",
        "Readers can submit stories, which are scored before they reach the feed.",
    ),
    (
        "Transparent Scores",
        "Reliability scores and their sources are shown alongside every article.",
    ),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    let router = use_router();

    view! {
        <div class="max-w-5xl mx-auto px-4 py-12 space-y-10">
            <section class="text-center space-y-3">
                <h1 class="text-4xl font-bold">"About Nation Post"</h1>
                <p class="text-lg text-base-content/70 max-w-2xl mx-auto">
                    "Nation Post combines AI-driven fact checking with a tamper-evident ledger to fight misinformation."
                </p>
            </section>

            <section class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {FEATURES
                    .into_iter()
                    .map(|(title, body)| view! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h2 class="card-title">{title}</h2>
                                <p>{body}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </section>

            <section class="text-center">
                <button class="btn btn-primary" on:click=move |_| router.navigate(Page::Dashboard)>
                    "Start verifying"
                </button>
            </section>
        </div>
    }
}
