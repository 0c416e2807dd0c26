use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use nationpost::verification::{
    VerificationHistory, VerificationResult, VerificationStatus, submit_verification,
};

use super::reliability::score_text_class;
use crate::api::use_services;
use crate::web::router::use_router;

#[component]
pub fn VerificationPage() -> impl IntoView {
    let router = use_router();
    let services = use_services();

    let (headline, set_headline) = signal(String::new());
    let (context, set_context) = signal(String::new());
    let (url, set_url) = signal(String::new());
    let (verifying, set_verifying) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let result = RwSignal::new(Option::<VerificationResult>::None);
    let history = RwSignal::new(VerificationHistory::seeded());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let headline = headline.get_untracked();
        if headline.trim().is_empty() {
            return;
        }
        let context = context.get_untracked();
        let url = url.get_untracked();
        let ticket = router.ticket();
        let api = services.api();

        set_verifying.set(true);
        set_error.set(None);
        spawn_local(async move {
            let outcome = submit_verification(&*api, &headline, &context, Some(url.as_str())).await;
            // 用户已离开本页时丢弃结果
            if !router.is_current(ticket) {
                return;
            }
            match outcome {
                Ok(verified) => {
                    history.update(|h| {
                        h.record(&headline, &verified);
                    });
                    result.set(Some(verified));
                }
                Err(e) => {
                    tracing::error!(error = %e, "verification failed");
                    set_error.set(Some(e.message().to_string()));
                    result.set(None);
                }
            }
            set_verifying.set(false);
        });
    };

    view! {
        <div class="max-w-5xl mx-auto px-4 py-8 space-y-8">
            <div>
                <h1 class="text-3xl font-semibold">"News Verification Dashboard"</h1>
                <p class="text-base-content/70">
                    "Verify the reliability of news headlines using our AI-powered verification system"
                </p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <form class="card bg-base-100 shadow" on:submit=on_submit>
                    <div class="card-body space-y-3">
                        <h2 class="card-title">"Verify News"</h2>
                        <label class="form-control">
                            <span class="label-text">"Headline *"</span>
                            <input
                                class="input input-bordered"
                                placeholder="Enter the news headline to verify..."
                                prop:value=headline
                                on:input=move |ev| set_headline.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form-control">
                            <span class="label-text">"Additional Context (Optional)"</span>
                            <textarea
                                class="textarea textarea-bordered"
                                rows="3"
                                prop:value=context
                                on:input=move |ev| set_context.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <label class="form-control">
                            <span class="label-text">"Source URL (Optional)"</span>
                            <input
                                class="input input-bordered"
                                placeholder="https://example.com/news-article"
                                prop:value=url
                                on:input=move |ev| set_url.set(event_target_value(&ev))
                            />
                        </label>
                        <button
                            class="btn btn-primary w-full"
                            disabled=move || verifying.get() || headline.with(|h| h.trim().is_empty())
                        >
                            {move || if verifying.get() { "Verifying..." } else { "Verify Headline" }}
                        </button>
                        {move || error.get().map(|e| view! { <div class="alert alert-error">{e}</div> })}
                    </div>
                </form>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">"Verification Result"</h2>
                        {move || match result.get() {
                            Some(r) => view! { <ResultView result=r /> }.into_any(),
                            None => view! {
                                <p class="text-base-content/60">"Submit a headline to see its reliability score."</p>
                            }
                                .into_any(),
                        }}
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"Recent Verifications"</h2>
                    <ul class="divide-y divide-base-300">
                        {move || history.with(|h| {
                            h.entries()
                                .iter()
                                .map(|entry| {
                                    let status_class = match entry.status {
                                        VerificationStatus::Verified => "badge badge-success",
                                        VerificationStatus::Flagged => "badge badge-error",
                                    };
                                    view! {
                                        <li class="py-3 flex items-center justify-between">
                                            <div>
                                                <p class="font-medium">{entry.headline.clone()}</p>
                                                <p class="text-sm text-base-content/60">{entry.date.to_string()}</p>
                                            </div>
                                            <div class="flex items-center gap-3">
                                                <span class=score_text_class(entry.score)>{format!("{:.1}", entry.score)}</span>
                                                <span class=status_class>{entry.status.as_str()}</span>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()
                        })}
                    </ul>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ResultView(result: VerificationResult) -> impl IntoView {
    let VerificationResult {
        prediction,
        score,
        confidence,
        summary,
        sources,
        flags,
    } = result;

    view! {
        <div class="space-y-4">
            <div class="flex items-baseline gap-3">
                <span class=format!("text-4xl font-bold {}", score_text_class(score))>{format!("{:.1}", score)}</span>
                <span class="text-base-content/60">"/ 10"</span>
                <span class="badge badge-outline">{prediction}</span>
            </div>
            <p class="text-sm">{format!("Confidence: {:.2}", confidence)}</p>
            <p>{summary}</p>
            {(!flags.is_empty()).then(|| view! {
                <div class="space-y-1">
                    <h3 class="font-semibold">"Flags"</h3>
                    {flags
                        .into_iter()
                        .map(|f| view! { <div class="alert alert-warning py-2 text-sm">{f}</div> })
                        .collect_view()}
                </div>
            })}
            {(!sources.is_empty()).then(|| view! {
                <div>
                    <h3 class="font-semibold">"Sources"</h3>
                    <ul class="list-disc list-inside text-sm">
                        {sources.into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}
                    </ul>
                </div>
            })}
        </div>
    }
}
