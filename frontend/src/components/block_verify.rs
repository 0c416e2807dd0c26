use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use nationpost::block::{BlockVerification, verify_block_hash};
use nationpost::news::sample_articles;
use nationpost::shared::date::display_date;

use super::news_detail::CopyHashButton;
use super::reliability::ReliabilityBadge;
use super::toast::use_toast;
use crate::api::{simulated_delay, use_services};
use crate::web::router::use_router;

#[component]
pub fn BlockVerifyPage() -> impl IntoView {
    let router = use_router();
    let services = use_services();
    let toast = use_toast();

    let (hash_input, set_hash_input) = signal(String::new());
    let (searching, set_searching) = signal(false);
    let result = RwSignal::new(Option::<BlockVerification>::None);

    let on_verify = move |ev: SubmitEvent| {
        ev.prevent_default();
        let input = hash_input.get_untracked();
        let ticket = router.ticket();
        let latency = services.simulated_latency();

        set_searching.set(true);
        spawn_local(async move {
            simulated_delay(latency).await;
            if !router.is_current(ticket) {
                return;
            }
            match verify_block_hash(&input, &sample_articles(), &mut rand::thread_rng()) {
                Ok(verification) => {
                    if verification.is_valid() {
                        toast.success("Hash verified successfully!", "");
                    } else {
                        toast.error("Hash not found in our blockchain", "");
                    }
                    result.set(Some(verification));
                }
                Err(e) => toast.error(e.message(), ""),
            }
            set_searching.set(false);
        });
    };

    view! {
        <div class="max-w-3xl mx-auto px-4 py-8 space-y-6">
            <div>
                <h1 class="text-3xl font-semibold">"Block Verification"</h1>
                <p class="text-base-content/70">
                    "Check whether an article hash is recorded on the Nation Post ledger."
                </p>
            </div>

            <form class="join w-full" on:submit=on_verify>
                <input
                    class="input input-bordered join-item flex-1 font-mono"
                    placeholder="Enter block hash..."
                    prop:value=hash_input
                    on:input=move |ev| set_hash_input.set(event_target_value(&ev))
                />
                <button class="btn btn-primary join-item" disabled=move || searching.get()>
                    {move || if searching.get() { "Verifying..." } else { "Verify" }}
                </button>
            </form>

            {move || result.get().map(|verification| match verification {
                BlockVerification::Found {
                    article,
                    block_number,
                    timestamp,
                    previous_hash,
                    confirmations,
                } => {
                    let hash = article.block_hash.clone().unwrap_or_default();
                    view! {
                        <div class="card bg-base-200">
                            <div class="card-body space-y-3">
                                <div class="alert alert-success">"Valid block found"</div>
                                <h2 class="card-title">{article.title.clone()}</h2>
                                <div class="flex gap-3 items-center text-sm">
                                    <span>{article.author.clone()}</span>
                                    <ReliabilityBadge score=article.reliability_score />
                                </div>
                                <dl class="grid grid-cols-2 gap-2 text-sm">
                                    <dt class="font-semibold">"Block number"</dt>
                                    <dd>{format!("#{}", block_number)}</dd>
                                    <dt class="font-semibold">"Timestamp"</dt>
                                    <dd>{display_date(&timestamp)}</dd>
                                    <dt class="font-semibold">"Confirmations"</dt>
                                    <dd>{confirmations}</dd>
                                </dl>
                                <div>
                                    <div class="flex items-center justify-between">
                                        <span class="font-semibold text-sm">"Block hash"</span>
                                        <CopyHashButton hash=hash.clone() />
                                    </div>
                                    <code class="text-xs break-all">{hash}</code>
                                </div>
                                <div>
                                    <span class="font-semibold text-sm">"Previous hash"</span>
                                    <code class="block text-xs break-all">{previous_hash}</code>
                                </div>
                            </div>
                        </div>
                    }
                        .into_any()
                }
                BlockVerification::NotFound { message } => view! {
                    <div class="alert alert-error">{message}</div>
                }
                    .into_any(),
            })}
        </div>
    }
}
