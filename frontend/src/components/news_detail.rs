use leptos::prelude::*;
use leptos::task::spawn_local;
use nationpost::shared::date::display_date;
use nationpost::{Article, NavEvent};

use super::reliability::ReliabilityBadge;
use super::toast::use_toast;
use crate::web::clipboard::copy_text;
use crate::web::router::use_router;

/// 复制区块哈希的按钮
#[component]
pub fn CopyHashButton(hash: String) -> impl IntoView {
    let toast = use_toast();
    let (copied, set_copied) = signal(false);

    let on_copy = move |_| {
        let hash = hash.clone();
        spawn_local(async move {
            if copy_text(&hash).await {
                set_copied.set(true);
                toast.success("Hash copied to clipboard", "");
                set_timeout(move || set_copied.set(false), std::time::Duration::from_secs(2));
            } else {
                toast.error("Failed to copy hash", "Please copy it manually.");
            }
        });
    };

    view! {
        <button class="btn btn-ghost btn-xs" on:click=on_copy>
            {move || if copied.get() { "Copied" } else { "Copy" }}
        </button>
    }
}

#[component]
pub fn NewsDetailPage() -> impl IntoView {
    let router = use_router();
    let on_back = move |_| router.dispatch(NavEvent::CloseArticle);

    move || match router.selected_article() {
        Some(article) => view! { <ArticleView article=article /> }.into_any(),
        None => view! {
            <div class="min-h-screen flex flex-col items-center justify-center gap-4">
                <h1 class="text-2xl font-semibold">"Article not found"</h1>
                <button class="btn btn-primary" on:click=on_back>"Back to News"</button>
            </div>
        }
            .into_any(),
    }
}

#[component]
fn ArticleView(article: Article) -> impl IntoView {
    let router = use_router();
    let on_back = move |_| router.dispatch(NavEvent::CloseArticle);

    let Article {
        title,
        excerpt,
        thumbnail,
        reliability_score,
        category,
        author,
        published_at,
        block_hash,
        ..
    } = article;

    view! {
        <article class="max-w-3xl mx-auto px-4 py-8 space-y-6">
            <button class="btn btn-ghost btn-sm" on:click=on_back>"← Back to News"</button>

            <div class="flex items-center gap-3">
                <span class="badge badge-outline capitalize">{category}</span>
                <ReliabilityBadge score=reliability_score with_label=true />
            </div>

            <h1 class="text-3xl font-bold leading-tight">{title.clone()}</h1>

            <div class="flex gap-4 text-sm text-base-content/70">
                <span>{author}</span>
                <span>{display_date(&published_at)}</span>
            </div>

            {(!thumbnail.is_empty()).then(|| view! {
                <img src=thumbnail alt=title class="w-full rounded-xl object-cover max-h-[28rem]" />
            })}

            <p class="text-lg leading-relaxed">{excerpt}</p>

            {block_hash.map(|hash| view! {
                <div class="card bg-base-200">
                    <div class="card-body p-4">
                        <div class="flex items-center justify-between">
                            <h2 class="font-semibold">"Block Hash"</h2>
                            <CopyHashButton hash=hash.clone() />
                        </div>
                        <code class="text-xs break-all">{hash}</code>
                    </div>
                </div>
            })}
        </article>
    }
}
