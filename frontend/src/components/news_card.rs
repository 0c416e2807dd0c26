use leptos::prelude::*;
use nationpost::Article;
use nationpost::shared::date::display_date;

use super::reliability::ReliabilityBadge;

#[component]
pub fn NewsCard(article: Article, on_open: Callback<String>) -> impl IntoView {
    let Article {
        id,
        title,
        excerpt,
        thumbnail,
        reliability_score,
        category,
        author,
        published_at,
        ..
    } = article;

    view! {
        <div
            class="card bg-base-100 shadow-md hover:shadow-xl transition-shadow cursor-pointer"
            on:click=move |_| on_open.run(id.clone())
        >
            {(!thumbnail.is_empty()).then(|| view! {
                <figure class="h-48 overflow-hidden">
                    <img src=thumbnail alt=title.clone() class="w-full h-full object-cover" />
                </figure>
            })}
            <div class="card-body p-4">
                <div class="flex items-center justify-between">
                    <span class="badge badge-outline capitalize">{category}</span>
                    <ReliabilityBadge score=reliability_score />
                </div>
                <h2 class="card-title text-base line-clamp-2">{title}</h2>
                <p class="text-sm text-base-content/70 line-clamp-3">{excerpt}</p>
                <div class="flex justify-between text-xs text-base-content/60 mt-2">
                    <span>{author}</span>
                    <span>{display_date(&published_at)}</span>
                </div>
            </div>
        </div>
    }
}
