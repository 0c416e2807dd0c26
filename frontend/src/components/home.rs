use leptos::prelude::*;
use leptos::task::spawn_local;
use nationpost::feed::{FeedCategory, TRENDING_COUNT, filter_feed, trending};
use nationpost::news::{NewsDirectory, sample_articles};
use nationpost::{Article, NavEvent};

use super::news_card::NewsCard;
use super::reliability::ReliabilityBadge;
use super::toast::use_toast;
use crate::api::use_services;
use crate::web::router::use_router;

#[component]
pub fn HomePage() -> impl IntoView {
    let router = use_router();
    let services = use_services();
    let toast = use_toast();

    // 先展示样例，远端列表到达后替换
    let articles = RwSignal::new(sample_articles());
    let (category, set_category) = signal(FeedCategory::All);

    let ticket = router.ticket();
    let api = services.api();
    spawn_local(async move {
        let list = NewsDirectory::new(&*api).fetch_remote_list().await;
        if router.is_current(ticket) {
            articles.set(list);
        }
    });

    let on_open = Callback::new(move |id: String| {
        let ticket = router.ticket();
        let api = services.api();
        spawn_local(async move {
            let found = NewsDirectory::new(&*api).fetch_article_by_id(&id).await;
            if !router.is_current(ticket) {
                return;
            }
            match found {
                Some(article) => router.dispatch(NavEvent::OpenArticle(article)),
                None => toast.error("Article not found", "This article is no longer available."),
            }
        });
    });

    let query = move || router.search_query();
    let filtered = move || {
        let q = query();
        articles.with(|list| {
            filter_feed(list, category.get(), &q)
                .into_iter()
                .cloned()
                .collect::<Vec<Article>>()
        })
    };
    let top = move || {
        articles.with(|list| {
            trending(list, TRENDING_COUNT)
                .into_iter()
                .cloned()
                .collect::<Vec<Article>>()
        })
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 py-8 space-y-8">
            // 分类
            <div class="flex flex-wrap gap-2">
                {FeedCategory::ALL
                    .into_iter()
                    .map(|c| {
                        view! {
                            <button
                                class="btn btn-sm"
                                class:btn-primary=move || category.get() == c
                                on:click=move |_| set_category.set(c)
                            >
                                {c.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || !query().trim().is_empty()>
                <div class="text-base-content/70">
                    {move || {
                        let count = filtered().len();
                        format!(
                            "Found {} article{} for \"{}\"",
                            count,
                            if count == 1 { "" } else { "s" },
                            query(),
                        )
                    }}
                </div>
            </Show>

            <div class="grid grid-cols-1 lg:grid-cols-4 gap-8">
                <section class="lg:col-span-3">
                    {move || {
                        let list = filtered();
                        if list.is_empty() {
                            view! {
                                <div class="text-center py-16 text-base-content/60">
                                    "No articles found matching your criteria."
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6">
                                    {list
                                        .into_iter()
                                        .map(|article| view! { <NewsCard article=article on_open=on_open /> })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </section>

                <aside class="space-y-4">
                    <h2 class="text-lg font-semibold">"Trending"</h2>
                    {move || {
                        top()
                            .into_iter()
                            .map(|article| {
                                let id = article.id.clone();
                                view! {
                                    <div
                                        class="p-3 rounded-lg bg-base-200 cursor-pointer hover:bg-base-300"
                                        on:click=move |_| on_open.run(id.clone())
                                    >
                                        <p class="text-sm font-medium line-clamp-2">{article.title}</p>
                                        <div class="mt-2">
                                            <ReliabilityBadge score=article.reliability_score />
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </aside>
            </div>
        </div>
    }
}
