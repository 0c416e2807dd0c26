use leptos::ev::SubmitEvent;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use nationpost::StorageScopes;
use nationpost::upload::{ArticleSubmission, ImageFile, UPLOAD_CATEGORIES, submit_article};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

use super::reliability::ReliabilityBadge;
use super::toast::use_toast;
use crate::api::use_services;
use crate::web::router::use_router;
use crate::web::{WebLocalStorage, WebSessionStorage};

/// 读取文件选择框里的第一张图片
async fn read_image(input: Option<HtmlInputElement>) -> Option<ImageFile> {
    let file = input?.files()?.get(0)?;
    let buffer = match JsFuture::from(file.array_buffer()).await {
        Ok(buffer) => buffer,
        Err(e) => {
            tracing::warn!(error = ?e, "could not read selected image");
            return None;
        }
    };
    Some(ImageFile {
        file_name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let router = use_router();
    let services = use_services();
    let toast = use_toast();

    let title = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let source = RwSignal::new(String::new());
    let file_input: NodeRef<Input> = NodeRef::new();

    let (uploading, set_uploading) = signal(false);
    let (score, set_score) = signal(Option::<f64>::None);
    let (error, set_error) = signal(Option::<String>::None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let fields = ArticleSubmission {
            title: title.get_untracked(),
            category: category.get_untracked(),
            description: description.get_untracked(),
            source: source.get_untracked(),
        };
        if let Err(e) = fields.validate() {
            set_error.set(Some(e.message().to_string()));
            return;
        }

        let ticket = router.ticket();
        let api = services.api();
        let input = file_input.get_untracked();

        set_error.set(None);
        set_score.set(None);
        set_uploading.set(true);
        spawn_local(async move {
            let image = read_image(input).await;
            let scopes = StorageScopes::new(WebLocalStorage, WebSessionStorage);
            let outcome = submit_article(&*api, &scopes, &fields, image).await;
            if !router.is_current(ticket) {
                return;
            }
            match outcome {
                Ok(receipt) => {
                    set_score.set(Some(receipt.score));
                    toast.success("Article uploaded", "Your article was submitted for verification.");
                    for field in [title, category, description, source] {
                        field.set(String::new());
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "upload failed");
                    set_error.set(Some(format!("Upload failed: {}", e.message())));
                }
            }
            set_uploading.set(false);
        });
    };

    let text_input = move |label: &'static str, signal: RwSignal<String>, placeholder: &'static str| {
        view! {
            <label class="form-control">
                <span class="label-text">{label}</span>
                <input
                    class="input input-bordered"
                    placeholder=placeholder
                    prop:value=signal
                    on:input=move |ev| signal.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="max-w-3xl mx-auto px-4 py-8 space-y-6">
            <div>
                <h1 class="text-3xl font-semibold">"Upload News"</h1>
                <p class="text-base-content/70">
                    "Submit an article. It will be scored for reliability and anchored on the ledger."
                </p>
            </div>

            {move || score.get().map(|s| view! {
                <div class="alert alert-success flex justify-between">
                    <span>"Upload complete. Reliability score:"</span>
                    <ReliabilityBadge score=s with_label=true />
                </div>
            })}
            {move || error.get().map(|e| view! { <div class="alert alert-error">{e}</div> })}

            <form class="card bg-base-100 shadow" on:submit=on_submit>
                <div class="card-body space-y-3">
                    {text_input("Title *", title, "Enter the article title")}
                    <label class="form-control">
                        <span class="label-text">"Category *"</span>
                        <select
                            class="select select-bordered"
                            prop:value=category
                            on:change=move |ev| category.set(event_target_value(&ev))
                        >
                            <option value="">"Select a category"</option>
                            {UPLOAD_CATEGORIES
                                .into_iter()
                                .map(|(value, label)| view! { <option value=value>{label}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="form-control">
                        <span class="label-text">"Description *"</span>
                        <textarea
                            class="textarea textarea-bordered"
                            rows="6"
                            prop:value=description
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    {text_input("Source URL", source, "https://example.com/original-story")}
                    <label class="form-control">
                        <span class="label-text">"Image"</span>
                        <input
                            type="file"
                            accept="image/*"
                            class="file-input file-input-bordered"
                            node_ref=file_input
                        />
                    </label>
                    <button class="btn btn-primary w-full" disabled=move || uploading.get()>
                        {move || if uploading.get() { "Uploading..." } else { "Upload Article" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
