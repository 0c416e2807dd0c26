use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use nationpost::{Page, Theme};

use super::toast::use_toast;
use crate::auth::use_auth;
use crate::theme::use_theme;
use crate::web::router::use_router;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let theme = use_theme();
    let router = use_router();
    let toast = use_toast();

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());

    let start_edit = move |_: MouseEvent| {
        set_draft.set(auth.session().map(|s| s.name).unwrap_or_default());
        set_editing.set(true);
    };

    let on_save = move |ev: SubmitEvent| {
        ev.prevent_default();
        match auth.update_profile(&draft.get_untracked(), None) {
            Ok(()) => {
                toast.success("Profile updated", "Your changes have been saved.");
                set_editing.set(false);
            }
            Err(e) => toast.error("Update failed", e.message()),
        }
    };

    let on_logout = move |_: MouseEvent| {
        auth.logout();
        toast.success("Signed out", "See you soon.");
    };

    view! {
        <div class="max-w-3xl mx-auto px-4 py-8 space-y-6">
            <h1 class="text-3xl font-semibold">"Profile"</h1>
            {move || match auth.session() {
                None => view! { <p class="text-base-content/60">"You are not signed in."</p> }.into_any(),
                Some(session) => {
                    let initial = session.name.chars().next().unwrap_or('?').to_uppercase().to_string();
                    view! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body space-y-4">
                                <div class="flex items-center gap-4">
                                    <div class="avatar placeholder">
                                        <div class="bg-primary text-primary-content rounded-full w-16">
                                            <span class="text-2xl">{initial}</span>
                                        </div>
                                    </div>
                                    <div>
                                        <h2 class="text-xl font-semibold">{session.name.clone()}</h2>
                                        <p class="text-base-content/70">{session.email.clone()}</p>
                                        <div class="flex gap-2 mt-1">
                                            <span class="badge badge-outline">{session.role.as_str()}</span>
                                            {session.verified.then(|| view! { <span class="badge badge-success">"verified"</span> })}
                                        </div>
                                    </div>
                                </div>
                                <p class="text-sm text-base-content/60">
                                    {format!("Member since {}", session.join_date.format("%B %Y"))}
                                </p>

                                <Show
                                    when=move || editing.get()
                                    fallback=move || view! {
                                        <button class="btn btn-outline btn-sm w-fit" on:click=start_edit>
                                            "Edit name"
                                        </button>
                                    }
                                >
                                    <form class="join" on:submit=on_save>
                                        <input
                                            class="input input-bordered join-item"
                                            prop:value=draft
                                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                                        />
                                        <button type="submit" class="btn btn-primary join-item">"Save"</button>
                                        <button
                                            type="button"
                                            class="btn join-item"
                                            on:click=move |_| set_editing.set(false)
                                        >
                                            "Cancel"
                                        </button>
                                    </form>
                                </Show>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}

            <div class="card bg-base-100 shadow">
                <div class="card-body space-y-3">
                    <h2 class="card-title">"Preferences"</h2>
                    <label class="label cursor-pointer justify-start gap-3">
                        <input
                            type="checkbox"
                            class="toggle"
                            prop:checked=move || theme.theme() == Theme::Dark
                            on:change=move |_| theme.toggle()
                        />
                        <span class="label-text">"Dark mode"</span>
                    </label>
                    <div class="flex gap-2">
                        <button class="btn btn-outline" on:click=move |_| router.navigate(Page::Dashboard)>
                            "Verify News"
                        </button>
                        <button class="btn btn-error" on:click=on_logout>"Sign out"</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
