use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use nationpost::Page;
use nationpost::forms::ForgotPasswordForm;

use super::toast::use_toast;
use crate::auth::use_auth;
use crate::web::router::use_router;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let toast = use_toast();

    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal(Option::<&'static str>::None);
    let (is_submitting, set_is_submitting) = signal(false);
    let (sent_to, set_sent_to) = signal(Option::<String>::None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ForgotPasswordForm {
            email: email.get_untracked(),
        };
        if let Err(message) = form.validate() {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);

        let ticket = router.ticket();
        set_is_submitting.set(true);
        spawn_local(async move {
            let address = form.email.trim().to_string();
            let outcome = auth.reset_password(address.clone()).await;
            set_is_submitting.set(false);
            if !router.is_current(ticket) {
                return;
            }
            match outcome {
                Ok(()) => {
                    toast.success("Reset link sent", "Check your inbox for further instructions.");
                    set_sent_to.set(Some(address));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "password reset failed");
                    toast.error("Reset failed", e.message());
                }
            }
        });
    };

    let back_to_login = move |_: MouseEvent| router.navigate(Page::Login);

    view! {
        <div class="min-h-screen flex items-center justify-center bg-base-200 px-4">
            <div class="card w-full max-w-md bg-base-100 shadow-xl">
                {move || match sent_to.get() {
                    Some(address) => view! {
                        <div class="card-body text-center space-y-3">
                            <h1 class="text-2xl font-bold">"Check Your Email"</h1>
                            <p>"We've sent a password reset link to"</p>
                            <p class="font-semibold">{address}</p>
                            <button type="button" class="btn btn-outline w-full" on:click=move |_| set_sent_to.set(None)>
                                "Try another email"
                            </button>
                            <button type="button" class="btn btn-primary w-full" on:click=back_to_login>
                                "Back to Sign In"
                            </button>
                        </div>
                    }
                        .into_any(),
                    None => view! {
                        <form class="card-body space-y-3" on:submit=on_submit>
                            <div class="text-center">
                                <h1 class="text-2xl font-bold">"Forgot Password?"</h1>
                                <p class="text-base-content/70">
                                    "Enter your email and we'll send you a reset link"
                                </p>
                            </div>
                            <label class="form-control">
                                <span class="label-text">"Email"</span>
                                <input
                                    type="email"
                                    class="input input-bordered"
                                    class:input-error=move || error.get().is_some()
                                    placeholder="you@example.com"
                                    prop:value=email
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                />
                                {move || error.get().map(|m| view! { <span class="text-error text-sm">{m}</span> })}
                            </label>
                            <button type="submit" class="btn btn-primary w-full" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() { "Sending..." } else { "Send Reset Link" }}
                            </button>
                            <button type="button" class="btn btn-ghost w-full" on:click=back_to_login>
                                "Back to Sign In"
                            </button>
                        </form>
                    }
                        .into_any(),
                }}
            </div>
        </div>
    }
}
