use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use nationpost::forms::{LoginErrors, LoginForm};
use nationpost::{NavEvent, Page};

use super::toast::use_toast;
use crate::auth::use_auth;
use crate::web::router::use_router;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let toast = use_toast();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);
    let errors = RwSignal::new(LoginErrors::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(found) = form.validate() {
            errors.set(found);
            return;
        }
        errors.set(LoginErrors::default());

        let ticket = router.ticket();
        set_is_submitting.set(true);
        spawn_local(async move {
            let outcome = auth.login(form.email, form.password).await;
            set_is_submitting.set(false);
            if !router.is_current(ticket) {
                return;
            }
            match outcome {
                Ok(()) => {
                    toast.success("Welcome back!", "You have been signed in successfully.");
                    router.dispatch(NavEvent::SignedIn);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "sign in failed");
                    toast.error("Sign in failed", e.message());
                }
            }
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-base-200 px-4">
            <div class="card w-full max-w-md bg-base-100 shadow-xl">
                <form class="card-body space-y-3" on:submit=on_submit>
                    <div class="text-center">
                        <h1 class="text-2xl font-bold">"Welcome Back"</h1>
                        <p class="text-base-content/70">"Sign in to your Nation Post account"</p>
                    </div>

                    <label class="form-control">
                        <span class="label-text">"Email"</span>
                        <input
                            type="email"
                            class="input input-bordered"
                            class:input-error=move || errors.with(|e| e.email.is_some())
                            placeholder="you@example.com"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        {move || errors.with(|e| e.email).map(|m| view! { <span class="text-error text-sm">{m}</span> })}
                    </label>

                    <label class="form-control">
                        <span class="label-text">"Password"</span>
                        <div class="join w-full">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                class="input input-bordered join-item w-full"
                                class:input-error=move || errors.with(|e| e.password.is_some())
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="btn join-item"
                                on:click=move |_| set_show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                        {move || errors.with(|e| e.password).map(|m| view! { <span class="text-error text-sm">{m}</span> })}
                    </label>

                    <div class="text-right">
                        <button
                            type="button"
                            class="link link-primary text-sm"
                            on:click=move |_| router.navigate(Page::ForgotPassword)
                        >
                            "Forgot password?"
                        </button>
                    </div>

                    <button type="submit" class="btn btn-primary w-full" disabled=move || is_submitting.get()>
                        <Show when=move || is_submitting.get() fallback=|| "Sign In">
                            <span class="loading loading-spinner"></span>
                            "Signing in..."
                        </Show>
                    </button>

                    <p class="text-center text-sm">
                        "Don't have an account? "
                        <button type="button" class="link link-primary" on:click=move |_| router.navigate(Page::Signup)>
                            "Sign up"
                        </button>
                    </p>
                    <button type="button" class="btn btn-ghost btn-sm" on:click=move |_| router.navigate(Page::Home)>
                        "Back to home"
                    </button>
                </form>
            </div>
        </div>
    }
}
