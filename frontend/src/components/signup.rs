use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use nationpost::forms::{PasswordStrength, SignupErrors, SignupForm, password_strength};
use nationpost::{NavEvent, Page};

use super::toast::use_toast;
use crate::auth::use_auth;
use crate::web::router::use_router;

fn strength_class(strength: PasswordStrength) -> &'static str {
    match strength {
        PasswordStrength::Empty => "progress w-full",
        PasswordStrength::Weak => "progress progress-error w-full",
        PasswordStrength::Medium => "progress progress-warning w-full",
        PasswordStrength::Strong => "progress progress-success w-full",
    }
}

/// 带错误提示的输入框
#[component]
fn Field(
    label: &'static str,
    input_type: &'static str,
    value: RwSignal<String>,
    error: Signal<Option<&'static str>>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-control">
            <span class="label-text">{label}</span>
            <input
                type=input_type
                class="input input-bordered"
                class:input-error=move || error.get().is_some()
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error.get().map(|m| view! { <span class="text-error text-sm">{m}</span> })}
        </label>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let toast = use_toast();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let (agree, set_agree) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);
    let errors = RwSignal::new(SignupErrors::default());

    let strength = Memo::new(move |_| password.with(|p| password_strength(p)));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = SignupForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            agree_to_terms: agree.get_untracked(),
        };
        if let Err(found) = form.validate() {
            errors.set(found);
            return;
        }
        errors.set(SignupErrors::default());

        let ticket = router.ticket();
        set_is_submitting.set(true);
        spawn_local(async move {
            let outcome = auth.signup(form.email, form.password, form.name).await;
            set_is_submitting.set(false);
            if !router.is_current(ticket) {
                return;
            }
            match outcome {
                Ok(()) => {
                    toast.success("Account created!", "Welcome to Nation Post.");
                    router.dispatch(NavEvent::SignedIn);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "sign up failed");
                    toast.error("Sign up failed", e.message());
                }
            }
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-base-200 px-4 py-8">
            <div class="card w-full max-w-md bg-base-100 shadow-xl">
                <form class="card-body space-y-3" on:submit=on_submit>
                    <div class="text-center">
                        <h1 class="text-2xl font-bold">"Create Account"</h1>
                        <p class="text-base-content/70">"Join Nation Post to verify and share trusted news"</p>
                    </div>

                    <Field
                        label="Full Name"
                        input_type="text"
                        value=name
                        error=Signal::derive(move || errors.with(|e| e.name))
                        placeholder="Jane Doe"
                    />
                    <Field
                        label="Email"
                        input_type="email"
                        value=email
                        error=Signal::derive(move || errors.with(|e| e.email))
                        placeholder="you@example.com"
                    />
                    <Field
                        label="Password"
                        input_type="password"
                        value=password
                        error=Signal::derive(move || errors.with(|e| e.password))
                    />
                    <Show when=move || strength.get() != PasswordStrength::Empty>
                        <div class="space-y-1">
                            <progress
                                class=move || strength_class(strength.get())
                                value=move || strength.get().level()
                                max="3"
                            ></progress>
                            <span class="text-xs">{move || format!("Password strength: {}", strength.get().label())}</span>
                        </div>
                    </Show>
                    <Field
                        label="Confirm Password"
                        input_type="password"
                        value=confirm_password
                        error=Signal::derive(move || errors.with(|e| e.confirm_password))
                    />

                    <label class="label cursor-pointer justify-start gap-2">
                        <input
                            type="checkbox"
                            class="checkbox checkbox-primary"
                            prop:checked=agree
                            on:change=move |ev| set_agree.set(event_target_checked(&ev))
                        />
                        <span class="label-text">"I agree to the terms and conditions"</span>
                    </label>
                    {move || errors.with(|e| e.terms).map(|m| view! { <span class="text-error text-sm">{m}</span> })}

                    <button type="submit" class="btn btn-primary w-full" disabled=move || is_submitting.get()>
                        <Show when=move || is_submitting.get() fallback=|| "Create Account">
                            <span class="loading loading-spinner"></span>
                            "Creating account..."
                        </Show>
                    </button>

                    <p class="text-center text-sm">
                        "Already have an account? "
                        <button type="button" class="link link-primary" on:click=move |_| router.navigate(Page::Login)>
                            "Sign in"
                        </button>
                    </p>
                </form>
            </div>
        </div>
    }
}
