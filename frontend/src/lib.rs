//! Nation Post 前端应用
//!
//! 状态与业务逻辑都在核心库 `nationpost` 中，这里只是视图层：
//! - `web`: 浏览器 API 适配（fetch、Web Storage、History、剪贴板）
//! - `api`: 后端服务装配
//! - `auth` / `theme`: 会话与主题上下文
//! - `components`: UI 组件层

mod api;
mod auth;
pub mod logging;
mod theme;
mod components {
    pub mod about;
    pub mod block_verify;
    pub mod footer;
    pub mod forgot_password;
    pub mod header;
    pub mod home;
    pub mod login;
    pub mod news_card;
    pub mod news_detail;
    pub mod profile;
    pub mod reliability;
    pub mod signup;
    pub mod toast;
    pub mod upload;
    pub mod verification;
}
pub(crate) mod web;

use leptos::prelude::*;
use nationpost::Page;

use crate::api::Services;
use crate::auth::AuthContext;
use crate::components::about::AboutPage;
use crate::components::block_verify::BlockVerifyPage;
use crate::components::footer::Footer;
use crate::components::forgot_password::ForgotPasswordPage;
use crate::components::header::Header;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::news_detail::NewsDetailPage;
use crate::components::profile::ProfilePage;
use crate::components::signup::SignupPage;
use crate::components::toast::{ToastContext, Toaster};
use crate::components::upload::UploadPage;
use crate::components::verification::VerificationPage;
use crate::theme::ThemeContext;
use crate::web::router::{Router, RouterOutlet, use_router};

/// 页面匹配函数
fn page_matcher(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Dashboard => view! { <VerificationPage /> }.into_any(),
        Page::Upload => view! { <UploadPage /> }.into_any(),
        Page::Profile => view! { <ProfilePage /> }.into_any(),
        Page::About => view! { <AboutPage /> }.into_any(),
        Page::Login => view! { <LoginPage /> }.into_any(),
        Page::Signup => view! { <SignupPage /> }.into_any(),
        Page::ForgotPassword => view! { <ForgotPasswordPage /> }.into_any(),
        Page::NewsDetail => view! { <NewsDetailPage /> }.into_any(),
        Page::BlockVerify => view! { <BlockVerifyPage /> }.into_any(),
    }
}

/// 页面外框：认证页与新闻详情页不显示页眉页脚
#[component]
fn Layout() -> impl IntoView {
    let router = use_router();
    let has_chrome = Memo::new(move |_| router.page().has_chrome());

    view! {
        <div class="min-h-screen bg-base-100 flex flex-col">
            <Show when=move || has_chrome.get()>
                <Header />
            </Show>
            <main class="flex-1">
                <RouterOutlet matcher=page_matcher />
            </main>
            <Show when=move || has_chrome.get()>
                <Footer />
            </Show>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 服务与共享状态只在这里构造一次
    let services = Services::from_build_env();
    provide_context(services);

    let theme = ThemeContext::load();
    provide_context(theme);

    let toast = ToastContext::new();
    provide_context(toast);

    // 2. 从 LocalStorage 恢复会话
    let auth = AuthContext::load(services);
    provide_context(auth);

    // 3. 认证状态信号注入路由服务
    let is_authenticated = auth.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated toast=toast>
            <Layout />
        </Router>
        <Toaster toast=toast />
    }
}
