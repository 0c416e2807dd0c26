//! 路由服务模块 - 核心引擎
//!
//! 页面状态机在核心库 `nationpost::navigation` 中（纯函数、可单测），
//! 这里只负责把它接到浏览器：所有对 window.history 的操作都集中在此模块。
//! 流程：事件 -> 状态转换(含守卫) -> 同步 History -> 更新界面 -> 提示。

use leptos::prelude::*;
use nationpost::Article;
use nationpost::navigation::{NavEvent, NavState, Notice, Page, Transition, ViewTicket, enforce, transition};
use wasm_bindgen::prelude::*;

use crate::components::toast::ToastContext;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// History 同步方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    /// 用户主动导航
    Push,
    /// 重定向，不留下历史记录
    Replace,
    /// 浏览器前进/后退，地址栏已经变化
    Pop,
}

fn write_history(path: &str, mode: HistoryMode) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = match mode {
        HistoryMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(path)),
        HistoryMode::Replace | HistoryMode::Pop => {
            history.replace_state_with_url(&JsValue::NULL, "", Some(path))
        }
    };
    if let Err(e) = result {
        tracing::warn!(error = ?e, path, "history update failed");
    }
}

/// 路由器服务
///
/// 持有导航状态信号；认证状态以信号形式注入，与认证系统解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    state: RwSignal<NavState>,
    is_authenticated: Signal<bool>,
    toast: ToastContext,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>, toast: ToastContext) -> Self {
        Self {
            state: RwSignal::new(NavState::new()),
            is_authenticated,
            toast,
        }
    }

    pub fn page(&self) -> Page {
        self.state.with(|s| s.page())
    }

    pub fn search_query(&self) -> String {
        self.state.with(|s| s.search_query().to_string())
    }

    pub fn selected_article(&self) -> Option<Article> {
        self.state.with(|s| s.selected_article().cloned())
    }

    /// 发起异步请求前取得当前视图代号
    pub fn ticket(&self) -> ViewTicket {
        self.state.with_untracked(|s| s.ticket())
    }

    /// 响应返回时检查视图是否仍是发起请求时的那个
    pub fn is_current(&self, ticket: ViewTicket) -> bool {
        self.state.with_untracked(|s| s.is_current(ticket))
    }

    pub fn dispatch(&self, event: NavEvent) {
        self.apply(event, HistoryMode::Push);
    }

    pub fn navigate(&self, page: Page) {
        self.dispatch(NavEvent::ChangePage(page));
    }

    fn apply(&self, event: NavEvent, mode: HistoryMode) {
        let authenticated = self.is_authenticated.get_untracked();
        let next = self
            .state
            .with_untracked(|s| transition(s, event, authenticated));
        self.commit(next, mode);
    }

    fn commit(&self, Transition { state, notice }: Transition, mode: HistoryMode) {
        let path = state.page().to_path();
        if path != current_path() {
            // 守卫改写了目标时用 replace，避免后退回到被拒绝的地址
            let mode = if notice.is_some() && mode == HistoryMode::Push {
                HistoryMode::Replace
            } else {
                mode
            };
            write_history(path, mode);
        }

        if self.state.with_untracked(|s| *s != state) {
            self.state.set(state);
        }
        if let Some(notice) = notice {
            self.show_notice(notice);
        }
    }

    fn show_notice(&self, notice: Notice) {
        self.toast.error(notice.title(), notice.description());
    }

    /// 浏览器后退/前进按钮
    fn init_popstate_listener(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            let page = Page::from_path(&current_path());
            router.apply(NavEvent::ChangePage(page), HistoryMode::Pop);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 会话状态变化时重新检查守卫（例如在受保护页面上注销）
    fn setup_auth_redirect(&self) {
        let router = *self;
        Effect::new(move |_| {
            let authenticated = router.is_authenticated.get();
            let next = router.state.with_untracked(|s| enforce(s, authenticated));
            router.commit(next, HistoryMode::Replace);
        });
    }

    /// 按地址栏初始化页面
    fn init_from_location(&self) {
        let page = Page::from_path(&current_path());
        self.apply(NavEvent::ChangePage(page), HistoryMode::Replace);
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>, toast: ToastContext) -> RouterService {
    let router = RouterService::new(is_authenticated, toast);

    router.init_from_location();
    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    toast: ToastContext,
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated, toast);

    children()
}

/// 路由出口组件
///
/// 根据当前页面渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 页面匹配函数：接收当前页面，返回对应视图
    matcher: fn(Page) -> AnyView,
) -> impl IntoView {
    let router = use_router();
    // 只在页面切换时重建视图，搜索词等变化由页面内部响应
    let page = Memo::new(move |_| router.page());

    move || matcher(page.get())
}
