//! 导航状态机
//!
//! 纯粹的业务逻辑层，不依赖于 DOM。`transition(state, event, authenticated)`
//! 计算下一个状态，认证守卫、搜索清空、选中文章清空都作为对目标状态的
//! 规范化规则统一施加，因此同一规则也用于会话变化后的被动检查（`enforce`）。

use std::fmt;
use std::str::FromStr;

use nationpost_shared::Article;

#[cfg(test)]
mod tests;

// =========================================================
// 页面定义
// =========================================================

/// 应用页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    /// 首页 (默认页面)
    #[default]
    Home,
    /// 标题校验面板 (需要认证)
    Dashboard,
    /// 投稿 (需要认证)
    Upload,
    /// 个人资料 (需要认证)
    Profile,
    About,
    Login,
    Signup,
    ForgotPassword,
    NewsDetail,
    BlockVerify,
}

impl Page {
    pub const ALL: [Page; 10] = [
        Page::Home,
        Page::Dashboard,
        Page::Upload,
        Page::Profile,
        Page::About,
        Page::Login,
        Page::Signup,
        Page::ForgotPassword,
        Page::NewsDetail,
        Page::BlockVerify,
    ];

    /// 稳定的页面标识
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Dashboard => "dashboard",
            Page::Upload => "upload",
            Page::Profile => "profile",
            Page::About => "about",
            Page::Login => "login",
            Page::Signup => "signup",
            Page::ForgotPassword => "forgot-password",
            Page::NewsDetail => "news-detail",
            Page::BlockVerify => "block-verify",
        }
    }

    /// 将 URL path 解析为页面，未知路径回到首页
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        match path {
            "" | "/home" => Page::Home,
            "/dashboard" => Page::Dashboard,
            "/upload" => Page::Upload,
            "/profile" => Page::Profile,
            "/about" => Page::About,
            "/login" => Page::Login,
            "/signup" => Page::Signup,
            "/forgot-password" => Page::ForgotPassword,
            "/block-verify" => Page::BlockVerify,
            p if p == "/news" || p.starts_with("/news/") => Page::NewsDetail,
            _ => Page::Home,
        }
    }

    /// 获取页面对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Dashboard => "/dashboard",
            Page::Upload => "/upload",
            Page::Profile => "/profile",
            Page::About => "/about",
            Page::Login => "/login",
            Page::Signup => "/signup",
            Page::ForgotPassword => "/forgot-password",
            Page::NewsDetail => "/news",
            Page::BlockVerify => "/block-verify",
        }
    }

    /// **核心守卫逻辑：该页面是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Page::Dashboard | Page::Upload | Page::Profile)
    }

    /// 登录 / 注册 / 找回密码页面
    pub fn is_auth_page(&self) -> bool {
        matches!(self, Page::Login | Page::Signup | Page::ForgotPassword)
    }

    /// 是否渲染页头与页脚
    pub fn has_chrome(&self) -> bool {
        !self.is_auth_page() && *self != Page::NewsDetail
    }

    /// 认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Page::Login
    }

    /// 登录 / 注册成功后的目标
    pub fn auth_success_redirect() -> Self {
        Page::Home
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown page: {}", s))
    }
}

// =========================================================
// 状态、事件与转换
// =========================================================

/// 异步请求发起时记下的视图代号，响应返回时用 `NavState::is_current` 判断是否过期
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewTicket(u64);

/// 导航状态
///
/// 不变式：`selected_article` 只在 `page == NewsDetail` 时可能非空；
/// `search_query` 只在首页非空。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavState {
    page: Page,
    search_query: String,
    selected_article: Option<Article>,
    generation: u64,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.selected_article.as_ref()
    }

    pub fn ticket(&self) -> ViewTicket {
        ViewTicket(self.generation)
    }

    /// 发起请求后视图是否未被替换
    pub fn is_current(&self, ticket: ViewTicket) -> bool {
        self.generation == ticket.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    ChangePage(Page),
    Search(String),
    OpenArticle(Article),
    CloseArticle,
    /// 登录或注册成功
    SignedIn,
}

/// 需要展示给用户的提示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    AuthenticationRequired,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::AuthenticationRequired => "Authentication required",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Notice::AuthenticationRequired => "Please sign in to access this feature.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: NavState,
    pub notice: Option<Notice>,
}

/// 状态转换函数
pub fn transition(state: &NavState, event: NavEvent, authenticated: bool) -> Transition {
    let mut page = state.page;
    let mut search_query = state.search_query.clone();
    let mut selected_article = state.selected_article.clone();

    match event {
        NavEvent::ChangePage(target) => page = target,
        NavEvent::Search(query) => {
            page = Page::Home;
            search_query = query;
        }
        NavEvent::OpenArticle(article) => {
            page = Page::NewsDetail;
            selected_article = Some(article);
        }
        NavEvent::CloseArticle => {
            page = Page::Home;
            selected_article = None;
        }
        NavEvent::SignedIn => page = Page::auth_success_redirect(),
    }

    settle(state, page, search_query, selected_article, authenticated)
}

/// 会话状态变化后的被动检查：当前页面受保护而用户已登出时强制跳转登录页
pub fn enforce(state: &NavState, authenticated: bool) -> Transition {
    settle(
        state,
        state.page,
        state.search_query.clone(),
        state.selected_article.clone(),
        authenticated,
    )
}

/// 对目标状态施加守卫与清空规则
fn settle(
    previous: &NavState,
    mut page: Page,
    mut search_query: String,
    mut selected_article: Option<Article>,
    authenticated: bool,
) -> Transition {
    let mut notice = None;

    if page.requires_auth() && !authenticated {
        tracing::info!(target_page = %page, "authentication required, redirecting to login");
        page = Page::auth_failure_redirect();
        notice = Some(Notice::AuthenticationRequired);
    }
    if page != Page::Home {
        search_query.clear();
    }
    if page != Page::NewsDetail {
        selected_article = None;
    }

    let generation = if page != previous.page || selected_article != previous.selected_article {
        previous.generation + 1
    } else {
        previous.generation
    };

    Transition {
        state: NavState {
            page,
            search_query,
            selected_article,
            generation,
        },
        notice,
    }
}

/// 便于在命令式调用点使用的包装
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    state: NavState,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn dispatch(&mut self, event: NavEvent, authenticated: bool) -> Option<Notice> {
        let Transition { state, notice } = transition(&self.state, event, authenticated);
        self.state = state;
        notice
    }

    pub fn change_page(&mut self, target: Page, authenticated: bool) -> Option<Notice> {
        self.dispatch(NavEvent::ChangePage(target), authenticated)
    }

    pub fn search(&mut self, query: &str, authenticated: bool) -> Option<Notice> {
        self.dispatch(NavEvent::Search(query.to_string()), authenticated)
    }

    pub fn open_article(&mut self, article: Article, authenticated: bool) -> Option<Notice> {
        self.dispatch(NavEvent::OpenArticle(article), authenticated)
    }

    pub fn close_article(&mut self, authenticated: bool) -> Option<Notice> {
        self.dispatch(NavEvent::CloseArticle, authenticated)
    }

    /// 每次读取会话状态后调用
    pub fn check(&mut self, authenticated: bool) -> Option<Notice> {
        let Transition { state, notice } = enforce(&self.state, authenticated);
        self.state = state;
        notice
    }
}
