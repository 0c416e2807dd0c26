use super::*;

fn article(id: &str) -> Article {
    Article {
        id: id.to_string(),
        title: format!("Article {}", id),
        excerpt: String::new(),
        thumbnail: String::new(),
        reliability_score: 7.5,
        category: "business".to_string(),
        author: "Reporter".to_string(),
        published_at: "2025-11-18".to_string(),
        block_hash: None,
    }
}

// =========================================================
// 页面定义
// =========================================================

#[test]
fn page_ids_round_trip() {
    for page in Page::ALL {
        assert_eq!(page.as_str().parse::<Page>().unwrap(), page);
    }
    assert!("settings".parse::<Page>().is_err());
}

#[test]
fn paths_resolve_to_pages() {
    assert_eq!(Page::from_path("/"), Page::Home);
    assert_eq!(Page::from_path("/dashboard/"), Page::Dashboard);
    assert_eq!(Page::from_path("/news/QmHash"), Page::NewsDetail);
    assert_eq!(Page::from_path("/nowhere"), Page::Home);
    for page in Page::ALL {
        assert_eq!(Page::from_path(page.to_path()), page);
    }
}

#[test]
fn only_member_pages_are_guarded() {
    let guarded: Vec<Page> = Page::ALL.into_iter().filter(Page::requires_auth).collect();
    assert_eq!(guarded, vec![Page::Dashboard, Page::Upload, Page::Profile]);
}

#[test]
fn chrome_is_hidden_on_auth_and_detail_pages() {
    assert!(Page::Home.has_chrome());
    assert!(Page::Dashboard.has_chrome());
    assert!(!Page::Login.has_chrome());
    assert!(!Page::ForgotPassword.has_chrome());
    assert!(!Page::NewsDetail.has_chrome());
}

// =========================================================
// 守卫
// =========================================================

#[test]
fn guarded_page_redirects_anonymous_user_to_login() {
    let mut nav = Navigator::new();
    let notice = nav.change_page(Page::Dashboard, false);

    assert_eq!(nav.state().page(), Page::Login);
    assert_eq!(notice, Some(Notice::AuthenticationRequired));
}

#[test]
fn every_guarded_page_is_blocked_when_anonymous() {
    for page in [Page::Dashboard, Page::Upload, Page::Profile] {
        let t = transition(&NavState::new(), NavEvent::ChangePage(page), false);
        assert_ne!(t.state.page(), page);
        assert_eq!(t.state.page(), Page::Login);
    }
}

#[test]
fn unguarded_page_is_reachable_anonymously() {
    let mut nav = Navigator::new();
    let notice = nav.change_page(Page::About, false);

    assert_eq!(nav.state().page(), Page::About);
    assert_eq!(notice, None);
}

#[test]
fn guarded_page_is_reachable_when_authenticated() {
    let mut nav = Navigator::new();
    assert_eq!(nav.change_page(Page::Upload, true), None);
    assert_eq!(nav.state().page(), Page::Upload);
}

#[test]
fn logout_on_guarded_page_forces_login() {
    let mut nav = Navigator::new();
    nav.change_page(Page::Profile, true);

    let notice = nav.check(false);
    assert_eq!(nav.state().page(), Page::Login);
    assert_eq!(notice, Some(Notice::AuthenticationRequired));
}

#[test]
fn check_is_a_no_op_on_open_pages() {
    let mut nav = Navigator::new();
    nav.change_page(Page::About, false);
    let before = nav.state().clone();

    assert_eq!(nav.check(false), None);
    assert_eq!(nav.state(), &before);
}

// =========================================================
// 搜索
// =========================================================

#[test]
fn search_forces_home_from_any_page() {
    for page in [Page::About, Page::BlockVerify, Page::Dashboard] {
        let mut nav = Navigator::new();
        nav.change_page(page, true);
        nav.search("climate", false);

        assert_eq!(nav.state().page(), Page::Home);
        assert_eq!(nav.state().search_query(), "climate");
    }
}

#[test]
fn leaving_home_clears_search() {
    let mut nav = Navigator::new();
    nav.search("climate", false);
    nav.change_page(Page::About, false);

    assert_eq!(nav.state().search_query(), "");
}

#[test]
fn staying_home_keeps_search() {
    let mut nav = Navigator::new();
    nav.search("climate", false);
    nav.change_page(Page::Home, false);

    assert_eq!(nav.state().search_query(), "climate");
}

#[test]
fn redirect_to_login_also_clears_search() {
    let mut nav = Navigator::new();
    nav.search("climate", false);
    nav.change_page(Page::Dashboard, false);

    assert_eq!(nav.state().page(), Page::Login);
    assert_eq!(nav.state().search_query(), "");
}

// =========================================================
// 文章详情
// =========================================================

#[test]
fn open_and_close_article() {
    let mut nav = Navigator::new();
    nav.open_article(article("1"), false);

    assert_eq!(nav.state().page(), Page::NewsDetail);
    assert_eq!(nav.state().selected_article().unwrap().id, "1");

    nav.close_article(false);
    assert_eq!(nav.state().page(), Page::Home);
    assert!(nav.state().selected_article().is_none());
}

#[test]
fn leaving_detail_drops_selection() {
    let mut nav = Navigator::new();
    nav.open_article(article("1"), false);
    nav.change_page(Page::About, false);
    assert!(nav.state().selected_article().is_none());

    nav.open_article(article("2"), false);
    nav.search("boeing", false);
    assert!(nav.state().selected_article().is_none());
}

#[test]
fn selection_only_exists_on_detail_page() {
    let events = vec![
        NavEvent::OpenArticle(article("1")),
        NavEvent::ChangePage(Page::NewsDetail),
        NavEvent::ChangePage(Page::Upload),
        NavEvent::OpenArticle(article("2")),
        NavEvent::SignedIn,
        NavEvent::Search("x".to_string()),
        NavEvent::CloseArticle,
    ];
    let mut state = NavState::new();
    for event in events {
        state = transition(&state, event, false).state;
        if state.selected_article().is_some() {
            assert_eq!(state.page(), Page::NewsDetail);
        }
        if !state.search_query().is_empty() {
            assert_eq!(state.page(), Page::Home);
        }
    }
}

#[test]
fn signed_in_returns_home() {
    let mut nav = Navigator::new();
    nav.change_page(Page::Login, false);
    nav.dispatch(NavEvent::SignedIn, true);
    assert_eq!(nav.state().page(), Page::Home);
}

// =========================================================
// 过期响应保护
// =========================================================

#[test]
fn ticket_expires_when_view_changes() {
    let mut nav = Navigator::new();
    let ticket = nav.state().ticket();
    assert!(nav.state().is_current(ticket));

    nav.change_page(Page::About, false);
    assert!(!nav.state().is_current(ticket));
}

#[test]
fn ticket_survives_search_on_home() {
    let mut nav = Navigator::new();
    let ticket = nav.state().ticket();
    nav.search("markets", false);
    assert!(nav.state().is_current(ticket));
}

#[test]
fn switching_articles_expires_ticket() {
    let mut nav = Navigator::new();
    nav.open_article(article("1"), false);
    let ticket = nav.state().ticket();
    nav.open_article(article("2"), false);
    assert!(!nav.state().is_current(ticket));
}
