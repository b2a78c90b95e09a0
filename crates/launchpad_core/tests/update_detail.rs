use std::sync::Once;

use launchpad_core::{
    init, update, DetailRequest, DetailStatus, Effect, LaunchDetail, LaunchDetailView, LaunchId,
    LaunchLinks, LaunchOutcome, LaunchTimestamp, Msg, Route, ScreenView, SortKey, StatusBadge,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(launchpad_logging::initialize_for_tests);
}

fn detail_request(effects: &[Effect]) -> DetailRequest {
    match effects {
        [Effect::FetchLaunch(request)] => request.clone(),
        other => panic!("expected a single detail fetch, got {other:?}"),
    }
}

fn detail_view(view: ScreenView) -> LaunchDetailView {
    match view {
        ScreenView::Detail(detail) => detail,
        ScreenView::List(_) => panic!("expected detail view"),
    }
}

fn bare_launch() -> LaunchDetail {
    LaunchDetail {
        mission_name: "Starlink-15 (v1.0)".to_string(),
        launch_date_local: LaunchTimestamp::new("2020-10-24T11:31:00-04:00"),
        outcome: LaunchOutcome::Pending,
        details: None,
        links: LaunchLinks::default(),
    }
}

#[test]
fn opening_launch_issues_single_fetch() {
    init_logging();
    let (state, effects) = init(Route::Launch(LaunchId::new("abc")));
    let request = detail_request(&effects);

    assert_eq!(request.launch_id, LaunchId::new("abc"));
    assert_eq!(state.route(), Route::Launch(LaunchId::new("abc")));
    assert_eq!(
        detail_view(state.view().screen),
        LaunchDetailView::Loading
    );
}

#[test]
fn network_failure_shows_message_and_back_link() {
    init_logging();
    let (state, effects) = init(Route::Launch(LaunchId::new("abc")));
    let request = detail_request(&effects);

    let (state, effects) = update(
        state,
        Msg::LaunchFailed {
            request,
            message: "network error: connection reset".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(
        detail_view(state.view().screen),
        LaunchDetailView::Error {
            message: "network error: connection reset".to_string(),
            back_href: "/".to_string(),
        }
    );
    assert!(matches!(
        state.detail().unwrap().status(),
        DetailStatus::Error(_)
    ));
}

#[test]
fn launch_without_details_or_links_hides_sections() {
    init_logging();
    let (state, effects) = init(Route::Launch(LaunchId::new("abc")));
    let request = detail_request(&effects);

    let (state, _) = update(
        state,
        Msg::LaunchLoaded {
            request,
            launch: bare_launch(),
        },
    );
    let LaunchDetailView::Ready(ready) = detail_view(state.view().screen) else {
        panic!("expected ready view");
    };
    assert_eq!(ready.mission_name, "Starlink-15 (v1.0)");
    assert_eq!(ready.date_time_label, "10/24/2020, 11:31:00 AM");
    assert_eq!(ready.badge, StatusBadge::Upcoming);
    assert_eq!(ready.details, None);
    assert!(!ready.has_links());
    assert_eq!(ready.back_href, "/");
}

#[test]
fn empty_details_text_is_hidden_and_links_kept() {
    init_logging();
    let (state, effects) = init(Route::Launch(LaunchId::new("abc")));
    let request = detail_request(&effects);
    let launch = LaunchDetail {
        outcome: LaunchOutcome::Succeeded,
        details: Some(String::new()),
        links: LaunchLinks {
            article_link: None,
            video_link: Some("https://youtu.be/J442-ti-Dhg".to_string()),
        },
        ..bare_launch()
    };

    let (state, _) = update(state, Msg::LaunchLoaded { request, launch });
    let LaunchDetailView::Ready(ready) = detail_view(state.view().screen) else {
        panic!("expected ready view");
    };
    assert_eq!(ready.details, None);
    assert_eq!(ready.badge, StatusBadge::Success);
    assert_eq!(ready.article_link, None);
    assert_eq!(
        ready.video_link.as_deref(),
        Some("https://youtu.be/J442-ti-Dhg")
    );
    assert!(ready.has_links());
}

#[test]
fn completion_for_previous_launch_is_ignored() {
    init_logging();
    let (state, effects) = init(Route::Launch(LaunchId::new("abc")));
    let stale = detail_request(&effects);
    let (state, effects) = update(state, Msg::Navigate(Route::Launch(LaunchId::new("def"))));
    let current = detail_request(&effects);

    let (state, _) = update(
        state,
        Msg::LaunchLoaded {
            request: stale,
            launch: bare_launch(),
        },
    );
    assert_eq!(detail_view(state.view().screen), LaunchDetailView::Loading);

    let (state, _) = update(
        state,
        Msg::LaunchFailed {
            request: current,
            message: "launch def not found".to_string(),
        },
    );
    assert!(matches!(
        detail_view(state.view().screen),
        LaunchDetailView::Error { .. }
    ));
}

#[test]
fn returning_to_list_remounts_fresh_controller() {
    init_logging();
    let (state, _) = init(Route::List);
    let (state, _) = update(state, Msg::SortClicked(SortKey::MissionName));
    let (state, _) = update(state, Msg::Navigate(Route::Launch(LaunchId::new("abc"))));
    assert!(state.list().is_none());

    let (state, effects) = update(state, Msg::Navigate(Route::List));
    let [Effect::FetchLaunches(request)] = effects.as_slice() else {
        panic!("expected page fetch");
    };
    assert_eq!(request.offset, 0);
    assert_eq!(request.epoch.key, SortKey::LaunchDate);
    assert!(state.list().unwrap().results().is_empty());
}

#[test]
fn list_messages_are_ignored_on_detail_screen() {
    init_logging();
    let (state, _) = init(Route::Launch(LaunchId::new("abc")));
    let before = state.clone();

    let (state, effects) = update(state, Msg::LoadMoreClicked);
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::SortClicked(SortKey::MissionName));
    assert!(effects.is_empty());
    assert_eq!(state, before);
}
