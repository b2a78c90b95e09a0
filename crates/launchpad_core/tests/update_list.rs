use std::sync::Once;

use launchpad_core::{
    init, update, AppState, Effect, LaunchId, LaunchOutcome, LaunchSummary, LaunchTimestamp, Msg,
    PageRequest, Route, ScreenView, SortDirection, SortKey, PAGE_SIZE,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(launchpad_logging::initialize_for_tests);
}

fn launches(prefix: &str, count: usize) -> Vec<LaunchSummary> {
    (0..count)
        .map(|i| LaunchSummary {
            id: LaunchId::new(format!("{prefix}-{i}")),
            mission_name: format!("{prefix} mission {i}"),
            launch_date_local: LaunchTimestamp::new("2020-01-07T21:19:00-05:00"),
            outcome: LaunchOutcome::from(Some(i % 2 == 0)),
        })
        .collect()
}

fn page_request(effects: &[Effect]) -> PageRequest {
    match effects {
        [Effect::FetchLaunches(request)] => request.clone(),
        other => panic!("expected a single page fetch, got {other:?}"),
    }
}

fn ids(state: &AppState) -> Vec<String> {
    state
        .list()
        .expect("list screen")
        .results()
        .iter()
        .map(|launch| launch.id.as_str().to_string())
        .collect()
}

fn deliver(state: AppState, request: &PageRequest, page: Vec<LaunchSummary>) -> AppState {
    let (state, effects) = update(
        state,
        Msg::LaunchesLoaded {
            request: request.clone(),
            launches: page,
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn initial_mount_requests_first_page_by_date_descending() {
    init_logging();
    let (state, effects) = init(Route::List);
    let request = page_request(&effects);

    assert_eq!(request.offset, 0);
    assert_eq!(request.limit, PAGE_SIZE);
    assert_eq!(request.epoch.key.as_query_str(), "launch_date_local");
    assert_eq!(request.epoch.direction.as_query_str(), "desc");

    let list = state.list().unwrap();
    assert!(list.is_loading());
    assert!(list.has_more());
    assert!(list.results().is_empty());

    let state = deliver(state, &request, launches("a", 10));
    let list = state.list().unwrap();
    assert_eq!(list.results().len(), 10);
    assert!(list.has_more());
    assert!(!list.is_loading());
}

#[test]
fn load_more_appends_short_page_and_stops() {
    init_logging();
    let (state, effects) = init(Route::List);
    let first = page_request(&effects);
    let state = deliver(state, &first, launches("a", 10));

    let (state, effects) = update(state, Msg::LoadMoreClicked);
    let second = page_request(&effects);
    assert_eq!(second.offset, 10);
    assert_eq!(second.epoch, first.epoch);
    assert_eq!(state.list().unwrap().offset(), 10);

    let state = deliver(state, &second, launches("b", 4));
    let list = state.list().unwrap();
    assert_eq!(list.results().len(), 14);
    assert!(!list.has_more());

    let mut expected: Vec<String> = (0..10).map(|i| format!("a-{i}")).collect();
    expected.extend((0..4).map(|i| format!("b-{i}")));
    assert_eq!(ids(&state), expected);

    let (state, effects) = update(state, Msg::LoadMoreClicked);
    assert!(effects.is_empty());
    assert_eq!(state.list().unwrap().offset(), 10);
}

#[test]
fn empty_page_clears_has_more() {
    init_logging();
    let (state, effects) = init(Route::List);
    let first = page_request(&effects);
    let state = deliver(state, &first, launches("a", 10));
    let (state, effects) = update(state, Msg::LoadMoreClicked);
    let state = deliver(state, &page_request(&effects), Vec::new());

    let list = state.list().unwrap();
    assert_eq!(list.results().len(), 10);
    assert!(!list.has_more());
}

#[test]
fn change_sort_resets_epoch_and_flips_direction() {
    init_logging();
    let (state, effects) = init(Route::List);
    let state = deliver(state, &page_request(&effects), launches("a", 10));
    let (state, effects) = update(state, Msg::LoadMoreClicked);
    let state = deliver(state, &page_request(&effects), launches("b", 4));

    let (state, effects) = update(state, Msg::SortClicked(SortKey::MissionName));
    let request = page_request(&effects);
    let list = state.list().unwrap();

    assert!(list.results().is_empty());
    assert_eq!(list.offset(), 0);
    assert!(list.has_more());
    assert_eq!(list.epoch().key, SortKey::MissionName);
    assert_eq!(list.epoch().direction, SortDirection::Ascending);
    assert_eq!(request.offset, 0);
    assert_eq!(request.epoch.key.as_query_str(), "mission_name");
    assert_eq!(request.epoch.direction.as_query_str(), "asc");
}

#[test]
fn repeated_clicks_on_same_sort_keep_flipping() {
    init_logging();
    let (state, _effects) = init(Route::List);
    let mut state = state;
    let mut directions = Vec::new();
    for _ in 0..3 {
        let (next, effects) = update(state, Msg::SortClicked(SortKey::LaunchDate));
        assert_eq!(page_request(&effects).offset, 0);
        directions.push(next.list().unwrap().epoch().direction);
        state = next;
    }
    assert_eq!(
        directions,
        vec![
            SortDirection::Ascending,
            SortDirection::Descending,
            SortDirection::Ascending
        ]
    );
}

#[test]
fn change_sort_while_loading_discards_stale_page() {
    init_logging();
    let (state, effects) = init(Route::List);
    let stale = page_request(&effects);

    let (state, effects) = update(state, Msg::SortClicked(SortKey::MissionName));
    let current = page_request(&effects);
    assert_ne!(stale.epoch, current.epoch);

    let state = deliver(state, &stale, launches("stale", 10));
    assert!(ids(&state).is_empty());
    assert!(state.list().unwrap().is_loading());

    let state = deliver(state, &current, launches("fresh", 3));
    assert_eq!(ids(&state), vec!["fresh-0", "fresh-1", "fresh-2"]);
    assert!(!state.list().unwrap().has_more());
}

#[test]
fn stale_page_from_earlier_instance_of_same_epoch_is_discarded() {
    init_logging();
    let (state, effects) = init(Route::List);
    let stale = page_request(&effects);

    let (state, _) = update(state, Msg::SortClicked(SortKey::LaunchDate));
    let (state, effects) = update(state, Msg::SortClicked(SortKey::LaunchDate));
    let current = page_request(&effects);
    assert_eq!(stale.epoch, current.epoch);

    let state = deliver(state, &stale, launches("stale", 10));
    assert!(ids(&state).is_empty());

    let state = deliver(state, &current, launches("fresh", 10));
    assert_eq!(ids(&state).len(), 10);
    assert!(ids(&state).iter().all(|id| id.starts_with("fresh")));
}

#[test]
fn page_is_applied_exactly_once() {
    init_logging();
    let (state, effects) = init(Route::List);
    let request = page_request(&effects);
    let state = deliver(state, &request, launches("a", 10));
    let state = deliver(state, &request, launches("a", 10));

    assert_eq!(ids(&state).len(), 10);
}

#[test]
fn load_more_is_ignored_while_loading() {
    init_logging();
    let (state, effects) = init(Route::List);
    let first = page_request(&effects);
    let state = deliver(state, &first, launches("a", 10));

    let (state, effects) = update(state, Msg::LoadMoreClicked);
    assert_eq!(effects.len(), 1);
    let (state, effects) = update(state, Msg::LoadMoreClicked);
    assert!(effects.is_empty());
    assert_eq!(state.list().unwrap().offset(), 10);
}

#[test]
fn fetch_failure_keeps_results_and_blocks_load_more() {
    init_logging();
    let (state, effects) = init(Route::List);
    let state = deliver(state, &page_request(&effects), launches("a", 10));
    let (state, effects) = update(state, Msg::LoadMoreClicked);
    let request = page_request(&effects);

    let (mut state, effects) = update(
        state,
        Msg::LaunchesFailed {
            request,
            message: "network error: connection refused".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert!(state.consume_dirty());

    let list = state.list().unwrap();
    assert_eq!(list.results().len(), 10);
    assert_eq!(list.offset(), 10);
    assert!(!list.is_loading());
    assert_eq!(list.error(), Some("network error: connection refused"));

    let ScreenView::List(view) = state.view().screen else {
        panic!("expected list view");
    };
    assert_eq!(view.error.as_deref(), Some("network error: connection refused"));
    assert!(!view.show_load_more);

    let (state, effects) = update(state, Msg::LoadMoreClicked);
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::SortClicked(SortKey::MissionName));
    assert_eq!(page_request(&effects).offset, 0);
    assert_eq!(state.list().unwrap().error(), None);
}

#[test]
fn list_view_reflects_loading_and_rows() {
    init_logging();
    let (state, effects) = init(Route::List);
    let ScreenView::List(view) = state.view().screen else {
        panic!("expected list view");
    };
    assert!(view.loading);
    assert!(!view.load_more_enabled);
    assert_eq!(view.load_more_label, "Loading...");

    let state = deliver(state, &page_request(&effects), launches("a", 10));
    let ScreenView::List(view) = state.view().screen else {
        panic!("expected list view");
    };
    assert!(view.show_load_more);
    assert!(view.load_more_enabled);
    assert_eq!(view.load_more_label, "Load More");
    assert_eq!(view.rows.len(), 10);
    assert_eq!(view.rows[0].href, "/launch/a-0");
    assert_eq!(view.rows[0].date_label, "1/7/2020");
    assert_eq!(view.rows[0].badge.label(), "Success");
    assert_eq!(view.rows[1].badge.label(), "Failed");
}
