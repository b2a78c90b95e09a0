use launchpad_logging::{lp_debug, lp_info, lp_warn};

use crate::state::{Screen, TicketCounter};
use crate::{AppState, DetailRequest, Effect, LaunchDetailLoader, LaunchList, Msg, Route};

/// Mounts the screen for `route` and returns the fetches it needs.
pub fn init(route: Route) -> (AppState, Vec<Effect>) {
    update(AppState::unmounted(), Msg::Navigate(route))
}

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Navigate(route) => {
            lp_info!("navigate to {}", route.path());
            state.dirty = true;
            match route {
                Route::List => {
                    let mut list = LaunchList::new();
                    let effects = request_page(&mut list, &mut state.tickets);
                    state.screen = Screen::List(list);
                    effects
                }
                Route::Launch(launch_id) => {
                    let request = DetailRequest {
                        ticket: state.tickets.issue(),
                        launch_id,
                    };
                    state.screen = Screen::Detail(LaunchDetailLoader::new(request.clone()));
                    vec![Effect::FetchLaunch(request)]
                }
            }
        }
        Msg::LoadMoreClicked => match &mut state.screen {
            Screen::List(list) => {
                if list.load_more() {
                    state.dirty = true;
                    request_page(list, &mut state.tickets)
                } else {
                    Vec::new()
                }
            }
            Screen::Detail(_) => Vec::new(),
        },
        Msg::SortClicked(key) => match &mut state.screen {
            Screen::List(list) => {
                list.change_sort(key);
                lp_info!("sort changed to {:?}", list.epoch());
                state.dirty = true;
                request_page(list, &mut state.tickets)
            }
            Screen::Detail(_) => Vec::new(),
        },
        Msg::LaunchesLoaded { request, launches } => {
            if let Screen::List(list) = &mut state.screen {
                let count = launches.len();
                if list.page_received(&request, launches) {
                    lp_debug!("applied page offset={} len={}", request.offset, count);
                    state.dirty = true;
                }
            }
            Vec::new()
        }
        Msg::LaunchesFailed { request, message } => {
            if let Screen::List(list) = &mut state.screen {
                if list.page_failed(&request, message) {
                    lp_warn!("page offset={} failed", request.offset);
                    state.dirty = true;
                }
            }
            Vec::new()
        }
        Msg::LaunchLoaded { request, launch } => {
            if let Screen::Detail(loader) = &mut state.screen {
                if loader.received(&request, launch) {
                    state.dirty = true;
                }
            }
            Vec::new()
        }
        Msg::LaunchFailed { request, message } => {
            if let Screen::Detail(loader) = &mut state.screen {
                if loader.failed(&request, message) {
                    lp_warn!("launch {} failed to load", request.launch_id);
                    state.dirty = true;
                }
            }
            Vec::new()
        }
        Msg::SlideAdvanced => {
            state.slideshow.advance();
            if matches!(state.screen, Screen::List(_)) {
                state.dirty = true;
            }
            Vec::new()
        }
        Msg::SlideSelected(index) => {
            if state.slideshow.select(index) && matches!(state.screen, Screen::List(_)) {
                state.dirty = true;
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn request_page(list: &mut LaunchList, tickets: &mut TicketCounter) -> Vec<Effect> {
    list.request_page(tickets)
        .map(Effect::FetchLaunches)
        .into_iter()
        .collect()
}
