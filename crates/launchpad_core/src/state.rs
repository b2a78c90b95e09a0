use crate::view_model::{
    AppViewModel, LaunchDetailView, LaunchListView, LaunchRowView, ReadyDetailView, ScreenView,
    SlideView, StatusBadge,
};
use crate::{DetailStatus, LaunchDetailLoader, LaunchList, RequestTicket, Route, Slideshow};

/// Hands out request tickets that stay unique across remounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TicketCounter {
    next: u64,
}

impl TicketCounter {
    pub(crate) fn issue(&mut self) -> RequestTicket {
        self.next += 1;
        RequestTicket(self.next)
    }
}

/// The screen currently mounted. Unmounting drops its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List(LaunchList),
    Detail(LaunchDetailLoader),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub(crate) screen: Screen,
    pub(crate) slideshow: Slideshow,
    pub(crate) tickets: TicketCounter,
    pub(crate) dirty: bool,
}

impl AppState {
    /// State before any screen is mounted; see [`crate::init`].
    pub(crate) fn unmounted() -> Self {
        Self {
            screen: Screen::List(LaunchList::new()),
            slideshow: Slideshow::default(),
            tickets: TicketCounter::default(),
            dirty: false,
        }
    }

    pub fn route(&self) -> Route {
        match &self.screen {
            Screen::List(_) => Route::List,
            Screen::Detail(loader) => Route::Launch(loader.launch_id().clone()),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn list(&self) -> Option<&LaunchList> {
        match &self.screen {
            Screen::List(list) => Some(list),
            Screen::Detail(_) => None,
        }
    }

    pub fn detail(&self) -> Option<&LaunchDetailLoader> {
        match &self.screen {
            Screen::Detail(loader) => Some(loader),
            Screen::List(_) => None,
        }
    }

    pub fn slideshow(&self) -> Slideshow {
        self.slideshow
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let screen = match &self.screen {
            Screen::List(list) => ScreenView::List(list_view(list)),
            Screen::Detail(loader) => ScreenView::Detail(detail_view(loader)),
        };
        AppViewModel {
            screen,
            slide: SlideView {
                current: self.slideshow.current(),
                count: self.slideshow.count(),
            },
            dirty: self.dirty,
        }
    }
}

fn list_view(list: &LaunchList) -> LaunchListView {
    let rows = list
        .results()
        .iter()
        .map(|launch| LaunchRowView {
            id: launch.id.clone(),
            mission_name: launch.mission_name.clone(),
            date_label: launch.launch_date_local.date_label(),
            badge: StatusBadge::from(launch.outcome),
            href: Route::Launch(launch.id.clone()).path(),
        })
        .collect();
    let loading = list.is_loading();
    let error = list.error().map(ToOwned::to_owned);
    LaunchListView {
        rows,
        sort: list.epoch(),
        loading,
        has_more: list.has_more(),
        show_load_more: list.has_more() && error.is_none(),
        load_more_enabled: !loading,
        load_more_label: if loading { "Loading..." } else { "Load More" },
        error,
    }
}

fn detail_view(loader: &LaunchDetailLoader) -> LaunchDetailView {
    let back_href = Route::List.path();
    match loader.status() {
        DetailStatus::Loading => LaunchDetailView::Loading,
        DetailStatus::Error(message) => LaunchDetailView::Error {
            message: message.clone(),
            back_href,
        },
        DetailStatus::Ready(launch) => LaunchDetailView::Ready(ReadyDetailView {
            mission_name: launch.mission_name.clone(),
            date_time_label: launch.launch_date_local.date_time_label(),
            badge: StatusBadge::from(launch.outcome),
            details: launch
                .details
                .as_ref()
                .filter(|text| !text.is_empty())
                .cloned(),
            article_link: non_empty(&launch.links.article_link),
            video_link: non_empty(&launch.links.video_link),
            back_href,
        }),
    }
}

fn non_empty(link: &Option<String>) -> Option<String> {
    link.as_ref().filter(|value| !value.is_empty()).cloned()
}
