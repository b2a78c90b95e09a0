use crate::{DetailRequest, LaunchDetail, LaunchSummary, PageRequest, Route, SortKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User followed a link; mounts the screen for `Route`.
    Navigate(Route),
    /// User clicked "Load More".
    LoadMoreClicked,
    /// User clicked one of the sort buttons.
    SortClicked(SortKey),
    /// Query client delivered a page.
    LaunchesLoaded {
        request: PageRequest,
        launches: Vec<LaunchSummary>,
    },
    /// Query client failed to deliver a page.
    LaunchesFailed {
        request: PageRequest,
        message: String,
    },
    /// Query client delivered a launch detail.
    LaunchLoaded {
        request: DetailRequest,
        launch: LaunchDetail,
    },
    /// Query client failed to deliver a launch detail.
    LaunchFailed {
        request: DetailRequest,
        message: String,
    },
    /// Background slideshow timer fired.
    SlideAdvanced,
    /// User picked a slide indicator.
    SlideSelected(usize),
}
