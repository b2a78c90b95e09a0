//! Launchpad core: pure state machine and view-model helpers.
mod detail;
mod effect;
mod launch;
mod list;
mod msg;
mod route;
mod slideshow;
mod state;
mod update;
mod view_model;

pub use detail::{DetailStatus, LaunchDetailLoader};
pub use effect::Effect;
pub use launch::{
    DetailRequest, Epoch, LaunchDetail, LaunchId, LaunchLinks, LaunchOutcome, LaunchSummary,
    LaunchTimestamp, PageRequest, RequestTicket, SortDirection, SortKey, PAGE_SIZE,
};
pub use list::LaunchList;
pub use msg::Msg;
pub use route::Route;
pub use slideshow::{Slideshow, SLIDE_COUNT};
pub use state::{AppState, Screen, TicketCounter};
pub use update::{init, update};
pub use view_model::{
    AppViewModel, LaunchDetailView, LaunchListView, LaunchRowView, ReadyDetailView, ScreenView,
    SlideView, StatusBadge,
};
