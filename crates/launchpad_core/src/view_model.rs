use crate::{Epoch, LaunchId, LaunchOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub screen: ScreenView,
    pub slide: SlideView,
    pub dirty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideView {
    pub current: usize,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    List(LaunchListView),
    Detail(LaunchDetailView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchListView {
    pub rows: Vec<LaunchRowView>,
    pub sort: Epoch,
    pub loading: bool,
    pub has_more: bool,
    pub show_load_more: bool,
    pub load_more_enabled: bool,
    pub load_more_label: &'static str,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRowView {
    pub id: LaunchId,
    pub mission_name: String,
    pub date_label: String,
    pub badge: StatusBadge,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchDetailView {
    /// Only a progress indicator is shown.
    Loading,
    Error { message: String, back_href: String },
    Ready(ReadyDetailView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyDetailView {
    pub mission_name: String,
    pub date_time_label: String,
    pub badge: StatusBadge,
    /// Present only when the server sent non-empty text.
    pub details: Option<String>,
    pub article_link: Option<String>,
    pub video_link: Option<String>,
    pub back_href: String,
}

impl ReadyDetailView {
    pub fn has_links(&self) -> bool {
        self.article_link.is_some() || self.video_link.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Upcoming,
    Success,
    Failed,
}

impl StatusBadge {
    pub fn label(self) -> &'static str {
        match self {
            StatusBadge::Upcoming => "Upcoming",
            StatusBadge::Success => "Success",
            StatusBadge::Failed => "Failed",
        }
    }
}

impl From<LaunchOutcome> for StatusBadge {
    fn from(outcome: LaunchOutcome) -> Self {
        match outcome {
            LaunchOutcome::Succeeded => StatusBadge::Success,
            LaunchOutcome::Failed => StatusBadge::Failed,
            LaunchOutcome::Pending => StatusBadge::Upcoming,
        }
    }
}
