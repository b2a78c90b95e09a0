use std::fmt;

use chrono::{DateTime, FixedOffset};

/// Number of launches requested per page.
pub const PAGE_SIZE: u32 = 10;

/// Opaque launch identifier as issued by the query service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LaunchId(String);

impl LaunchId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LaunchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Local launch time exactly as the server sent it.
///
/// Parsing is deferred to formatting time; a value that is not RFC 3339 is
/// displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchTimestamp(String);

impl LaunchTimestamp {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    pub fn parsed(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.0.trim()).ok()
    }

    /// `M/D/YYYY` in the launch site's offset.
    pub fn date_label(&self) -> String {
        match self.parsed() {
            Some(at) => at.format("%-m/%-d/%Y").to_string(),
            None => self.0.clone(),
        }
    }

    /// `M/D/YYYY, h:mm:ss AM` in the launch site's offset.
    pub fn date_time_label(&self) -> String {
        match self.parsed() {
            Some(at) => at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
            None => self.0.clone(),
        }
    }
}

/// Tri-state launch result; the wire form is `boolean | null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    Succeeded,
    Failed,
    Pending,
}

impl From<Option<bool>> for LaunchOutcome {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => LaunchOutcome::Succeeded,
            Some(false) => LaunchOutcome::Failed,
            None => LaunchOutcome::Pending,
        }
    }
}

/// List projection of a launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSummary {
    pub id: LaunchId,
    pub mission_name: String,
    pub launch_date_local: LaunchTimestamp,
    pub outcome: LaunchOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LaunchLinks {
    pub article_link: Option<String>,
    pub video_link: Option<String>,
}

/// Detail projection of a launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchDetail {
    pub mission_name: String,
    pub launch_date_local: LaunchTimestamp,
    pub outcome: LaunchOutcome,
    pub details: Option<String>,
    pub links: LaunchLinks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    MissionName,
    LaunchDate,
}

impl SortKey {
    /// Field name understood by the `launches` query.
    pub fn as_query_str(self) -> &'static str {
        match self {
            SortKey::MissionName => "mission_name",
            SortKey::LaunchDate => "launch_date_local",
        }
    }

    pub fn from_query_str(value: &str) -> Option<Self> {
        match value {
            "mission_name" => Some(SortKey::MissionName),
            "launch_date_local" => Some(SortKey::LaunchDate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_query_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// Sort key and direction that results accumulate under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Epoch {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for Epoch {
    fn default() -> Self {
        Self {
            key: SortKey::LaunchDate,
            direction: SortDirection::Descending,
        }
    }
}

/// Identifies one issued fetch for the lifetime of an `AppState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestTicket(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub ticket: RequestTicket,
    pub offset: u32,
    pub limit: u32,
    pub epoch: Epoch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub ticket: RequestTicket,
    pub launch_id: LaunchId,
}
