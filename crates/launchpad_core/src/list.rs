use std::collections::BTreeSet;

use launchpad_logging::lp_debug;

use crate::{Epoch, LaunchSummary, PageRequest, SortKey, TicketCounter, PAGE_SIZE};

/// Pagination and sort state of the launch list.
///
/// `results` only ever grows by whole pages within one epoch and is emptied
/// when the sort changes. A completion is applied only if it matches the
/// request currently in flight, so late pages from an earlier epoch are
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchList {
    offset: u32,
    epoch: Epoch,
    results: Vec<LaunchSummary>,
    has_more: bool,
    in_flight: Option<PageRequest>,
    requested_offsets: BTreeSet<u32>,
    error: Option<String>,
}

impl Default for LaunchList {
    fn default() -> Self {
        Self {
            offset: 0,
            epoch: Epoch::default(),
            results: Vec::new(),
            has_more: true,
            in_flight: None,
            requested_offsets: BTreeSet::new(),
            error: None,
        }
    }
}

impl LaunchList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn results(&self) -> &[LaunchSummary] {
        &self.results
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<&PageRequest> {
        self.in_flight.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Schedules the fetch for the current offset and epoch.
    ///
    /// Returns `None` if that page was already requested in this epoch.
    pub(crate) fn request_page(&mut self, tickets: &mut TicketCounter) -> Option<PageRequest> {
        if !self.requested_offsets.insert(self.offset) {
            lp_debug!(
                "page at offset {} already requested for {:?}",
                self.offset,
                self.epoch
            );
            return None;
        }
        let request = PageRequest {
            ticket: tickets.issue(),
            offset: self.offset,
            limit: PAGE_SIZE,
            epoch: self.epoch,
        };
        self.in_flight = Some(request.clone());
        Some(request)
    }

    /// Advances to the next page. Returns `false` when loading more is not allowed.
    pub(crate) fn load_more(&mut self) -> bool {
        if !self.has_more || self.is_loading() || self.error.is_some() {
            return false;
        }
        self.offset += PAGE_SIZE;
        true
    }

    /// Starts a new epoch. The direction flips even if `key` is unchanged.
    pub(crate) fn change_sort(&mut self, key: SortKey) {
        self.epoch = Epoch {
            key,
            direction: self.epoch.direction.toggled(),
        };
        self.results.clear();
        self.offset = 0;
        self.has_more = true;
        self.in_flight = None;
        self.requested_offsets.clear();
        self.error = None;
    }

    pub(crate) fn page_received(&mut self, request: &PageRequest, page: Vec<LaunchSummary>) -> bool {
        if !self.is_current(request) {
            return false;
        }
        self.in_flight = None;
        self.has_more = page.len() == PAGE_SIZE as usize;
        self.results.extend(page);
        true
    }

    pub(crate) fn page_failed(&mut self, request: &PageRequest, message: String) -> bool {
        if !self.is_current(request) {
            return false;
        }
        self.in_flight = None;
        self.error = Some(message);
        true
    }

    fn is_current(&self, request: &PageRequest) -> bool {
        let current = self.in_flight.as_ref() == Some(request);
        if !current {
            lp_debug!(
                "discarding stale page {:?} offset={} {:?}",
                request.ticket,
                request.offset,
                request.epoch
            );
        }
        current
    }
}
