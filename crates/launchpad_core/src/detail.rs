use launchpad_logging::lp_debug;

use crate::{DetailRequest, LaunchDetail, LaunchId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailStatus {
    Loading,
    Error(String),
    Ready(LaunchDetail),
}

/// Single-shot loader for one launch's detail projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchDetailLoader {
    request: DetailRequest,
    status: DetailStatus,
}

impl LaunchDetailLoader {
    pub(crate) fn new(request: DetailRequest) -> Self {
        Self {
            request,
            status: DetailStatus::Loading,
        }
    }

    pub fn launch_id(&self) -> &LaunchId {
        &self.request.launch_id
    }

    pub fn request(&self) -> &DetailRequest {
        &self.request
    }

    pub fn status(&self) -> &DetailStatus {
        &self.status
    }

    pub(crate) fn received(&mut self, request: &DetailRequest, launch: LaunchDetail) -> bool {
        if !self.accepts(request) {
            return false;
        }
        self.status = DetailStatus::Ready(launch);
        true
    }

    pub(crate) fn failed(&mut self, request: &DetailRequest, message: String) -> bool {
        if !self.accepts(request) {
            return false;
        }
        self.status = DetailStatus::Error(message);
        true
    }

    fn accepts(&self, request: &DetailRequest) -> bool {
        let accepted = self.request == *request && self.status == DetailStatus::Loading;
        if !accepted {
            lp_debug!(
                "ignoring detail completion {:?} for launch {}",
                request.ticket,
                request.launch_id
            );
        }
        accepted
    }
}
