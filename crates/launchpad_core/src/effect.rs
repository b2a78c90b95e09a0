use crate::{DetailRequest, PageRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch one page of the launch list.
    FetchLaunches(PageRequest),
    /// Fetch the detail projection of one launch.
    FetchLaunch(DetailRequest),
}
