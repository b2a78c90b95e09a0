//! Launchpad engine: GraphQL query client and background execution.
mod cache;
mod client;
mod engine;
mod graphql;
mod types;

pub use cache::QueryCache;
pub use client::{
    ClientSettings, ErrorSink, LoggingErrorSink, QueryClient, ReqwestQueryClient,
    DEFAULT_ENDPOINT,
};
pub use engine::EngineHandle;
pub use graphql::{GraphQlError, Operation, SourceLocation, GET_LAUNCH, GET_LAUNCHES};
pub use types::{
    EngineEvent, FailureKind, LaunchDetailRecord, LaunchRecord, LaunchesQuery, LinksRecord,
    QueryError, RequestId,
};
