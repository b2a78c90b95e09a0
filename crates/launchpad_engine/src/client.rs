use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use launchpad_logging::{lp_debug, lp_error};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::cache::QueryCache;
use crate::graphql::{
    GraphQlError, GraphQlRequest, GraphQlResponse, LaunchData, LaunchVariables, LaunchesData,
    Operation, GET_LAUNCH, GET_LAUNCHES,
};
use crate::{FailureKind, LaunchDetailRecord, LaunchRecord, LaunchesQuery, QueryError};

pub const DEFAULT_ENDPOINT: &str = "https://spacex-production.up.railway.app/";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Receives every failure before it is returned to the caller.
pub trait ErrorSink: Send + Sync {
    fn graphql_errors(&self, operation: &str, errors: &[GraphQlError]);
    fn network_error(&self, operation: &str, error: &QueryError);
}

/// Default sink: writes each failure to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingErrorSink;

impl ErrorSink for LoggingErrorSink {
    fn graphql_errors(&self, operation: &str, errors: &[GraphQlError]) {
        for error in errors {
            lp_error!(
                "[GraphQL error]: Operation: {}, Message: {}, Location: {:?}, Path: {:?}",
                operation,
                error.message,
                error.locations,
                error.path
            );
        }
    }

    fn network_error(&self, operation: &str, error: &QueryError) {
        lp_error!("[Network error]: Operation: {}, {}", operation, error);
    }
}

/// The two launch queries. Implemented over HTTP by [`ReqwestQueryClient`].
#[async_trait::async_trait]
pub trait QueryClient: Send + Sync {
    async fn launches(&self, query: &LaunchesQuery) -> Result<Vec<LaunchRecord>, QueryError>;

    async fn launch(&self, id: &str) -> Result<LaunchDetailRecord, QueryError>;
}

pub struct ReqwestQueryClient {
    settings: ClientSettings,
    endpoint: Url,
    http: reqwest::Client,
    cache: QueryCache,
    errors: Arc<dyn ErrorSink>,
}

impl ReqwestQueryClient {
    pub fn new(settings: ClientSettings) -> Result<Self, QueryError> {
        Self::with_error_sink(settings, Arc::new(LoggingErrorSink))
    }

    pub fn with_error_sink(
        settings: ClientSettings,
        errors: Arc<dyn ErrorSink>,
    ) -> Result<Self, QueryError> {
        let endpoint = Url::parse(&settings.endpoint)
            .map_err(|err| QueryError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| QueryError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            settings,
            endpoint,
            http,
            cache: QueryCache::new(),
            errors,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Runs `operation`, answering from the cache when the same variables were seen before.
    async fn execute<V, T>(&self, operation: Operation, variables: &V) -> Result<T, QueryError>
    where
        V: Serialize + Sync,
        T: DeserializeOwned,
    {
        let key = QueryCache::key(operation, variables);
        if let Some(data) = key.as_deref().and_then(|key| self.cache.get(key)) {
            lp_debug!("cache hit for {}", operation.name);
            if let Ok(decoded) = serde_json::from_value(data) {
                return Ok(decoded);
            }
        }

        let data = match self.post(operation, variables).await {
            Ok(data) => data,
            Err(err) => {
                if err.kind != FailureKind::GraphQl {
                    self.errors.network_error(operation.name, &err);
                }
                return Err(err);
            }
        };

        let decoded = serde_json::from_value(data.clone()).map_err(|err| {
            let err = QueryError::new(FailureKind::Decode, err.to_string());
            self.errors.network_error(operation.name, &err);
            err
        })?;
        if let Some(key) = key {
            self.cache.insert(key, data);
        }
        Ok(decoded)
    }

    async fn post<V: Serialize + Sync>(
        &self,
        operation: Operation,
        variables: &V,
    ) -> Result<serde_json::Value, QueryError> {
        let body = serde_json::to_vec(&GraphQlRequest {
            query: operation.document,
            operation_name: operation.name,
            variables,
        })
        .map_err(|err| QueryError::new(FailureKind::Decode, err.to_string()))?;

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large());
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            if bytes.len() as u64 + chunk.len() as u64 > self.settings.max_bytes {
                return Err(self.too_large());
            }
            bytes.extend_from_slice(&chunk);
        }

        let envelope: GraphQlResponse = serde_json::from_slice(&bytes)
            .map_err(|err| QueryError::new(FailureKind::Decode, err.to_string()))?;

        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            self.errors.graphql_errors(operation.name, &errors);
            let message = errors
                .iter()
                .map(|error| error.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(QueryError::new(FailureKind::GraphQl, message));
        }

        envelope
            .data
            .ok_or_else(|| QueryError::new(FailureKind::Decode, "response carried no data"))
    }

    fn too_large(&self) -> QueryError {
        QueryError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl QueryClient for ReqwestQueryClient {
    async fn launches(&self, query: &LaunchesQuery) -> Result<Vec<LaunchRecord>, QueryError> {
        let data: LaunchesData = self.execute(GET_LAUNCHES, query).await?;
        Ok(data.launches.unwrap_or_default())
    }

    async fn launch(&self, id: &str) -> Result<LaunchDetailRecord, QueryError> {
        let data: LaunchData = self.execute(GET_LAUNCH, &LaunchVariables { id }).await?;
        data.launch.ok_or_else(|| {
            QueryError::new(FailureKind::NotFound, format!("launch {id} does not exist"))
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> QueryError {
    if err.is_timeout() {
        return QueryError::new(FailureKind::Timeout, err.to_string());
    }
    QueryError::new(FailureKind::Network, err.to_string())
}
