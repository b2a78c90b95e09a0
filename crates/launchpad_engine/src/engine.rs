use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use launchpad_logging::{lp_debug, lp_warn};

use crate::client::QueryClient;
use crate::{EngineEvent, LaunchesQuery, RequestId};

enum EngineCommand {
    FetchLaunches {
        request_id: RequestId,
        query: LaunchesQuery,
    },
    FetchLaunch {
        request_id: RequestId,
        id: String,
    },
}

/// Sends queries to a background runtime; results come back on the event receiver.
///
/// Each command runs as its own task, so events may arrive in a different order
/// than the commands were sent.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn spawn(
        client: Arc<dyn QueryClient>,
    ) -> io::Result<(Self, mpsc::Receiver<EngineEvent>)> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("launchpad-engine-worker")
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::Builder::new()
            .name("launchpad-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let client = client.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(client.as_ref(), command, event_tx).await;
                    });
                }
                lp_debug!("engine command channel closed");
            })?;

        Ok((Self { cmd_tx }, event_rx))
    }

    pub fn fetch_launches(&self, request_id: RequestId, query: LaunchesQuery) {
        self.send(EngineCommand::FetchLaunches { request_id, query });
    }

    pub fn fetch_launch(&self, request_id: RequestId, id: impl Into<String>) {
        self.send(EngineCommand::FetchLaunch {
            request_id,
            id: id.into(),
        });
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            lp_warn!("engine thread has stopped; command dropped");
        }
    }
}

async fn handle_command(
    client: &dyn QueryClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::FetchLaunches { request_id, query } => EngineEvent::LaunchesFetched {
            request_id,
            result: client.launches(&query).await,
        },
        EngineCommand::FetchLaunch { request_id, id } => EngineEvent::LaunchFetched {
            request_id,
            result: client.launch(&id).await,
        },
    };
    let _ = event_tx.send(event);
}
