use std::collections::HashMap;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use launchpad_core::{
    DetailRequest, Effect, LaunchDetail, LaunchId, LaunchLinks, LaunchOutcome, LaunchSummary,
    LaunchTimestamp, Msg, PageRequest,
};
use launchpad_engine::{
    EngineEvent, EngineHandle, LaunchDetailRecord, LaunchRecord, LaunchesQuery, RequestId,
};
use launchpad_logging::{lp_info, lp_warn};

use super::app::LoopEvent;

#[derive(Debug, Clone)]
enum Pending {
    Page(PageRequest),
    Detail(DetailRequest),
}

/// Runs core effects on the engine and feeds engine results back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
    pending: Arc<Mutex<HashMap<RequestId, Pending>>>,
    next_id: RequestId,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        events: mpsc::Receiver<EngineEvent>,
        loop_tx: mpsc::Sender<LoopEvent>,
    ) -> Self {
        let runner = Self {
            engine,
            pending: Arc::new(Mutex::new(HashMap::new())),
            next_id: 0,
        };
        runner.spawn_event_loop(events, loop_tx);
        runner
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.next_id += 1;
            let request_id = self.next_id;
            match effect {
                Effect::FetchLaunches(request) => {
                    lp_info!(
                        "FetchLaunches request_id={} offset={} sort={} order={}",
                        request_id,
                        request.offset,
                        request.epoch.key.as_query_str(),
                        request.epoch.direction.as_query_str()
                    );
                    let query = to_query(&request);
                    self.remember(request_id, Pending::Page(request));
                    self.engine.fetch_launches(request_id, query);
                }
                Effect::FetchLaunch(request) => {
                    lp_info!(
                        "FetchLaunch request_id={} id={}",
                        request_id,
                        request.launch_id
                    );
                    let id = request.launch_id.as_str().to_string();
                    self.remember(request_id, Pending::Detail(request));
                    self.engine.fetch_launch(request_id, id);
                }
            }
        }
    }

    fn remember(&self, request_id: RequestId, pending: Pending) {
        if let Ok(mut map) = self.pending.lock() {
            map.insert(request_id, pending);
        }
    }

    fn spawn_event_loop(
        &self,
        events: mpsc::Receiver<EngineEvent>,
        loop_tx: mpsc::Sender<LoopEvent>,
    ) {
        let pending = self.pending.clone();
        thread::spawn(move || {
            for event in events {
                let Some(msg) = to_msg(&pending, event) else {
                    continue;
                };
                if loop_tx.send(LoopEvent::Dispatch(msg)).is_err() {
                    break;
                }
            }
        });
    }
}

fn to_msg(pending: &Mutex<HashMap<RequestId, Pending>>, event: EngineEvent) -> Option<Msg> {
    let (request_id, origin) = match &event {
        EngineEvent::LaunchesFetched { request_id, .. }
        | EngineEvent::LaunchFetched { request_id, .. } => {
            let origin = pending.lock().ok()?.remove(request_id);
            (*request_id, origin)
        }
    };

    match (origin, event) {
        (Some(Pending::Page(request)), EngineEvent::LaunchesFetched { result, .. }) => {
            Some(match result {
                Ok(records) => Msg::LaunchesLoaded {
                    request,
                    launches: records.into_iter().map(to_summary).collect(),
                },
                Err(err) => Msg::LaunchesFailed {
                    request,
                    message: err.to_string(),
                },
            })
        }
        (Some(Pending::Detail(request)), EngineEvent::LaunchFetched { result, .. }) => {
            Some(match result {
                Ok(record) => Msg::LaunchLoaded {
                    request,
                    launch: to_detail(record),
                },
                Err(err) => Msg::LaunchFailed {
                    request,
                    message: err.to_string(),
                },
            })
        }
        _ => {
            lp_warn!("engine event for unknown request_id={}", request_id);
            None
        }
    }
}

fn to_query(request: &PageRequest) -> LaunchesQuery {
    LaunchesQuery {
        offset: request.offset,
        limit: request.limit,
        sort: request.epoch.key.as_query_str().to_string(),
        order: request.epoch.direction.as_query_str().to_string(),
    }
}

fn to_summary(record: LaunchRecord) -> LaunchSummary {
    LaunchSummary {
        id: LaunchId::new(record.id),
        mission_name: record.mission_name.unwrap_or_default(),
        launch_date_local: LaunchTimestamp::new(record.launch_date_local.unwrap_or_default()),
        outcome: LaunchOutcome::from(record.launch_success),
    }
}

fn to_detail(record: LaunchDetailRecord) -> LaunchDetail {
    let links = record.links.unwrap_or_default();
    LaunchDetail {
        mission_name: record.mission_name.unwrap_or_default(),
        launch_date_local: LaunchTimestamp::new(record.launch_date_local.unwrap_or_default()),
        outcome: LaunchOutcome::from(record.launch_success),
        details: record.details,
        links: LaunchLinks {
            article_link: links.article_link,
            video_link: links.video_link,
        },
    }
}
