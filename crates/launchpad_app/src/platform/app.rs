use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use launchpad_core::{init, update, AppState, Msg};
use launchpad_engine::{EngineHandle, ReqwestQueryClient};
use launchpad_logging::{lp_debug, lp_info, lp_warn};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::input::{self, Command};
use super::ui;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Everything the main loop reacts to.
pub(crate) enum LoopEvent {
    Dispatch(Msg),
    Line(String),
    Quit,
}

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    lp_info!("Starting launchpad against {}", config.client.endpoint);

    let client = ReqwestQueryClient::new(config.client.clone())
        .context("failed to build the GraphQL client")?;
    let (engine, events) =
        EngineHandle::spawn(Arc::new(client)).context("failed to start the fetch engine")?;

    let (loop_tx, loop_rx) = mpsc::channel::<LoopEvent>();
    let mut runner = EffectRunner::new(engine, events, loop_tx.clone());
    spawn_stdin_reader(loop_tx.clone());
    spawn_slide_timer(loop_tx, config.slide_interval);

    let (mut state, effects) = init(config.start_route);
    runner.enqueue(effects);

    let mut notice: Option<String> = None;
    draw(&mut state, notice.as_deref())?;

    for event in loop_rx {
        let mut redraw = false;
        match event {
            LoopEvent::Dispatch(msg) => {
                state = dispatch(state, msg, &mut runner);
            }
            LoopEvent::Line(line) => match input::parse(&line) {
                Ok(None) => continue,
                Ok(Some(Command::Quit)) => break,
                Ok(Some(Command::Help)) => {
                    notice = Some(ui::constants::HELP.to_string());
                    redraw = true;
                }
                Ok(Some(command)) => match input::to_msg(command, &state.view()) {
                    Ok(msg) => {
                        redraw = notice.take().is_some();
                        state = dispatch(state, msg, &mut runner);
                    }
                    Err(message) => {
                        notice = Some(message);
                        redraw = true;
                    }
                },
                Err(message) => {
                    notice = Some(message);
                    redraw = true;
                }
            },
            LoopEvent::Quit => break,
        }

        if state.consume_dirty() || redraw {
            draw(&mut state, notice.as_deref())?;
        }
    }

    lp_info!("Launchpad exiting");
    Ok(())
}

fn dispatch(state: AppState, msg: Msg, runner: &mut EffectRunner) -> AppState {
    lp_debug!("dispatch {:?}", msg);
    let (state, effects) = update(state, msg);
    runner.enqueue(effects);
    state
}

fn draw(state: &mut AppState, notice: Option<&str>) -> io::Result<()> {
    state.consume_dirty();
    let text = ui::render::render(&state.view(), notice);
    let mut stdout = io::stdout().lock();
    stdout.write_all(CLEAR_SCREEN.as_bytes())?;
    stdout.write_all(text.as_bytes())?;
    stdout.write_all(b"> ")?;
    stdout.flush()
}

fn spawn_stdin_reader(loop_tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    lp_warn!("stdin read failed: {}", err);
                    break;
                }
            };
            if loop_tx.send(LoopEvent::Line(line)).is_err() {
                return;
            }
        }
        let _ = loop_tx.send(LoopEvent::Quit);
    });
}

fn spawn_slide_timer(loop_tx: mpsc::Sender<LoopEvent>, interval: Duration) {
    thread::spawn(move || loop {
        thread::sleep(interval);
        if loop_tx.send(LoopEvent::Dispatch(Msg::SlideAdvanced)).is_err() {
            break;
        }
    });
}
