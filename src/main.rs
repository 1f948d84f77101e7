use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use seesaw::command::{self, Command};
use seesaw::config::SimConfig;
use seesaw::consts::FRAME_INTERVAL_MS;
use seesaw::engine::EngineCore;
use seesaw::persist::{JsonFileStore, StateStore};
use seesaw::render::{LogRenderSink, RenderSink};
use seesaw::runtime::{Host, LogSoundSink, SoundSink};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

const DEFAULT_STATE_PATH: &str = "seesaw-state.json";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match SimConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "invalid SEESAW_* setting, using defaults");
            SimConfig::default()
        }
    };
    let state_path = std::env::var("SEESAW_STATE_PATH").unwrap_or_else(|_| DEFAULT_STATE_PATH.into());

    let store = JsonFileStore::new(state_path.clone());
    let mut host = Host::start(EngineCore::new(config), store, LogRenderSink, LogSoundSink);
    info!(path = %state_path, items = host.core().items().len(), "seesaw ready");

    let started = Instant::now();
    let now_ms = || started.elapsed().as_secs_f64() * 1000.0;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut frames = tokio::time::interval(Duration::from_millis(FRAME_INTERVAL_MS));
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut stdin_open = true;

    loop {
        tokio::select! {
            _ = frames.tick() => {
                host.frame(now_ms());
                // Once input is exhausted, keep running until the plank is at rest and no long press is pending.
                if !stdin_open && host.is_at_rest() {
                    break;
                }
            }
            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(line)) => {
                    if apply(&mut host, &line, now_ms()).is_break() {
                        break;
                    }
                }
                Ok(None) => {
                    host.end_input(now_ms());
                    stdin_open = false;
                }
                Err(e) => {
                    error!(error = %e, "stdin read failed");
                    host.end_input(now_ms());
                    stdin_open = false;
                }
            },
        }
    }

    let physics = host.core().physics();
    info!(
        items = host.core().items().len(),
        left_torque = physics.left_torque,
        right_torque = physics.right_torque,
        angle = host.core().current_angle(),
        "seesaw stopped"
    );
}

fn apply<S: StateStore, R: RenderSink, A: SoundSink>(host: &mut Host<S, R, A>, line: &str, now_ms: f64) -> ControlFlow<()> {
    let command = match command::parse_line(line) {
        Ok(Some(command)) => command,
        Ok(None) => return ControlFlow::Continue(()),
        Err(e) => {
            warn!(error = %e, line, "ignoring input line");
            return ControlFlow::Continue(());
        }
    };

    match command {
        Command::Gesture { .. } => {
            if let Some(gesture) = command.into_gesture(now_ms) {
                host.gesture(gesture);
            }
        }
        Command::Pivot(pivot) => host.set_pivot(pivot),
        Command::Reset => {
            host.reset();
        }
        Command::Resize(half) => {
            if !host.resize(half).rendered {
                warn!(half, "ignoring invalid plank size");
            }
        }
        Command::Quit => {
            host.end_input(now_ms);
            return ControlFlow::Break(());
        }
    }
    ControlFlow::Continue(())
}
