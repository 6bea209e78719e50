//! Shelf - a persistent list in the terminal.
//!
//! Hosts the shelf-engine controller with a JSON file as durable storage,
//! tokio timers for notice expiry, and a line-based terminal view.

mod command;
mod config;
mod error;
mod scheduler;
mod storage;
mod terminal;

use crate::command::{dispatch, Command, Flow, HELP};
use crate::config::Config;
use crate::error::AppError;
use crate::scheduler::{SystemClock, TokioScheduler};
use crate::storage::FileStore;
use crate::terminal::TerminalView;
use shelf_engine::EntryController;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first so RUST_LOG from .env is honoured
    dotenvy::dotenv().ok();

    // Initialize tracing on stderr; stdout belongs to the view
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelf_app=info,shelf_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    let settings = config.settings();
    tracing::info!(path = %config.data_file.display(), key = %config.storage_key, "Starting Shelf");

    let backend = FileStore::open(&config.data_file)?;
    tracing::debug!(path = %backend.path().display(), "Data file ready");

    let (scheduler, mut deferred) = TokioScheduler::new();
    let view = TerminalView::new(settings.add_label.clone());
    let mut controller = EntryController::new(backend, view, scheduler, SystemClock, settings);

    let restored = controller.rehydrate();
    tracing::info!(count = restored, "Restored list");

    let mut stdout = std::io::stdout();
    controller.view_mut().render(&mut stdout)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                match Command::parse(&line)
                    .map_err(AppError::from)
                    .and_then(|command| dispatch(&mut controller, command))
                {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Redraw) => controller.view_mut().mark_dirty(),
                    Ok(Flow::Help) => {
                        writeln!(stdout, "{}", HELP)?;
                        controller.view_mut().mark_dirty();
                    }
                    Ok(Flow::Quit) => break,
                    Err(e) if e.is_fatal() => return Err(e.into()),
                    Err(e) => {
                        if matches!(e, AppError::Engine(shelf_engine::Error::Storage(_))) {
                            tracing::error!("Write failed: {}", e);
                        } else {
                            tracing::debug!("{}", e);
                        }
                        match e.status_message() {
                            Some(message) => controller.view_mut().show_status(message),
                            None => controller.view_mut().mark_dirty(),
                        }
                    }
                }
            }
            Some(task) = deferred.recv() => {
                controller.run_deferred(task);
            }
        }

        controller.view_mut().render_if_dirty(&mut stdout)?;
    }

    writeln!(stdout)?;
    tracing::info!(count = controller.entries().len(), "Shelf closed");
    Ok(())
}
