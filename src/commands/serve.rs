//! Foreground attendance host: action console plus report scheduler.
//!
//! This command is the in-process stand-in for a chat transport. It reads
//! line-oriented actions from stdin (`<user_id> <action> [display name]`),
//! feeds them to the attendance engine and prints the formatted replies a
//! chat frontend would deliver. The report scheduler runs concurrently over
//! the same shared store, and SIGINT/SIGTERM shut the host down gracefully.

use crate::libs::config::Config;
use crate::libs::export::Exporter;
use crate::libs::messages::Message;
use crate::libs::report::{self, FormatRows};
use crate::libs::scheduler::Scheduler;
use crate::libs::store::{AttendanceStore, SharedStore};
use crate::libs::tracker::{self, Action};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::Utc;
use chrono_tz::Tz;
use clap::{Args, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the serve command.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Run the console without the scheduled report loop
    #[arg(long)]
    no_scheduler: bool,
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::read()?;
    let tz = config.tz()?;
    let triggers = config.triggers.clone().unwrap_or_default();
    let export = config.export.clone().unwrap_or_default();

    let store = AttendanceStore::shared();
    let exporter = Exporter::new(export.format, export.output_dir)?;

    if !args.no_scheduler {
        let scheduler = Scheduler::new(store.clone(), exporter.clone(), tz, &triggers)?;
        tokio::spawn(scheduler.run());
    }

    run_with_signal_handling(store, exporter, tz).await
}

/// Runs the console with proper signal handling for graceful shutdown.
async fn run_with_signal_handling(store: SharedStore, exporter: Exporter, tz: Tz) -> Result<()> {
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    #[cfg(unix)]
    {
        tokio::spawn(async move {
            use tokio::signal::unix::{signal, SignalKind};

            let mut sigterm = match signal(SignalKind::terminate()) {
                Ok(s) => s,
                Err(e) => {
                    msg_error!(Message::HostError(e.to_string()));
                    return;
                }
            };
            let mut sigint = match signal(SignalKind::interrupt()) {
                Ok(s) => s,
                Err(e) => {
                    msg_error!(Message::HostError(e.to_string()));
                    return;
                }
            };

            tokio::select! {
                _ = sigterm.recv() => {
                    msg_info!(Message::ServeReceivedSigterm);
                }
                _ = sigint.recv() => {
                    msg_info!(Message::ServeReceivedSigint);
                }
            }

            let _ = shutdown_tx.send(());
        });
    }

    #[cfg(windows)]
    {
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    msg_info!(Message::ServeReceivedCtrlC);
                }
                Err(e) => {
                    msg_error!(Message::ServeCtrlCListenFailed(e.to_string()));
                }
            }

            let _ = shutdown_tx.send(());
        });
    }

    #[cfg(not(any(unix, windows)))]
    {
        let _ = shutdown_tx;
        msg_info!(Message::ServeSignalHandlingNotSupported);
    }

    let console = tokio::spawn(run_console(store, exporter, tz));

    tokio::select! {
        result = console => {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => msg_error!(Message::HostError(e.to_string())),
                Err(e) => msg_error!(Message::HostTaskPanicked(e.to_string())),
            }
        }
        _ = shutdown_rx => {
            msg_info!(Message::ServeShuttingDown);
        }
    }

    Ok(())
}

/// The stdin action console.
async fn run_console(store: SharedStore, exporter: Exporter, tz: Tz) -> Result<()> {
    msg_info!(Message::ServeStarted);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "quit" | "exit" => break,
            "help" => msg_print!(Message::ServeHelp),
            "report" => print_report(&store, &exporter, tz),
            "reset" => {
                let dropped = store.lock().reset_all();
                msg_info!(Message::StoreCleared(dropped));
            }
            _ => dispatch_action(&store, line, tz),
        }
    }

    Ok(())
}

/// Parses and applies one `<user_id> <action> [name]` console line.
fn dispatch_action(store: &SharedStore, line: &str, tz: Tz) {
    let mut parts = line.split_whitespace();
    let (Some(id_part), Some(action_part)) = (parts.next(), parts.next()) else {
        msg_error!(Message::UnknownCommand(line.to_string()));
        return;
    };

    let Ok(user_id) = id_part.parse::<i64>() else {
        msg_error!(Message::InvalidUserId(id_part.to_string()));
        return;
    };
    let Ok(action) = Action::from_str(action_part, true) else {
        msg_error!(Message::UnknownAction(action_part.to_string()));
        return;
    };

    let name = parts.collect::<Vec<_>>().join(" ");
    let name = if name.is_empty() { "Unknown".to_string() } else { name };

    let now = Utc::now().with_timezone(&tz).naive_local();
    let reply = tracker::handle_action(store, user_id, &name, action, now);
    println!("{}", reply);
}

/// Prints and exports the current snapshot on demand.
fn print_report(store: &SharedStore, exporter: &Exporter, tz: Tz) {
    let now = Utc::now().with_timezone(&tz).naive_local();
    let rows = report::snapshot(&store.lock(), now);

    if rows.is_empty() {
        msg_info!(Message::ReportEmpty);
    } else {
        View::attendance(&rows.format());
    }

    match exporter.export(&rows, now.date()) {
        Ok(path) => msg_success!(Message::ExportCompleted(path.display().to_string())),
        Err(e) => msg_error!(Message::DeliveryFailed(e.to_string())),
    }
}
