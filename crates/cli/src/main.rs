use std::io::stdout;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{cursor, execute};
use log::{debug, warn};

use cmaner_cli::cli_args::{Action, Args, Target};
use cmaner_cli::launcher::{write_help, Launcher};
use cmaner_cli::menu::{CrosstermKeys, CrosstermScreen};
use cmaner_core::config;
use cmaner_core::error::Result;
use cmaner_core::execution::ExecutionContext;
use cmaner_core::file_handling;

/// Exit code of a process ended by Ctrl+C
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Exits on Ctrl+C unless a command is running, in which case the child
/// receives the interrupt and the session carries on.
fn listen_for_interrupts(context: ExecutionContext) {
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            if context.is_interruptible() {
                let _ = execute!(stdout(), cursor::Show);
                std::process::exit(INTERRUPTED_EXIT_CODE);
            }
            debug!("Interrupt ignored while a command is running");
        }
        warn!("Could not listen for interrupts");
    });
}

async fn execute() -> Result<()> {
    let args = Args::parse();

    if args.action == Some(Action::Help) {
        return write_help(&mut stdout());
    }

    let storage_path = config::get_storage_path(&args.storage_path);
    debug!("Storage path: `{}`", storage_path);
    let storage = file_handling::get_storage(&storage_path)?;

    let context = ExecutionContext::new(config::get_shell());
    debug!("Shell: `{}`", context.shell());
    listen_for_interrupts(context.clone());

    let mut launcher = Launcher::new(
        storage,
        storage_path,
        context,
        CrosstermScreen::new(stdout()),
        CrosstermKeys,
        stdout(),
    );

    match args.action {
        Some(Action::Add {
            target: Target::Category,
        }) => launcher.add_category(),
        Some(Action::Add {
            target: Target::Command,
        }) => launcher.add_command(),
        Some(Action::Rm {
            target: Target::Category,
        }) => launcher.remove_category(),
        Some(Action::Rm {
            target: Target::Command,
        }) => launcher.remove_command(),
        // Handled before loading the storage
        Some(Action::Help) => Ok(()),
        None => match args.short_call {
            Some(short_call) => launcher.run_short_call(&short_call).await,
            None => launcher.run_from_menu().await,
        },
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    match execute().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
