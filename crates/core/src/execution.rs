//! Running saved commands as external processes.
//!
//! [`run_command`] is the entry point used by the interactive session: it
//! announces the command, denies interruption while the child runs and
//! reports any failure as a single line instead of returning it.

use std::io::Write;
use std::process::Stdio;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info};
use tokio::process::Command as Process;

use crate::command_definitions::Command;
use crate::config::{self, SHELL_COMMAND_FLAG};
use crate::error::{Error, Result};

/// State shared by everything that runs commands in one session.
///
/// Clones share the same interruptibility flag, so a signal handler holding a
/// clone observes the flag written by [`run_command`].
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    shell: String,
    interruptible: Arc<AtomicBool>,
}

impl ExecutionContext {
    #[must_use]
    pub fn new(shell: String) -> Self {
        Self {
            shell,
            interruptible: Arc::new(AtomicBool::new(true)),
        }
    }

    #[must_use]
    pub fn shell(&self) -> &str {
        &self.shell
    }

    /// Whether the user may interrupt the session right now.
    #[must_use]
    pub fn is_interruptible(&self) -> bool {
        self.interruptible.load(Ordering::SeqCst)
    }

    fn deny_interrupts(&self) -> InterruptGuard<'_> {
        self.interruptible.store(false, Ordering::SeqCst);
        InterruptGuard {
            flag: &self.interruptible,
        }
    }
}

/// Restores the interruptibility flag when dropped.
struct InterruptGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InterruptGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(true, Ordering::SeqCst);
    }
}

/// Runs `command` to completion and reports the outcome on `out`.
///
/// Never fails: a command that cannot start or exits unsuccessfully produces
/// one message line and control returns to the caller with the session
/// interruptible again.
pub async fn run_command<W: Write>(context: &ExecutionContext, command: &Command, out: &mut W) {
    // Output failures must not abort the run either
    let _ = writeln!(out, "Running {}", command.command_text);
    let _ = out.flush();

    let result = {
        let _guard = context.deny_interrupts();
        execute_command(context, command).await
    };

    if let Err(e) = result {
        debug!("Command `{}` failed: {:?}", command.command_text, e);
        let _ = writeln!(out, "{e}");
        let _ = out.flush();
    }
}

/// Spawns `command` through the context's shell and waits for it to exit.
///
/// # Errors
///
/// Returns an error if the process cannot be started or exits with a
/// non-zero status.
pub async fn execute_command(context: &ExecutionContext, command: &Command) -> Result<()> {
    let mut process = build_process(context.shell(), command);
    process
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    if let Some(working_directory) = config::expand_working_directory(&command.working_directory) {
        debug!("Working directory: `{working_directory}`");
        process.current_dir(working_directory);
    }

    info!(
        "Executing `{}` (admin required: {})",
        command.command_text, command.admin_required
    );

    let status = process
        .spawn()
        .map_err(|e| Error::spawn_error(command.command_text.clone(), e))?
        .wait()
        .await
        .map_err(|e| Error::spawn_error(command.command_text.clone(), e))?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::SubProcessExit(status.code()))
    }
}

fn build_process(shell: &str, command: &Command) -> Process {
    if command.admin_required {
        return elevated_process(shell, &command.command_text);
    }

    let mut process = Process::new(shell);
    process.arg(SHELL_COMMAND_FLAG).arg(&command.command_text);
    process
}

#[cfg(not(windows))]
fn elevated_process(shell: &str, command_text: &str) -> Process {
    let mut process = Process::new("sudo");
    process.arg(shell).arg(SHELL_COMMAND_FLAG).arg(command_text);
    process
}

#[cfg(windows)]
fn elevated_process(shell: &str, command_text: &str) -> Process {
    let quote = |s: &str| format!("'{}'", s.replace('\'', "''"));
    let script = format!(
        "$p = Start-Process -FilePath {} -ArgumentList {}, {} -Verb RunAs -Wait -PassThru; exit $p.ExitCode",
        quote(shell),
        quote(SHELL_COMMAND_FLAG),
        quote(command_text),
    );

    let mut process = Process::new("powershell");
    process.args(["-NoProfile", "-Command", &script]);
    process
}
