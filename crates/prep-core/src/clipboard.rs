/// System clipboard writer backed by an external command.
///
/// The command (e.g. `wl-copy`, `pbcopy`, `xclip -selection clipboard`)
/// receives the text on stdin. Writes are best-effort: any failure is logged
/// and reported as `false`, never propagated. Without a configured command
/// every write is a no-op that returns `false`. A command still running after
/// [`WRITE_TIMEOUT`] is killed and counted as a failure.
use std::process::Stdio;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::CoreError;

pub const WRITE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    command: Option<ClipboardCommand>,
}

#[derive(Debug, Clone)]
struct ClipboardCommand {
    program: String,
    args: Vec<String>,
}

impl Clipboard {
    /// Build from a whitespace-separated command line. `None` or a blank line
    /// disables clipboard writes.
    pub fn new(command_line: Option<&str>) -> Self {
        let command = command_line.and_then(|line| {
            let mut parts = line.split_whitespace().map(str::to_string);
            let program = parts.next()?;
            Some(ClipboardCommand {
                program,
                args: parts.collect(),
            })
        });
        Self { command }
    }

    pub fn is_enabled(&self) -> bool {
        self.command.is_some()
    }

    pub fn program(&self) -> Option<&str> {
        self.command.as_ref().map(|c| c.program.as_str())
    }

    /// Write `text` to the clipboard. Returns `true` if the command ran and
    /// exited successfully within [`WRITE_TIMEOUT`].
    pub async fn write(&self, text: &str) -> bool {
        self.write_within(text, WRITE_TIMEOUT).await
    }

    /// Start a write on a background task and return immediately.
    ///
    /// Returns whether a write was dispatched at all, i.e. whether a command
    /// is configured. The outcome is only logged. Must be called from within
    /// a tokio runtime.
    pub fn write_in_background(&self, text: String) -> bool {
        if !self.is_enabled() {
            debug!("clipboard disabled, skipping write");
            return false;
        }
        let clipboard = self.clone();
        tokio::spawn(async move {
            if clipboard.write(&text).await {
                debug!(bytes = text.len(), "clipboard updated");
            }
        });
        true
    }

    async fn write_within(&self, text: &str, limit: Duration) -> bool {
        let Some(command) = &self.command else {
            debug!("clipboard disabled, skipping write");
            return false;
        };
        let result = match tokio::time::timeout(limit, run(command, text)).await {
            Ok(result) => result,
            // Dropping the future kills the child.
            Err(_) => Err(CoreError::ClipboardTimeout {
                program: command.program.clone(),
                timeout_ms: limit.as_millis(),
            }),
        };
        result
            .inspect_err(|e| warn!(error = %e, program = %command.program, "clipboard write failed"))
            .is_ok()
    }
}

async fn run(command: &ClipboardCommand, text: &str) -> Result<(), CoreError> {
    let mut child = Command::new(&command.program)
        .args(&command.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| CoreError::ClipboardSpawn {
            program: command.program.clone(),
            source,
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).await?;
        stdin.shutdown().await?;
    }

    let status = child.wait().await?;
    if !status.success() {
        return Err(CoreError::ClipboardExit {
            program: command.program.clone(),
            status: status.to_string(),
        });
    }
    Ok(())
}
