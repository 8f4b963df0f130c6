//! Running external tools.
//!
//! Tools are spawned directly (no shell) with the project directory as
//! working directory, the parent's environment, a closed stdin, and stdout and
//! stderr captured separately.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{GofishError, Result};

/// How often a running tool is polled while a timeout is in effect.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// An executable and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    /// Executable name, resolved on PATH by the OS.
    pub program: String,
    /// Arguments passed verbatim.
    pub args: Vec<String>,
}

impl ToolCommand {
    /// Create a new command.
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// The command line as a user would type it.
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Captured result of a finished tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Whether the tool exited with status 0.
    pub success: bool,

    /// Standard output, lossily decoded as UTF-8.
    pub stdout: String,

    /// Standard error, lossily decoded as UTF-8.
    pub stderr: String,
}

impl ToolOutput {
    /// Standard output followed by standard error, for tools whose streams
    /// are treated as one log.
    pub fn combined(&self) -> String {
        let mut combined = self.stdout.clone();
        if !combined.is_empty() && !combined.ends_with('\n') && !self.stderr.is_empty() {
            combined.push('\n');
        }
        combined.push_str(&self.stderr);
        combined
    }

    /// Whether the tool printed nothing but whitespace on either stream.
    pub fn is_silent(&self) -> bool {
        self.stdout.trim().is_empty() && self.stderr.trim().is_empty()
    }
}

/// Run a tool in `dir` and wait for it to finish.
///
/// Fails with [`GofishError::ToolSpawn`] when the tool cannot be started and
/// with [`GofishError::ToolTimeout`] when it outlives `timeout`. A non-zero
/// exit status is not an error here: adapters decide what it means.
pub fn run_tool(dir: &Path, command: &ToolCommand, timeout: Option<Duration>) -> Result<ToolOutput> {
    tracing::debug!("Running `{}` in {}", command.display(), dir.display());
    let start = Instant::now();

    let mut child = Command::new(&command.program)
        .args(&command.args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| GofishError::ToolSpawn {
            tool: command.program.clone(),
            message: e.to_string(),
        })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let stdout_handle = thread::spawn(move || read_stream(stdout));
    let stderr_handle = thread::spawn(move || read_stream(stderr));

    let status = match timeout {
        Some(limit) => wait_with_timeout(&mut child, limit, &command.program)?,
        None => child.wait().map_err(|e| GofishError::ToolSpawn {
            tool: command.program.clone(),
            message: e.to_string(),
        })?,
    };

    let stdout = join_stream(stdout_handle, &command.program)?;
    let stderr = join_stream(stderr_handle, &command.program)?;

    tracing::debug!(
        "`{}` exited with {:?} after {:?}",
        command.display(),
        status.code(),
        start.elapsed()
    );

    Ok(ToolOutput {
        exit_code: status.code(),
        success: status.success(),
        stdout,
        stderr,
    })
}

fn read_stream<R: Read>(stream: Option<R>) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut stream) = stream {
        stream.read_to_end(&mut buf)?;
    }
    Ok(buf)
}

fn join_stream(
    handle: thread::JoinHandle<std::io::Result<Vec<u8>>>,
    tool: &str,
) -> Result<String> {
    let bytes = handle
        .join()
        .map_err(|_| GofishError::OutputDecode {
            tool: tool.to_string(),
            message: "output reader panicked".to_string(),
        })?
        .map_err(|e| GofishError::OutputDecode {
            tool: tool.to_string(),
            message: e.to_string(),
        })?;
    String::from_utf8(bytes).map_err(|e| GofishError::OutputDecode {
        tool: tool.to_string(),
        message: e.to_string(),
    })
}

fn wait_with_timeout(child: &mut Child, limit: Duration, tool: &str) -> Result<ExitStatus> {
    let start = Instant::now();
    loop {
        let polled = child.try_wait().map_err(|e| GofishError::ToolSpawn {
            tool: tool.to_string(),
            message: e.to_string(),
        })?;
        if let Some(status) = polled {
            return Ok(status);
        }
        if start.elapsed() >= limit {
            // Reader threads are left to finish on their own: a grandchild may
            // still hold the pipes open.
            let _ = child.kill();
            let _ = child.wait();
            return Err(GofishError::ToolTimeout {
                tool: tool.to_string(),
                limit,
            });
        }
        thread::sleep(POLL_INTERVAL);
    }
}
