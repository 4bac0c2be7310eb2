use std::io::{ErrorKind, Read, Write};
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::AppError;
use crate::domain::command::{CommandResult, CommandSpec, CommandStatus};
use crate::ports::CommandRunner;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
/// How long output is still read once the process itself is gone.
const OUTPUT_GRACE: Duration = Duration::from_millis(500);

/// Runs commands as child processes in the project directory.
#[derive(Debug, Clone)]
pub struct ProcessCommandRunner {
    cwd: PathBuf,
}

impl ProcessCommandRunner {
    pub fn new(cwd: PathBuf) -> Self {
        Self { cwd }
    }

    /// Standard error is always piped. Interactive commands keep the terminal
    /// for input and output; captured ones lead their own process group so a
    /// timeout can take down everything they started.
    fn command(&self, spec: &CommandSpec) -> Command {
        let mut command = Command::new(&spec.program);
        command.args(&spec.args).current_dir(&self.cwd).stderr(Stdio::piped());
        if spec.options.interactive {
            command.stdin(Stdio::inherit()).stdout(Stdio::inherit());
        } else {
            command.stdin(Stdio::null()).stdout(Stdio::piped());
            #[cfg(unix)]
            {
                use std::os::unix::process::CommandExt;
                command.process_group(0);
            }
        }
        command
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandResult, AppError> {
        let command_line = spec.command_line();
        let started = Instant::now();
        tracing::debug!(command = %command_line, interactive = spec.options.interactive, "running");

        let spinner = (spec.options.spinner && !spec.options.interactive)
            .then(|| spinner(&spec.options.processing_label));
        if spinner.is_none() {
            println!("⏳ {}", spec.options.processing_label);
        }

        let mut child = self.command(spec).spawn().map_err(|err| AppError::CommandSpawn {
            command: command_line.clone(),
            details: err.to_string(),
        })?;

        let stdout = child.stdout.take().map(|pipe| drain(pipe, false));
        let stderr = child.stderr.take().map(|pipe| drain(pipe, spec.options.interactive));

        let own_group = !spec.options.interactive;
        let waited = wait_with_timeout(&mut child, spec.options.timeout, own_group);

        if let Some(spinner) = &spinner {
            spinner.finish_and_clear();
        }

        let status = match waited? {
            Some(exit) if exit.success() => CommandStatus::Succeeded,
            Some(exit) => CommandStatus::Failed(exit.code()),
            None => CommandStatus::TimedOut,
        };

        let output_deadline = Instant::now() + OUTPUT_GRACE;
        let result = CommandResult {
            command: command_line,
            status,
            stdout: stdout.map(|chunks| collect(chunks, output_deadline)).unwrap_or_default(),
            stderr: stderr.map(|chunks| collect(chunks, output_deadline)).unwrap_or_default(),
        };

        tracing::debug!(
            command = %result.command,
            status = ?result.status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "finished"
        );

        if result.succeeded() {
            if let Some(label) = &spec.options.success_label {
                println!("✅ {}", label);
            }
        }
        Ok(result)
    }
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Read a pipe on a helper thread so the child never blocks on a full pipe
/// buffer. Chunks are sent as they arrive; with `echo` they are also copied to
/// the terminal's standard error.
fn drain<R: Read + Send + 'static>(mut pipe: R, echo: bool) -> Receiver<Vec<u8>> {
    let (sender, chunks) = mpsc::channel();
    thread::spawn(move || {
        let mut buffer = [0u8; 8192];
        loop {
            let read = match pipe.read(&mut buffer) {
                Ok(0) => break,
                Ok(read) => read,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(_) => break,
            };
            if echo {
                let mut terminal = std::io::stderr().lock();
                let _ = terminal.write_all(&buffer[..read]);
                let _ = terminal.flush();
            }
            if sender.send(buffer[..read].to_vec()).is_err() {
                break;
            }
        }
    });
    chunks
}

/// Gather output until the pipe closes or `deadline` passes. A background
/// process that inherited the pipe may hold it open long after the child.
fn collect(chunks: Receiver<Vec<u8>>, deadline: Instant) -> String {
    let mut bytes = Vec::new();
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match chunks.recv_timeout(remaining) {
            Ok(chunk) => bytes.extend(chunk),
            Err(_) => break,
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

/// `Ok(None)` means the deadline passed and the child was killed, together
/// with its process group when it leads one.
fn wait_with_timeout(
    child: &mut Child,
    timeout: Option<Duration>,
    own_group: bool,
) -> Result<Option<ExitStatus>, AppError> {
    let Some(timeout) = timeout else {
        return Ok(Some(child.wait()?));
    };

    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            tracing::warn!(timeout_secs = timeout.as_secs(), "command timed out, killing");
            if own_group {
                kill_group(child);
            }
            let _ = child.kill();
            let _ = child.wait();
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

#[cfg(unix)]
fn kill_group(child: &Child) {
    use nix::sys::signal::{Signal, killpg};
    use nix::unistd::Pid;

    #[allow(clippy::cast_possible_wrap)]
    let group = Pid::from_raw(child.id() as i32);
    if let Err(err) = killpg(group, Signal::SIGKILL) {
        tracing::debug!(error = %err, "could not kill process group");
    }
}

#[cfg(not(unix))]
fn kill_group(_child: &Child) {}
