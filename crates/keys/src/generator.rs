use std::{
    io,
    process::{ExitStatus, Stdio},
    time::Duration,
};

#[cfg(unix)]
use nix::{
    sys::signal::{killpg, Signal},
    unistd::Pid,
};
use tokio::{
    io::AsyncReadExt,
    process::{Child, ChildStdout, Command},
    task::JoinHandle,
};

use crate::{GenerateError, Keypair, LogConfig, ScrapeError};

pub const DEFAULT_GENKEYS: &str = "genkeys";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const PRIVATE_KEY_LABEL: &str = "Priv: ";
pub const PUBLIC_KEY_LABEL: &str = "Pub: ";

/// Run `command` for `timeout` and take the last keypair it printed.
///
/// Failures are logged as warnings and collapse to [`Keypair::empty`].
pub async fn generate_keys(command: &str, timeout: Duration, log: &LogConfig) -> Keypair {
    log::info!(
        target: log.target(),
        "start generating keys with timeout {} seconds",
        timeout.as_secs()
    );
    match try_generate_keys(command, timeout).await {
        Ok(keys) => keys,
        Err(e) => {
            log::warn!(target: log.target(), "{e}");
            Keypair::empty()
        }
    }
}

/// The generator is expected to keep running until `timeout` elapses. Exiting earlier,
/// with any status, is an error. Once the timeout has passed the whole process group is
/// sent SIGTERM and the captured stdout is scraped with [`scrape_keys`].
///
/// If this returns early or the future is dropped, the process group is signalled as well.
pub async fn try_generate_keys(command: &str, timeout: Duration) -> Result<Keypair, GenerateError> {
    let mut generator = Generator::spawn(command)?;

    tokio::time::sleep(timeout).await;

    if let Some(status) = generator.try_wait()? {
        return Err(GenerateError::ExitedEarly(status));
    }
    generator.terminate()?;

    let output = generator.output().await?;
    Ok(scrape_keys(&String::from_utf8_lossy(&output))?)
}

/// Take the value after the last `Priv: ` and the last `Pub: ` marker, each up to the
/// following newline. Either value missing invalidates the whole result.
pub fn scrape_keys(output: &str) -> Result<Keypair, ScrapeError> {
    let private = last_value(output, PRIVATE_KEY_LABEL).map_err(|missing| match missing {
        Missing::Start => ScrapeError::MissingPrivateStart,
        Missing::End => ScrapeError::MissingPrivateEnd,
    })?;
    let public = last_value(output, PUBLIC_KEY_LABEL).map_err(|missing| match missing {
        Missing::Start => ScrapeError::MissingPublicStart,
        Missing::End => ScrapeError::MissingPublicEnd,
    })?;
    Ok(Keypair::new(private, public))
}

enum Missing {
    Start,
    End,
}

fn last_value<'a>(output: &'a str, label: &str) -> Result<&'a str, Missing> {
    let start = output.rfind(label).ok_or(Missing::Start)? + label.len();
    let len = output[start..].find('\n').ok_or(Missing::End)?;
    Ok(&output[start..start + len])
}

/// Running generator together with the task draining its stdout.
///
/// Dropped before [`Generator::terminate`] succeeded, it stops the reader and signals the
/// process group, so no path leaves the generator running behind the tool.
struct Generator {
    child: Child,
    reader: Option<JoinHandle<io::Result<Vec<u8>>>>,
    terminated: bool,
}

impl Generator {
    fn spawn(command: &str) -> Result<Self, GenerateError> {
        let mut cmd = shell_command(command);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        // New process group, so that children of the generator can be stopped together with it
        #[cfg(unix)]
        cmd.process_group(0);
        let mut child = cmd.spawn().map_err(GenerateError::Spawn)?;

        // Drained in the background so a chatty generator never blocks on a full pipe
        let reader = child.stdout.take().map(|stdout| tokio::spawn(read_to_end(stdout)));
        let generator = Self {
            child,
            reader,
            terminated: false,
        };
        if generator.reader.is_none() {
            return Err(GenerateError::Collect(io::Error::other("stdout not captured")));
        }
        Ok(generator)
    }

    fn try_wait(&mut self) -> Result<Option<ExitStatus>, GenerateError> {
        self.child.try_wait().map_err(GenerateError::Collect)
    }

    fn terminate(&mut self) -> Result<(), GenerateError> {
        signal_group(&mut self.child).map_err(GenerateError::Signal)?;
        self.terminated = true;
        Ok(())
    }

    async fn output(mut self) -> Result<Vec<u8>, GenerateError> {
        let reader = self
            .reader
            .take()
            .ok_or_else(|| GenerateError::Collect(io::Error::other("output already taken")))?;
        reader
            .await
            .map_err(|e| GenerateError::Collect(io::Error::other(e)))?
            .map_err(GenerateError::Collect)
    }
}

impl Drop for Generator {
    fn drop(&mut self) {
        if let Some(reader) = self.reader.take() {
            reader.abort();
        }
        if !self.terminated {
            // Best effort, `kill_on_drop` still covers the leader
            let _ = signal_group(&mut self.child);
        }
    }
}

#[cfg(unix)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(not(unix))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

async fn read_to_end(mut stdout: ChildStdout) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    stdout.read_to_end(&mut buf).await?;
    Ok(buf)
}

/// SIGTERM to the whole process group led by `child`.
#[cfg(unix)]
fn signal_group(child: &mut Child) -> io::Result<()> {
    // `None` means the child has already been reaped
    let Some(pid) = child.id() else {
        return Ok(());
    };
    let pgid = i32::try_from(pid).map_err(io::Error::other)?;
    killpg(Pid::from_raw(pgid), Signal::SIGTERM)?;
    Ok(())
}

#[cfg(not(unix))]
fn signal_group(child: &mut Child) -> io::Result<()> {
    child.start_kill()
}
