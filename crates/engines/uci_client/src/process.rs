//! Engine child process and line-oriented UCI exchange

use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::config::UciEngineConfig;
use crate::error::UciClientError;

/// A running UCI engine.
///
/// Stdout is drained by a reader thread into a channel so every wait can be
/// bounded. Dropping the process sends `quit` and reaps the child.
pub struct UciProcess {
    child: Child,
    stdin: ChildStdin,
    lines: Receiver<String>,
    name: String,
}

impl UciProcess {
    /// Start the first executable of `config` that can be spawned, then run
    /// the `uci`/`uciok` handshake and apply the configured options.
    pub fn spawn(config: &UciEngineConfig) -> Result<Self, UciClientError> {
        let mut last_err = None;
        for path in config.executables() {
            match Self::launch(path, &config.args) {
                Ok(child) => {
                    debug!(path = %path.display(), "engine process started");
                    let mut process = Self::attach(child)?;
                    process.handshake(config)?;
                    return Ok(process);
                }
                Err(source) => {
                    debug!(path = %path.display(), error = %source, "cannot start engine");
                    last_err = Some(UciClientError::Spawn {
                        path: path.clone(),
                        source,
                    });
                }
            }
        }
        Err(last_err.unwrap_or(UciClientError::Closed))
    }

    fn launch(path: &Path, args: &[String]) -> io::Result<Child> {
        Command::new(path)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
    }

    fn attach(mut child: Child) -> Result<Self, UciClientError> {
        let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(UciClientError::Closed);
        };

        let (tx, rx) = mpsc::channel();
        let reader = thread::Builder::new()
            .name("uci-reader".into())
            .spawn(move || {
                for line in BufReader::new(stdout).lines() {
                    let Ok(line) = line else { break };
                    if tx.send(line).is_err() {
                        break;
                    }
                }
            });
        if let Err(e) = reader {
            let _ = child.kill();
            let _ = child.wait();
            return Err(e.into());
        }

        Ok(Self {
            child,
            stdin,
            lines: rx,
            name: String::from("unknown engine"),
        })
    }

    fn handshake(&mut self, config: &UciEngineConfig) -> Result<(), UciClientError> {
        let timeout = config.handshake_timeout();

        self.send("uci")?;
        let mut name = None;
        self.read_until("uciok", timeout, |line| {
            if let Some(rest) = line.strip_prefix("id name ") {
                name = Some(rest.trim().to_string());
            }
            line.trim() == "uciok"
        })?;
        if let Some(name) = name {
            self.name = name;
        }

        self.send(&format!("setoption name Skill Level value {}", config.skill_level))?;
        self.send(&format!("setoption name Threads value {}", config.threads))?;
        self.sync(timeout)
    }

    /// Engine name from its `id name` line.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Write one command line.
    pub fn send(&mut self, cmd: &str) -> Result<(), UciClientError> {
        trace!(cmd, "engine <");
        writeln!(self.stdin, "{cmd}")?;
        self.stdin.flush()?;
        Ok(())
    }

    /// `isready` / `readyok` round trip.
    pub fn sync(&mut self, timeout: Duration) -> Result<(), UciClientError> {
        self.send("isready")?;
        self.read_until("readyok", timeout, |line| line.trim() == "readyok")
            .map(drop)
    }

    /// Ask for a move in the position given as FEN and return the raw
    /// `bestmove` token.
    pub fn go(
        &mut self,
        fen: &str,
        move_time: Duration,
        depth: Option<u32>,
        grace: Duration,
    ) -> Result<String, UciClientError> {
        self.send(&format!("position fen {fen}"))?;
        let mut go = format!("go movetime {}", move_time.as_millis());
        if let Some(depth) = depth {
            go.push_str(&format!(" depth {depth}"));
        }
        self.send(&go)?;

        let line = self.read_until("bestmove", move_time + grace, |line| {
            line.starts_with("bestmove")
        })?;
        parse_bestmove(&line)
    }

    fn read_until(
        &mut self,
        expected: &'static str,
        timeout: Duration,
        mut done: impl FnMut(&str) -> bool,
    ) -> Result<String, UciClientError> {
        let deadline = Instant::now() + timeout;
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            match self.lines.recv_timeout(left) {
                Ok(line) => {
                    trace!(line = %line, "engine >");
                    if done(&line) {
                        return Ok(line);
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    return Err(UciClientError::Timeout {
                        expected,
                        waited: timeout,
                    });
                }
                Err(RecvTimeoutError::Disconnected) => return Err(UciClientError::Closed),
            }
        }
    }
}

impl Drop for UciProcess {
    fn drop(&mut self) {
        let _ = self.send("quit");
        for _ in 0..10 {
            if let Ok(Some(_)) = self.child.try_wait() {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Second token of a `bestmove` line (`bestmove e2e4 ponder e7e5`).
pub(crate) fn parse_bestmove(line: &str) -> Result<String, UciClientError> {
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("bestmove"), Some(mv)) => Ok(mv.to_string()),
        _ => Err(UciClientError::Protocol(line.to_string())),
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod process_tests;
