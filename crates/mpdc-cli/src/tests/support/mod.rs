//! Test support utilities for mpdc CLI coverage.
//!
//! Supplies a fake daemon, a fixed configuration loader, and a world that
//! captures CLI output so step definitions and unit tests stay focused on
//! their assertions.

mod fake_daemon;

use std::cell::RefCell;
use std::ffi::OsString;
use std::process::ExitCode;

use anyhow::{Context, Result, ensure};
use mpdc_config::Config;
use mpdc_core::command::line::split_arguments;
use rstest::fixture;

use crate::{AppError, ConfigLoader, IoStreams, run_with_loader};

pub(super) use fake_daemon::{DEFAULT_GREETING, FakeDaemon, Reply};

/// A config loader that returns a fixed configuration for tests.
pub(super) struct StaticConfigLoader {
    config: Config,
}

impl StaticConfigLoader {
    pub(super) const fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for StaticConfigLoader {
    fn load(&self, _args: &[OsString]) -> Result<Config, AppError> {
        Ok(self.config.clone())
    }
}

/// Test world holding CLI state, the scripted daemon, and captured output.
#[derive(Default)]
pub(super) struct TestWorld {
    pub config: Config,
    pub greeting: Option<String>,
    pub replies: Option<Vec<Reply>>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub exit_code: Option<ExitCode>,
    pub requests: Vec<String>,
}

impl TestWorld {
    /// Arms a daemon that answers every request with a bare `OK`.
    pub fn expect_daemon(&mut self) {
        self.replies.get_or_insert_with(Vec::new);
    }

    /// Queues a reply for the next unanswered request.
    pub fn queue_reply(&mut self, reply: Reply) {
        self.replies.get_or_insert_with(Vec::new).push(reply);
    }

    /// Runs the CLI with `command`, split the way the daemon splits
    /// arguments so quoted values survive intact.
    pub fn run(&mut self, command: &str) -> Result<()> {
        let tokens = split_arguments(command).context("split command line")?;
        let args = std::iter::once(OsString::from("mpdc"))
            .chain(tokens.into_iter().map(OsString::from))
            .collect();
        self.run_args(args)
    }

    pub fn run_args(&mut self, args: Vec<OsString>) -> Result<()> {
        self.stdout.clear();
        self.stderr.clear();
        self.requests.clear();

        let mut daemon = match self.replies.take() {
            Some(replies) => {
                let greeting = self.greeting.as_deref().unwrap_or(DEFAULT_GREETING);
                let daemon = FakeDaemon::spawn(greeting, replies)?;
                self.config.host = String::from("127.0.0.1");
                self.config.port = daemon.port();
                Some(daemon)
            }
            None => None,
        };

        let loader = StaticConfigLoader::new(self.config.clone());
        let mut io = IoStreams::new(&mut self.stdout, &mut self.stderr);
        let exit = run_with_loader(args, &mut io, &loader);
        self.exit_code = Some(exit);
        if let Some(running) = daemon.as_mut() {
            self.requests = running.take_requests()?;
        }
        Ok(())
    }

    pub fn stdout_text(&self) -> Result<String> {
        decode_utf8(self.stdout.clone(), "stdout")
    }

    pub fn stderr_text(&self) -> Result<String> {
        decode_utf8(self.stderr.clone(), "stderr")
    }

    pub fn assert_success(&self) -> Result<()> {
        let exit = self.exit_code.context("exit code recorded")?;
        let stderr = self.stderr_text()?;
        ensure!(
            exit == ExitCode::SUCCESS,
            "expected success exit code, got {exit:?} with stderr {stderr:?}"
        );
        Ok(())
    }

    pub fn assert_failure(&self) -> Result<()> {
        let exit = self.exit_code.context("exit code recorded")?;
        ensure!(
            exit == ExitCode::FAILURE,
            "expected failure exit code, got {exit:?}"
        );
        Ok(())
    }

    pub fn assert_requests(&self, expected: &[&str]) -> Result<()> {
        ensure!(
            self.requests == expected,
            "request mismatch: expected {expected:?}, got {:?}",
            self.requests
        );
        Ok(())
    }

    pub fn assert_no_daemon_requests(&self) -> Result<()> {
        ensure!(
            self.requests.is_empty(),
            "expected no daemon requests but found {:?}",
            self.requests
        );
        Ok(())
    }
}

pub(super) fn decode_utf8(buffer: Vec<u8>, label: &str) -> Result<String> {
    String::from_utf8(buffer).with_context(|| format!("{label} utf8"))
}

#[fixture]
pub(super) fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::default())
}
