// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use diagnostics::log_debug;
use nebulafs::VirtualFileSystem;

use crate::commands::{self, Reply};
use crate::history::History;

pub const BANNER: [&str; 2] = ["Nebula shell v0.3", "Type `help` to list commands."];

/// Result of one submitted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// `<prompt> <line>`, with the prompt as it stood after the command ran
    pub echo: String,
    /// Response text, empty when the command printed nothing
    pub response: String,
    /// The transcript was reset to the banner before the echo
    pub cleared: bool,
}

impl Outcome {
    /// Lines this outcome added to the transcript
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.echo.as_str()).chain(response_lines(&self.response))
    }
}

fn response_lines(response: &str) -> impl Iterator<Item = &str> {
    (!response.is_empty())
        .then(|| response.split('\n'))
        .into_iter()
        .flatten()
}

/// A terminal session: one filesystem, one history, one transcript.
///
/// Lines are dispatched one at a time to completion. Filesystem failures
/// never escape; their messages become the response text.
#[derive(Debug)]
pub struct Shell {
    fs: VirtualFileSystem,
    history: History,
    transcript: Vec<String>,
}

impl Shell {
    #[must_use]
    pub fn new(fs: VirtualFileSystem) -> Self {
        Self {
            fs,
            history: History::new(),
            transcript: banner(),
        }
    }

    #[must_use]
    pub fn prompt(&self) -> String {
        format!("nebula:{}$", self.fs.pwd())
    }

    /// Runs one input line. Blank input is ignored and returns `None`.
    pub fn submit(&mut self, line: &str) -> Option<Outcome> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        self.history.push(line);

        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        let reply = match commands::lookup(name) {
            None => Reply::Text(format!("Command not found: {}", name)),
            Some(handler) => {
                log_debug!("Dispatching {name}", name: name);
                handler(&mut self.fs, &args).unwrap_or_else(|err| Reply::Text(err.to_string()))
            }
        };

        // The prompt reflects any directory change the command made
        let echo = format!("{} {}", self.prompt(), line);
        let (response, cleared) = match reply {
            Reply::Text(text) => (text, false),
            Reply::ClearTranscript => (String::new(), true),
        };
        if cleared {
            self.transcript = banner();
        }

        let outcome = Outcome {
            echo,
            response,
            cleared,
        };
        self.transcript
            .extend(outcome.lines().map(str::to_string));
        Some(outcome)
    }

    #[must_use]
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn fs(&self) -> &VirtualFileSystem {
        &self.fs
    }

    /// Recalls the next older submitted line, for the input box
    pub fn recall_older(&mut self) -> &str {
        self.history.older()
    }

    /// Recalls the next newer line, or the blank input line past the newest
    pub fn recall_newer(&mut self) -> &str {
        self.history.newer()
    }
}

fn banner() -> Vec<String> {
    BANNER.iter().map(|s| s.to_string()).collect()
}
