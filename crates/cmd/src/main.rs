// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cmd::{BANNER, Shell, ShellConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "nebula")]
struct Cli {
    /// JSON file holding the filesystem (defaults to $NEBULA_STORE)
    #[arg(long, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Keep the filesystem in memory only
    #[arg(long, conflicts_with = "store")]
    memory: bool,

    /// Run these command lines in order and exit instead of reading stdin
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    commands: Vec<String>,
}

/// Runs each line and prints what it added to the transcript
fn run_script<W: Write>(shell: &mut Shell, lines: &[String], out: &mut W) -> Result<()> {
    for line in lines {
        let Some(outcome) = shell.submit(line) else {
            continue;
        };
        if outcome.cleared {
            for banner_line in BANNER {
                writeln!(out, "{}", banner_line)?;
            }
        }
        for printed in outcome.lines() {
            writeln!(out, "{}", printed)?;
        }
    }
    Ok(())
}

/// Prompt, read, dispatch, print, until end of input
fn run_interactive<R: BufRead, W: Write>(shell: &mut Shell, input: R, out: &mut W) -> Result<()> {
    for banner_line in BANNER {
        writeln!(out, "{}", banner_line)?;
    }

    let mut lines = input.lines();
    loop {
        write!(out, "{} ", shell.prompt())?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        let line = line.context("Failed to read input")?;

        let Some(outcome) = shell.submit(&line) else {
            continue;
        };
        if outcome.cleared {
            for banner_line in BANNER {
                writeln!(out, "{}", banner_line)?;
            }
            continue;
        }
        if !outcome.response.is_empty() {
            writeln!(out, "{}", outcome.response)?;
        }
    }
}

fn main() -> Result<()> {
    diagnostics::init_diagnostics();

    let cli = Cli::parse();
    let config = ShellConfig::from_env(cli.store, cli.memory);
    let mut shell = Shell::new(config.open());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.commands.is_empty() {
        let stdin = std::io::stdin();
        run_interactive(&mut shell, stdin.lock(), &mut out)
    } else {
        run_script(&mut shell, &cli.commands, &mut out)
    }
}
