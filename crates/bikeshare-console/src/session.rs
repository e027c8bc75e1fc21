//! The interactive session loop.
//!
//! One iteration prompts for filters, loads the city table, prints the four
//! reports, offers the raw rows and asks whether to restart. Nothing carries
//! over between iterations.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::formatting::answer_is;
use bikeshare_data::reader::load_data;
use tracing::info;

use crate::pager::show_dataset_part;
use crate::prompt::get_filters;
use crate::reports::display_all;
use crate::Console;

pub const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes/y.\n";

const RESTART_ANSWERS: [&str; 2] = ["yes", "y"];

/// Drives session iterations against a [`Console`] and a data directory.
pub struct Session<R, W> {
    console: Console<R, W>,
    data_dir: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            console,
            data_dir: data_dir.into(),
        }
    }

    /// Run iterations until the user declines to restart.
    ///
    /// A city file missing mandatory columns is reported on the console and
    /// ends the session with [`BikeshareError::MissingColumns`].
    pub fn run(&mut self) -> Result<()> {
        let mut iteration = 1;
        loop {
            info!("Starting session iteration {}", iteration);
            self.run_once()?;

            let answer = self.console.ask(RESTART_PROMPT)?;
            if !answer_is(&answer, &RESTART_ANSWERS) {
                info!("User declined restart after {} iteration(s)", iteration);
                return Ok(());
            }
            iteration += 1;
        }
    }

    fn run_once(&mut self) -> Result<()> {
        let selection = get_filters(&mut self.console)?;
        info!(
            "Selected city={} month={} day={}",
            selection.city, selection.month, selection.day
        );

        let table = match load_data(&self.data_dir, &selection) {
            Ok(table) => table,
            Err(err @ BikeshareError::MissingColumns { .. }) => {
                writeln!(self.console.out(), "{}", err)?;
                return Err(err);
            }
            Err(err) => return Err(err),
        };

        display_all(self.console.out(), &table)?;
        show_dataset_part(&mut self.console, &table)
    }

    /// Consume the session, returning the console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
