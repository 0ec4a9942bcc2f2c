//! Paginated view of raw trip rows.
//!
//! [`RawDataPager`] is a small state machine over a borrowed slice of records.
//! It knows nothing about terminals: callers feed it the user's answer with
//! [`RawDataPager::respond`] and print whatever window comes back.
//! [`run_pager`] is the interactive driver used by the CLI, written against
//! generic readers and writers so it can be exercised with in-memory buffers.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::data::TripRecord;
use crate::Result;

/// Default number of rows per window.
pub const WINDOW: usize = 5;

/// Where the pager is in its conversation with the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerState {
    /// Nothing shown yet
    AwaitingConsent,
    /// A window is on screen and more rows remain
    Displaying,
    /// Every row was shown, or the user declined
    Done,
}

/// A contiguous run of rows handed out by the pager.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window<'a> {
    /// Position of the first row within the paged slice
    pub start: usize,
    pub rows: &'a [TripRecord],
}

impl Window<'_> {
    /// One past the position of the last row.
    pub fn end(&self) -> usize {
        self.start + self.rows.len()
    }
}

/// Cursor over a slice of records, handing out fixed-size windows on request.
#[derive(Debug, Clone)]
pub struct RawDataPager<'a> {
    rows: &'a [TripRecord],
    window: usize,
    cursor: usize,
    state: PagerState,
}

impl<'a> RawDataPager<'a> {
    /// Pager with the default window of [`WINDOW`] rows.
    pub fn new(rows: &'a [TripRecord]) -> Self {
        Self::with_window(rows, WINDOW)
    }

    /// Pager with a custom window size. A size of zero is treated as one.
    pub fn with_window(rows: &'a [TripRecord], window: usize) -> Self {
        Self {
            rows,
            window: window.max(1),
            cursor: 0,
            state: PagerState::AwaitingConsent,
        }
    }

    pub fn state(&self) -> PagerState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == PagerState::Done
    }

    /// Number of rows not yet shown.
    pub fn remaining(&self) -> usize {
        self.rows.len() - self.cursor
    }

    /// Answer the pending prompt.
    ///
    /// On consent, returns the next window of at most `window` rows and
    /// advances the cursor; the pager finishes once the last row has been
    /// handed out. Declining, or asking again after the pager finished,
    /// returns `None` and leaves it `Done`.
    pub fn respond(&mut self, consent: bool) -> Option<Window<'a>> {
        if self.state == PagerState::Done {
            return None;
        }
        if !consent || self.cursor >= self.rows.len() {
            self.state = PagerState::Done;
            return None;
        }

        let start = self.cursor;
        let end = (start + self.window).min(self.rows.len());
        self.cursor = end;
        self.state = if end == self.rows.len() {
            PagerState::Done
        } else {
            PagerState::Displaying
        };
        debug!(start, end, total = self.rows.len(), "raw data window");

        Some(Window {
            start,
            rows: &self.rows[start..end],
        })
    }

    /// Iterate over every remaining window without prompting.
    pub fn windows(self) -> Windows<'a> {
        Windows { pager: self }
    }
}

/// Iterator over all windows of a [`RawDataPager`].
#[derive(Debug, Clone)]
pub struct Windows<'a> {
    pager: RawDataPager<'a>,
}

impl<'a> Iterator for Windows<'a> {
    type Item = Window<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pager.respond(true)
    }
}

/// True for "y" or "yes" in any case, ignoring surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Drive `pager` interactively.
///
/// Prompts on `output`, reads one answer per line from `input` and writes each
/// window as formatted by `render`. End of input counts as "no".
pub fn run_pager<R, W, F>(
    mut pager: RawDataPager<'_>,
    mut input: R,
    mut output: W,
    mut render: F,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(&Window<'_>) -> std::io::Result<String>,
{
    let mut first = true;
    while !pager.is_done() {
        let size = pager.window;
        if first {
            writeln!(output, "\nWould you like to see {size} lines of raw data? Enter yes or no.")?;
        } else {
            writeln!(output, "\nWould you like to see {size} more lines? Enter yes or no.")?;
        }
        output.flush()?;
        first = false;

        let mut answer = String::new();
        let consent = input.read_line(&mut answer)? > 0 && is_affirmative(&answer);
        if let Some(window) = pager.respond(consent) {
            write!(output, "{}", render(&window)?)?;
        }
    }
    output.flush()?;
    Ok(())
}
