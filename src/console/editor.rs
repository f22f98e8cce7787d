//! Record editor workflow shared by every edit and remove command
//!
//! The shape is always the same: search, show what matched, ask which
//! record to touch (or `x` to back out), then let the caller mutate it.

use tokio::io::{AsyncBufRead, AsyncWrite};

use super::{
    table::{render_records, TableRow},
    terminal::Terminal,
};
use crate::error::AppResult;

pub const ID_PROMPT: &str = " CATA <id or x> ";
pub const VALUE_PROMPT: &str = " CATA <new value> ";
pub const CANCEL_TOKEN: &str = "x";

/// Show the search result and ask for the id of the record to act on.
///
/// Returns `None` when nothing matched, the search itself failed, or the
/// user cancelled. The id is not checked against the matches; resolving it
/// is up to the caller.
pub async fn select_target<T, R, W>(
    terminal: &mut Terminal<R, W>,
    filter: &str,
    found: AppResult<Vec<T>>,
    max_width: usize,
) -> AppResult<Option<i64>>
where
    T: TableRow,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let matches = match found {
        Ok(matches) if !matches.is_empty() => matches,
        Ok(_) => {
            terminal.println(&format!("nothing found matching '{filter}'")).await?;
            return Ok(None);
        }
        Err(e) => {
            tracing::warn!("Search for '{}' failed: {}", filter, e);
            terminal.println(&format!("nothing found matching '{filter}'")).await?;
            return Ok(None);
        }
    };

    terminal.write(&render_records(&matches, max_width)).await?;

    loop {
        let answer = terminal.prompt(ID_PROMPT).await?;
        let answer = answer.trim();
        if answer == CANCEL_TOKEN {
            terminal.println("cancelled").await?;
            return Ok(None);
        }
        if let Some(id) = parse_count(answer) {
            return Ok(Some(id));
        }
    }
}

/// Ask until the answer is a non-negative integer
pub async fn prompt_count<R, W>(terminal: &mut Terminal<R, W>, marker: &str) -> AppResult<i64>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        let answer = terminal.prompt(marker).await?;
        if let Some(count) = parse_count(answer.trim()) {
            return Ok(count);
        }
        terminal.println("please enter a whole number, 0 or more").await?;
    }
}

/// A string of ASCII digits that fits an `i64`
pub fn parse_count(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
