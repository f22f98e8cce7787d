//! Interactive paged viewer

use tokio::io::{AsyncBufRead, AsyncWrite};

use super::{
    table::{render_records, TableRow},
    terminal::Terminal,
};
use crate::error::AppResult;

pub const CONTINUE_PROMPT: &str = " CATA <e to end> ";
pub const STOP_TOKEN: &str = "e";
pub const EMPTY_MESSAGE: &str = "no records to show";

/// Show `records` `page_size` rows at a time.
///
/// After every page that does not reach the end the user is asked whether to
/// go on; only the exact answer `e` stops. Returns the number of pages shown.
pub async fn page<T, R, W>(
    terminal: &mut Terminal<R, W>,
    records: &[T],
    page_size: usize,
    max_width: usize,
) -> AppResult<usize>
where
    T: TableRow,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if records.is_empty() {
        terminal.println(EMPTY_MESSAGE).await?;
        return Ok(0);
    }

    let page_size = page_size.max(1);
    let mut shown = 0;
    let mut offset = 0;

    for chunk in records.chunks(page_size) {
        terminal.write(&render_records(chunk, max_width)).await?;
        shown += 1;
        offset += chunk.len();

        if offset >= records.len() {
            break;
        }
        if terminal.prompt(CONTINUE_PROMPT).await? == STOP_TOKEN {
            break;
        }
    }

    Ok(shown)
}
