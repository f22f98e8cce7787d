//! Plain-text table rendering

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::models::{Booking, Entry, MaterialRequest};

/// A record that can be shown as one row of a console table
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    /// Display values, one per header
    fn cells(&self) -> Vec<String>;
}

impl TableRow for Entry {
    const HEADERS: &'static [&'static str] =
        &["id", "name", "location text", "location image", "available", "booked"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.location_text.clone(),
            self.location_img.clone(),
            self.available.to_string(),
            self.booked.to_string(),
        ]
    }
}

impl TableRow for Booking {
    const HEADERS: &'static [&'static str] = &["id", "material", "booked by", "info"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.booked_material.clone(),
            self.booked_by.clone(),
            self.book_info.clone(),
        ]
    }
}

impl TableRow for MaterialRequest {
    const HEADERS: &'static [&'static str] = &["id", "material", "requested by", "info"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.material.clone(),
            self.request_by.clone(),
            self.info.clone(),
        ]
    }
}

/// Render records under their headers
pub fn render_records<T: TableRow>(records: &[T], max_width: usize) -> String {
    let rows: Vec<Vec<String>> = records.iter().map(TableRow::cells).collect();
    render(T::HEADERS, &rows, max_width)
}

/// Render an aligned table. Cells wider than `max_width` columns are wrapped
/// onto continuation lines; headers are never wrapped.
pub fn render(headers: &[&str], rows: &[Vec<String>], max_width: usize) -> String {
    let max_width = max_width.max(1);

    let wrapped: Vec<Vec<Vec<String>>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| wrap(cell, max_width)).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in &wrapped {
        for (width, lines) in widths.iter_mut().zip(row) {
            for line in lines {
                *width = (*width).max(line.width());
            }
        }
    }

    let mut out = String::new();
    push_line(&mut out, headers.iter().copied(), &widths);
    push_line(&mut out, widths.iter().map(|w| "-".repeat(*w)), &widths);

    for row in &wrapped {
        let height = row.iter().map(Vec::len).max().unwrap_or(0).max(1);
        for i in 0..height {
            push_line(
                &mut out,
                (0..widths.len()).map(|col| {
                    row.get(col)
                        .and_then(|lines| lines.get(i))
                        .map(String::as_str)
                        .unwrap_or("")
                }),
                &widths,
            );
        }
    }

    out
}

fn push_line<I, S>(out: &mut String, cells: I, widths: &[usize])
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let line = cells
        .into_iter()
        .zip(widths)
        .map(|(cell, width)| {
            let cell = cell.as_ref();
            format!("{}{}", cell, " ".repeat(width.saturating_sub(cell.width())))
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Greedy word wrap by display width; words wider than `width` are split
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        for piece in split_word(word, width) {
            let piece_width = piece.width();
            if current_width > 0 && current_width + 1 + piece_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(&piece);
            current_width += piece_width;
        }
    }

    if current_width > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Cut a word into pieces at most `width` columns wide. A single glyph wider
/// than `width` still gets a piece of its own.
fn split_word(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;

    for c in word.chars() {
        let w = c.width().unwrap_or(0);
        if piece_width > 0 && piece_width + w > width {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(c);
        piece_width += w;
    }

    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_words() {
        assert_eq!(wrap("top shelf in room", 10), vec!["top shelf", "in room"]);
    }

    #[test]
    fn test_wrap_splits_long_word() {
        assert_eq!(wrap("abcdefghijkl", 5), vec!["abcde", "fghij", "kl"]);
    }

    #[test]
    fn test_wrap_counts_wide_glyphs_as_two_columns() {
        assert_eq!(wrap("三脚架三脚架三脚架", 10), vec!["三脚架三脚", "架三脚架"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn test_render_aligns_columns() {
        let rows = vec![
            vec!["1".to_string(), "Tripod".to_string()],
            vec!["12".to_string(), "Cam".to_string()],
        ];
        let table = render(&["id", "name"], &rows, 10);
        assert_eq!(table, "id  name\n--  ------\n1   Tripod\n12  Cam\n");
    }

    #[test]
    fn test_render_wraps_wide_cells() {
        let rows = vec![vec!["1".to_string(), "left cabinet drawer".to_string()]];
        let table = render(&["id", "where"], &rows, 10);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], "1   left");
        assert_eq!(lines[3], "    cabinet");
        assert_eq!(lines[4], "    drawer");
    }

    #[test]
    fn test_render_aligns_wide_glyphs() {
        let rows = vec![
            vec!["1".to_string(), "三脚架三脚架三脚架".to_string()],
            vec!["2".to_string(), "Cam".to_string()],
        ];
        let table = render(&["id", "name"], &rows, 10);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[1], format!("--  {}", "-".repeat(10)));
        assert_eq!(lines[2], "1   三脚架三脚");
        assert_eq!(lines[3], "    架三脚架");
        assert_eq!(lines[4], "2   Cam");
        assert!(lines.iter().all(|line| line.width() <= 14));
    }

    #[test]
    fn test_render_records_uses_headers() {
        let entry = Entry {
            id: 3,
            name: "Tripod".to_string(),
            location_text: "shelf".to_string(),
            location_img: "shelf.png".to_string(),
            available: 3,
            booked: 0,
        };
        let table = render_records(&[entry], 10);
        assert!(table.starts_with("id  name    location text  location image  available  booked\n"));
        assert!(table.contains("Tripod"));
    }
}
