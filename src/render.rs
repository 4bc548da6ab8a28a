//! Plain-text table rendering
//!
//! Produces an org-mode style table:
//!
//! ```text
//! | Artist  | Song     | Length |
//! |---------+----------+--------|
//! | Rihanna | Umbrella | 0:4:35 |
//! ```

const HEADERS: [&str; 3] = ["Artist", "Song", "Length"];

/// Render `(artist, title, duration)` rows as a table
pub fn render_table<I, A, T, D>(rows: I) -> String
where
    I: IntoIterator<Item = (A, T, D)>,
    A: AsRef<str>,
    T: AsRef<str>,
    D: AsRef<str>,
{
    let rows: Vec<[String; 3]> = rows
        .into_iter()
        .map(|(a, t, d)| {
            [
                a.as_ref().to_string(),
                t.as_ref().to_string(),
                d.as_ref().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS, &widths);

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    out.push('|');
    out.push_str(&rule.join("+"));
    out.push_str("|\n");

    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize; 3]) {
    out.push('|');
    for (cell, width) in cells.iter().zip(widths) {
        let cell = cell.as_ref();
        let pad = width - cell.chars().count();
        out.push(' ');
        out.push_str(cell);
        out.push_str(&" ".repeat(pad + 1));
        out.push('|');
    }
    out.push('\n');
}
