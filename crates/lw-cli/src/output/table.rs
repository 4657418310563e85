/// A rendered-ready table: headers, string rows and an optional summary line.
#[derive(Clone, Debug, Default)]
pub struct Table {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    pub summary: Option<String>,
}

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table, shrinking the widest columns to fit `max_width`.
#[must_use]
pub fn render(table: &Table, options: TableOptions) -> String {
    let mut lines = Vec::with_capacity(table.rows.len() + 3);
    if let Some(summary) = &table.summary {
        lines.push(summary.clone());
    }
    if table.rows.is_empty() {
        lines.push(String::from("(no rows)"));
        return lines.join("\n");
    }

    let mut widths: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();
    fit_widths(&mut widths, &table.headers, options.max_width);

    let header_line = table
        .headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width))
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(header_line.trim_end().to_string());
    lines.push("-".repeat(widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 2));

    for row in &table.rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = truncate(row.get(index).map_or("-", String::as_str), *width);
                let padded = pad(&cell, *width);
                if options.color {
                    colorize_outcome(&cell, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(6))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);
        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let pad = width.saturating_sub(value.chars().count());
    format!("{value}{}", " ".repeat(pad))
}

fn colorize_outcome(cell: &str, padded: String) -> String {
    let code = match cell {
        "changed" => "33",
        "unchanged" => "32",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}
