//! Terminal rendering for the saved command listing.

use crate::store::CommandList;
use owo_colors::OwoColorize;

/// Message printed when there is nothing to list.
pub const EMPTY_STATE_MESSAGE: &str = "No commands saved";

const HEADERS: [&str; 3] = ["Index", "Alias", "Command"];
const COLUMN_GAP: usize = 2;

/// Renders the saved commands as a table, or the empty-state notice.
///
/// Output is framed by blank lines. With `colored` set, the header is
/// underlined and the empty-state notice is red.
pub fn format_listing(commands: &CommandList, colored: bool) -> String {
    let body = if commands.is_empty() {
        format_empty_state(colored)
    } else {
        format_command_table(commands, colored)
    };

    format!("\n{}\n", body)
}

/// Renders the empty-state notice.
pub fn format_empty_state(colored: bool) -> String {
    if colored {
        EMPTY_STATE_MESSAGE.red().to_string()
    } else {
        EMPTY_STATE_MESSAGE.to_string()
    }
}

/// Renders an `Index | Alias | Command` table.
///
/// Columns are padded to the widest cell; the last column is not padded.
/// Widths count `char`s, so wide (CJK) or combining characters misalign.
pub fn format_command_table(commands: &CommandList, colored: bool) -> String {
    let rows: Vec<[String; 3]> = commands
        .iter()
        .enumerate()
        .map(|(index, saved)| [index.to_string(), saved.alias.clone(), saved.command.clone()])
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = HEADERS
        .iter()
        .enumerate()
        .map(|(column, title)| {
            let padded = pad_cell(title, widths[column], column == HEADERS.len() - 1);
            if colored {
                format!("{}{}", title.underline(), &padded[title.len()..])
            } else {
                padded
            }
        })
        .collect::<String>();

    let mut output = String::new();
    output.push_str(&header);
    output.push('\n');

    for row in &rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(column, cell)| pad_cell(cell, widths[column], column == HEADERS.len() - 1))
            .collect::<String>();
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

fn pad_cell(cell: &str, width: usize, last: bool) -> String {
    if last {
        return cell.to_string();
    }
    let padding = width - cell.chars().count() + COLUMN_GAP;
    format!("{}{}", cell, " ".repeat(padding))
}
