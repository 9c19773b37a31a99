//! Plain-text rendering of a view state.
//!
//! The output is a pure function of [`ViewState`]: `Loading` shows the loading text,
//! `Error` replaces the whole view, `Ready` shows the form (with the inline banner, if
//! any) followed by the table.

use crate::framework::{CatalogEntity, ViewPhase, ViewState};
use crate::messages::{MessageKind, Messages};
use crate::navigator::NavBar;
use std::fmt::Write;

/// How an entity shows up in its view.
pub trait Tabular: CatalogEntity {
    const TITLE: MessageKind;
    const ADD_TITLE: MessageKind;
    const EDIT_TITLE: MessageKind;
    const LIST_TITLE: MessageKind;
    const EMPTY: MessageKind;
    /// Label of the button jumping to the other view.
    const CROSS_LINK: MessageKind;

    fn headers(messages: &Messages) -> Vec<String>;

    fn cells(&self, messages: &Messages) -> Vec<String>;

    /// Label/value pairs of the edit form.
    fn form(fields: &Self::Fields, aux: &Self::Aux, messages: &Messages) -> Vec<(String, String)>;
}

pub fn render_view<T: Tabular>(state: &ViewState<T>, messages: &Messages) -> String {
    let banner = match state.phase() {
        ViewPhase::Loading => return format!("{}\n", messages.get(MessageKind::Loading)),
        ViewPhase::Error(message) => {
            return format!("{}: {}\n", messages.get(MessageKind::ErrorPrefix), message)
        }
        ViewPhase::Ready { banner } => banner,
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}\n", messages.get(T::TITLE));

    let editing = state.edit_buffer.is_edit_mode();
    let form_title = if editing { T::EDIT_TITLE } else { T::ADD_TITLE };
    let _ = writeln!(out, "{}", messages.get(form_title));
    if let Some(banner) = banner {
        let _ = writeln!(out, "! {}", banner);
    }
    for (label, value) in T::form(&state.edit_buffer.fields, &state.aux, messages) {
        let _ = writeln!(out, "  {}: {}", label, value);
    }
    let submit = if editing { MessageKind::Update } else { MessageKind::Save };
    let _ = write!(out, "  [{}]", messages.get(submit));
    if editing {
        let _ = write!(out, " [{}]", messages.get(MessageKind::Cancel));
    }
    let _ = writeln!(out, "\n");

    let _ = writeln!(
        out,
        "{}  [{}]",
        messages.get(T::LIST_TITLE),
        messages.get(T::CROSS_LINK)
    );
    if state.collection.is_empty() {
        let _ = writeln!(out, "{}", messages.get(T::EMPTY));
        return out;
    }

    let rows: Vec<Vec<String>> = state.collection.iter().map(|e| e.cells(messages)).collect();
    out.push_str(&table(&T::headers(messages), &rows));
    out
}

pub fn render_nav(nav: &NavBar) -> String {
    let links: Vec<String> = nav.links.iter().map(|l| format!("[{}]", l.label)).collect();
    format!("{} | {}\n", nav.brand.label, links.join(" "))
}

/// Left-aligned columns separated by ` | `.
fn table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let line = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        padded.join(" | ").trim_end().to_string()
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", line(headers));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));
    for row in rows {
        let _ = writeln!(out, "{}", line(row));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_pads_columns() {
        let headers = vec!["ID".to_string(), "Nombre".to_string()];
        let rows = vec![
            vec!["1".to_string(), "Beverages".to_string()],
            vec!["12".to_string(), "Tea".to_string()],
        ];
        assert_eq!(
            table(&headers, &rows),
            "ID | Nombre\n---+----------\n1  | Beverages\n12 | Tea\n"
        );
    }
}
