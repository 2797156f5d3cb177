use super::{PickItem, Picker, UIError};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    terminal::{self, ClearType},
    tty::IsTty,
};
use std::io::{Write, stdin, stdout};
use unicode_width::UnicodeWidthStr;

const RESET: &str = "\x1B[0m";
const HEADER_ROWS: u16 = 3;

/// Restores the terminal however the prompt loop exits.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Full-screen selectable list with incremental search.
pub struct Prompt {
    /// ANSI escape code for the text color of the selected item.
    select_color: String,
    /// ANSI escape code for the text color of unselected items.
    unselect_color: String,
    /// ANSI escape code for descriptions.
    description_color: String,
    /// Marker printed in front of the selected item.
    marker: char,
}

impl Default for Prompt {
    fn default() -> Self {
        Self {
            select_color: String::from("\x1B[1;31m"),
            unselect_color: String::from("\x1B[1;34m"),
            description_color: String::from("\x1B[2m"),
            marker: '▶',
        }
    }
}

impl Prompt {
    fn draw(&self, out: &mut impl Write, title: &str, query: &str, items: &[PickItem], view: &PromptView) -> Result<(), UIError> {
        queue!(out, cursor::MoveTo(0, 0), terminal::Clear(ClearType::All))?;
        write!(out, "{}  ↑ ↓ to navigate  |  type to search  |  Enter to select  |  Esc to cancel", title)?;
        write!(out, "\r\nSearch: {}\r\n", query)?;

        if view.filtered.is_empty() {
            write!(out, "\r\n{}  (nothing to select){}", self.description_color, RESET)?;
        }

        let label_width = items.iter().map(|item| item.label.width()).max().unwrap_or(0);
        for position in view.start..view.end {
            let index = view.filtered[position];
            let is_selected = position == view.selected;
            let (color, marker) = if is_selected {
                (&self.select_color, self.marker)
            } else {
                (&self.unselect_color, ' ')
            };
            write!(
                out,
                "\r\n{} {} {}{}",
                color,
                marker,
                format_item(&items[index], label_width, &self.description_color),
                RESET
            )?;
        }

        out.flush()?;
        Ok(())
    }
}

impl Picker for Prompt {
    fn pick(&self, title: &str, items: &[PickItem]) -> Result<Option<usize>, UIError> {
        if !stdin().is_tty() {
            return Err(UIError::NotATerminal);
        }

        let mut out = stdout();
        terminal::enable_raw_mode()?;
        let _guard = TerminalGuard;
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;

        let mut query = String::new();
        let mut filtered = filter_items(items, &query);
        let mut selected = 0usize;

        loop {
            let (_, rows) = terminal::size()?;
            let height = usize::from(rows.saturating_sub(HEADER_ROWS).max(1));
            let (start, end) = visible_window(selected, filtered.len(), height);
            let view = PromptView {
                filtered: &filtered,
                selected,
                start,
                end,
            };
            self.draw(&mut out, title, &query, items, &view)?;

            let Event::Key(KeyEvent { code, modifiers, kind, .. }) = event::read()? else {
                continue;
            };
            if kind != KeyEventKind::Press {
                continue;
            }

            match code {
                KeyCode::Up => selected = selected.saturating_sub(1),
                KeyCode::Down if selected + 1 < filtered.len() => selected += 1,
                KeyCode::PageUp => selected = selected.saturating_sub(height),
                KeyCode::PageDown => selected = (selected + height).min(filtered.len().saturating_sub(1)),
                KeyCode::Home => selected = 0,
                KeyCode::End => selected = filtered.len().saturating_sub(1),
                KeyCode::Enter => return Ok(filtered.get(selected).copied()),
                KeyCode::Esc => return Ok(None),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return Ok(None),
                KeyCode::Char(c) if is_search_input(modifiers) => {
                    query.push(c);
                    filtered = filter_items(items, &query);
                    selected = 0;
                }
                KeyCode::Backspace => {
                    query.pop();
                    filtered = filter_items(items, &query);
                    selected = 0;
                }
                _ => {}
            }
        }
    }
}

struct PromptView<'a> {
    filtered: &'a [usize],
    selected: usize,
    start: usize,
    end: usize,
}

/// Indices of items whose label or description contains `query`, ignoring case.
fn filter_items(items: &[PickItem], query: &str) -> Vec<usize> {
    let query = query.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| {
            query.is_empty()
                || item.label.to_lowercase().contains(&query)
                || item.description.as_ref().is_some_and(|description| description.to_lowercase().contains(&query))
        })
        .map(|(index, _)| index)
        .collect()
}

/// Plain or shifted characters extend the query; Ctrl and Alt chords do not.
fn is_search_input(modifiers: KeyModifiers) -> bool {
    !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Range of list positions to draw so that `selected` stays visible.
fn visible_window(selected: usize, len: usize, height: usize) -> (usize, usize) {
    if len <= height {
        return (0, len);
    }
    let start = selected.saturating_sub(height - 1).min(len - height);
    (start, start + height)
}

fn format_item(item: &PickItem, label_width: usize, description_color: &str) -> String {
    match &item.description {
        Some(description) if !description.is_empty() => {
            let padding = label_width.saturating_sub(item.label.width());
            format!("{}{}  {}{}", item.label, " ".repeat(padding), description_color, description)
        }
        _ => item.label.clone(),
    }
}

#[cfg(test)]
#[path = "../test/ui/prompt.rs"]
mod tests;
