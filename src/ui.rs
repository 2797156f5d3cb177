//! Terminal user interface: the selection prompt and user-facing messages.

mod errors;
mod prompt;

pub use errors::UIError;
pub use prompt::Prompt;

/// One selectable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickItem {
    pub label: String,
    /// Secondary text shown dimmed next to the label.
    pub description: Option<String>,
}

impl PickItem {
    pub fn new(label: impl Into<String>, description: Option<String>) -> Self {
        Self {
            label: label.into(),
            description,
        }
    }
}

/// Single-select list UI.
pub trait Picker {
    /// Show `items` under `title` and return the index of the chosen item,
    /// or `None` when the user cancels.
    fn pick(&self, title: &str, items: &[PickItem]) -> Result<Option<usize>, UIError>;
}

/// Tell the user something without treating it as a failure.
pub fn show_info(message: &str) {
    eprintln!("ℹ️  {}", message);
}

/// Report a failed command.
pub fn show_error(message: &str) {
    eprintln!("❌ {}", message);
}
