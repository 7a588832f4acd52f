//! TUI widgets for the game

pub mod input;
pub mod silhouette;
pub mod status_bar;
pub mod suggestions;

pub use input::InputWidget;
pub use silhouette::SilhouetteWidget;
pub use status_bar::{HotkeyBarWidget, StatusBarWidget, TitleBarWidget};
pub use suggestions::SuggestionsWidget;
