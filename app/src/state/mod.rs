//! Page-local UI state that outlives a single render: which section is
//! showing, and what the popup is showing.

mod popup;
mod sections;

pub use popup::Popup;
pub use sections::{ScopedSelector, SectionKey, SectionSelector};
