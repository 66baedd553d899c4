//! Tree Menu Widget
//!
//! An interactive picker over a [`treeselect::HierarchicalSelectionEngine`]:
//! cursor navigation, expand/collapse, checkboxes with partial states and
//! single or multi selection.
//!
//! # Module Structure
//!
//! - `menu` - TreeMenu state management and action handling
//! - `render` - Terminal rendering functions
//! - `input` - Keyboard input handling and interactive loop

mod input;
mod menu;
mod render;

pub use input::run_interactive;
pub use menu::TreeMenu;
pub use render::render_tree;
