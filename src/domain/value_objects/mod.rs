//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod check_state;
mod concern_mode;
mod config_warning;
mod interaction;
mod key_set;

pub use check_state::CheckState;
pub use concern_mode::ConcernMode;
pub use config_warning::ConfigWarning;
pub use interaction::Interaction;
pub use key_set::KeySet;
