//! Dialog components for the TUI

pub mod movement;
