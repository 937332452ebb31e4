//! Controller layer: shell command parsing and the session reducer that
//! applies commands to the catalog views.

pub mod commands;
pub mod reducer;
