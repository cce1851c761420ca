//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the station, the last
//! ticked instant and the cursor.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
