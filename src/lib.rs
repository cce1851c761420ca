//! radiosync: a terminal radio where every listener hears the same track at
//! the same second.
//!
//! The position math lives in [`radio`] and is pure; everything else feeds it
//! a playlist and a clock, then draws the result.

pub mod app;
pub mod config;
pub mod library;
pub mod logging;
pub mod radio;
pub mod runtime;
pub mod ui;
