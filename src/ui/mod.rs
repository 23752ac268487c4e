//! Terminal presentation for the deploy-recorder binary
//!
//! `theme` holds the design tokens, `primitives`/`widgets`/`blocks` build
//! output from the bottom up, and `views` turns domain values into text.
//! `console` is the human-facing event sink.

pub mod blocks;
pub mod console;
pub mod context;
pub mod error;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
