//! Smallest rendering units: icons, colored text and border glyphs

pub mod border;
pub mod icon;
pub mod text;
