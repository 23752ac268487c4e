//! Composite output blocks built from widgets and primitives

pub mod failure;
pub mod header;
pub mod summary;
pub mod warning;
