//! Route-level page components.

pub mod editor;
