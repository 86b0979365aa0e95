//! Core types shared by the config layer.

mod link;

pub use link::{LinkKind, path_part};
