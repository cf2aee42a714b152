#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `flipbook-rs` is a frame-by-frame sprite animation and effect engine:
//! clips cut from image strips, a wall-clock frame stepper, and stacked,
//! time-bounded effects (scale, flip, fade, turn, hue, move) feeding a
//! rendering backend of your choice.
//!
pub use flipbook_internal::*;
