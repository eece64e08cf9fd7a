//! focusflow: natural-language quick add for tasks.
//!
//! The core entry point is [`parse::extract`], which turns a phrase like
//! `Submit report tomorrow at 5pm !high @work` into a [`model::ParsedTask`].

pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod parse;
