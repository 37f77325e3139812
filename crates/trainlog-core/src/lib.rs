//! Core types and trait definitions for trainlog.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends implement [`store::TrainingStore`]; presentation layers
//! drive everything through [`Logbook`].

pub mod access;
pub mod credential;
pub mod error;
pub mod link;
pub mod logbook;
pub mod store;
pub mod user;
pub mod workout;

pub use error::{Error, Result};
pub use logbook::Logbook;
