//! Library components for the `nogo` command-line checker.

#![allow(missing_docs)]

pub mod input;
pub mod logging;
pub mod outcome;
pub mod service;
