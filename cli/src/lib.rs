//! dsa-demo library.
//!
//! The binary is a thin wrapper around [`demo::run`]; the modules are public so
//! the walkthrough can be driven in-process from tests.

pub mod cli;
pub mod common;
pub mod demo;
