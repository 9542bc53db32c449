//! Cargo Command Line CLI Library
//!
//! This crate provides the `ccl` command-line front end for cargo-cmdline-core.
//! It loads a project definition, turns the selected targets, package or project
//! into a cargo invocation and prints it. Nothing is executed.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`selection`]: Scope determination, target resolution and option handling
//!
//! # Examples
//!
//! ```bash
//! # Build everything in the project
//! ccl
//!
//! # Run a binary with arguments for the program
//! ccl -t bin:server --positional --port=8080
//!
//! # Test two targets of one package on nightly, without capturing output
//! ccl -p server -t lib:server -t test:smoke --channel nightly --nocapture
//!
//! # Pass extra cargo arguments
//! ccl -t server -- --release
//! ```

pub mod cli_args;
pub mod selection;
