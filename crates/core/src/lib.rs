//! Cmaner Core Library
//!
//! This crate provides the core functionality for cmaner, a terminal command
//! manager that lets users group shell commands into categories and launch
//! them from an interactive menu.
//!
//! # Key Features
//!
//! - **Storage**: Load, validate and save categories and commands as YAML
//! - **Execution Context**: Shell selection and the session's interruptibility flag
//! - **Command Execution**: Run a command as a child process, optionally elevated
//! - **Configuration Management**: Resolve the storage path and expand `~`
//! - **Error Handling**: Comprehensive error types for all failure modes
//!
//! # Examples
//!
//! Loading the storage and listing its commands:
//!
//! ```no_run
//! use cmaner_core::file_handling::get_storage;
//!
//! let storage = get_storage("/home/me/.cmaner/storage.yml")?;
//! for category in &storage.categories {
//!     for command in &category.commands {
//!         println!("{}: {}", category.name, command);
//!     }
//! }
//! # Ok::<(), cmaner_core::error::Error>(())
//! ```

pub mod command_definitions;
pub mod config;
pub mod error;
pub mod execution;
pub mod file_handling;
