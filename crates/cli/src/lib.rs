//! Cmaner CLI Library
//!
//! This crate provides the command-line interface for cmaner, a terminal
//! command manager. It handles the interactive menus, the loop that redraws
//! them in place, and the actions that add, remove and run commands.
//!
//! # Key Features
//!
//! - **Interactive Menus**: Category and command pickers, confirmations and text prompts
//! - **In-Place Redraw**: Menus render below the cursor without clearing the screen
//! - **Fuzzy Filtering**: Narrow long lists by typing
//! - **Guaranteed Cleanup**: The cursor and screen are restored however a menu ends
//! - **Report and Continue**: A failing command prints one line and never crashes the session
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`menu`]: The menu contract, the concrete menus and the menu runner
//! - [`launcher`]: The actions, composing menus with command execution
//!
//! # Examples
//!
//! ```bash
//! # Interactive mode - browse categories and run a command
//! cmaner
//!
//! # Run a command by its short call
//! cmaner dps
//!
//! # Manage categories and commands
//! cmaner add category
//! cmaner rm command
//! ```

pub mod cli_args;
pub mod launcher;
pub mod menu;
