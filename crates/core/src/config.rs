//! Configuration path utilities for cmaner.
//!
//! This module provides functions for resolving the storage file path, the
//! shell used to run commands, and expanding shell variables like `~` in paths.

/// Default path for the categories and commands storage file
const DEFAULT_STORAGE_PATH: &str = "~/.cmaner/storage.yml";

/// Default shell to use for command execution
#[cfg(not(windows))]
pub const DEFAULT_SHELL: &str = "/bin/sh";
#[cfg(windows)]
pub const DEFAULT_SHELL: &str = "cmd.exe";

/// Environment variable naming the user's shell
#[cfg(not(windows))]
const SHELL_VARIABLE: &str = "SHELL";
#[cfg(windows)]
const SHELL_VARIABLE: &str = "COMSPEC";

/// Flag that makes the shell run the following argument as a command line
#[cfg(not(windows))]
pub const SHELL_COMMAND_FLAG: &str = "-c";
#[cfg(windows)]
pub const SHELL_COMMAND_FLAG: &str = "/C";

/// Resolves the storage file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// storage path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use cmaner_core::config::get_storage_path;
///
/// // Use default path
/// let default_path = get_storage_path(&None);
///
/// // Use custom path
/// let custom_path = get_storage_path(&Some("/path/to/storage.yml".to_string()));
/// ```
pub fn get_storage_path(storage_path_arg: &Option<String>) -> String {
    let storage_path = match storage_path_arg {
        Some(storage_path) => storage_path,
        None => DEFAULT_STORAGE_PATH,
    };

    shellexpand::tilde(storage_path).to_string()
}

/// Returns the shell commands are run with, from the environment or
/// [`DEFAULT_SHELL`].
pub fn get_shell() -> String {
    shell_or_default(std::env::var(SHELL_VARIABLE).ok())
}

fn shell_or_default(shell: Option<String>) -> String {
    shell
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SHELL.to_string())
}

/// Expands shell variables in a working directory path.
///
/// Returns None if no working directory is provided.
///
/// # Examples
///
/// ```
/// use cmaner_core::config::expand_working_directory;
///
/// let expanded = expand_working_directory(&Some("~/projects".to_string()));
/// assert!(expanded.is_some());
///
/// let none_result = expand_working_directory(&None);
/// assert!(none_result.is_none());
/// ```
pub fn expand_working_directory(working_directory: &Option<String>) -> Option<String> {
    working_directory
        .as_ref()
        .map(|dir| shellexpand::tilde(dir).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_storage_path_with_custom_path() {
        let custom_path = Some("/custom/path/storage.yml".to_string());
        let result = get_storage_path(&custom_path);
        assert_eq!(result, "/custom/path/storage.yml");
    }

    #[test]
    fn test_get_storage_path_with_none() {
        let result = get_storage_path(&None);
        // Should expand the tilde in the default path
        assert!(result.ends_with("storage.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_shell_or_default() {
        assert_eq!(shell_or_default(None), DEFAULT_SHELL);
        assert_eq!(shell_or_default(Some("  ".to_string())), DEFAULT_SHELL);
        assert_eq!(shell_or_default(Some("/bin/zsh".to_string())), "/bin/zsh");
    }

    #[test]
    fn test_expand_working_directory_with_tilde() {
        let working_dir = Some("~/projects/cmaner".to_string());
        let expanded = expand_working_directory(&working_dir).unwrap();
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("projects/cmaner"));
    }

    #[test]
    fn test_expand_working_directory_with_none() {
        assert!(expand_working_directory(&None).is_none());
    }

    #[test]
    fn test_expand_working_directory_without_tilde() {
        let working_dir = Some("/absolute/path".to_string());
        assert_eq!(
            expand_working_directory(&working_dir).unwrap(),
            "/absolute/path"
        );
    }
}
