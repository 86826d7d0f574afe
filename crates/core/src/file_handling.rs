//! File handling and validation for cmaner storage.
//!
//! This module provides functions for reading and writing the categories and
//! commands storage file, along with validation of names and short calls.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::command_definitions::Storage;
use crate::error::Error::{
    EmptyCategoryName, EmptyCommandText, EmptyShortCall, NonUniqueShortCall, ReservedShortCall,
    ShortCallWithWhitespace,
};
use crate::error::{Error, Result};

/// Words that select a built-in action on the command line and therefore
/// cannot be used as short calls.
pub const RESERVED_SHORT_CALLS: [&str; 3] = ["add", "rm", "help"];

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path).map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

/// Validates a single short call.
///
/// # Errors
///
/// Returns an error if the short call is empty, contains whitespace or is
/// one of [`RESERVED_SHORT_CALLS`].
pub fn validate_short_call(short_call: &str) -> Result<()> {
    if short_call.is_empty() {
        return Err(EmptyShortCall);
    }

    if short_call.chars().any(char::is_whitespace) {
        return Err(ShortCallWithWhitespace(short_call.to_string()));
    }

    if RESERVED_SHORT_CALLS.contains(&short_call) {
        return Err(ReservedShortCall(short_call.to_string()));
    }

    Ok(())
}

/// Validates the whole storage.
///
/// # Errors
///
/// Returns an error if a category name or a command text is blank, or if a
/// short call is invalid or used more than once.
pub fn validate_storage(storage: &Storage) -> Result<()> {
    let mut short_calls = HashSet::new();

    for category in &storage.categories {
        if category.name.trim().is_empty() {
            return Err(EmptyCategoryName);
        }

        for command in &category.commands {
            if command.command_text.trim().is_empty() {
                return Err(EmptyCommandText(category.name.clone()));
            }

            if let Some(short_call) = &command.short_call {
                validate_short_call(short_call)?;

                if !short_calls.insert(short_call.clone()) {
                    return Err(NonUniqueShortCall(short_call.clone()));
                }
            }
        }
    }

    Ok(())
}

/// Loads and validates the storage file.
///
/// A missing file is not an error: it yields an empty [`Storage`] so the
/// first `add` can create it.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - Validation fails
///
/// # Examples
///
/// ```no_run
/// use cmaner_core::file_handling::get_storage;
///
/// let storage = get_storage("/home/me/.cmaner/storage.yml")?;
/// println!("Loaded {} categories", storage.categories.len());
/// # Ok::<(), cmaner_core::error::Error>(())
/// ```
pub fn get_storage(storage_path: &str) -> Result<Storage> {
    if !Path::new(storage_path).exists() {
        debug!("No storage at `{storage_path}`, starting empty");
        return Ok(Storage::default());
    }

    let mut contents = String::new();
    get_reader("storage", storage_path)?
        .read_to_string(&mut contents)
        .map_err(|e| Error::io_error("storage".to_string(), storage_path.to_string(), e))?;

    if contents.trim().is_empty() {
        return Ok(Storage::default());
    }

    let storage: Storage = serde_yaml::from_str(&contents).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "storage".to_string(),
            storage_path.to_string(),
            e,
        )
    })?;

    validate_storage(&storage)?;

    Ok(storage)
}

/// Validates and writes the storage file, creating its directory if needed.
///
/// # Errors
///
/// Returns an error if validation fails, or the file or its directory cannot
/// be created or written to.
pub fn write_storage(storage_path: &str, storage: &Storage) -> Result<()> {
    validate_storage(storage)?;

    if let Some(parent) = Path::new(storage_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::io_error(
                    "storage directory".to_string(),
                    parent.display().to_string(),
                    e,
                )
            })?;
        }
    }

    let f = File::create(storage_path)
        .map_err(|e| Error::io_error("storage".to_string(), storage_path.to_string(), e))?;

    serde_yaml::to_writer(f, storage).map_err(|e| {
        Error::yaml_error(
            "writing".to_string(),
            "storage".to_string(),
            storage_path.to_string(),
            e,
        )
    })
}
