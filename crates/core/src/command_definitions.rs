use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A saved shell command.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "command")]
    pub command_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_call: Option<String>,
    #[serde(default)]
    pub admin_required: bool,
}

impl Display for Command {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.title {
            Some(title) => formatter.write_str(title)?,
            None => formatter.write_str(&self.command_text)?,
        }

        if let Some(short_call) = &self.short_call {
            write!(formatter, " [{short_call}]")?;
        }

        if let Some(desc) = &self.description {
            write!(formatter, " - {desc}")?;
        }

        Ok(())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl Display for Category {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let count = self.commands.len();
        let noun = if count == 1 { "command" } else { "commands" };
        write!(formatter, "{} ({count} {noun})", self.name)?;

        if let Some(desc) = &self.description {
            write!(formatter, " - {desc}")?;
        }

        Ok(())
    }
}

/// Position of a command inside [`Storage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandLocation {
    pub category: usize,
    pub command: usize,
}

/// Everything persisted between sessions: the categories and their commands.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Storage {
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Storage {
    #[must_use]
    pub fn has_commands(&self) -> bool {
        self.categories.iter().any(|c| !c.commands.is_empty())
    }

    #[must_use]
    pub fn command(&self, location: CommandLocation) -> Option<&Command> {
        self.categories
            .get(location.category)
            .and_then(|c| c.commands.get(location.command))
    }

    /// Finds the command registered under `short_call`.
    #[must_use]
    pub fn find_by_short_call(&self, short_call: &str) -> Option<&Command> {
        self.categories
            .iter()
            .flat_map(|c| c.commands.iter())
            .find(|cmd| cmd.short_call.as_deref() == Some(short_call))
    }

    pub fn remove_command(&mut self, location: CommandLocation) -> Option<Command> {
        let category = self.categories.get_mut(location.category)?;
        if location.command < category.commands.len() {
            Some(category.commands.remove(location.command))
        } else {
            None
        }
    }

    pub fn remove_category(&mut self, index: usize) -> Option<Category> {
        if index < self.categories.len() {
            Some(self.categories.remove(index))
        } else {
            None
        }
    }
}
