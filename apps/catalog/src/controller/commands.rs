//! Shell commands typed by the user, one per line.

use client_core::{Route, SortKey};
use shared::domain::CommentId;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  list                  show the current page
  sort <alphabetical|count>
  add                   open the add-product form
  set <field> <value>   fill a form field (name, image, count, width, height, weight)
  submit                add the product from the form
  discard               close the open form without saving
  delete <id>           ask to delete a product
  confirm | cancel      answer a pending delete
  open <id|/id>         show one product
  back                  return to the product list
  edit | save           edit the open product
  comment <text>        add a comment to the open product
  uncomment <id>        remove a comment
  help | quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    ImageUrl,
    Count,
    Width,
    Height,
    Weight,
}

impl DraftField {
    fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "name" => Some(Self::Name),
            "image" | "imageurl" | "image_url" => Some(Self::ImageUrl),
            "count" => Some(Self::Count),
            "width" => Some(Self::Width),
            "height" => Some(Self::Height),
            "weight" => Some(Self::Weight),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::ImageUrl => "image",
            Self::Count => "count",
            Self::Width => "width",
            Self::Height => "height",
            Self::Weight => "weight",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Help,
    Quit,
    List,
    Sort(SortKey),
    Add,
    Set { field: DraftField, value: String },
    Submit,
    Discard,
    Delete(i64),
    Confirm,
    Cancel,
    Go(Route),
    Back,
    Edit,
    Save,
    Comment(String),
    Uncomment(CommentId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}'; type `help`")]
    Unknown(String),
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("`{command}`: invalid argument '{value}'")]
    InvalidArgument { command: &'static str, value: String },
}

impl ShellCommand {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            "list" | "ls" => Self::List,
            "sort" => {
                let value = required(rest, "sort", "a sort key")?;
                Self::Sort(value.parse().map_err(|_| invalid("sort", value))?)
            }
            "add" => Self::Add,
            "set" => {
                let rest = required(rest, "set", "a field and a value")?;
                let (raw_field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (rest, ""),
                };
                let field = DraftField::parse(raw_field).ok_or_else(|| invalid("set", raw_field))?;
                Self::Set {
                    field,
                    value: value.to_string(),
                }
            }
            "submit" => Self::Submit,
            "discard" => Self::Discard,
            "delete" | "rm" => {
                let value = required(rest, "delete", "a product id")?;
                Self::Delete(value.parse().map_err(|_| invalid("delete", value))?)
            }
            "confirm" | "yes" => Self::Confirm,
            "cancel" | "no" => Self::Cancel,
            "open" | "go" => {
                let value = required(rest, "open", "a product id")?;
                Self::Go(Route::parse(value).map_err(|_| invalid("open", value))?)
            }
            "back" => Self::Back,
            "edit" => Self::Edit,
            "save" => Self::Save,
            "comment" => Self::Comment(rest.to_string()),
            "uncomment" => {
                let value = required(rest, "uncomment", "a comment id")?;
                Self::Uncomment(CommentId(
                    value.parse().map_err(|_| invalid("uncomment", value))?,
                ))
            }
            _ => return Err(CommandError::Unknown(word.to_string())),
        };
        Ok(Some(command))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Quit => "quit",
            Self::List => "list",
            Self::Sort(_) => "sort",
            Self::Add => "add",
            Self::Set { .. } => "set",
            Self::Submit => "submit",
            Self::Discard => "discard",
            Self::Delete(_) => "delete",
            Self::Confirm => "confirm",
            Self::Cancel => "cancel",
            Self::Go(_) => "open",
            Self::Back => "back",
            Self::Edit => "edit",
            Self::Save => "save",
            Self::Comment(_) => "comment",
            Self::Uncomment(_) => "uncomment",
        }
    }
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument { command, argument });
    }
    Ok(rest)
}

fn invalid(command: &'static str, value: &str) -> CommandError {
    CommandError::InvalidArgument {
        command,
        value: value.to_string(),
    }
}
