//! Shell commands and the read-eval-render loop

use super::view::render;
use crate::notes::{NoteCoordinator, NoteId};
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

pub const HELP: &str = "\
commands:
  list             refresh the notes from the server
  title <text>     set the draft title
  desc <text>      set the draft description
  save             create the draft, or save changes to the note being edited
  edit <id>        load a note into the draft for editing
  cancel           leave edit mode and clear the draft
  delete <id>      delete a note
  show             redraw the page
  help             show this help
  quit             exit";

/// A parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Title(String),
    Desc(String),
    Save,
    Edit(NoteId),
    Cancel,
    Delete(NoteId),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "" | "show" => Ok(Self::Show),
            "list" | "ls" | "refresh" => Ok(Self::List),
            "title" => Ok(Self::Title(rest.to_string())),
            "desc" | "description" => Ok(Self::Desc(rest.to_string())),
            "save" | "submit" => Ok(Self::Save),
            "edit" => parse_id(rest, "edit <id>").map(Self::Edit),
            "cancel" => Ok(Self::Cancel),
            "delete" | "rm" => parse_id(rest, "delete <id>").map(Self::Delete),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_id(arg: &str, usage: &'static str) -> Result<NoteId, CommandError> {
    arg.parse().map_err(|_| CommandError::Usage(usage))
}

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Render,
    Message(String),
    Quit,
}

/// Front-end bound to one coordinator
pub struct Shell {
    coordinator: Arc<NoteCoordinator>,
}

impl Shell {
    pub fn new(coordinator: Arc<NoteCoordinator>) -> Self {
        Self { coordinator }
    }

    pub fn coordinator(&self) -> &Arc<NoteCoordinator> {
        &self.coordinator
    }

    /// Apply one command to the coordinator
    pub async fn execute(&self, command: Command) -> Outcome {
        debug!(command = ?command, "Executing shell command");
        match command {
            Command::List => self.coordinator.refresh().await,
            Command::Title(text) => self.coordinator.set_title(text).await,
            Command::Desc(text) => self.coordinator.set_description(text).await,
            Command::Save => self.coordinator.submit().await,
            Command::Edit(id) => {
                let snapshot = self.coordinator.snapshot().await;
                match snapshot.find(&id) {
                    Some(note) => self.coordinator.start_edit(note).await,
                    None => return Outcome::Message(format!("No note with id {}", id)),
                }
            }
            Command::Cancel => self.coordinator.cancel_edit().await,
            Command::Delete(id) => self.coordinator.delete_note(&id).await,
            Command::Show => {}
            Command::Help => return Outcome::Message(HELP.to_string()),
            Command::Quit => return Outcome::Quit,
        }
        Outcome::Render
    }

    /// Current page as text
    pub async fn render(&self) -> String {
        let snapshot = self.coordinator.snapshot().await;
        render(&snapshot, &self.coordinator.feedback())
    }

    /// Read commands line by line until `quit` or end of input.
    pub async fn run<R, W>(&self, input: R, mut output: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        output.write_all(self.render().await.as_bytes()).await?;
        output.write_all(b"> ").await?;
        output.flush().await?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let text = match line.parse::<Command>() {
                Ok(command) => match self.execute(command).await {
                    Outcome::Render => self.render().await,
                    Outcome::Message(message) => format!("{}\n", message),
                    Outcome::Quit => break,
                },
                Err(e) => format!("{}\n", e),
            };
            output.write_all(text.as_bytes()).await?;
            output.write_all(b"> ").await?;
            output.flush().await?;
        }

        output.flush().await?;
        Ok(())
    }
}
