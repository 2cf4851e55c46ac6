//! # API Facade
//!
//! [`CircleApi`] is the single entry point for every comimemo operation, whatever the UI.
//! It owns the [`CircleRegistry`] for the lifetime of a session.
//!
//! The facade:
//! - **Dispatches** to the command functions in `commands/`
//! - **Normalizes inputs**: user-facing positions ("2", "1-3") become zero-based position
//!   sets, form drafts become `NewCircle`s according to the registry's add policy
//! - **Returns structured types** (`Result<CmdResult>`), never strings for the terminal
//!
//! Business logic stays in the commands and the registry. Tests here check dispatch and
//! input translation.

use crate::commands;
use crate::error::Result;
use crate::form::CircleDraft;
use crate::index::parse_selection;
use crate::model::NewCircle;
use crate::registry::{AddPolicy, CircleRegistry};
use std::path::{Path, PathBuf};

pub struct CircleApi {
    registry: CircleRegistry,
    config_dir: PathBuf,
}

impl CircleApi {
    pub fn new(registry: CircleRegistry, config_dir: PathBuf) -> Self {
        Self {
            registry,
            config_dir,
        }
    }

    pub fn list_circles(&self) -> commands::CmdResult {
        commands::list::run(&self.registry)
    }

    /// Adds a circle from the add form. Strict registries require the draft to pass
    /// the form checks; trusting ones take it as-is.
    pub fn add_circle(&mut self, draft: &CircleDraft) -> Result<commands::CmdResult> {
        let new = match self.registry.policy() {
            AddPolicy::Strict => draft.submit()?,
            AddPolicy::Trusting => draft.to_new_circle_unchecked(),
        };
        self.add_new_circle(new)
    }

    pub fn add_new_circle(&mut self, new: NewCircle) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.registry, new)
    }

    pub fn delete_circles<I: AsRef<str>>(
        &mut self,
        positions: &[I],
    ) -> Result<commands::CmdResult> {
        let positions = parse_selection(positions, self.registry.len())?;
        commands::delete::run(&mut self.registry, &positions)
    }

    pub fn sort_circles(&mut self) -> commands::CmdResult {
        commands::sort::run(&mut self.registry)
    }

    pub fn choices(&self) -> commands::CmdResult {
        commands::choices::run()
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn registry(&self) -> &CircleRegistry {
        &self.registry
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use commands::config::ConfigAction;
pub use commands::{ChoiceGroup, CmdMessage, CmdResult, MessageLevel};
