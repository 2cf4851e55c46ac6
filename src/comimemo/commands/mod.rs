use crate::config::ComimemoConfig;
use crate::index::DisplayCircle;
use crate::model::CircleRecord;

pub mod add;
pub mod choices;
pub mod config;
pub mod delete;
pub mod list;
pub mod sort;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One picker and its options, as offered by the add form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceGroup {
    pub name: &'static str,
    pub options: Vec<String>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_circles: Vec<CircleRecord>,
    pub listed_circles: Vec<DisplayCircle>,
    pub choices: Vec<ChoiceGroup>,
    pub config: Option<ComimemoConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_circles(mut self, circles: Vec<CircleRecord>) -> Self {
        self.affected_circles = circles;
        self
    }

    pub fn with_listed_circles(mut self, circles: Vec<DisplayCircle>) -> Self {
        self.listed_circles = circles;
        self
    }

    pub fn with_choices(mut self, choices: Vec<ChoiceGroup>) -> Self {
        self.choices = choices;
        self
    }

    pub fn with_config(mut self, config: ComimemoConfig) -> Self {
        self.config = Some(config);
        self
    }
}
