use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Speaker {
    User,
    Assistant,
    AppInfo,
    AppWarning,
    AppError,
}

impl Speaker {
    pub fn as_str(self) -> &'static str {
        match self {
            Speaker::User => "user",
            Speaker::Assistant => "assistant",
            Speaker::AppInfo => "app/info",
            Speaker::AppWarning => "app/warning",
            Speaker::AppError => "app/error",
        }
    }

    pub fn is_user(self) -> bool {
        self == Speaker::User
    }

    pub fn is_assistant(self) -> bool {
        self == Speaker::Assistant
    }

    pub fn is_app(self) -> bool {
        matches!(
            self,
            Speaker::AppInfo | Speaker::AppWarning | Speaker::AppError
        )
    }
}

impl AsRef<str> for Speaker {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<&str> for Speaker {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, String> {
        match value {
            "user" => Ok(Speaker::User),
            "assistant" => Ok(Speaker::Assistant),
            "app/info" => Ok(Speaker::AppInfo),
            "app/warning" => Ok(Speaker::AppWarning),
            "app/error" => Ok(Speaker::AppError),
            _ => Err(format!("invalid transcript speaker: {value}")),
        }
    }
}

impl TryFrom<String> for Speaker {
    type Error = String;

    fn try_from(value: String) -> Result<Self, String> {
        Self::try_from(value.as_str())
    }
}

impl From<Speaker> for String {
    fn from(value: Speaker) -> Self {
        value.as_str().to_string()
    }
}

/// Severity for app-authored transcript notices. Notices are rendered in the
/// chat panel but never routed through the response selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMessageKind {
    Info,
    Warning,
    Error,
}

impl AppMessageKind {
    pub fn as_speaker(self) -> Speaker {
        match self {
            AppMessageKind::Info => Speaker::AppInfo,
            AppMessageKind::Warning => Speaker::AppWarning,
            AppMessageKind::Error => Speaker::AppError,
        }
    }
}

/// A single transcript entry. Messages are immutable once appended; the
/// transcript itself is append-only and lives for one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub speaker: Speaker,
    pub content: String,
    pub created_at: DateTime<Local>,
}

impl Message {
    pub fn new(speaker: Speaker, content: impl Into<String>) -> Self {
        Self {
            speaker,
            content: content.into(),
            created_at: Local::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Speaker::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Speaker::Assistant, content)
    }

    pub fn app(kind: AppMessageKind, content: impl Into<String>) -> Self {
        Self::new(kind.as_speaker(), content)
    }

    pub fn is_user(&self) -> bool {
        self.speaker.is_user()
    }

    pub fn is_assistant(&self) -> bool {
        self.speaker.is_assistant()
    }

    pub fn is_app(&self) -> bool {
        self.speaker.is_app()
    }
}
