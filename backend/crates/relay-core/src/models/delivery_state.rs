use serde::Serialize;

/// Lifecycle of the subscriber's delivery task.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryState {
    #[default]
    NotStarted,
    Subscribing,
    Running,
    Stopped,
}

impl DeliveryState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::NotStarted => "not_started",
            Self::Subscribing => "subscribing",
            Self::Running => "running",
            Self::Stopped => "stopped",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}
