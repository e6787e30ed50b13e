use std::{fmt::Display, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriggerKindError {
    #[error("Unknown trigger kind: '{}', expected 'scheduled' or 'on-demand'", kind)]
    UnknownTriggerKind { kind: String },
}

/// What started a synchronization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerKind {
    /// Recurring timer; subject to jitter.
    Scheduled,
    /// Manual or event-driven invocation; runs immediately.
    #[default]
    OnDemand,
}

impl TriggerKind {
    pub fn to_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::OnDemand => "on-demand",
        }
    }

    /// Derive the trigger kind from a CI event name (`GITHUB_EVENT_NAME`).
    pub fn from_event_name(event_name: &str) -> Self {
        if event_name == "schedule" {
            Self::Scheduled
        } else {
            Self::OnDemand
        }
    }
}

impl Display for TriggerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for TriggerKind {
    type Err = TriggerKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.trim().to_lowercase()[..] {
            "scheduled" | "schedule" => Ok(Self::Scheduled),
            "on-demand" | "ondemand" | "manual" | "workflow_dispatch" => Ok(Self::OnDemand),
            _ => Err(TriggerKindError::UnknownTriggerKind { kind: s.into() }),
        }
    }
}
