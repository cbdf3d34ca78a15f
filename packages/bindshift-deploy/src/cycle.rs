use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DeployError, Result};
use crate::snapshot::SnapshotTracker;

/// Deploy cycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CycleState {
    Idle,
    Open { opened_at: DateTime<Utc> },
    Closed {
        opened_at: DateTime<Utc>,
        closed_at: DateTime<Utc>,
    },
}

impl CycleState {
    pub fn state_name(&self) -> &'static str {
        match self {
            CycleState::Idle => "idle",
            CycleState::Open { .. } => "open",
            CycleState::Closed { .. } => "closed",
        }
    }
}

impl std::fmt::Display for CycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.state_name())
    }
}

/// One pre-deploy/post-deploy pair and the snapshots taken between them.
///
/// Moves Idle → Open → Closed exactly once. A closed cycle is discarded,
/// never reopened.
#[derive(Debug)]
pub struct DeployCycle {
    pub id: Uuid,
    state: CycleState,
    pub snapshots: SnapshotTracker,
}

impl DeployCycle {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            state: CycleState::Idle,
            snapshots: SnapshotTracker::new(),
        }
    }

    pub fn state(&self) -> CycleState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, CycleState::Open { .. })
    }

    /// Transition: IDLE → OPEN
    pub fn open(&mut self) -> Result<()> {
        match self.state {
            CycleState::Idle => {
                self.state = CycleState::Open {
                    opened_at: Utc::now(),
                };
                Ok(())
            }
            _ => Err(DeployError::InvalidStateTransition {
                from: self.state.state_name().to_string(),
                to: "open".to_string(),
            }),
        }
    }

    /// Transition: OPEN → CLOSED
    pub fn close(&mut self) -> Result<()> {
        match self.state {
            CycleState::Open { opened_at } => {
                self.state = CycleState::Closed {
                    opened_at,
                    closed_at: Utc::now(),
                };
                Ok(())
            }
            _ => Err(DeployError::InvalidStateTransition {
                from: self.state.state_name().to_string(),
                to: "closed".to_string(),
            }),
        }
    }
}

impl Default for DeployCycle {
    fn default() -> Self {
        Self::new()
    }
}
