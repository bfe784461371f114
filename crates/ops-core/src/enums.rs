//! Status, priority, role, and tracked-field enums for opsdesk.
//!
//! Enums serialize to the exact strings persisted in the store. `TaskStatus`
//! provides `allowed_next_states()` to enforce valid transitions at the
//! application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a task.
///
/// ```text
/// pending ⇄ in progress ⇄ review ⇄ done → archieve
/// (the first four are mutually reachable; archieve only from done)
/// ```
///
/// `archieve` is the spelling persisted by existing data and is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "in progress")]
    InProgress,
    Review,
    Done,
    #[serde(alias = "archived")]
    Archieve,
}

impl TaskStatus {
    /// Statuses an editor may move between freely.
    pub const WORKING: [Self; 4] = [Self::Pending, Self::InProgress, Self::Review, Self::Done];

    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::InProgress, Self::Review, Self::Done],
            Self::InProgress => &[Self::Pending, Self::Review, Self::Done],
            Self::Review => &[Self::Pending, Self::InProgress, Self::Done],
            Self::Done => &[Self::Pending, Self::InProgress, Self::Review, Self::Archieve],
            Self::Archieve => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in progress",
            Self::Review => "review",
            Self::Done => "done",
            Self::Archieve => "archieve",
        }
    }

    /// Parse an already-normalized status string.
    #[must_use]
    pub fn from_normalized(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "in progress" => Some(Self::InProgress),
            "review" => Some(Self::Review),
            "done" => Some(Self::Done),
            "archieve" => Some(Self::Archieve),
            _ => None,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Task urgency, persisted in the `urgent_level` column.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse a raw value case-insensitively. Unknown values, including
    /// padded ones, yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Sort rank, most urgent first.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Employee role.
///
/// `Boss` is unrestricted, `Manager` is scoped to its own department, and
/// every other persisted role collapses to `Staff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Boss,
    Manager,
    Staff,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boss => "boss",
            Self::Manager => "manager",
            Self::Staff => "staff",
        }
    }

    /// Map any raw role string onto a role; unrecognized roles are `Staff`.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "boss" => Self::Boss,
            "manager" => Self::Manager,
            _ => Self::Staff,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TrackedField
// ---------------------------------------------------------------------------

/// A task attribute that is diffed and audited on save.
///
/// Variant order is the order in which changes are emitted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TrackedField {
    Status,
    TaskContent,
    UrgentLevel,
    AssigneeId,
    Deadline,
    TaskTitle,
}

impl TrackedField {
    /// All tracked fields in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Status,
        Self::TaskContent,
        Self::UrgentLevel,
        Self::AssigneeId,
        Self::Deadline,
        Self::TaskTitle,
    ];

    /// Column name, also used as the `field` value of audit rows.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::TaskContent => "task_content",
            Self::UrgentLevel => "urgent_level",
            Self::AssigneeId => "assignee_id",
            Self::Deadline => "deadline",
            Self::TaskTitle => "task_title",
        }
    }
}

impl fmt::Display for TrackedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ArchiveScope
// ---------------------------------------------------------------------------

/// Which archived tasks an actor is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ArchiveScope {
    Mine,
    Department,
    All,
}

impl ArchiveScope {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mine => "mine",
            Self::Department => "department",
            Self::All => "all",
        }
    }

    /// Default scope for a role: a boss sees everything, others their own tasks.
    #[must_use]
    pub const fn default_for(role: Role) -> Self {
        match role {
            Role::Boss => Self::All,
            Role::Manager | Role::Staff => Self::Mine,
        }
    }
}

impl fmt::Display for ArchiveScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
