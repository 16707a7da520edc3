use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    account::AccountId,
    job::JobId,
    macros::{id, nutype_string},
};

id!(ApplicationRequestId);

/// Lifecycle state of an application request.
///
/// `Pending` is the only state with outgoing transitions; `Accepted` and
/// `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl FromStr for ApplicationStatus {
    type Err = InvalidApplicationStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(InvalidApplicationStatus(s.into())),
        }
    }
}

/// The answer an employer gives to a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationDecision {
    Accepted,
    Rejected,
}

impl From<ApplicationDecision> for ApplicationStatus {
    fn from(value: ApplicationDecision) -> Self {
        match value {
            ApplicationDecision::Accepted => Self::Accepted,
            ApplicationDecision::Rejected => Self::Rejected,
        }
    }
}

impl TryFrom<ApplicationStatus> for ApplicationDecision {
    type Error = InvalidApplicationStatus;

    fn try_from(value: ApplicationStatus) -> Result<Self, Self::Error> {
        match value {
            ApplicationStatus::Accepted => Ok(Self::Accepted),
            ApplicationStatus::Rejected => Ok(Self::Rejected),
            ApplicationStatus::Pending => Err(InvalidApplicationStatus(value.as_str().into())),
        }
    }
}

impl FromStr for ApplicationDecision {
    type Err = InvalidApplicationStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accept" => Ok(Self::Accepted),
            "reject" => Ok(Self::Rejected),
            _ => s.parse::<ApplicationStatus>()?.try_into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidApplicationStatus(pub String);

impl std::fmt::Display for InvalidApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid application status {:?}", self.0)
    }
}

impl std::error::Error for InvalidApplicationStatus {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRequest {
    pub id: ApplicationRequestId,
    pub seeker_id: AccountId,
    pub job_id: JobId,
    pub status: ApplicationStatus,
    pub cover_letter: Option<CoverLetter>,
    pub submitted_at: DateTime<Utc>,
    pub response: Option<ResponseText>,
    pub responded_at: Option<DateTime<Utc>>,
}

/// The fields written when a pending request is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationResolution {
    pub status: ApplicationStatus,
    pub response: ResponseText,
    pub responded_at: DateTime<Utc>,
}

nutype_string!(CoverLetter(validate(len_char_max = 4096)));
nutype_string!(ResponseText(validate(len_char_max = 4096)));

/// A job bookmarked by a seeker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedJob {
    pub seeker_id: AccountId,
    pub job_id: JobId,
    pub saved_at: DateTime<Utc>,
}
