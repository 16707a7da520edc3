use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    company::CompanyId,
    macros::{id, nutype_string},
};

id!(AccountId);

/// The role an account was registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    Seeker,
    Employer,
}

impl AccountRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Seeker => "seeker",
            Self::Employer => "employer",
        }
    }
}

impl FromStr for AccountRole {
    type Err = UnknownAccountRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seeker" => Ok(Self::Seeker),
            "employer" => Ok(Self::Employer),
            _ => Err(UnknownAccountRole(s.into())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAccountRole(pub String);

impl std::fmt::Display for UnknownAccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown account role {:?}", self.0)
    }
}

impl std::error::Error for UnknownAccountRole {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub name: AccountName,
    pub role: AccountRole,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn is_seeker(&self) -> bool {
        self.role == AccountRole::Seeker
    }
}

/// Membership of an employer account in a company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub account_id: AccountId,
    pub company_id: CompanyId,
    pub joined_at: DateTime<Utc>,
}

nutype_string!(AccountName(validate(len_char_min = 1, len_char_max = 64)));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        for role in [AccountRole::Seeker, AccountRole::Employer] {
            assert_eq!(role.as_str().parse::<AccountRole>().unwrap(), role);
        }
        assert!("admin".parse::<AccountRole>().is_err());
    }
}
