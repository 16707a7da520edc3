use chrono::{DateTime, Utc};

use crate::{
    account::AccountId,
    company::CompanyId,
    macros::{id, nutype_string},
};

id!(IndividualNotificationId);
id!(BroadcastNotificationId);

nutype_string!(NotificationText(validate(len_char_min = 1, len_char_max = 1024)));

impl NotificationText {
    const MAX_LEN: usize = 1024;

    /// Builds a notification text from generated content, cutting it to the
    /// maximum length.
    pub fn from_string_truncated(s: impl Into<String>) -> Self {
        let mut s: String = s.into();
        if s.chars().count() > Self::MAX_LEN {
            s = s.chars().take(Self::MAX_LEN).collect();
        }
        if s.is_empty() {
            s.push('-');
        }
        match Self::try_new(s) {
            Ok(text) => text,
            Err(_) => unreachable!("length was checked above"),
        }
    }
}

/// A message addressed to exactly one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndividualNotification {
    pub id: IndividualNotificationId,
    pub recipient_id: AccountId,
    pub sender_id: AccountId,
    pub text: NotificationText,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

/// A message visible to every current employee of a company.
///
/// Read state is tracked per employee in read markers, never on the
/// notification itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastNotification {
    pub id: BroadcastNotificationId,
    pub company_id: CompanyId,
    pub sender_id: AccountId,
    pub text: NotificationText,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeNotification {
    pub notification: BroadcastNotification,
    pub is_read: bool,
}
