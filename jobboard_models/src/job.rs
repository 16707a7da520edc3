use chrono::{DateTime, Utc};
use jobboard_utils::patch::Patch;
use nutype::nutype;

use crate::{
    account::AccountId,
    company::CompanyId,
    macros::{id, nutype_string},
    SearchTerm,
};

id!(JobId);
id!(JobCategoryId);
id!(CategoryFieldId);

#[derive(Debug, Clone, PartialEq, Eq, Patch)]
pub struct JobPosting {
    #[no_patch]
    pub id: JobId,
    #[no_patch]
    pub company_id: CompanyId,
    pub title: JobTitle,
    pub description: JobDescription,
    pub salary: Option<i64>,
    pub quantity: JobQuantity,
    pub active: bool,
    pub closing_at: Option<DateTime<Utc>>,
    #[no_patch]
    pub posted_at: DateTime<Utc>,
}

impl JobPosting {
    /// A posting accepts applications while it is active and its closing
    /// time (if any) lies in the future.
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        self.active && self.closing_at.map_or(true, |closing_at| closing_at > now)
    }
}

nutype_string!(JobTitle(validate(len_char_min = 1, len_char_max = 128)));
nutype_string!(JobDescription(validate(len_char_max = 4096)));

#[nutype(
    validate(greater = 0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Deref,
        TryFrom,
        Display,
        Serialize,
        Deserialize
    )
)]
pub struct JobQuantity(i32);

/// A coarse grouping of categories, e.g. "Engineering".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryField {
    pub id: CategoryFieldId,
    pub name: CategoryName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCategory {
    pub id: JobCategoryId,
    pub field_id: CategoryFieldId,
    pub name: CategoryName,
}

nutype_string!(CategoryName(validate(len_char_min = 1, len_char_max = 64)));

/// A posting together with everything the catalog exposes about it.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub job: JobPosting,
    pub categories: Vec<JobCategory>,
    pub company_rating: Option<f64>,
}

/// Composable filter over job postings.
///
/// Predicates are combined with [`JobPredicate::and`] and
/// [`JobPredicate::or`]; the persistence layer compiles the resulting tree
/// into a single query.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JobPredicate {
    /// Matches every posting.
    #[default]
    Any,
    And(Vec<JobPredicate>),
    Or(Vec<JobPredicate>),
    Id(JobId),
    Active(bool),
    /// Active and not past its closing time at the given instant.
    OpenAt(DateTime<Utc>),
    /// No application request of the given seeker exists for the posting.
    NotAppliedBy(AccountId),
    Company(CompanyId),
    HasAnyCategory(Vec<JobCategoryId>),
    InAnyField(Vec<CategoryFieldId>),
    TitleContains(SearchTerm),
}

impl JobPredicate {
    pub fn and(self, other: JobPredicate) -> Self {
        match (self, other) {
            (Self::Any, x) | (x, Self::Any) => x,
            (Self::And(mut xs), Self::And(ys)) => {
                xs.extend(ys);
                Self::And(xs)
            }
            (Self::And(mut xs), y) => {
                xs.push(y);
                Self::And(xs)
            }
            (x, Self::And(mut ys)) => {
                ys.insert(0, x);
                Self::And(ys)
            }
            (x, y) => Self::And(vec![x, y]),
        }
    }

    pub fn or(self, other: JobPredicate) -> Self {
        match (self, other) {
            (Self::Any, _) | (_, Self::Any) => Self::Any,
            (Self::Or(mut xs), Self::Or(ys)) => {
                xs.extend(ys);
                Self::Or(xs)
            }
            (Self::Or(mut xs), y) => {
                xs.push(y);
                Self::Or(xs)
            }
            (x, Self::Or(mut ys)) => {
                ys.insert(0, x);
                Self::Or(ys)
            }
            (x, y) => Self::Or(vec![x, y]),
        }
    }

    /// Combines all predicates with `and`; an empty iterator yields [`Self::Any`].
    pub fn all(predicates: impl IntoIterator<Item = JobPredicate>) -> Self {
        predicates.into_iter().fold(Self::Any, Self::and)
    }
}
