use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::job::CatalogEntry;

/// How closely a posting matches a seeker's preferences.
///
/// Variants are ordered so that a better match compares greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPriority {
    /// The seeker has no preferences, every posting is equally relevant.
    Unranked,
    /// One of the posting's categories shares a field with a preferred category.
    Field,
    /// One of the posting's categories is a preferred category.
    Exact,
}

impl MatchPriority {
    pub fn score(self) -> u8 {
        match self {
            Self::Exact => 100,
            Self::Field => 50,
            Self::Unranked => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedJob {
    pub entry: CatalogEntry,
    pub priority: MatchPriority,
}

impl RankedJob {
    pub fn score(&self) -> u8 {
        self.priority.score()
    }
}

/// Maximum number of ranked postings to return. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RankLimit(NonZeroUsize);

impl RankLimit {
    pub fn new(limit: usize) -> Option<Self> {
        NonZeroUsize::new(limit).map(Self)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}
