use std::{cmp::Ordering, collections::HashSet};

use jobboard_models::{
    job::{CatalogEntry, CategoryFieldId, JobCategory, JobCategoryId},
    ranking::{MatchPriority, RankLimit, RankedJob},
};

/// Orders candidate postings by how well they match `preferences`.
///
/// Postings that share neither a category nor a field with a non-empty
/// preference set are dropped. The result is ordered by priority, company
/// rating (missing counts as zero), posting time (newest first) and finally
/// id, then cut to `limit`.
pub fn rank(
    preferences: &[JobCategory],
    candidates: Vec<CatalogEntry>,
    limit: RankLimit,
) -> Vec<RankedJob> {
    let matcher = Matcher::new(preferences);

    let mut ranked = candidates
        .into_iter()
        .filter_map(|entry| {
            let priority = matcher.priority(&entry)?;
            Some(RankedJob { entry, priority })
        })
        .collect::<Vec<_>>();

    ranked.sort_by(compare);
    ranked.truncate(limit.get());
    ranked
}

struct Matcher {
    categories: HashSet<JobCategoryId>,
    fields: HashSet<CategoryFieldId>,
}

impl Matcher {
    fn new(preferences: &[JobCategory]) -> Self {
        Self {
            categories: preferences.iter().map(|c| c.id).collect(),
            fields: preferences.iter().map(|c| c.field_id).collect(),
        }
    }

    /// Returns `None` if the posting must not be offered at all.
    fn priority(&self, entry: &CatalogEntry) -> Option<MatchPriority> {
        if self.categories.is_empty() {
            return Some(MatchPriority::Unranked);
        }

        entry
            .categories
            .iter()
            .filter_map(|category| {
                if self.categories.contains(&category.id) {
                    Some(MatchPriority::Exact)
                } else if self.fields.contains(&category.field_id) {
                    Some(MatchPriority::Field)
                } else {
                    None
                }
            })
            .max()
    }
}

fn compare(a: &RankedJob, b: &RankedJob) -> Ordering {
    let rating = |job: &RankedJob| job.entry.company_rating.unwrap_or(0.0);

    b.priority
        .cmp(&a.priority)
        .then_with(|| rating(b).total_cmp(&rating(a)))
        .then_with(|| b.entry.job.posted_at.cmp(&a.entry.job.posted_at))
        .then_with(|| a.entry.job.id.cmp(&b.entry.job.id))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use jobboard_models::job::{JobId, JobPosting};
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    use super::*;

    fn field(n: u128) -> CategoryFieldId {
        Uuid::from_u128(0xf000 + n).into()
    }

    fn category(n: u128, field_id: CategoryFieldId) -> JobCategory {
        JobCategory {
            id: Uuid::from_u128(0xc000 + n).into(),
            field_id,
            name: format!("Category {n}").try_into().unwrap(),
        }
    }

    fn entry(n: u128, categories: &[&JobCategory], rating: Option<f64>, day: u32) -> CatalogEntry {
        CatalogEntry {
            job: JobPosting {
                id: job_id(n),
                company_id: Uuid::nil().into(),
                title: format!("Job {n}").try_into().unwrap(),
                description: "".try_into().unwrap(),
                salary: None,
                quantity: 1.try_into().unwrap(),
                active: true,
                closing_at: None,
                posted_at: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
            },
            categories: categories.iter().map(|&c| c.clone()).collect(),
            company_rating: rating,
        }
    }

    fn job_id(n: u128) -> JobId {
        Uuid::from_u128(n).into()
    }

    fn ids(ranked: &[RankedJob]) -> Vec<JobId> {
        ranked.iter().map(|r| r.entry.job.id).collect()
    }

    fn limit(n: usize) -> RankLimit {
        RankLimit::new(n).unwrap()
    }

    #[test]
    fn exact_before_field_and_unrelated_excluded() {
        let engineering = field(1);
        let design = field(2);
        let backend = category(1, engineering);
        let frontend = category(2, engineering);
        let ui = category(3, design);

        let job1 = entry(1, &[&backend], Some(5.0), 1);
        let job2 = entry(2, &[&frontend], Some(4.0), 2);
        let job3 = entry(3, &[&ui], Some(5.0), 3);

        let result = rank(&[backend], vec![job3, job2.clone(), job1.clone()], limit(10));

        assert_eq!(
            result,
            [
                RankedJob {
                    entry: job1,
                    priority: MatchPriority::Exact,
                },
                RankedJob {
                    entry: job2,
                    priority: MatchPriority::Field,
                },
            ]
        );
        assert_eq!(result[0].score(), 100);
        assert_eq!(result[1].score(), 50);
    }

    #[test]
    fn no_preferences_orders_by_rating() {
        let engineering = field(1);
        let backend = category(1, engineering);

        let candidates = vec![
            entry(1, &[&backend], Some(3.0), 1),
            entry(2, &[], Some(5.0), 2),
            entry(3, &[&backend], Some(4.0), 3),
        ];

        let result = rank(&[], candidates, limit(2));

        assert_eq!(ids(&result), [job_id(2), job_id(3)]);
        assert!(result
            .iter()
            .all(|r| r.priority == MatchPriority::Unranked && r.score() == 0));
    }

    #[test]
    fn no_preferences_keeps_every_candidate() {
        let candidates = (1..=4)
            .map(|n| entry(n, &[], None, n as u32))
            .collect::<Vec<_>>();

        let result = rank(&[], candidates, limit(10));

        assert_eq!(result.len(), 4);
    }

    #[test]
    fn highest_priority_of_all_categories_counts() {
        let engineering = field(1);
        let backend = category(1, engineering);
        let frontend = category(2, engineering);

        let both = entry(1, &[&frontend, &backend], Some(1.0), 1);
        let field_only = entry(2, &[&frontend], Some(5.0), 2);

        let result = rank(&[backend], vec![field_only, both], limit(10));

        assert_eq!(result[0].entry.job.id, job_id(1));
        assert_eq!(result[0].priority, MatchPriority::Exact);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn missing_rating_counts_as_zero() {
        let candidates = vec![
            entry(1, &[], None, 5),
            entry(2, &[], Some(0.5), 1),
            entry(3, &[], Some(0.0), 3),
        ];

        let result = rank(&[], candidates, limit(10));

        // 0.5 first, then the two zero ratings by recency.
        assert_eq!(ids(&result), [job_id(2), job_id(1), job_id(3)]);
    }

    #[test]
    fn ties_broken_by_recency_then_id() {
        let candidates = vec![
            entry(3, &[], Some(4.0), 1),
            entry(2, &[], Some(4.0), 2),
            entry(1, &[], Some(4.0), 1),
        ];

        let result = rank(&[], candidates, limit(10));

        assert_eq!(ids(&result), [job_id(2), job_id(1), job_id(3)]);
    }

    #[test]
    fn postings_without_categories_excluded_with_preferences() {
        let backend = category(1, field(1));

        let result = rank(&[backend], vec![entry(1, &[], Some(5.0), 1)], limit(10));

        assert!(result.is_empty());
    }
}
