use anyhow::Context;
use chrono::{DateTime, Utc};
use jobboard_core_matching_contracts::{
    MatchingFeatureService, MatchingGetPreferencesError, MatchingRankError,
    MatchingSetPreferencesError,
};
use jobboard_di::Build;
use jobboard_models::{
    account::{AccountId, AccountRole},
    job::{JobCategory, JobCategoryId, JobPredicate},
    ranking::{RankLimit, RankedJob},
};
use jobboard_persistence_contracts::{
    account::AccountRepository, catalog::CatalogRepository, preference::PreferenceRepository,
    Database, TransactionExt,
};
use jobboard_shared_contracts::time::TimeService;
use jobboard_utils::trace_instrument;

pub mod ranker;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Build)]
#[cfg_attr(test, derive(Default))]
pub struct MatchingFeatureServiceImpl<Db, Time, AccountRepo, CatalogRepo, PreferenceRepo> {
    db: Db,
    time: Time,
    account_repo: AccountRepo,
    catalog_repo: CatalogRepo,
    preference_repo: PreferenceRepo,
}

impl<Db, Time, AccountRepo, CatalogRepo, PreferenceRepo> MatchingFeatureService
    for MatchingFeatureServiceImpl<Db, Time, AccountRepo, CatalogRepo, PreferenceRepo>
where
    Db: Database,
    Time: TimeService,
    AccountRepo: AccountRepository<Db::Transaction>,
    CatalogRepo: CatalogRepository<Db::Transaction>,
    PreferenceRepo: PreferenceRepository<Db::Transaction>,
{
    #[trace_instrument(skip(self))]
    async fn rank(
        &self,
        seeker_id: AccountId,
        limit: usize,
    ) -> Result<Vec<RankedJob>, MatchingRankError> {
        let limit = RankLimit::new(limit).ok_or(MatchingRankError::InvalidLimit)?;

        let mut txn = self.db.begin_transaction().await?;

        if !self.is_seeker(&mut txn, seeker_id).await? {
            return Err(MatchingRankError::SeekerNotFound);
        }

        let preferences = self
            .preference_repo
            .list(&mut txn, seeker_id)
            .await
            .context("Failed to get preferences from database")?;

        let predicate = candidate_predicate(seeker_id, &preferences, self.time.now());
        // Unpaginated: priority is derived from the seeker's preferences, so all open,
        // not-yet-applied candidates are ordered in memory before `limit` applies.
        let candidates = self
            .catalog_repo
            .list_entries(&mut txn, &predicate, None)
            .await
            .context("Failed to get candidate postings from database")?;

        let ranked = ranker::rank(&preferences, candidates, limit);
        tracing::debug!(count = ranked.len(), "ranked postings");

        Ok(ranked)
    }

    #[trace_instrument(skip(self))]
    async fn get_preferences(
        &self,
        seeker_id: AccountId,
    ) -> Result<Vec<JobCategory>, MatchingGetPreferencesError> {
        let mut txn = self.db.begin_transaction().await?;

        if !self.is_seeker(&mut txn, seeker_id).await? {
            return Err(MatchingGetPreferencesError::SeekerNotFound);
        }

        self.preference_repo
            .list(&mut txn, seeker_id)
            .await
            .context("Failed to get preferences from database")
            .map_err(Into::into)
    }

    #[trace_instrument(skip(self))]
    async fn set_preferences(
        &self,
        seeker_id: AccountId,
        mut category_ids: Vec<JobCategoryId>,
    ) -> Result<Vec<JobCategory>, MatchingSetPreferencesError> {
        category_ids.sort_unstable();
        category_ids.dedup();

        let mut txn = self.db.begin_transaction().await?;

        let result = async {
            if !self.is_seeker(&mut txn, seeker_id).await? {
                return Err(MatchingSetPreferencesError::SeekerNotFound);
            }

            let mut categories = Vec::new();
            if !category_ids.is_empty() {
                categories = self
                    .catalog_repo
                    .get_categories(&mut txn, category_ids.clone())
                    .await
                    .context("Failed to get job categories from database")?;
                if categories.len() != category_ids.len() {
                    return Err(MatchingSetPreferencesError::CategoryNotFound);
                }
            }

            self.preference_repo
                .replace(&mut txn, seeker_id, category_ids)
                .await
                .context("Failed to replace preferences in database")?;

            categories.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
            Ok::<_, MatchingSetPreferencesError>(categories)
        }
        .await;

        txn.finish(result).await
    }
}

impl<Db, Time, AccountRepo, CatalogRepo, PreferenceRepo>
    MatchingFeatureServiceImpl<Db, Time, AccountRepo, CatalogRepo, PreferenceRepo>
where
    Db: Database,
    AccountRepo: AccountRepository<Db::Transaction>,
{
    async fn is_seeker(
        &self,
        txn: &mut Db::Transaction,
        account_id: AccountId,
    ) -> anyhow::Result<bool> {
        let account = self
            .account_repo
            .get(txn, account_id)
            .await
            .context("Failed to get account from database")?;
        Ok(account.is_some_and(|account| account.role == AccountRole::Seeker))
    }
}

/// Narrows the catalog down to the postings worth ranking for a seeker.
///
/// The ranker applies the same category and field exclusion again, this
/// only keeps the candidate set small.
fn candidate_predicate(
    seeker_id: AccountId,
    preferences: &[JobCategory],
    now: DateTime<Utc>,
) -> JobPredicate {
    let base = JobPredicate::OpenAt(now).and(JobPredicate::NotAppliedBy(seeker_id));
    if preferences.is_empty() {
        return base;
    }

    let category_ids = preferences.iter().map(|c| c.id).collect();
    let mut field_ids = preferences.iter().map(|c| c.field_id).collect::<Vec<_>>();
    field_ids.sort_unstable();
    field_ids.dedup();

    base.and(JobPredicate::HasAnyCategory(category_ids).or(JobPredicate::InAnyField(field_ids)))
}
