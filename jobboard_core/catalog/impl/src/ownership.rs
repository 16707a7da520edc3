use anyhow::Context;
use jobboard_core_catalog_contracts::ownership::{JobOwnershipError, JobOwnershipService};
use jobboard_di::Build;
use jobboard_models::{
    account::AccountId,
    job::{CatalogEntry, JobId},
};
use jobboard_persistence_contracts::{account::AccountRepository, catalog::CatalogRepository};
use jobboard_utils::trace_instrument;

#[derive(Debug, Clone, Default, Build)]
pub struct JobOwnershipServiceImpl<AccountRepo, CatalogRepo> {
    account_repo: AccountRepo,
    catalog_repo: CatalogRepo,
}

impl<Txn, AccountRepo, CatalogRepo> JobOwnershipService<Txn>
    for JobOwnershipServiceImpl<AccountRepo, CatalogRepo>
where
    Txn: Send + Sync + 'static,
    AccountRepo: AccountRepository<Txn>,
    CatalogRepo: CatalogRepository<Txn>,
{
    #[trace_instrument(skip(self, txn))]
    async fn authorize(
        &self,
        txn: &mut Txn,
        employer_id: AccountId,
        job_id: JobId,
    ) -> Result<CatalogEntry, JobOwnershipError> {
        let employee = self
            .account_repo
            .get_employee(txn, employer_id)
            .await
            .context("Failed to get employee from database")?
            .ok_or(JobOwnershipError::NotAnEmployee)?;

        let entry = self
            .catalog_repo
            .get_entry(txn, job_id)
            .await
            .context("Failed to get job posting from database")?
            .ok_or(JobOwnershipError::JobNotFound)?;

        if entry.job.company_id != employee.company_id {
            return Err(JobOwnershipError::NotJobOwner);
        }

        Ok(entry)
    }
}
