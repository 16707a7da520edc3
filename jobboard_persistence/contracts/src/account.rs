use std::future::Future;

use jobboard_models::{
    account::{Account, AccountId, Employee},
    company::CompanyId,
};

/// Accounts and company memberships, maintained by the identity provider and
/// read by the core.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait AccountRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Return the account with the given id.
    fn get(
        &self,
        txn: &mut Txn,
        account_id: AccountId,
    ) -> impl Future<Output = anyhow::Result<Option<Account>>> + Send;

    /// Create a new account.
    fn create(
        &self,
        txn: &mut Txn,
        account: &Account,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Return the company membership of the given account.
    fn get_employee(
        &self,
        txn: &mut Txn,
        account_id: AccountId,
    ) -> impl Future<Output = anyhow::Result<Option<Employee>>> + Send;

    /// Add an account to a company, replacing any previous membership.
    fn save_employee(
        &self,
        txn: &mut Txn,
        employee: &Employee,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Remove an account from its company.
    fn delete_employee(
        &self,
        txn: &mut Txn,
        account_id: AccountId,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// Return all current employees of a company.
    fn list_employees(
        &self,
        txn: &mut Txn,
        company_id: CompanyId,
    ) -> impl Future<Output = anyhow::Result<Vec<Employee>>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockAccountRepository<Txn> {
    pub fn with_get(mut self, account_id: AccountId, result: Option<Account>) -> Self {
        self.expect_get()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(account_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get_employee(mut self, account_id: AccountId, result: Option<Employee>) -> Self {
        self.expect_get_employee()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(account_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
