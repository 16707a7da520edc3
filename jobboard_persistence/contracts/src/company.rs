use std::future::Future;

use jobboard_models::company::{Company, CompanyId};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait CompanyRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Return the company with the given id.
    fn get(
        &self,
        txn: &mut Txn,
        company_id: CompanyId,
    ) -> impl Future<Output = anyhow::Result<Option<Company>>> + Send;

    /// Create a new company.
    fn create(
        &self,
        txn: &mut Txn,
        company: &Company,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockCompanyRepository<Txn> {
    pub fn with_get(mut self, company_id: CompanyId, result: Option<Company>) -> Self {
        self.expect_get()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(company_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
