use std::future::Future;

pub mod account;
pub mod application;
pub mod catalog;
pub mod company;
pub mod notification;
pub mod preference;
pub mod saved;

#[cfg_attr(feature = "mock", mockall::automock(type Transaction = MockTransaction;))]
pub trait Database: Send + Sync + 'static {
    type Transaction: Transaction;

    /// Starts a new transaction which can be used to interact with the
    /// database.
    ///
    /// Changes are persisted only after explicitly invoking
    /// [`Transaction::commit()`].
    fn begin_transaction(&self) -> impl Future<Output = anyhow::Result<Self::Transaction>> + Send;

    /// Verify the connection to the database.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait Transaction: Send + Sync + 'static {
    /// Persists any changes made to the database using this transaction.
    fn commit(self) -> impl Future<Output = anyhow::Result<()>> + Send;
    /// Explicitly discards any changes made to the database using this
    /// transaction.
    fn rollback(self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

pub trait TransactionExt: Transaction + Sized {
    /// Ends the transaction according to the outcome of the work done in it.
    ///
    /// `Ok` commits, `Err` rolls back. If the rollback itself fails, the
    /// failure is logged and the original error is returned.
    fn finish<T, E>(self, result: Result<T, E>) -> impl Future<Output = Result<T, E>> + Send
    where
        T: Send,
        E: From<anyhow::Error> + Send,
    {
        async move {
            match result {
                Ok(value) => {
                    self.commit().await?;
                    Ok(value)
                }
                Err(err) => {
                    if let Err(rollback_err) = self.rollback().await {
                        tracing::warn!("Failed to roll back transaction: {rollback_err:#}");
                    }
                    Err(err)
                }
            }
        }
    }
}

impl<Txn: Transaction> TransactionExt for Txn {}

#[cfg(feature = "mock")]
impl MockDatabase {
    /// Returns a database expecting exactly one transaction.
    ///
    /// The transaction must be committed iff `expect_commit` is set,
    /// otherwise it may be rolled back.
    pub fn build(expect_commit: bool) -> Self {
        let mut txn = MockTransaction::new();
        if expect_commit {
            txn.expect_commit()
                .once()
                .return_once(|| Box::pin(std::future::ready(Ok(()))));
        } else {
            txn.expect_rollback()
                .times(0..=1)
                .returning(|| Box::pin(std::future::ready(Ok(()))));
        }

        let mut db = Self::new();
        db.expect_begin_transaction()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(txn))));
        db
    }
}
