use std::future::Future;

use jobboard_models::{
    account::AccountId,
    company::CompanyId,
    notification::{
        BroadcastNotification, BroadcastNotificationId, EmployeeNotification,
        IndividualNotification, IndividualNotificationId,
    },
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NotificationRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Create a new individual notification.
    fn create_individual(
        &self,
        txn: &mut Txn,
        notification: &IndividualNotification,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Return the individual notification with the given id.
    fn get_individual(
        &self,
        txn: &mut Txn,
        notification_id: IndividualNotificationId,
    ) -> impl Future<Output = anyhow::Result<Option<IndividualNotification>>> + Send;

    /// Return all individual notifications of a recipient, newest first.
    fn list_individual(
        &self,
        txn: &mut Txn,
        recipient_id: AccountId,
    ) -> impl Future<Output = anyhow::Result<Vec<IndividualNotification>>> + Send;

    /// Set the read flag of an individual notification.
    fn mark_individual_read(
        &self,
        txn: &mut Txn,
        notification_id: IndividualNotificationId,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// Create a new broadcast notification.
    fn create_broadcast(
        &self,
        txn: &mut Txn,
        notification: &BroadcastNotification,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Return the broadcast notification with the given id.
    fn get_broadcast(
        &self,
        txn: &mut Txn,
        notification_id: BroadcastNotificationId,
    ) -> impl Future<Output = anyhow::Result<Option<BroadcastNotification>>> + Send;

    /// Return all broadcasts of a company, newest first, together with the
    /// read state of the given employee. Broadcasts without a read marker
    /// are unread.
    fn list_for_employee(
        &self,
        txn: &mut Txn,
        employee_id: AccountId,
        company_id: CompanyId,
    ) -> impl Future<Output = anyhow::Result<Vec<EmployeeNotification>>> + Send;

    /// Mark a broadcast as read for an employee. Repeating the call has no
    /// effect.
    fn mark_read(
        &self,
        txn: &mut Txn,
        employee_id: AccountId,
        notification_id: BroadcastNotificationId,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Mark every broadcast of a company as read for an employee.
    fn mark_all_read(
        &self,
        txn: &mut Txn,
        employee_id: AccountId,
        company_id: CompanyId,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Return the number of broadcasts of a company the employee has not read.
    fn count_unread(
        &self,
        txn: &mut Txn,
        employee_id: AccountId,
        company_id: CompanyId,
    ) -> impl Future<Output = anyhow::Result<u64>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockNotificationRepository<Txn> {
    pub fn with_create_individual(mut self, notification: IndividualNotification) -> Self {
        self.expect_create_individual()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(notification),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_get_individual(
        mut self,
        notification_id: IndividualNotificationId,
        result: Option<IndividualNotification>,
    ) -> Self {
        self.expect_get_individual()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(notification_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list_individual(
        mut self,
        recipient_id: AccountId,
        result: Vec<IndividualNotification>,
    ) -> Self {
        self.expect_list_individual()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(recipient_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_mark_individual_read(
        mut self,
        notification_id: IndividualNotificationId,
        result: bool,
    ) -> Self {
        self.expect_mark_individual_read()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(notification_id),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_create_broadcast(mut self, notification: BroadcastNotification) -> Self {
        self.expect_create_broadcast()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(notification),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_get_broadcast(
        mut self,
        notification_id: BroadcastNotificationId,
        result: Option<BroadcastNotification>,
    ) -> Self {
        self.expect_get_broadcast()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(notification_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list_for_employee(
        mut self,
        employee_id: AccountId,
        company_id: CompanyId,
        result: Vec<EmployeeNotification>,
    ) -> Self {
        self.expect_list_for_employee()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(employee_id),
                mockall::predicate::eq(company_id),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_mark_read(
        mut self,
        employee_id: AccountId,
        notification_id: BroadcastNotificationId,
    ) -> Self {
        self.expect_mark_read()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(employee_id),
                mockall::predicate::eq(notification_id),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_mark_all_read(mut self, employee_id: AccountId, company_id: CompanyId) -> Self {
        self.expect_mark_all_read()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(employee_id),
                mockall::predicate::eq(company_id),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_count_unread(
        mut self,
        employee_id: AccountId,
        company_id: CompanyId,
        result: u64,
    ) -> Self {
        self.expect_count_unread()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(employee_id),
                mockall::predicate::eq(company_id),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
