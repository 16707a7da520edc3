use bb8_postgres::tokio_postgres::Row;
use jobboard_di::Build;
use jobboard_models::{
    account::AccountId,
    company::CompanyId,
    notification::{
        BroadcastNotification, BroadcastNotificationId, EmployeeNotification,
        IndividualNotification, IndividualNotificationId,
    },
};
use jobboard_persistence_contracts::notification::NotificationRepository;
use uuid::Uuid;

use crate::{arg_indices, columns, ColumnCounter, PostgresTransaction};

#[derive(Debug, Clone, Build)]
pub struct PostgresNotificationRepository;

columns!(individual as "i": "id", "recipient_id", "sender_id", "text", "created_at", "read");
columns!(broadcast as "b": "id", "company_id", "sender_id", "text", "created_at");

impl NotificationRepository<PostgresTransaction> for PostgresNotificationRepository {
    async fn create_individual(
        &self,
        txn: &mut PostgresTransaction,
        notification: &IndividualNotification,
    ) -> anyhow::Result<()> {
        txn.txn()?
            .execute(
                &format!(
                    "insert into individual_notifications ({INDIVIDUAL_COL_NAMES}) values ({})",
                    arg_indices(1..=INDIVIDUAL_CNT)
                ),
                &[
                    &*notification.id,
                    &*notification.recipient_id,
                    &*notification.sender_id,
                    &notification.text.as_str(),
                    &notification.created_at,
                    &notification.read,
                ],
            )
            .await?;
        Ok(())
    }

    async fn get_individual(
        &self,
        txn: &mut PostgresTransaction,
        notification_id: IndividualNotificationId,
    ) -> anyhow::Result<Option<IndividualNotification>> {
        txn.txn()?
            .query_opt(
                &format!(
                    "select {INDIVIDUAL_COLS} from individual_notifications i where i.id=$1"
                ),
                &[&*notification_id],
            )
            .await?
            .map(|row| decode_individual(&row, &mut Default::default()))
            .transpose()
    }

    async fn list_individual(
        &self,
        txn: &mut PostgresTransaction,
        recipient_id: AccountId,
    ) -> anyhow::Result<Vec<IndividualNotification>> {
        txn.txn()?
            .query(
                &format!(
                    "select {INDIVIDUAL_COLS} from individual_notifications i where \
                     i.recipient_id=$1 order by i.created_at desc, i.id desc"
                ),
                &[&*recipient_id],
            )
            .await?
            .iter()
            .map(|row| decode_individual(row, &mut Default::default()))
            .collect()
    }

    async fn mark_individual_read(
        &self,
        txn: &mut PostgresTransaction,
        notification_id: IndividualNotificationId,
    ) -> anyhow::Result<bool> {
        let updated = txn
            .txn()?
            .execute(
                "update individual_notifications set read=true where id=$1",
                &[&*notification_id],
            )
            .await?;
        Ok(updated != 0)
    }

    async fn create_broadcast(
        &self,
        txn: &mut PostgresTransaction,
        notification: &BroadcastNotification,
    ) -> anyhow::Result<()> {
        txn.txn()?
            .execute(
                &format!(
                    "insert into broadcast_notifications ({BROADCAST_COL_NAMES}) values ({})",
                    arg_indices(1..=BROADCAST_CNT)
                ),
                &[
                    &*notification.id,
                    &*notification.company_id,
                    &*notification.sender_id,
                    &notification.text.as_str(),
                    &notification.created_at,
                ],
            )
            .await?;
        Ok(())
    }

    async fn get_broadcast(
        &self,
        txn: &mut PostgresTransaction,
        notification_id: BroadcastNotificationId,
    ) -> anyhow::Result<Option<BroadcastNotification>> {
        txn.txn()?
            .query_opt(
                &format!("select {BROADCAST_COLS} from broadcast_notifications b where b.id=$1"),
                &[&*notification_id],
            )
            .await?
            .map(|row| decode_broadcast(&row, &mut Default::default()))
            .transpose()
    }

    async fn list_for_employee(
        &self,
        txn: &mut PostgresTransaction,
        employee_id: AccountId,
        company_id: CompanyId,
    ) -> anyhow::Result<Vec<EmployeeNotification>> {
        txn.txn()?
            .query(
                &format!(
                    "select {BROADCAST_COLS}, coalesce(m.read, false) from \
                     broadcast_notifications b left join broadcast_read_markers m on \
                     m.notification_id=b.id and m.employee_id=$1 where b.company_id=$2 order by \
                     b.created_at desc, b.id desc"
                ),
                &[&*employee_id, &*company_id],
            )
            .await?
            .iter()
            .map(|row| {
                let mut cnt = ColumnCounter::default();
                anyhow::Ok(EmployeeNotification {
                    notification: decode_broadcast(row, &mut cnt)?,
                    is_read: row.get(cnt.idx()),
                })
            })
            .collect()
    }

    async fn mark_read(
        &self,
        txn: &mut PostgresTransaction,
        employee_id: AccountId,
        notification_id: BroadcastNotificationId,
    ) -> anyhow::Result<()> {
        txn.txn()?
            .execute(
                "insert into broadcast_read_markers (employee_id, notification_id, read) values \
                 ($1, $2, true) on conflict (employee_id, notification_id) do update set \
                 read=true",
                &[&*employee_id, &*notification_id],
            )
            .await?;
        Ok(())
    }

    async fn mark_all_read(
        &self,
        txn: &mut PostgresTransaction,
        employee_id: AccountId,
        company_id: CompanyId,
    ) -> anyhow::Result<()> {
        txn.txn()?
            .execute(
                "insert into broadcast_read_markers (employee_id, notification_id, read) select \
                 $1::uuid, b.id, true from broadcast_notifications b where b.company_id=$2 on \
                 conflict (employee_id, notification_id) do update set read=true",
                &[&*employee_id, &*company_id],
            )
            .await?;
        Ok(())
    }

    async fn count_unread(
        &self,
        txn: &mut PostgresTransaction,
        employee_id: AccountId,
        company_id: CompanyId,
    ) -> anyhow::Result<u64> {
        let count: i64 = txn
            .txn()?
            .query_one(
                "select count(*) from broadcast_notifications b where b.company_id=$2 and not \
                 exists (select 1 from broadcast_read_markers m where m.notification_id=b.id and \
                 m.employee_id=$1 and m.read)",
                &[&*employee_id, &*company_id],
            )
            .await?
            .get(0);
        Ok(count.try_into()?)
    }
}

fn decode_individual(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<IndividualNotification> {
    Ok(IndividualNotification {
        id: row.get::<_, Uuid>(cnt.idx()).into(),
        recipient_id: row.get::<_, Uuid>(cnt.idx()).into(),
        sender_id: row.get::<_, Uuid>(cnt.idx()).into(),
        text: row.get::<_, String>(cnt.idx()).try_into()?,
        created_at: row.get(cnt.idx()),
        read: row.get(cnt.idx()),
    })
}

fn decode_broadcast(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<BroadcastNotification> {
    Ok(BroadcastNotification {
        id: row.get::<_, Uuid>(cnt.idx()).into(),
        company_id: row.get::<_, Uuid>(cnt.idx()).into(),
        sender_id: row.get::<_, Uuid>(cnt.idx()).into(),
        text: row.get::<_, String>(cnt.idx()).try_into()?,
        created_at: row.get(cnt.idx()),
    })
}
