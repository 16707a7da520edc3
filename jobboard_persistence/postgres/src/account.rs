use bb8_postgres::tokio_postgres::Row;
use jobboard_di::Build;
use jobboard_models::{
    account::{Account, AccountId, Employee},
    company::CompanyId,
};
use jobboard_persistence_contracts::account::AccountRepository;
use uuid::Uuid;

use crate::{arg_indices, columns, ColumnCounter, PostgresTransaction};

#[derive(Debug, Clone, Build)]
pub struct PostgresAccountRepository;

columns!(account as "a": "id", "name", "role", "created_at");
columns!(employee as "e": "account_id", "company_id", "joined_at");

impl AccountRepository<PostgresTransaction> for PostgresAccountRepository {
    async fn get(
        &self,
        txn: &mut PostgresTransaction,
        account_id: AccountId,
    ) -> anyhow::Result<Option<Account>> {
        txn.txn()?
            .query_opt(
                &format!("select {ACCOUNT_COLS} from accounts a where a.id=$1"),
                &[&*account_id],
            )
            .await?
            .map(|row| decode_account(&row, &mut Default::default()))
            .transpose()
    }

    async fn create(&self, txn: &mut PostgresTransaction, account: &Account) -> anyhow::Result<()> {
        txn.txn()?
            .execute(
                &format!(
                    "insert into accounts ({ACCOUNT_COL_NAMES}) values ({})",
                    arg_indices(1..=ACCOUNT_CNT)
                ),
                &[
                    &*account.id,
                    &account.name.as_str(),
                    &account.role.as_str(),
                    &account.created_at,
                ],
            )
            .await?;
        Ok(())
    }

    async fn get_employee(
        &self,
        txn: &mut PostgresTransaction,
        account_id: AccountId,
    ) -> anyhow::Result<Option<Employee>> {
        Ok(txn
            .txn()?
            .query_opt(
                &format!("select {EMPLOYEE_COLS} from employees e where e.account_id=$1"),
                &[&*account_id],
            )
            .await?
            .map(|row| decode_employee(&row, &mut Default::default())))
    }

    async fn save_employee(
        &self,
        txn: &mut PostgresTransaction,
        employee: &Employee,
    ) -> anyhow::Result<()> {
        txn.txn()?
            .execute(
                &format!(
                    "insert into employees ({EMPLOYEE_COL_NAMES}) values ({}) on conflict \
                     (account_id) do update set company_id=excluded.company_id, \
                     joined_at=excluded.joined_at",
                    arg_indices(1..=EMPLOYEE_CNT)
                ),
                &[
                    &*employee.account_id,
                    &*employee.company_id,
                    &employee.joined_at,
                ],
            )
            .await?;
        Ok(())
    }

    async fn delete_employee(
        &self,
        txn: &mut PostgresTransaction,
        account_id: AccountId,
    ) -> anyhow::Result<bool> {
        let deleted = txn
            .txn()?
            .execute("delete from employees where account_id=$1", &[&*account_id])
            .await?;
        Ok(deleted != 0)
    }

    async fn list_employees(
        &self,
        txn: &mut PostgresTransaction,
        company_id: CompanyId,
    ) -> anyhow::Result<Vec<Employee>> {
        Ok(txn
            .txn()?
            .query(
                &format!(
                    "select {EMPLOYEE_COLS} from employees e where e.company_id=$1 order by \
                     e.joined_at, e.account_id"
                ),
                &[&*company_id],
            )
            .await?
            .iter()
            .map(|row| decode_employee(row, &mut Default::default()))
            .collect())
    }
}

pub(crate) fn decode_account(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<Account> {
    Ok(Account {
        id: row.get::<_, Uuid>(cnt.idx()).into(),
        name: row.get::<_, String>(cnt.idx()).try_into()?,
        role: row.get::<_, &str>(cnt.idx()).parse()?,
        created_at: row.get(cnt.idx()),
    })
}

fn decode_employee(row: &Row, cnt: &mut ColumnCounter) -> Employee {
    Employee {
        account_id: row.get::<_, Uuid>(cnt.idx()).into(),
        company_id: row.get::<_, Uuid>(cnt.idx()).into(),
        joined_at: row.get(cnt.idx()),
    }
}
