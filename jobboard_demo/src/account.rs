use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use jobboard_models::account::{Account, AccountRole, Employee};
use jobboard_persistence_contracts::account::AccountRepository;
use uuid::uuid;

use crate::company::{ACME, GLOBEX};

pub static ALL_ACCOUNTS: LazyLock<Vec<&Account>> =
    LazyLock::new(|| vec![&ALICE, &BOB, &CAROL, &EVE, &FRANK, &GRACE, &HEIDI, &IVAN]);

pub static ALL_EMPLOYEES: LazyLock<Vec<&Employee>> =
    LazyLock::new(|| vec![&EVE_AT_ACME, &FRANK_AT_ACME, &GRACE_AT_GLOBEX, &IVAN_AT_ACME]);

fn account(id: uuid::Uuid, name: &str, role: AccountRole, day: u32) -> Account {
    Account {
        id: id.into(),
        name: name.try_into().unwrap(),
        role,
        created_at: Utc.with_ymd_and_hms(2024, 1, day, 9, 0, 0).unwrap(),
    }
}

/// Seeker interested in backend development.
pub static ALICE: LazyLock<Account> = LazyLock::new(|| {
    account(
        uuid!("a11ce000-0000-4000-8000-000000000001"),
        "Alice",
        AccountRole::Seeker,
        2,
    )
});

/// Seeker without any preferences.
pub static BOB: LazyLock<Account> = LazyLock::new(|| {
    account(
        uuid!("a11ce000-0000-4000-8000-000000000002"),
        "Bob",
        AccountRole::Seeker,
        3,
    )
});

/// Seeker with a pending application at Acme.
pub static CAROL: LazyLock<Account> = LazyLock::new(|| {
    account(
        uuid!("a11ce000-0000-4000-8000-000000000003"),
        "Carol",
        AccountRole::Seeker,
        4,
    )
});

pub static EVE: LazyLock<Account> = LazyLock::new(|| {
    account(
        uuid!("a11ce000-0000-4000-8000-000000000011"),
        "Eve",
        AccountRole::Employer,
        2,
    )
});

pub static FRANK: LazyLock<Account> = LazyLock::new(|| {
    account(
        uuid!("a11ce000-0000-4000-8000-000000000012"),
        "Frank",
        AccountRole::Employer,
        3,
    )
});

pub static GRACE: LazyLock<Account> = LazyLock::new(|| {
    account(
        uuid!("a11ce000-0000-4000-8000-000000000013"),
        "Grace",
        AccountRole::Employer,
        4,
    )
});

/// Employer that does not belong to any company.
pub static HEIDI: LazyLock<Account> = LazyLock::new(|| {
    account(
        uuid!("a11ce000-0000-4000-8000-000000000014"),
        "Heidi",
        AccountRole::Employer,
        5,
    )
});

/// Employer who joined Acme after the demo broadcast was sent.
pub static IVAN: LazyLock<Account> = LazyLock::new(|| {
    account(
        uuid!("a11ce000-0000-4000-8000-000000000015"),
        "Ivan",
        AccountRole::Employer,
        6,
    )
});

pub static EVE_AT_ACME: LazyLock<Employee> = LazyLock::new(|| Employee {
    account_id: EVE.id,
    company_id: ACME.id,
    joined_at: Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap(),
});

pub static FRANK_AT_ACME: LazyLock<Employee> = LazyLock::new(|| Employee {
    account_id: FRANK.id,
    company_id: ACME.id,
    joined_at: Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 0).unwrap(),
});

pub static GRACE_AT_GLOBEX: LazyLock<Employee> = LazyLock::new(|| Employee {
    account_id: GRACE.id,
    company_id: GLOBEX.id,
    joined_at: Utc.with_ymd_and_hms(2024, 1, 12, 0, 0, 0).unwrap(),
});

pub static IVAN_AT_ACME: LazyLock<Employee> = LazyLock::new(|| Employee {
    account_id: IVAN.id,
    company_id: ACME.id,
    joined_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
});

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: &impl AccountRepository<Txn>,
) -> anyhow::Result<()> {
    for &account in &*ALL_ACCOUNTS {
        repo.create(txn, account).await?;
    }
    for &employee in &*ALL_EMPLOYEES {
        repo.save_employee(txn, employee).await?;
    }
    Ok(())
}
