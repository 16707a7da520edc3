use std::sync::LazyLock;

use jobboard_models::company::Company;
use jobboard_persistence_contracts::company::CompanyRepository;
use uuid::uuid;

pub static ALL_COMPANIES: LazyLock<Vec<&Company>> =
    LazyLock::new(|| vec![&ACME, &GLOBEX, &INITECH]);

pub static ACME: LazyLock<Company> = LazyLock::new(|| Company {
    id: uuid!("3f0c2a1e-5b7d-4c3a-9e8f-1a2b3c4d5e01").into(),
    name: "Acme Corporation".try_into().unwrap(),
    rating: Some(5.0),
});

pub static GLOBEX: LazyLock<Company> = LazyLock::new(|| Company {
    id: uuid!("3f0c2a1e-5b7d-4c3a-9e8f-1a2b3c4d5e02").into(),
    name: "Globex".try_into().unwrap(),
    rating: Some(4.0),
});

/// A company nobody has rated yet.
pub static INITECH: LazyLock<Company> = LazyLock::new(|| Company {
    id: uuid!("3f0c2a1e-5b7d-4c3a-9e8f-1a2b3c4d5e03").into(),
    name: "Initech".try_into().unwrap(),
    rating: None,
});

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: &impl CompanyRepository<Txn>,
) -> anyhow::Result<()> {
    for &company in &*ALL_COMPANIES {
        repo.create(txn, company).await?;
    }
    Ok(())
}
