use std::sync::LazyLock;

use chrono::{DateTime, TimeZone, Utc};
use jobboard_models::job::{CatalogEntry, CategoryField, JobCategory, JobPosting};
use jobboard_persistence_contracts::catalog::CatalogRepository;
use uuid::{uuid, Uuid};

use crate::company::{ACME, ALL_COMPANIES, GLOBEX, INITECH};

pub static ALL_FIELDS: LazyLock<Vec<&CategoryField>> =
    LazyLock::new(|| vec![&ENGINEERING, &DESIGN, &SALES]);

pub static ALL_CATEGORIES: LazyLock<Vec<&JobCategory>> =
    LazyLock::new(|| vec![&BACKEND, &FRONTEND, &UI_DESIGN, &ACCOUNT_EXECUTIVE]);

pub static ALL_JOBS: LazyLock<Vec<&JobPosting>> = LazyLock::new(|| {
    vec![
        &ACME_BACKEND,
        &GLOBEX_FRONTEND,
        &ACME_DESIGN,
        &INITECH_SALES,
        &ACME_ARCHIVED,
        &GLOBEX_EXPIRED,
    ]
});

/// Category links of every demo posting.
pub static JOB_CATEGORIES: LazyLock<Vec<(&JobPosting, Vec<&JobCategory>)>> = LazyLock::new(|| {
    vec![
        (&ACME_BACKEND, vec![&BACKEND]),
        (&GLOBEX_FRONTEND, vec![&FRONTEND]),
        (&ACME_DESIGN, vec![&UI_DESIGN]),
        (&INITECH_SALES, vec![&ACCOUNT_EXECUTIVE]),
        (&ACME_ARCHIVED, vec![&BACKEND, &FRONTEND]),
        (&GLOBEX_EXPIRED, vec![&BACKEND]),
    ]
});

pub static ENGINEERING: LazyLock<CategoryField> = LazyLock::new(|| CategoryField {
    id: uuid!("f1e1d000-0000-4000-8000-000000000001").into(),
    name: "Engineering".try_into().unwrap(),
});

pub static DESIGN: LazyLock<CategoryField> = LazyLock::new(|| CategoryField {
    id: uuid!("f1e1d000-0000-4000-8000-000000000002").into(),
    name: "Design".try_into().unwrap(),
});

pub static SALES: LazyLock<CategoryField> = LazyLock::new(|| CategoryField {
    id: uuid!("f1e1d000-0000-4000-8000-000000000003").into(),
    name: "Sales".try_into().unwrap(),
});

pub static BACKEND: LazyLock<JobCategory> = LazyLock::new(|| JobCategory {
    id: uuid!("ca7e0000-0000-4000-8000-000000000001").into(),
    field_id: ENGINEERING.id,
    name: "Backend Developer".try_into().unwrap(),
});

pub static FRONTEND: LazyLock<JobCategory> = LazyLock::new(|| JobCategory {
    id: uuid!("ca7e0000-0000-4000-8000-000000000002").into(),
    field_id: ENGINEERING.id,
    name: "Frontend Developer".try_into().unwrap(),
});

pub static UI_DESIGN: LazyLock<JobCategory> = LazyLock::new(|| JobCategory {
    id: uuid!("ca7e0000-0000-4000-8000-000000000003").into(),
    field_id: DESIGN.id,
    name: "UI Designer".try_into().unwrap(),
});

pub static ACCOUNT_EXECUTIVE: LazyLock<JobCategory> = LazyLock::new(|| JobCategory {
    id: uuid!("ca7e0000-0000-4000-8000-000000000004").into(),
    field_id: SALES.id,
    name: "Account Executive".try_into().unwrap(),
});

fn posted(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, day, 8, 0, 0).unwrap()
}

fn job(
    id: Uuid,
    company: &jobboard_models::company::Company,
    title: &str,
    salary: Option<i64>,
    active: bool,
    closing_at: Option<DateTime<Utc>>,
    posted_at: DateTime<Utc>,
) -> JobPosting {
    JobPosting {
        id: id.into(),
        company_id: company.id,
        title: title.try_into().unwrap(),
        description: format!("{title} at {}", company.name).try_into().unwrap(),
        salary,
        quantity: 1.try_into().unwrap(),
        active,
        closing_at,
        posted_at,
    }
}

pub static ACME_BACKEND: LazyLock<JobPosting> = LazyLock::new(|| {
    job(
        uuid!("10b00000-0000-4000-8000-000000000001"),
        &ACME,
        "Senior Backend Developer",
        Some(85_000),
        true,
        None,
        posted(2, 1),
    )
});

pub static GLOBEX_FRONTEND: LazyLock<JobPosting> = LazyLock::new(|| {
    job(
        uuid!("10b00000-0000-4000-8000-000000000002"),
        &GLOBEX,
        "Frontend Developer",
        Some(70_000),
        true,
        Some(Utc.with_ymd_and_hms(2099, 12, 31, 0, 0, 0).unwrap()),
        posted(2, 5),
    )
});

pub static ACME_DESIGN: LazyLock<JobPosting> = LazyLock::new(|| {
    job(
        uuid!("10b00000-0000-4000-8000-000000000003"),
        &ACME,
        "Product Designer",
        None,
        true,
        None,
        posted(2, 10),
    )
});

pub static INITECH_SALES: LazyLock<JobPosting> = LazyLock::new(|| {
    job(
        uuid!("10b00000-0000-4000-8000-000000000004"),
        &INITECH,
        "Account Executive",
        Some(55_000),
        true,
        None,
        posted(2, 15),
    )
});

/// Deactivated by its employer.
pub static ACME_ARCHIVED: LazyLock<JobPosting> = LazyLock::new(|| {
    job(
        uuid!("10b00000-0000-4000-8000-000000000005"),
        &ACME,
        "Fullstack Developer",
        None,
        false,
        None,
        posted(1, 20),
    )
});

/// Active, but past its closing time.
pub static GLOBEX_EXPIRED: LazyLock<JobPosting> = LazyLock::new(|| {
    job(
        uuid!("10b00000-0000-4000-8000-000000000006"),
        &GLOBEX,
        "Backend Intern",
        None,
        true,
        Some(posted(3, 1)),
        posted(1, 25),
    )
});

/// Returns the catalog view of a demo posting.
pub fn catalog_entry(job: &JobPosting) -> CatalogEntry {
    let mut categories = JOB_CATEGORIES
        .iter()
        .filter(|(j, _)| j.id == job.id)
        .flat_map(|(_, categories)| categories.iter().map(|&c| c.clone()))
        .collect::<Vec<_>>();
    categories.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    let company_rating = ALL_COMPANIES
        .iter()
        .find(|c| c.id == job.company_id)
        .and_then(|c| c.rating);
    CatalogEntry {
        job: job.clone(),
        categories,
        company_rating,
    }
}

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: &impl CatalogRepository<Txn>,
) -> anyhow::Result<()> {
    for &field in &*ALL_FIELDS {
        repo.create_field(txn, field).await?;
    }
    for &category in &*ALL_CATEGORIES {
        repo.create_category(txn, category).await?;
    }
    for (job, categories) in &*JOB_CATEGORIES {
        repo.create_job(txn, job).await?;
        repo.set_job_categories(txn, job.id, categories.iter().map(|c| c.id).collect())
            .await?;
    }
    Ok(())
}
