use clap::{Args, Subcommand};
use jobboard_config::Config;
use jobboard_core_catalog_contracts::CatalogFeatureService;
use jobboard_models::{
    error::PublicError,
    job::JobPredicate,
    pagination::{PaginationLimit, PaginationSlice},
};
use jobboard_shared_contracts::time::TimeService;
use jobboard_shared_impl::time::TimeServiceImpl;
use uuid::Uuid;

use super::{output, provide, public_error, validated};
use crate::environment::types::CatalogFeature;

#[derive(Debug, Subcommand)]
pub enum JobCommand {
    /// Show a single job posting
    #[command(aliases(["g"]))]
    Get { job: Uuid },
    /// List job postings, newest first
    #[command(aliases(["ls", "l"]))]
    List {
        #[command(flatten)]
        filter: JobFilterArgs,
        #[arg(short = 'n', long, default_value_t = PaginationLimit::MAX)]
        limit: u64,
        #[arg(short, long, default_value_t = 0)]
        offset: u64,
    },
    /// List category fields and their job categories
    Categories,
}

#[derive(Debug, Default, Args)]
pub struct JobFilterArgs {
    /// Only postings that currently accept applications
    #[arg(long)]
    open: bool,
    /// Only postings of this company
    #[arg(long)]
    company: Option<Uuid>,
    /// Only postings in at least one of these categories
    #[arg(long = "category")]
    categories: Vec<Uuid>,
    /// Only postings in at least one of these category fields
    #[arg(long = "field")]
    fields: Vec<Uuid>,
    /// Only postings the seeker has not applied to
    #[arg(long)]
    not_applied_by: Option<Uuid>,
    /// Only postings whose title contains this text
    #[arg(short, long)]
    search: Option<String>,
}

impl JobCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let catalog: CatalogFeature = provide(&config).await?;
        match self {
            Self::Get { job } => {
                let entry = catalog.get_job(job.into()).await.map_err(public_error)?;
                output::entry(&entry);
            }
            Self::List {
                filter,
                limit,
                offset,
            } => {
                let limit = PaginationLimit::try_new(limit).map_err(|_| {
                    PublicError::validation(
                        "invalid_limit",
                        format!("The limit must not exceed {}.", PaginationLimit::MAX),
                    )
                })?;
                let predicate = filter.into_predicate(&TimeServiceImpl)?;
                let page = catalog
                    .list_jobs(predicate, PaginationSlice { limit, offset })
                    .await?;
                println!("{} job postings", page.total);
                for entry in &page.items {
                    output::entry(entry);
                }
            }
            Self::Categories => {
                let fields = catalog.list_fields().await?;
                let categories = catalog.list_categories().await?;
                for field in fields {
                    println!("{}  {}", field.id, field.name);
                    for category in categories.iter().filter(|c| c.field_id == field.id) {
                        println!("    {}  {}", category.id, category.name);
                    }
                }
            }
        }

        Ok(())
    }
}

impl JobFilterArgs {
    fn into_predicate(self, time: &impl TimeService) -> anyhow::Result<JobPredicate> {
        let mut predicates = Vec::new();
        if self.open {
            predicates.push(JobPredicate::OpenAt(time.now()));
        }
        if let Some(company) = self.company {
            predicates.push(JobPredicate::Company(company.into()));
        }
        if !self.categories.is_empty() {
            predicates.push(JobPredicate::HasAnyCategory(
                self.categories.into_iter().map(Into::into).collect(),
            ));
        }
        if !self.fields.is_empty() {
            predicates.push(JobPredicate::InAnyField(
                self.fields.into_iter().map(Into::into).collect(),
            ));
        }
        if let Some(seeker) = self.not_applied_by {
            predicates.push(JobPredicate::NotAppliedBy(seeker.into()));
        }
        if let Some(search) = self.search {
            predicates.push(JobPredicate::TitleContains(validated(
                search,
                "invalid_search_term",
            )?));
        }

        Ok(JobPredicate::all(predicates))
    }
}
