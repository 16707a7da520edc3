use chrono::{DateTime, Utc};
use clap::{Args, Subcommand, ValueEnum};
use jobboard_config::Config;
use jobboard_core_application_contracts::ApplicationFeatureService;
use jobboard_core_catalog_contracts::{CatalogFeatureService, JobCreateCommand, JobUpdateCommand};
use jobboard_models::{
    application::{ApplicationDecision, ApplicationRequest},
    error::PublicError,
    job::{JobPostingPatch, JobQuantity},
};
use uuid::Uuid;

use super::{output, provide, public_error, validated};
use crate::environment::types::{ApplicationFeature, CatalogFeature};

#[derive(Debug, Subcommand)]
pub enum EmployerCommand {
    /// Accept or reject a pending application request
    Respond {
        employer: Uuid,
        request: Uuid,
        #[arg(value_enum)]
        decision: Decision,
        /// Message sent to the seeker together with the decision
        #[arg(short, long, default_value = "")]
        response: String,
    },
    /// Activate or deactivate a job posting
    Toggle {
        employer: Uuid,
        job: Uuid,
        #[arg(action = clap::ArgAction::Set)]
        active: bool,
    },
    /// List the application requests of a job posting
    Applications { employer: Uuid, job: Uuid },
    /// Show an application request for one of the company's job postings
    Application { employer: Uuid, request: Uuid },
    /// Manage the company's job postings
    #[command(aliases(["j"]))]
    Job {
        #[command(subcommand)]
        command: EmployerJobCommand,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Decision {
    Accept,
    Reject,
}

impl From<Decision> for ApplicationDecision {
    fn from(value: Decision) -> Self {
        match value {
            Decision::Accept => Self::Accepted,
            Decision::Reject => Self::Rejected,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum EmployerJobCommand {
    /// Create a job posting for the employer's company
    Create {
        employer: Uuid,
        #[command(flatten)]
        job: JobArgs,
    },
    /// Update a job posting of the employer's company
    Update {
        employer: Uuid,
        job: Uuid,
        #[command(flatten)]
        update: JobUpdateArgs,
    },
    /// Delete a job posting of the employer's company
    Delete {
        employer: Uuid,
        job: Uuid,
        #[arg(long, required = true)]
        force: bool,
    },
}

#[derive(Debug, Args)]
pub struct JobArgs {
    #[arg(short, long)]
    title: String,
    #[arg(short, long, default_value = "")]
    description: String,
    #[arg(short, long)]
    salary: Option<i64>,
    #[arg(short, long, default_value = "1")]
    quantity: i32,
    /// RFC 3339 timestamp after which no applications are accepted
    #[arg(long)]
    closing_at: Option<DateTime<Utc>>,
    #[arg(short, long = "category")]
    categories: Vec<Uuid>,
}

#[derive(Debug, Args)]
pub struct JobUpdateArgs {
    #[arg(short, long)]
    title: Option<String>,
    #[arg(short, long)]
    description: Option<String>,
    #[arg(short, long, conflicts_with = "no_salary")]
    salary: Option<i64>,
    /// Remove the salary
    #[arg(long)]
    no_salary: bool,
    #[arg(short, long)]
    quantity: Option<i32>,
    #[arg(long, conflicts_with = "no_closing")]
    closing_at: Option<DateTime<Utc>>,
    /// Remove the closing time
    #[arg(long)]
    no_closing: bool,
    /// Replace the categories, may be given multiple times
    #[arg(short, long = "category", conflicts_with = "clear_categories")]
    categories: Vec<Uuid>,
    /// Remove all categories
    #[arg(long)]
    clear_categories: bool,
}

impl EmployerCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            Self::Respond {
                employer,
                request,
                decision,
                response,
            } => {
                let application: ApplicationFeature = provide(&config).await?;
                let request = respond(&application, employer, request, decision, response).await?;
                output::application(&request);
            }
            Self::Toggle {
                employer,
                job,
                active,
            } => {
                let application: ApplicationFeature = provide(&config).await?;
                application
                    .toggle_active(employer.into(), job.into(), active)
                    .await
                    .map_err(public_error)?;
                if active {
                    println!("Job posting is active");
                } else {
                    println!("Job posting is inactive");
                }
            }
            Self::Applications { employer, job } => {
                let application: ApplicationFeature = provide(&config).await?;
                let requests = application
                    .list_for_job(employer.into(), job.into())
                    .await
                    .map_err(public_error)?;
                output::applications(&requests);
            }
            Self::Application { employer, request } => {
                let application: ApplicationFeature = provide(&config).await?;
                let request = application
                    .get_application(employer.into(), request.into())
                    .await
                    .map_err(public_error)?;
                output::application(&request);
            }
            Self::Job { command } => command.invoke(config).await?,
        }

        Ok(())
    }
}

async fn respond(
    application: &impl ApplicationFeatureService,
    employer: Uuid,
    request: Uuid,
    decision: Decision,
    response: String,
) -> anyhow::Result<ApplicationRequest> {
    let response = validated(response, "invalid_response")?;
    application
        .respond(employer.into(), request.into(), decision.into(), response)
        .await
        .map_err(public_error)
}

impl EmployerJobCommand {
    async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            Self::Create { employer, job } => {
                let cmd = job.into_command()?;
                let catalog: CatalogFeature = provide(&config).await?;
                let entry = catalog
                    .create_job(employer.into(), cmd)
                    .await
                    .map_err(public_error)?;
                output::entry(&entry);
            }
            Self::Update {
                employer,
                job,
                update,
            } => {
                let cmd = update.into_command()?;
                let catalog: CatalogFeature = provide(&config).await?;
                let entry = catalog
                    .update_job(employer.into(), job.into(), cmd)
                    .await
                    .map_err(public_error)?;
                output::entry(&entry);
            }
            Self::Delete {
                employer,
                job,
                force: _,
            } => {
                let catalog: CatalogFeature = provide(&config).await?;
                catalog
                    .delete_job(employer.into(), job.into())
                    .await
                    .map_err(public_error)?;
                println!("Job posting deleted");
            }
        }

        Ok(())
    }
}

impl JobArgs {
    fn into_command(self) -> anyhow::Result<JobCreateCommand> {
        Ok(JobCreateCommand {
            title: validated(self.title, "invalid_title")?,
            description: validated(self.description, "invalid_description")?,
            salary: self.salary,
            quantity: quantity(self.quantity)?,
            closing_at: self.closing_at,
            categories: self.categories.into_iter().map(Into::into).collect(),
        })
    }
}

impl JobUpdateArgs {
    fn into_command(self) -> anyhow::Result<JobUpdateCommand> {
        let mut patch = JobPostingPatch::new();
        if let Some(title) = self.title {
            patch = patch.update_title(validated(title, "invalid_title")?);
        }
        if let Some(description) = self.description {
            patch = patch.update_description(validated(description, "invalid_description")?);
        }
        if self.no_salary {
            patch = patch.update_salary(None);
        } else if let Some(salary) = self.salary {
            patch = patch.update_salary(Some(salary));
        }
        if let Some(value) = self.quantity {
            patch = patch.update_quantity(quantity(value)?);
        }
        if self.no_closing {
            patch = patch.update_closing_at(None);
        } else if let Some(closing_at) = self.closing_at {
            patch = patch.update_closing_at(Some(closing_at));
        }

        let categories = if self.clear_categories {
            Some(Vec::new())
        } else if !self.categories.is_empty() {
            Some(self.categories.into_iter().map(Into::into).collect())
        } else {
            None
        };

        Ok(JobUpdateCommand { patch, categories })
    }
}

fn quantity(value: i32) -> anyhow::Result<JobQuantity> {
    value.try_into().map_err(|_| {
        PublicError::validation(
            "invalid_quantity",
            "The quantity must be a positive integer.",
        )
        .into()
    })
}
