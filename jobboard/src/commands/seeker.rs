use clap::Subcommand;
use jobboard_config::Config;
use jobboard_core_application_contracts::ApplicationFeatureService;
use jobboard_core_catalog_contracts::CatalogFeatureService;
use jobboard_core_matching_contracts::MatchingFeatureService;
use jobboard_models::{application::ApplicationRequest, ranking::RankedJob};
use uuid::Uuid;

use super::{output, provide, public_error, validated};
use crate::environment::types::{ApplicationFeature, CatalogFeature, MatchingFeature};

#[derive(Debug, Subcommand)]
pub enum SeekerCommand {
    /// Rank the open job postings by the seeker's preferences
    #[command(aliases(["r"]))]
    Rank {
        seeker: Uuid,
        /// Maximum number of postings, defaults to `matching.default_limit`
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Manage preferred job categories
    #[command(aliases(["prefs", "p"]))]
    Preferences {
        #[command(subcommand)]
        command: PreferencesCommand,
    },
    /// Apply for a job posting
    #[command(aliases(["a"]))]
    Apply {
        seeker: Uuid,
        job: Uuid,
        #[arg(short, long)]
        cover_letter: Option<String>,
    },
    /// List the seeker's application requests
    Applications { seeker: Uuid },
    /// Show one of the seeker's application requests
    Application { seeker: Uuid, request: Uuid },
    /// Manage bookmarked job postings
    #[command(aliases(["s"]))]
    Saved {
        #[command(subcommand)]
        command: SavedCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum PreferencesCommand {
    /// Show the preferred categories
    Get { seeker: Uuid },
    /// Replace the preferred categories
    Set {
        seeker: Uuid,
        /// Preferred category ids, none clears all preferences
        categories: Vec<Uuid>,
    },
}

#[derive(Debug, Subcommand)]
pub enum SavedCommand {
    /// List bookmarked job postings
    #[command(aliases(["ls"]))]
    List { seeker: Uuid },
    /// Bookmark a job posting or remove the bookmark
    Toggle { seeker: Uuid, job: Uuid },
}

impl SeekerCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            Self::Rank { seeker, limit } => {
                let limit = limit.unwrap_or(config.matching.default_limit);
                let matching: MatchingFeature = provide(&config).await?;
                output::ranked(&rank(&matching, seeker, limit).await?);
            }
            Self::Preferences { command } => command.invoke(config).await?,
            Self::Apply {
                seeker,
                job,
                cover_letter,
            } => {
                let application: ApplicationFeature = provide(&config).await?;
                output::application(&apply(&application, seeker, job, cover_letter).await?);
            }
            Self::Applications { seeker } => {
                let application: ApplicationFeature = provide(&config).await?;
                let requests = application
                    .list_for_seeker(seeker.into())
                    .await
                    .map_err(public_error)?;
                output::applications(&requests);
            }
            Self::Application { seeker, request } => {
                let application: ApplicationFeature = provide(&config).await?;
                let request = application
                    .get_application(seeker.into(), request.into())
                    .await
                    .map_err(public_error)?;
                output::application(&request);
            }
            Self::Saved { command } => command.invoke(config).await?,
        }

        Ok(())
    }
}

async fn rank(
    matching: &impl MatchingFeatureService,
    seeker: Uuid,
    limit: usize,
) -> anyhow::Result<Vec<RankedJob>> {
    matching
        .rank(seeker.into(), limit)
        .await
        .map_err(public_error)
}

async fn apply(
    application: &impl ApplicationFeatureService,
    seeker: Uuid,
    job: Uuid,
    cover_letter: Option<String>,
) -> anyhow::Result<ApplicationRequest> {
    let cover_letter = cover_letter
        .map(|c| validated(c, "invalid_cover_letter"))
        .transpose()?;
    application
        .apply(seeker.into(), job.into(), cover_letter)
        .await
        .map_err(public_error)
}

impl PreferencesCommand {
    async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let matching: MatchingFeature = provide(&config).await?;
        let categories = match self {
            Self::Get { seeker } => matching
                .get_preferences(seeker.into())
                .await
                .map_err(public_error)?,
            Self::Set { seeker, categories } => matching
                .set_preferences(
                    seeker.into(),
                    categories.into_iter().map(Into::into).collect(),
                )
                .await
                .map_err(public_error)?,
        };
        output::categories(&categories);

        Ok(())
    }
}

impl SavedCommand {
    async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let catalog: CatalogFeature = provide(&config).await?;
        match self {
            Self::List { seeker } => {
                let saved = catalog
                    .list_saved(seeker.into())
                    .await
                    .map_err(public_error)?;
                if saved.is_empty() {
                    println!("No saved job postings.");
                }
                for saved_job in saved {
                    println!("{}  saved {}", saved_job.job_id, output::date(saved_job.saved_at));
                }
            }
            Self::Toggle { seeker, job } => {
                let saved = catalog
                    .toggle_saved(seeker.into(), job.into())
                    .await
                    .map_err(public_error)?;
                if saved {
                    println!("Job posting saved");
                } else {
                    println!("Job posting removed from saved postings");
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jobboard_core_application_contracts::{ApplicationApplyError, MockApplicationFeatureService};
    use jobboard_core_matching_contracts::{MatchingRankError, MockMatchingFeatureService};
    use jobboard_demo::{
        account::{ALICE, CAROL},
        application::CAROL_ACME_BACKEND,
        catalog::{catalog_entry, ACME_BACKEND},
    };
    use jobboard_models::{
        error::{ErrorKind, PublicError},
        ranking::MatchPriority,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn rank_ok() {
        // Arrange
        let expected = vec![RankedJob {
            entry: catalog_entry(&ACME_BACKEND),
            priority: MatchPriority::Exact,
        }];

        let matching = MockMatchingFeatureService::new().with_rank(
            ALICE.id,
            5,
            Ok(expected.clone()),
        );

        // Act
        let result = rank(&matching, *ALICE.id, 5).await;

        // Assert
        assert_eq!(result.unwrap(), expected);
    }

    #[tokio::test]
    async fn rank_invalid_limit() {
        // Arrange
        let matching = MockMatchingFeatureService::new().with_rank(
            ALICE.id,
            0,
            Err(MatchingRankError::InvalidLimit),
        );

        // Act
        let result = rank(&matching, *ALICE.id, 0).await;

        // Assert
        let err = result.unwrap_err();
        let err = err.downcast_ref::<PublicError>().unwrap();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.code, "invalid_limit");
    }

    #[tokio::test]
    async fn apply_ok() {
        // Arrange
        let expected = CAROL_ACME_BACKEND.clone();

        let application = MockApplicationFeatureService::new().with_apply(
            CAROL.id,
            ACME_BACKEND.id,
            expected.cover_letter.clone(),
            Ok(expected.clone()),
        );

        let cover_letter = expected.cover_letter.as_ref().map(|c| c.to_string());

        // Act
        let result = apply(&application, *CAROL.id, *ACME_BACKEND.id, cover_letter).await;

        // Assert
        assert_eq!(result.unwrap(), expected);
    }

    #[tokio::test]
    async fn apply_already_applied() {
        // Arrange
        let application = MockApplicationFeatureService::new().with_apply(
            CAROL.id,
            ACME_BACKEND.id,
            None,
            Err(ApplicationApplyError::AlreadyApplied),
        );

        // Act
        let result = apply(&application, *CAROL.id, *ACME_BACKEND.id, None).await;

        // Assert
        let err = result.unwrap_err();
        let err = err.downcast_ref::<PublicError>().unwrap();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.code, "already_applied");
    }

    #[tokio::test]
    async fn apply_cover_letter_too_long() {
        // Act
        let result = apply(
            &MockApplicationFeatureService::new(),
            *CAROL.id,
            *ACME_BACKEND.id,
            Some("x".repeat(5000)),
        )
        .await;

        // Assert
        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<PublicError>().unwrap().code,
            "invalid_cover_letter"
        );
    }
}
