use std::fmt::Display;

use jobboard_config::Config;
use jobboard_di::Provide;
use jobboard_models::error::{ErrorCode, ErrorKind, PublicError};

use crate::{database, environment::Provider};

pub mod employer;
pub mod job;
pub mod migrate;
pub mod notification;
pub mod seeker;

mod output;

async fn provide<T>(config: &Config) -> anyhow::Result<T>
where
    T: jobboard_di::Build<Provider>,
{
    let database = database::connect(&config.database).await?;
    Ok(Provider::new(database).provide())
}

/// Converts an operation error into the error reported to the caller.
///
/// Transient failures keep their details so that they can be logged, every
/// other error is reduced to its public representation.
fn public_error<E>(err: E) -> anyhow::Error
where
    E: ErrorCode + std::error::Error + Send + Sync + 'static,
{
    match err.kind() {
        ErrorKind::Transient => err.into(),
        _ => PublicError::from_error(&err).into(),
    }
}

/// Parses a validated string type, reporting failures as validation errors.
fn validated<T>(value: String, code: &'static str) -> anyhow::Result<T>
where
    T: TryFrom<String>,
    T::Error: Display,
{
    T::try_from(value).map_err(|err| PublicError::validation(code, err.to_string()).into())
}
