use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use jobboard::commands::{
    employer::EmployerCommand, job::JobCommand, migrate::MigrateCommand,
    notification::NotificationCommand, seeker::SeekerCommand,
};
use jobboard_config::Config;
use jobboard_models::error::PublicError;
use jobboard_utils::jobboard_version;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return ExitCode::SUCCESS;
    }

    init_tracing();

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<PublicError>() {
                Some(public) => eprintln!("{public}"),
                None => {
                    tracing::error!("{err:#}");
                    eprintln!("{}", PublicError::internal());
                }
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> anyhow::Result<()> {
    let config = jobboard_config::load().context("Failed to load config")?;

    match command {
        Command::Migrate { command } => command.invoke(config).await?,
        Command::Seeker { command } => command.invoke(config).await?,
        Command::Employer { command } => command.invoke(config).await?,
        Command::Notification { command } => command.invoke(config).await?,
        Command::Job { command } => command.invoke(config).await?,
        Command::CheckConfig { verbose } => {
            check_config(&config)?;
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = jobboard_version())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Manage database and migrations
    #[command(aliases(["mig", "m"]))]
    Migrate {
        #[command(subcommand)]
        command: MigrateCommand,
    },
    /// Act as a job seeker
    #[command(aliases(["s"]))]
    Seeker {
        #[command(subcommand)]
        command: SeekerCommand,
    },
    /// Act as an employee of a company
    #[command(aliases(["e"]))]
    Employer {
        #[command(subcommand)]
        command: EmployerCommand,
    },
    /// Send and read notifications
    #[command(aliases(["n"]))]
    Notification {
        #[command(subcommand)]
        command: NotificationCommand,
    },
    /// Browse the job catalog
    #[command(aliases(["j"]))]
    Job {
        #[command(subcommand)]
        command: JobCommand,
    },
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn check_config(config: &Config) -> anyhow::Result<()> {
    anyhow::ensure!(
        config.matching.default_limit > 0,
        "matching.default_limit must be positive"
    );
    anyhow::ensure!(
        config.database.min_connections <= config.database.max_connections,
        "database.min_connections must not exceed database.max_connections"
    );
    Ok(())
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(pretty_logs)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}
