//! `jobboard` — command-line access to the job board API.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::sync::Arc;

    use anyhow::Context;
    use clap::{Parser, Subcommand};
    use jobboard_auth::{AnonymousSession, SessionProvider, SessionToken, SharedSession};
    use jobboard_client::{ClientConfig, JobBoard, JobBoardApi};
    use jobboard_core::{CompanyId, CreateJobInput, JobId};

    /// Browse and post jobs on a job board GraphQL server.
    #[derive(Parser, Debug)]
    #[command(name = "jobboard", version, about, long_about = None)]
    pub struct Cli {
        /// GraphQL endpoint (defaults to $JOBBOARD_GRAPHQL_URL, then http://localhost:9000/graphql)
        #[arg(short = 'u', long = "url")]
        pub url: Option<String>,

        /// Bearer token for authenticated requests
        #[arg(long = "token", env = "JOBBOARD_ACCESS_TOKEN")]
        pub token: Option<String>,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Subcommand, Debug)]
    pub enum Command {
        /// List every job
        Jobs,
        /// Show one job
        Job { id: String },
        /// Show one company and its jobs
        Company { id: String },
        /// Post a new job (requires --token)
        CreateJob {
            #[arg(long)]
            title: String,
            #[arg(long)]
            description: Option<String>,
        },
    }

    pub async fn run(cli: Cli) -> anyhow::Result<()> {
        let mut config = ClientConfig::from_env();
        if let Some(url) = cli.url {
            config = config.with_endpoint(url);
        }

        let session: Arc<dyn SessionProvider> = match cli.token {
            Some(token) => Arc::new(SharedSession::with_token(SessionToken::new(token))),
            None => Arc::new(AnonymousSession),
        };
        let board = JobBoard::connect(&config, session);

        match cli.command {
            Command::Jobs => {
                let jobs = board.list_jobs().await.context("failed to list jobs")?;
                for job in jobs {
                    println!("{}\t{}\t{}", job.id, job.title, job.company.name);
                }
            }
            Command::Job { id } => {
                let id: JobId = id.parse()?;
                let job = board
                    .load_job(&id)
                    .await
                    .with_context(|| format!("failed to load job {id}"))?;
                println!("{}", job.title);
                println!("{} (/companies/{})", job.company.name, job.company.id);
                if let Some(description) = &job.description {
                    println!();
                    println!("{description}");
                }
            }
            Command::Company { id } => {
                let id: CompanyId = id.parse()?;
                let company = board
                    .load_company(&id)
                    .await
                    .with_context(|| format!("failed to load company {id}"))?;
                println!("{}", company.name);
                if let Some(description) = &company.description {
                    println!("{description}");
                }
                for job in company.jobs {
                    println!("  {}\t{}", job.id, job.title);
                }
            }
            Command::CreateJob { title, description } => {
                let mut input = CreateJobInput::new(title);
                if let Some(description) = description {
                    input = input.with_description(description);
                }
                let job = board.create_job(input).await.context("failed to create job")?;
                println!("{}", job.id);
            }
        }

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use clap::Parser;

    jobboard_observability::init_pretty();
    cli::run(cli::Cli::parse()).await
}

#[cfg(target_arch = "wasm32")]
fn main() {}
