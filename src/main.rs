//! Command-line front-end for the research engine.

use anyhow::Context;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tech_scout::analyzer::RepoStructureAnalyzer;
use tech_scout::config::{Config, DedupPolicy};
use tech_scout::models::ResearchQuery;
use tech_scout::orchestrator::ResearchOrchestrator;

#[derive(Parser)]
#[command(name = "tech-scout", version, about = "Multi-source technology research")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Research a technology across repositories, documentation, and code
    Research {
        /// Technology to investigate (e.g. "React")
        technology: String,

        /// What you intend to build with it
        #[arg(long, default_value = "")]
        purpose: String,

        /// Constraint to factor into recommendations (repeatable)
        #[arg(long = "constraint")]
        constraints: Vec<String>,

        /// Drop resources whose URL was already seen from another source
        #[arg(long)]
        dedup: bool,

        /// Overall deadline for the operation, in seconds
        #[arg(long)]
        deadline: Option<u64>,

        /// Emit the raw result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Clone a repository and report its structure (inspection is stubbed)
    Analyze {
        /// Repository URL to clone
        repo_url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new("tech_scout=info")
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Research {
            technology,
            purpose,
            constraints,
            dedup,
            deadline,
            json,
        } => {
            let mut config = Config::default();
            if dedup {
                config.dedup = DedupPolicy::ByUrl;
            }
            config.deadline_secs = deadline;

            let query = ResearchQuery {
                technology,
                purpose,
                constraints,
            };

            let orchestrator =
                ResearchOrchestrator::from_config(&config).context("building orchestrator")?;
            let result = orchestrator
                .research_topic(&query)
                .await
                .context("running research")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            println!("{}", "Summary".bold().underline());
            println!("{}\n", result.summary);

            println!("{}", "Recommendations".bold().underline());
            for (i, rec) in result.recommendations.iter().enumerate() {
                println!("  {}. {}", i + 1, rec);
            }

            if !result.resources.is_empty() {
                println!("\n{}", "Resources".bold().underline());
                for resource in &result.resources {
                    println!(
                        "  [{:.2}] {} {} ({})",
                        resource.relevance,
                        resource.kind.to_string().cyan(),
                        resource.title,
                        resource.url.dimmed()
                    );
                }
            }

            if !result.code_examples.is_empty() {
                println!("\n{}", "Code examples".bold().underline());
                for example in &result.code_examples {
                    println!("  {} — {}", example.language.green(), example.description);
                    println!("  {}", example.source.dimmed());
                }
            }
        }

        Command::Analyze { repo_url } => {
            let analyzer = RepoStructureAnalyzer::new();
            let report = analyzer
                .analyze(&repo_url)
                .await
                .context("analyzing repository")?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
