use anyhow::{anyhow, Context, Result};
use clap::Parser;
use client_core::{load_settings, render_brief, HttpGenerationService, WorkflowController};
use tracing_subscriber::EnvFilter;

/// Generate an SEO content brief for a keyword, and optionally the article.
#[derive(Parser, Debug)]
#[command(name = "microgen")]
struct Args {
    /// Keyword to build the brief for.
    keyword: String,
    /// Base URL of the generation service.
    #[arg(long)]
    service_url: Option<String>,
    /// Also generate the full article from the brief.
    #[arg(long)]
    article: bool,
    /// Print the brief as JSON instead of the formatted summary.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let settings = load_settings(args.service_url.as_deref())?;
    let service = HttpGenerationService::new(&settings.service_url)
        .with_context(|| format!("cannot use service url '{}'", settings.service_url))?;
    tracing::debug!(service_url = %settings.service_url, "using generation service");
    let mut controller = WorkflowController::new(service);

    controller.request_brief(&args.keyword).await?;
    if let Some(error) = controller.session().error() {
        return Err(anyhow!("{error}"));
    }
    let brief = controller
        .session()
        .brief()
        .ok_or_else(|| anyhow!("brief request finished without a brief"))?;

    if args.json {
        println!("{}", brief.to_pretty_json()?);
    } else {
        println!("{}", render_brief(brief).to_plain_text());
    }

    if args.article {
        controller.request_article().await?;
        if let Some(error) = controller.session().error() {
            return Err(anyhow!("{error}"));
        }
        if let Some(article) = controller.session().article() {
            println!();
            println!("{article}");
        }
    }

    Ok(())
}
