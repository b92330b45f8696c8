// src/cli.rs
use crate::career_analysis::{GeminiClient, ResumeAnalyzer};
use crate::config::AppConfig;
use crate::document::{extract_resume_text, is_pdf};
use crate::job_listings::{JobListing, JobScraper};
use crate::web::start_web_server;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "resume-insight")]
#[command(about = "Score resumes against a job title, suggest a learning roadmap and find job postings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API (default)
    Serve,
    /// Analyze a resume file against a job title
    Analyze {
        #[arg(long)]
        resume: PathBuf,
        #[arg(long)]
        job_title: String,
    },
    /// Generate a learning roadmap for a field of interest
    Roadmap {
        #[arg(long)]
        field: String,
    },
    /// Fetch job postings from the public search page
    Jobs {
        #[arg(long)]
        title: String,
        #[arg(long)]
        location: String,
        #[arg(long = "keyword")]
        keywords: Vec<String>,
        /// Show at most this many postings
        #[arg(long)]
        limit: Option<usize>,
    },
}

pub async fn handle_command(cli: Cli, config: AppConfig) -> Result<()> {
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let analyzer = build_analyzer(&config)?;
            let scraper = JobScraper::with_search_url(&config.environment.job_search_url)?;
            start_web_server(&config.environment, analyzer, scraper).await
        }

        Command::Analyze { resume, job_title } => {
            let analyzer = build_analyzer(&config)?;
            let bytes = tokio::fs::read(&resume)
                .await
                .with_context(|| format!("Failed to read resume: {}", resume.display()))?;
            let pdf = is_pdf(resume.to_str(), false);
            let resume_text = extract_resume_text(bytes, pdf).await?;

            let analysis = analyzer.analyze_resume(&resume_text, &job_title).await;
            if analysis.is_degraded() {
                info!("Analysis degraded to fallback payload");
            }
            print_json(&analysis)
        }

        Command::Roadmap { field } => {
            let analyzer = build_analyzer(&config)?;
            let outcome = analyzer.generate_roadmap(&field).await;

            match outcome.typed() {
                Some(Ok(roadmap)) => info!(
                    "Roadmap: {} tutorials, {} certifications, {} projects",
                    roadmap.tutorials.len(),
                    roadmap.certifications.len(),
                    roadmap.projects.len()
                ),
                Some(Err(e)) => info!("Roadmap does not match the documented shape: {}", e),
                None => {}
            }
            print_json(&outcome)
        }

        Command::Jobs {
            title,
            location,
            keywords,
            limit,
        } => {
            let scraper = JobScraper::with_search_url(&config.environment.job_search_url)?;
            let listings = fetch_jobs(&scraper, &title, &location, &keywords, limit).await;
            print_json(&listings)
        }
    }
}

async fn fetch_jobs(
    scraper: &JobScraper,
    title: &str,
    location: &str,
    keywords: &[String],
    limit: Option<usize>,
) -> Vec<JobListing> {
    let mut listings = scraper.fetch_listings(title, location, keywords).await;
    if let Some(limit) = limit {
        listings.truncate(limit);
    }
    listings
}

fn build_analyzer(config: &AppConfig) -> Result<ResumeAnalyzer> {
    let client = GeminiClient::new(config.model_config()?)?;
    info!("Using model {}", client.model());
    Ok(ResumeAnalyzer::new(Arc::new(client)))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
