// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use crate::career_analysis::{ResumeAnalysis, ResumeAnalyzer, RoadmapOutcome};
use crate::config::EnvironmentConfig;
use crate::job_listings::{JobListing, JobScraper};
use anyhow::Result;
use rocket::data::{Limits, ToByteUnit};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::figment::Figment;
use rocket::form::Form;
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[post("/analyze_resume", data = "<upload>")]
pub async fn analyze_resume(
    upload: Form<ResumeUploadForm<'_>>,
    analyzer: &State<ResumeAnalyzer>,
) -> Result<Json<ResumeAnalysis>, Json<StandardErrorResponse>> {
    handlers::analyze_resume_handler(upload, analyzer).await
}

#[post("/get_job_postings", data = "<request>")]
pub async fn get_job_postings(
    request: Json<JobSearchRequest>,
    scraper: &State<JobScraper>,
) -> Result<Json<Vec<JobListing>>, Json<StandardErrorResponse>> {
    handlers::get_job_postings_handler(request, scraper).await
}

#[post("/generate_roadmap", data = "<request>")]
pub async fn generate_roadmap(
    request: Json<RoadmapRequest>,
    analyzer: &State<ResumeAnalyzer>,
) -> Result<Json<RoadmapOutcome>, Json<StandardErrorResponse>> {
    handlers::generate_roadmap_handler(request, analyzer).await
}

#[get("/health")]
pub async fn health() -> Json<&'static str> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
    ))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Request could not be processed".to_string(),
        "UNPROCESSABLE".to_string(),
        vec![
            "Send resume as a multipart file field".to_string(),
            "Send job_title as a form field".to_string(),
        ],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    ))
}

/// Rocket configuration for the given environment: address, port and a
/// 10 MiB upload limit.
pub fn server_figment(environment: &EnvironmentConfig) -> Figment {
    let limits = Limits::default()
        .limit("file", 10.mebibytes())
        .limit("data-form", 11.mebibytes());

    rocket::Config::figment()
        .merge(("address", environment.address))
        .merge(("port", environment.port))
        .merge(("limits", limits))
}

pub fn build_rocket(figment: Figment, analyzer: ResumeAnalyzer, scraper: JobScraper) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(Cors)
        .manage(analyzer)
        .manage(scraper)
        .register("/", catchers![bad_request, unprocessable, internal_error])
        .mount(
            "/",
            routes![
                analyze_resume,
                get_job_postings,
                generate_roadmap,
                health,
                options,
            ],
        )
}

// Main server start function
pub async fn start_web_server(
    environment: &EnvironmentConfig,
    analyzer: ResumeAnalyzer,
    scraper: JobScraper,
) -> Result<()> {
    info!("Starting resume insight API server");
    info!("Server: http://{}:{}", environment.address, environment.port);
    info!("Model: {}", environment.model);

    let _rocket = build_rocket(server_figment(environment), analyzer, scraper)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Server failed: {}", e))?;

    Ok(())
}
