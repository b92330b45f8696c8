// src/web/handlers/job_handlers.rs
use crate::job_listings::{JobListing, JobScraper};
use crate::web::types::{JobSearchRequest, StandardErrorResponse};

use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

pub async fn get_job_postings_handler(
    request: Json<JobSearchRequest>,
    scraper: &State<JobScraper>,
) -> Result<Json<Vec<JobListing>>, Json<StandardErrorResponse>> {
    let job_title = request.job_title.trim();
    let location = request.location.trim();

    if job_title.is_empty() || location.is_empty() {
        return Err(Json(StandardErrorResponse::new(
            "Job title and location are required.".to_string(),
            "MISSING_FIELDS".to_string(),
            vec![
                "Provide a non-empty job_title".to_string(),
                "Provide a non-empty location".to_string(),
            ],
        )));
    }

    info!(
        "Job postings requested: {} in {} ({} keywords)",
        job_title,
        location,
        request.keywords.len()
    );

    let listings = scraper
        .fetch_listings(job_title, location, &request.keywords)
        .await;

    Ok(Json(listings))
}
