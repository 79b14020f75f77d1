use tokio::time::Instant;
use tracing::info;
use uuid::Uuid;
use warp::{Rejection, Reply};

use crate::error::ApiError;
use crate::metrics::Metrics;
use crate::models::SummarizeRequest;
use crate::summarizer::MockSummarizer;

pub async fn handle_summarize(
    request: SummarizeRequest,
    summarizer: MockSummarizer,
    metrics: Metrics,
) -> Result<impl Reply, Rejection> {
    let request_id = Uuid::new_v4();
    metrics.requests_total.inc();

    if request.text.is_empty() {
        metrics.rejected_total.inc();
        return Err(warp::reject::custom(ApiError::BadRequest(
            "Medical query text is required".to_string(),
        )));
    }

    info!(
        "Processing summarize request [{}] ({} chars)",
        request_id,
        request.text.len()
    );

    let started = Instant::now();
    let result = summarizer.summarize(&request.text).await;
    metrics.duration_seconds.observe(started.elapsed().as_secs_f64());

    info!(
        "Completed summarize request [{}] in {:?}",
        request_id,
        started.elapsed()
    );

    Ok(warp::reply::json(&result))
}
