use warp::{Filter, Rejection, Reply};

use crate::metrics::Metrics;
use crate::summarizer::MockSummarizer;

mod summarize;

pub fn routes(
    summarizer: MockSummarizer,
    metrics: Metrics,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let api = warp::path("api").and(warp::path("v1"));

    api.and(warp::path("summarize"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(64 * 1024))
        .and(warp::body::json())
        .and(with_summarizer(summarizer))
        .and(with_metrics(metrics))
        .and_then(summarize::handle_summarize)
}

fn with_summarizer(
    summarizer: MockSummarizer,
) -> impl Filter<Extract = (MockSummarizer,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || summarizer.clone())
}

fn with_metrics(
    metrics: Metrics,
) -> impl Filter<Extract = (Metrics,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || metrics.clone())
}
