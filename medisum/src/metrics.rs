use prometheus::{Histogram, HistogramOpts, IntCounter, Opts, Registry};

/// Counters exposed on `/metrics`, shared by clone across handlers.
#[derive(Clone)]
pub struct Metrics {
    pub requests_total: IntCounter,
    pub rejected_total: IntCounter,
    pub duration_seconds: Histogram,
}

impl Metrics {
    pub fn new(registry: &Registry) -> prometheus::Result<Self> {
        let requests_total = IntCounter::with_opts(Opts::new(
            "summarize_requests_total",
            "Summarize requests received",
        ))?;
        let rejected_total = IntCounter::with_opts(Opts::new(
            "summarize_rejected_total",
            "Summarize requests rejected for missing input text",
        ))?;
        let duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "summarize_duration_seconds",
            "End-to-end summarize handler latency in seconds",
        ))?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(rejected_total.clone()))?;
        registry.register(Box::new(duration_seconds.clone()))?;

        Ok(Self {
            requests_total,
            rejected_total,
            duration_seconds,
        })
    }
}
