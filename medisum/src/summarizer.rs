// Mock summarizer: simulated delay, template interpolation, fabricated metrics

use std::ops::{Range, RangeInclusive};
use std::time::Duration;

use rand::Rng;
use tracing::info;

use crate::models::{ModelInfo, SummaryResult};
use crate::prose;

/// Reported as `modelInfo.processingTime`, independent of the real delay.
const PROCESSING_TIME_MS: Range<u64> = 1500..2500;
const CONFIDENCE_PCT: RangeInclusive<u8> = 90..=99;

#[derive(Clone)]
pub struct MockSummarizer {
    delay: Duration,
}

impl MockSummarizer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Produce the dual summary for `query` after the simulated delay.
    ///
    /// The query text lands verbatim inside both summary bodies; the numeric
    /// fields are drawn uniformly from the documented ranges on every call.
    pub async fn summarize(&self, query: &str) -> SummaryResult {
        info!("Summarizer: generating dual summaries");

        tokio::time::sleep(self.delay).await;

        let mut rng = rand::thread_rng();

        SummaryResult {
            patient: prose::patient_summary(query),
            clinician: prose::clinician_summary(query),
            sources: prose::SOURCES.iter().map(|s| s.to_string()).collect(),
            model_info: ModelInfo {
                architecture: prose::ARCHITECTURE.to_string(),
                processing_time: rng.gen_range(PROCESSING_TIME_MS),
                confidence: rng.gen_range(CONFIDENCE_PCT),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn result_quotes_query_and_carries_fixed_sources() {
        let summarizer = MockSummarizer::new(Duration::ZERO);
        let query = "what are the side effects of metformin?";

        let result = summarizer.summarize(query).await;

        assert!(result.patient.contains(query));
        assert!(result.clinician.contains(query));
        assert_eq!(result.sources, prose::SOURCES);
        assert_eq!(result.model_info.architecture, prose::ARCHITECTURE);
    }

    #[tokio::test]
    async fn fabricated_metrics_stay_in_range() {
        let summarizer = MockSummarizer::new(Duration::ZERO);

        for _ in 0..50 {
            let result = summarizer.summarize("hypertension").await;
            assert!(PROCESSING_TIME_MS.contains(&result.model_info.processing_time));
            assert!(CONFIDENCE_PCT.contains(&result.model_info.confidence));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn waits_the_configured_delay() {
        let delay = Duration::from_millis(2000);
        let summarizer = MockSummarizer::new(delay);

        let started = tokio::time::Instant::now();
        summarizer.summarize("anxiety symptoms").await;

        assert!(started.elapsed() >= delay);
    }
}
