//! Spot price refresh metrics
//!
//! Tracks latency percentiles, success rate and fallback usage of the
//! oracle's refreshes.

use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::RwLock;

/// Maximum number of samples to keep for metrics calculation
const MAX_SAMPLES: usize = 100;

/// Refresh metrics for one oracle
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshMetrics {
    /// Name of the provider chain
    pub provider_name: String,
    /// 50th percentile latency of successful refreshes in milliseconds
    pub latency_p50_ms: f64,
    /// 99th percentile latency of successful refreshes in milliseconds
    pub latency_p99_ms: f64,
    /// Success rate (0.0 to 1.0)
    pub success_rate: f64,
    /// Total number of refreshes attempted
    pub total_refreshes: u64,
    /// Refreshes that ended on the static fallback
    pub fallback_refreshes: u64,
    /// Source of the most recent successful refresh
    pub last_source: Option<String>,
}

impl RefreshMetrics {
    /// Creates metrics with no data
    pub fn empty(provider_name: &str) -> Self {
        Self {
            provider_name: provider_name.to_string(),
            latency_p50_ms: 0.0,
            latency_p99_ms: 0.0,
            success_rate: 1.0,
            total_refreshes: 0,
            fallback_refreshes: 0,
            last_source: None,
        }
    }
}

#[derive(Debug, Clone)]
struct LatencySample {
    duration_ms: f64,
    success: bool,
}

#[derive(Debug, Default)]
struct MetricsState {
    samples: VecDeque<LatencySample>,
    total: u64,
    fallbacks: u64,
    last_source: Option<String>,
}

/// Collects and computes refresh metrics
#[derive(Debug)]
pub struct MetricsCollector {
    provider_name: String,
    state: RwLock<MetricsState>,
}

impl MetricsCollector {
    pub fn new(provider_name: &str) -> Self {
        Self {
            provider_name: provider_name.to_string(),
            state: RwLock::new(MetricsState {
                samples: VecDeque::with_capacity(MAX_SAMPLES),
                ..MetricsState::default()
            }),
        }
    }

    /// Records a live refresh from `source`
    pub async fn record_success(&self, duration: Duration, source: &str) {
        let mut state = self.state.write().await;
        state.last_source = Some(source.to_string());
        Self::push_sample(&mut state, duration, true);
    }

    /// Records a refresh where every source failed
    pub async fn record_fallback(&self, duration: Duration) {
        let mut state = self.state.write().await;
        state.fallbacks += 1;
        Self::push_sample(&mut state, duration, false);
    }

    fn push_sample(state: &mut MetricsState, duration: Duration, success: bool) {
        state.total += 1;
        if state.samples.len() >= MAX_SAMPLES {
            state.samples.pop_front();
        }
        state.samples.push_back(LatencySample {
            duration_ms: duration.as_secs_f64() * 1000.0,
            success,
        });
    }

    /// Computes current metrics from collected samples
    pub async fn get_metrics(&self) -> RefreshMetrics {
        let state = self.state.read().await;

        if state.total == 0 {
            return RefreshMetrics::empty(&self.provider_name);
        }

        let mut latencies: Vec<f64> = state
            .samples
            .iter()
            .filter(|s| s.success)
            .map(|s| s.duration_ms)
            .collect();
        latencies.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        RefreshMetrics {
            provider_name: self.provider_name.clone(),
            latency_p50_ms: percentile(&latencies, 50.0),
            latency_p99_ms: percentile(&latencies, 99.0),
            success_rate: (state.total - state.fallbacks) as f64 / state.total as f64,
            total_refreshes: state.total,
            fallback_refreshes: state.fallbacks,
            last_source: state.last_source.clone(),
        }
    }
}

/// Calculate percentile from sorted values
fn percentile(sorted_values: &[f64], p: f64) -> f64 {
    if sorted_values.is_empty() {
        return 0.0;
    }

    let idx = (p / 100.0 * (sorted_values.len() - 1) as f64).round() as usize;
    sorted_values[idx.min(sorted_values.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_metrics_collector() {
        let collector = MetricsCollector::new("failover");

        collector
            .record_success(Duration::from_millis(100), "goldprice.org")
            .await;
        collector
            .record_success(Duration::from_millis(200), "metals.live")
            .await;
        collector.record_fallback(Duration::from_millis(150)).await;

        let metrics = collector.get_metrics().await;

        assert_eq!(metrics.provider_name, "failover");
        assert_eq!(metrics.total_refreshes, 3);
        assert_eq!(metrics.fallback_refreshes, 1);
        assert_eq!(metrics.last_source.as_deref(), Some("metals.live"));
        assert!(metrics.success_rate > 0.6 && metrics.success_rate < 0.7);
        assert_eq!(metrics.latency_p99_ms, 200.0);
    }

    #[tokio::test]
    async fn test_empty_metrics() {
        let metrics = MetricsCollector::new("static").get_metrics().await;
        assert_eq!(metrics, RefreshMetrics::empty("static"));
    }

    #[test]
    fn test_percentile() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(percentile(&values, 50.0), 3.0);
        assert_eq!(percentile(&values, 99.0), 5.0);
        assert_eq!(percentile(&[], 50.0), 0.0);
    }
}
