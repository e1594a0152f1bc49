use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<LogFormat> = OnceCell::new();

/// Upper bounds, in microseconds, of the latency buckets. Slower requests
/// land in the overflow bucket.
pub const LATENCY_BUCKETS_MICROS: [u64; 4] = [100, 1_000, 10_000, 100_000];

/// How a request's guidance was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    Exact,
    Scored,
    /// Nothing matched and the generic guidance was served.
    Default,
    SafeFallback,
}

impl Resolution {
    const ALL: [Resolution; 4] = [
        Resolution::Exact,
        Resolution::Scored,
        Resolution::Default,
        Resolution::SafeFallback,
    ];

    fn slot(self) -> usize {
        self as usize
    }
}

/// Storage calls whose failure the assistant absorbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageOp {
    LoadProfile,
    AppendHistory,
}

#[derive(Debug, Default)]
pub struct GuidanceMetrics {
    resolutions: [AtomicU64; 4],
    personalized: AtomicU64,
    profile_load_failures: AtomicU64,
    history_write_failures: AtomicU64,
    latency_buckets: [AtomicU64; LATENCY_BUCKETS_MICROS.len() + 1],
    latency_sum_micros: AtomicU64,
    latency_max_micros: AtomicU64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub exact_total: u64,
    pub scored_total: u64,
    pub default_guidance_total: u64,
    pub safe_fallback_total: u64,
    pub personalized_total: u64,
    pub profile_load_failures: u64,
    pub history_write_failures: u64,
    /// Counts per `LATENCY_BUCKETS_MICROS` bound, then the overflow bucket.
    pub latency_buckets: Vec<u64>,
    pub avg_latency_micros: f64,
    pub max_latency_micros: u64,
}

impl GuidanceMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Records one handled request.
    pub fn record(&self, resolution: Resolution, personalized: bool, elapsed: Duration) {
        self.resolutions[resolution.slot()].fetch_add(1, Ordering::Relaxed);
        if personalized {
            self.personalized.fetch_add(1, Ordering::Relaxed);
        }

        let micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        let bucket = LATENCY_BUCKETS_MICROS
            .iter()
            .position(|bound| micros <= *bound)
            .unwrap_or(LATENCY_BUCKETS_MICROS.len());
        self.latency_buckets[bucket].fetch_add(1, Ordering::Relaxed);
        self.latency_sum_micros.fetch_add(micros, Ordering::Relaxed);
        self.latency_max_micros.fetch_max(micros, Ordering::Relaxed);
    }

    pub fn storage_failure(&self, op: StorageOp) {
        let counter = match op {
            StorageOp::LoadProfile => &self.profile_load_failures,
            StorageOp::AppendHistory => &self.history_write_failures,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn resolved(&self, resolution: Resolution) -> u64 {
        self.resolutions[resolution.slot()].load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let requests: u64 = Resolution::ALL.iter().map(|r| self.resolved(*r)).sum();
        let sum = self.latency_sum_micros.load(Ordering::Relaxed);

        MetricsSnapshot {
            requests_total: requests,
            exact_total: self.resolved(Resolution::Exact),
            scored_total: self.resolved(Resolution::Scored),
            default_guidance_total: self.resolved(Resolution::Default),
            safe_fallback_total: self.resolved(Resolution::SafeFallback),
            personalized_total: self.personalized.load(Ordering::Relaxed),
            profile_load_failures: self.profile_load_failures.load(Ordering::Relaxed),
            history_write_failures: self.history_write_failures.load(Ordering::Relaxed),
            latency_buckets: self
                .latency_buckets
                .iter()
                .map(|count| count.load(Ordering::Relaxed))
                .collect(),
            avg_latency_micros: if requests == 0 {
                0.0
            } else {
                sum as f64 / requests as f64
            },
            max_latency_micros: self.latency_max_micros.load(Ordering::Relaxed),
        }
    }
}

/// Log line layout, read from `LIFELINE_LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Compact,
}

impl LogFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "compact" | "text" => Some(Self::Compact),
            _ => None,
        }
    }

    fn from_env() -> Self {
        std::env::var("LIFELINE_LOG_FORMAT")
            .ok()
            .and_then(|value| Self::parse(&value))
            .unwrap_or(Self::Json)
    }
}

fn default_directives(binary: &str) -> String {
    format!("{binary}=info,lifeline_agents=info,lifeline_storage=warn,lifeline_core=warn")
}

/// Installs the stderr subscriber once; later calls return the format
/// already in use. `RUST_LOG` overrides the default directives.
pub fn init_tracing(binary: &str) -> LogFormat {
    *TRACING_INIT.get_or_init(|| {
        let format = LogFormat::from_env();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directives(binary)));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);

        // A subscriber installed elsewhere (tests, embedding hosts) wins.
        let _ = match format {
            LogFormat::Json => builder
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .try_init(),
            LogFormat::Compact => builder.compact().try_init(),
        };
        format
    })
}
