use crate::config::Config;
use crate::error_response::ErrorResponse;
use crate::logger::TracingLogger;
use crate::metrics::{uptime_source, MetricSource};
use crate::metrics_sender::CounterRegistry;
use std::sync::Arc;
use tracing::info;

pub struct AppState {
    pub errors: ErrorResponse,
    pub counters: Arc<CounterRegistry>,
    pub sources: Vec<MetricSource>,
}

impl AppState {
    pub fn from_config(cfg: &Config) -> Self {
        let counters = Arc::new(CounterRegistry::new());
        let logger = Arc::new(TracingLogger::new(cfg.log_session()));
        let errors = ErrorResponse::new(logger, counters.clone());

        let sources = vec![uptime_source()];
        for s in &sources {
            info!("Registered metric source: name='{}' unit='{}'", s.name(), s.unit());
        }

        AppState {
            errors,
            counters,
            sources,
        }
    }

    pub fn source(&self, name: &str) -> Option<&MetricSource> {
        self.sources.iter().find(|s| s.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics_sender::MetricsSender;

    #[test]
    fn appstate_from_config_registers_uptime() {
        let st = AppState::from_config(&Config::default());
        assert_eq!(st.sources.len(), 1, "should register the uptime source");
        let uptime = st.source("uptime").expect("uptime source");
        assert_eq!(uptime.unit(), "seconds");
        assert!(st.source("missing").is_none());
    }

    #[test]
    fn responder_counts_into_shared_registry() {
        let st = AppState::from_config(&Config::default());
        let _ = st
            .errors
            .internal_server_error("boom", "db-unavailable", "could not reach database");
        st.counters.increment_counter("manual");
        assert_eq!(st.counters.count("db-unavailable"), 1);
        assert_eq!(st.counters.count("manual"), 1);
    }
}
