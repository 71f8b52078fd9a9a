use anyhow::bail;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

type Getter = Arc<dyn Fn() -> f64 + Send + Sync>;

/// A named, unit-labelled value that reporters poll on demand.
///
/// Name and unit are non-empty and fixed once the source is built.
#[derive(Clone)]
pub struct MetricSource {
    name: String,
    unit: String,
    getter: Getter,
}

/// One polled value of a `MetricSource`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub name: String,
    pub unit: String,
    pub value: f64,
}

impl MetricSource {
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        getter: impl Fn() -> f64 + Send + Sync + 'static,
    ) -> anyhow::Result<Self> {
        let name = name.into();
        let unit = unit.into();
        if name.trim().is_empty() {
            bail!("metric source name must not be empty");
        }
        if unit.trim().is_empty() {
            bail!("metric source '{}' has an empty unit", name);
        }
        Ok(Self::from_parts(name, unit, getter))
    }

    // Callers pass non-empty literals.
    fn from_parts(
        name: impl Into<String>,
        unit: impl Into<String>,
        getter: impl Fn() -> f64 + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            getter: Arc::new(getter),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn poll(&self) -> f64 {
        (self.getter)()
    }

    pub fn read(&self) -> Reading {
        Reading {
            name: self.name.clone(),
            unit: self.unit.clone(),
            value: self.poll(),
        }
    }
}

impl fmt::Debug for MetricSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricSource")
            .field("name", &self.name)
            .field("unit", &self.unit)
            .finish_non_exhaustive()
    }
}

/// Whole seconds elapsed since this call, reported as `uptime` in `seconds`.
pub fn uptime_source() -> MetricSource {
    let started_at = Instant::now();
    MetricSource::from_parts("uptime", "seconds", move || {
        started_at.elapsed().as_secs() as f64
    })
}
