#![allow(dead_code)]

use rpz_exporter_application::ports::{
    MetricsExporter, PolicyCount, PolicyCounter, PolicyHitReporter,
};
use rpz_exporter_domain::{DomainError, PolicyHit};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockPolicyCounter {
    counts: Arc<Mutex<HashMap<(String, String), u64>>>,
    fail: Arc<Mutex<bool>>,
}

impl MockPolicyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    pub fn total(&self) -> u64 {
        self.counts.lock().unwrap().values().sum()
    }

    pub fn insert(&self, policy: &str, resolver: &str, count: u64) {
        self.counts
            .lock()
            .unwrap()
            .insert((policy.to_string(), resolver.to_string()), count);
    }
}

impl PolicyCounter for MockPolicyCounter {
    fn increment(&self, policy: &str, resolver: &str) -> Result<(), DomainError> {
        if *self.fail.lock().unwrap() {
            return Err(DomainError::Metrics("mock counter failure".to_string()));
        }
        *self
            .counts
            .lock()
            .unwrap()
            .entry((policy.to_string(), resolver.to_string()))
            .or_insert(0) += 1;
        Ok(())
    }

    fn snapshot(&self) -> Vec<PolicyCount> {
        self.counts
            .lock()
            .unwrap()
            .iter()
            .map(|((policy, resolver), count)| PolicyCount {
                policy: policy.clone(),
                resolver: resolver.clone(),
                count: *count,
            })
            .collect()
    }
}

#[derive(Clone, Default)]
pub struct MockPolicyHitReporter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MockPolicyHitReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl PolicyHitReporter for MockPolicyHitReporter {
    fn report(&self, hit: &PolicyHit) {
        self.lines.lock().unwrap().push(hit.to_string());
    }
}

pub struct MockMetricsExporter {
    body: Result<String, DomainError>,
}

impl MockMetricsExporter {
    pub fn returning(body: &str) -> Self {
        Self {
            body: Ok(body.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self {
            body: Err(DomainError::Metrics("encoder failed".to_string())),
        }
    }
}

impl MetricsExporter for MockMetricsExporter {
    fn encode_text(&self) -> Result<String, DomainError> {
        self.body.clone()
    }
}
