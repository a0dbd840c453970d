use rpz_exporter_application::ports::PolicyHitReporter;
use rpz_exporter_domain::PolicyHit;
use std::io::Write;

/// Prints one line per policy hit on standard output. Logs go to stderr,
/// so stdout carries nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutPolicyHitReporter;

impl StdoutPolicyHitReporter {
    pub fn new() -> Self {
        Self
    }
}

impl PolicyHitReporter for StdoutPolicyHitReporter {
    fn report(&self, hit: &PolicyHit) {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let _ = writeln!(out, "{}", hit);
    }
}
