use rpz_exporter_domain::PolicyHit;

/// Side channel for responses rewritten by a policy. Not part of the
/// counted state.
pub trait PolicyHitReporter: Send + Sync {
    fn report(&self, hit: &PolicyHit);
}
