pub mod stdout;

pub use stdout::StdoutPolicyHitReporter;
