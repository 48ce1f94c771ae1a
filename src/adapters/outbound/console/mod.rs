/// Console adapters writing to stderr
mod alert_emitter;
mod progress_reporter;

pub use alert_emitter::ConsoleAlertEmitter;
pub use progress_reporter::StderrProgressReporter;
