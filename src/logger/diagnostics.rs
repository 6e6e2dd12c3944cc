/// Out-of-band channel for problems raised while the logger itself is
/// being constructed, when there is no logger to report through yet.
pub trait DiagnosticSink: Send + Sync {
    /// Reports one plain-text line.
    fn emit(&self, line: &str);
}

/// Default sink: the process standard error stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrDiagnostics;

impl DiagnosticSink for StderrDiagnostics {
    fn emit(&self, line: &str) {
        eprintln!("{line}");
    }
}
