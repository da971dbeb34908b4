use std::io::Write;

use super::traits::Diagnostics;

/// Prefix carried by every diagnostic line, kept compatible with the
/// terminal's historical output format.
pub const DIAG_PREFIX: &str = "[PropellerTerminal]: ";

/// Diagnostics written as prefixed lines on standard error.
#[derive(Debug, Default)]
pub struct StderrDiagnostics;

impl Diagnostics for StderrDiagnostics {
    fn message(&mut self, text: &str) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}{}", DIAG_PREFIX, text);
        let _ = stderr.flush();
    }

    fn error(&mut self, text: &str) {
        self.message(&format!("ERROR: {}", text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_format() {
        assert_eq!(
            format!("{}{}", DIAG_PREFIX, "hello"),
            "[PropellerTerminal]: hello"
        );
        assert_eq!(
            format!("{}ERROR: {}", DIAG_PREFIX, "bad baud"),
            "[PropellerTerminal]: ERROR: bad baud"
        );
    }
}
