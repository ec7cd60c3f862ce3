//! Appending error reports to a log file.
//!
//! Each report is a plain-text block:
//!
//! ```text
//! Date Created: Mon Oct 19 14:03:22 +00:00 2026
//!
//! Message: disk on fire
//! Location: src/main.rs
//! At Line: 42
//!
//! Exception:
//! config unreadable
//! Caused by: disk on fire
//!
//! ```

use std::error::Error;
use std::fs::OpenOptions;
use std::io::Write;
use std::panic::Location;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::ReportError;
use crate::fs::create_parent;
use crate::time::today_as_string;

/// Where reports go and whether they are echoed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Report log file; appended to, never truncated.
    pub output: PathBuf,
    /// Emit each report as a `tracing` error event as well.
    pub echo: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("logs/report.log"),
            echo: true,
        }
    }
}

/// Writes error reports to a file.
#[derive(Clone, Debug)]
pub struct Report {
    config: ReportConfig,
}

impl Report {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self::with_config(ReportConfig {
            output: output.into(),
            ..Default::default()
        })
    }

    pub fn with_config(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn output(&self) -> &Path {
        &self.config.output
    }

    /// Append a report for `err`, echoing it when configured.
    #[track_caller]
    pub fn create(&self, err: &dyn Error) -> Result<(), ReportError> {
        self.append(err, !self.config.echo, Location::caller())
    }

    /// Append a report for `err` without echoing it.
    #[track_caller]
    pub fn create_silent(&self, err: &dyn Error) -> Result<(), ReportError> {
        self.append(err, true, Location::caller())
    }

    fn append(
        &self,
        err: &dyn Error,
        silent: bool,
        location: &Location<'_>,
    ) -> Result<(), ReportError> {
        let output = &self.config.output;
        create_parent(output)?;

        let mut file = OpenOptions::new().create(true).append(true).open(output)?;
        file.write_all(render(err, location, &today_as_string()).as_bytes())?;
        debug!(path = %output.display(), "report written");

        if !silent {
            error!(
                report = %output.display(),
                file = location.file(),
                line = location.line(),
                "{err}"
            );
        }
        Ok(())
    }
}

/// Render one report block.
pub fn render(err: &dyn Error, location: &Location<'_>, created: &str) -> String {
    let message = match err.source() {
        Some(cause) => cause.to_string(),
        None => err.to_string(),
    };

    let mut out = format!(
        "Date Created: {created}\n\nMessage: {message}\nLocation: {}\nAt Line: {}\n\nException:\n{err}\n",
        location.file(),
        location.line(),
    );
    let mut cause = err.source();
    while let Some(current) = cause {
        out.push_str(&format!("Caused by: {current}\n"));
        cause = current.source();
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;

    #[derive(Debug, thiserror::Error)]
    #[error("config unreadable")]
    struct ConfigUnreadable {
        #[source]
        source: io::Error,
    }

    fn failure() -> ConfigUnreadable {
        ConfigUnreadable {
            source: io::Error::new(io::ErrorKind::Other, "disk on fire"),
        }
    }

    #[test]
    fn render_uses_cause_message_and_chain() {
        let location = Location::caller();
        let text = render(&failure(), location, "NOW");
        let expected = format!(
            "Date Created: NOW\n\nMessage: disk on fire\nLocation: {}\nAt Line: {}\n\n\
             Exception:\nconfig unreadable\nCaused by: disk on fire\n\n",
            location.file(),
            location.line()
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn render_without_source_uses_own_message() {
        let err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let text = render(&err, Location::caller(), "NOW");
        assert!(text.contains("Message: missing\n"));
        assert!(!text.contains("Caused by"));
    }

    #[test]
    fn create_appends_and_makes_parents() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("logs").join("report.log");
        let report = Report::new(&output);

        report.create_silent(&failure()).unwrap();
        report.create(&failure()).unwrap();

        let contents = fs::read_to_string(&output).unwrap();
        assert_eq!(contents.matches("Date Created: ").count(), 2);
        assert!(contents.contains(&format!("Location: {}", file!())));
    }

    #[test]
    fn config_defaults_and_serde() {
        let config = ReportConfig::default();
        assert_eq!(config.output, PathBuf::from("logs/report.log"));
        assert!(config.echo);

        let json = serde_json::to_string(&config).unwrap();
        let back: ReportConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
        assert_eq!(Report::with_config(back).output(), Path::new("logs/report.log"));
    }
}
