use std::io::IsTerminal;

use crate::config;

pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("album-dupes: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent a run.
            eprintln!("album-dupes: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}

/// Columns available for the report.
pub fn report_width(report: &config::ReportSettings) -> u16 {
    if let Some(w) = report.width {
        return w.max(config::MIN_REPORT_WIDTH);
    }
    if std::io::stdout().is_terminal() {
        if let Ok((cols, _)) = crossterm::terminal::size() {
            if cols >= config::MIN_REPORT_WIDTH {
                return cols;
            }
        }
    }
    report.fallback_width
}
