//! At-exit report for benchmark runs
//!
//! Dumps KPIs when a binary finishes, controlled by `ACK_REPORT` env var:
//! - Unset → no report, zero cost
//! - `1` → human-readable to stderr
//! - `json` → JSON to stderr
//! - `json:/path` → JSON to file
//!
//! The report describes the run; it never changes the computed value or a
//! successful exit status. JSON output requires the `report-json` feature
//! (enabled by default).

use std::io::Write;
use std::sync::OnceLock;

// =============================================================================
// Report Configuration (parsed from ACK_REPORT env var)
// =============================================================================

/// Output format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportFormat {
    Human,
    Json,
}

/// Output destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDestination {
    Stderr,
    File(String),
}

/// Parsed report configuration
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub format: ReportFormat,
    pub destination: ReportDestination,
}

impl ReportConfig {
    /// Parse from the ACK_REPORT environment variable
    pub fn from_env() -> Option<Self> {
        let val = std::env::var("ACK_REPORT").ok()?;
        Self::parse(&val)
    }

    fn parse(val: &str) -> Option<Self> {
        if val.is_empty() {
            return None;
        }

        match val {
            "0" => None,
            "1" => Some(ReportConfig {
                format: ReportFormat::Human,
                destination: ReportDestination::Stderr,
            }),
            "json" => Some(ReportConfig {
                format: ReportFormat::Json,
                destination: ReportDestination::Stderr,
            }),
            s if s.starts_with("json:") => {
                let path = s[5..].to_string();
                Some(ReportConfig {
                    format: ReportFormat::Json,
                    destination: ReportDestination::File(path),
                })
            }
            _ => {
                eprintln!("Warning: ACK_REPORT='{}' not recognized, ignoring", val);
                None
            }
        }
    }
}

static REPORT_CONFIG: OnceLock<Option<ReportConfig>> = OnceLock::new();

fn report_config() -> &'static Option<ReportConfig> {
    REPORT_CONFIG.get_or_init(ReportConfig::from_env)
}

// =============================================================================
// Report Data
// =============================================================================

/// Collected metrics for the report
#[derive(Debug)]
pub struct ReportData {
    pub wall_clock_ms: u64,
    /// The computed Ackermann value
    pub result: u64,
    /// Recurrence applications, when the run was instrumented
    pub calls: Option<u64>,
    /// Peak pending frames, when the run was instrumented
    pub peak_frames: Option<usize>,
}

// =============================================================================
// Formatting
// =============================================================================

fn format_human(data: &ReportData) -> String {
    let mut out = String::new();
    out.push_str("=== ACK REPORT ===\n");
    out.push_str(&format!("Wall clock:   {} ms\n", data.wall_clock_ms));
    out.push_str(&format!("Result:       {}\n", data.result));

    if let Some(calls) = data.calls {
        out.push_str(&format!("Calls:        {}\n", calls));
    }
    if let Some(peak) = data.peak_frames {
        out.push_str(&format!("Peak frames:  {}\n", peak));
    }

    out.push_str("==================\n");
    out
}

#[cfg(feature = "report-json")]
fn format_json(data: &ReportData) -> String {
    let mut map = serde_json::Map::new();
    map.insert(
        "wall_clock_ms".into(),
        serde_json::Value::Number(data.wall_clock_ms.into()),
    );
    map.insert(
        "result".into(),
        serde_json::Value::Number(data.result.into()),
    );

    if let Some(calls) = data.calls {
        map.insert("calls".into(), serde_json::Value::Number(calls.into()));
    }
    if let Some(peak) = data.peak_frames {
        map.insert(
            "peak_frames".into(),
            serde_json::Value::Number((peak as u64).into()),
        );
    }

    let obj = serde_json::Value::Object(map);
    serde_json::to_string(&obj).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(not(feature = "report-json"))]
fn format_json(_data: &ReportData) -> String {
    eprintln!(
        "Warning: ACK_REPORT=json requires the 'report-json' feature. Falling back to human format."
    );
    format_human(_data)
}

// =============================================================================
// Emission
// =============================================================================

/// Write the report for a finished run, if ACK_REPORT asks for one.
pub fn emit(data: &ReportData) {
    let Some(config) = report_config() else {
        return;
    };

    let text = match config.format {
        ReportFormat::Human => format_human(data),
        ReportFormat::Json => format_json(data),
    };

    match &config.destination {
        ReportDestination::Stderr => {
            let mut err = std::io::stderr().lock();
            let _ = writeln!(err, "{}", text.trim_end());
        }
        ReportDestination::File(path) => match std::fs::File::create(path) {
            Ok(mut file) => {
                let _ = writeln!(file, "{}", text.trim_end());
            }
            Err(e) => {
                eprintln!("Warning: cannot write ACK_REPORT file '{}': {}", path, e);
            }
        },
    }
}
