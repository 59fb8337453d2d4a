//! Colorful console output for harness events.
//!
//! Provides a custom `tracing` layer that formats sweep, file and solver
//! events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Sweep lifecycle and CSV output
//! - **WARN**: Failed writes, solver disagreement, truncated enumeration
//! - **DEBUG**: One line per solver run

mod format;

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when `RUST_LOG` is unset or empty.
const DEFAULT_FILTER: &str = "knapbench_benchmark=info,knapbench_solver=warn";

/// Initializes the harness console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing. `RUST_LOG` replaces the
/// default filter entirely, so `RUST_LOG=knapbench_solver=debug` shows
/// one line per solver run.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let filter = build_filter(rust_log.as_deref());

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(HarnessConsoleLayer)
            .try_init();
    });
}

fn filter_spec(rust_log: Option<&str>) -> &str {
    match rust_log.map(str::trim) {
        Some(spec) if !spec.is_empty() => spec,
        _ => DEFAULT_FILTER,
    }
}

// An unparsable `RUST_LOG` falls back to the default filter.
fn build_filter(rust_log: Option<&str>) -> EnvFilter {
    EnvFilter::try_new(filter_spec(rust_log)).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

// Seconds since `init`.
fn elapsed_secs() -> f64 {
    EPOCH
        .get()
        .map(|epoch| epoch.elapsed().as_secs_f64())
        .unwrap_or(0.0)
}

fn print_banner() {
    let banner = r#"
 _                    _                     _
| | ___ __   __ _ _ __ | |__   ___ _ __   ___| |__
| |/ / '_ \ / _` | '_ \| '_ \ / _ \ '_ \ / __| '_ \
|   <| | | | (_| | |_) | |_) |  __/ | | | (__| | | |
|_|\_\_| |_|\__,_| .__/|_.__/ \___|_| |_|\___|_| |_|
                 |_|
"#;

    let version_line = format!(
        "              v{} - 0/1 Knapsack Algorithm Benchmark\n",
        VERSION
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats harness events with colors.
pub struct HarnessConsoleLayer;

impl<S: Subscriber> Layer<S> for HarnessConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("knapbench") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format::format_event(&visitor, elapsed_secs());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
pub(crate) struct EventVisitor {
    event: Option<String>,
    sweep: Option<String>,
    solver: Option<String>,
    path: Option<String>,
    error: Option<String>,
    seed: Option<u64>,
    items: Option<u64>,
    considered: Option<u64>,
    sizes: Option<u64>,
    rows: Option<u64>,
    steps: Option<u64>,
    value: Option<u64>,
    expected: Option<u64>,
    actual: Option<u64>,
    capacity: Option<f64>,
    elapsed_ms: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "seed" => self.seed = Some(value),
            "items" => self.items = Some(value),
            "considered" => self.considered = Some(value),
            "sizes" => self.sizes = Some(value),
            "rows" => self.rows = Some(value),
            "steps" => self.steps = Some(value),
            "value" => self.value = Some(value),
            "expected" => self.expected = Some(value),
            "actual" => self.actual = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "capacity" => self.capacity = Some(value),
            "elapsed_ms" => self.elapsed_ms = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "sweep" => self.sweep = Some(value.to_string()),
            "solver" => self.solver = Some(value.to_string()),
            "path" => self.path = Some(value.to_string()),
            "error" => self.error = Some(value.to_string()),
            _ => {}
        }
    }
}
