//! Event-to-line formatting.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;

use crate::EventVisitor;

pub(crate) fn format_event(v: &EventVisitor, elapsed_secs: f64) -> String {
    let event = v.event.as_deref().unwrap_or("");

    let body = match event {
        "harness_ready" => format_harness_ready(v),
        "sweep_start" => format_sweep_start(v),
        "sweep_row" => format_sweep_row(v),
        "sweep_end" => format_sweep_end(v),
        "csv_written" => format_csv_written(v),
        "csv_failed" => format_csv_failed(v),
        "optimum_mismatch" => format_optimum_mismatch(v),
        "enumeration_truncated" => format_truncated(v),
        "solve_end" => format_solve_end(v),
        _ => return String::new(),
    };

    format!("{} {}", format_elapsed(elapsed_secs), body)
}

fn format_elapsed(secs: f64) -> String {
    format!("{:>7.3}s", secs).bright_black().to_string()
}

// Seed stays ungrouped so it can be pasted back into `--seed`.
fn format_harness_ready(v: &EventVisitor) -> String {
    let seed = v
        .seed
        .map(|seed| seed.to_string())
        .unwrap_or_else(|| "?".to_string());

    format!(
        "{} Ready │ seed {}",
        "●".bright_green().bold(),
        seed.bright_yellow()
    )
}

fn format_sweep_start(v: &EventVisitor) -> String {
    let sweep = v.sweep.as_deref().unwrap_or("sweep");
    let sizes = v.sizes.unwrap_or(0);
    let capacity = v.capacity.unwrap_or(0.0);

    format!(
        "{} {} sweep │ {} sizes │ capacity {}",
        "▶".bright_green().bold(),
        sweep.white().bold(),
        sizes.to_formatted_string(&Locale::en).bright_yellow(),
        format!("{:.2}", capacity).bright_yellow()
    )
}

fn format_sweep_row(v: &EventVisitor) -> String {
    let items = v.items.unwrap_or(0);
    let elapsed = v.elapsed_ms.unwrap_or(0.0);

    format!(
        "{} {:>8} items │ {}",
        "·".bright_cyan(),
        items.to_formatted_string(&Locale::en).white(),
        format_millis(elapsed).yellow()
    )
}

fn format_sweep_end(v: &EventVisitor) -> String {
    let sweep = v.sweep.as_deref().unwrap_or("sweep");
    let rows = v.rows.unwrap_or(0);
    let elapsed = v.elapsed_ms.unwrap_or(0.0);

    format!(
        "{} {} sweep complete │ {} rows │ {}",
        "■".bright_cyan().bold(),
        sweep.white().bold(),
        rows.to_formatted_string(&Locale::en).white(),
        format_millis(elapsed).yellow()
    )
}

fn format_csv_written(v: &EventVisitor) -> String {
    let path = v.path.as_deref().unwrap_or("?");
    let rows = v.rows.unwrap_or(0);

    format!(
        "{} wrote {} │ {} rows",
        "✓".bright_green(),
        path.bright_white(),
        rows.to_formatted_string(&Locale::en).white()
    )
}

fn format_csv_failed(v: &EventVisitor) -> String {
    let path = v.path.as_deref().unwrap_or("?");
    let error = v.error.as_deref().unwrap_or("unknown error");

    format!(
        "{} could not write {} │ {}",
        "✗".bright_red().bold(),
        path.bright_white(),
        error.bright_red()
    )
}

fn format_optimum_mismatch(v: &EventVisitor) -> String {
    let solver = v.solver.as_deref().unwrap_or("?");

    format!(
        "{} {} disagrees at {} items │ expected {} │ got {}",
        "!".bright_red().bold(),
        solver.white().bold(),
        v.items.unwrap_or(0).to_formatted_string(&Locale::en),
        format_units(v.expected.unwrap_or(0)).bright_green(),
        format_units(v.actual.unwrap_or(0)).bright_red()
    )
}

fn format_truncated(v: &EventVisitor) -> String {
    let solver = v.solver.as_deref().unwrap_or("?");

    format!(
        "{} {} enumerates only the first {} of {} items",
        "!".yellow().bold(),
        solver.white().bold(),
        v.considered.unwrap_or(0).to_formatted_string(&Locale::en),
        v.items.unwrap_or(0).to_formatted_string(&Locale::en)
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let solver = v.solver.as_deref().unwrap_or("?");

    format!(
        "{} {} │ {} items │ {} steps │ value {}",
        "◀".bright_blue(),
        solver.white(),
        v.items.unwrap_or(0).to_formatted_string(&Locale::en),
        v.steps
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta(),
        format_units(v.value.unwrap_or(0)).bright_green()
    )
}

/// Renders hundredths as a grouped decimal, e.g. `123456` as `1,234.56`.
pub(crate) fn format_units(units: u64) -> String {
    format!(
        "{}.{:02}",
        (units / 100).to_formatted_string(&Locale::en),
        units % 100
    )
}

pub(crate) fn format_millis(ms: f64) -> String {
    if ms < 1000.0 {
        format!("{:.3}ms", ms)
    } else if ms < 60_000.0 {
        format!("{:.2}s", ms / 1000.0)
    } else {
        let whole = ms as u64;
        format!("{}m {}s", whole / 60_000, (whole % 60_000) / 1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(event: &str) -> EventVisitor {
        EventVisitor {
            event: Some(event.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(0), "0.00");
        assert_eq!(format_units(2200), "22.00");
        assert_eq!(format_units(123_456_789), "1,234,567.89");
    }

    #[test]
    fn test_format_millis() {
        assert_eq!(format_millis(0.125), "0.125ms");
        assert_eq!(format_millis(2500.0), "2.50s");
        assert_eq!(format_millis(125_000.0), "2m 5s");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        assert!(format_event(&visitor("phase_start"), 0.0).is_empty());
        assert!(format_event(&EventVisitor::default(), 0.0).is_empty());
    }

    #[test]
    fn test_harness_ready_shows_seed() {
        let mut v = visitor("harness_ready");
        v.seed = Some(18_446_744_073_709_551_557);
        let line = format_event(&v, 0.0);
        assert!(line.contains("seed"));
        assert!(line.contains("18446744073709551557"));
    }

    #[test]
    fn test_solve_end() {
        let mut v = visitor("solve_end");
        v.solver = Some("Greedy".to_string());
        v.steps = Some(1500);
        let line = format_event(&v, 0.0);
        assert!(line.contains("Greedy"));
        assert!(line.contains("1,500"));
    }

    #[test]
    fn test_csv_failed_carries_path_and_error() {
        let mut v = visitor("csv_failed");
        v.path = Some("out/items.csv".to_string());
        v.error = Some("permission denied".to_string());
        let line = format_event(&v, 1.0);
        assert!(line.contains("out/items.csv"));
        assert!(line.contains("permission denied"));
    }

    #[test]
    fn test_mismatch_shows_both_values() {
        let mut v = visitor("optimum_mismatch");
        v.solver = Some("DynamicProgramming".to_string());
        v.items = Some(12);
        v.expected = Some(4800);
        v.actual = Some(3000);
        let line = format_event(&v, 0.0);
        assert!(line.contains("48.00"));
        assert!(line.contains("30.00"));
    }
}
