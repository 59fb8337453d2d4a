//! Report generation for run and sweep results.

use std::fmt::Write as _;

use knapbench_core::Item;
use knapbench_solver::Algorithm;

use crate::result::{ComparisonRun, RunRecord, SweepKind, SweepResult};

/// Console text for finished runs.
///
/// Selected items are listed up to a preview bound; totals and time always
/// follow.
pub struct ConsoleReport;

impl ConsoleReport {
    /// Renders one run.
    ///
    /// # Example
    ///
    /// ```
    /// use knapbench_benchmark::{time_run, ConsoleReport};
    /// use knapbench_core::{Capacity, ItemSet};
    /// use knapbench_solver::Algorithm;
    ///
    /// let items = ItemSet::from_pairs(&[(2.0, 10.0), (3.0, 12.0), (5.0, 20.0)]).unwrap();
    /// let record = time_run(Algorithm::Greedy, &items, Capacity::new(5.0).unwrap());
    ///
    /// let text = ConsoleReport::run(&record, &items, 20);
    /// assert!(text.contains("item 1: weight 2.00, value 10.00"));
    /// assert!(text.contains("Total weight: 5.00, total value: 22.00"));
    /// ```
    pub fn run(record: &RunRecord, items: &[Item], preview_limit: usize) -> String {
        let mut output = String::new();
        let considered = &items[..record.item_count.min(items.len())];

        let _ = writeln!(
            output,
            "[{}] (items: {})",
            record.algorithm.label(),
            record.item_count
        );
        let _ = writeln!(output, "Selected items (id, weight, value):");

        let selected = record.solution.selection.count();
        for item in record.solution.selection.chosen(considered).take(preview_limit) {
            let _ = writeln!(output, "{item}");
        }
        if selected > preview_limit {
            let _ = writeln!(
                output,
                "(showing the first {preview_limit} of {selected} selected items)"
            );
        }

        let _ = writeln!(
            output,
            "Total weight: {:.2}, total value: {:.2}",
            record.solution.total_weight(),
            record.solution.total_value()
        );
        let _ = writeln!(output, "Elapsed: {:.2} ms", record.elapsed_ms());
        output
    }

    /// Renders every record of a comparison, separated by blank lines.
    pub fn comparison(run: &ComparisonRun, preview_limit: usize) -> String {
        let mut output = String::new();
        for record in &run.records {
            output.push_str(&Self::run(record, &run.items, preview_limit));
            output.push('\n');
        }
        output
    }

    /// Renders a sweep as an aligned millisecond table.
    pub fn sweep(result: &SweepResult) -> String {
        let mut output = String::new();
        let algorithms = result.kind.algorithms();

        let _ = write!(output, "{:>8}", "items");
        for algorithm in algorithms {
            let _ = write!(output, " {:>24}", algorithm.label());
        }
        output.push('\n');

        for row in &result.rows {
            let _ = write!(output, "{:>8}", row.item_count);
            for &algorithm in algorithms {
                match row.cell(algorithm) {
                    Some(cell) => {
                        let _ = write!(output, " {:>21.3} ms", cell.elapsed_ms());
                    }
                    None => {
                        let _ = write!(output, " {:>24}", "-");
                    }
                }
            }
            output.push('\n');
        }
        output
    }
}

/// CSV exporter for generated items.
///
/// # Example
///
/// ```
/// use knapbench_benchmark::ItemsCsv;
/// use knapbench_core::ItemSet;
///
/// let items = ItemSet::from_pairs(&[(2.0, 10.0), (3.5, 12.25)]).unwrap();
/// let csv = ItemsCsv::to_string(&items, 1000);
/// assert_eq!(csv, "物品编号,物品重量,物品价值\n1,2.00,10.00\n2,3.50,12.25\n");
/// ```
pub struct ItemsCsv;

impl ItemsCsv {
    pub const HEADER: &'static str = "物品编号,物品重量,物品价值";

    /// Exports the first `limit` items to a CSV string.
    pub fn to_string(items: &[Item], limit: usize) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "{}", Self::HEADER);
        for item in items.iter().take(limit) {
            let _ = writeln!(
                output,
                "{},{:.2},{:.2}",
                item.id(),
                item.weight(),
                item.value()
            );
        }
        output
    }
}

/// CSV exporter for sweep timings.
///
/// One row per item count; every time in milliseconds with three decimals.
pub struct SweepCsv;

impl SweepCsv {
    /// Header of the small sweep table.
    pub const SMALL_HEADER: &'static str =
        "物品数,蛮力法(ms),回溯法(ms),回溯剪枝(ms),动态规划(ms),贪心法(ms)";

    /// Header of the large sweep table.
    pub const LARGE_HEADER: &'static str = "物品数,动态规划(ms),快排贪心(ms),选择排序贪心(ms)";

    pub fn header(kind: SweepKind) -> &'static str {
        match kind {
            SweepKind::Small => Self::SMALL_HEADER,
            SweepKind::Large => Self::LARGE_HEADER,
        }
    }

    /// Exports a sweep to a CSV string.
    ///
    /// # Example
    ///
    /// ```
    /// use knapbench_benchmark::{SweepCell, SweepCsv, SweepKind, SweepResult, SweepRow};
    /// use knapbench_core::Capacity;
    /// use knapbench_solver::Algorithm;
    /// use std::time::Duration;
    ///
    /// let mut result = SweepResult::new(SweepKind::Large, Capacity::new(1000.0).unwrap());
    /// result.add_row(SweepRow {
    ///     item_count: 50,
    ///     cells: vec![
    ///         SweepCell { algorithm: Algorithm::DynamicProgramming, elapsed: Duration::from_micros(1250), value_units: 0 },
    ///         SweepCell { algorithm: Algorithm::Greedy, elapsed: Duration::from_micros(10), value_units: 0 },
    ///         SweepCell { algorithm: Algorithm::GreedySelectionSort, elapsed: Duration::from_micros(42), value_units: 0 },
    ///     ],
    /// });
    ///
    /// let csv = SweepCsv::to_string(&result);
    /// assert!(csv.ends_with("\n50,1.250,0.010,0.042\n"));
    /// ```
    pub fn to_string(result: &SweepResult) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "{}", Self::header(result.kind));

        for row in &result.rows {
            let _ = write!(output, "{}", row.item_count);
            // missing cells render as zero so rows keep the header width
            for &algorithm in result.kind.algorithms() {
                let ms = row.cell(algorithm).map_or(0.0, |c| c.elapsed_ms());
                let _ = write!(output, ",{:.3}", ms);
            }
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{SweepCell, SweepRow};
    use knapbench_core::{Capacity, ItemSet, Selection, Solution};
    use std::time::Duration;

    fn record_for(items: &[Item], picks: &[usize]) -> RunRecord {
        let selection = Selection::from_indices(items.len(), picks);
        RunRecord {
            algorithm: Algorithm::DynamicProgramming,
            item_count: items.len(),
            solution: Solution::from_selection(items, selection, 0),
            elapsed: Duration::from_micros(2500),
        }
    }

    #[test]
    fn test_run_report_lists_selected_items() {
        let items = ItemSet::from_pairs(&[(2.0, 10.0), (3.0, 12.0), (5.0, 20.0)]).unwrap();
        let text = ConsoleReport::run(&record_for(&items, &[0, 1]), &items, 20);

        assert!(text.starts_with("[Dynamic programming] (items: 3)\n"));
        assert!(text.contains("item 2: weight 3.00, value 12.00"));
        assert!(!text.contains("item 3:"));
        assert!(text.contains("Elapsed: 2.50 ms"));
        assert!(!text.contains("showing the first"));
    }

    #[test]
    fn test_run_report_preview_is_bounded() {
        let pairs: Vec<(f64, f64)> = (0..30).map(|_| (1.0, 100.0)).collect();
        let items = ItemSet::from_pairs(&pairs).unwrap();
        let all: Vec<usize> = (0..30).collect();
        let text = ConsoleReport::run(&record_for(&items, &all), &items, 20);

        assert_eq!(text.matches("item ").count(), 20);
        assert!(text.contains("(showing the first 20 of 30 selected items)"));
        assert!(text.contains("Total weight: 30.00, total value: 3000.00"));
    }

    #[test]
    fn test_items_csv_limit() {
        let pairs: Vec<(f64, f64)> = (0..5).map(|i| (1.0 + i as f64, 100.0)).collect();
        let items = ItemSet::from_pairs(&pairs).unwrap();
        let csv = ItemsCsv::to_string(&items, 3);

        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], ItemsCsv::HEADER);
        assert_eq!(lines[3], "3,3.00,100.00");
    }

    #[test]
    fn test_items_csv_empty() {
        assert_eq!(ItemsCsv::to_string(&[], 1000), "物品编号,物品重量,物品价值\n");
    }

    #[test]
    fn test_small_sweep_csv_columns() {
        let mut result = SweepResult::new(SweepKind::Small, Capacity::new(1000.0).unwrap());
        result.add_row(SweepRow {
            item_count: 5,
            cells: SweepKind::Small
                .algorithms()
                .iter()
                .enumerate()
                .map(|(i, &algorithm)| SweepCell {
                    algorithm,
                    elapsed: Duration::from_micros(1000 * i as u64 + 1),
                    value_units: 0,
                })
                .collect(),
        });

        let csv = SweepCsv::to_string(&result);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], SweepCsv::SMALL_HEADER);
        assert_eq!(lines[1], "5,0.001,1.001,2.001,3.001,4.001");
        assert_eq!(lines[1].split(',').count(), lines[0].split(',').count());
    }

    #[test]
    fn test_sweep_console_table() {
        let mut result = SweepResult::new(SweepKind::Large, Capacity::new(1000.0).unwrap());
        result.add_row(SweepRow {
            item_count: 50,
            cells: vec![SweepCell {
                algorithm: Algorithm::Greedy,
                elapsed: Duration::from_micros(125),
                value_units: 0,
            }],
        });

        let table = ConsoleReport::sweep(&result);
        assert!(table.contains("Dynamic programming"));
        assert!(table.contains("0.125 ms"));
        assert!(table.contains(" -"));
    }
}
