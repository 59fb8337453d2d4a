//! Interactive menu loop.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use knapbench_benchmark::{ConsoleReport, Harness, HarnessError, Mode};
use knapbench_core::Capacity;

/// Whether the loop keeps going after a mode finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Reads menu choices from `input` and writes reports to `output`.
///
/// Malformed entries are reported and asked again. End of input ends the
/// loop the same way as choosing 0.
pub struct Menu<R, W> {
    harness: Harness,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(harness: Harness, input: R, output: W) -> Self {
        Self {
            harness,
            input,
            output,
        }
    }

    /// Runs until exit or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        while self.step()? == Flow::Continue {}
        Ok(())
    }

    fn step(&mut self) -> io::Result<Flow> {
        let Some(mode) = self.prompt(&menu_text(), parse_mode)? else {
            return Ok(Flow::Exit);
        };

        match mode {
            Mode::Exit => {
                writeln!(self.output, "Program exited.")?;
                Ok(Flow::Exit)
            }
            Mode::SmallSweep => self.sweep(Mode::SmallSweep),
            Mode::LargeSweep => self.sweep(Mode::LargeSweep),
            Mode::CompareAll => self.compare_all(),
            single => self.single(single),
        }
    }

    fn single(&mut self, mode: Mode) -> io::Result<Flow> {
        let Some(algorithm) = mode.algorithm() else {
            return Ok(Flow::Continue);
        };

        let count_prompt = if mode.caps_item_count() {
            format!(
                "Enter the number of items (suggested {} or fewer): ",
                self.harness.config().exhaustive_item_cap
            )
        } else {
            "Enter the number of items (e.g. 1000, 2000, 5000): ".to_string()
        };
        let Some(mut count) = self.prompt(&count_prompt, parse_count)? else {
            return Ok(Flow::Exit);
        };

        if mode.caps_item_count() {
            let cap = self.harness.exhaustive_count(count);
            if cap < count {
                writeln!(
                    self.output,
                    "Warning: too many items makes this algorithm extremely slow; using {cap}."
                )?;
                count = cap;
            }
        }

        let Some(capacity) = self.prompt(CAPACITY_PROMPT, parse_capacity)? else {
            return Ok(Flow::Exit);
        };

        let run = self.harness.run_single(algorithm, count, capacity);
        let preview = self.harness.config().preview_limit;
        for record in &run.records {
            write!(self.output, "{}", ConsoleReport::run(record, &run.items, preview))?;
        }
        writeln!(self.output)?;

        let written = self.harness.write_items_csv(&run.items);
        self.report_items_csv(written, run.items.len())?;
        Ok(Flow::Continue)
    }

    fn compare_all(&mut self) -> io::Result<Flow> {
        let Some(count) = self.prompt(
            "Enter the number of items (e.g. 1000, 2000, 5000): ",
            parse_count,
        )?
        else {
            return Ok(Flow::Exit);
        };
        let Some(capacity) = self.prompt(CAPACITY_PROMPT, parse_capacity)? else {
            return Ok(Flow::Exit);
        };

        let cap = self.harness.exhaustive_count(count);
        if cap < count {
            writeln!(
                self.output,
                "Brute force and backtracking use the first {cap} items; the others use all {count}."
            )?;
        }

        let run = self.harness.run_all(count, capacity);
        let preview = self.harness.config().preview_limit;
        write!(self.output, "{}", ConsoleReport::comparison(&run, preview))?;

        let written = self.harness.write_items_csv(&run.items);
        self.report_items_csv(written, run.items.len())?;
        Ok(Flow::Continue)
    }

    fn sweep(&mut self, mode: Mode) -> io::Result<Flow> {
        writeln!(self.output, "Running {}...", mode.label())?;
        let result = if mode == Mode::SmallSweep {
            self.harness.small_sweep()
        } else {
            self.harness.large_sweep()
        };

        let result = match result {
            Ok(result) => result,
            Err(e) => {
                writeln!(self.output, "Cannot run the sweep: {e}")?;
                return Ok(Flow::Continue);
            }
        };
        write!(self.output, "{}", ConsoleReport::sweep(&result))?;

        match self.harness.write_sweep_csv(&result) {
            Ok(path) => writeln!(self.output, "Generated {}.", path.display())?,
            Err(e) => writeln!(self.output, "Could not create the CSV file: {e}")?,
        }
        self.report_cwd()?;
        Ok(Flow::Continue)
    }

    fn report_items_csv(
        &mut self,
        written: Result<PathBuf, HarnessError>,
        item_count: usize,
    ) -> io::Result<()> {
        match written {
            Ok(path) => {
                let saved = item_count.min(self.harness.config().item_csv_limit);
                writeln!(
                    self.output,
                    "Generated {} (first {saved} items, opens in Excel).",
                    path.display()
                )?;
            }
            Err(e) => writeln!(self.output, "Could not create the items file: {e}")?,
        }
        self.report_cwd()
    }

    fn report_cwd(&mut self) -> io::Result<()> {
        match std::env::current_dir() {
            Ok(cwd) => writeln!(self.output, "Current working directory: {}", cwd.display()),
            Err(e) => writeln!(self.output, "Current working directory unavailable: {e}"),
        }
    }

    /// Shows `text` and reads lines until `parse` accepts one.
    ///
    /// Returns `None` at end of input.
    fn prompt<T>(&mut self, text: &str, parse: fn(&str) -> Option<T>) -> io::Result<Option<T>> {
        let mut line = String::new();
        loop {
            write!(self.output, "{text}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }
            match parse(line.trim()) {
                Some(value) => return Ok(Some(value)),
                None => writeln!(self.output, "Invalid input, please try again.")?,
            }
        }
    }
}

const CAPACITY_PROMPT: &str = "Enter the knapsack capacity (e.g. 10000.00, 100000.00, 1000000.00): ";

fn menu_text() -> String {
    let mut text = String::from("Choose an algorithm:\n");
    for mode in Mode::MENU {
        text.push_str(&mode.to_string());
        text.push('\n');
    }
    text.push_str("Enter a number: ");
    text
}

fn parse_mode(s: &str) -> Option<Mode> {
    s.parse().ok().and_then(Mode::from_menu)
}

fn parse_count(s: &str) -> Option<usize> {
    s.parse().ok()
}

fn parse_capacity(s: &str) -> Option<Capacity> {
    s.parse().ok().and_then(|amount| Capacity::new(amount).ok())
}
