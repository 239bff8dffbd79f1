//! Interactive running median
//!
//! Reads whole numbers from stdin and prints the median after each one.
//! Input ends at EOF or at the first token that isn't a number.

use std::io::{self, BufRead, Write};

use medians::RunningMedian;

fn main() -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(
        out,
        "Trying to find median.\nInput all numbers, or enter something that isn't a number (or EOF) to end:"
    )?;
    out.flush()?;

    let mut running = RunningMedian::new();

    for line in io::stdin().lock().lines() {
        let line = line?;

        for token in line.split_whitespace() {
            let Ok(n) = token.parse::<i64>() else {
                return Ok(());
            };

            running.push(n);
            if let Some(median) = running.median() {
                writeln!(out, "Current median value: {median}")?;
            }
        }

        out.flush()?;
    }

    Ok(())
}
