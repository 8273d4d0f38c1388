//! CLI summary presenter.

use console::style;

use pizzaduel_core::OrderBatch;

/// Prints batch summaries to stdout.
pub struct CliPresenter {
    quiet: bool,
    verbose: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }

    /// Print the batch summary.
    ///
    /// Quiet mode prints only the overall verdict label. Verbose mode adds
    /// the two totals before the overall line.
    pub fn present(&self, batch: &OrderBatch) {
        if self.quiet {
            println!("{}", batch.overall());
            return;
        }

        for order in batch.orders() {
            println!("{order}");
        }

        if self.verbose {
            let (total_circular, total_trapezoid) = batch.totals();
            println!("Total circular area: {total_circular}");
            println!("Total trapezoid area: {total_trapezoid}");
        }

        println!("{}", style(format!("Overall: {}", batch.overall())).bold());
    }
}
