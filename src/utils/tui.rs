//! Terminal output for the CLI.
//!
//! Everything here writes to stderr: stdout is reserved for chart data. Only
//! `--list` prints to stdout, since no sweep runs in that mode.

use terminal_size::{terminal_size, Width};

use crate::config::{
    DEFAULT_CHECK_VALUE, DEFAULT_ENABLE_AVX, DEFAULT_NUM_FLOATS, DEFAULT_REPORT_HTML,
    DEFAULT_TOTAL_FLOATS,
};
use crate::registry::BenchmarkRegistry;

/// Current terminal width, clamped to a usable range.
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Print the run header box to stderr.
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " simd-sweep alignment benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);
    eprintln!("╔{}╗", border);
    eprintln!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    eprintln!("╚{}╝", border);
    eprintln!();
}

/// Print usage and option defaults to stderr.
pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("simd-sweep [options] [benchmark]");
    eprintln!(
        "num-floats=<floats per strategy call>     default ({})",
        DEFAULT_NUM_FLOATS
    );
    eprintln!(
        "total-floats=<total floats per run>       default ({})",
        DEFAULT_TOTAL_FLOATS
    );
    eprintln!(
        "check-value=<any value to check against>  default ({})",
        DEFAULT_CHECK_VALUE
    );
    eprintln!(
        "enable-avx=<true/false>                   default ({})",
        DEFAULT_ENABLE_AVX
    );
    eprintln!(
        "report-html=<true/false>                  default ({})",
        DEFAULT_REPORT_HTML
    );
    eprintln!();
    eprintln!("benchmark: copy | mult (omit for all)");
    eprintln!("--list, -l  list available benchmarks");
    eprintln!("--help, -h  show this message");
}

/// Print the registered benchmarks.
pub fn print_available_benchmarks(registry: &BenchmarkRegistry) {
    println!("Available benchmarks:");
    println!();
    for bench in registry.all() {
        println!(
            "  {:<8} ({} columns) - {}",
            bench.name(),
            bench.columns().len(),
            bench.description()
        );
    }
}
