//! CLI for the alignment-sweep benchmarks.
//!
//! Usage:
//!   simd-sweep                          # Run all benchmarks
//!   simd-sweep copy                     # Run one benchmark
//!   simd-sweep copy enable-avx=false    # key=value options, last wins
//!   simd-sweep --list                   # List available benchmarks
//!
//! Chart data goes to stdout; progress and diagnostics go to stderr.

use std::env;
use std::io::{self, Write};
use std::process;

use simd_sweep::config::RunConfig;
use simd_sweep::registry::{build_registry, BenchmarkRunner};
use simd_sweep::report;
use simd_sweep::tui;
use simd_sweep::utils::CpuPinGuard;

/// Command-line shape after one pass over the tokens. `key=value` options
/// stay in the raw argument list for `RunConfig::from_args`.
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    show_list: bool,
    show_help: bool,
    bench_filter: Option<String>,
}

/// Classify the non-option tokens. A `-`-prefixed token that is not a known
/// flag is an error even when it carries an `=`.
fn parse_cli(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();
    for arg in args {
        match arg.as_str() {
            "--list" | "-l" => cli.show_list = true,
            "--help" | "-h" => cli.show_help = true,
            a if a.starts_with('-') => return Err(format!("Unknown option: {}", a)),
            a if a.contains('=') => {} // handled by RunConfig::from_args
            a => cli.bench_filter = Some(a.to_string()),
        }
    }
    Ok(cli)
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let registry = build_registry();

    let cli = match parse_cli(&args) {
        Ok(cli) => cli,
        Err(msg) => {
            eprintln!("{}", msg);
            process::exit(1);
        }
    };
    let CliArgs {
        show_list,
        show_help,
        bench_filter,
    } = cli;

    if show_help {
        tui::print_usage();
        return;
    }

    if show_list {
        tui::print_available_benchmarks(&registry);
        return;
    }

    let cfg = match RunConfig::from_args(&args) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", e);
            tui::print_usage();
            process::exit(1);
        }
    };

    if !cfg.is_budget_valid() {
        eprintln!("total-floats must be greater than num-floats");
        tui::print_usage();
        // Rejected configuration, not a failure
        return;
    }

    let selected: Vec<&dyn BenchmarkRunner> = match &bench_filter {
        Some(name) => match registry.find(name) {
            Some(bench) => vec![bench],
            None => {
                eprintln!("Benchmark '{}' not found.", name);
                eprintln!("Available: {:?}", registry.list_names());
                process::exit(1);
            }
        },
        None => registry.all().iter().map(|b| b.as_ref()).collect(),
    };

    tui::print_header();

    // Pin once for the whole run; stable core, stable numbers.
    let _pin = CpuPinGuard::new();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for bench in selected {
        match bench.run_sweep(&cfg) {
            Ok(rows) => {
                if let Err(e) = report::write_chart(&mut out, bench.columns(), &rows, cfg.html) {
                    eprintln!("Failed to write report: {}", e);
                    process::exit(1);
                }
            }
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
    }
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_cli_flags_and_filter() {
        let cli = parse_cli(&args(&["--list", "copy", "num-floats=64"])).unwrap();
        assert!(cli.show_list);
        assert!(!cli.show_help);
        assert_eq!(cli.bench_filter.as_deref(), Some("copy"));
    }

    #[test]
    fn test_parse_cli_rejects_unknown_flag() {
        assert!(parse_cli(&args(&["--frobnicate"])).is_err());
    }

    #[test]
    fn test_parse_cli_rejects_unknown_flag_with_value() {
        let err = parse_cli(&args(&["--num-floats=64"])).unwrap_err();
        assert!(err.contains("--num-floats=64"));
    }

    #[test]
    fn test_parse_cli_passes_options_through() {
        let cli = parse_cli(&args(&["enable-avx=false", "unknown-key=1"])).unwrap();
        assert_eq!(cli, CliArgs::default());
    }
}
