//! Snapshot testing CLI (snapcheck) - Main binary entry point

use snapcheck::cli::args::{CliArgs, parse_args};
use snapcheck::cli::output::report_result;
use snapcheck::services::compare::compare;
use snapcheck::services::store::dir::DirStore;
use std::io::Read;
use std::process;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug snapcheck my-test < output.json
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("--help" | "-h") => {
            print_help();
            return;
        }
        Some("--version" | "-v") => {
            print_version();
            return;
        }
        _ => {}
    }

    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(1);
        }
    };

    process::exit(handle_check(&cli_args));
}

/// Exit codes: 0 = created/matched, 1 = usage error or mismatch,
/// 2 = storage error or corrupt snapshot.
fn handle_check(args: &CliArgs) -> i32 {
    // The value under test arrives as JSON on stdin
    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("Error: failed to read stdin: {e}");
        return 2;
    }

    let value: serde_json::Value = match serde_json::from_str(&input) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: stdin is not valid JSON: {e}");
            return 1;
        }
    };

    let mut store = DirStore::new(snapcheck::SNAPSHOT_DIR);
    let result = match compare(&mut store, &args.test_name, &value) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            return 2;
        }
    };

    report_result(&result);
    i32::from(!result.passed)
}

fn print_help() {
    println!("Snapshot testing CLI (snapcheck) - Compare test output against a stored baseline");
    println!();
    println!("USAGE:");
    println!("    <producer> | snapcheck <TEST_NAME>");
    println!();
    println!("The value under test is read as JSON from stdin. The first run for a");
    println!("test name records it under {}/ and passes; later runs", snapcheck::SNAPSHOT_DIR);
    println!("fail if the output no longer matches. To update a baseline, delete its");
    println!("snapshot file and re-run.");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show this help message");
    println!("    -v, --version    Show version information");
    println!();
    println!("EXIT CODES:");
    println!("    0    Snapshot created or matched");
    println!("    1    Usage error or snapshot mismatch");
    println!("    2    Storage error or corrupt snapshot");
    println!();
    println!("EXAMPLES:");
    println!("    my-api-probe | snapcheck \"api response shape\"");
    println!("    echo '{{\"version\": 3}}' | snapcheck config-schema");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const BUILD_TARGET: &str = env!("BUILD_TARGET");

    println!("snapcheck {VERSION}");
    println!("Commit: {GIT_HASH}");
    println!("Target: {BUILD_TARGET}");
}
