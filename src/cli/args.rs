//! CLI argument parsing

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub test_name: String,
}

/// Parse command line arguments
///
/// Exactly one positional argument (the test name) is required; everything
/// else is rejected. `--help`/`--version` are handled before this runs.
///
/// # Errors
/// Returns a message suitable for stderr when the test name is missing, an
/// extra positional is supplied, or an unknown option appears.
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut test_name = String::new();

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            a if a.starts_with("--") => return Err(format!("Unknown option: {a}")),
            a => {
                if test_name.is_empty() {
                    test_name = a.to_string();
                } else {
                    return Err(format!("Unexpected argument: {a}"));
                }
            }
        }
    }

    if test_name.is_empty() {
        return Err("Missing required argument: TEST_NAME".to_string());
    }

    Ok(CliArgs { test_name })
}
