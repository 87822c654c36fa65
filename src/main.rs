// main.rs - CLI entry point

use std::io::Write;
use std::path::Path;

use iptcconcat::cli::validation::resolve_display_path;
use iptcconcat::prelude::*;

/// Exit status when `--strict` is set and validation found errors
const EXIT_VALIDATION_FAILED: i32 = 2;

fn main() {
    match run_main() {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("❌ ERROR: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_main() -> Result<i32> {
    let mut args: Args = argh::from_env();

    // Handle generate config first
    if args.generate_config {
        println!("{}", Config::generate_sample());
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(0);
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let validator = Validator::new(&ValidationConfig::default());

    if args.list_rules {
        println!("📋 Validation rules (evaluation order):");
        for (i, (name, description)) in validator.rules().list_rules().into_iter().enumerate() {
            println!("  {}. {}: {}", i + 1, name, description);
        }
        return Ok(0);
    }

    let settings = validate_args(&args)?;
    let validator = validator.with_delimiter(settings.merge.output_delimiter);

    // Checked before the banner: a missing directory prints only this message
    let input_directory = if settings.validate_only {
        None
    } else {
        // validate_args guarantees a directory unless validate_only is set
        let Some(input_directory) = settings.input_directory.as_deref() else {
            return Err(Error::InvalidArgument("input directory is required".to_string()));
        };
        if !input_directory.exists() {
            println!(
                "Input directory {} does not exist.",
                resolve_display_path(input_directory).display()
            );
            return Ok(0);
        }
        Some(input_directory)
    };

    if !settings.quiet {
        println!("🚀 {}", iptcconcat::get_info());
        println!(
            "🕒 Started: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    match input_directory {
        Some(input_directory) => {
            let summary = merge_with_options(input_directory, &settings.output, &settings.merge)?;
            report_merge(&summary, &settings.output, settings.quiet);
        }
        None if !settings.output.exists() => {
            return Err(Error::InvalidArgument(format!(
                "--validate-only given but '{}' does not exist",
                settings.output.display()
            )));
        }
        None => {}
    }

    let summary = {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let summary = validator.validate_file(&settings.output, &mut handle)?;
        handle.flush()?;
        summary
    };

    if !settings.quiet {
        if summary.is_clean() {
            println!("✅ All {} rows passed validation", summary.rows_checked);
        } else {
            println!(
                "⚠️  {} of {} rows failed validation ({} errors)",
                summary.rows_with_errors, summary.rows_checked, summary.total_errors
            );
        }
    }

    if settings.strict && !summary.is_clean() {
        return Ok(EXIT_VALIDATION_FAILED);
    }

    Ok(0)
}

fn report_merge(summary: &MergeSummary, output: &Path, quiet: bool) {
    if quiet {
        return;
    }

    for path in &summary.skipped {
        println!("⚠️  Skipping '{}': it is the output file", path.display());
    }
    for path in &summary.header_mismatches {
        println!(
            "⚠️  Header of '{}' differs from the first file; its columns may be misread",
            path.display()
        );
    }

    if summary.files.is_empty() {
        println!("📂 No CSV files found, wrote empty '{}'", output.display());
        return;
    }

    println!("📂 Found {} CSV files", summary.files.len());
    println!(
        "✅ Merged {} rows from {} files into: {}",
        summary.rows_written,
        summary.files.len(),
        output.display()
    );
}
