use clap::Parser;
use json_triage::core::{Confirm, Result};
use json_triage::utils::logger::{self, LogFormat};
use json_triage::utils::validation::Validate;
use json_triage::{
    AcceptMode, AutoAccept, BatchReport, CliConfig, LocalStorage, PromptConfirm, RunOptions,
    TriageConfig, TriageRunner,
};

const EXIT_FILE_FAILURES: i32 = 1;
const EXIT_REJECTED: i32 = 2;

fn main() {
    let cli = CliConfig::parse();

    logger::init_logger(cli.verbose, LogFormat::from_json_flag(cli.log_json));

    tracing::info!("Starting json-triage");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(
                "❌ json-triage failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            e.severity().exit_code()
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &CliConfig) -> Result<i32> {
    let config = cli.resolve()?;
    config.validate()?;
    tracing::info!("✅ Configuration loaded and validated successfully");

    if cli.verbose || cli.dry_run {
        display_config_summary(&config, cli);
    }

    let options = RunOptions {
        dry_run: cli.dry_run,
        show_payload: cli.show_payload,
    };

    let report = match config.accept_mode {
        AcceptMode::Interactive if !cli.dry_run => {
            execute(&config, PromptConfirm::stdio(), options)?
        }
        _ => execute(&config, AutoAccept, options)?,
    };

    if let Some(path) = &cli.report {
        report.write_json(path)?;
    }

    let code = if report.has_failures() {
        EXIT_FILE_FAILURES
    } else if cli.fail_on_reject && report.has_rejections() {
        EXIT_REJECTED
    } else {
        0
    };
    Ok(code)
}

fn execute<C: Confirm>(
    config: &TriageConfig,
    confirm: C,
    options: RunOptions,
) -> Result<BatchReport> {
    let storage = LocalStorage::new(
        config.input_dir.clone(),
        config.output_dir.clone(),
        config.extension.clone(),
    );
    let mut runner = TriageRunner::new(storage, confirm, config.rules.clone()).with_options(options);

    let mut stdout = std::io::stdout();
    runner.run(&mut stdout)
}

fn display_config_summary(config: &TriageConfig, cli: &CliConfig) {
    println!("📋 Configuration Summary:");
    for line in config.summary_lines() {
        println!("{}", line);
    }
    if cli.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }
    println!();
}
