mod cli;

use chrono::Utc;
use clap::Parser;
use grantfit::catalog::lint::lint_catalog;
use grantfit::catalog::Catalog;
use grantfit::engine::EligibilityEngine;
use grantfit::error::GrantError;
use grantfit::report::{self, summary, OutputFormat};
use grantfit::types::config::DEFAULT_BEST_MATCHES_LIMIT;
use grantfit::types::profile::load_profile;
use grantfit::{clock, config, telemetry};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(format: cli::ReportFormat) -> OutputFormat {
    match format {
        cli::ReportFormat::Json => OutputFormat::Json,
        cli::ReportFormat::Md => OutputFormat::Md,
    }
}

fn run() -> Result<i32, GrantError> {
    let cli = cli::Cli::parse();

    let loaded = config::load_config(&cli.root)?;
    let configured_level = loaded.as_ref().and_then(|cfg| cfg.log_level());
    telemetry::init(telemetry::level_for(cli.verbose, cli.quiet, configured_level))?;

    let now = match cli.as_of.as_deref() {
        Some(value) => clock::parse_instant(value)?,
        None => Utc::now(),
    };
    let catalog = Catalog::from_config(&cli.root, loaded.as_ref())?;
    tracing::info!(grants = catalog.len(), as_of = %now, "catalog ready");
    let engine = EligibilityEngine::new(catalog);

    match cli.command {
        cli::Commands::Assess(cmd) => {
            let profile = load_profile(&cmd.profile)?;
            let assessment = engine.assess_at(&profile, &cmd.grant, now)?;
            let rendered = report::render_assessment(&assessment, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Batch(cmd) => {
            let profile = load_profile(&cmd.profile)?;
            let assessments = engine.assess_all_at(&profile, now)?;
            let rendered = report::render_batch(&assessments, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Matches(cmd) => {
            let limit = cmd
                .limit
                .or_else(|| loaded.as_ref().map(|cfg| cfg.best_matches_limit()))
                .unwrap_or(DEFAULT_BEST_MATCHES_LIMIT);
            if limit == 0 {
                return Err(GrantError::InvalidInput(
                    "--limit must be greater than zero".to_string(),
                ));
            }

            let profile = load_profile(&cmd.profile)?;
            let matches = engine.best_matches_at(&profile, limit, now)?;
            if matches.is_empty() {
                println!("matches: no HIGH or MEDIUM eligibility grants");
                return Ok(exit_code::WARNINGS);
            }

            let rendered = report::render_batch(&matches, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Report(cmd) => {
            let profile = load_profile(&cmd.profile)?;
            let assessments = engine.assess_all_at(&profile, now)?;
            let fingerprint = engine.catalog().fingerprint()?;
            let eligibility_report = summary::build(&profile, &assessments, now, fingerprint);
            let rendered = report::render_report(&eligibility_report, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Grants => {
            for criteria in engine.catalog().iter() {
                println!(
                    "{}\t{}\t{}",
                    criteria.grant_id,
                    criteria.deadline.format(summary::DEADLINE_FORMAT),
                    criteria.grant_name
                );
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Lint => {
            let findings = lint_catalog(engine.catalog(), now);

            if findings.is_empty() {
                println!("lint: {} grants, no findings", engine.catalog().len());
                return Ok(exit_code::SUCCESS);
            }

            for finding in &findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                println!("[{}] {}: {}", level, finding.grant_id, finding.message);
            }

            if findings.iter().any(|finding| finding.blocking) {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
