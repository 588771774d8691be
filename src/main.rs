mod cli;
mod config;
mod engine;
mod error;
mod profiles;
mod report;
mod types;
mod writer;

use crate::engine::tenure::YearMonth;
use crate::engine::Engine;
use crate::error::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const PARTIAL_FAILURE: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

struct Session {
    engine: Engine,
    profiles: profiles::ProfileSet,
    as_of: YearMonth,
}

fn open_session(source: &cli::SourceArgs) -> Result<Session> {
    let as_of = source.as_of.unwrap_or_else(YearMonth::current);
    let cwd = std::env::current_dir()?;
    let cfg = config::load_config(&cwd, source.config.as_deref())?;
    let profiles = profiles::load_profiles(&source.profiles)?;
    tracing::info!(
        profiles = profiles.profiles.len(),
        rejected = profiles.rejected.len(),
        %as_of,
        "talent-intel v{}",
        env!("CARGO_PKG_VERSION")
    );
    Ok(Session {
        engine: Engine::from_config(&cfg),
        profiles,
        as_of,
    })
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Report(cmd) => {
            let session = open_session(&cmd.source)?;
            let profile = session.profiles.find(&cmd.candidate_id)?;
            let profile_report = session.engine.assemble(profile, session.as_of)?;

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            println!("{}", report::render(&profile_report, output_format)?);

            if let Some(outdir) = &cmd.outdir {
                let path = writer::write_report(outdir, &profile_report)?;
                eprintln!("report file: {}", path.display());
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Batch(cmd) => {
            let session = open_session(&cmd.source)?;
            let mut assembled = Vec::new();
            let mut failed = session.profiles.rejected.len();

            for rejected in &session.profiles.rejected {
                eprintln!(
                    "failed: {}: {} (in {})",
                    rejected.id,
                    rejected.reason,
                    rejected.source.display()
                );
            }
            for profile in &session.profiles.profiles {
                match session.engine.assemble(profile, session.as_of) {
                    Ok(profile_report) => assembled.push(profile_report),
                    Err(e) => {
                        failed += 1;
                        tracing::warn!(id = %profile.id, error = %e, "skipping profile");
                        eprintln!("failed: {}: {}", profile.id, e);
                    }
                }
            }

            match &cmd.outdir {
                Some(outdir) => {
                    for profile_report in &assembled {
                        let path = writer::write_report(outdir, profile_report)?;
                        println!("{}", path.display());
                    }
                }
                None => println!("{}", report::json::to_json(&assembled)?),
            }
            eprintln!("batch: {} assembled, {} failed", assembled.len(), failed);

            if failed > 0 {
                Ok(exit_code::PARTIAL_FAILURE)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Facts(cmd) => {
            let session = open_session(&cmd.source)?;
            let profile = session.profiles.find(&cmd.candidate_id)?;
            let sheet = session.engine.facts(profile, session.as_of)?;
            println!("{}", report::json::to_json(&sheet)?);
            Ok(exit_code::SUCCESS)
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
