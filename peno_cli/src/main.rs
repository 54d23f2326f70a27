//! # Webpen CLI
//!
//! Command-line front end for web penetration checks and composite section
//! analysis. Projects are `.wpn` JSON files created by `peno new` and
//! evaluated by `peno run`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info, trace};
use tracing_subscriber::EnvFilter;

use peno_core::calculations::composite::{
    CompositeSectionInput, MaterialProperties, SectionAreas, SectionGeometry, ShearConnection,
};
use peno_core::calculations::penetration::{self, PenetrationInput};
use peno_core::calculations::{CalculationItem, ItemResult};
use peno_core::equations::generate_equations_markdown;
use peno_core::project::{ItemOutcome, Project, ProjectReport};
use peno_core::{load_project, save_project, save_report};

#[derive(Parser)]
#[command(name = "peno", version, about = "Web penetration checks for composite steel beams")]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample project file
    New {
        /// Output .wpn file
        path: PathBuf,
        /// Engineer name stored in the project header
        #[arg(long, default_value = "")]
        engineer: String,
        /// Job number
        #[arg(long, default_value = "")]
        job: String,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Evaluate every item in a project
    Run {
        /// Project .wpn file
        path: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Also write the JSON report to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Check a single opening from the command line
    Check {
        /// Overall steel depth D
        #[arg(long)]
        depth: f64,
        /// Opening height h_0
        #[arg(long)]
        height: f64,
        /// Opening length a_0
        #[arg(long)]
        length: f64,
        /// Steel depth above the opening
        #[arg(long)]
        top_gap: f64,
        /// Steel depth below the opening
        #[arg(long)]
        bottom_gap: f64,
        /// Distance from the left support
        #[arg(long)]
        left: f64,
        /// Distance from the right support
        #[arg(long)]
        right: f64,
        /// Beam has no composite slab
        #[arg(long)]
        steel_only: bool,
    },
    /// Print the equation reference
    Equations,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(cli.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    debug!("peno started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let result = match cli.command {
        Commands::New {
            path,
            engineer,
            job,
            force,
        } => cmd_new(&path, engineer, job, force),
        Commands::Run { path, json, report } => cmd_run(&path, json, report.as_deref()),
        Commands::Check {
            depth,
            height,
            length,
            top_gap,
            bottom_gap,
            left,
            right,
            steel_only,
        } => cmd_check(PenetrationInput {
            label: "command line".to_string(),
            depth_of_beam: depth,
            height,
            length,
            top_gap,
            bottom_gap,
            left_distance: left,
            right_distance: right,
            composite: !steel_only,
        }),
        Commands::Equations => {
            print!("{}", generate_equations_markdown());
            Ok(true)
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn cmd_new(path: &Path, engineer: String, job: String, force: bool) -> Result<bool> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let mut project = Project::new(engineer, job, "");
    project.add_item(CalculationItem::Penetration(sample_penetration()));
    project.add_item(CalculationItem::CompositeSection(sample_section()));

    save_project(&project, path).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote sample project to {}", path.display());
    Ok(true)
}

fn cmd_run(path: &Path, json: bool, report_path: Option<&Path>) -> Result<bool> {
    let project = load_project(path).with_context(|| format!("Failed to load {}", path.display()))?;
    let report = project.evaluate();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if let Some(out) = report_path {
        save_report(&report, out).with_context(|| format!("Failed to write report {}", out.display()))?;
        info!("Report written to {}", out.display());
    }

    Ok(report.all_pass())
}

fn cmd_check(input: PenetrationInput) -> Result<bool> {
    let result = penetration::calculate(&input, &Default::default()).context("Penetration check failed")?;

    if result.passes() {
        println!("PASS: all geometric limits satisfied");
    } else {
        for violation in result.violations() {
            println!("FAIL: {}", violation);
        }
    }
    Ok(result.passes())
}

fn print_report(report: &ProjectReport) {
    println!("Job {} ({} items)", report.job_id, report.items.len());
    for item in &report.items {
        let (status, detail) = match &item.outcome {
            ItemOutcome::Completed(result) => (if result.passes() { "PASS" } else { "FAIL" }, result.summary()),
            ItemOutcome::Failed(error) => ("ERROR", error.to_string()),
        };
        println!("  [{:<5}] {:<20} {:<16} {}", status, item.label, item.calc_type, detail);

        if let ItemOutcome::Completed(ItemResult::Penetration(result)) = &item.outcome {
            for violation in result.violations() {
                println!("          - {}", violation);
            }
        }
    }
    if report.all_pass() {
        println!("All items pass");
    } else {
        println!("{} item(s) need attention", report.failure_count());
    }
}

fn sample_penetration() -> PenetrationInput {
    PenetrationInput {
        label: "P-1".to_string(),
        depth_of_beam: 400.0,
        height: 200.0,
        length: 400.0,
        top_gap: 100.0,
        bottom_gap: 100.0,
        left_distance: 1500.0,
        right_distance: 3000.0,
        composite: true,
    }
}

fn sample_section() -> CompositeSectionInput {
    CompositeSectionInput {
        label: "S-1".to_string(),
        geometry: SectionGeometry {
            slab_depth: 120.0,
            overall_depth: 520.0,
            rib_height: 55.0,
            flange_thickness: 10.0,
            web_thickness: 8.0,
            bar_thickness: 10.0,
            concrete_flange_width: 2000.0,
            effective_flange_width: 180.0,
            bar_width: 60.0,
            top_offset: 80.0,
            bottom_offset: 80.0,
        },
        areas: SectionAreas {
            steel_section: 6890.0,
            top_web: 640.0,
            bar: 600.0,
            bottom_web: 640.0,
            bottom_flange: 1800.0,
        },
        materials: MaterialProperties {
            concrete_fc: 30.0,
            flange_fy: 300.0,
            web_fy: 320.0,
            bar_fy: 300.0,
            section_fy: 300.0,
            connector_fvs: 100_000.0,
        },
        connection: ShearConnection {
            connectors_per_group: 1,
            connectors_to_zero_moment: 20,
            phi: None,
        },
        rib_fill_factor: 0.6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peno_core::project::DesignSettings;

    #[test]
    fn test_cli_parses_check() {
        let cli = Cli::try_parse_from([
            "peno", "-vv", "check", "--depth", "400", "--height", "200", "--length", "400", "--top-gap", "100",
            "--bottom-gap", "100", "--left", "1500", "--right", "3000", "--steel-only",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Check { steel_only: true, .. }));
    }

    #[test]
    fn test_cli_parses_run() {
        let cli = Cli::try_parse_from(["peno", "run", "job.wpn", "--json", "--report", "out.json"]).unwrap();
        match cli.command {
            Commands::Run { path, json, report } => {
                assert_eq!(path, PathBuf::from("job.wpn"));
                assert!(json);
                assert_eq!(report, Some(PathBuf::from("out.json")));
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_samples_evaluate() {
        let settings = DesignSettings::default();
        let opening = CalculationItem::Penetration(sample_penetration()).evaluate(&settings).unwrap();
        assert!(opening.passes());
        let section = CalculationItem::CompositeSection(sample_section()).evaluate(&settings).unwrap();
        assert!(section.passes());
    }
}
