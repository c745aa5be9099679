//! # Scantling CLI
//!
//! Runs the design sweep of a project file and prints the lightest
//! feasible configurations.
//!
//! ```text
//! scant_cli [PROJECT.scn] [--json] [--report OUT.json] [--save-demo OUT.scn] [-v|-vv]
//! ```
//!
//! Without a project path the built-in demo workboat is used.

use std::path::PathBuf;
use std::process::ExitCode;

use log::{LevelFilter, Log, Metadata, Record};
use serde::Serialize;

use scant_core::file_io::{load_project, save_project, save_sweep_report};
use scant_core::optimizer::{SweepOutcome, SweepRecord};
use scant_core::project::DesignProject;
use scant_core::structure::StructureReport;
use scant_core::ScantResult;

/// Writes log records to stderr so stdout stays clean for JSON
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

#[derive(Debug, Default)]
struct Args {
    project: Option<PathBuf>,
    json: bool,
    report: Option<PathBuf>,
    save_demo: Option<PathBuf>,
    verbosity: u8,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--report" => {
                args.report = Some(iter.next().ok_or("--report needs a path")?.into());
            }
            "--save-demo" => {
                args.save_demo = Some(iter.next().ok_or("--save-demo needs a path")?.into());
            }
            "-v" => args.verbosity = args.verbosity.max(1),
            "-vv" => args.verbosity = 2,
            flag if flag.starts_with('-') => return Err(format!("unknown option {}", flag)),
            path => args.project = Some(path.into()),
        }
    }
    Ok(args)
}

/// Everything `--json` prints
#[derive(Serialize)]
struct JsonOutput<'a> {
    project: &'a str,
    outcome: &'a SweepOutcome,
    best_structure: Option<StructureReport>,
}

fn describe(record: &SweepRecord) -> String {
    match (&record.cell.stiffener_material, &record.cell.profile) {
        (Some(material), Some(profile)) => format!(
            "n={:<2} plate {:<12} stiffener {:<12} {}",
            record.cell.stiffener_count, record.cell.panel_material, material, profile
        ),
        _ => format!(
            "n={:<2} plate {:<12} (unstiffened)",
            record.cell.stiffener_count, record.cell.panel_material
        ),
    }
}

fn print_summary(project: &DesignProject, outcome: &SweepOutcome, best: Option<&StructureReport>) {
    let g = &outcome.global;
    println!("Scantling sweep: {} ({})", project.meta.vessel_name, project.meta.job_id);
    println!("==================================================");
    println!(
        "Category {:?}, {} mode: kDC = {:.2}, nCG = {:.3}",
        g.design_category, g.craft_mode, g.k_dc, g.n_cg
    );
    println!(
        "{} configurations, {} feasible",
        outcome.records.len(),
        outcome.feasible_count()
    );
    for advisory in outcome.advisories.entries() {
        println!("  [{:?}] {}", advisory.severity, advisory.message);
    }
    println!();

    if !outcome.has_feasible() {
        println!("No feasible configuration in the sweep.");
        return;
    }

    println!("Lightest feasible:");
    for record in outcome.best_records() {
        println!("  {:>8.2} kg  {}", record.total_mass_kg, describe(record));
    }
    for (family, indices) in [("extrusion", &outcome.best_extrusion), ("machined", &outcome.best_machined)] {
        if let Some(record) = indices.first().and_then(|&i| outcome.records.get(i)) {
            println!("Best {:<9} {:>8.2} kg  {}", family, record.total_mass_kg, describe(record));
        }
    }

    if let Some(report) = best {
        println!();
        println!(
            "{:<10} {:>9} {:>9} {:>9} {:>12} {:>9}",
            "Member", "p (kPa)", "required", "t (mm)", "assigned", "mass kg"
        );
        for m in &report.members {
            println!(
                "{:<10} {:>9.2} {:>9.2} {:>9} {:>12} {:>9.3}",
                m.label,
                m.design_pressure_kpa.unwrap_or(0.0),
                m.required_thickness_mm
                    .or(m.required_section_modulus_cm3)
                    .unwrap_or(0.0),
                m.plate_thickness_mm.map_or("-".to_string(), |t| format!("{:.1}", t)),
                m.assigned.as_deref().unwrap_or("-"),
                m.mass_kg.unwrap_or(0.0)
            );
        }
    }
}

fn run(args: &Args) -> ScantResult<()> {
    if let Some(path) = &args.save_demo {
        save_project(&DesignProject::demo(), path)?;
        println!("Demo project written to {}", path.display());
        return Ok(());
    }

    let project = match &args.project {
        Some(path) => load_project(path)?,
        None => DesignProject::demo(),
    };

    let outcome = project.run_sweep()?;
    let best = match outcome.best.first() {
        Some(&index) => Some(project.structure_report(&outcome, index)?),
        None => None,
    };

    if let Some(path) = &args.report {
        save_sweep_report(&outcome, path)?;
        log::info!("sweep report written to {}", path.display());
    }

    if args.json {
        let output = JsonOutput {
            project: &project.meta.job_id,
            outcome: &outcome,
            best_structure: best,
        };
        let json = serde_json::to_string_pretty(&output).map_err(|e| {
            scant_core::ScantError::SerializationError {
                reason: e.to_string(),
            }
        })?;
        println!("{}", json);
    } else {
        print_summary(&project, &outcome, best.as_ref());
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("error: {}", message);
            return ExitCode::from(2);
        }
    };

    let level = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error [{}]: {}", e.error_code(), e);
            ExitCode::FAILURE
        }
    }
}
