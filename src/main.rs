use std::fs::File;
use std::io;
use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fitcal::cli::{CalcArgs, Cli, Command, OutputFormat};
use fitcal::error::Result;
use fitcal::interface::{
    collect_profile, display_catalog, display_energy, display_meal_plan,
    display_recommendations, profile_summary, prompt_yes_no, write_csv, write_json,
};
use fitcal::models::Profile;
use fitcal::planner::MealCatalog;
use fitcal::state::{load_catalog, save_catalog, Computation, Session};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "fitcal=debug" } else { "fitcal=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = match &cli.catalog {
        Some(path) => {
            let catalog = load_catalog(path)?;
            tracing::info!(
                "Loaded {} meal templates from {}",
                catalog.templates.len(),
                path.display()
            );
            catalog
        }
        None => MealCatalog::default(),
    };

    match cli.command.unwrap_or_default() {
        Command::Plan => cmd_plan(&catalog),
        Command::Calc(args) => cmd_calc(&args, &catalog),
        Command::Catalog { dump } => cmd_catalog(&catalog, dump.as_deref()),
    }
}

fn display_computation(computation: &Computation) {
    println!();
    println!("Profile: {}", profile_summary(&computation.profile));
    display_energy(&computation.energy);
    display_meal_plan(&computation.plan);
    display_recommendations();
}

/// Interactive form; loops until the user stops recalculating.
fn cmd_plan(catalog: &MealCatalog) -> Result<()> {
    let mut session = Session::new();
    let mut defaults = Profile::default();

    loop {
        println!("Enter your details to compute your daily targets.");
        println!();

        let profile = collect_profile(&defaults)?;
        let computation = session.submit(profile, catalog);
        display_computation(computation);

        if !prompt_yes_no("Recalculate?", false)? {
            break;
        }

        if let Some(previous) = session.profile() {
            defaults = previous.clone();
        }
        session.reset();
        println!();
    }

    Ok(())
}

/// Non-interactive computation with text, JSON or CSV output.
fn cmd_calc(args: &CalcArgs, catalog: &MealCatalog) -> Result<()> {
    let profile = args.to_profile()?;

    let mut session = Session::new();
    let computation = session.submit(profile, catalog);

    match (args.format, &args.output) {
        (OutputFormat::Text, _) => {
            if args.output.is_some() {
                tracing::warn!("--output is ignored for text format");
            }
            display_computation(computation);
        }
        (OutputFormat::Json, Some(path)) => write_json(computation, File::create(path)?)?,
        (OutputFormat::Json, None) => write_json(computation, io::stdout().lock())?,
        (OutputFormat::Csv, Some(path)) => write_csv(&computation.plan, File::create(path)?)?,
        (OutputFormat::Csv, None) => write_csv(&computation.plan, io::stdout().lock())?,
    }

    if let Some(path) = &args.output {
        if args.format != OutputFormat::Text {
            eprintln!("Wrote {}", path.display());
        }
    }

    Ok(())
}

/// Print the active catalog or dump it to a JSON file.
fn cmd_catalog(catalog: &MealCatalog, dump: Option<&Path>) -> Result<()> {
    match dump {
        Some(path) => {
            save_catalog(path, catalog)?;
            println!("Catalog written to {}", path.display());
        }
        None => display_catalog(catalog),
    }
    Ok(())
}
