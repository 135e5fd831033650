use std::path::PathBuf;

use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use recipe_engine::{FilterCategory, Outcome, QueryMode, Session};
use recipe_model::load_recipes_from_path;

mod output;

#[derive(Parser)]
#[command(name = "recipes")]
#[command(about = "Browse and filter a recipe collection", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for output)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the recipes matching a query and selected filter tags
    Search(SearchArgs),
    /// List the filter values still available after applying the filters
    Facets(FacetsArgs),
}

/// Flags shared by every subcommand: the data file plus the criteria.
#[derive(Args)]
struct FilterArgs {
    /// Path to the recipe JSON file
    #[arg(long, value_name = "FILE")]
    data: PathBuf,

    /// Free-text query; filters from 3 characters on
    #[arg(short, long, default_value = "")]
    query: String,

    /// Ingredient tag to select (repeatable)
    #[arg(long = "ingredient", value_name = "VALUE")]
    ingredients: Vec<String>,

    /// Utensil tag to select (repeatable)
    #[arg(long = "ustensil", value_name = "VALUE")]
    ustensils: Vec<String>,

    /// Appliance tag to select (repeatable)
    #[arg(long = "appliance", value_name = "VALUE")]
    appliances: Vec<String>,

    /// Interpret the query as a regular expression instead of a substring
    #[arg(long)]
    regex: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SearchArgs {
    #[command(flatten)]
    filter: FilterArgs,

    /// Show at most this many recipes
    #[arg(long, value_name = "N")]
    limit: Option<usize>,
}

#[derive(Args)]
struct FacetsArgs {
    #[command(flatten)]
    filter: FilterArgs,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    let json_output = match &cli.command {
        Commands::Search(args) => args.filter.json,
        Commands::Facets(args) => args.filter.json,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Search(args) => run_search(args),
        Commands::Facets(args) => run_facets(args),
    }
}

fn build_session(filter: &FilterArgs) -> Result<Session> {
    let recipes = load_recipes_from_path(&filter.data)
        .with_context(|| format!("loading recipes from {}", filter.data.display()))?;

    let mode = if filter.regex {
        QueryMode::Regex
    } else {
        QueryMode::Literal
    };

    let mut session = Session::with_mode(recipes, mode);
    session.set_query(&filter.query);
    for value in &filter.ingredients {
        session.toggle_tag(FilterCategory::Ingredient, value);
    }
    for value in &filter.ustensils {
        session.toggle_tag(FilterCategory::Ustensil, value);
    }
    for value in &filter.appliances {
        session.toggle_tag(FilterCategory::Appliance, value);
    }
    Ok(session)
}

fn run_search(args: SearchArgs) -> Result<()> {
    let mut session = build_session(&args.filter)?;
    let outcome: Outcome = session.results().clone();
    let mut matches = session.matching_recipes();
    let total = matches.len();
    if let Some(limit) = args.limit {
        matches.truncate(limit);
    }

    if args.filter.json {
        let doc = output::search_document(&matches, total, &outcome);
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print!("{}", output::render_search(&matches, total, &outcome));
    }
    Ok(())
}

fn run_facets(args: FacetsArgs) -> Result<()> {
    let mut session = build_session(&args.filter)?;
    let outcome = session.results();

    if args.filter.json {
        println!("{}", serde_json::to_string_pretty(&outcome.facets)?);
    } else {
        print!("{}", output::render_facets(&outcome.facets));
    }
    Ok(())
}
