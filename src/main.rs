use clap::Parser;

use artidex::cli::commands::{Cli, Command};
use artidex::cli::output;
use artidex::config::Config;
use artidex::indexer;
use artidex::models::artifact::ArtifactDraft;
use artidex::operations;
use artidex::store::registry::ComponentRegistry;
use artidex::store::Store;

fn main() {
    // Diagnostics go to stderr; stdout carries only JSON results.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::fmt::Display>> {
    match cli.command {
        Command::Index { path } => cmd_index(&path),
        Command::List => cmd_list(),
        Command::Get { id } => cmd_get(&id),
        Command::Resolve { id } => cmd_resolve(&id),
        Command::Search {
            query,
            tag,
            artifact_type,
        } => cmd_search(query, tag, artifact_type),
        Command::Create {
            name,
            description,
            artifact_type,
            tags,
        } => cmd_create(name, description, artifact_type, tags),
        Command::Stats => cmd_stats(),
    }
}

type CmdResult = Result<(), Box<dyn std::fmt::Display>>;

fn map_err(e: impl std::fmt::Display + 'static) -> Box<dyn std::fmt::Display> {
    Box::new(e.to_string())
}

fn get_config() -> Result<Config, Box<dyn std::fmt::Display>> {
    Config::from_cwd().map_err(map_err)
}

fn get_store(config: &Config) -> Store {
    Store::load(&config.output_path)
}

fn cmd_index(path: &str) -> CmdResult {
    let config = if path == "." {
        get_config()?
    } else {
        Config::new(path)
    };

    let result = indexer::run_index(&config).map_err(map_err)?;
    println!("{}", output::format_json(&result));
    Ok(())
}

fn cmd_list() -> CmdResult {
    let config = get_config()?;
    let store = get_store(&config);
    let result = operations::list_all(&store);
    println!("{}", output::format_json(&result));
    Ok(())
}

fn cmd_get(id: &str) -> CmdResult {
    let config = get_config()?;
    let store = get_store(&config);
    let result = operations::get_by_id(&store, id);
    println!("{}", output::format_json(&result));
    Ok(())
}

fn cmd_resolve(id: &str) -> CmdResult {
    let config = get_config()?;
    let store = get_store(&config);
    let registry = ComponentRegistry::with_builtins();
    let result = operations::resolve_loadable(&store, &registry, &config.scan_root, id);
    println!("{}", output::format_json(&result));
    Ok(())
}

fn cmd_search(query: Option<String>, tags: Vec<String>, artifact_type: Option<String>) -> CmdResult {
    let config = get_config()?;
    let store = get_store(&config);
    let filter = operations::SearchFilter {
        query,
        tags,
        artifact_type,
    };
    let result = operations::search(&store, &filter);
    println!("{}", output::format_json(&result));
    Ok(())
}

fn cmd_create(
    name: String,
    description: Option<String>,
    artifact_type: Option<String>,
    tags: Vec<String>,
) -> CmdResult {
    let draft = ArtifactDraft {
        name,
        description,
        artifact_type,
        tags,
    };
    let record = operations::create(draft);
    println!("{}", output::format_json(&record));
    Ok(())
}

fn cmd_stats() -> CmdResult {
    let config = get_config()?;
    let store = get_store(&config);
    let result = operations::gallery_stats(&store);
    println!("{}", output::format_json(&result));
    Ok(())
}
