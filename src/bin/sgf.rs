//! Command-line interface for sgf
//! This binary is used to inspect SGF files: it parses them and prints the resulting tree.
//!
//! Usage:
//!   sgf inspect `<path>` [--format `<format>`] [--config `<file>`]  - Parse a file and print its tree
//!   sgf list-formats                                           - List available output formats
//!
//! `inspect` also reads `sgf.toml` from the working directory when one exists.

use clap::{Arg, Command};
use sgf::sgf::config::{Loader, SgfConfig};
use sgf::sgf::formats::FormatRegistry;
use sgf::sgf::loader::DocumentLoader;

fn main() {
    let matches = Command::new("sgf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting SGF game records")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("inspect")
                .about("Parse an SGF file and print its tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the SGF file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'treeviz', 'json', 'yaml')"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("inspect", inspect_matches)) => {
            let path = inspect_matches
                .get_one::<String>("path")
                .expect("path is required");
            let format = inspect_matches.get_one::<String>("format");
            let config_path = inspect_matches.get_one::<String>("config");
            handle_inspect_command(path, format, config_path);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

fn load_config(config_path: Option<&String>, format: Option<&String>) -> SgfConfig {
    let mut loader = Loader::new().with_local_file(".");
    if let Some(path) = config_path {
        loader = loader.with_file(path);
    }
    if let Some(format) = format {
        loader = loader
            .set_override("inspect.format", format.as_str())
            .unwrap_or_else(|e| {
                eprintln!("Invalid format override: {}", e);
                std::process::exit(1);
            });
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    })
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, format: Option<&String>, config_path: Option<&String>) {
    let config = load_config(config_path, format);

    let collection = DocumentLoader::from_path(path)
        .and_then(|loader| loader.parse())
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    let registry = FormatRegistry::from_config(&config.inspect);
    let output = registry
        .serialize(&collection, &config.inspect.format)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    print!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let description = registry
            .get(&name)
            .map(|formatter| formatter.description())
            .unwrap_or_default();
        println!("  {}", name);
        println!("    {}", description);
    }
}
