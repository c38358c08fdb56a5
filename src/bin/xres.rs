//! Command-line interface for xres
//! This binary is used to query, filter and rebuild X resources files.
//!
//! Usage:
//!   xres get `<path>` `<resource>`           - Print the resolved value of a resource
//!   xres filter `<path>` `<pattern>`         - Print resources matching a wildcard pattern
//!   xres dump `<path>` [--format `<format>`] - Rebuild the file as text or JSON

use clap::{Arg, Command};

use xres::Document;

fn main() {
    let matches = Command::new("xres")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for querying and rebuilding X resources files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("get")
                .about("Print the macro-resolved value of a resource")
                .arg(
                    Arg::new("path")
                        .help("Path to the X resources file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("resource")
                        .help("Resource identifier to look up")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("filter")
                .about("Print all resources whose identifier matches a wildcard pattern")
                .arg(
                    Arg::new("path")
                        .help("Path to the X resources file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("pattern")
                        .help("Wildcard pattern, e.g. 'URxvt.*.foreground'")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("dump")
                .about("Rebuild the file from its parsed statements")
                .arg(
                    Arg::new("path")
                        .help("Path to the X resources file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("get", get_matches)) => {
            let path = get_matches.get_one::<String>("path").unwrap();
            let resource = get_matches.get_one::<String>("resource").unwrap();
            handle_get_command(path, resource);
        }
        Some(("filter", filter_matches)) => {
            let path = filter_matches.get_one::<String>("path").unwrap();
            let pattern = filter_matches.get_one::<String>("pattern").unwrap();
            handle_filter_command(path, pattern);
        }
        Some(("dump", dump_matches)) => {
            let path = dump_matches.get_one::<String>("path").unwrap();
            let format = dump_matches.get_one::<String>("format").unwrap();
            handle_dump_command(path, format);
        }
        _ => unreachable!(),
    }
}

fn load_document(path: &str) -> Document {
    xres::parse_file(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    })
}

/// Handle the get command
fn handle_get_command(path: &str, resource: &str) {
    let document = load_document(path);
    match document.view().resource(resource) {
        Ok(value) => println!("{}", value),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the filter command
fn handle_filter_command(path: &str, pattern: &str) {
    let document = load_document(path);
    let filtered = document.view().filter(pattern).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let mut entries: Vec<(&str, &str)> = filtered.view().resources().iter().collect();
    entries.sort();
    for (id, value) in entries {
        println!("{}: {}", id, value);
    }
}

/// Handle the dump command
fn handle_dump_command(path: &str, format: &str) {
    let document = load_document(path);
    match format {
        "text" => print!("{}", document.view().full_text()),
        "json" => {
            let json = serde_json::to_string_pretty(&document).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        other => {
            eprintln!("Error: unknown format '{}'", other);
            std::process::exit(1);
        }
    }
}
