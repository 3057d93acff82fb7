// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::Path;

fn build_cli() -> Command {
    Command::new("cookbook")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Cookbook Contributors")
        .about("Recipe registry with ingredient and cook time summaries")
        .subcommand_required(false)
        .subcommand(
            Command::new("serve")
                .about("Run the HTTP server")
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .value_name("PATH")
                        .help("Path to a TOML configuration file"),
                )
                .arg(
                    Arg::new("bind")
                        .short('b')
                        .long("bind")
                        .value_name("ADDR")
                        .help("Override the bind address from the configuration"),
                ),
        )
        .subcommand(
            Command::new("normalize")
                .about("Normalize a handwritten recipe name")
                .arg(Arg::new("input").required(true).help("Raw recipe name")),
        )
        .subcommand(
            Command::new("summarize")
                .about("Print the summary of a recipe from a JSON file of entries")
                .arg(
                    Arg::new("entries")
                        .short('e')
                        .long("entries")
                        .value_name("PATH")
                        .required(true)
                        .help("JSON array of entries, in creation order"),
                )
                .arg(Arg::new("name").required(true).help("Recipe to summarize")),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let man_page = Path::new(env!("CARGO_MANIFEST_DIR")).join("man/cookbook.1");
    if let Err(e) = write_man_page(&man_page) {
        println!("cargo:warning=Skipping {}: {}", man_page.display(), e);
    }
}

/// Render the cookbook(1) page; a read-only checkout only loses the page
fn write_man_page(path: &Path) -> io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let mut file = fs::File::create(path)?;
    Man::new(build_cli()).render(&mut file)
}
