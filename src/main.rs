use clap::{Parser, Subcommand};
use gallery_index::{config, index, logging, output, scan};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gallery-index")]
#[command(about = "Build the search index for a static HTML figure gallery")]
#[command(long_about = "\
Build the search index for a static HTML figure gallery

Every folder of the gallery root is a group of chapters rendered to HTML.
Folders are ordered by the number after the folder prefix; chapters by filename.

Gallery structure:

  gallery/
  ├── config.toml                   # Index config (optional)
  ├── gallery_compress/
  │   └── FigureYa12Heatmap.webp    # Folder thumbnail (optional)
  ├── FigureYa12Heatmap/            # Sort key 12
  │   └── FigureYa12Heatmap.html
  ├── FigureYa101PCA/               # Sort key 101
  │   └── FigureYa101PCA.html
  └── Misc/                         # No sort key: after numbered folders
      └── notes.html

Output:

  chapters.json                     # One record per chapter, in order
  texts/<id>.txt                    # Plain text: no images, no console output

Run 'gallery-index gen-config' to print a documented config.toml.")]
#[command(version = env!("GALLERY_INDEX_VERSION"))]
struct Cli {
    /// Gallery root directory
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Directory receiving chapters.json and texts/
    #[arg(long, default_value = ".", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract chapter text and write the manifest (default)
    Index,
    /// List what would be indexed without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init().map_err(|err| format!("initialize logging: {err}"))?;
    tracing::debug!(?cli, "parsed cli");

    match cli.command.unwrap_or(Command::Index) {
        Command::Index => {
            let report = index::build_index(&cli.source, &cli.output)?;
            output::print_index_output(&report);
        }
        Command::Check => {
            let index_config = config::load_config(&cli.source)?;
            let gallery = scan::scan(&cli.source, &index_config)?;
            output::print_check_output(&gallery);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
