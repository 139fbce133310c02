use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use scandoc_assemble::{
    AssembleOptions, ImageSource, ImageStore, Orientation, PageSize, PlacementPolicy, assemble,
};

#[derive(Parser)]
#[command(name = "scandoc", about = "Assemble captured photos into a PDF", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a multi-page PDF from JPEG captures, one page per image
    Assemble {
        /// Input JPEG file(s), in page order
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Page size
        #[arg(long, default_value = "a4", value_enum)]
        paper: PaperArg,

        /// Page orientation
        #[arg(long, default_value = "portrait", value_enum)]
        orientation: OrientationArg,

        /// Placement of each image on its page
        #[arg(long, default_value = "centered", value_enum)]
        placement: PlacementArg,

        /// Document title for the PDF metadata
        #[arg(long)]
        title: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A4,
    A5,
    Letter,
    Legal,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, ValueEnum)]
enum PlacementArg {
    Centered,
    Origin,
}

impl From<PaperArg> for PageSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
        }
    }
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl From<PlacementArg> for PlacementPolicy {
    fn from(arg: PlacementArg) -> Self {
        match arg {
            PlacementArg::Centered => Self::Centered,
            PlacementArg::Origin => Self::Origin,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Assemble {
            input,
            output,
            paper,
            orientation,
            placement,
            title,
        } => {
            let store = ImageStore::new();
            for path in &input {
                let bytes = tokio::fs::read(path).await?;
                store.append(path.display().to_string(), ImageSource::Bytes(bytes));
            }

            let options = AssembleOptions {
                page_size: paper.into(),
                orientation: orientation.into(),
                placement: placement.into(),
                title,
            };

            let pages = store.len();
            let path = assemble(store.snapshot(), &options, &output).await?;
            println!("Assembled {} pages → {}", pages, path.display());
        }
    }

    Ok(())
}
