//! CLI command definitions.

use atelier::Surface;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Atelier - media ordering and role-gated access for gallery posts
#[derive(Parser, Debug)]
#[command(name = "atelier")]
#[command(about = "Media ordering and role-gated access for gallery posts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra configuration file, layered over the default sources
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decide whether a viewer may see a post
    Access {
        /// Path to the post JSON, as served by the backend
        #[arg(long)]
        post: PathBuf,

        /// Role ids held by the viewer
        #[arg(long, value_delimiter = ',')]
        roles: Vec<String>,

        /// Viewer user id; anonymous when omitted
        #[arg(long)]
        viewer: Option<String>,

        /// The viewer is flagged as an author
        #[arg(long)]
        author: bool,

        /// Surface asking for the decision
        #[arg(long, default_value = "detail-view")]
        surface: SurfaceArg,
    },

    /// Resolve a submitted media order against stored media
    ApplyOrder {
        /// Stored media ids in stored order
        #[arg(long, value_delimiter = ',')]
        existing: Vec<u64>,

        /// Stored media ids removed by the author
        #[arg(long, value_delimiter = ',')]
        removed: Vec<u64>,

        /// Number of files in the upload batch
        #[arg(long = "new", default_value = "0")]
        new_count: usize,

        /// Media order in wire form, e.g. "e:2,n:0"
        #[arg(long, default_value = "")]
        order: String,

        /// Print JSON instead of one line per item
        #[arg(long)]
        json: bool,
    },
}

/// Surfaces selectable on the command line
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SurfaceArg {
    /// Card in the gallery grid
    GalleryCard,
    /// Full post view
    DetailView,
    /// Author side panel
    Panel,
    /// Download endpoint
    Download,
}

impl From<SurfaceArg> for Surface {
    fn from(arg: SurfaceArg) -> Self {
        match arg {
            SurfaceArg::GalleryCard => Surface::GalleryCard,
            SurfaceArg::DetailView => Surface::DetailView,
            SurfaceArg::Panel => Surface::Panel,
            SurfaceArg::Download => Surface::Download,
        }
    }
}
