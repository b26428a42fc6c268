pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};

use crate::page::ListView;

#[derive(Parser)]
#[command(name = "storyboard")]
#[command(about = "Read, share and favorite links on a Hack-or-Snooze server", long_about = None)]
pub struct Cli {
    /// Path to an alternative config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List stories
    List {
        /// Which stories to show
        #[arg(long, value_enum, default_value_t = ViewArg::All)]
        view: ViewArg,
    },
    /// List your favorite stories
    Favorites,
    /// List the stories you submitted
    Mine,
    /// Render the story page as HTML
    Render {
        /// Write the page to this file instead of stdout
        #[arg(short, long)]
        out: Option<std::path::PathBuf>,

        /// Open the written page in the browser
        #[arg(long, requires = "out")]
        open: bool,

        /// Which stories to show
        #[arg(long, value_enum, default_value_t = ViewArg::All)]
        view: ViewArg,
    },
    /// Submit a new story
    Submit {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        url: String,
    },
    /// Add or remove a story from your favorites
    Favorite {
        /// ID of the story
        story_id: String,
    },
    /// Delete one of your stories
    Delete {
        /// ID of the story
        story_id: String,
    },
    /// Log in and remember the session
    Login {
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and log in
    Signup {
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
    },
    /// Forget the remembered session
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    All,
    Favorites,
    Mine,
}

impl From<ViewArg> for ListView {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::All => ListView::All,
            ViewArg::Favorites => ListView::Favorites,
            ViewArg::Mine => ListView::OwnStories,
        }
    }
}
