use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use storyboard::app::AppContext;
use storyboard::cli::{commands, Cli, Commands};
use storyboard::page::ListView;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(cli.config)?;

    match cli.command {
        Commands::List { view } => {
            commands::list_stories(&ctx, view.into()).await?;
        }
        Commands::Favorites => {
            commands::list_stories(&ctx, ListView::Favorites).await?;
        }
        Commands::Mine => {
            commands::list_stories(&ctx, ListView::OwnStories).await?;
        }
        Commands::Render { out, open, view } => {
            commands::render_page(&ctx, out.as_deref(), open, view.into()).await?;
        }
        Commands::Submit { title, author, url } => {
            commands::submit_story(&ctx, &title, &author, &url).await?;
        }
        Commands::Favorite { story_id } => {
            commands::toggle_favorite(&ctx, &story_id).await?;
        }
        Commands::Delete { story_id } => {
            commands::delete_story(&ctx, &story_id).await?;
        }
        Commands::Login { username, password } => {
            commands::login(&ctx, &username, &password).await?;
        }
        Commands::Signup {
            username,
            password,
            name,
        } => {
            commands::signup(&ctx, &username, &password, &name).await?;
        }
        Commands::Logout => {
            commands::logout(&ctx)?;
        }
    }

    Ok(())
}
