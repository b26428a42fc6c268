use std::path::Path;

use crate::app::{AppContext, Result, Session, StoryError};
use crate::controller::PageController;
use crate::domain::{Story, User};
use crate::page::{ListView, PageEvent};

/// Build a controller with the remembered user and the current story list.
async fn open_page(ctx: &AppContext) -> Result<PageController> {
    let mut controller = PageController::new(ctx.api.clone());

    if let Some(session) = ctx.session()? {
        match controller.restore_user(&session).await {
            Ok(()) => {}
            Err(StoryError::Api { status: 401, .. }) => {
                tracing::warn!("Stored session for {} expired", session.username);
                Session::clear(&ctx.session_path)?;
                eprintln!("Your session expired. Please log in again.");
            }
            Err(e) => return Err(e),
        }
    }

    controller.get_and_show_stories_on_start().await?;
    Ok(controller)
}

fn require_login(controller: &PageController) -> Result<&User> {
    controller.current_user().ok_or(StoryError::NotLoggedIn)
}

/// One terminal line per story.
pub fn format_story_line(story: &Story, user: Option<&User>) -> String {
    let star = match user {
        Some(user) if user.is_favorite(story) => "★ ",
        Some(_) => "☆ ",
        None => "",
    };
    let mine = if crate::render::is_user_story(story, user) {
        " [mine]"
    } else {
        ""
    };

    format!(
        "{}{} ({}) by {}, posted by {}{}\n  id: {}",
        star,
        story.title,
        story.host_name(),
        story.author,
        story.username,
        mine,
        story.story_id
    )
}

pub async fn list_stories(ctx: &AppContext, view: ListView) -> Result<()> {
    let mut controller = open_page(ctx).await?;
    if view != ListView::All {
        require_login(&controller)?;
    }
    controller.show_view(view);

    let stories = controller.visible_stories();
    if stories.is_empty() {
        println!("{}", view.empty_message());
        return Ok(());
    }

    for story in stories {
        println!("{}", format_story_line(story, controller.current_user()));
    }

    Ok(())
}

pub async fn render_page(
    ctx: &AppContext,
    out: Option<&Path>,
    open_in_browser: bool,
    view: ListView,
) -> Result<()> {
    let mut controller = open_page(ctx).await?;
    if view != ListView::All {
        require_login(&controller)?;
    }
    controller.show_view(view);

    let html = controller.page.to_html();
    match out {
        Some(path) => {
            std::fs::write(path, html)?;
            println!("Wrote {}", path.display());
            if open_in_browser {
                open::that(path)?;
            }
        }
        None => print!("{}", html),
    }

    Ok(())
}

pub async fn submit_story(ctx: &AppContext, title: &str, author: &str, url: &str) -> Result<()> {
    let mut controller = open_page(ctx).await?;
    require_login(&controller)?;

    controller.handle(PageEvent::OpenSubmitForm).await?;
    controller.page.submit_form.fill(title, author, url);
    controller.handle(PageEvent::Submit).await?;

    // A successful submission puts the new story first.
    let story = controller
        .state
        .story_list
        .stories
        .first()
        .ok_or_else(|| StoryError::StoryNotFound(title.to_string()))?;
    println!("Submitted: {}", story.title);
    println!("  id: {}", story.story_id);
    Ok(())
}

pub async fn toggle_favorite(ctx: &AppContext, story_id: &str) -> Result<()> {
    let mut controller = open_page(ctx).await?;
    require_login(&controller)?;

    if controller.toggle_favorite_story(story_id).await? {
        println!("Added to favorites: {}", story_id);
    } else {
        println!("Removed from favorites: {}", story_id);
    }
    Ok(())
}

pub async fn delete_story(ctx: &AppContext, story_id: &str) -> Result<()> {
    let mut controller = open_page(ctx).await?;
    require_login(&controller)?;

    controller
        .handle(PageEvent::TrashClicked {
            story_id: story_id.to_string(),
        })
        .await?;

    println!("Deleted story: {}", story_id);
    Ok(())
}

pub async fn login(ctx: &AppContext, username: &str, password: &str) -> Result<()> {
    let mut controller = PageController::new(ctx.api.clone());
    controller.login(username, password).await?;
    remember(ctx, &controller)
}

pub async fn signup(ctx: &AppContext, username: &str, password: &str, name: &str) -> Result<()> {
    let mut controller = PageController::new(ctx.api.clone());
    controller.signup(username, password, name).await?;
    remember(ctx, &controller)
}

fn remember(ctx: &AppContext, controller: &PageController) -> Result<()> {
    let user = require_login(controller)?;
    Session::from_user(user).save(&ctx.session_path)?;
    println!("Logged in as {}", user.username);
    Ok(())
}

pub fn logout(ctx: &AppContext) -> Result<()> {
    Session::clear(&ctx.session_path)?;
    println!("Logged out");
    Ok(())
}
