//! Story markup.
//!
//! Every story becomes one `<li>` fragment. The fragment remembers which
//! controls it carries so the page can be inspected without parsing HTML.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::domain::{Story, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarIcon {
    /// The story is one of the user's favorites.
    Solid,
    Outline,
}

impl StarIcon {
    pub fn for_favorite(is_favorite: bool) -> Self {
        if is_favorite {
            StarIcon::Solid
        } else {
            StarIcon::Outline
        }
    }

    /// Font Awesome style class.
    pub fn css_class(self) -> &'static str {
        match self {
            StarIcon::Solid => "fas",
            StarIcon::Outline => "far",
        }
    }
}

/// A rendered list item for one story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryMarkup {
    pub story_id: String,
    /// `None` when nobody is logged in.
    pub star: Option<StarIcon>,
    pub deletable: bool,
    pub html: String,
}

pub fn generate_story_markup(story: &Story, user: Option<&User>) -> StoryMarkup {
    tracing::trace!("generate_story_markup {}", story.story_id);

    let star = user.map(|u| StarIcon::for_favorite(u.is_favorite(story)));
    let deletable = is_user_story(story, user);
    let host_name = story.host_name();

    let html = format!(
        r#"<li id="{id}">
  {star}{delete}<a href="{href}" target="a_blank" class="story-link">{title}</a>
  <small class="story-hostname">({host})</small>
  <small class="story-author">by {author}</small>
  <small class="story-user">posted by {username}</small>
</li>"#,
        id = encode_double_quoted_attribute(&story.story_id),
        star = star.map(star_html).unwrap_or_default(),
        delete = if deletable { delete_btn_html() } else { "" },
        href = encode_double_quoted_attribute(safe_href(&story.url)),
        title = encode_text(&story.title),
        host = encode_text(&host_name),
        author = encode_text(&story.author),
        username = encode_text(&story.username),
    );

    StoryMarkup {
        story_id: story.story_id.clone(),
        star,
        deletable,
        html,
    }
}

/// False whenever nobody is logged in.
pub fn is_user_story(story: &Story, user: Option<&User>) -> bool {
    match user {
        Some(user) => user.is_user_own_story(story),
        None => false,
    }
}

pub fn star_html(icon: StarIcon) -> String {
    format!(
        "<span class=\"star\"><i class=\"{} fa-star\"></i></span>\n  ",
        icon.css_class()
    )
}

pub fn delete_btn_html() -> &'static str {
    "<span class=\"trash-can\"><i class=\"fas fa-trash-alt\"></i></span>\n  "
}

/// Only http(s) links become clickable.
fn safe_href(url: &str) -> &str {
    match url::Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => url,
        _ => "#",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story() -> Story {
        Story {
            story_id: "s1".into(),
            title: "T".into(),
            author: "A".into(),
            url: "https://example.com/x".into(),
            username: "bob".into(),
            created_at: None,
        }
    }

    fn user(username: &str) -> User {
        User {
            username: username.into(),
            name: String::new(),
            created_at: None,
            favorites: Vec::new(),
            own_stories: Vec::new(),
            login_token: "tok".into(),
        }
    }

    #[test]
    fn test_markup_without_user() {
        let markup = generate_story_markup(&story(), None);

        assert_eq!(markup.star, None);
        assert!(!markup.deletable);
        assert!(!markup.html.contains("star"));
        assert!(!markup.html.contains("trash-can"));
        assert!(markup.html.contains("(example.com)"));
        assert!(markup.html.contains(r#"<li id="s1">"#));
        assert!(markup.html.contains(r#"target="a_blank""#));
        assert!(markup.html.contains("by A"));
        assert!(markup.html.contains("posted by bob"));
    }

    #[test]
    fn test_markup_for_owner_with_favorite() {
        let mut bob = user("bob");
        bob.mark_favorite(&story());

        let markup = generate_story_markup(&story(), Some(&bob));

        assert_eq!(markup.star, Some(StarIcon::Solid));
        assert!(markup.deletable);
        assert!(markup.html.contains(r#"<i class="fas fa-star">"#));
        assert!(markup.html.contains("trash-can"));
    }

    #[test]
    fn test_markup_for_other_user() {
        let alice = user("alice");
        let markup = generate_story_markup(&story(), Some(&alice));

        assert_eq!(markup.star, Some(StarIcon::Outline));
        assert!(markup.html.contains(r#"<i class="far fa-star">"#));
        assert!(!markup.deletable);
        assert!(!markup.html.contains("trash-can"));
    }

    #[test]
    fn test_controls_follow_user_and_ownership() {
        let bob = user("bob");
        let alice = user("alice");
        for current in [None, Some(&bob), Some(&alice)] {
            let markup = generate_story_markup(&story(), current);
            assert_eq!(markup.star.is_some(), current.is_some());
            assert_eq!(
                markup.deletable,
                current.map(|u| u.username == "bob").unwrap_or(false)
            );
        }
    }

    #[test]
    fn test_markup_escapes_user_content() {
        let mut evil = story();
        evil.title = "<script>alert(1)</script>".into();
        evil.author = "A & B".into();
        evil.story_id = "x\"><b".into();

        let markup = generate_story_markup(&evil, None);
        assert!(!markup.html.contains("<script>"));
        assert!(markup.html.contains("&lt;script&gt;"));
        assert!(markup.html.contains("A &amp; B"));
        assert!(!markup.html.contains("x\"><b"));
    }

    #[test]
    fn test_non_http_links_are_not_clickable() {
        let mut js = story();
        js.url = "javascript:alert(1)".into();
        let markup = generate_story_markup(&js, None);
        assert!(markup.html.contains(r##"href="#""##));
    }

    #[test]
    fn test_is_user_story_without_user() {
        assert!(!is_user_story(&story(), None));
        assert!(is_user_story(&story(), Some(&user("bob"))));
    }

    #[test]
    fn test_star_icon_class() {
        assert_eq!(StarIcon::for_favorite(true).css_class(), "fas");
        assert_eq!(StarIcon::for_favorite(false).css_class(), "far");
    }
}
