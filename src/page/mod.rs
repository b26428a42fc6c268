pub mod event;

pub use event::PageEvent;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::render::StoryMarkup;

/// Which stories the list container shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListView {
    #[default]
    All,
    Favorites,
    OwnStories,
}

impl ListView {
    pub fn heading(self) -> &'static str {
        match self {
            ListView::All => "All stories",
            ListView::Favorites => "Favorites",
            ListView::OwnStories => "My stories",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            ListView::All => "No stories yet!",
            ListView::Favorites => "No favorites added!",
            ListView::OwnStories => "No stories added by user yet!",
        }
    }
}

/// The story submission form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitForm {
    pub visible: bool,
    pub title: String,
    pub author: String,
    pub url: String,
}

impl SubmitForm {
    pub fn fill(&mut self, title: &str, author: &str, url: &str) {
        self.title = title.to_string();
        self.author = author.to_string();
        self.url = url.to_string();
    }

    pub fn reset(&mut self) {
        self.title.clear();
        self.author.clear();
        self.url.clear();
    }
}

/// Everything the user can see.
#[derive(Debug, Clone)]
pub struct Page {
    pub loading_msg_visible: bool,
    pub list_visible: bool,
    pub view: ListView,
    pub submit_form: SubmitForm,
    pub error_message: Option<String>,
    pub logged_in_as: Option<String>,
    items: Vec<StoryMarkup>,
}

impl Page {
    pub fn new() -> Self {
        Self {
            loading_msg_visible: true,
            list_visible: false,
            view: ListView::All,
            submit_form: SubmitForm::default(),
            error_message: None,
            logged_in_as: None,
            items: Vec::new(),
        }
    }

    pub fn items(&self) -> &[StoryMarkup] {
        &self.items
    }

    pub fn item(&self, story_id: &str) -> Option<&StoryMarkup> {
        self.items.iter().find(|m| m.story_id == story_id)
    }

    pub fn item_ids(&self) -> Vec<&str> {
        self.items.iter().map(|m| m.story_id.as_str()).collect()
    }

    pub fn remove_loading_msg(&mut self) {
        self.loading_msg_visible = false;
    }

    pub fn empty_list(&mut self) {
        self.items.clear();
    }

    pub fn append(&mut self, markup: StoryMarkup) {
        self.items.push(markup);
    }

    pub fn prepend(&mut self, markup: StoryMarkup) {
        self.items.insert(0, markup);
    }

    /// Swaps in fresh markup for an item already on the page.
    pub fn replace(&mut self, markup: StoryMarkup) -> bool {
        match self.items.iter_mut().find(|m| m.story_id == markup.story_id) {
            Some(slot) => {
                *slot = markup;
                true
            }
            None => false,
        }
    }

    pub fn show_list(&mut self) {
        self.list_visible = true;
    }

    pub fn show_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Renders the whole page as an HTML document.
    pub fn to_html(&self) -> String {
        let mut html = String::from(
            "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"utf-8\">\n  <title>Hack or Snooze</title>\n  \
             <link rel=\"stylesheet\" href=\"https://use.fontawesome.com/releases/v5.3.1/css/all.css\">\n\
             </head>\n<body>\n",
        );

        html.push_str("<nav>\n  <b>Hack or Snooze</b>\n");
        if let Some(username) = &self.logged_in_as {
            html.push_str(&format!(
                "  <span id=\"nav-user-profile\">{}</span>\n",
                encode_text(username)
            ));
        }
        html.push_str("</nav>\n");

        if let Some(message) = &self.error_message {
            html.push_str(&format!(
                "<div id=\"error-msg\" class=\"error\">{}</div>\n",
                encode_text(message)
            ));
        }

        if self.loading_msg_visible {
            html.push_str("<div id=\"stories-loading-msg\">Loading&hellip;</div>\n");
        }

        html.push_str(&self.submit_form_html());

        html.push_str(&format!("<h2>{}</h2>\n", self.view.heading()));
        html.push_str(&format!(
            "<ol id=\"all-stories-list\" class=\"stories-list\"{}>\n",
            if self.list_visible { "" } else { " hidden" }
        ));
        if self.items.is_empty() && self.list_visible {
            html.push_str(&format!("<h5>{}</h5>\n", self.view.empty_message()));
        }
        for item in &self.items {
            html.push_str(&item.html);
            html.push('\n');
        }
        html.push_str("</ol>\n</body>\n</html>\n");

        html
    }

    fn submit_form_html(&self) -> String {
        format!(
            r#"<form id="submit-form"{hidden}>
  <input id="story-title" value="{title}">
  <input id="story-author" value="{author}">
  <input id="story-url" value="{url}">
  <button type="submit">submit</button>
</form>
"#,
            hidden = if self.submit_form.visible { "" } else { " hidden" },
            title = encode_double_quoted_attribute(&self.submit_form.title),
            author = encode_double_quoted_attribute(&self.submit_form.author),
            url = encode_double_quoted_attribute(&self.submit_form.url),
        )
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
