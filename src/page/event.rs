use crate::page::ListView;

/// User interactions delivered to the page controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The submission form was submitted.
    Submit,
    /// A star control inside the list item for `story_id` was clicked.
    StarClicked { story_id: String },
    /// A trash-can control inside the list item for `story_id` was clicked.
    TrashClicked { story_id: String },
    /// A navigation link switched the visible list.
    Navigate(ListView),
    /// The "submit" navigation link opened the form.
    OpenSubmitForm,
}
