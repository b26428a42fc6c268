use crate::domain::Story;

/// Ordered stories mirroring the server, newest first after a submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryList {
    pub stories: Vec<Story>,
}

impl StoryList {
    pub fn new(stories: Vec<Story>) -> Self {
        Self { stories }
    }

    pub fn find(&self, story_id: &str) -> Option<&Story> {
        self.stories.iter().find(|s| s.story_id == story_id)
    }

    pub fn prepend(&mut self, story: Story) {
        self.stories.insert(0, story);
    }

    pub fn remove(&mut self, story_id: &str) -> Option<Story> {
        let index = self.stories.iter().position(|s| s.story_id == story_id)?;
        Some(self.stories.remove(index))
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: &str) -> Story {
        Story {
            story_id: id.into(),
            title: "T".into(),
            author: "A".into(),
            url: "https://example.com".into(),
            username: "bob".into(),
            created_at: None,
        }
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let mut list = StoryList::new(vec![story("a"), story("b")]);
        list.prepend(story("c"));
        let ids: Vec<_> = list.stories.iter().map(|s| s.story_id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn test_remove_missing_story() {
        let mut list = StoryList::new(vec![story("a")]);
        assert!(list.remove("zzz").is_none());
        assert_eq!(list.remove("a").map(|s| s.story_id), Some("a".to_string()));
        assert!(list.is_empty());
    }
}
