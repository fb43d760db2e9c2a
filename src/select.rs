use crate::story::Story;

/// Pick the story to feature: the first one flagged `is_featured`, or the
/// first story at all when nothing is flagged. An empty list yields `None`.
///
/// The fallback to index 0 is intentional; a list with no flagged story
/// still gets a card.
pub fn featured(stories: &[Story]) -> Option<&Story> {
    stories
        .iter()
        .find(|story| story.is_featured)
        .or_else(|| stories.first())
}
