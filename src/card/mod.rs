mod html;

pub use html::HtmlBuilder;

use crate::{config::Theme, select, story::Story, text, timefmt};
use unicode_segmentation::UnicodeSegmentation;

/// Excerpt bound for the card body, in graphemes.
pub const EXCERPT_LEN: usize = 300;

/// One render pass worth of output. Recomputed from the inputs on every
/// call; the three variants are mutually exclusive.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum View {
    Loading,
    Empty,
    Populated(CardData),
}

/// Everything the populated card binds, resolved down to plain strings.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct CardData {
    /// Navigation hint for the host router.
    pub href: String,
    pub title: String,
    /// First tag only. `None` when the story has no tags.
    pub tag: Option<String>,
    pub tag_color: String,
    pub cover: String,
    /// Swapped in for `cover` when it fails to load.
    pub cover_fallback: String,
    pub excerpt: String,
    pub author: String,
    pub avatar: Option<String>,
    /// Swapped in for `avatar` when it fails to load.
    pub avatar_fallback: String,
    /// First grapheme of the author name, shown when `avatar` is absent.
    pub avatar_initial: String,
    pub published: String,
}

/// Decide the view for `(stories, is_loading)`. Loading wins outright and
/// never inspects the list; otherwise the selected story is bound, and an
/// empty selection becomes the empty notice.
pub fn compose(stories: &[Story], is_loading: bool, theme: &Theme) -> View {
    if is_loading {
        return View::Loading;
    }

    match select::featured(stories) {
        Some(story) => View::Populated(CardData::bind(story, theme)),
        None => View::Empty,
    }
}

impl CardData {
    fn bind(story: &Story, theme: &Theme) -> Self {
        let author = story
            .author_name
            .clone()
            .unwrap_or_else(|| theme.default_author.clone());

        Self {
            href: format!("/story/{}", story.id),
            title: story.title.clone(),
            tag: story.tags.first().cloned(),
            tag_color: theme.tag_color(&story.tag_type).to_owned(),
            cover: story.cover_image.clone(),
            cover_fallback: theme.fallback_cover.clone(),
            excerpt: text::excerpt(&story.content, EXCERPT_LEN),
            avatar: story.author_image.clone(),
            avatar_fallback: theme.fallback_avatar.clone(),
            avatar_initial: author.graphemes(true).next().unwrap_or("?").to_owned(),
            author,
            published: timefmt::relative_from_now(&story.published_at),
        }
    }
}
