use crate::card::{CardData, View};
use build_html::{escape_html, Container, ContainerType, Html, HtmlContainer};

/// Renders a [`View`] into the HTML fragment the host page embeds.
pub struct HtmlBuilder {
    builder: Container,
}

fn block(class: &str) -> Container {
    Container::new(ContainerType::Div).with_attributes(vec![("class", class)])
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self {
            builder: Container::new(ContainerType::Article)
                .with_attributes(vec![("class", "featured-story")]),
        }
    }

    pub fn from_view(&mut self, view: &View) -> String {
        match view {
            View::Loading => self.loading(),
            View::Empty => self.empty(),
            View::Populated(card) => self.populated(card),
        }
    }

    /// Placeholder geometry only. Mirrors the populated layout so the page
    /// does not shift when the data arrives.
    fn loading(&mut self) -> String {
        let mut media = block("card-media");
        media.add_container(block("skeleton skeleton-cover"));

        let mut overlay = block("card-overlay");
        overlay.add_container(block("skeleton skeleton-title"));
        overlay.add_container(block("skeleton skeleton-tag"));
        media.add_container(overlay);

        let mut body = block("card-body");
        body.add_container(block("skeleton skeleton-heading"));
        for _ in 0..3 {
            body.add_container(block("skeleton skeleton-line"));
        }

        let mut byline = block("card-byline");
        byline.add_container(block("skeleton skeleton-avatar"));
        byline.add_container(block("skeleton skeleton-name"));
        byline.add_container(block("skeleton skeleton-date"));
        body.add_container(byline);

        self.builder.add_container(media);
        self.builder.add_container(body);

        self.builder.to_html_string()
    }

    fn empty(&mut self) -> String {
        self.builder
            .add_paragraph_attr("No stories available", vec![("class", "card-empty")]);

        self.builder.to_html_string()
    }

    fn populated(&mut self, card: &CardData) -> String {
        let onerror = format!(
            "this.onerror=null;this.src='{}'",
            escape_html(&card.cover_fallback)
        );

        let mut media = block("card-media");
        media.add_image_attr(
            escape_html(&card.cover),
            escape_html(&card.title),
            vec![("class", "card-cover"), ("onerror", onerror.as_str())],
        );

        let mut overlay = block("card-overlay");
        if let Some(tag) = &card.tag {
            let style = format!("background-color: {}", escape_html(&card.tag_color));
            overlay.add_container(
                Container::new(ContainerType::Div)
                    .with_attributes(vec![("class", "card-tag"), ("style", style.as_str())])
                    .with_raw(escape_html(tag)),
            );
        }
        overlay.add_header_attr(1, escape_html(&card.title), vec![("class", "card-title")]);
        media.add_container(overlay);

        let mut body = block("card-body");
        body.add_header_attr(2, "Featured Story", vec![("class", "card-heading")]);
        body.add_paragraph_attr(escape_html(&card.excerpt), vec![("class", "card-excerpt")]);

        let mut byline = block("card-byline");
        match &card.avatar {
            Some(avatar) => {
                let onerror = format!(
                    "this.onerror=null;this.src='{}'",
                    escape_html(&card.avatar_fallback)
                );
                byline.add_image_attr(
                    escape_html(avatar),
                    escape_html(&card.author),
                    vec![("class", "card-avatar"), ("onerror", onerror.as_str())],
                )
            }
            None => byline.add_raw(format!(
                "<span class=\"card-avatar-fallback\">{}</span>",
                escape_html(&card.avatar_initial)
            )),
        }

        let mut who = block("card-author");
        who.add_paragraph_attr(escape_html(&card.author), vec![("class", "card-author-name")]);
        who.add_paragraph_attr(escape_html(&card.published), vec![("class", "card-published")]);
        byline.add_container(who);
        body.add_container(byline);

        self.builder.add_container(media);
        self.builder.add_container(body);

        format!(
            "<a href=\"{}\" class=\"featured-story-link\">{}</a>",
            escape_html(&card.href),
            self.builder.to_html_string()
        )
    }
}

#[cfg(test)]
mod test {
    use crate::card::{compose, HtmlBuilder, View};
    use crate::config::Theme;
    use crate::story::Story;

    fn story() -> Story {
        Story {
            id: "42".into(),
            title: "Tide & current".into(),
            content: "Spring tides ran higher than forecast this week.".into(),
            cover_image: "https://img.example/tide.jpg".into(),
            tags: vec!["Weather".into()],
            tag_type: "news".into(),
            is_featured: true,
            author_name: Some("Jo Reiner".into()),
            author_image: None,
            published_at: "2024-02-01T08:00:00Z".into(),
        }
    }

    #[test]
    fn loading_renders_skeleton_only() {
        let html = HtmlBuilder::new().from_view(&View::Loading);

        assert!(html.starts_with("<article class=\"featured-story\">"));
        assert!(html.contains("skeleton skeleton-cover"));
        assert!(html.contains("skeleton skeleton-avatar"));
        assert!(!html.contains("<a href"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn empty_renders_the_notice() {
        let html = HtmlBuilder::new().from_view(&View::Empty);

        assert!(html.contains("No stories available"));
        assert!(!html.contains("skeleton"));
    }

    #[test]
    fn populated_binds_markup_and_navigation() {
        let theme = Theme::default();
        let view = compose(&[story()], false, &theme);
        let html = HtmlBuilder::new().from_view(&view);

        assert!(html.starts_with("<a href=\"/story/42\""));
        assert!(html.contains("src=\"https://img.example/tide.jpg\""));
        assert!(html.contains("this.src='/assets/cover-fallback.png'"));
        assert!(html.contains(&format!("background-color: {}", theme.tag_colors["news"])));
        assert!(html.contains(">Weather<"));
        assert!(html.contains("Tide &amp; current"));
        assert!(html.contains("Featured Story"));
        assert!(html.contains("Spring tides ran higher"));
        assert!(html.contains("Jo Reiner"));
        assert!(html.contains("card-avatar-fallback\">J</span>"));
    }

    #[test]
    fn missing_tag_renders_no_chip() {
        let mut untagged = story();
        untagged.tags.clear();

        let view = compose(&[untagged], false, &Theme::default());
        let html = HtmlBuilder::new().from_view(&view);

        assert!(!html.contains("card-tag"));
        assert!(html.contains("card-title"));
    }

    #[test]
    fn interpolated_text_is_escaped() {
        let mut sly = story();
        sly.title = "<script>alert(1)</script>".into();

        let view = compose(&[sly], false, &Theme::default());
        let html = HtmlBuilder::new().from_view(&view);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
