use std::fmt::Write;

#[derive(Debug, thiserror::Error)]
pub(crate) enum RenderError {
    #[error("failed to write page: {0}")]
    Format(#[from] std::fmt::Error),
}

#[derive(Debug)]
pub(crate) struct PageData {
    pub(crate) stories: Vec<crate::story::DisplayItem>,
    pub(crate) time: std::time::Duration,
}

pub(crate) trait Render: Send + Sync {
    fn render(&self, page: &PageData) -> Result<String, RenderError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct HtmlRenderer;

const HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Quiet Hacker News</title>
  <style>
    body { padding: 20px; background: #f6f6ef; font-family: Verdana, Geneva, sans-serif; }
    body, a { color: #333; }
    li { padding-bottom: 10px; }
    .host { color: #828282; font-size: 0.8em; }
    footer { margin-top: 20px; color: #828282; font-size: 0.8em; }
  </style>
</head>
<body>
  <h1>Quiet Hacker News</h1>
  <ol>
"#;

impl Render for HtmlRenderer {
    fn render(&self, page: &PageData) -> Result<String, RenderError> {
        let mut html = String::with_capacity(HEAD.len() + page.stories.len() * 160);
        html.push_str(HEAD);

        for story in &page.stories {
            write!(
                html,
                "    <li><a href=\"{}\" title=\"{}\">{}</a>",
                html_escape::encode_double_quoted_attribute(story.url()),
                html_escape::encode_double_quoted_attribute(&tooltip(&story.item)),
                html_escape::encode_text(&story.item.title),
            )?;
            if !story.host.is_empty() {
                write!(
                    html,
                    " <span class=\"host\">({})</span>",
                    html_escape::encode_text(&story.host)
                )?;
            }
            html.push_str("</li>\n");
        }

        write!(
            html,
            "  </ol>\n  <footer>This page was rendered in {:?}</footer>\n</body>\n</html>\n",
            page.time
        )?;

        Ok(html)
    }
}

/// Points, author and comment count, kept out of sight in the link tooltip.
fn tooltip(item: &crate::hn_api::Item) -> String {
    let mut text = format!("{} points", item.score);
    if !item.by.is_empty() {
        text.push_str(&format!(" by {}", item.by));
    }
    if let Some(comments) = item.descendants {
        text.push_str(&format!(", {comments} comments"));
    }
    text
}
