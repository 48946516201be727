use comrak::{ComrakOptions, ComrakPlugins, markdown_to_html_with_plugins};
use once_cell::sync::Lazy;

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options
});

/// Renders a coach reply to HTML. Raw HTML in the model's output stays
/// escaped.
pub fn markdown_to_html(md: &str) -> String {
    let plugins = ComrakPlugins::default();
    markdown_to_html_with_plugins(md, &MARKDOWN_OPTIONS, &plugins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_renders_emphasis() {
        let html = markdown_to_html("take a *gentle* stretch");
        assert!(html.contains("<em>gentle</em>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = markdown_to_html("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
    }
}
