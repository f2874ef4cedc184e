use course_core::model::{DocFormat, Documentation};

#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);
    options.insert(pulldown_cmark::Options::ENABLE_TASKLISTS);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

/// Markup for the documentation pane.
///
/// Catalog documentation is trusted; HTML bodies pass through untouched.
#[must_use]
pub fn documentation_html(doc: &Documentation) -> String {
    match doc.format {
        DocFormat::Html => doc.body.clone(),
        DocFormat::Markdown => markdown_to_html(&doc.body),
    }
}
