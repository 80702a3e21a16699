use leptos::*;
use pulldown_cmark::{html, Options, Parser};

pub fn render_markdown(content: &str) -> String {
    let parser = Parser::new_ext(content, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Renders an announcement body written in Markdown
#[component]
pub fn MarkdownView(#[prop(into)] content: MaybeSignal<String>) -> impl IntoView {
    view! {
        <div class="markdown-content" inner_html=move || content.with(|c| render_markdown(c))></div>
    }
}
