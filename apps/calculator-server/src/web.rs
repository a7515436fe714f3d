//! Single-page web demo served at `/`.

use axum::response::Html;
use calculator_sdk::Operation;

const INDEX_TEMPLATE: &str = include_str!("../assets/index.html");

/// Values substituted into the page.
pub struct IndexContext<'a> {
    pub server_time: &'a str,
    pub platform: &'a str,
    pub version: &'a str,
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn operation_options() -> String {
    Operation::ALL
        .iter()
        .map(|op| {
            format!(
                "                    <option value=\"{}\">{}</option>\n",
                op.as_str(),
                escape_html(op.symbol())
            )
        })
        .collect()
}

#[must_use]
pub fn render_index(ctx: &IndexContext<'_>) -> String {
    INDEX_TEMPLATE
        .replace("{{ server_time }}", &escape_html(ctx.server_time))
        .replace("{{ platform }}", &escape_html(ctx.platform))
        .replace("{{ version }}", &escape_html(ctx.version))
        .replace("{{ operation_options }}", operation_options().trim_end())
}

/// Handler for GET /
pub async fn index() -> Html<String> {
    let server_time = chrono::Local::now().format("%H:%M:%S").to_string();
    Html(render_index(&IndexContext {
        server_time: &server_time,
        platform: std::env::consts::OS,
        version: env!("CARGO_PKG_VERSION"),
    }))
}
