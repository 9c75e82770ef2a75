//! Index page rendering
//!
//! Renders the HTML index page from an embedded template. Placeholders of
//! the form `{{name}}` are substituted from the configuration; an unknown
//! placeholder is a render error, which the index handler turns into a 500.

use thiserror::Error;

use crate::config::Config;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("unknown template placeholder: {0}")]
    UnknownPlaceholder(String),

    #[error("unterminated template placeholder at byte {0}")]
    Unterminated(usize),
}

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>helloweb</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <div class="container">
        <h1>helloweb</h1>
        <p>A minimal Rust web server</p>

        <ul class="endpoints">
            <li><a href="/api/hello">GET /api/hello</a> &mdash; JSON greeting</li>
            <li><a href="/health">GET /health</a> &mdash; health check</li>
            <li><code>GET /static/*</code> &mdash; static assets</li>
        </ul>

        <p id="greeting">&hellip;</p>

        <div class="footer">
            <p>v{{version}} &middot; bound to {{host}}:{{port}}</p>
            <p>Powered by <a href="https://tokio.rs/">Tokio</a> + <a href="https://hyper.rs/">Hyper</a></p>
        </div>
    </div>
    <script src="/static/app.js"></script>
</body>
</html>
"#;

/// Render the index page for the given configuration.
pub fn index_page(config: &Config) -> Result<String, RenderError> {
    render(INDEX_TEMPLATE, config)
}

fn render(template: &str, config: &Config) -> Result<String, RenderError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            return Err(RenderError::Unterminated(
                template.len() - rest.len() + start,
            ));
        };
        out.push_str(&lookup(after[..end].trim(), config)?);
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

fn lookup(name: &str, config: &Config) -> Result<String, RenderError> {
    match name {
        "host" => Ok(config.server.host.clone()),
        "port" => Ok(config.server.port.to_string()),
        "version" => Ok(env!("CARGO_PKG_VERSION").to_string()),
        _ => Err(RenderError::UnknownPlaceholder(name.to_string())),
    }
}
