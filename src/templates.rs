//! Dashboard template loading and rendering.
//!
//! The page is compiled into the binary so the service runs without a
//! template directory on disk.

use tera::Tera;

use crate::error::AppError;
use crate::status::ProjectStatus;

/// Template name registered with Tera. The `.html` suffix enables autoescaping.
pub const DASHBOARD_TEMPLATE: &str = "dashboard.html";

const DASHBOARD_SOURCE: &str = include_str!("../templates/dashboard.html");

/// Initialize the Tera template engine
pub fn init_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.set_escape_fn(escape_markup);
    tera.add_raw_template(DASHBOARD_TEMPLATE, DASHBOARD_SOURCE)?;
    Ok(tera)
}

/// HTML-escape `& < > " '` and leave everything else, `/` included, as is.
///
/// Tera's built-in escaper also encodes `/`, which mangles URLs and titles
/// such as `CI/CD` in the rendered bytes.
pub fn escape_markup(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&#34;"),
            '\'' => output.push_str("&#39;"),
            _ => output.push(c),
        }
    }
    output
}

/// Render the HTML dashboard for a resolved status record.
///
/// An empty `logo_url` renders the text placeholder instead of an `<img>`.
pub fn render_dashboard(
    tera: &Tera,
    status: &ProjectStatus,
    logo_url: &str,
) -> Result<String, AppError> {
    let mut context = tera::Context::new();
    context.insert("status", status);
    context.insert("logo_url", logo_url);
    Ok(tera.render(DASHBOARD_TEMPLATE, &context)?)
}
