//! Static file serving for bundled assets such as the dashboard logo.

use std::path::Path;

use tower_http::services::ServeDir;

/// Create a static file service rooted at `root`.
///
/// Missing files answer 404 from `ServeDir` itself; directory indexes are not
/// served.
pub fn create_static_service(root: &Path) -> ServeDir {
    ServeDir::new(root).append_index_html_on_directories(false)
}
