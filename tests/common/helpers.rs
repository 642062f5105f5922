use std::path::Path;
use std::sync::Once;

use gleaner::downloader::{Downloader, DownloaderBuilder};
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Initializes the tracing subscriber once for the whole test binary.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Builds an nginx-style index page from a list of hrefs.
pub fn listing_html(hrefs: &[&str]) -> String {
    let links = hrefs
        .iter()
        .map(|h| format!("<a href=\"{h}\">{h}</a>\n"))
        .collect::<String>();
    format!(
        "<html><head><title>Index of /files</title></head>\
         <body><h1>Index of /files</h1><hr><pre><a href=\"../\">../</a>\n{links}</pre>\
         <hr></body></html>"
    )
}

/// Mounts a listing page at the given directory path (trailing slash included).
pub async fn mount_listing(server: &MockServer, dir: &str, html: &str) {
    Mock::given(method("GET"))
        .and(path(dir))
        .respond_with(ResponseTemplate::new(200).set_body_string(html.to_string()))
        .mount(server)
        .await;
}

/// Mounts a file body at the given path, expecting it to be fetched exactly
/// `expected_hits` times.
pub async fn mount_file(server: &MockServer, file_path: &str, body: &[u8], expected_hits: u64) {
    Mock::given(method("GET"))
        .and(path(file_path))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .expect(expected_hits)
        .mount(server)
        .await;
}

/// The directory base URL for a mock server's `/files/` listing.
pub fn files_base(server: &MockServer) -> Url {
    Url::parse(&format!("{}/files/", server.uri())).expect("mock server URL")
}

/// Creates a quiet downloader writing into the given directory.
pub fn test_downloader(dir: &Path) -> Downloader {
    DownloaderBuilder::hidden()
        .directory(dir.to_path_buf())
        .concurrent_downloads(2)
        .build()
}

/// Turns a list of entry literals into the owned form the scheduler takes.
pub fn entries(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}
