//! Tests for the downloader module functionality.
//!
//! This file contains tests for the core Downloader configuration and the
//! DownloaderBuilder pattern. Transfer behavior against a live server is
//! covered by the integration tests.

use gleaner::downloader::DownloaderBuilder;

use reqwest::header::{HeaderValue, USER_AGENT};
use std::sync::{atomic, Arc};
use std::time::Duration;

mod common;
use common::helpers::*;

#[test]
fn test_builder_defaults() {
    let downloader = DownloaderBuilder::new().build();

    assert_eq!(downloader.concurrent_downloads(), 32);
    assert!(downloader.timeout().is_none());
    assert!(downloader.headers().is_none());
}

#[test]
fn test_builder_configuration() {
    let temp_dir = create_temp_dir();
    let downloader = DownloaderBuilder::new()
        .directory(temp_dir.path().to_path_buf())
        .concurrent_downloads(10)
        .timeout(Duration::from_secs(120))
        .build();

    assert_eq!(downloader.directory(), temp_dir.path());
    assert_eq!(downloader.concurrent_downloads(), 10);
    assert_eq!(downloader.timeout(), Some(Duration::from_secs(120)));
}

#[test]
fn test_downloader_debug() {
    let downloader = DownloaderBuilder::new().build();
    let debug_str = format!("{:?}", downloader);

    assert!(debug_str.contains("Downloader"));
    assert!(debug_str.contains("config"));
}

#[test]
fn test_downloader_clone() {
    let downloader = DownloaderBuilder::new().build();
    let cloned = downloader.clone();

    assert_eq!(
        downloader.concurrent_downloads(),
        cloned.concurrent_downloads()
    );
    assert_eq!(downloader.timeout(), cloned.timeout());
}

#[test]
fn test_builder_headers() {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static("gleaner-test-agent"));

    let downloader = DownloaderBuilder::new().headers(headers).build();

    assert!(downloader.headers().is_some());
    assert_eq!(
        downloader.headers().unwrap().get(USER_AGENT),
        Some(&HeaderValue::from_static("gleaner-test-agent"))
    );
}

#[test]
fn test_builder_single_header() {
    let downloader = DownloaderBuilder::new()
        .header(USER_AGENT, HeaderValue::from_static("single-test-agent"))
        .build();

    assert!(downloader.headers().is_some());
    assert_eq!(
        downloader.headers().unwrap().get(USER_AGENT),
        Some(&HeaderValue::from_static("single-test-agent"))
    );
}

#[test]
fn test_builder_header_merging() {
    let mut first = reqwest::header::HeaderMap::new();
    first.insert(USER_AGENT, HeaderValue::from_static("agent-one"));

    let downloader = DownloaderBuilder::new()
        .headers(first)
        .header(
            reqwest::header::AUTHORIZATION,
            HeaderValue::from_static("Basic aGk6MTIzNDU2Cg=="),
        )
        .build();

    let headers = downloader.headers().unwrap();
    assert_eq!(headers.len(), 2);
    assert!(headers.get(USER_AGENT).is_some());
    assert!(headers.get(reqwest::header::AUTHORIZATION).is_some());
}

#[test]
fn test_builder_hidden() {
    let downloader = DownloaderBuilder::hidden().build();

    assert_eq!(downloader.concurrent_downloads(), 32);
}

#[test]
fn test_builder_on_complete_callback() {
    let callback_called = Arc::new(atomic::AtomicBool::new(false));
    let callback_called_clone = callback_called.clone();

    let _downloader = DownloaderBuilder::new()
        .on_complete(move |_summary| {
            callback_called_clone.store(true, atomic::Ordering::SeqCst);
        })
        .build();
}

#[test]
fn test_builder_chaining() {
    let temp_dir = create_temp_dir();

    let downloader = DownloaderBuilder::new()
        .directory(temp_dir.path().to_path_buf())
        .concurrent_downloads(5)
        .timeout(Duration::from_secs(30))
        .header(USER_AGENT, HeaderValue::from_static("chained-agent"))
        .build();

    assert_eq!(downloader.directory(), temp_dir.path());
    assert_eq!(downloader.concurrent_downloads(), 5);
    assert_eq!(downloader.timeout(), Some(Duration::from_secs(30)));
    assert!(downloader.headers().is_some());
}
