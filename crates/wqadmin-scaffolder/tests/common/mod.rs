//! Shared helpers for scaffolder integration tests

#![allow(dead_code)]

use std::io::{Cursor, Write};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wqadmin_scaffolder::{RewriteRules, ScaffoldConfig};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const MODULE: &str = "github.com/xml520/wqadmin";

/// Rewrite rules matching the wqadmin template
pub fn go_rules() -> RewriteRules {
    RewriteRules {
        identifier: "wqadmin".to_string(),
        excluded_marker: "wqadmincli".to_string(),
        source_suffixes: vec![".go".to_string()],
        manifest_file: "go.mod".to_string(),
    }
}

/// Config pointing at a mock proxy
pub fn test_config(proxy: &str) -> ScaffoldConfig {
    ScaffoldConfig {
        proxy_url: url::Url::parse(proxy).unwrap(),
        module_path: MODULE.to_string(),
        user_agent: "wqadmin-test".to_string(),
        rules: go_rules(),
    }
}

/// One entry of a test archive; a trailing `/` makes it a directory
pub struct ZipEntry<'a> {
    pub name: &'a str,
    pub content: &'a [u8],
}

pub fn file<'a>(name: &'a str, content: &'a str) -> ZipEntry<'a> {
    ZipEntry {
        name,
        content: content.as_bytes(),
    }
}

pub fn dir(name: &str) -> ZipEntry<'_> {
    ZipEntry { name, content: &[] }
}

/// Build a zip archive in memory, deflating every file
pub fn build_zip(entries: &[ZipEntry<'_>]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for entry in entries {
        if entry.name.ends_with('/') {
            zip.add_directory(entry.name, options).unwrap();
        } else {
            zip.start_file(entry.name, options).unwrap();
            zip.write_all(entry.content).unwrap();
        }
    }
    zip.finish().unwrap().into_inner()
}

/// Serve a version list at `/{MODULE}/@v/list`
pub async fn mock_version_list(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{}/@v/list", MODULE)))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Serve an archive at `/{MODULE}/@v/{version}.zip`
pub async fn mock_archive(server: &MockServer, version: &str, bytes: Vec<u8>) {
    Mock::given(method("GET"))
        .and(path(format!("/{}/@v/{}.zip", MODULE, version)))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(bytes))
        .mount(server)
        .await;
}
