//! Helpers for running the `wqadmin` binary against a mock proxy

#![allow(dead_code)]

use assert_cmd::Command;
use std::io::{Cursor, Write};
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const MODULE: &str = "github.com/xml520/wqadmin";

/// Build a zip archive in memory from `(name, content)` pairs
pub fn build_zip(files: &[(&str, &str)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for (name, content) in files {
        zip.start_file(*name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

/// Serve a version list, expecting it to be requested `times` times
pub async fn mock_version_list(server: &MockServer, body: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/{}/@v/list", MODULE)))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(times)
        .mount(server)
        .await;
}

/// Serve an archive, expecting it to be requested `times` times
pub async fn mock_archive(server: &MockServer, version: &str, bytes: Vec<u8>, times: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/{}/@v/{}.zip", MODULE, version)))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(bytes))
        .expect(times)
        .mount(server)
        .await;
}

/// A `wqadmin` invocation isolated from the caller's environment
pub fn wqadmin(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wqadmin"));
    cmd.current_dir(cwd)
        .env_remove("WQADMIN_PROXY")
        .env("NO_COLOR", "1");
    cmd
}

/// Run a prepared command off the async runtime
pub async fn run(mut cmd: Command) -> assert_cmd::assert::Assert {
    tokio::task::spawn_blocking(move || cmd.assert())
        .await
        .unwrap()
}
