//! Static file serving
//!
//! Resolves request paths beneath the configured root and builds file,
//! index, directory-listing, and error responses.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::config::AppContext;
use crate::http::{self, mime};
use crate::logger;

/// Serve the file or directory a request path names under the root.
pub async fn serve(ctx: &AppContext, request_path: &str, is_head: bool) -> Response<Full<Bytes>> {
    let decoded = percent_decode(request_path);

    let Some(resolved) = resolve_path(&ctx.root, &decoded) else {
        return http::build_404_response();
    };

    if resolved.is_dir() {
        // Directory URLs are canonical with a trailing slash
        if !request_path.ends_with('/') {
            return http::build_redirect_response(&format!("{request_path}/"));
        }

        for index in &ctx.config.files.index_files {
            let candidate = resolved.join(index);
            if candidate.is_file() {
                return serve_file(&candidate, is_head).await;
            }
        }

        return serve_listing(&resolved, &decoded, is_head).await;
    }

    serve_file(&resolved, is_head).await
}

/// Map a decoded request path to a canonical filesystem path under `root`.
///
/// Empty and `.` segments are dropped; any `..` segment rejects the whole
/// path. The canonicalized result must still live under the root, so
/// symlinks cannot lead outside it either.
pub fn resolve_path(root: &Path, decoded_path: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();
    for segment in decoded_path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            segment => relative.push(segment),
        }
    }

    let canonical = root.join(relative).canonicalize().ok()?;
    canonical.starts_with(root).then_some(canonical)
}

/// Decode `%XX` escapes; malformed escapes pass through unchanged.
pub fn percent_decode(path: &str) -> String {
    let bytes = path.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                decoded.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

async fn serve_file(path: &Path, is_head: bool) -> Response<Full<Bytes>> {
    match fs::read(path).await {
        Ok(content) => http::build_file_response(content, mime::content_type_for(path), is_head),
        Err(e) => {
            logger::log_warning(&format!("Failed to read '{}': {e}", path.display()));
            filesystem_error_response(&e)
        }
    }
}

/// Generate an HTML listing for a directory with no index file.
async fn serve_listing(dir: &Path, display_path: &str, is_head: bool) -> Response<Full<Bytes>> {
    let mut reader = match fs::read_dir(dir).await {
        Ok(reader) => reader,
        Err(e) => {
            logger::log_warning(&format!(
                "Failed to list directory '{}': {e}",
                dir.display()
            ));
            return filesystem_error_response(&e);
        }
    };

    let mut entries = Vec::new();
    while let Ok(Some(entry)) = reader.next_entry().await {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.path().is_dir() {
            name.push('/');
        }
        entries.push(name);
    }
    entries.sort_by_key(|name| name.to_lowercase());

    http::build_html_response(render_listing(display_path, &entries), is_head)
}

fn render_listing(display_path: &str, entries: &[String]) -> String {
    let title = format!("Index of {}", html_escape(display_path));

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n</head>\n<body>\n"));
    html.push_str(&format!("<h1>{title}</h1>\n<hr>\n<ul>\n"));
    for name in entries {
        let escaped = html_escape(name);
        html.push_str(&format!("<li><a href=\"{escaped}\">{escaped}</a></li>\n"));
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    html
}

fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Permission problems surface as 403, everything else as 404.
fn filesystem_error_response(err: &std::io::Error) -> Response<Full<Bytes>> {
    if err.kind() == std::io::ErrorKind::PermissionDenied {
        http::build_403_response()
    } else {
        http::build_404_response()
    }
}
