//! Server-side HTML rendering for the landing, admin and customer pages.
//!
//! Pages are plain strings built from the view models in `catalog_core`.
//! All user-supplied text goes through [`escape`].

pub mod admin;
pub mod landing;
pub mod storefront;

use std::fmt::Write;

use catalog_core::notice::Notice;

/// Image shown for products without one.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;padding:1.5rem;color:#1f2937}\
a{color:inherit}\
table{border-collapse:collapse;width:100%}\
th,td{padding:.5rem;text-align:left;border-bottom:1px solid #e5e7eb}\
tr:nth-child(even){background:#f3f4f6}\
.badge{padding:.2rem .5rem;border-radius:.3rem;color:#fff;font-weight:600}\
.public{background:#16a34a}.hidden{background:#dc2626}\
.notice{padding:.75rem;border-radius:.4rem;margin-bottom:1rem}\
.notice.ok{background:#dcfce7}.notice.err{background:#fee2e2}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(220px,1fr));gap:1.5rem}\
.card{border:1px solid #e5e7eb;border-radius:.75rem;overflow:hidden}\
.card img{width:100%;height:200px;object-fit:cover}\
.card .body{padding:.75rem}\
.panel{border:1px solid #e5e7eb;border-radius:.5rem;padding:1rem;margin:1rem 0;background:#f9fafb}\
.thumb{width:48px;height:48px;object-fit:cover;border-radius:.3rem}";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Format a price the way the catalog displays it (`$12.5`, `$300`).
pub fn price(value: f64) -> String {
    format!("${value}")
}

/// Wrap a page body in the shared document shell.
pub fn layout(title: &str, body: &str) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{}</title><style>{STYLE}</style></head><body>{body}</body></html>",
        escape(title),
    );
    html
}

pub fn notice_banner(notice: Option<Notice>) -> String {
    match notice {
        None => String::new(),
        Some(notice) => {
            let class = if notice.is_error() { "err" } else { "ok" };
            format!(
                "<div class=\"notice {class}\" role=\"status\">{}</div>",
                escape(notice.message())
            )
        }
    }
}
