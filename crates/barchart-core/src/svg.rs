// File: crates/barchart-core/src/svg.rs
// Summary: Serialize a scene subtree to SVG/XML markup.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::Result;
use crate::scene::{Node, NodeRef};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Markup for `node` and its descendants.
pub fn to_string(node: &NodeRef) -> String {
    let mut out = String::new();
    write_node(&node.borrow(), &mut out, false);
    out
}

/// Standalone SVG document for `svg` (an `<svg>` element), with the namespace
/// declared on the root.
pub fn to_document(svg: &NodeRef) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    write_node(&svg.borrow(), &mut out, true);
    out.push('\n');
    out
}

/// Write `svg` as a standalone document to `path`, creating parent directories.
pub fn write(svg: &NodeRef, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_document(svg))?;
    Ok(())
}

fn write_node(node: &Node, out: &mut String, root: bool) {
    out.push('<');
    out.push_str(&node.tag);
    if root && node.tag == "svg" && node.attr("xmlns").is_none() {
        let _ = write!(out, " xmlns=\"{SVG_NS}\"");
    }
    for (k, v) in node.attrs() {
        let _ = write!(out, " {k}=\"{}\"", escape(v));
    }
    if !node.styles().is_empty() {
        let style = node
            .styles()
            .iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = write!(out, " style=\"{}\"", escape(&style));
    }
    if node.text().is_none() && node.children().is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    if let Some(text) = node.text() {
        out.push_str(&escape(text));
    }
    for child in node.children() {
        write_node(&child.borrow(), out, false);
    }
    let _ = write!(out, "</{}>", node.tag);
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
