use regex::Regex;
use std::sync::LazyLock;

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn format_inline(line: &str) -> String {
    let bolded = BOLD.replace_all(line, "<strong>$1</strong>");
    ITALIC.replace_all(&bolded, "<em>$1</em>").into_owned()
}

fn flush_paragraph(lines: &mut Vec<String>, out: &mut String) {
    if !lines.is_empty() {
        out.push_str("<p>");
        out.push_str(&lines.join("<br>"));
        out.push_str("</p>");
        lines.clear();
    }
}

fn flush_list(items: &mut Vec<String>, out: &mut String) {
    if !items.is_empty() {
        out.push_str("<ul>");
        for item in items.iter() {
            out.push_str("<li>");
            out.push_str(item);
            out.push_str("</li>");
        }
        out.push_str("</ul>");
        items.clear();
    }
}

/// Converts the light markdown models tend to emit into escaped HTML.
///
/// Blank lines separate blocks, `- ` lines become list items and the
/// remaining lines of a block form one paragraph joined with `<br>`.
pub fn format_text(text: &str) -> String {
    let escaped = escape_html(&text.replace("\r\n", "\n"));
    let mut out = String::new();

    for block in escaped.split("\n\n") {
        let mut paragraph = Vec::new();
        let mut items = Vec::new();

        for line in block.lines().filter(|l| !l.trim().is_empty()) {
            if let Some(item) = line.trim_start().strip_prefix("- ") {
                flush_paragraph(&mut paragraph, &mut out);
                items.push(format_inline(item.trim()));
            } else {
                flush_list(&mut items, &mut out);
                paragraph.push(format_inline(line));
            }
        }

        flush_paragraph(&mut paragraph, &mut out);
        flush_list(&mut items, &mut out);
    }

    out
}
