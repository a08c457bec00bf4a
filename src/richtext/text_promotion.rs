//! Plain-text clipboard payloads promoted to minimal HTML.
//!
//! Line rules, checked in order:
//! - `-`, `*`, `•`, `·` followed by whitespace: unordered list item
//! - digits followed by `.`, `、` or `)` and whitespace: ordered list item
//! - anything else: paragraph
//!
//! Blank lines close any open list. All text is escaped; nothing in the
//! input is ever treated as markup.

use std::sync::LazyLock;

use html_escape::encode_text;
use regex::Regex;

static UNORDERED_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-*•·]\s+(.*)$").expect("UNORDERED_ITEM_RE: hardcoded regex is valid")
});

static ORDERED_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+[.、)]\s+(.*)$").expect("ORDERED_ITEM_RE: hardcoded regex is valid")
});

static INLINE_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("INLINE_SPACE_RE: hardcoded regex is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

struct HtmlBuilder {
    html: String,
    open_list: Option<ListKind>,
}

impl HtmlBuilder {
    fn close_list(&mut self) {
        if let Some(kind) = self.open_list.take() {
            self.html.push_str("</");
            self.html.push_str(kind.tag());
            self.html.push('>');
        }
    }

    fn list_item(&mut self, kind: ListKind, text: &str) {
        if self.open_list != Some(kind) {
            self.close_list();
            self.html.push('<');
            self.html.push_str(kind.tag());
            self.html.push('>');
            self.open_list = Some(kind);
        }
        self.html.push_str("<li>");
        self.html.push_str(&inline(text));
        self.html.push_str("</li>");
    }

    fn paragraph(&mut self, text: &str) {
        self.close_list();
        self.html.push_str("<p>");
        self.html.push_str(&inline(text));
        self.html.push_str("</p>");
    }
}

fn inline(text: &str) -> String {
    INLINE_SPACE_RE.replace_all(&encode_text(text), " ").into_owned()
}

/// Convert plain text to list/paragraph HTML.
#[must_use]
pub fn promote_plain_text(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut builder = HtmlBuilder {
        html: String::new(),
        open_list: None,
    };

    for line in normalized.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            builder.close_list();
            continue;
        }

        if let Some(caps) = UNORDERED_ITEM_RE.captures(line) {
            builder.list_item(ListKind::Unordered, &caps[1]);
        } else if let Some(caps) = ORDERED_ITEM_RE.captures(line) {
            builder.list_item(ListKind::Ordered, &caps[1]);
        } else {
            builder.paragraph(line);
        }
    }

    builder.close_list();
    builder.html
}
