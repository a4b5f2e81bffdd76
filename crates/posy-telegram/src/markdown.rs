// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! MarkdownV2 rendering for Telegram Bot API.
//!
//! Telegram's MarkdownV2 parse mode requires escaping 18 special characters
//! in plain text. Inside a link target only `)` and `\` need escaping.

use posy_core::Span;

/// Characters that must be escaped in MarkdownV2 text.
const SPECIAL_CHARS: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Escapes text for Telegram MarkdownV2 parse mode.
pub fn escape_markdown_v2(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    for ch in text.chars() {
        if SPECIAL_CHARS.contains(&ch) || ch == '\\' {
            result.push('\\');
        }
        result.push(ch);
    }
    result
}

/// Escapes the URL part of an inline link.
pub fn escape_link_url(url: &str) -> String {
    let mut result = String::with_capacity(url.len());
    for ch in url.chars() {
        if ch == ')' || ch == '\\' {
            result.push('\\');
        }
        result.push(ch);
    }
    result
}

/// Renders view spans as a MarkdownV2 message body.
pub fn render(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::Text(text) => escape_markdown_v2(text),
            Span::Bold(text) => format!("*{}*", escape_markdown_v2(text)),
            Span::Link { text, url } => {
                format!("[{}]({})", escape_markdown_v2(text), escape_link_url(url))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string() {
        assert_eq!(escape_markdown_v2(""), "");
    }

    #[test]
    fn plain_text_no_special_chars() {
        assert_eq!(escape_markdown_v2("Hello world"), "Hello world");
    }

    #[test]
    fn escapes_all_special_characters() {
        let input = "_*[]()~`>#+-=|{}.!";
        let expected = "\\_\\*\\[\\]\\(\\)\\~\\`\\>\\#\\+\\-\\=\\|\\{\\}\\.\\!";
        assert_eq!(escape_markdown_v2(input), expected);
    }

    #[test]
    fn escapes_backslash() {
        assert_eq!(escape_markdown_v2(r"a\b"), r"a\\b");
    }

    #[test]
    fn emoji_and_apostrophes_pass_through() {
        assert_eq!(
            escape_markdown_v2("💐 Valentine's Day 💐"),
            "💐 Valentine's Day 💐"
        );
    }

    #[test]
    fn link_url_escapes_only_parens_and_backslash() {
        assert_eq!(
            escape_link_url("https://shop.example/p_(1).html"),
            "https://shop.example/p_(1\\).html"
        );
    }

    #[test]
    fn renders_product_page_spans() {
        let spans = vec![
            Span::Text("💐 ".into()),
            Span::Bold("Rose-Box".into()),
            Span::Text(" 💐\n\n".into()),
            Span::Bold("Price:".into()),
            Span::Text(" AED49.99\n\n".into()),
            Span::Link {
                text: "View on our website".into(),
                url: "https://shop.example/products/rose-box".into(),
            },
        ];
        assert_eq!(
            render(&spans),
            "💐 *Rose\\-Box* 💐\n\n*Price:* AED49\\.99\n\n[View on our website](https://shop.example/products/rose-box)"
        );
    }
}
