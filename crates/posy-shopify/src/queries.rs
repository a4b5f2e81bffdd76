// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! GraphQL documents and search-syntax helpers.
//!
//! Search strings are passed as the `$query` variable, never spliced into
//! the document, so only Shopify's search syntax needs escaping.

/// Active products with the fields the storefront renders.
pub const ACTIVE_PRODUCTS: &str = r#"
query ActiveProducts($first: Int!) {
  products(first: $first, query: "status:active") {
    edges {
      node {
        handle
        title
        description
        featuredImage { url }
        onlineStoreUrl
        tags
        variants(first: 1) { edges { node { price } } }
      }
    }
  }
}
"#;

/// Products matching a search string, with listing status for filtering.
pub const SEARCH_PRODUCTS: &str = r#"
query SearchProducts($first: Int!, $query: String!) {
  products(first: $first, query: $query) {
    edges {
      node {
        handle
        title
        description
        featuredImage { url }
        onlineStoreUrl
        tags
        status
        publishedOnCurrentPublication
        variants(first: 1) { edges { node { price } } }
      }
    }
  }
}
"#;

/// Cheapest authenticated query, used as a health probe.
pub const SHOP_NAME: &str = "{ shop { name } }";

/// Escapes backslashes, then double quotes, for a quoted search term.
pub fn escape_search_term(term: &str) -> String {
    term.replace('\\', "\\\\").replace('"', "\\\"")
}

/// `handle:"<handle>"`
pub fn handle_query(handle: &str) -> String {
    format!("handle:\"{}\"", escape_search_term(handle))
}

/// `tag:"a" OR tag:"b"` over the given tags.
pub fn tag_query(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("tag:\"{}\"", escape_search_term(tag)))
        .collect::<Vec<_>>()
        .join(" OR ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_backslash_before_quote() {
        assert_eq!(escape_search_term(r#"a\"b"#), r#"a\\\"b"#);
        assert_eq!(escape_search_term("Valentine's Day"), "Valentine's Day");
    }

    #[test]
    fn tag_query_joins_with_or() {
        let tags = vec!["Roses".to_string(), "Say \"I do\"".to_string()];
        assert_eq!(tag_query(&tags), r#"tag:"Roses" OR tag:"Say \"I do\"""#);
    }

    #[test]
    fn handle_query_quotes_the_handle() {
        assert_eq!(handle_query("red-roses"), r#"handle:"red-roses""#);
    }
}
