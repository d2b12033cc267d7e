//! Case-insensitive substring matching shared by the list views.

/// True when `query` occurs in any of `fields`, ignoring ASCII-and-Unicode
/// case. An empty query matches everything.
pub fn matches_query<'a>(fields: impl IntoIterator<Item = &'a str>, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_query(["Alex P."], ""));
        assert!(matches_query([] as [&str; 0], ""));
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(matches_query(["Alex P."], "alex"));
        assert!(matches_query(["alex p."], "ALEX"));
        assert!(matches_query(["Black Belt"], "black"));
    }

    #[test]
    fn any_field_may_match() {
        assert!(matches_query(["Alex P.", "Brown Belt"], "brown"));
        assert!(!matches_query(["Alex P.", "Brown Belt"], "orange"));
    }
}
