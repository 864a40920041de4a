//! Search query state and the derived visible view.
//!
//! [`SearchFilter`] owns the live query string; [`filter_posts`] derives the
//! visible subsequence of the board from a collection and a query. Derivation
//! is a pure function of its two inputs, with no internal state and no side
//! effects, so it is safe (and cheap) to run on every keystroke.
//!
//! Matching is case-insensitive **substring** containment over the post's
//! title and body joined by a space. There is no tokenization, no word
//! boundaries, and no ranking: output order is input order.

use std::borrow::Cow;

use crate::domain::Post;

/// Owner of the current search query.
///
/// The empty string is the sentinel for "no filtering". Queries are stored
/// exactly as typed, with no trimming and no normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    query: String,
}

impl SearchFilter {
    /// Replaces the query with `q`. Any string is valid, including empty.
    pub fn set_query(&mut self, q: impl Into<String>) {
        self.query = q.into();
    }

    /// Appends one character to the query.
    pub fn push(&mut self, c: char) {
        self.query.push(c);
    }

    /// Removes the last character of the query, if any.
    pub fn pop(&mut self) {
        self.query.pop();
    }

    /// Resets the query to the empty sentinel.
    pub fn reset(&mut self) {
        self.query.clear();
    }

    /// Returns the current query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns `true` if a non-empty query is in effect.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }
}

/// Derives the visible subsequence of `posts` for `query`.
///
/// An empty query returns the collection itself (`Cow::Borrowed`): the
/// visible view *is* the board, at zero cost. A non-empty query returns the
/// posts whose `"{title} {body}"` text, lower-cased, contains the lower-cased
/// query as a substring, in their original order.
///
/// Identical inputs always produce value-identical output; calling this twice
/// in a row changes nothing.
///
/// # Examples
///
/// ```
/// use zboard::app::filter_posts;
/// use zboard::domain::Post;
///
/// let posts = vec![
///     Post::new("fast dock".to_string(), "hack the grid".to_string()),
///     Post::new("slow bus".to_string(), "quiet byte".to_string()),
/// ];
///
/// let visible = filter_posts(&posts, "hack");
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].title, "fast dock");
///
/// let all = filter_posts(&posts, "");
/// assert_eq!(all.len(), 2);
/// ```
#[must_use]
pub fn filter_posts<'a>(posts: &'a [Post], query: &str) -> Cow<'a, [Post]> {
    if query.is_empty() {
        return Cow::Borrowed(posts);
    }

    let needle = query.to_lowercase();
    Cow::Owned(
        posts
            .iter()
            .filter(|post| post.haystack().to_lowercase().contains(&needle))
            .cloned()
            .collect(),
    )
}

/// Returns the byte ranges of case-insensitive occurrences of `query` in
/// `text`, for highlight rendering.
///
/// Ranges index the original string (exclusive end) and never overlap; after
/// a match the scan resumes past its end. An empty query yields no ranges.
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    let mut ranges = Vec::new();
    let mut next_start = 0;

    for (start, _) in text.char_indices() {
        if start < next_start {
            continue;
        }
        if let Some(end) = match_at(text, start, &needle) {
            ranges.push((start, end));
            next_start = end;
        }
    }

    ranges
}

/// Attempts a case-insensitive match of `needle` at byte offset `start`,
/// returning the end byte offset on success.
fn match_at(text: &str, start: usize, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (offset, ch) in text[start..].char_indices() {
        for lower in ch.to_lowercase() {
            if matched == needle.len() {
                break;
            }
            if lower != needle[matched] {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(start + offset + ch.len_utf8());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, body: &str) -> Post {
        Post::new(title.to_string(), body.to_string())
    }

    fn board() -> Vec<Post> {
        vec![
            post("fast dock", "hack the grid"),
            post("slow bus", "quiet byte"),
        ]
    }

    #[test]
    fn empty_query_is_identity_without_recomputation() {
        let posts = board();
        let visible = filter_posts(&posts, "");
        assert!(matches!(visible, Cow::Borrowed(_)));
        assert_eq!(&*visible, &posts[..]);
    }

    #[test]
    fn query_selects_matching_posts_only() {
        let posts = board();
        let visible = filter_posts(&posts, "hack");
        assert_eq!(&*visible, &[post("fast dock", "hack the grid")]);
    }

    #[test]
    fn clearing_the_query_restores_every_post_in_order() {
        let posts = board();
        let narrowed = filter_posts(&posts, "hack");
        assert_eq!(narrowed.len(), 1);

        let restored = filter_posts(&posts, "");
        assert_eq!(&*restored, &posts[..]);
    }

    #[test]
    fn matching_is_sound_and_complete() {
        let posts = board();
        let query = "b";
        let visible = filter_posts(&posts, query);

        for p in visible.iter() {
            assert!(p.haystack().to_lowercase().contains(query));
        }
        for p in posts.iter().filter(|p| !visible.contains(p)) {
            assert!(!p.haystack().to_lowercase().contains(query));
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let posts = board();
        assert_eq!(filter_posts(&posts, "HACK").len(), 1);
        assert_eq!(filter_posts(&posts, "Quiet").len(), 1);
    }

    #[test]
    fn matching_spans_the_title_body_join() {
        // "dock hack" only exists across the joined title+body text.
        let posts = board();
        assert_eq!(filter_posts(&posts, "dock hack").len(), 1);
    }

    #[test]
    fn order_is_preserved_for_multiple_matches() {
        let posts = vec![post("alpha", "x"), post("beta", "x"), post("gamma", "x")];
        let visible = filter_posts(&posts, "x");
        let titles: Vec<&str> = visible.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn derivation_is_idempotent() {
        let posts = board();
        let first = filter_posts(&posts, "byte").into_owned();
        let second = filter_posts(&posts, "byte").into_owned();
        assert_eq!(first, second);
    }

    #[test]
    fn no_match_yields_an_empty_view() {
        let posts = board();
        assert!(filter_posts(&posts, "zzz").is_empty());
    }

    #[test]
    fn search_filter_holds_queries_verbatim() {
        let mut filter = SearchFilter::default();
        filter.set_query("  Hack ");
        assert_eq!(filter.query(), "  Hack ");
        assert!(filter.is_active());

        filter.reset();
        assert_eq!(filter.query(), "");
        assert!(!filter.is_active());
    }

    #[test]
    fn push_and_pop_edit_the_query_tail() {
        let mut filter = SearchFilter::default();
        filter.push('h');
        filter.push('i');
        assert_eq!(filter.query(), "hi");
        filter.pop();
        assert_eq!(filter.query(), "h");
        filter.pop();
        filter.pop();
        assert_eq!(filter.query(), "");
    }

    #[test]
    fn match_ranges_finds_case_insensitive_occurrences() {
        assert_eq!(match_ranges("Hack the hack", "hack"), vec![(0, 4), (9, 13)]);
    }

    #[test]
    fn match_ranges_indexes_the_original_bytes() {
        let text = "naïve hack";
        let ranges = match_ranges(text, "hack");
        assert_eq!(ranges, vec![(7, 11)]);
        assert_eq!(&text[7..11], "hack");
    }

    #[test]
    fn match_ranges_is_empty_for_empty_query_or_no_match() {
        assert!(match_ranges("anything", "").is_empty());
        assert!(match_ranges("anything", "zzz").is_empty());
    }
}
