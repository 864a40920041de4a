//! Canonical post collection and its mutators.
//!
//! [`PostStore`] is the single source of truth for the board: an ordered
//! sequence of posts, newest first. Everything the rest of the plugin shows
//! is derived from this collection; nothing else holds posts of its own.
//!
//! All operations are total. There is no validation here; the compose form
//! checks its fields before calling [`PostStore::add`], and the store accepts
//! any well-formed post, duplicates included.

use crate::domain::{Post, PostGenerator};

/// Owner of the ordered post collection.
///
/// Insertion order is significant: new posts go to the front, and the posts
/// already present keep their relative order. The collection lives for the
/// plugin process only; there is no persistence.
///
/// # Examples
///
/// ```
/// use zboard::app::PostStore;
/// use zboard::domain::Post;
///
/// let mut store = PostStore::default();
/// store.add(Post::new("fast dock".to_string(), "hack the grid".to_string()));
/// assert_eq!(store.len(), 1);
/// store.clear();
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    /// Replaces the collection with `count` freshly generated posts, in the
    /// order the generator produced them.
    ///
    /// Called once at plugin load; a `count` of zero leaves the board empty.
    pub fn seed(&mut self, generator: &mut PostGenerator, count: usize) {
        self.posts = generator.generate_batch(count);
        tracing::debug!(seeded = self.posts.len(), "post store seeded");
    }

    /// Prepends a post to the collection.
    ///
    /// The collection grows by exactly one and every prior post keeps its
    /// relative position.
    pub fn add(&mut self, post: Post) {
        tracing::debug!(title = %post.title, "post added");
        self.posts.insert(0, post);
    }

    /// Empties the collection.
    ///
    /// Subsequent reads return an empty slice until the next [`add`].
    ///
    /// [`add`]: PostStore::add
    pub fn clear(&mut self) {
        tracing::debug!(dropped = self.posts.len(), "post store cleared");
        self.posts.clear();
    }

    /// Returns the current collection.
    ///
    /// The slice always reflects the latest state; there is no snapshot to
    /// go stale.
    #[must_use]
    pub fn read(&self) -> &[Post] {
        &self.posts
    }

    /// Returns the number of posts on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Returns `true` if the board holds no posts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, body: &str) -> Post {
        Post::new(title.to_string(), body.to_string())
    }

    #[test]
    fn add_prepends_and_preserves_prior_order() {
        let mut store = PostStore::default();
        store.add(post("a", "1"));
        store.add(post("b", "2"));
        store.add(post("c", "3"));

        let titles: Vec<&str> = store.read().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["c", "b", "a"]);
    }

    #[test]
    fn add_grows_length_by_exactly_one() {
        let mut store = PostStore::default();
        let mut generator = PostGenerator::from_seed(3);
        store.seed(&mut generator, 5);

        let before = store.read().to_vec();
        store.add(post("new", "post"));

        assert_eq!(store.len(), before.len() + 1);
        assert_eq!(&store.read()[1..], &before[..]);
    }

    #[test]
    fn clear_empties_regardless_of_prior_contents() {
        let mut store = PostStore::default();
        store.add(post("new", "post"));
        store.clear();
        assert!(store.read().is_empty());

        // Adding after a clear yields exactly the one new post.
        store.add(post("only", "one"));
        assert_eq!(store.read(), &[post("only", "one")]);
    }

    #[test]
    fn seed_replaces_any_prior_collection() {
        let mut store = PostStore::default();
        store.add(post("old", "entry"));

        let mut generator = PostGenerator::from_seed(8);
        store.seed(&mut generator, 30);

        assert_eq!(store.len(), 30);
        assert!(store.read().iter().all(|p| p.title != "old"));
    }

    #[test]
    fn seed_zero_leaves_the_board_empty() {
        let mut store = PostStore::default();
        let mut generator = PostGenerator::from_seed(8);
        store.seed(&mut generator, 0);
        assert!(store.is_empty());
    }
}
