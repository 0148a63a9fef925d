mod find;
mod walk;

pub use find::{find, find_all, find_details};
pub use walk::{get_value, walk, walk_details, walk_repeat, walk_with, walk_with_repeat};

/// A successful extraction: the matched text and the haystack offset to
/// resume scanning from. `last_pos` may point past the end of the haystack;
/// resumption treats that as exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub text: String,
    pub last_pos: usize,
}
