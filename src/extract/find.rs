use std::cmp::Ordering;

use super::Hit;

/// Bound on the nesting scan; unbalanced markup ends the scan at the
/// current position instead of erroring.
const SCAN_CAP: usize = 50;

struct TagType {
    open: String,
    close: String,
    singular: bool,
}

/// Classify the tag beginning at `tag_start` (which must start at its `<`).
/// The open marker is the shorter of "up to the first space" and "up to the
/// first `>`", which handles both `<div class="x">` and `<br>` forms.
/// `None` when neither delimiter follows (truncated tag).
fn classify_tag(tag_start: &str) -> Option<TagType> {
    let to_space = tag_start.find(' ').map(|at| &tag_start[..at]);
    let to_gt = tag_start.find('>').map(|at| &tag_start[..at]);

    let open = match (to_space, to_gt) {
        (Some(a), Some(b)) => {
            if a.len() < b.len() {
                a
            } else {
                b
            }
        }
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => return None,
    };

    let name = open.trim_start_matches('<');
    Some(TagType {
        open: open.to_string(),
        close: format!("</{name}"),
        singular: is_singular(name),
    })
}

fn is_singular(name: &str) -> bool {
    matches!(name, "img" | "br" | "hr" | "input" | "link" | "meta" | "!--")
}

/// Nearest occurrence of `byte` at-or-before `from`. For ASCII `byte` the
/// returned offset is always a char boundary.
fn rscan(haystack: &str, byte: u8, from: usize) -> Option<usize> {
    let bytes = haystack.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let from = from.min(bytes.len() - 1);
    bytes[..=from].iter().rposition(|&b| b == byte)
}

/// Locate `seed` from `start` and extract the content of the tag enclosing
/// it. A seed sitting in plain text yields the text run around it; a seed
/// inside a tag's open bracket yields the tag's (depth-balanced) content,
/// or the whole tag in inclusive mode.
pub fn find_details(seed: &str, haystack: &str, start: usize, inclusive: bool) -> Option<Hit> {
    let pos = haystack.get(start..)?.find(seed)? + start;

    let prior_open = rscan(haystack, b'<', pos);
    let prior_close = rscan(haystack, b'>', pos);

    // Plain text when the nearest `>` before the seed is at-or-after the
    // nearest `<`; a missing delimiter counts as before start-of-string.
    let in_text = match (prior_open, prior_close) {
        (Some(open), Some(close)) => close >= open,
        (Some(_), None) => false,
        (None, _) => true,
    };

    if in_text {
        let from = prior_close.map(|at| at + 1).unwrap_or(0);
        return Some(match haystack[from..].find('<') {
            Some(ahead) => {
                let next_open = from + ahead;
                Hit {
                    text: haystack[from..next_open].to_string(),
                    last_pos: next_open + 1,
                }
            }
            None => Hit {
                text: haystack[from..].to_string(),
                last_pos: haystack.len(),
            },
        });
    }

    let open_at = prior_open?;
    let tag = classify_tag(&haystack[open_at..])?;

    if tag.singular {
        let gt = haystack[pos..].find('>').map(|at| pos + at)?;
        let text = if inclusive {
            haystack[open_at..=gt].to_string()
        } else {
            String::new()
        };
        return Some(Hit {
            text,
            last_pos: gt + 1,
        });
    }

    // Depth-counted scan for the balancing close marker. Both probes clamp
    // to end-of-string; equal positions mean neither marker occurs again.
    let mut count: usize = 1;
    let mut end = open_at + tag.open.len();
    let mut at_end_of_string = false;

    for _ in 0..SCAN_CAP {
        let next_open = haystack[end..]
            .find(&tag.open)
            .map(|at| end + at)
            .unwrap_or(haystack.len());
        let next_close = haystack[end..]
            .find(&tag.close)
            .map(|at| end + at)
            .unwrap_or(haystack.len());

        match next_open.cmp(&next_close) {
            Ordering::Less => {
                count += 1;
                end = next_open + tag.open.len();
            }
            Ordering::Greater => {
                count -= 1;
                end = next_close + tag.close.len();
            }
            Ordering::Equal => {
                count = 0;
                end = next_open;
                at_end_of_string = true;
            }
        }

        if count == 0 {
            break;
        }
    }

    if inclusive {
        let to = haystack[end..]
            .find('>')
            .map(|at| end + at + 1)
            .unwrap_or(haystack.len());
        return Some(Hit {
            text: haystack[open_at..to].trim().to_string(),
            last_pos: to + tag.close.len(),
        });
    }

    let from = haystack[pos..].find('>').map(|at| pos + at + 1)?;

    if at_end_of_string {
        return Some(Hit {
            text: haystack[from..].trim().to_string(),
            last_pos: haystack.len() + tag.close.len(),
        });
    }

    let close_open = rscan(haystack, b'<', end)?;
    Some(Hit {
        text: haystack
            .get(from..close_open)
            .unwrap_or_default()
            .trim()
            .to_string(),
        last_pos: (close_open + tag.close.len()) - 1,
    })
}

/// Like `find_details`, projected to just the matched text ("" when the
/// seed is not found).
pub fn find(seed: &str, haystack: &str, start: usize, inclusive: bool) -> String {
    find_details(seed, haystack, start, inclusive)
        .map(|hit| hit.text)
        .unwrap_or_default()
}

/// Repeat `find_details` from each previous `last_pos`, collecting every
/// enclosing-tag match until the seed stops matching. Same cursor-advance
/// guard as `walk_repeat`.
pub fn find_all(seed: &str, haystack: &str, start: usize, inclusive: bool) -> Vec<String> {
    let mut matches = Vec::new();
    let mut pos = start;

    while let Some(hit) = find_details(seed, haystack, pos, inclusive) {
        if hit.last_pos <= pos {
            break;
        }
        pos = hit.last_pos;
        matches.push(hit.text);
    }

    matches
}
