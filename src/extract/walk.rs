use super::Hit;

/// Find each anchor in order, threading a single cursor through the
/// haystack, and return the text framed by the last two anchors along with
/// the offset just past the final anchor. `None` means some anchor was
/// missing; there is no partial match.
///
/// The single-anchor form always searches from the top of the haystack,
/// ignoring `start`, and its match is everything before the anchor's first
/// occurrence. In inclusive mode its `last_pos` skips two anchor lengths.
pub fn walk_details(anchors: &[&str], haystack: &str, start: usize, inclusive: bool) -> Option<Hit> {
    match anchors {
        [] => None,
        [only] => {
            let at = haystack.find(only)?;
            let text = if inclusive {
                format!("{}{}", &haystack[..at], only)
            } else {
                haystack[..at].to_string()
            };
            let skip = if inclusive { only.len() * 2 } else { only.len() };
            Some(Hit {
                text,
                last_pos: at + skip,
            })
        }
        _ => {
            let mut pos = start;
            let mut ends = Vec::with_capacity(anchors.len());
            for anchor in anchors {
                let at = haystack.get(pos..)?.find(anchor)? + pos;
                pos = at + anchor.len();
                ends.push(pos);
            }

            let last = anchors[anchors.len() - 1];
            let second_last = anchors[anchors.len() - 2];
            let to = ends[ends.len() - 1] - last.len();
            let from = ends[ends.len() - 2];

            let text = if inclusive {
                format!("{second_last}{}{last}", &haystack[from..to])
            } else {
                haystack[from..to].to_string()
            };
            Some(Hit {
                text,
                last_pos: ends[ends.len() - 1],
            })
        }
    }
}

/// Like `walk_details`, projected to just the matched text ("" when the
/// anchor sequence is not found).
pub fn walk(anchors: &[&str], haystack: &str, start: usize, inclusive: bool) -> String {
    walk_details(anchors, haystack, start, inclusive)
        .map(|hit| hit.text)
        .unwrap_or_default()
}

/// `walk` with the framing anchors included in the match.
pub fn walk_with(anchors: &[&str], haystack: &str, start: usize) -> String {
    walk(anchors, haystack, start, true)
}

/// Repeat `walk_details` from each previous `last_pos`, collecting matches
/// until the sequence stops matching. Stops as soon as the cursor fails to
/// advance, so the loop terminates on any finite haystack.
pub fn walk_repeat(anchors: &[&str], haystack: &str, start: usize, inclusive: bool) -> Vec<String> {
    let mut matches = Vec::new();
    let mut pos = start;

    while let Some(hit) = walk_details(anchors, haystack, pos, inclusive) {
        if hit.last_pos <= pos {
            break;
        }
        pos = hit.last_pos;
        matches.push(hit.text);
    }

    matches
}

/// `walk_repeat` with the framing anchors included in each match.
pub fn walk_with_repeat(anchors: &[&str], haystack: &str, start: usize) -> Vec<String> {
    walk_repeat(anchors, haystack, start, true)
}

/// Extract a form field's value attribute given its name attribute,
/// trying the double-quoted then the single-quoted spelling.
pub fn get_value(name: &str, html: &str) -> String {
    let double = format!("name=\"{name}\"");
    let single = format!("name='{name}'");

    [
        walk(&[double.as_str(), "value=\"", "\""], html, 0, false),
        walk(&[single.as_str(), "value='", "'"], html, 0, false),
    ]
    .into_iter()
    .find(|value| !value.is_empty())
    .unwrap_or_default()
}
