use regex::Regex;

/// Repeatedly delete the span between `start_marker` and the next
/// `end_marker`, keeping the markers (`inclusive = false`) or dropping them
/// too (`inclusive = true`), until the markers no longer pair up. Empty
/// markers leave the text unchanged.
pub fn remove_between(text: &str, start_marker: &str, end_marker: &str, inclusive: bool) -> String {
    if start_marker.is_empty() || end_marker.is_empty() {
        return text.to_string();
    }

    let mut out = text.to_string();
    let mut search_from = 0;

    loop {
        let Some(start) = out
            .get(search_from..)
            .and_then(|tail| tail.find(start_marker))
            .map(|at| search_from + at)
        else {
            break;
        };
        let Some(end) = out[start..].find(end_marker).map(|at| start + at) else {
            break;
        };

        if inclusive {
            out = format!("{}{}", &out[..start], &out[end + end_marker.len()..]);
            search_from = start;
        } else {
            out = format!("{}{}", &out[..start + start_marker.len()], &out[end..]);
            search_from = start + start_marker.len() + end_marker.len();
        }
    }

    out
}

/// Strip `<!-- ... -->` comments. Greedy within each line.
pub fn remove_comments(html: &str) -> String {
    let re = Regex::new(r"<!--.*-->").unwrap();
    re.replace_all(html, "").to_string()
}

/// Strip currency symbols, separators, and whitespace from price text.
pub fn remove_price_symbols(text: &str) -> String {
    let re = Regex::new(r"[$£€¥,.\s]").unwrap();
    re.replace_all(text, "").to_string()
}

/// Keep only the digits.
pub fn remove_non_numeric(text: &str) -> String {
    let re = Regex::new(r"\D").unwrap();
    re.replace_all(text, "").to_string()
}
