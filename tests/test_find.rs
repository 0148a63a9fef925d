mod common;

use wander::extract::{find, find_all, find_details};

#[test]
fn find_seed_not_found() {
    assert!(find_details("zzz", "<p>abc</p>", 0, false).is_none());
    assert_eq!(find("zzz", "<p>abc</p>", 0, false), "");
}

#[test]
fn find_start_past_haystack_is_none() {
    assert!(find_details("<p", "<p>abc</p>", 500, false).is_none());
}

#[test]
fn find_singular_tag_exclusive_is_empty() {
    let html = common::load_fixture("test.html");
    assert_eq!(find("<img", &html, 0, false), "");
}

#[test]
fn find_singular_tag_inclusive_returns_literal() {
    let html = common::load_fixture("test.html");
    assert_eq!(find("<img", &html, 0, true), "<img src=\"logo.png\" />");
}

#[test]
fn find_seed_in_plain_text() {
    let html = common::load_fixture("test.html");
    assert_eq!(find("inner stuff", &html, 0, false), "inner stuff");
}

#[test]
fn find_paired_tag_content() {
    let html = common::load_fixture("test.html");
    assert_eq!(
        find("class=\"inner\"", &html, 0, false),
        "<p>inner stuff</p>"
    );
}

#[test]
fn find_counts_nested_same_name_tags() {
    let html = common::load_fixture("test.html");
    assert_eq!(
        find("class=\"outer\"", &html, 0, false),
        "<div class=\"inner\"><p>inner stuff</p></div>"
    );
}

#[test]
fn find_nested_seed_stays_innermost() {
    let html = "<div><div><p>inner stuff</p></div></div>";
    assert_eq!(find("<p", html, 0, false), "inner stuff");
}

#[test]
fn find_inclusive_wraps_tags() {
    let html = "<div><div><p>inner stuff</p></div></div>";
    assert_eq!(
        find("<div", html, 0, true),
        "<div><div><p>inner stuff</p></div></div>"
    );
}

#[test]
fn find_exclusive_balances_outer_div() {
    let html = "<div>x</div>tail";
    assert_eq!(find("<div", html, 0, false), "x");
}

#[test]
fn find_unclosed_tag_runs_to_end_of_string() {
    let hit = find_details("<div", "<div>abc", 0, false).unwrap();
    assert_eq!(hit.text, "abc");
    assert!(hit.last_pos >= "<div>abc".len());
}

#[test]
fn find_text_with_no_following_tag_runs_to_end() {
    let hit = find_details("needle", "<p>some needle here", 0, false).unwrap();
    assert_eq!(hit.text, "some needle here");
    assert_eq!(hit.last_pos, "<p>some needle here".len());
}

#[test]
fn find_all_consumes_each_tag_once() {
    let html = "<li>123</li><li>456</li>";
    assert_eq!(find_all("<li", html, 0, false), vec!["123", "456"]);
}

#[test]
fn find_all_inclusive() {
    let html = "<li>123</li>abcd<li>456</li>";
    assert_eq!(
        find_all("<li", html, 0, true),
        vec!["<li>123</li>", "<li>456</li>"]
    );
}

#[test]
fn find_all_not_found_is_empty() {
    assert!(find_all("<li", "<p>nothing here</p>", 0, false).is_empty());
}

#[test]
fn find_details_resumes_past_consumed_tag() {
    let html = "<li>123</li><li>456</li>";
    let first = find_details("<li", html, 0, false).unwrap();
    assert_eq!(first.text, "123");
    let second = find_details("<li", html, first.last_pos, false).unwrap();
    assert_eq!(second.text, "456");
    assert!(find_details("<li", html, second.last_pos, false).is_none());
}

#[test]
fn find_survives_deep_unbalanced_nesting() {
    let html = "<div>".repeat(60);
    let hit = find_details("<div", &html, 0, false);
    assert!(hit.is_some());
}
