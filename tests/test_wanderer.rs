mod common;

use wander::value::Value;
use wander::wanderer::Wanderer;

#[test]
fn run_on_scalar() {
    let result = Wanderer::new("a string")
        .run(&|text| Value::from(text.len().to_string()))
        .into_value();
    assert_eq!(result, Value::from("8"));
}

#[test]
fn run_on_sequence() {
    let result = Wanderer::new(vec!["first", "second", "third"])
        .run(&|text| Value::from(text.len().to_string()))
        .into_value();
    assert_eq!(result, Value::from(vec!["5", "6", "5"]));
}

#[test]
fn first_non_empty_on_sequence() {
    let result = Wanderer::new(vec!["", "", "first one", "second one"])
        .first_non_empty()
        .into_value();
    assert_eq!(result, Value::from("first one"));
}

#[test]
fn walk_chain_on_fixture() {
    let html = common::load_fixture("test.html");
    let result = Wanderer::new(html)
        .walk(&["<title>", "</title>"], 0, false)
        .into_value();
    assert_eq!(result, Value::from("Test File"));
}

#[test]
fn walk_not_found_yields_empty_scalar() {
    let html = common::load_fixture("test.html");
    let result = Wanderer::new(html)
        .walk(&["this is", "not found"], 0, false)
        .into_value();
    assert_eq!(result, Value::from(""));
}

#[test]
fn walk_repeat_chain_on_fixture() {
    let html = common::load_fixture("test.html");
    let result = Wanderer::new(html)
        .walk_repeat(&["<th>", "</th>"], 0, false)
        .into_value();
    assert_eq!(result, Value::from(vec!["First", "Second", "Third"]));
}

#[test]
fn walk_with_chain_on_fixture() {
    let html = common::load_fixture("test.html");
    let result = Wanderer::new(html)
        .walk_with(&["<title>", "</title>"], 0)
        .into_value();
    assert_eq!(result, Value::from("<title>Test File</title>"));
}

#[test]
fn walk_maps_over_sequences() {
    let result = Wanderer::new(vec!["<td>one</td>", "<td>two</td>"])
        .walk(&["<td>", "</td>"], 0, false)
        .into_value();
    assert_eq!(result, Value::from(vec!["one", "two"]));
}

#[test]
fn walk_repeat_over_sequence_nests() {
    let result = Wanderer::new(vec!["<b>1</b><b>2</b>", "<b>3</b>"])
        .walk_repeat(&["<b>", "</b>"], 0, false)
        .into_value();
    assert_eq!(
        result,
        Value::Sequence(vec![
            Value::from(vec!["1", "2"]),
            Value::from(vec!["3"]),
        ])
    );
}

#[test]
fn get_value_chain() {
    let html = common::load_fixture("test.html");
    let result = Wanderer::new(html).get_value("input-name").into_value();
    assert_eq!(result, Value::from("12340"));
}

#[test]
fn find_all_then_dedup() {
    let result = Wanderer::new("<li>a</li><li>b</li><li>a</li>")
        .find_all("<li", 0, false)
        .unique()
        .into_value();
    assert_eq!(result, Value::from(vec!["a", "b"]));
}

#[test]
fn split_then_remove_empty() {
    let result = Wanderer::new("a,,b,")
        .split(",")
        .remove_empty()
        .into_value();
    assert_eq!(result, Value::from(vec!["a", "b"]));
}

#[test]
fn shortest_picks_shortest_scalar() {
    let result = Wanderer::new(vec!["wide one", "tiny", "medium!"])
        .shortest()
        .into_value();
    assert_eq!(result, Value::from("tiny"));
}

#[test]
fn price_pipeline() {
    let result = Wanderer::new("<span>$1,234.56</span>")
        .find("$", 0, false)
        .remove_price_symbols()
        .into_value();
    assert_eq!(result, Value::from("123456"));
}

#[test]
fn remove_between_chain_on_string() {
    let result = Wanderer::new("abc 123 def 456")
        .remove_between("bc", "def", false)
        .into_value();
    assert_eq!(result, Value::from("abcdef 456"));
}

#[test]
fn replace_chain() {
    let result = Wanderer::new("one two two")
        .replace("two", "2")
        .into_value();
    assert_eq!(result, Value::from("one 2 2"));
}

#[test]
fn clean_html_preset() {
    let html = "<!-- note --><div class=\"hello\">def</div><script>var x;</script>\nline";
    let result = Wanderer::new(html).clean_html().into_value();
    assert_eq!(result, Value::from("<div>def</div>line"));
}

#[test]
fn steps_do_not_alias() {
    let base = Wanderer::new("abc 123 def 456");
    let kept = base.clone().remove_between("bc", "def", true);
    assert_eq!(base.into_value(), Value::from("abc 123 def 456"));
    assert_eq!(kept.into_value(), Value::from("a 456"));
}
