use wander::extract::walk;
use wander::fetch;

fn test_url() -> String {
    std::env::var("WANDER_TEST_URL").expect("WANDER_TEST_URL env var must be set for live tests")
}

#[test]
#[ignore]
fn live_fetch_and_extract_title() {
    let url = test_url();
    let client = fetch::client("wander-live-test").expect("Failed to build client");
    let html = fetch::get_with_retry(&client, &url, 3).expect("Failed to fetch test page");

    let title = walk(&["<title>", "</title>"], &html, 0, false);
    assert!(
        !title.is_empty(),
        "UPSTREAM FORMAT CHANGE: no <title> found — page structure may have changed"
    );
}
