use crate::clean::{remove_between, remove_comments, remove_non_numeric, remove_price_symbols};
use crate::extract::{find, find_all, get_value, walk, walk_repeat, walk_with, walk_with_repeat};
use crate::value::Value;

/// Open brackets whose attribute noise the cleanup preset strips.
const CLEAN_TAGS: [&str; 15] = [
    "<h1", "<h2", "<h3", "<h4", "<h5", "<table", "<th", "<td", "<ol", "<li", "<div", "<span",
    "<a", "<i", "<p",
];

/// Fluent wrapper threading a `Value` through the extraction pipeline.
/// Every step consumes the wanderer and returns a new one; there is no
/// shared mutable state between steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wanderer {
    value: Value,
}

impl Wanderer {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Apply `transform` to every leaf string of the held value.
    pub fn run<F>(self, transform: &F) -> Self
    where
        F: Fn(&str) -> Value + Sync,
    {
        Self {
            value: self.value.map(transform),
        }
    }

    pub fn walk(self, anchors: &[&str], start: usize, inclusive: bool) -> Self {
        self.run(&|h| Value::from(walk(anchors, h, start, inclusive)))
    }

    pub fn walk_with(self, anchors: &[&str], start: usize) -> Self {
        self.run(&|h| Value::from(walk_with(anchors, h, start)))
    }

    pub fn walk_repeat(self, anchors: &[&str], start: usize, inclusive: bool) -> Self {
        self.run(&|h| Value::from(walk_repeat(anchors, h, start, inclusive)))
    }

    pub fn walk_with_repeat(self, anchors: &[&str], start: usize) -> Self {
        self.run(&|h| Value::from(walk_with_repeat(anchors, h, start)))
    }

    pub fn get_value(self, name: &str) -> Self {
        self.run(&|h| Value::from(get_value(name, h)))
    }

    pub fn find(self, seed: &str, start: usize, inclusive: bool) -> Self {
        self.run(&|h| Value::from(find(seed, h, start, inclusive)))
    }

    pub fn find_all(self, seed: &str, start: usize, inclusive: bool) -> Self {
        self.run(&|h| Value::from(find_all(seed, h, start, inclusive)))
    }

    pub fn remove_between(self, start_marker: &str, end_marker: &str, inclusive: bool) -> Self {
        self.run(&|h| Value::from(remove_between(h, start_marker, end_marker, inclusive)))
    }

    pub fn remove_comments(self) -> Self {
        self.run(&|h| Value::from(remove_comments(h)))
    }

    pub fn remove_price_symbols(self) -> Self {
        self.run(&|h| Value::from(remove_price_symbols(h)))
    }

    pub fn remove_non_numeric(self) -> Self {
        self.run(&|h| Value::from(remove_non_numeric(h)))
    }

    pub fn replace(self, from: &str, to: &str) -> Self {
        self.run(&|h| Value::from(h.replace(from, to)))
    }

    pub fn split(self, separator: &str) -> Self {
        self.run(&|h| Value::from(h.split(separator).map(str::to_string).collect::<Vec<_>>()))
    }

    pub fn first_non_empty(self) -> Self {
        Self {
            value: self.value.first_non_empty(),
        }
    }

    pub fn shortest(self) -> Self {
        Self {
            value: self.value.shortest(),
        }
    }

    pub fn remove_empty(self) -> Self {
        Self {
            value: self.value.remove_empty(),
        }
    }

    pub fn unique(self) -> Self {
        Self {
            value: self.value.unique(),
        }
    }

    /// Canned cleanup for scraped markup: drops comments, attribute noise
    /// inside common open tags, class/id pairs, hr/style/script blocks, and
    /// line breaks.
    pub fn clean_html(self) -> Self {
        let stripped = CLEAN_TAGS
            .iter()
            .fold(self.remove_comments(), |wanderer, tag| {
                wanderer.remove_between(tag, ">", false)
            });

        stripped
            .remove_between("class=\"", "\"", true)
            .remove_between("id=\"", "\"", true)
            .remove_between("<hr", ">", true)
            .remove_between("<style", "/style>", true)
            .remove_between("<script", "/script>", true)
            .replace("\r\n", "")
            .replace("\n", "")
            .replace("\r", "")
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}
