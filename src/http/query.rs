//! Query string decoding
//!
//! Decodes `application/x-www-form-urlencoded` pairs (`%XX` and `+`).
//! Repeated keys keep their first value.

use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct Query {
    params: HashMap<String, String>,
}

impl Query {
    pub fn parse(raw: Option<&str>) -> Self {
        let mut params = HashMap::new();
        if let Some(raw) = raw {
            for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
                params
                    .entry(key.into_owned())
                    .or_insert_with(|| value.into_owned());
            }
        }
        Self { params }
    }

    /// Value of `key`, empty string when absent
    pub fn get(&self, key: &str) -> &str {
        self.params.get(key).map_or("", String::as_str)
    }
}
