// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};

#[derive(Clone)]
pub struct DummyClock;

impl folio_core::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}

/// Lowercases and joins words with `-`; close enough to `slug::slugify` for ASCII titles.
#[derive(Clone)]
pub struct DummySlug;

impl folio_core::application::ports::util::SlugGenerator for DummySlug {
    fn slugify(&self, s: &str) -> String {
        s.split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}
