//! Append-only list fed one page at a time.

use std::{collections::HashSet, fmt::Display};

use crate::search_result::SearchPage;

/// Anything with a stable id the list can dedupe on.
pub trait Identified {
    fn id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    /// The last page fetch failed; distinct from an empty result.
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: u64,
    pub skip: u64,
    pub limit: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
    items: Vec<T>,
    total: u64,
    page_size: u64,
    loaded: bool,
    state: LoadState,
    generation: u64,
}

impl<T: Identified> PagedList<T> {
    pub fn new(page_size: u64) -> Self {
        Self {
            items: vec![],
            total: 0,
            page_size,
            loaded: false,
            state: LoadState::Idle,
            generation: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn has_more(&self) -> bool {
        !self.loaded || (self.items.len() as u64) < self.total
    }

    /// Loaded successfully and nothing matched.
    pub fn is_empty_result(&self) -> bool {
        self.loaded && self.items.is_empty() && self.state == LoadState::Idle
    }

    /// Start over for a new filter: drop everything and ask for the first
    /// page. Anything still in flight for the old filter will be ignored.
    pub fn reset(&mut self) -> PageRequest {
        self.generation += 1;
        self.items.clear();
        self.total = 0;
        self.loaded = false;
        self.state = LoadState::Loading;
        PageRequest { generation: self.generation, skip: 0, limit: self.page_size }
    }

    /// Next page request, or `None` while a fetch is in flight or once
    /// everything is loaded.
    pub fn next_page(&mut self) -> Option<PageRequest> {
        if self.is_loading() || !self.has_more() {
            return None;
        }
        self.state = LoadState::Loading;
        Some(PageRequest {
            generation: self.generation,
            skip: self.items.len() as u64,
            limit: self.page_size,
        })
    }

    /// Fold a page response in. Returns `false` if it belonged to a filter
    /// that has since been replaced.
    pub fn apply_page<E: Display>(&mut self, request: PageRequest, result: Result<SearchPage<T>, E>) -> bool {
        if request.generation != self.generation {
            return false;
        }
        match result {
            Ok(page) => {
                if request.skip == 0 {
                    self.items.clear();
                }
                let mut seen = self.items.iter().map(|i| i.id().to_string()).collect::<HashSet<_>>();
                for item in page.items {
                    if seen.insert(item.id().to_string()) {
                        self.items.push(item);
                    }
                }
                self.total = page.total;
                self.items.truncate(self.total as usize);
                self.loaded = true;
                self.state = LoadState::Idle;
            }
            Err(e) => {
                tracing::warn!("page fetch at offset {} failed: {}", request.skip, e);
                self.state = LoadState::Failed(e.to_string());
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(String);

    impl Identified for Row {
        fn id(&self) -> &str {
            &self.0
        }
    }

    fn page(ids: std::ops::Range<u64>, total: u64) -> SearchPage<Row> {
        let skip = ids.start;
        let items = ids.map(|i| Row(format!("e{i}"))).collect::<Vec<_>>();
        let limit = items.len() as u64;
        SearchPage { items, total, skip, limit }
    }

    #[test]
    fn pages_append_up_to_total() {
        let mut list = PagedList::<Row>::new(12);
        let first = list.reset();
        assert_eq!((first.skip, first.limit), (0, 12));
        list.apply_page(first, Ok::<_, String>(page(0..12, 30)));
        assert_eq!(list.items().len(), 12);
        assert!(list.has_more());

        let second = list.next_page().unwrap();
        assert_eq!(second.skip, 12);
        list.apply_page(second, Ok::<_, String>(page(12..24, 30)));
        assert_eq!(list.items().len(), 24);

        let third = list.next_page().unwrap();
        list.apply_page(third, Ok::<_, String>(page(24..30, 30)));
        assert_eq!(list.items().len(), 30);
        assert!(!list.has_more());
        assert_eq!(list.next_page(), None);
    }

    #[test]
    fn appended_page_never_duplicates_ids() {
        let mut list = PagedList::<Row>::new(12);
        let first = list.reset();
        list.apply_page(first, Ok::<_, String>(page(0..12, 20)));
        // A new event shifted the window by two.
        let second = list.next_page().unwrap();
        list.apply_page(second, Ok::<_, String>(page(10..22, 20)));

        let ids = list.items().iter().map(|r| r.0.clone()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), list.items().len());
        assert_eq!(list.items().len(), 20);
    }

    #[test]
    fn only_one_fetch_in_flight() {
        let mut list = PagedList::<Row>::new(12);
        let first = list.reset();
        assert_eq!(list.next_page(), None);
        list.apply_page(first, Ok::<_, String>(page(0..12, 40)));
        assert!(list.next_page().is_some());
        assert_eq!(list.next_page(), None);
    }

    #[test]
    fn failure_keeps_loaded_prefix() {
        let mut list = PagedList::<Row>::new(12);
        let first = list.reset();
        list.apply_page(first, Ok::<_, String>(page(0..12, 40)));
        let second = list.next_page().unwrap();
        list.apply_page(second, Err("502 bad gateway"));

        assert_eq!(list.items().len(), 12);
        assert_eq!(list.state(), &LoadState::Failed("502 bad gateway".to_string()));
        assert!(!list.is_empty_result());

        let retry = list.next_page().unwrap();
        assert_eq!(retry.skip, 12);
    }

    #[test]
    fn reset_replaces_and_ignores_old_pages() {
        let mut list = PagedList::<Row>::new(12);
        let first = list.reset();
        list.apply_page(first, Ok::<_, String>(page(0..12, 40)));
        let stale = list.next_page().unwrap();

        let fresh = list.reset();
        assert!(list.items().is_empty());
        assert!(!list.apply_page(stale, Ok::<_, String>(page(12..24, 40))));
        assert!(list.items().is_empty());

        list.apply_page(fresh, Ok::<_, String>(page(0..0, 0)));
        assert!(list.is_empty_result());
        assert!(!list.has_more());
    }
}
