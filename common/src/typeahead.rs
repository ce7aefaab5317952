//! State behind a debounced suggestion box.
//!
//! Every input owns one [`Typeahead`]. A keystroke restarts the quiet-period
//! timer; when the timer survives, [`Typeahead::begin_fetch`] hands out a
//! ticket and the caller runs the remote search with it. Responses are applied
//! only if they are newer than the last one applied, so a slow early response
//! cannot overwrite a fast later one.

use std::{fmt::Display, future::Future};

use crate::debounce::{Debounced, Debouncer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: String,
}

#[derive(Debug)]
pub struct Typeahead<T> {
    min_query_len: usize,
    debouncer: Debouncer,
    query: String,
    last_fired_query: Option<String>,
    last_applied: u64,
    suggestions: Vec<T>,
    open: bool,
    loading: bool,
}

impl<T> Typeahead<T> {
    pub fn new(min_query_len: usize) -> Self {
        Self {
            min_query_len,
            debouncer: Debouncer::new(),
            query: String::new(),
            last_fired_query: None,
            last_applied: 0,
            suggestions: vec![],
            open: false,
            loading: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[T] {
        &self.suggestions
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_fired_query(&self) -> Option<&str> {
        self.last_fired_query.as_deref()
    }

    /// Record a keystroke. Returns the wait to drive when the query is long
    /// enough; otherwise the list is cleared on the spot and nothing is
    /// scheduled.
    pub fn input<S, F>(&mut self, query: &str, sleep: F) -> Option<Debounced<S>>
    where
        F: FnOnce() -> S,
        S: Future<Output = ()>,
    {
        self.query = query.to_string();
        if query.trim().chars().count() < self.min_query_len {
            self.stop();
            return None;
        }
        Some(self.debouncer.restart(sleep()))
    }

    /// Called once the quiet period of `generation` elapsed. `None` means a
    /// newer keystroke (or a clear) got there first.
    pub fn begin_fetch(&mut self, generation: u64) -> Option<SearchTicket> {
        if !self.debouncer.is_current(generation) {
            return None;
        }
        let query = self.query.trim().to_string();
        self.last_fired_query = Some(query.clone());
        self.loading = true;
        Some(SearchTicket { seq: generation, query })
    }

    /// Replace the suggestion list with a response. Returns `false` when the
    /// response was stale and dropped.
    pub fn apply<E: Display>(&mut self, ticket: SearchTicket, result: Result<Vec<T>, E>) -> bool {
        if ticket.seq <= self.last_applied {
            tracing::debug!("dropping stale suggestions for {:?} (seq {})", ticket.query, ticket.seq);
            return false;
        }
        self.last_applied = ticket.seq;
        if self.debouncer.is_current(ticket.seq) {
            self.loading = false;
        }
        match result {
            Ok(items) => {
                self.suggestions = items;
                self.open = true;
            }
            Err(e) => {
                tracing::warn!("suggestion fetch for {:?} failed: {}", ticket.query, e);
                self.suggestions.clear();
                self.open = false;
            }
        }
        true
    }

    /// Take the suggestion at `index`, closing the list and cancelling any
    /// pending or in-flight search.
    pub fn select(&mut self, index: usize) -> Option<T>
    where
        T: Clone,
    {
        let item = self.suggestions.get(index).cloned()?;
        self.stop();
        Some(item)
    }

    /// Focus left the control.
    pub fn dismiss(&mut self) {
        self.stop();
    }

    /// Put text in the box without searching for it (e.g. the label of the
    /// item just picked).
    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Clear/reset affordance: empty box, no list, nothing pending.
    pub fn reset(&mut self) {
        self.query.clear();
        self.last_fired_query = None;
        self.stop();
    }

    fn stop(&mut self) {
        self.debouncer.cancel();
        self.last_applied = self.debouncer.generation();
        self.suggestions.clear();
        self.open = false;
        self.loading = false;
    }
}
