//! Shared fakes for the expansion boundary.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use socialeye::expansion::{ExpansionError, QueryExpander, QueryExpansion};
use socialeye::search::SearchService;

pub enum Reply {
    Suggestions(Vec<&'static str>),
    NoList,
    Fail,
}

/// Scripted stand-in for the AI backend that counts how often it is called.
pub struct FakeExpander {
    reply: Reply,
    calls: AtomicUsize,
}

impl FakeExpander {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QueryExpander for FakeExpander {
    async fn suggest(&self, _query: &str) -> Result<Option<Vec<String>>, ExpansionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Suggestions(s) => Ok(Some(s.iter().map(|q| q.to_string()).collect())),
            Reply::NoList => Ok(None),
            Reply::Fail => Err(ExpansionError::Api {
                status: 503,
                body: "model overloaded".to_string(),
            }),
        }
    }
}

pub fn expansion_with(fake: &Arc<FakeExpander>) -> QueryExpansion {
    QueryExpansion::new(Some(fake.clone() as Arc<dyn QueryExpander>))
}

pub fn service_with(fake: &Arc<FakeExpander>) -> SearchService {
    SearchService::new(expansion_with(fake))
}

pub fn service_without_key() -> SearchService {
    SearchService::new(QueryExpansion::disabled())
}
