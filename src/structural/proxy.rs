//! # Proxy: a stand-in that controls access.
//!
//! [`CachingProxy`] fronts any [`Fetch`] implementation with the same
//! contract, answering repeat requests from its cache instead of hitting
//! the slow target again. Callers cannot tell the proxy from the real
//! fetcher except by speed.

use std::collections::HashMap;

/// Capability: resolve a URL to a response body.
pub trait Fetch {
    fn fetch(&mut self, url: &str) -> String;
}

/// The real subject: pretends to hit the network.
#[derive(Debug, Default)]
pub struct NetworkFetch {
    requests: u32,
}

impl NetworkFetch {
    /// Creates a fetcher with a zeroed request counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the network was actually hit.
    pub fn requests(&self) -> u32 {
        self.requests
    }
}

impl Fetch for NetworkFetch {
    fn fetch(&mut self, url: &str) -> String {
        self.requests += 1;
        format!("{url} - Response from network")
    }
}

/// Caching stand-in for any fetcher.
pub struct CachingProxy<F: Fetch> {
    target: F,
    cache: HashMap<String, String>,
}

impl<F: Fetch> CachingProxy<F> {
    /// Wraps `target` with an empty cache.
    pub fn new(target: F) -> Self {
        Self {
            target,
            cache: HashMap::new(),
        }
    }

    /// The wrapped fetcher.
    pub fn target(&self) -> &F {
        &self.target
    }

    /// Number of cached responses.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

impl<F: Fetch> Fetch for CachingProxy<F> {
    fn fetch(&mut self, url: &str) -> String {
        if self.cache.contains_key(url) {
            return format!("{url} - Response from cache");
        }
        let response = self.target.fetch(url);
        self.cache.insert(url.to_string(), response.clone());
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_hit_goes_to_network() {
        let mut proxy = CachingProxy::new(NetworkFetch::new());
        assert_eq!(
            proxy.fetch("dogPic.jpg"),
            "dogPic.jpg - Response from network"
        );
        assert_eq!(proxy.target().requests(), 1);
    }

    #[test]
    fn test_repeat_hit_answers_from_cache() {
        let mut proxy = CachingProxy::new(NetworkFetch::new());
        proxy.fetch("dogPic.jpg");
        assert_eq!(
            proxy.fetch("dogPic.jpg"),
            "dogPic.jpg - Response from cache"
        );
        // The target was not touched the second time.
        assert_eq!(proxy.target().requests(), 1);
        assert_eq!(proxy.cached(), 1);
    }

    #[test]
    fn test_distinct_urls_cached_separately() {
        let mut proxy = CachingProxy::new(NetworkFetch::new());
        proxy.fetch("a.jpg");
        proxy.fetch("b.jpg");
        proxy.fetch("a.jpg");
        assert_eq!(proxy.target().requests(), 2);
        assert_eq!(proxy.cached(), 2);
    }
}
