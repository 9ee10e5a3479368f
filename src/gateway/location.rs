//! The redirect boundary and its in-memory implementation.

use std::sync::Arc;

use arc_swap::ArcSwap;

/// The single side-effecting boundary of the provider.
pub trait RedirectGateway: Send + Sync {
    /// Full URL of the current location.
    fn current_url(&self) -> String;

    /// Query portion of the current location, without the leading `?`.
    fn current_query(&self) -> String;

    /// Replace the current location with `url`.
    fn navigate_to(&self, url: &str);
}

impl<G: RedirectGateway + ?Sized> RedirectGateway for Arc<G> {
    fn current_url(&self) -> String {
        (**self).current_url()
    }

    fn current_query(&self) -> String {
        (**self).current_query()
    }

    fn navigate_to(&self, url: &str) {
        (**self).navigate_to(url)
    }
}

/// Location held in memory; navigation just swaps the stored href.
#[derive(Debug)]
pub struct InMemoryLocation {
    href: ArcSwap<String>,
}

impl InMemoryLocation {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: ArcSwap::from_pointee(href.into()),
        }
    }
}

impl RedirectGateway for InMemoryLocation {
    fn current_url(&self) -> String {
        self.href.load().to_string()
    }

    fn current_query(&self) -> String {
        query_of(&self.href.load()).to_string()
    }

    fn navigate_to(&self, url: &str) {
        self.href.store(Arc::new(url.to_string()));
    }
}

/// Text between `?` and `#`, or "" when there is no query.
fn query_of(href: &str) -> &str {
    let without_fragment = href.split_once('#').map_or(href, |(head, _)| head);
    without_fragment.split_once('?').map_or("", |(_, query)| query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_replaces_location() {
        let location = InMemoryLocation::new("http://return-to-wallet");
        assert_eq!(location.current_url(), "http://return-to-wallet");

        location.navigate_to("http://mocked-wallet.com/hook/logout?callbackUrl=x");
        assert_eq!(
            location.current_url(),
            "http://mocked-wallet.com/hook/logout?callbackUrl=x"
        );
        assert_eq!(location.current_query(), "callbackUrl=x");
    }

    #[test]
    fn test_query_of() {
        assert_eq!(query_of("http://dapp.com/"), "");
        assert_eq!(query_of("http://dapp.com/?"), "");
        assert_eq!(query_of("http://dapp.com/?a=1&b=2"), "a=1&b=2");
        assert_eq!(query_of("http://dapp.com/?a=1#top"), "a=1");
        assert_eq!(query_of("http://dapp.com/#frag?x=1"), "");
    }

    #[test]
    fn test_shared_gateway() {
        let location = Arc::new(InMemoryLocation::new("http://a"));
        let shared: Arc<InMemoryLocation> = location.clone();
        shared.navigate_to("http://b?x=1");
        assert_eq!(location.current_query(), "x=1");
    }
}
