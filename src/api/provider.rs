//! Snapshot providers for the two viewing scopes.
//!
//! [`StatsProvider`] is the seam between the fetch flow and the HTTP layer:
//! the app selects a provider from the [`Scope`](crate::models::Scope) tag
//! and awaits `load_basic_data` without knowing which endpoint is behind it.

use async_trait::async_trait;

use super::{ProviderError, StatsApiClient};
use crate::models::{LocationRef, StatsSnapshot};

/// A data source supplying a [`StatsSnapshot`] for one scope.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Fetch the current snapshot for this provider's scope.
    async fn load_basic_data(&self) -> Result<StatsSnapshot, ProviderError>;
}

/// Provider for the whole-world aggregate.
#[derive(Debug, Clone)]
pub struct WorldProvider {
    client: StatsApiClient,
}

impl WorldProvider {
    pub fn new(client: StatsApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatsProvider for WorldProvider {
    async fn load_basic_data(&self) -> Result<StatsSnapshot, ProviderError> {
        self.client.fetch_world().await
    }
}

/// Provider for one named country.
#[derive(Debug, Clone)]
pub struct CountryProvider {
    client: StatsApiClient,
    location: LocationRef,
}

impl CountryProvider {
    pub fn new(client: StatsApiClient, location: LocationRef) -> Self {
        Self { client, location }
    }
}

#[async_trait]
impl StatsProvider for CountryProvider {
    async fn load_basic_data(&self) -> Result<StatsSnapshot, ProviderError> {
        self.client.fetch_country(&self.location.code).await
    }
}

/// Select the provider for a scope.
pub fn provider_for_scope(
    client: &StatsApiClient,
    scope: &crate::models::Scope,
) -> Box<dyn StatsProvider> {
    match scope {
        crate::models::Scope::Global => Box::new(WorldProvider::new(client.clone())),
        crate::models::Scope::Country(location) => {
            Box::new(CountryProvider::new(client.clone(), location.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Scope;

    #[tokio::test]
    async fn test_world_provider_unreachable_server_fails() {
        let client = StatsApiClient::with_base_url("http://127.0.0.1:1".to_string());
        let provider = WorldProvider::new(client);
        assert!(provider.load_basic_data().await.is_err());
    }

    #[tokio::test]
    async fn test_country_provider_unreachable_server_fails() {
        let client = StatsApiClient::with_base_url("http://127.0.0.1:1".to_string());
        let provider = CountryProvider::new(client, LocationRef::new("Testland", "TL"));
        assert!(provider.load_basic_data().await.is_err());
    }

    #[test]
    fn test_provider_for_scope_selects_by_tag() {
        let client = StatsApiClient::with_base_url("http://127.0.0.1:1".to_string());
        // Both arms must produce a provider without panicking; which one is
        // behind the box is exercised by the integration tests.
        let _world = provider_for_scope(&client, &Scope::Global);
        let _country =
            provider_for_scope(&client, &Scope::Country(LocationRef::new("Testland", "TL")));
    }
}
