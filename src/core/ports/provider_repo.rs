//! Provider repository port

use super::super::models::Provider;

/// Repository for registered providers
pub trait ProviderRepository {
    /// Load every registered provider
    fn load_providers(&self) -> anyhow::Result<Vec<Provider>>;

    /// Replace the registered providers
    fn save_providers(&self, providers: &[Provider]) -> anyhow::Result<()>;

    /// Find a provider by RUC; absence is a normal, unclassified state
    fn find_by_ruc(&self, ruc: &str) -> anyhow::Result<Option<Provider>> {
        Ok(self.load_providers()?.into_iter().find(|p| p.ruc == ruc))
    }
}
