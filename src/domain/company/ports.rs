use async_trait::async_trait;

use super::{entities::Company, errors::CompanyError};

/// Companies are looked up by their unique name
#[async_trait]
pub trait CompanyRepository: Send + Sync {
  async fn create(&self, company: Company) -> Result<Company, CompanyError>;
  async fn find_by_name(&self, name: &str) -> Result<Option<Company>, CompanyError>;
}
