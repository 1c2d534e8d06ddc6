//! Domain and DNS record operations.

use crate::api::DigitalOceanClient;
use crate::resources::{Domain, DomainCreate, DomainRecord, DomainRecordCreate};
use crate::rest::{
    resolve_path, ApiError, Page, PageWalker, ResourceOperation, RestResource,
};

impl DigitalOceanClient {
    /// Returns one page of the domains in the DNS control panel.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn domains(&self, page: Option<u32>) -> Result<Page<Domain>, ApiError> {
        Domain::page(&self.rest, &[], page).await
    }

    /// Returns a lazy walker over all domains, one page per request.
    #[must_use]
    pub fn domains_walker(&self) -> PageWalker<'_, Domain> {
        PageWalker::new(
            &self.rest,
            Domain::NAME,
            Domain::PLURAL,
            "domains".to_string(),
        )
    }

    /// Fetches a domain's attributes and zone file by name.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `name` is empty (client-side,
    /// before any network activity) and [`ApiError::NotFound`] when the
    /// domain does not exist.
    pub async fn domain(&self, name: &str) -> Result<Domain, ApiError> {
        Domain::find(&self.rest, &[("name", name.to_string())]).await
    }

    /// Creates a new domain with an A record for the given IP address.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for a payload failing validation
    /// (client-side) or refused by the provider.
    pub async fn create_domain(&self, request: &DomainCreate) -> Result<Domain, ApiError> {
        request.validate()?;
        Domain::create(&self.rest, &[], request).await
    }

    /// Deletes a domain from the DNS control panel.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `name` is empty (client-side)
    /// and [`ApiError::NotFound`] when the domain does not exist.
    pub async fn delete_domain(&self, name: &str) -> Result<bool, ApiError> {
        Domain::delete(&self.rest, &[("name", name.to_string())]).await
    }

    /// Returns one page of a domain's DNS records.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn domain_records(
        &self,
        domain: &str,
        page: Option<u32>,
    ) -> Result<Page<DomainRecord>, ApiError> {
        DomainRecord::page(&self.rest, &[("domain_name", domain.to_string())], page).await
    }

    /// Returns a lazy walker over a domain's DNS records.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `domain` is empty (client-side).
    pub fn domain_records_walker(
        &self,
        domain: &str,
    ) -> Result<PageWalker<'_, DomainRecord>, ApiError> {
        let resolved = resolve_path(
            DomainRecord::PATHS,
            ResourceOperation::All,
            &[("domain_name", domain.to_string())],
        )?;

        Ok(PageWalker::new(
            &self.rest,
            DomainRecord::NAME,
            DomainRecord::PLURAL,
            resolved.path,
        ))
    }

    /// Fetches a single DNS record of a domain.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the domain or record does not exist.
    pub async fn domain_record(
        &self,
        domain: &str,
        record_id: u64,
    ) -> Result<DomainRecord, ApiError> {
        DomainRecord::find(
            &self.rest,
            &[
                ("domain_name", domain.to_string()),
                ("id", record_id.to_string()),
            ],
        )
        .await
    }

    /// Creates a new DNS record on a domain.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for a payload failing validation
    /// (client-side) or refused by the provider.
    pub async fn create_domain_record(
        &self,
        domain: &str,
        request: &DomainRecordCreate,
    ) -> Result<DomainRecord, ApiError> {
        request.validate()?;
        DomainRecord::create(&self.rest, &[("domain_name", domain.to_string())], request).await
    }

    /// Updates an existing DNS record of a domain.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for a payload failing validation
    /// (client-side) or refused by the provider, and
    /// [`ApiError::NotFound`] when the domain or record does not exist.
    pub async fn update_domain_record(
        &self,
        domain: &str,
        record_id: u64,
        request: &DomainRecordCreate,
    ) -> Result<DomainRecord, ApiError> {
        request.validate()?;
        DomainRecord::update(
            &self.rest,
            &[
                ("domain_name", domain.to_string()),
                ("id", record_id.to_string()),
            ],
            request,
        )
        .await
    }

    /// Deletes a DNS record from a domain.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the domain or record does not exist.
    pub async fn delete_domain_record(
        &self,
        domain: &str,
        record_id: u64,
    ) -> Result<bool, ApiError> {
        DomainRecord::delete(
            &self.rest,
            &[
                ("domain_name", domain.to_string()),
                ("id", record_id.to_string()),
            ],
        )
        .await
    }
}
