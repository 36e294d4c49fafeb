use crate::core::client::DirectLink;
use crate::domain::port::{Port, PortCollection};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range};
use url::Url;

#[derive(Debug, Clone, Default)]
pub struct ListPortsOptions {
    /// Page size, 1 to 100.
    pub limit: Option<i64>,
    /// Continuation token from a previous page's `next`.
    pub start: Option<String>,
    pub location_name: Option<String>,
}

impl DirectLink {
    /// GET `/ports`
    pub async fn list_ports(&self, options: &ListPortsOptions) -> Result<PortCollection> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(limit) = options.limit {
            validate_range("limit", limit, 1, 100)?;
            query.push(("limit", limit.to_string()));
        }
        if let Some(start) = &options.start {
            query.push(("start", start.clone()));
        }
        if let Some(location_name) = &options.location_name {
            query.push(("location_name", location_name.clone()));
        }
        self.get_json("/ports", &query).await
    }

    /// GET `/ports/{id}`
    pub async fn get_port(&self, id: &str) -> Result<Port> {
        validate_non_empty_string("id", id)?;
        self.get_json(&format!("/ports/{}", id), &[]).await
    }

    /// Pager over `list_ports`.
    pub fn ports_pager(&self, options: ListPortsOptions) -> PortsPager<'_> {
        PortsPager::new(self, options)
    }
}

/// Walks `GET /ports` page by page, following the collection's `next`
/// continuation token.
pub struct PortsPager<'a> {
    client: &'a DirectLink,
    options: ListPortsOptions,
    next_start: Option<String>,
    started: bool,
}

impl<'a> PortsPager<'a> {
    pub fn new(client: &'a DirectLink, options: ListPortsOptions) -> Self {
        let next_start = options.start.clone();
        Self {
            client,
            options,
            next_start,
            started: false,
        }
    }

    pub fn has_next(&self) -> bool {
        !self.started || self.next_start.is_some()
    }

    /// Fetch the next page, or `None` once the collection is exhausted.
    pub async fn next_page(&mut self) -> Result<Option<Vec<Port>>> {
        if !self.has_next() {
            return Ok(None);
        }

        let mut options = self.options.clone();
        options.start = if self.started {
            self.next_start.clone()
        } else {
            self.options.start.clone()
        };

        let collection = self.client.list_ports(&options).await?;
        self.started = true;
        self.next_start = collection
            .next
            .as_ref()
            .and_then(|next| next.start.clone().or_else(|| start_from_href(&next.href)));

        Ok(Some(collection.ports))
    }

    /// Drain every remaining page into one vector.
    pub async fn all(mut self) -> Result<Vec<Port>> {
        let mut ports = Vec::new();
        while let Some(page) = self.next_page().await? {
            ports.extend(page);
        }
        Ok(ports)
    }
}

/// Recover the `start` token from a `next.href` link when the collection
/// does not carry it directly.
fn start_from_href(href: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "start")
        .map(|(_, value)| value.into_owned())
}
