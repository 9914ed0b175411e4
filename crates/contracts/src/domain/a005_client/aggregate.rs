use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{
    trimmed_or_none, validate_optional_link, AggregateId, AggregateRoot, ContentBase,
    EntityMetadata,
};
use crate::shared::list_query::ListItem;
use crate::shared::slug::{is_valid_slug, slugify};

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор клиента
    ClientId
);

/// Клиент (логотип в блоке "Нам доверяют")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(flatten)]
    pub base: ContentBase<ClientId>,

    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
}

impl Client {
    pub fn new_for_insert(dto: &ClientDto) -> Self {
        let mut client = Self {
            base: ContentBase::new(ClientId::new_v4(), dto.published, dto.position),
            name: String::new(),
            slug: String::new(),
            logo_url: None,
            website_url: None,
        };
        client.update(dto);
        client
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &ClientDto) {
        self.name = dto.name.trim().to_string();
        self.slug = if dto.slug.trim().is_empty() {
            slugify(&dto.name)
        } else {
            dto.slug.trim().to_string()
        };
        self.logo_url = trimmed_or_none(&dto.logo_url);
        self.website_url = trimmed_or_none(&dto.website_url);
        self.base.published = dto.published;
        self.base.position = dto.position;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Name is required".into());
        }
        if !is_valid_slug(&self.slug) {
            return Err(format!("Invalid slug: '{}'", self.slug));
        }
        validate_optional_link("Logo URL", &self.logo_url)?;
        validate_optional_link("Website URL", &self.website_url)?;
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.record_write();
    }

    pub fn to_dto(&self) -> ClientDto {
        ClientDto {
            id: Some(self.to_string_id()),
            name: self.name.clone(),
            slug: self.slug.clone(),
            logo_url: self.logo_url.clone(),
            website_url: self.website_url.clone(),
            published: self.base.published,
            position: self.base.position,
        }
    }
}

impl AggregateRoot for Client {
    type Id = ClientId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "client"
    }

    fn element_name() -> &'static str {
        "Client"
    }
}

impl ListItem for Client {
    fn item_id(&self) -> String {
        self.to_string_id()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.slug.as_str()]
    }

    fn is_published(&self) -> bool {
        self.base.published
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.base.metadata.created_at
    }

    fn position(&self) -> Option<i32> {
        self.base.position
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientDto {
    pub id: Option<String>,
    pub name: String,
    pub slug: String,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub published: bool,
    pub position: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_slug_and_links() {
        let dto = ClientDto {
            name: "Contoso Ltd.".into(),
            website_url: Some("ftp://contoso".into()),
            ..Default::default()
        };
        let client = Client::new_for_insert(&dto);
        assert_eq!(client.slug, "contoso-ltd");
        assert!(client.validate().unwrap_err().contains("Website URL"));

        let ok = ClientDto {
            website_url: Some("https://contoso.com".into()),
            ..dto
        };
        assert!(Client::new_for_insert(&ok).validate().is_ok());
    }

    #[test]
    fn test_table_name() {
        assert_eq!(Client::table_name(), "a005_client");
    }
}
