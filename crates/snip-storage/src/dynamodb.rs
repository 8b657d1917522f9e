use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::types::{
    AttributeDefinition, AttributeValue, BillingMode, KeySchemaElement, KeyType,
    ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;
use snip_core::store::{LinkStore, Result};
use snip_core::{Link, ShortCode, StorageError};
use std::collections::HashMap;
use tracing::{debug, info, trace, warn};
use typed_builder::TypedBuilder;

const SHORT_URL_ATTR: &str = "short_url";
const ORIGINAL_URL_ATTR: &str = "original_url";

/// Connection settings for [`DynamoDbLinkStore::connect`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct DynamoDbSettings {
    #[builder(default = "us-east-2".to_string(), setter(into))]
    region: String,
    /// Overrides the service endpoint, e.g. for DynamoDB Local.
    #[builder(default, setter(strip_option, into))]
    endpoint_url: Option<String>,
    #[builder(default = "Links".to_string(), setter(into))]
    table: String,
}

/// DynamoDB implementation of the link store.
///
/// Links live in a single table with the hash key `short_url` (S) and one
/// more attribute, `original_url` (S). `put` is an unconditional `PutItem`,
/// so writing an existing code replaces the previous destination.
#[derive(Debug, Clone)]
pub struct DynamoDbLinkStore {
    client: Client,
    table: String,
}

impl DynamoDbLinkStore {
    /// Creates a store from an existing client.
    pub fn new(client: Client, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    /// Loads the AWS configuration (credentials from the default provider
    /// chain) and builds a client for the configured region and endpoint.
    pub async fn connect(settings: DynamoDbSettings) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(settings.region));
        if let Some(endpoint_url) = settings.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let config = loader.load().await;

        Self::new(Client::new(&config), settings.table)
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Creates the links table with on-demand billing.
    ///
    /// A table that already exists is not an error.
    pub async fn ensure_table(&self) -> Result<()> {
        let key_schema = KeySchemaElement::builder()
            .attribute_name(SHORT_URL_ATTR)
            .key_type(KeyType::Hash)
            .build()
            .map_err(|e| StorageError::Operation(e.to_string()))?;
        let key_attribute = AttributeDefinition::builder()
            .attribute_name(SHORT_URL_ATTR)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(|e| StorageError::Operation(e.to_string()))?;

        let result = self
            .client
            .create_table()
            .table_name(&self.table)
            .key_schema(key_schema)
            .attribute_definitions(key_attribute)
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await;

        match result {
            Ok(_) => {
                info!(table = %self.table, "created links table");
                Ok(())
            }
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_resource_in_use_exception()) =>
            {
                debug!(table = %self.table, "links table already exists");
                Ok(())
            }
            Err(err) => Err(map_sdk_error(err)),
        }
    }
}

fn map_sdk_error<E, R>(err: SdkError<E, R>) -> StorageError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let message = DisplayErrorContext(&err).to_string();

    match err {
        SdkError::TimeoutError(_) => StorageError::Timeout(message),
        SdkError::DispatchFailure(_) => StorageError::Unavailable(message),
        SdkError::ServiceError(_) | SdkError::ResponseError(_) => StorageError::Query(message),
        _ => StorageError::Operation(message),
    }
}

/// Converts a `GetItem` result into a link.
///
/// An item without a non-empty `original_url` is treated as missing.
fn link_from_item(code: &ShortCode, item: &HashMap<String, AttributeValue>) -> Result<Option<Link>> {
    let Some(value) = item.get(ORIGINAL_URL_ATTR) else {
        warn!(code = %code, "stored item has no original_url");
        return Ok(None);
    };

    match value.as_s() {
        Ok(original_url) if original_url.is_empty() => {
            warn!(code = %code, "stored item has an empty original_url");
            Ok(None)
        }
        Ok(original_url) => Ok(Some(Link::new(original_url.clone(), code.clone()))),
        Err(other) => Err(StorageError::InvalidData(format!(
            "original_url of '{}' is not a string: {:?}",
            code, other
        ))),
    }
}

#[async_trait]
impl LinkStore for DynamoDbLinkStore {
    async fn put(&self, link: &Link) -> Result<()> {
        trace!(code = %link.short_url, table = %self.table, "putting link");

        self.client
            .put_item()
            .table_name(&self.table)
            .item(
                SHORT_URL_ATTR,
                AttributeValue::S(link.short_url.as_str().to_owned()),
            )
            .item(
                ORIGINAL_URL_ATTR,
                AttributeValue::S(link.original_url.clone()),
            )
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(())
    }

    async fn get_by_short_code(&self, code: &ShortCode) -> Result<Option<Link>> {
        trace!(code = %code, table = %self.table, "getting link");

        let output = self
            .client
            .get_item()
            .table_name(&self.table)
            .key(SHORT_URL_ATTR, AttributeValue::S(code.as_str().to_owned()))
            .send()
            .await
            .map_err(map_sdk_error)?;

        match output.item() {
            Some(item) => link_from_item(code, item),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    fn item(original_url: AttributeValue) -> HashMap<String, AttributeValue> {
        HashMap::from([
            (SHORT_URL_ATTR.to_string(), AttributeValue::S("abc123".into())),
            (ORIGINAL_URL_ATTR.to_string(), original_url),
        ])
    }

    #[test]
    fn item_with_original_url() {
        let link = link_from_item(
            &code("abc123"),
            &item(AttributeValue::S("https://example.com".into())),
        )
        .unwrap()
        .unwrap();

        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.short_url.as_str(), "abc123");
    }

    #[test]
    fn item_with_empty_original_url_is_missing() {
        let link = link_from_item(&code("abc123"), &item(AttributeValue::S(String::new()))).unwrap();
        assert!(link.is_none());
    }

    #[test]
    fn item_without_original_url_is_missing() {
        let bare = HashMap::from([(
            SHORT_URL_ATTR.to_string(),
            AttributeValue::S("abc123".into()),
        )]);
        assert!(link_from_item(&code("abc123"), &bare).unwrap().is_none());
    }

    #[test]
    fn item_with_wrong_type_is_invalid() {
        let err =
            link_from_item(&code("abc123"), &item(AttributeValue::N("42".into()))).unwrap_err();
        assert!(matches!(err, StorageError::InvalidData(_)));
    }

    #[test]
    fn settings_defaults() {
        let settings = DynamoDbSettings::builder().build();
        assert_eq!(settings.region, "us-east-2");
        assert_eq!(settings.table, "Links");
        assert!(settings.endpoint_url.is_none());
    }
}
