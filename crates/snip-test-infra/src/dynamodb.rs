use crate::Result;
use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::ImageExt;
use testcontainers::{ContainerAsync, GenericImage};
use typed_builder::TypedBuilder;

const DYNAMODB_PORT: u16 = 8000;

#[derive(TypedBuilder)]
pub struct DynamoDbLocalConfig {
    #[builder(default = "amazon/dynamodb-local".to_string())]
    image: String,
    #[builder(default = "2.5.2".to_string())]
    tag: String,
}

/// Test fixture for a disposable, in-memory DynamoDB Local server.
pub struct DynamoDbLocal {
    container: ContainerAsync<GenericImage>,
}

impl DynamoDbLocal {
    /// Starts a DynamoDB Local container suitable for integration tests.
    pub async fn new(config: DynamoDbLocalConfig) -> Result<Self> {
        let container = GenericImage::new(config.image, config.tag)
            .with_exposed_port(DYNAMODB_PORT.tcp())
            .with_wait_for(WaitFor::message_on_stdout("Initializing DynamoDB Local"))
            .with_cmd(["-jar", "DynamoDBLocal.jar", "-inMemory", "-sharedDb"])
            .start()
            .await?;

        Ok(Self { container })
    }

    pub async fn host(&self) -> Result<String> {
        Ok(self.container.get_host().await?.to_string())
    }

    pub async fn port(&self) -> Result<u16> {
        Ok(self.container.get_host_port_ipv4(DYNAMODB_PORT).await?)
    }

    /// The endpoint URL to hand to the AWS SDK.
    pub async fn endpoint_url(&self) -> Result<String> {
        let host = self.host().await?;
        let port = self.port().await?;
        Ok(format!("http://{}:{}", host, port))
    }
}
