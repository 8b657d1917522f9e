use aws_sdk_dynamodb::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_dynamodb::Client;
use snip_core::{Link, ShortCode};
use snip_storage::{DynamoDbLinkStore, LinkStore};
use snip_test_infra::dynamodb::{DynamoDbLocal, DynamoDbLocalConfig};

struct Fixture {
    _dynamodb: DynamoDbLocal,
    store: DynamoDbLinkStore,
}

impl Fixture {
    async fn start() -> Self {
        let dynamodb = DynamoDbLocal::new(DynamoDbLocalConfig::builder().build())
            .await
            .expect("start dynamodb local");
        let endpoint = dynamodb.endpoint_url().await.expect("dynamodb endpoint");

        let config = aws_sdk_dynamodb::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-2"))
            .endpoint_url(endpoint)
            .credentials_provider(Credentials::new("local", "local", None, None, "snip-tests"))
            .build();

        let store = DynamoDbLinkStore::new(Client::from_conf(config), "Links");
        store.ensure_table().await.expect("create table");

        Self {
            _dynamodb: dynamodb,
            store,
        }
    }
}

fn code(value: &str) -> ShortCode {
    ShortCode::new_unchecked(value)
}

#[tokio::test]
#[ignore = "requires docker"]
async fn put_and_get_link() {
    let fixture = Fixture::start().await;

    fixture
        .store
        .put(&Link::new("https://example.com/page", code("abc123")))
        .await
        .unwrap();

    let got = fixture
        .store
        .get_by_short_code(&code("abc123"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(got.original_url, "https://example.com/page");
    assert_eq!(got.short_url, code("abc123"));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn missing_code_is_none() {
    let fixture = Fixture::start().await;

    let got = fixture.store.get_by_short_code(&code("nope")).await.unwrap();
    assert!(got.is_none());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn put_overwrites_existing_code() {
    let fixture = Fixture::start().await;

    fixture
        .store
        .put(&Link::new("https://old.com", code("abc123")))
        .await
        .unwrap();
    fixture
        .store
        .put(&Link::new("https://new.com", code("abc123")))
        .await
        .unwrap();

    let got = fixture
        .store
        .get_by_short_code(&code("abc123"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(got.original_url, "https://new.com");
}

#[tokio::test]
#[ignore = "requires docker"]
async fn ensure_table_is_idempotent() {
    let fixture = Fixture::start().await;

    fixture.store.ensure_table().await.unwrap();
}
