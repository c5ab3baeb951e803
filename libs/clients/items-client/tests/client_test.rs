//! Client tests against a real server bound to an ephemeral local port.

use items_api::{AppState, Config, build_router};
use items_client::{ClientError, CreateItem, ItemsClient, UpdateItem};
use reqwest::StatusCode;
use tokio::net::TcpListener;

async fn spawn_server(seed_items: bool) -> ItemsClient {
    let config = Config {
        seed_items,
        ..Config::default()
    };
    let router = build_router(&AppState::new(config)).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    ItemsClient::new(format!("http://{addr}"))
}

#[tokio::test]
async fn test_health_and_greeting() {
    let client = spawn_server(true).await;

    let health = client.health().await.unwrap();
    assert_eq!(health.status, "healthy");

    let greeting = client.greeting().await.unwrap();
    assert_eq!(greeting.message, "Hello World!");
}

#[tokio::test]
async fn test_list_seeded_items() {
    let client = spawn_server(true).await;

    let items = client.list_items().await.unwrap();
    let ids: Vec<_> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(items[0].name, "Sample Item 1");
}

#[tokio::test]
async fn test_item_lifecycle() {
    let client = spawn_server(false).await;

    let created = client
        .create_item(&CreateItem::new("Lamp", "desk lamp"))
        .await
        .unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = client.get_item(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let updated = client
        .update_item(created.id, &UpdateItem::new("Floor lamp", ""))
        .await
        .unwrap();
    assert_eq!(updated.name, "Floor lamp");
    assert_eq!(updated.description, "");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let deleted = client.delete_item(created.id).await.unwrap();
    assert_eq!(deleted.message, "Item deleted successfully");
    assert_eq!(deleted.item, updated);

    assert!(client.list_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_item_maps_to_not_found() {
    let client = spawn_server(true).await;

    let err = client.get_item(999).await.unwrap_err();
    assert!(err.is_not_found());
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(message, "Item not found");
        }
        other => panic!("expected API error, got {other:?}"),
    }

    assert!(client.delete_item(999).await.unwrap_err().is_not_found());
    assert!(
        client
            .update_item(999, &UpdateItem::new("x", "y"))
            .await
            .unwrap_err()
            .is_not_found()
    );
}

#[tokio::test]
async fn test_empty_name_is_rejected() {
    let client = spawn_server(true).await;

    let err = client
        .create_item(&CreateItem::new("", "no name"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    assert!(!err.is_not_found());

    assert_eq!(client.list_items().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ItemsClient::new(format!("http://{addr}"));
    let err = client.list_items().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
    assert!(!err.is_not_found());
}
