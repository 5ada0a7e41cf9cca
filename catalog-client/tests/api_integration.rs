// catalog-client/tests/api_integration.rs
// Endpoint paths, bodies and the attribute cache

mod support;

use catalog_client::{Attribute, AttributeType, CategoryDto};
use http::{Method, StatusCode};
use serde_json::json;
use shared::error::MSG_NOT_FOUND;
use support::{category, client, link};

#[tokio::test]
async fn test_category_attributes_cached_per_category() {
    let client = client();
    client.http().json(
        Method::GET,
        "category-attributes/category/4",
        json!([link(1, 4, 11, "Color")]),
    );

    let first = client.attributes().category_attributes(4, false).await.unwrap();
    let second = client.attributes().category_attributes(4, false).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(
        client
            .http()
            .count(Method::GET, "category-attributes/category/4"),
        1
    );
}

#[tokio::test]
async fn test_force_refresh_bypasses_and_overwrites_cache() {
    let client = client();
    let mock = client.http();
    mock.json(
        Method::GET,
        "category-attributes/category/4",
        json!([link(1, 4, 11, "Color")]),
    );
    client.attributes().category_attributes(4, false).await.unwrap();

    mock.json(
        Method::GET,
        "category-attributes/category/4",
        json!([link(1, 4, 11, "Color"), link(2, 4, 12, "Size")]),
    );
    let refreshed = client.attributes().category_attributes(4, true).await.unwrap();
    assert_eq!(refreshed.len(), 2);
    assert_eq!(mock.count(Method::GET, "category-attributes/category/4"), 2);

    let cached = client.attributes().category_attributes(4, false).await.unwrap();
    assert_eq!(cached.len(), 2);
    assert_eq!(mock.count(Method::GET, "category-attributes/category/4"), 2);
}

#[tokio::test]
async fn test_link_writes_clear_whole_cache() {
    let client = client();
    let mock = client.http();
    mock.json(Method::GET, "category-attributes/category/1", json!([]))
        .json(Method::GET, "category-attributes/category/2", json!([]))
        .json(Method::POST, "category-attributes", link(5, 1, 11, "Color"))
        .json(Method::DELETE, "category-attributes/5", json!(null));

    client.attributes().category_attributes(1, false).await.unwrap();
    client.attributes().category_attributes(2, false).await.unwrap();
    assert_eq!(client.cache().len(), 2);

    let attribute = Attribute {
        id: 11,
        name: "Color".into(),
        attribute_type: AttributeType::String,
    };
    let request = catalog_client::CategoryAttribute::link(1, "Root", &attribute, false);
    let saved = client
        .attributes()
        .add_category_attribute(&request)
        .await
        .unwrap();
    assert_eq!(saved.id, 5);
    assert!(client.cache().is_empty());

    client.attributes().category_attributes(2, false).await.unwrap();
    assert_eq!(mock.count(Method::GET, "category-attributes/category/2"), 2);

    client.attributes().delete_category_attribute(5).await.unwrap();
    assert!(client.cache().is_empty());
}

#[tokio::test]
async fn test_failed_write_keeps_cache() {
    let client = client();
    let mock = client.http();
    mock.json(Method::GET, "category-attributes/category/1", json!([]))
        .fail(Method::DELETE, "category-attributes/9", StatusCode::NOT_FOUND);

    client.attributes().category_attributes(1, false).await.unwrap();
    let err = client
        .attributes()
        .delete_category_attribute(9)
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), MSG_NOT_FOUND);
    assert!(client.cache().contains(1));
}

#[tokio::test]
async fn test_fetch_error_is_not_cached() {
    let client = client();
    client.http().fail(
        Method::GET,
        "category-attributes/category/3",
        StatusCode::INTERNAL_SERVER_ERROR,
    );

    assert!(client.attributes().category_attributes(3, false).await.is_err());
    assert!(!client.cache().contains(3));
}

#[tokio::test]
async fn test_category_endpoints() {
    let client = client();
    let mock = client.http();
    mock.json(
        Method::GET,
        "categories/tree",
        json!([{ "key": "1", "label": "Root", "data": { "id": 1 }, "children": [] }]),
    )
    .json(
        Method::GET,
        "categories/1/children",
        json!([{ "key": "2", "label": "Shoes", "data": { "id": 2, "parentId": 1 } }]),
    )
    .json(Method::POST, "categories", category(3, "Hats", Some(1)))
    .json(Method::PUT, "categories/3", category(3, "Caps", Some(1)))
    .json(Method::DELETE, "categories/3", json!(null));

    let tree = client.categories().tree().await.unwrap();
    assert_eq!(tree[0].id(), Some(1));

    let children = client.categories().children(1).await.unwrap();
    assert_eq!(children[0].data.parent_id, Some(1));

    let dto = CategoryDto {
        name: "Hats".into(),
        description: None,
        parent_id: Some(1),
    };
    let created = client.categories().create(&dto).await.unwrap();
    assert_eq!(created.id, 3);

    client.categories().update(3, &dto).await.unwrap();
    client.categories().delete(3).await.unwrap();

    let calls = mock.calls();
    assert_eq!(calls[2].body, Some(json!({ "name": "Hats", "parentId": 1 })));
    assert_eq!(
        mock.log(),
        vec![
            "GET categories/tree",
            "GET categories/1/children",
            "POST categories",
            "PUT categories/3",
            "DELETE categories/3",
        ]
    );
}

#[tokio::test]
async fn test_product_search_sends_term_as_query() {
    let client = client();
    client.http().json(
        Method::GET,
        "products/search",
        json!([{ "id": 1, "title": "Red shoe", "price": 10, "stock": 1, "categoryId": 2 }]),
    );

    let found = client.products().search("red shoe").await.unwrap();
    assert_eq!(found.len(), 1);

    let calls = client.http().calls();
    assert_eq!(
        calls[0].query,
        vec![("term".to_string(), "red shoe".to_string())]
    );
}

#[tokio::test]
async fn test_available_attributes_include_inherited() {
    let client = client();
    client
        .http()
        .json(Method::GET, "categories/2", category(2, "Shoes", Some(1)))
        .json(Method::GET, "categories/1", category(1, "Root", None))
        .json(
            Method::GET,
            "category-attributes/category/2",
            json!([link(2, 2, 20, "Size")]),
        )
        .json(
            Method::GET,
            "category-attributes/category/1",
            json!([link(1, 1, 10, "Brand")]),
        );

    let attrs = client.products().available_attributes(2).await.unwrap();
    let names: Vec<&str> = attrs.iter().map(|a| a.attribute_name.as_str()).collect();
    assert_eq!(names, vec!["Size", "Brand"]);
    assert!(attrs[1].inherited);
}

#[tokio::test]
async fn test_decode_failure_and_server_message() {
    let client = client();
    client.http().json(Method::GET, "attributes", json!("not a list"));

    let err = client.attributes().list().await.unwrap_err();
    assert!(err.status().is_none());

    let err = catalog_client::ClientError::from_response(
        StatusCode::BAD_REQUEST,
        Some("Title must be unique".into()),
    );
    assert_eq!(err.user_message(), "Title must be unique");
}
