use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use swipefeed_backend::domain::content::Category;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_technologies_ordered_by_name(ctx: &TestContext) {
    let typescript = ctx
        .fixtures
        .create_technology("TypeScript", Some("#3178c6"))
        .await
        .unwrap();
    let go = ctx.fixtures.create_technology("Go", None).await.unwrap();
    ctx.fixtures.create_hashtag("not-a-technology").await.unwrap();

    let response = ctx.client.get("/api/categories").await.unwrap();

    response.assert_status(StatusCode::OK);
    let categories: Vec<Category> = response.json().unwrap();
    assert_eq!(
        categories,
        vec![
            Category {
                id: go.id,
                name: "Go".to_string(),
                color_hint: None,
            },
            Category {
                id: typescript.id,
                name: "TypeScript".to_string(),
                color_hint: Some("#3178c6".to_string()),
            },
        ]
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_empty_catalog(ctx: &TestContext) {
    let response = ctx.client.get("/api/categories").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body, Some(serde_json::json!([])));
}
