use crate::e2e::helpers;

use chrono::{Duration, Utc};
use helpers::TestContext;
use hyper::StatusCode;
use swipefeed_backend::domain::feed::FeedPageResponse;
use test_context::test_context;
use uuid::Uuid;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_page_bookmarks_by_bookmark_time(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("user@example.com").await.unwrap();
    let source = ctx.fixtures.create_rss_source(None).await.unwrap();
    let now = Utc::now();

    let mut items = Vec::new();
    for i in 0..3 {
        items.push(
            ctx.fixtures
                .create_rss_item(source, "entry", now - Duration::hours(i), &[])
                .await
                .unwrap(),
        );
    }
    // Oldest article bookmarked most recently
    ctx.fixtures
        .bookmark_at(user.id, items[0], now - Duration::minutes(30))
        .await
        .unwrap();
    ctx.fixtures
        .bookmark_at(user.id, items[1], now - Duration::minutes(20))
        .await
        .unwrap();
    ctx.fixtures
        .bookmark_at(user.id, items[2], now - Duration::minutes(10))
        .await
        .unwrap();
    let token = ctx.token_for(&user.id);

    let response = ctx
        .client
        .get_with_auth("/api/bookmarks?limit=2", &token)
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    let page: FeedPageResponse = response.json().unwrap();
    assert_eq!(
        page.articles.iter().map(|a| a.id).collect::<Vec<_>>(),
        vec![items[2], items[1]]
    );
    assert!(page.has_more);
    assert!(page.articles.iter().all(|a| a.is_bookmarked));

    let page: FeedPageResponse = ctx
        .client
        .get_with_auth(
            &format!("/api/bookmarks?limit=2&cursor={}", page.next_cursor.unwrap()),
            &token,
        )
        .await
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(
        page.articles.iter().map(|a| a.id).collect::<Vec<_>>(),
        vec![items[0]]
    );
    assert!(!page.has_more);
    assert_eq!(page.next_cursor, None);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_only_list_own_bookmarks(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("user@example.com").await.unwrap();
    let other = ctx.fixtures.create_user("other@example.com").await.unwrap();
    let source = ctx.fixtures.create_rss_source(None).await.unwrap();
    let item = ctx
        .fixtures
        .create_rss_item(source, "entry", Utc::now(), &[])
        .await
        .unwrap();
    ctx.fixtures.bookmark(other.id, item).await.unwrap();

    let page: FeedPageResponse = ctx
        .client
        .get_with_auth("/api/bookmarks", &ctx.token_for(&user.id))
        .await
        .unwrap()
        .json()
        .unwrap();

    assert!(page.articles.is_empty());
    assert!(!page.has_more);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_remove_bookmark(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("user@example.com").await.unwrap();
    let source = ctx.fixtures.create_rss_source(None).await.unwrap();
    let item = ctx
        .fixtures
        .create_rss_item(source, "entry", Utc::now(), &[])
        .await
        .unwrap();
    ctx.fixtures.bookmark(user.id, item).await.unwrap();
    let token = ctx.token_for(&user.id);

    let response = ctx
        .client
        .delete_with_auth(&format!("/api/bookmarks/{}", item), &token)
        .await
        .unwrap();
    response.assert_status(StatusCode::NO_CONTENT);

    let response = ctx
        .client
        .delete_with_auth(&format!("/api/bookmarks/{}", item), &token)
        .await
        .unwrap();
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_error_message("Bookmark not found");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_require_auth_for_bookmarks(ctx: &TestContext) {
    let response = ctx.client.get("/api/bookmarks").await.unwrap();
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = ctx
        .client
        .get_with_auth(&format!("/api/bookmarks?cursor={}", Uuid::new_v4()), "bad")
        .await
        .unwrap();
    response.assert_status(StatusCode::UNAUTHORIZED);
}
