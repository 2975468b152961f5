use serde_json::Value;

/// Shape every article in a feed response must have
pub fn assert_article_response(article: &Value) {
    assert!(article.get("id").and_then(|v| v.as_str()).is_some());
    let kind = article.get("kind").and_then(|v| v.as_str());
    assert!(
        matches!(kind, Some("rss") | Some("post")),
        "Unexpected kind {:?}",
        kind
    );
    assert!(article.get("title").and_then(|v| v.as_str()).is_some());
    assert!(article.get("body").and_then(|v| v.as_str()).is_some());
    assert!(article.get("author_name").and_then(|v| v.as_str()).is_some());
    assert!(article.get("published_at").and_then(|v| v.as_str()).is_some());

    for counter in ["like_count", "comment_count", "share_count"] {
        assert!(
            article.get(counter).and_then(|v| v.as_i64()).is_some(),
            "Missing {}",
            counter
        );
    }
    assert!(article.get("is_liked").and_then(|v| v.as_bool()).is_some());
    assert!(article.get("is_bookmarked").and_then(|v| v.as_bool()).is_some());
    assert!(article.get("categories").and_then(|v| v.as_array()).is_some());

    if kind == Some("post") {
        assert!(article.get("original_url").is_none());
    }
}

/// Shape of a page response; returns the article ids in order
pub fn assert_page_response(page: &Value) -> Vec<String> {
    let articles = page
        .get("articles")
        .and_then(|v| v.as_array())
        .expect("Missing articles");
    assert!(page.get("has_more").and_then(|v| v.as_bool()).is_some());
    assert!(page.get("next_cursor").is_some());

    articles.iter().for_each(assert_article_response);

    articles
        .iter()
        .map(|a| a["id"].as_str().unwrap().to_string())
        .collect()
}

pub fn assert_profile_response(profile: &Value) {
    assert!(profile.get("id").and_then(|v| v.as_str()).is_some());
    assert!(profile.get("email").and_then(|v| v.as_str()).is_some());
    assert!(profile.get("technologies").and_then(|v| v.as_array()).is_some());

    let stats = profile.get("stats").expect("Missing stats");
    for stat in [
        "followers_count",
        "following_count",
        "liked_count",
        "bookmarked_count",
    ] {
        assert!(
            stats.get(stat).and_then(|v| v.as_i64()).is_some(),
            "Missing {}",
            stat
        );
    }
}
