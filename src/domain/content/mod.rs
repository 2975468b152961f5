pub mod model;

pub use model::{
    Category, ContentItem, ContentKind, FeedItemRow, RawFeedItem, RawPost, RawRssEntry,
    RssArticle, UserPost,
};
