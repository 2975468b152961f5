pub mod assembler;
pub mod category;
pub mod cursor;
pub mod dto;
pub mod error;
pub mod model;
pub mod service;
pub mod time_window;

pub use assembler::FeedAssembler;
pub use category::{CategoryIndex, CategoryPredicate};
pub use cursor::{Cursor, CursorError};
pub use dto::{Article, BookmarkQueryParams, FeedPageResponse, FeedQueryParams, FeedRequest};
pub use error::FeedServiceError;
pub use model::{BookmarkedRow, FeedItemStore, PageQuery};
pub use service::{FeedService, FeedServiceApi};
pub use time_window::{TimeWindow, WindowPolicy};
