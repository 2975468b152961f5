use uuid::Uuid;

/// Category membership test for the unified feed query.
///
/// A category id is either a technology id (matched against the RSS
/// technology join) or a hashtag id (matched against the post hashtag join).
/// The two id spaces never overlap, so one untagged id is enough.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryPredicate {
    #[default]
    Any,
    Member(Uuid),
}

pub struct CategoryIndex;

impl CategoryIndex {
    pub fn resolve(category_id: Option<Uuid>) -> CategoryPredicate {
        match category_id {
            Some(id) => CategoryPredicate::Member(id),
            None => CategoryPredicate::Any,
        }
    }
}

impl CategoryPredicate {
    /// SQL condition over a `feed_items fi` row, reading the category id from `$param`.
    ///
    /// A NULL parameter matches everything.
    pub fn sql(param: usize) -> String {
        format!(
            r#"(
                ${p}::uuid IS NULL
                OR EXISTS (
                    SELECT 1 FROM rss_entry_technologies ret
                    WHERE ret.rss_entry_id = fi.rss_entry_id AND ret.technology_id = ${p}::uuid
                )
                OR EXISTS (
                    SELECT 1 FROM post_hashtags ph
                    WHERE ph.post_id = fi.post_id AND ph.hashtag_id = ${p}::uuid
                )
            )"#,
            p = param
        )
    }

    /// Value bound to the placeholder produced by [`CategoryPredicate::sql`]
    pub fn bind_value(&self) -> Option<Uuid> {
        match self {
            Self::Any => None,
            Self::Member(id) => Some(*id),
        }
    }
}
