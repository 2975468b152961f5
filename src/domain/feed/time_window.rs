use chrono::{DateTime, Duration, FixedOffset, NaiveTime, Offset, Utc};
use serde::{Deserialize, Serialize};

/// Whether a feed query is bounded to the current local day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WindowPolicy {
    Today,
    Unbounded,
}

impl WindowPolicy {
    /// Policy for a request, honoring an explicit choice.
    ///
    /// Without one, only the first page of the home feed is bounded to today;
    /// category feeds and cursor continuations are unbounded.
    pub fn resolve(explicit: Option<Self>, is_continuation: bool, has_category: bool) -> Self {
        match explicit {
            Some(policy) => policy,
            None if is_continuation || has_category => Self::Unbounded,
            None => Self::Today,
        }
    }
}

/// Half-open `[start, end)` range of UTC instants covering one local day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// The local day containing `now` in the given fixed offset.
    ///
    /// Pure function of its inputs; callers pass `Utc::now()` on every request.
    pub fn today(now: DateTime<Utc>, offset: FixedOffset) -> Self {
        let local_midnight = now
            .with_timezone(&offset)
            .date_naive()
            .and_time(NaiveTime::MIN);
        let start = (local_midnight - Duration::seconds(i64::from(offset.local_minus_utc())))
            .and_utc();

        Self {
            start,
            end: start + Duration::days(1),
        }
    }

    #[cfg(test)]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Builds a fixed offset from minutes east of UTC, falling back to UTC when out of range
pub fn fixed_offset(minutes: i32) -> FixedOffset {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| {
            tracing::warn!(minutes, "Invalid UTC offset, falling back to UTC");
            Utc.fix()
        })
}
