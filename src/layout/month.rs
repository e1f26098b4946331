use chrono::{Datelike, NaiveDate};

use crate::content::model::DiaryEntry;

/// Calendar month, ordered chronologically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct MonthKey {
    /// Year.
    pub year: i32,
    /// Month, 1-based.
    pub month: u32,
}

impl MonthKey {
    /// Month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// `YYYY/MM`, the label drawn over each month band or cell.
    pub fn label(self) -> String {
        format!("{}/{:02}", self.year, self.month)
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// Entries of one month, oldest first.
#[derive(Clone, Debug)]
pub struct MonthBucket<'a> {
    /// Month.
    pub key: MonthKey,
    /// Entries falling in the month.
    pub entries: Vec<&'a DiaryEntry>,
}

/// Sort entries ascending by date and bucket them by month.
///
/// Bucket index is the month's 0-based position in chronological order; only
/// months that contain entries get a bucket.
pub fn group_by_month(entries: &[DiaryEntry]) -> Vec<MonthBucket<'_>> {
    let mut sorted: Vec<&DiaryEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.date);

    let mut buckets: Vec<MonthBucket<'_>> = Vec::new();
    for entry in sorted {
        let key = MonthKey::of(entry.date);
        match buckets.last_mut() {
            Some(b) if b.key == key => b.entries.push(entry),
            _ => buckets.push(MonthBucket {
                key,
                entries: vec![entry],
            }),
        }
    }
    buckets
}

#[cfg(test)]
#[path = "../../tests/unit/layout/month.rs"]
mod tests;
