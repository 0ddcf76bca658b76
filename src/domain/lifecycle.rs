//! Review lifecycle stages and tag advancement

use chrono::NaiveDateTime;

/// Review stage of a document, denoted by a tag in its front matter.
///
/// Stages are mutually exclusive; `Draft` is the implicit stage of a
/// document carrying none of the other tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStage {
    Draft,
    LastCall,
    Accepted,
    Final,
}

impl LifecycleStage {
    /// All stages, in review order.
    pub const ALL: [LifecycleStage; 4] = [
        LifecycleStage::Draft,
        LifecycleStage::LastCall,
        LifecycleStage::Accepted,
        LifecycleStage::Final,
    ];

    /// The tag spelling used in document front matter.
    pub fn as_tag(&self) -> &'static str {
        match self {
            LifecycleStage::Draft => "draft",
            LifecycleStage::LastCall => "last call",
            LifecycleStage::Accepted => "accepted",
            LifecycleStage::Final => "final",
        }
    }

    /// The stage a document has reached after `days` whole elapsed days.
    ///
    /// Bands are checked from the largest threshold down; below 14 days the
    /// document has not left draft and no tag applies.
    pub fn for_elapsed_days(days: i64) -> Option<LifecycleStage> {
        if days >= 42 {
            Some(LifecycleStage::Final)
        } else if days >= 28 {
            Some(LifecycleStage::Accepted)
        } else if days >= 14 {
            Some(LifecycleStage::LastCall)
        } else {
            None
        }
    }

    /// Whether a tag names a lifecycle stage.
    pub fn is_lifecycle_tag(tag: &str) -> bool {
        Self::ALL.iter().any(|stage| stage.as_tag() == tag)
    }
}

/// Result of a tag advancement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagUpdate {
    pub tags: Vec<String>,
    pub changed: bool,
}

/// Advance the lifecycle tag of a document created at `created`.
///
/// Elapsed time is the whole-day difference between `now` and `created`,
/// truncating fractional days. When a new stage applies and its tag is not
/// already present, every lifecycle tag is removed and the new tag appended
/// at the end; non-lifecycle tags keep their relative order. Tags only ever
/// move forward; a document is never demoted.
pub fn advance_tags(tags: &[String], created: NaiveDateTime, now: NaiveDateTime) -> TagUpdate {
    let elapsed_days = (now - created).num_days();

    let Some(stage) = LifecycleStage::for_elapsed_days(elapsed_days) else {
        return TagUpdate {
            tags: tags.to_vec(),
            changed: false,
        };
    };

    let new_tag = stage.as_tag();
    if tags.iter().any(|tag| tag == new_tag) {
        return TagUpdate {
            tags: tags.to_vec(),
            changed: false,
        };
    }

    let mut updated: Vec<String> = tags
        .iter()
        .filter(|tag| !LifecycleStage::is_lifecycle_tag(tag))
        .cloned()
        .collect();
    updated.push(new_tag.to_string());

    TagUpdate {
        tags: updated,
        changed: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_stage_band_boundaries() {
        assert_eq!(LifecycleStage::for_elapsed_days(13), None);
        assert_eq!(
            LifecycleStage::for_elapsed_days(14),
            Some(LifecycleStage::LastCall)
        );
        assert_eq!(
            LifecycleStage::for_elapsed_days(27),
            Some(LifecycleStage::LastCall)
        );
        assert_eq!(
            LifecycleStage::for_elapsed_days(28),
            Some(LifecycleStage::Accepted)
        );
        assert_eq!(
            LifecycleStage::for_elapsed_days(41),
            Some(LifecycleStage::Accepted)
        );
        assert_eq!(
            LifecycleStage::for_elapsed_days(42),
            Some(LifecycleStage::Final)
        );
    }

    #[test]
    fn test_stage_for_negative_elapsed_days() {
        assert_eq!(LifecycleStage::for_elapsed_days(-5), None);
    }

    #[test]
    fn test_is_lifecycle_tag() {
        assert!(LifecycleStage::is_lifecycle_tag("draft"));
        assert!(LifecycleStage::is_lifecycle_tag("last call"));
        assert!(LifecycleStage::is_lifecycle_tag("accepted"));
        assert!(LifecycleStage::is_lifecycle_tag("final"));
        assert!(!LifecycleStage::is_lifecycle_tag("editorial"));
    }

    #[test]
    fn test_young_document_unchanged() {
        let now = midnight(2024, 3, 15);
        let created = midnight(2024, 3, 10);

        let update = advance_tags(&tags(&["draft"]), created, now);
        assert!(!update.changed);
        assert_eq!(update.tags, tags(&["draft"]));
    }

    #[test]
    fn test_fourteen_days_moves_draft_to_last_call() {
        let now = midnight(2024, 3, 15);
        let created = midnight(2024, 3, 1);

        let update = advance_tags(&tags(&["draft"]), created, now);
        assert!(update.changed);
        assert_eq!(update.tags, tags(&["last call"]));
    }

    #[test]
    fn test_accepted_preserves_other_tags() {
        let now = midnight(2024, 3, 15);
        let created = midnight(2024, 2, 15);

        let update = advance_tags(&tags(&["last call", "editorial"]), created, now);
        assert!(update.changed);
        assert_eq!(update.tags, tags(&["editorial", "accepted"]));
    }

    #[test]
    fn test_final_already_present_is_noop() {
        let now = midnight(2024, 3, 15);
        let created = midnight(2024, 1, 1);

        let update = advance_tags(&tags(&["final"]), created, now);
        assert!(!update.changed);
        assert_eq!(update.tags, tags(&["final"]));
    }

    #[test]
    fn test_old_document_lands_on_exactly_one_lifecycle_tag() {
        let now = midnight(2024, 3, 15);
        let created = midnight(2024, 1, 1);

        let update = advance_tags(&tags(&["draft", "proposal"]), created, now);
        assert!(update.changed);
        assert_eq!(update.tags, tags(&["proposal", "final"]));

        let lifecycle_count = update
            .tags
            .iter()
            .filter(|tag| LifecycleStage::is_lifecycle_tag(tag))
            .count();
        assert_eq!(lifecycle_count, 1);
    }

    #[test]
    fn test_removes_every_stale_lifecycle_tag() {
        let now = midnight(2024, 3, 15);
        let created = midnight(2024, 2, 10);

        // A malformed set with two lifecycle tags still collapses to one.
        let update = advance_tags(&tags(&["draft", "last call", "editorial"]), created, now);
        assert!(update.changed);
        assert_eq!(update.tags, tags(&["editorial", "accepted"]));
    }

    #[test]
    fn test_second_application_is_noop() {
        let now = midnight(2024, 3, 15);
        let created = midnight(2024, 2, 1);

        let first = advance_tags(&tags(&["draft"]), created, now);
        assert!(first.changed);

        let second = advance_tags(&first.tags, created, now);
        assert!(!second.changed);
        assert_eq!(second.tags, first.tags);
    }

    #[test]
    fn test_fractional_days_truncate() {
        let now = midnight(2024, 3, 15);
        let created = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();

        // 13 days and 13.5 hours elapsed; truncates to 13, below the band.
        let update = advance_tags(&tags(&["draft"]), created, now);
        assert!(!update.changed);
    }

    #[test]
    fn test_future_creation_date_is_noop() {
        let now = midnight(2024, 3, 15);
        let created = midnight(2024, 4, 1);

        let update = advance_tags(&tags(&["draft"]), created, now);
        assert!(!update.changed);
        assert_eq!(update.tags, tags(&["draft"]));
    }

    #[test]
    fn test_empty_tag_set_gains_stage_tag() {
        let now = midnight(2024, 3, 15);
        let created = midnight(2024, 2, 1);

        let update = advance_tags(&[], created, now);
        assert!(update.changed);
        assert_eq!(update.tags, tags(&["final"]));
    }
}
