//! End-to-end streak and badge scenarios through the public API.

use habitforge_core::{
    compute_streaks, compute_streaks_raw, evaluate_new_badges, Badge, BadgeCatalog, CalendarDay,
    History, StreakSummary, TargetDays, ValidationError,
};

#[test]
fn three_day_run_from_raw_history() {
    let summary = compute_streaks_raw(
        [
            ("2025-04-27", Some("completed")),
            ("2025-04-28", Some("completed")),
            ("2025-04-29", Some("completed")),
        ],
        &["daily"],
        "2025-04-29",
        0,
    )
    .unwrap();
    assert_eq!(
        summary,
        StreakSummary {
            current_streak: 3,
            longest_streak: 3
        }
    );
}

#[test]
fn gap_on_the_26th_breaks_the_run() {
    let summary = compute_streaks_raw(
        [
            ("2025-04-25", Some("completed")),
            ("2025-04-27", Some("completed")),
        ],
        &["daily"],
        "2025-04-27",
        0,
    )
    .unwrap();
    assert_eq!(summary.current_streak, 1);
    assert_eq!(summary.longest_streak, 1);
}

#[test]
fn unknown_status_value_is_rejected() {
    let err = compute_streaks_raw([("2025-04-27", Some("done"))], &["daily"], "2025-04-27", 0)
        .unwrap_err();
    assert_eq!(err, ValidationError::InvalidStatus("done".into()));
}

#[test]
fn persisted_document_feeds_the_engine() {
    let history: History = serde_json::from_str(
        r#"{"2025-04-27":"completed","2025-04-28":"completed","2025-04-29":"completed","2025-04-30":null}"#,
    )
    .unwrap();
    let today = CalendarDay::parse("2025-04-29").unwrap();
    let summary = compute_streaks(&history, &TargetDays::daily(), today, 1);
    assert_eq!(summary.current_streak, 3);
}

#[test]
fn badge_evaluation_examples() {
    let small = BadgeCatalog::new(vec![
        Badge::new("getting-started", "Getting Started", 3),
        Badge::new("weekly-warrior", "Weekly Warrior", 7),
    ])
    .unwrap();
    assert!(evaluate_new_badges(5, &["getting-started"], &small).is_empty());

    let none: [&str; 0] = [];
    assert_eq!(
        evaluate_new_badges(7, &none, &BadgeCatalog::default()),
        vec!["getting-started", "weekly-warrior"]
    );
}
