use super::BadgeCatalog;

/// Badge ids unlocked by `current_streak` that are not yet in
/// `already_earned`, in catalog order.
pub fn evaluate_new_badges<S: AsRef<str>>(
    current_streak: u32,
    already_earned: &[S],
    catalog: &BadgeCatalog,
) -> Vec<String> {
    catalog
        .iter()
        .filter(|badge| badge.is_unlocked_by(current_streak))
        .filter(|badge| !already_earned.iter().any(|id| id.as_ref() == badge.id))
        .map(|badge| badge.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badges::Badge;
    use proptest::prelude::*;

    #[test]
    fn already_earned_and_insufficient_streak_yields_nothing() {
        let catalog = BadgeCatalog::new(vec![
            Badge::new("getting-started", "Getting Started", 3),
            Badge::new("weekly-warrior", "Weekly Warrior", 7),
        ])
        .unwrap();
        assert!(evaluate_new_badges(5, &["getting-started"], &catalog).is_empty());
    }

    #[test]
    fn jump_unlocks_several_in_catalog_order() {
        let catalog = BadgeCatalog::default();
        let none: [&str; 0] = [];
        assert_eq!(
            evaluate_new_badges(7, &none, &catalog),
            vec!["getting-started", "weekly-warrior"]
        );
    }

    #[test]
    fn zero_streak_unlocks_nothing() {
        let none: [&str; 0] = [];
        assert!(evaluate_new_badges(0, &none, &BadgeCatalog::default()).is_empty());
    }

    proptest! {
        #[test]
        fn evaluation_is_idempotent(streak in 0u32..60, earned in proptest::sample::subsequence(
            vec!["getting-started", "weekly-warrior", "fortnight-focus", "monthly-master"], 0..=4)) {
            let catalog = BadgeCatalog::default();
            let first = evaluate_new_badges(streak, &earned, &catalog);
            let mut all: Vec<String> = earned.iter().map(|s| s.to_string()).collect();
            all.extend(first.iter().cloned());
            prop_assert!(evaluate_new_badges(streak, &all, &catalog).is_empty());
            for id in &first {
                prop_assert!(!earned.contains(&id.as_str()));
            }
        }
    }
}
