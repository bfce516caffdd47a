//! Property-based tests for the codec and the reconciler.
//!
//! These tests use proptest to generate registries and discovery batches and
//! verify that the round-trip, idempotence, and ordering laws hold.

#[cfg(test)]
mod proptest_tests {
    use std::collections::BTreeSet;

    use crate::codec::{decode, encode};
    use crate::discovery::DiscoveryRecord;
    use crate::reconcile::{reconcile, MergeOptions};
    use crate::registry::{Registry, RepoEntry};
    use proptest::prelude::*;

    fn entry_strategy() -> impl Strategy<Value = RepoEntry> {
        (
            prop::collection::btree_map("[ -~]{1,10}", "[ -~]{0,20}", 0..4),
            prop::collection::vec("[ -~]{0,8}", 0..5),
        )
            .prop_map(|(remotes, tags)| {
                let mut entry = RepoEntry::default().with_tags(tags);
                entry.remotes = remotes;
                entry
            })
    }

    fn registry_strategy() -> impl Strategy<Value = Registry> {
        prop::collection::btree_map("[ -~]{1,12}", entry_strategy(), 0..6).prop_map(|repos| {
            let mut registry = Registry::new();
            for (name, entry) in repos {
                registry.insert(name, entry);
            }
            registry
        })
    }

    /// Small alphabets so that names, URLs, and tags collide often.
    fn record_strategy() -> impl Strategy<Value = DiscoveryRecord> {
        (
            "[a-d]",
            "git@host:[u-w]\\.git",
            prop::collection::vec("[x-z]", 0..3),
        )
            .prop_map(|(name, url, tags)| DiscoveryRecord::new(name, url, tags))
    }

    fn options_strategy() -> impl Strategy<Value = MergeOptions> {
        ("origin|devops", any::<bool>())
            .prop_map(|(name, add)| MergeOptions::new(name).add_missing_remote(add))
    }

    // ============================================================================
    // codec properties
    // ============================================================================

    proptest! {
        /// Property: decoding an encoded registry gives the same registry back
        #[test]
        fn decode_encode_round_trip(registry in registry_strategy()) {
            let encoded = encode(&registry).unwrap();
            prop_assert_eq!(decode(&encoded).unwrap(), registry);
        }

        /// Property: re-encoding a decoded registry is byte-identical
        #[test]
        fn encode_is_stable(registry in registry_strategy()) {
            let encoded = encode(&registry).unwrap();
            let again = encode(&decode(&encoded).unwrap()).unwrap();
            prop_assert_eq!(again, encoded);
        }
    }

    // ============================================================================
    // reconcile properties
    // ============================================================================

    proptest! {
        /// Property: a second run with the same batch changes nothing
        #[test]
        fn reconcile_is_idempotent(
            start in registry_strategy(),
            records in prop::collection::vec(record_strategy(), 0..8),
            options in options_strategy(),
        ) {
            let (once, _) = reconcile(start, &records, &options).unwrap();
            let (twice, summary) = reconcile(once.clone(), &records, &options).unwrap();
            prop_assert!(!summary.has_changes(), "second run changed: {}", summary);
            prop_assert_eq!(twice, once);
        }

        /// Property: order does not matter for records with distinct names
        #[test]
        fn reconcile_is_order_independent_for_distinct_names(
            start in registry_strategy(),
            records in prop::collection::vec(record_strategy(), 0..8),
            options in options_strategy(),
        ) {
            let mut seen = BTreeSet::new();
            let distinct: Vec<DiscoveryRecord> = records
                .into_iter()
                .filter(|record| seen.insert(record.name.clone()))
                .collect();
            let mut reversed = distinct.clone();
            reversed.reverse();

            let (forward, _) = reconcile(start.clone(), &distinct, &options).unwrap();
            let (backward, _) = reconcile(start, &reversed, &options).unwrap();
            prop_assert_eq!(forward, backward);
        }

        /// Property: reconciling never adds a second remote for a known URL,
        /// and every entry touched by the batch ends up with at least one remote
        #[test]
        fn reconcile_never_duplicates_urls(
            start in registry_strategy(),
            records in prop::collection::vec(record_strategy(), 0..12),
            options in options_strategy(),
        ) {
            let (registry, _) = reconcile(start.clone(), &records, &options).unwrap();
            for record in &records {
                let entry = registry.get(&record.name).unwrap();
                prop_assert!(!entry.remotes.is_empty(), "{} has no remotes", record.name);

                let count = |entry: &RepoEntry| {
                    entry.remotes.values().filter(|url| **url == record.url).count()
                };
                let before = start.get(&record.name).map_or(0, count);
                prop_assert!(count(entry) <= before.max(1), "{} repeats {}", record.name, record.url);
            }
        }

        /// Property: tags only accumulate and never repeat
        #[test]
        fn reconcile_tags_are_a_union(
            start in registry_strategy(),
            records in prop::collection::vec(record_strategy(), 0..8),
            options in options_strategy(),
        ) {
            let (after, _) = reconcile(start.clone(), &records, &options).unwrap();
            for (name, entry) in after.iter() {
                let unique: BTreeSet<&String> = entry.tags().iter().collect();
                prop_assert_eq!(unique.len(), entry.tags().len());
                if let Some(before) = start.get(name) {
                    for tag in before.tags() {
                        prop_assert!(entry.has_tag(tag));
                    }
                }
            }
            for record in &records {
                let entry = after.get(&record.name).unwrap();
                for tag in &record.tags {
                    prop_assert!(entry.has_tag(tag));
                }
            }
        }
    }
}
