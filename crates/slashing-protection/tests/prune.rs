use serde_json::json;
use slashing_protection::{
    prune, prune_with, prune_with_stats, Interchange, KeyHistory, PruneOptions, SignedAttestation,
    SignedBlock,
};

fn make_record(histories: Vec<KeyHistory>) -> Interchange {
    let mut record: Interchange = serde_json::from_value(json!({
        "metadata": {
            "interchange_format_version": "5",
            "genesis_validators_root": "0x04700007fabc8282644aed6d1c7c9e21d38a03a0c4ba193f3afe428824b3a673"
        },
        "data": []
    }))
    .unwrap();
    record.data = histories;
    record
}

fn make_history(pubkey: &str, slots: &[&str], sources: &[&str]) -> KeyHistory {
    KeyHistory {
        pubkey: pubkey.to_string(),
        signed_blocks: slots
            .iter()
            .map(|slot| SignedBlock {
                slot: slot.to_string(),
                signing_root: Some(format!("0xb{}", slot)),
            })
            .collect(),
        signed_attestations: sources
            .iter()
            .map(|source| SignedAttestation {
                source_epoch: source.to_string(),
                target_epoch: format!("{}1", source),
                signing_root: Some(format!("0xa{}", source)),
            })
            .collect(),
    }
}

fn numbered(range: std::ops::RangeInclusive<u32>) -> Vec<String> {
    range.map(|i| i.to_string()).collect()
}

fn as_strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}

fn mixed_record() -> Interchange {
    let many = numbered(1..=25);
    let some = numbered(40..=52);
    make_record(vec![
        make_history("0xaa", &as_strs(&many), &["5", "6", "7"]),
        make_history("0xbb", &["3", "1", "2"], &as_strs(&some)),
        make_history("0xcc", &[], &[]),
    ])
}

#[test]
fn test_example_twelve_blocks_three_attestations() {
    let slots = numbered(1..=12);
    let record = make_record(vec![make_history("0xaa", &as_strs(&slots), &["5", "6", "7"])]);

    let pruned = prune(record);
    let history = &pruned.data[0];

    let kept: Vec<_> = history.signed_blocks.iter().map(|b| b.slot.as_str()).collect();
    assert_eq!(kept, vec!["11", "12", "2", "3", "4", "5", "6", "7", "8", "9"]);

    let sources: Vec<_> = history
        .signed_attestations
        .iter()
        .map(|a| a.source_epoch.as_str())
        .collect();
    assert_eq!(sources, vec!["5", "6", "7"]);
}

#[test]
fn test_idempotent() {
    let once = prune(mixed_record());
    let twice = prune(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn test_bounded() {
    let pruned = prune(mixed_record());
    for history in &pruned.data {
        assert!(history.signed_blocks.len() <= 10);
        assert!(history.signed_attestations.len() <= 10);
    }
}

#[test]
fn test_output_is_subset_of_input() {
    let record = mixed_record();
    let pruned = prune(record.clone());

    for (before, after) in record.data.iter().zip(&pruned.data) {
        for block in &after.signed_blocks {
            assert!(before.signed_blocks.contains(block));
        }
        for attestation in &after.signed_attestations {
            assert!(before.signed_attestations.contains(attestation));
        }
    }
}

#[test]
fn test_small_lists_pass_through() {
    let record = mixed_record();
    let pruned = prune(record.clone());

    assert_eq!(pruned.data[0].signed_attestations, record.data[0].signed_attestations);
    assert_eq!(pruned.data[1].signed_blocks, record.data[1].signed_blocks);
    assert!(pruned.data[2].signed_blocks.is_empty());
    assert!(pruned.data[2].signed_attestations.is_empty());
}

#[test]
fn test_top_ten_lexicographic_ascending() {
    let record = mixed_record();
    let pruned = prune(record.clone());

    let mut expected: Vec<_> = record.data[0]
        .signed_blocks
        .iter()
        .map(|b| b.slot.clone())
        .collect();
    expected.sort();
    let expected = expected.split_off(expected.len() - 10);

    let kept: Vec<_> = pruned.data[0]
        .signed_blocks
        .iter()
        .map(|b| b.slot.clone())
        .collect();
    assert_eq!(kept, expected);
    assert_eq!(kept.first().map(String::as_str), Some("23"));
    assert_eq!(kept.last().map(String::as_str), Some("9"));
}

#[test]
fn test_metadata_and_keys_unchanged() {
    let record = mixed_record();
    let pruned = prune(record.clone());

    assert_eq!(pruned.metadata, record.metadata);
    let keys_before: Vec<_> = record.data.iter().map(|h| &h.pubkey).collect();
    let keys_after: Vec<_> = pruned.data.iter().map(|h| &h.pubkey).collect();
    assert_eq!(keys_before, keys_after);
}

#[test]
fn test_empty_record() {
    let record = make_record(vec![]);
    let (pruned, stats) = prune_with_stats(record.clone(), &PruneOptions::default());
    assert_eq!(pruned, record);
    assert_eq!(stats.keys, 0);
    assert_eq!(stats.removed(), 0);
}

#[test]
fn test_custom_retain() {
    let pruned = prune_with(mixed_record(), &PruneOptions { retain: 2 });

    let kept: Vec<_> = pruned.data[1].signed_blocks.iter().map(|b| b.slot.as_str()).collect();
    assert_eq!(kept, vec!["2", "3"]);
    assert_eq!(pruned.data[0].signed_attestations.len(), 2);
}

#[test]
fn test_attestations_keep_top_ten_source_epochs() {
    let pruned = prune(mixed_record());

    let sources: Vec<_> = pruned.data[1]
        .signed_attestations
        .iter()
        .map(|a| a.source_epoch.as_str())
        .collect();
    assert_eq!(
        sources,
        vec!["43", "44", "45", "46", "47", "48", "49", "50", "51", "52"]
    );
}

#[test]
fn test_stats_counts() {
    let (_, stats) = prune_with_stats(mixed_record(), &PruneOptions::default());

    assert_eq!(stats.keys, 3);
    assert_eq!(stats.keys_trimmed, 2);
    assert_eq!(stats.blocks_before, 28);
    assert_eq!(stats.blocks_after, 13);
    assert_eq!(stats.attestations_before, 16);
    assert_eq!(stats.attestations_after, 13);
    assert_eq!(stats.removed(), 18);
}
