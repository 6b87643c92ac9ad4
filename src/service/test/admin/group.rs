use super::*;

/// Tests that names normalizing to the same key land in one bucket.
///
/// "Foo" and "foo!" both normalize to "foo"; "Bar" stays alone. Bucket
/// members must keep input order so the keeper is deterministic.
///
/// Expected: two buckets, with "foo" holding both variants in input order
#[test]
fn groups_case_and_punctuation_variants_together() {
    let games = vec![
        game_param(1, "Foo"),
        game_param(2, "foo!"),
        game_param(3, "Bar"),
    ];

    let groups = group_by_normalized_name(games);

    assert_eq!(groups.len(), 2);

    let foo = &groups["foo"];
    assert_eq!(foo.len(), 2);
    assert_eq!(foo[0].id, 1);
    assert_eq!(foo[1].id, 2);

    assert_eq!(groups["bar"].len(), 1);
}

/// Tests that buckets appear in first-seen order.
///
/// Expected: keys iterate in the order their first member appeared
#[test]
fn buckets_keep_first_seen_order() {
    let games = vec![
        game_param(1, "zelda"),
        game_param(2, "mario"),
        game_param(3, "Zelda!"),
    ];

    let groups = group_by_normalized_name(games);

    let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zelda", "mario"]);
}

/// Tests grouping an empty catalog.
///
/// Expected: no buckets
#[test]
fn empty_input_yields_no_buckets() {
    let groups = group_by_normalized_name(vec![]);

    assert!(groups.is_empty());
}

/// Tests that all-unique names each get their own bucket.
///
/// Expected: one singleton bucket per game
#[test]
fn unique_names_stay_separate() {
    let games = vec![
        game_param(1, "doom"),
        game_param(2, "quake"),
        game_param(3, "hexen"),
    ];

    let groups = group_by_normalized_name(games);

    assert_eq!(groups.len(), 3);
    assert!(groups.values().all(|members| members.len() == 1));
}
