//! Tests for decoder module

use super::*;
use crate::error::Error;
use crate::models::{Comment, Post, Trophy, User};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

fn listing(children: Value) -> Value {
    json!({
        "kind": "Listing",
        "data": {
            "after": "t3_next",
            "before": null,
            "dist": 3,
            "children": children
        }
    })
}

fn body(value: &Value) -> Vec<u8> {
    serde_json::to_vec(value).unwrap()
}

// ============================================================================
// Kind Tests
// ============================================================================

#[test_case("t1", Kind::Comment)]
#[test_case("t2", Kind::Account)]
#[test_case("t3", Kind::Post)]
#[test_case("t4", Kind::Message)]
#[test_case("t5", Kind::Subreddit)]
#[test_case("t6", Kind::Award)]
#[test_case("more", Kind::More)]
#[test_case("Listing", Kind::Listing)]
#[test_case("TrophyList", Kind::TrophyList)]
fn test_kind_tags(tag: &str, kind: Kind) {
    assert_eq!(Kind::from_tag(tag), Some(kind));
    assert_eq!(kind.as_tag(), tag);
}

#[test]
fn test_kind_unknown_tag() {
    assert_eq!(Kind::from_tag("t9"), None);
    assert_eq!(Kind::from_tag("T3"), None);
    assert_eq!(Kind::from_tag(""), None);
}

#[test]
fn test_selection_includes() {
    assert!(Selection::Posts.includes(Kind::Post));
    assert!(!Selection::Posts.includes(Kind::Comment));
    assert!(Selection::Comments.includes(Kind::Comment));
    assert!(!Selection::Comments.includes(Kind::Post));
    assert!(Selection::Both.includes(Kind::Post));
    assert!(Selection::Both.includes(Kind::Comment));
    assert!(!Selection::Both.includes(Kind::Award));
    assert!(Selection::Any.includes(Kind::Award));
    assert!(!Selection::Any.includes(Kind::Account));
}

// ============================================================================
// Typed Record Tests
// ============================================================================

#[test]
fn test_decode_as_post() {
    let value = json!({"kind": "t3", "data": {"id": "p1", "title": "Hello", "score": 12}});

    let post = decode_as::<Post>(&value).into_record().unwrap();
    assert_eq!(post.id, "p1");
    assert_eq!(post.title, "Hello");
    assert_eq!(post.score, 12);
}

#[test]
fn test_decode_as_user() {
    let value = json!({"kind": "t2", "data": {"id": "abc", "name": "spez", "link_karma": 10}});

    let user = decode_as::<User>(&value).into_record().unwrap();
    assert_eq!(user.name, "spez");
    assert_eq!(user.post_karma, 10);
    assert_eq!(user.fullname(), "t2_abc");
}

#[test]
fn test_decode_as_kind_mismatch() {
    let value = json!({"kind": "t1", "data": {"id": "c1"}});

    let decoded = decode_as::<Post>(&value);
    assert_eq!(decoded, Decoded::KindMismatch { found: Kind::Comment });
}

#[test]
fn test_decode_as_unrecognized() {
    let value = json!({"kind": "t99", "data": {"id": "x"}});

    let decoded = decode_as::<Comment>(&value);
    assert_eq!(
        decoded,
        Decoded::Unrecognized {
            kind: "t99".to_string()
        }
    );
}

#[test]
fn test_decode_as_malformed_data() {
    // id is required
    let value = json!({"kind": "t3", "data": {"title": "no id"}});

    match decode_as::<Post>(&value) {
        Decoded::Malformed { kind, reason } => {
            assert_eq!(kind, Some(Kind::Post));
            assert!(reason.contains("id"));
        }
        other => panic!("expected malformed, got {other:?}"),
    }
}

#[test_case(json!([1, 2]) ; "not a mapping")]
#[test_case(json!({"data": {"id": "x"}}) ; "missing kind")]
#[test_case(json!({"kind": 3, "data": {"id": "x"}}) ; "kind not a string")]
#[test_case(json!({"kind": "t3"}) ; "missing data")]
fn test_decode_as_bad_envelope(value: Value) {
    let decoded = decode_as::<Post>(&value);
    assert!(matches!(decoded, Decoded::Malformed { kind: None, .. }));
}

#[test]
fn test_thing_decode_dispatch() {
    let post = Thing::decode(&json!({"kind": "t3", "data": {"id": "p"}}));
    let comment = Thing::decode(&json!({"kind": "t1", "data": {"id": "c"}}));
    let trophy = Thing::decode(&json!({"kind": "t6", "data": {"name": "Verified Email"}}));

    assert_eq!(post.into_record().unwrap().kind(), Kind::Post);
    assert_eq!(comment.into_record().unwrap().kind(), Kind::Comment);
    assert_eq!(
        trophy.into_record(),
        Some(Thing::Trophy(Trophy::named("Verified Email")))
    );
}

#[test]
fn test_thing_decode_known_kind_without_record() {
    let decoded = Thing::decode(&json!({"kind": "more", "data": {"count": 4}}));
    assert_eq!(decoded, Decoded::KindMismatch { found: Kind::More });
}

#[test]
fn test_thing_decode_selected_skips_data() {
    // The comment data is broken but comments were not asked for
    let value = json!({"kind": "t1", "data": "garbage"});

    let decoded = Thing::decode_selected(&value, Selection::Posts);
    assert_eq!(decoded, Decoded::KindMismatch { found: Kind::Comment });
}

#[test]
fn test_decoded_map() {
    let decoded: Decoded<i32> = Decoded::Record(2);
    assert_eq!(decoded.map(|n| n * 10), Decoded::Record(20));

    let skipped: Decoded<i32> = Decoded::KindMismatch { found: Kind::More };
    assert!(!skipped.clone().map(|n| n + 1).is_record());
    assert_eq!(skipped.into_record(), None);
}

// ============================================================================
// Listing Aggregator Tests
// ============================================================================

#[test]
fn test_listing_end_to_end() {
    let raw = br#"{"kind":"Listing","data":{"children":[{"kind":"t3","data":{"id":"p1"}},{"kind":"t1","data":{"id":"c1"}}]}}"#;

    let listing = decode_listing(raw).unwrap();
    assert_eq!(listing.posts.len(), 1);
    assert_eq!(listing.posts[0].id, "p1");
    assert_eq!(listing.comments.len(), 1);
    assert_eq!(listing.comments[0].id, "c1");
    assert_eq!(listing.after, None);
    assert_eq!(listing.before, None);
}

#[test]
fn test_listing_preserves_order_within_kind() {
    let value = listing(json!([
        {"kind": "t3", "data": {"id": "p1"}},
        {"kind": "t1", "data": {"id": "c1"}},
        {"kind": "t3", "data": {"id": "p2"}},
        {"kind": "t1", "data": {"id": "c2"}},
        {"kind": "t1", "data": {"id": "c3"}},
        {"kind": "t3", "data": {"id": "p3"}}
    ]));

    let listing = ListingDecoder::new(Selection::Both)
        .decode_value(&value)
        .unwrap();

    let post_ids: Vec<_> = listing.posts.iter().map(|p| p.id.as_str()).collect();
    let comment_ids: Vec<_> = listing.comments.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(post_ids, vec!["p1", "p2", "p3"]);
    assert_eq!(comment_ids, vec!["c1", "c2", "c3"]);
}

#[test]
fn test_listing_tolerates_bad_children() {
    let value = listing(json!([
        {"kind": "t3", "data": {"id": "good"}},
        {"kind": "t3", "data": {"title": "missing id"}},
        {"kind": "t42", "data": {"id": "future"}}
    ]));

    let listing = ListingDecoder::new(Selection::Posts)
        .decode_value(&value)
        .unwrap();

    assert_eq!(listing.posts.len(), 1);
    assert_eq!(listing.posts[0].id, "good");
    assert_eq!(
        listing.skipped,
        SkipCounts {
            unrecognized: 1,
            unselected: 0,
            malformed: 1,
        }
    );
}

#[test]
fn test_listing_keeps_children_with_null_fields() {
    let value = listing(json!([
        {"kind": "t3", "data": {"id": "p1", "title": null, "score": null, "over_18": null}},
        {"kind": "t1", "data": {"id": "c1", "body": null, "link_id": null, "is_submitter": null}}
    ]));

    let listing = decode_listing(&body(&value)).unwrap();

    assert_eq!(listing.posts.len(), 1);
    assert_eq!(listing.posts[0].title, "");
    assert_eq!(listing.posts[0].score, 0);
    assert_eq!(listing.comments.len(), 1);
    assert_eq!(listing.comments[0].body, "");
    assert_eq!(listing.skipped, SkipCounts::default());
}

#[test]
fn test_listing_counts_every_child() {
    let value = listing(json!([
        {"kind": "t3", "data": {"id": "p1"}},
        {"kind": "t1", "data": {"id": "c1"}},
        {"kind": "more", "data": {"count": 12}},
        {"kind": "t7", "data": {}},
        "not even an object",
        {"kind": "t1", "data": {"id": 5}},
        {"kind": "t6", "data": {"name": "Trophy"}}
    ]));

    let listing = ListingDecoder::new(Selection::Both)
        .decode_value(&value)
        .unwrap();

    assert_eq!(listing.children_seen(), 7);
    assert_eq!(listing.posts.len(), 1);
    assert_eq!(listing.comments.len(), 1);
    assert_eq!(listing.skipped.unselected, 2);
    assert_eq!(listing.skipped.unrecognized, 1);
    assert_eq!(listing.skipped.malformed, 2);
}

#[test]
fn test_listing_empty_children() {
    let value = listing(json!([]));

    let listing = ListingDecoder::new(Selection::Both)
        .decode_value(&value)
        .unwrap();

    assert!(listing.posts.is_empty());
    assert!(listing.comments.is_empty());
    assert_eq!(listing.children_seen(), 0);
}

#[test]
fn test_listing_single_kind_gives_empty_other() {
    let value = listing(json!([{"kind": "t1", "data": {"id": "c1"}}]));

    let (posts, comments) = ListingDecoder::new(Selection::Both)
        .decode_value(&value)
        .unwrap()
        .split();

    assert!(posts.is_empty());
    assert_eq!(comments.len(), 1);
}

#[test]
fn test_listing_selection_posts_only() {
    let value = listing(json!([
        {"kind": "t3", "data": {"id": "p1"}},
        {"kind": "t1", "data": {"id": "c1"}}
    ]));

    let listing = ListingDecoder::new(Selection::Posts)
        .decode_value(&value)
        .unwrap();

    assert_eq!(listing.posts.len(), 1);
    assert!(listing.comments.is_empty());
    assert_eq!(listing.skipped.unselected, 1);
}

#[test]
fn test_listing_selection_comments_only() {
    let value = listing(json!([
        {"kind": "t3", "data": {"id": "p1"}},
        {"kind": "t1", "data": {"id": "c1"}}
    ]));

    let comments = ListingDecoder::new(Selection::Comments)
        .decode_value(&value)
        .unwrap()
        .into_comments();

    assert_eq!(comments.len(), 1);
    assert_eq!(comments.after, Some("t3_next".to_string()));
}

#[test]
fn test_listing_cursors() {
    let value = json!({
        "kind": "Listing",
        "data": {"after": "t3_b", "before": "", "children": []}
    });

    let posts = ListingDecoder::default()
        .decode_value(&value)
        .unwrap()
        .into_posts();

    assert_eq!(posts.after, Some("t3_b".to_string()));
    // empty cursor means no page
    assert_eq!(posts.before, None);
}

#[test]
fn test_listing_idempotent() {
    let raw = body(&listing(json!([
        {"kind": "t3", "data": {"id": "p1", "created_utc": 1_600_000_000.0}},
        {"kind": "t1", "data": {"id": "c1", "edited": false}},
        {"kind": "t5", "data": {}}
    ])));

    let first = decode_listing(&raw).unwrap();
    let second = decode_listing(&raw).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_listing_reject_policy() {
    let value = listing(json!([
        {"kind": "t3", "data": {"id": "p1"}},
        {"kind": "t3", "data": {"id": ["wrong"]}}
    ]));

    let err = ListingDecoder::new(Selection::Posts)
        .with_policy(FaultPolicy::Reject)
        .decode_value(&value)
        .unwrap_err();

    match err {
        Error::MalformedElement { index, kind, .. } => {
            assert_eq!(index, 1);
            assert_eq!(kind, "t3");
        }
        other => panic!("expected malformed element error, got {other:?}"),
    }
}

#[test]
fn test_listing_reject_policy_still_skips_unknown_kinds() {
    let value = listing(json!([
        {"kind": "t3", "data": {"id": "p1"}},
        {"kind": "t11", "data": {"id": "whatever"}}
    ]));

    let listing = ListingDecoder::new(Selection::Posts)
        .with_policy(FaultPolicy::Reject)
        .decode_value(&value)
        .unwrap();

    assert_eq!(listing.posts.len(), 1);
    assert_eq!(listing.skipped.unrecognized, 1);
}

#[test]
fn test_listing_decoder_defaults() {
    let decoder = ListingDecoder::default();
    assert_eq!(decoder.selection(), Selection::Both);
    assert_eq!(decoder.policy(), FaultPolicy::Skip);
}

#[test_case(json!([]), "listing is not a mapping" ; "top level array")]
#[test_case(json!({"kind": "Listing"}), "missing field `data`" ; "missing data")]
#[test_case(json!({"kind": "Listing", "data": []}), "unexpected type for field `data`" ; "data not a mapping")]
#[test_case(json!({"kind": "Listing", "data": {}}), "missing field `children`" ; "missing children")]
#[test_case(json!({"kind": "Listing", "data": {"children": {}}}), "unexpected type for field `children`" ; "children not an array")]
fn test_listing_structural_errors(value: Value, message: &str) {
    let err = ListingDecoder::default().decode_value(&value).unwrap_err();
    assert!(err.is_structural());
    assert_eq!(err.to_string(), message);
}

#[test]
fn test_listing_invalid_json() {
    let err = decode_listing(b"{not json").unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

// ============================================================================
// Nested Unwrapper Tests
// ============================================================================

#[test]
fn test_unwrap_nested_skips_bad_elements() {
    let payload = json!({"trophies": [{"bad": 1}, {"data": {"name": "X"}}]});

    let trophies: Vec<Trophy> = unwrap_nested(&payload, "trophies").unwrap();
    assert_eq!(trophies, vec![Trophy::named("X")]);
}

#[test]
fn test_unwrap_nested_empty() {
    let payload = json!({"trophies": []});

    let trophies: Vec<Trophy> = unwrap_nested(&payload, "trophies").unwrap();
    assert!(trophies.is_empty());
}

#[test]
fn test_unwrap_nested_missing_field() {
    let payload = json!({"not_trophies": []});

    let err = unwrap_nested::<Trophy>(&payload, "trophies").unwrap_err();
    assert!(matches!(err, Error::MissingField { ref field } if field == "trophies"));
}

#[test]
fn test_unwrap_nested_wrong_type() {
    let payload = json!({"trophies": "not-an-array"});

    let err = unwrap_nested::<Trophy>(&payload, "trophies").unwrap_err();
    assert!(matches!(err, Error::UnexpectedType { ref field } if field == "trophies"));
}

#[test]
fn test_unwrap_nested_not_a_mapping() {
    let err = unwrap_nested::<Trophy>(&json!([1, 2, 3]), "trophies").unwrap_err();
    assert!(matches!(err, Error::NotAMapping { .. }));
}

#[test]
fn test_unwrap_nested_preserves_order() {
    let payload = json!({"trophies": [
        {"kind": "t6", "data": {"name": "A"}},
        7,
        {"kind": "t6", "data": {"name": "B"}},
        {"kind": "t6", "data": {"description": "no name"}},
        {"kind": "t6", "data": {"name": "C"}}
    ]});

    let trophies: Vec<Trophy> = unwrap_nested(&payload, "trophies").unwrap();
    let names: Vec<_> = trophies.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn test_decode_element_faults() {
    assert_eq!(
        decode_element::<Trophy>(&json!("nope")).unwrap_err(),
        ElementFault::NotAMapping
    );
    assert_eq!(
        decode_element::<Trophy>(&json!({"kind": "t6"})).unwrap_err(),
        ElementFault::MissingData
    );
    assert!(matches!(
        decode_element::<Trophy>(&json!({"data": {"name": 3}})).unwrap_err(),
        ElementFault::Shape(_)
    ));
}

#[test]
fn test_decode_trophy_list() {
    let raw = body(&json!({
        "kind": "TrophyList",
        "data": {
            "trophies": [
                {"kind": "t6", "data": {
                    "name": "Verified Email",
                    "icon_70": "https://example.com/icon.png",
                    "granted_at": 1_500_000_000,
                    "award_id": null
                }},
                {"kind": "t6", "data": {"name": "Five-Year Club", "id": "1q2w3e"}}
            ]
        }
    }));

    let trophies = decode_trophy_list(&raw).unwrap();
    assert_eq!(trophies.len(), 2);
    assert_eq!(trophies[0].name, "Verified Email");
    assert_eq!(trophies[0].granted_at.unwrap().timestamp(), 1_500_000_000);
    assert_eq!(trophies[1].id.as_deref(), Some("1q2w3e"));
}

#[test]
fn test_decode_trophy_list_structural_errors() {
    let err = decode_trophy_list(b"[]").unwrap_err();
    assert!(matches!(err, Error::NotAMapping { .. }));

    let err = decode_trophy_list(br#"{"kind": "TrophyList"}"#).unwrap_err();
    assert!(matches!(err, Error::MissingField { ref field } if field == "data"));

    let err = decode_trophy_list(br#"{"kind": "TrophyList", "data": 4}"#).unwrap_err();
    assert!(matches!(err, Error::UnexpectedType { ref field } if field == "data"));

    let err = decode_trophy_list(br#"{"kind": "TrophyList", "data": {}}"#).unwrap_err();
    assert!(matches!(err, Error::MissingField { ref field } if field == "trophies"));
}

#[test]
fn test_parse_body_error() {
    let err = parse_body(b"").unwrap_err();
    assert!(err.to_string().starts_with("Failed to decode response"));
}
