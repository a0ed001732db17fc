use crate::{Comment, CommentLimits, Envelope, Rejection};

use proptest::prelude::*;

#[test]
fn test_comment_new_trims_fields() {
    let comment = Comment::new("  hello  ", "  alice ", &CommentLimits::default()).unwrap();

    assert_eq!(comment.text(), "hello");
    assert_eq!(comment.handle(), "alice");
}

#[test]
fn test_comment_new_allows_empty_handle() {
    let comment = Comment::new("hi", "   ", &CommentLimits::default()).unwrap();

    assert_eq!(comment.handle(), "");
}

#[test]
fn test_comment_whitespace_text_is_empty() {
    let result = Comment::new(" \t\n ", "alice", &CommentLimits::default());

    assert!(matches!(result, Err(Rejection::EmptyText { .. })));
}

#[test]
fn test_comment_length_counts_code_points_not_bytes() {
    // 200 three-byte characters is 600 bytes but still within the limit
    let text = "あ".repeat(200);
    let result = Comment::new(&text, "", &CommentLimits::default());

    assert!(result.is_ok());
}

#[test]
fn test_comment_text_over_limit_is_rejected() {
    let text = "a".repeat(201);
    let result = Comment::new(&text, "", &CommentLimits::default());

    assert!(matches!(
        result,
        Err(Rejection::TextTooLong {
            length: 201,
            max: 200,
            ..
        })
    ));
}

#[test]
fn test_comment_handle_over_limit_is_rejected() {
    let handle = "h".repeat(33);
    let result = Comment::new("ok", &handle, &CommentLimits::default());

    assert!(matches!(
        result,
        Err(Rejection::HandleTooLong {
            length: 33,
            max: 32,
            ..
        })
    ));
}

#[test]
fn test_comment_empty_text_wins_over_long_handle() {
    let handle = "h".repeat(100);
    let result = Comment::new("", &handle, &CommentLimits::default());

    assert!(matches!(result, Err(Rejection::EmptyText { .. })));
}

#[test]
fn test_comment_into_envelope() {
    let comment = Comment::new("hello", "alice", &CommentLimits::default()).unwrap();

    assert_eq!(Envelope::from(comment), Envelope::chat("hello", "alice"));
}

proptest! {
    #[test]
    fn given_text_within_bounds_when_validated_then_accepted_unchanged(text in "[a-zA-Z0-9あ-ん]{1,200}") {
        let comment = Comment::new(&text, "", &CommentLimits::default()).unwrap();
        prop_assert_eq!(comment.text(), text.as_str());
    }

    #[test]
    fn given_text_over_bounds_when_validated_then_rejected(text in "[a-zA-Z0-9あ-ん]{201,260}") {
        let result = Comment::new(&text, "", &CommentLimits::default());
        prop_assert!(matches!(result, Err(Rejection::TextTooLong { .. })), "over-long text must be rejected");
    }

    #[test]
    fn given_any_accepted_comment_then_lengths_are_bounded(text in "\\PC{0,240}", handle in "\\PC{0,40}") {
        if let Ok(comment) = Comment::new(&text, &handle, &CommentLimits::default()) {
            let text_len = comment.text().chars().count();
            prop_assert!((1..=200).contains(&text_len));
            prop_assert!(comment.handle().chars().count() <= 32);
        }
    }
}
