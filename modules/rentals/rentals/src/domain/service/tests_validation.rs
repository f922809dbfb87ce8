#![allow(clippy::unwrap_used, clippy::expect_used)]

use rentals_sdk::ReviewDraft;

use super::properties::validate_image_url;
use super::reviews::validate_draft;
use super::{normalize, require_text};
use crate::domain::error::DomainError;

fn field_of(err: DomainError) -> String {
    match err {
        DomainError::Validation { field, .. } => field,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn blank_optional_text_becomes_absent() {
    assert_eq!(normalize(None), None);
    assert_eq!(normalize(Some("   ".to_owned())), None);
    assert_eq!(normalize(Some("  +1 555 0100 ".to_owned())), Some("+1 555 0100".to_owned()));
}

#[test]
fn required_text_is_trimmed() {
    assert_eq!(require_text("title", "  Sunset Apt ").unwrap(), "Sunset Apt");
    assert_eq!(field_of(require_text("title", " \t").unwrap_err()), "title");
}

#[test]
fn rating_must_be_one_to_five() {
    for rating in [1, 3, 5] {
        let draft = ReviewDraft {
            rating,
            text: "ok".to_owned(),
        };
        assert_eq!(validate_draft(&draft).unwrap().0, rating);
    }
    for rating in [0, 6, -1] {
        let draft = ReviewDraft {
            rating,
            text: "ok".to_owned(),
        };
        assert_eq!(field_of(validate_draft(&draft).unwrap_err()), "rating");
    }
}

#[test]
fn review_text_is_required() {
    let draft = ReviewDraft {
        rating: 4,
        text: "  ".to_owned(),
    };
    assert_eq!(field_of(validate_draft(&draft).unwrap_err()), "text");
}

#[test]
fn image_url_must_parse_when_present() {
    assert_eq!(validate_image_url(None).unwrap(), None);
    assert_eq!(validate_image_url(Some(String::new())).unwrap(), None);
    assert_eq!(
        validate_image_url(Some("https://img.example.com/a.jpg".to_owned())).unwrap(),
        Some("https://img.example.com/a.jpg".to_owned())
    );
    assert_eq!(
        field_of(validate_image_url(Some("not a url".to_owned())).unwrap_err()),
        "image_url"
    );
}
