#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Joined review views: ordering, decoration, exclusions and cascade-hide.

mod support;

use rentals::domain::error::DomainError;
use rentals::domain::service::ServiceConfig;
use rentals_sdk::{NewProperty, ReviewDraft, Role};
use time::Duration;
use uuid::Uuid;

use support::{
    anonymous, ctx, inmem_db, seed_profile, seed_property, seed_review, seed_review_with_id,
    services, services_with, ts,
};

#[tokio::test]
async fn sunset_apt_review_shows_up_in_both_views_until_property_is_deleted() {
    let db = inmem_db().await;
    let (svc, _) = services(&db);
    let landlord = Uuid::new_v4();
    let renter = Uuid::new_v4();
    seed_profile(&db, landlord, Some("Lena"), Some(Role::Landlord)).await;
    seed_profile(&db, renter, Some("Rita"), Some(Role::Renter)).await;

    let property = svc
        .properties
        .create_property(
            &ctx(landlord),
            NewProperty {
                title: "Sunset Apt".to_owned(),
                address: "1 Main St".to_owned(),
                ..NewProperty::default()
            },
        )
        .await
        .unwrap();
    let review = svc
        .reviews
        .create_review(
            &ctx(renter),
            property.id,
            ReviewDraft {
                rating: 4,
                text: "Great place".to_owned(),
            },
        )
        .await
        .unwrap();

    let received = svc
        .views
        .reviews_received_by(&ctx(landlord), landlord)
        .await
        .unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].id, review.id);
    assert_eq!(received[0].rating, 4);
    assert_eq!(received[0].text, "Great place");
    assert_eq!(received[0].property_title, "Sunset Apt");
    assert_eq!(received[0].reviewer_name, "Rita");

    let written = svc.views.reviews_written_by(&ctx(renter)).await.unwrap();
    assert_eq!(written, received);

    svc.properties
        .delete_property(&ctx(landlord), property.id)
        .await
        .unwrap();

    assert!(svc
        .views
        .reviews_received_by(&ctx(landlord), landlord)
        .await
        .unwrap()
        .is_empty());
    assert!(svc
        .views
        .reviews_written_by(&ctx(renter))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn views_are_newest_first_with_id_tie_break() {
    let db = inmem_db().await;
    let (svc, _) = services(&db);
    let landlord = Uuid::new_v4();
    let renter = Uuid::new_v4();
    seed_profile(&db, landlord, Some("Lena"), Some(Role::Landlord)).await;
    seed_profile(&db, renter, Some("Rita"), Some(Role::Renter)).await;
    let a = seed_property(&db, landlord, "A").await;
    let b = seed_property(&db, landlord, "B").await;

    let oldest = seed_review(&db, a, renter, 3, ts(0)).await;
    let newest = seed_review(&db, b, renter, 5, ts(100)).await;
    let low = Uuid::from_u128(1);
    let high = Uuid::from_u128(2);
    seed_review_with_id(&db, low, a, renter, 4, ts(50)).await;
    seed_review_with_id(&db, high, b, renter, 4, ts(50)).await;

    let expected = vec![newest, high, low, oldest];

    let written: Vec<Uuid> = svc
        .views
        .reviews_written_by(&ctx(renter))
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(written, expected);

    let received: Vec<Uuid> = svc
        .views
        .reviews_received_by(&ctx(renter), landlord)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(received, expected);
}

#[tokio::test]
async fn views_order_reviews_within_the_same_second() {
    let db = inmem_db().await;
    let (svc, _) = services(&db);
    let landlord = Uuid::new_v4();
    let renter = Uuid::new_v4();
    seed_profile(&db, landlord, Some("Lena"), Some(Role::Landlord)).await;
    seed_profile(&db, renter, Some("Rita"), Some(Role::Renter)).await;
    let property = seed_property(&db, landlord, "Sunset Apt").await;

    let whole = Uuid::from_u128(9);
    let half = Uuid::from_u128(1);
    let later_half = Uuid::from_u128(5);
    let later_half_plus = Uuid::from_u128(4);
    seed_review_with_id(&db, whole, property, renter, 3, ts(0)).await;
    seed_review_with_id(&db, half, property, renter, 3, ts(0) + Duration::milliseconds(500)).await;
    seed_review_with_id(&db, later_half, property, renter, 4, ts(10) + Duration::milliseconds(500))
        .await;
    seed_review_with_id(
        &db,
        later_half_plus,
        property,
        renter,
        5,
        ts(10) + Duration::microseconds(500_010),
    )
    .await;

    let expected = vec![later_half_plus, later_half, half, whole];

    let written = svc.views.reviews_written_by(&ctx(renter)).await.unwrap();
    assert_eq!(written.iter().map(|r| r.id).collect::<Vec<_>>(), expected);
    assert_eq!(written[2].created_at, ts(0) + Duration::milliseconds(500));

    let received: Vec<Uuid> = svc
        .views
        .reviews_received_by(&ctx(landlord), landlord)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(received, expected);
}

#[tokio::test]
async fn views_exclude_other_reviewers_and_other_landlords() {
    let db = inmem_db().await;
    let (svc, _) = services(&db);
    let lena = Uuid::new_v4();
    let leo = Uuid::new_v4();
    let rita = Uuid::new_v4();
    let rob = Uuid::new_v4();
    for (id, name, role) in [
        (lena, "Lena", Role::Landlord),
        (leo, "Leo", Role::Landlord),
        (rita, "Rita", Role::Renter),
        (rob, "Rob", Role::Renter),
    ] {
        seed_profile(&db, id, Some(name), Some(role)).await;
    }
    let lenas = seed_property(&db, lena, "Lena's").await;
    let leos = seed_property(&db, leo, "Leo's").await;

    let rita_on_lena = seed_review(&db, lenas, rita, 4, ts(1)).await;
    let rob_on_lena = seed_review(&db, lenas, rob, 2, ts(2)).await;
    let rita_on_leo = seed_review(&db, leos, rita, 5, ts(3)).await;

    let written: Vec<Uuid> = svc
        .views
        .reviews_written_by(&ctx(rita))
        .await
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(written, vec![rita_on_leo, rita_on_lena]);

    let received = svc.views.reviews_received_by(&ctx(rita), lena).await.unwrap();
    let ids: Vec<Uuid> = received.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![rob_on_lena, rita_on_lena]);
    assert!(received.iter().all(|r| r.property_title == "Lena's"));
    assert_eq!(received[0].reviewer_name, "Rob");

    let for_leos = svc.views.reviews_for_property(&ctx(rob), leos).await.unwrap();
    assert_eq!(for_leos.len(), 1);
    assert_eq!(for_leos[0].id, rita_on_leo);
}

#[tokio::test]
async fn reviewer_without_name_is_shown_as_anonymous() {
    let db = inmem_db().await;
    let (svc, _) = services(&db);
    let landlord = Uuid::new_v4();
    let nameless = Uuid::new_v4();
    let no_profile = Uuid::new_v4();
    seed_profile(&db, landlord, Some("Lena"), Some(Role::Landlord)).await;
    seed_profile(&db, nameless, None, Some(Role::Renter)).await;
    let property = seed_property(&db, landlord, "Sunset Apt").await;
    seed_review(&db, property, nameless, 3, ts(1)).await;
    seed_review(&db, property, no_profile, 5, ts(2)).await;

    let received = svc
        .views
        .reviews_received_by(&ctx(landlord), landlord)
        .await
        .unwrap();
    assert_eq!(received.len(), 2);
    assert!(received.iter().all(|r| r.reviewer_name == "Anonymous"));

    let written = svc.views.reviews_written_by(&ctx(no_profile)).await.unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].reviewer_name, "Anonymous");
}

#[tokio::test]
async fn anonymous_label_is_configurable() {
    let db = inmem_db().await;
    let (svc, _) = services_with(
        &db,
        ServiceConfig {
            anonymous_reviewer_name: "Guest".to_owned(),
            ..ServiceConfig::default()
        },
    );
    let landlord = Uuid::new_v4();
    seed_profile(&db, landlord, None, Some(Role::Landlord)).await;
    let property = seed_property(&db, landlord, "Sunset Apt").await;
    seed_review(&db, property, Uuid::new_v4(), 4, ts(0)).await;

    let views = svc
        .views
        .reviews_for_property(&ctx(landlord), property)
        .await
        .unwrap();
    assert_eq!(views[0].reviewer_name, "Guest");
}

#[tokio::test]
async fn orphaned_reviews_stay_stored_but_hidden() {
    let db = inmem_db().await;
    let (svc, _) = services(&db);
    let landlord = Uuid::new_v4();
    let renter = Uuid::new_v4();
    seed_profile(&db, landlord, None, Some(Role::Landlord)).await;
    let gone = seed_property(&db, landlord, "Gone").await;
    let kept = seed_property(&db, landlord, "Kept").await;
    let orphan = seed_review(&db, gone, renter, 1, ts(5)).await;
    let visible = seed_review(&db, kept, renter, 5, ts(1)).await;

    svc.properties.delete_property(&ctx(landlord), gone).await.unwrap();

    let written: Vec<Uuid> = svc
        .views
        .reviews_written_by(&ctx(renter))
        .await
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(written, vec![visible]);

    // The author can still remove the hidden row.
    svc.reviews.delete_review(&ctx(renter), orphan).await.unwrap();
}

#[tokio::test]
async fn views_require_authentication() {
    let db = inmem_db().await;
    let (svc, _) = services(&db);
    let landlord = Uuid::new_v4();
    seed_profile(&db, landlord, None, Some(Role::Landlord)).await;
    let property = seed_property(&db, landlord, "Sunset Apt").await;

    assert!(matches!(
        svc.views.reviews_written_by(&anonymous()).await,
        Err(DomainError::Unauthenticated)
    ));
    assert!(matches!(
        svc.views.reviews_received_by(&anonymous(), landlord).await,
        Err(DomainError::Unauthenticated)
    ));
    assert!(matches!(
        svc.views.reviews_for_property(&anonymous(), property).await,
        Err(DomainError::Unauthenticated)
    ));
}

#[tokio::test]
async fn reviews_for_missing_property_is_not_found() {
    let db = inmem_db().await;
    let (svc, _) = services(&db);

    let err = svc
        .views
        .reviews_for_property(&ctx(Uuid::new_v4()), Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "Property", .. }));
}
