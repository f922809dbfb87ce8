#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end through `Rentals::client()`: SDK errors, events, provisioner.

use std::time::Duration;

use rentals::domain::events::RentalsDomainEvent;
use rentals::infra::identity::StaticIdentityProvider;
use rentals::{
    ActorContext, DenyReason, NewProperty, ProfileFields, Rentals, RentalsConfig, RentalsError,
    ReviewDraft, Role,
};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

async fn rentals() -> Rentals {
    Rentals::init(&RentalsConfig::default()).await.unwrap()
}

fn signed_in(id: Uuid, name: &str, role: Role) -> ActorContext {
    ActorContext::builder()
        .subject_id(id)
        .email(&format!("{}@example.com", name.to_lowercase()))
        .name(name)
        .role(role)
        .build()
}

#[tokio::test]
async fn marketplace_flow_through_client() {
    let rentals = rentals().await;
    rentals.ping().await.unwrap();
    let client = rentals.client();
    let mut events = rentals.subscribe();

    let landlord = signed_in(Uuid::new_v4(), "Lena", Role::Landlord);
    let renter = signed_in(Uuid::new_v4(), "Rita", Role::Renter);
    client
        .ensure_profile(&landlord, Some(landlord.signup_defaults()))
        .await
        .unwrap();
    client
        .ensure_profile(&renter, Some(renter.signup_defaults()))
        .await
        .unwrap();

    let property = client
        .create_property(
            &landlord,
            NewProperty {
                title: "Sunset Apt".to_owned(),
                address: "1 Main St".to_owned(),
                ..NewProperty::default()
            },
        )
        .await
        .unwrap();

    let err = client
        .create_property(
            &renter,
            NewProperty {
                title: "Renter's".to_owned(),
                address: "2 Main St".to_owned(),
                ..NewProperty::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, RentalsError::denied(DenyReason::RoleMismatch));

    client
        .create_review(
            &renter,
            property.id,
            ReviewDraft {
                rating: 4,
                text: "Great place".to_owned(),
            },
        )
        .await
        .unwrap();

    let received = client
        .reviews_received_by(&landlord, landlord.subject_id().unwrap())
        .await
        .unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].reviewer_name, "Rita");
    assert_eq!(received[0].property_title, "Sunset Apt");

    let mut seen = Vec::new();
    while let Ok(event) = events.try_recv() {
        seen.push(event);
    }
    assert!(matches!(seen[0], RentalsDomainEvent::ProfileProvisioned { .. }));
    assert!(seen
        .iter()
        .any(|e| matches!(e, RentalsDomainEvent::PropertyCreated { id, .. } if *id == property.id)));
    assert!(seen
        .iter()
        .any(|e| matches!(e, RentalsDomainEvent::ReviewCreated { property_id, .. } if *property_id == property.id)));
}

#[tokio::test]
async fn domain_errors_map_to_sdk_errors() {
    let rentals = rentals().await;
    let client = rentals.client();
    let anonymous = ActorContext::anonymous();
    let me = signed_in(Uuid::new_v4(), "Mia", Role::Renter);

    assert_eq!(
        client.reviews_written_by(&anonymous).await.unwrap_err(),
        RentalsError::Unauthenticated
    );

    let missing = Uuid::new_v4();
    let err = client.get_property(&anonymous, missing).await.unwrap_err();
    assert_eq!(err, RentalsError::not_found("Property", missing));

    let err = client
        .upsert_profile(
            &me,
            me.subject_id().unwrap(),
            ProfileFields {
                name: Some("M".to_owned()),
                ..ProfileFields::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RentalsError::Validation { ref field, .. } if field == "name"));
    assert!(!err.is_transient());
}

#[tokio::test]
async fn provisioner_follows_identity_provider() {
    let rentals = rentals().await;
    let client = rentals.client();
    let provider = StaticIdentityProvider::signed_out();
    let cancel = CancellationToken::new();
    let handle = rentals.spawn_provisioner(&provider, cancel.clone());

    let session = signed_in(Uuid::new_v4(), "Lena", Role::Landlord);
    let id = session.subject_id().unwrap();
    provider.sign_in(session.clone());

    let mut profile = None;
    for _ in 0..50 {
        if let Ok(p) = client.get_profile(&session, id).await {
            profile = Some(p);
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    let profile = profile.expect("provisioned profile");
    assert_eq!(profile.role, Some(Role::Landlord));
    assert_eq!(profile.display_name(session.email()), "Lena");

    cancel.cancel();
    handle.await.unwrap();
}
