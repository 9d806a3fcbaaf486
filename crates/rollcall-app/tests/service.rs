//! End-to-end tests for the enrollment service: registration pipeline,
//! capacity behavior, persistence-after-mutation, and snapshot round-trips.

use rollcall_advisor::{AdvisorConfig, AdvisoryClient};
use rollcall_app::{EnrollmentService, ErrorCode, RegistrationForm};
use rollcall_core::MAX_CAPACITY;
use rollcall_store::{JsonSnapshotStore, MemorySnapshotStore};

fn advisor() -> AdvisoryClient {
    AdvisoryClient::new(AdvisorConfig::default())
}

fn form(name: &str, national_id: u32) -> RegistrationForm {
    RegistrationForm {
        full_name: name.to_string(),
        national_id: national_id.to_string(),
        age: "30".to_string(),
        ..Default::default()
    }
}

#[test]
fn registration_is_persisted_after_every_mutation() {
    let store = MemorySnapshotStore::new();
    let service = EnrollmentService::new(store, advisor());

    let a = service.register_member(form("Amira Salem", 30_000_000)).unwrap();
    let b = service.register_member(form("Dana Whitfield", 45_600_000)).unwrap();

    // The service's own store has both members, newest first
    let members = service.members();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].id, b.id);
    assert_eq!(members[1].id, a.id);

    // Removing rewrites the snapshot too
    assert!(service.remove_member(&b.id));
    assert_eq!(service.members().len(), 1);
}

#[test]
fn hydration_reproduces_the_snapshot_exactly() {
    let path = std::env::temp_dir().join(format!("rollcall-e2e-{}.json", uuid::Uuid::new_v4()));
    let ids: Vec<String>;

    {
        let service = EnrollmentService::new(JsonSnapshotStore::new(&path), advisor());
        service.register_member(form("First In", 30_000_001)).unwrap();
        service.register_member(form("Second In", 30_000_002)).unwrap();
        service.register_member(form("Third In", 30_000_003)).unwrap();
        ids = service.members().iter().map(|m| m.id.clone()).collect();
    }

    // A fresh service over the same file sees the identical roster, in the
    // identical order, with identical frozen fees
    let revived = EnrollmentService::new(JsonSnapshotStore::new(&path), advisor());
    let members = revived.members();
    assert_eq!(
        members.iter().map(|m| m.id.clone()).collect::<Vec<_>>(),
        ids
    );
    assert_eq!(members[0].full_name, "Third In");
    assert_eq!(members[0].fee, 300.0);

    std::fs::remove_file(path).ok();
}

#[test]
fn corrupt_snapshot_starts_empty() {
    let path = std::env::temp_dir().join(format!("rollcall-e2e-{}.json", uuid::Uuid::new_v4()));
    std::fs::write(&path, "{{{ definitely not json").unwrap();

    let service = EnrollmentService::new(JsonSnapshotStore::new(&path), advisor());
    assert!(service.members().is_empty());

    // And the service still works from there
    service.register_member(form("Fresh Start", 30_000_000)).unwrap();
    assert_eq!(service.member_count(), 1);

    std::fs::remove_file(path).ok();
}

#[test]
fn capacity_ceiling_and_readmission() {
    // Pre-seed the store to capacity minus one so the test does not loop
    // through the service for all 390 registrations
    let mut seed = Vec::new();
    for i in 0..MAX_CAPACITY - 1 {
        seed.push(rollcall_core::Member::enroll(&rollcall_core::RegistrationRequest {
            full_name: format!("Member {i}"),
            national_id: Some(2_000_000 + i as u32),
            age: Some(30),
            ..Default::default()
        }));
    }
    let service = EnrollmentService::new(MemorySnapshotStore::with_snapshot(seed), advisor());

    // Member 390 fits
    let last = service.register_member(form("Last Fit", 59_999_999)).unwrap();
    assert_eq!(service.member_count(), MAX_CAPACITY);

    // Member 391 is rejected with the capacity reason
    let err = service
        .register_member(form("One Too Many", 30_000_000))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::CapacityExceeded);

    // Removing one member permits exactly one more
    assert!(service.remove_member(&last.id));
    service.register_member(form("Readmitted", 30_000_000)).unwrap();
    let err = service
        .register_member(form("Still Too Many", 30_000_000))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::CapacityExceeded);
}

#[test]
fn missing_required_fields_reject_before_anything_else() {
    let service = EnrollmentService::new(MemorySnapshotStore::new(), advisor());

    let err = service
        .register_member(RegistrationForm {
            full_name: "   ".to_string(),
            national_id: "30000000".to_string(),
            age: "30".to_string(),
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);

    let err = service
        .register_member(RegistrationForm {
            full_name: "No Number".to_string(),
            national_id: "abc".to_string(),
            age: "30".to_string(),
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);

    // Nothing was persisted for rejected registrations
    assert_eq!(service.member_count(), 0);
}

#[test]
fn permissive_fields_default_and_price() {
    let service = EnrollmentService::new(MemorySnapshotStore::new(), advisor());

    // Minor, premium plan, card: full formula in the fixed order
    let dto = service
        .register_member(RegistrationForm {
            full_name: "Young Carder".to_string(),
            national_id: "30000000".to_string(),
            age: "16".to_string(),
            plan_id: "premium".to_string(),
            payment_method: "card".to_string(),
            location: "westgate".to_string(),
        })
        .unwrap();
    assert_eq!(dto.fee, 600.0 * 0.8 * 1.05);
    assert_eq!(dto.fee_display, 504);

    // Unknown plan registers fine and prices at zero
    let dto = service
        .register_member(RegistrationForm {
            full_name: "Mystery Plan".to_string(),
            national_id: "30000001".to_string(),
            age: "40".to_string(),
            plan_id: "platinum".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(dto.fee, 0.0);
    assert_eq!(dto.plan_id, "platinum");

    let summary = service.summarize();
    assert_eq!(summary.total_count, 2);
    assert_eq!(summary.total_revenue.amount(), 600.0 * 0.8 * 1.05);

    // The westgate row carries the young carder's exact fee; downtown (the
    // default location) carries the zero-fee member
    let westgate = &summary.per_location[3];
    assert_eq!(westgate.count, 1);
    assert_eq!(westgate.income.amount(), 600.0 * 0.8 * 1.05);
    let downtown = &summary.per_location[0];
    assert_eq!(downtown.count, 1);
    assert_eq!(downtown.income.amount(), 0.0);
}

#[tokio::test]
async fn advice_degrades_to_fallback_without_a_service() {
    let client = AdvisoryClient::new(AdvisorConfig {
        endpoint: "http://127.0.0.1:9/advice".to_string(),
        timeout: std::time::Duration::from_millis(500),
    });
    let service = EnrollmentService::new(MemorySnapshotStore::new(), client);
    service.register_member(form("Amira Salem", 30_000_000)).unwrap();

    let advice = service.request_advice().await;
    assert_eq!(advice, rollcall_advisor::FALLBACK_ADVICE);

    // The advisory failure changed nothing in the domain
    assert_eq!(service.member_count(), 1);
}
