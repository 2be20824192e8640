//! API integration tests
//!
//! These run against a live server with a migrated database:
//! `cargo run`, then `cargo test -- --ignored`.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api";

/// Unique suffix so reruns do not collide on unique columns
fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos()
}

async fn create_test_facility(client: &Client) -> i64 {
    let response = client
        .post(format!("{}/facilities", BASE_URL))
        .json(&json!({
            "name": "Riverside Community Hall",
            "type": "Building",
            "location": "12 River Road",
            "description": "Main hall with stage",
            "capacity": 50,
            "amenities": "Chairs, tables, kitchen",
            "status": "Available"
        }))
        .send()
        .await
        .expect("Failed to create facility");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse facility");
    body["id"].as_i64().expect("No facility ID")
}

async fn create_test_booking(client: &Client, facility_id: i64) -> Value {
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "facilityId": facility_id,
            "requesterName": "Jordan Vale",
            "requesterEmail": "jordan@example.org",
            "requesterPhone": "555-0172",
            "bookingDate": "2026-09-12",
            "startTime": "09:00:00",
            "endTime": "12:00:00",
            "purpose": "Neighbourhood meeting",
            "expectedAttendees": 30
        }))
        .send()
        .await
        .expect("Failed to create booking");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse booking")
}

async fn delete_facility(client: &Client, facility_id: i64) {
    let _ = client
        .delete(format!("{}/facilities/{}", BASE_URL, facility_id))
        .send()
        .await;
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_register_and_login() {
    let client = Client::new();
    let username = format!("clerk{}", unique_suffix());

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "username": username,
            "password": "secret123",
            "fullName": "Pat Morrow",
            "email": "pat@example.org"
        }))
        .send()
        .await
        .expect("Failed to send register request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Admin registered successfully");

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "username": username, "password": "secret123" }))
        .send()
        .await
        .expect("Failed to send login request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert_eq!(body["username"], username.as_str());
    assert_eq!(body["fullName"], "Pat Morrow");
    assert_eq!(body["email"], "pat@example.org");
    assert!(body["adminId"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_register_duplicate_username_rejected() {
    let client = Client::new();
    let username = format!("clerk{}", unique_suffix());
    let register_body = json!({
        "username": username,
        "password": "secret123",
        "fullName": "Pat Morrow",
        "email": "pat@example.org"
    });

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&register_body)
        .send()
        .await
        .expect("Failed to send register request");
    assert!(response.status().is_success());

    // Second registration with the same username must fail
    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&register_body)
        .send()
        .await
        .expect("Failed to send register request");
    assert_eq!(response.status(), 400);

    // The first account still logs in
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "username": username, "password": "secret123" }))
        .send()
        .await
        .expect("Failed to send login request");
    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_login_wrong_password_unauthorized() {
    let client = Client::new();
    let username = format!("clerk{}", unique_suffix());

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "username": username,
            "password": "secret123",
            "fullName": "Pat Morrow",
            "email": "pat@example.org"
        }))
        .send()
        .await
        .expect("Failed to send register request");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "username": username, "password": "wrong" }))
        .send()
        .await
        .expect("Failed to send login request");
    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_facility_crud() {
    let client = Client::new();

    // Create: 201 with a Location header
    let response = client
        .post(format!("{}/facilities", BASE_URL))
        .json(&json!({
            "name": "Elm Street Park",
            "type": "Park",
            "location": "Elm Street",
            "description": "Open green with playground",
            "capacity": 200,
            "amenities": "Benches, BBQ area"
        }))
        .send()
        .await
        .expect("Failed to create facility");

    assert_eq!(response.status(), 201);
    assert!(response.headers().contains_key("location"));
    let body: Value = response.json().await.expect("Failed to parse response");
    let facility_id = body["id"].as_i64().expect("No facility ID");
    // Status defaults when the submission leaves it out
    assert_eq!(body["status"], "Available");

    // Read
    let response = client
        .get(format!("{}/facilities/{}", BASE_URL, facility_id))
        .send()
        .await
        .expect("Failed to get facility");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "Elm Street Park");
    assert_eq!(body["type"], "Park");

    // Update replaces the mutable fields
    let response = client
        .put(format!("{}/facilities/{}", BASE_URL, facility_id))
        .json(&json!({
            "name": "Elm Street Park",
            "type": "Park",
            "location": "Elm Street",
            "description": "Open green with playground",
            "capacity": 180,
            "amenities": "Benches, BBQ area",
            "status": "Under Maintenance"
        }))
        .send()
        .await
        .expect("Failed to update facility");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["capacity"], 180);
    assert_eq!(body["status"], "Under Maintenance");

    // Delete
    let response = client
        .delete(format!("{}/facilities/{}", BASE_URL, facility_id))
        .send()
        .await
        .expect("Failed to delete facility");
    assert_eq!(response.status(), 204);

    // Gone
    let response = client
        .get(format!("{}/facilities/{}", BASE_URL, facility_id))
        .send()
        .await
        .expect("Failed to get facility");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_unknown_ids_return_404() {
    let client = Client::new();

    for url in [
        format!("{}/facilities/999999999", BASE_URL),
        format!("{}/bookings/999999999", BASE_URL),
        format!("{}/inspections/999999999", BASE_URL),
    ] {
        let response = client.get(&url).send().await.expect("Failed to send request");
        assert_eq!(response.status(), 404, "expected 404 from {}", url);
    }
}

#[tokio::test]
#[ignore]
async fn test_booking_lifecycle() {
    let client = Client::new();
    let facility_id = create_test_facility(&client).await;

    // A submission presetting its own status is still stored Pending
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "facilityId": facility_id,
            "requesterName": "Sam Reyes",
            "requesterEmail": "sam@example.org",
            "requesterPhone": "555-0188",
            "bookingDate": "2026-10-03",
            "startTime": "14:00:00",
            "endTime": "18:00:00",
            "purpose": "Birthday party",
            "expectedAttendees": 40,
            "status": "Approved"
        }))
        .send()
        .await
        .expect("Failed to create booking");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse booking");
    let booking_id = body["id"].as_i64().expect("No booking ID");
    assert_eq!(body["status"], "Pending");

    // Admin approves
    let response = client
        .put(format!(
            "{}/bookings/{}/status?status=Approved&adminNotes=Looks%20fine",
            BASE_URL, booking_id
        ))
        .send()
        .await
        .expect("Failed to update status");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse booking");
    assert_eq!(body["status"], "Approved");
    assert_eq!(body["adminNotes"], "Looks fine");

    // Post-event inspection closes the booking out
    let response = client
        .post(format!("{}/inspections", BASE_URL))
        .json(&json!({
            "bookingId": booking_id,
            "inspectorName": "Lee Okafor",
            "inspectorContact": "lee@example.org",
            "conditionBefore": "Clean",
            "conditionAfter": "Minor litter",
            "damagesFound": false,
            "inspectionNotes": "No issues"
        }))
        .send()
        .await
        .expect("Failed to create inspection");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/bookings/{}", BASE_URL, booking_id))
        .send()
        .await
        .expect("Failed to get booking");
    let body: Value = response.json().await.expect("Failed to parse booking");
    assert_eq!(body["status"], "Completed");
    assert_eq!(body["facility"]["id"], facility_id);

    // The inspection is retrievable through its booking
    let response = client
        .get(format!("{}/inspections/booking/{}", BASE_URL, booking_id))
        .send()
        .await
        .expect("Failed to list inspections");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let inspections = body.as_array().expect("Expected an array");
    assert_eq!(inspections.len(), 1);
    assert_eq!(inspections[0]["booking"]["id"], booking_id);

    delete_facility(&client, facility_id).await;
}

#[tokio::test]
#[ignore]
async fn test_inspection_completes_booking_from_any_status() {
    let client = Client::new();
    let facility_id = create_test_facility(&client).await;

    // Pending, Approved and Rejected bookings all end Completed after an
    // inspection is recorded against them
    for preset in ["Pending", "Approved", "Rejected"] {
        let booking = create_test_booking(&client, facility_id).await;
        let booking_id = booking["id"].as_i64().expect("No booking ID");

        if preset != "Pending" {
            let response = client
                .put(format!(
                    "{}/bookings/{}/status?status={}",
                    BASE_URL, booking_id, preset
                ))
                .send()
                .await
                .expect("Failed to update status");
            assert!(response.status().is_success());
        }

        let response = client
            .post(format!("{}/inspections", BASE_URL))
            .json(&json!({
                "bookingId": booking_id,
                "inspectorName": "Lee Okafor",
                "inspectorContact": "lee@example.org",
                "conditionBefore": "Clean",
                "conditionAfter": "Clean",
                "damagesFound": false,
                "inspectionNotes": ""
            }))
            .send()
            .await
            .expect("Failed to create inspection");
        assert_eq!(response.status(), 201);

        let response = client
            .get(format!("{}/bookings/{}", BASE_URL, booking_id))
            .send()
            .await
            .expect("Failed to get booking");
        let body: Value = response.json().await.expect("Failed to parse booking");
        assert_eq!(body["status"], "Completed", "prior status {}", preset);
    }

    delete_facility(&client, facility_id).await;
}

#[tokio::test]
#[ignore]
async fn test_bookings_listed_newest_first() {
    let client = Client::new();
    let facility_id = create_test_facility(&client).await;

    let first = create_test_booking(&client, facility_id).await;
    let second = create_test_booking(&client, facility_id).await;
    let first_id = first["id"].as_i64().expect("No booking ID");
    let second_id = second["id"].as_i64().expect("No booking ID");

    let response = client
        .get(format!("{}/bookings", BASE_URL))
        .send()
        .await
        .expect("Failed to list bookings");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let bookings = body.as_array().expect("Expected an array");

    // The whole list is ordered by request date descending, so this holds
    // for any pre-existing data too
    let dates: Vec<DateTime<Utc>> = bookings
        .iter()
        .map(|b| {
            b["requestDate"]
                .as_str()
                .expect("Missing requestDate")
                .parse()
                .expect("Unparseable requestDate")
        })
        .collect();
    assert!(dates.windows(2).all(|w| w[0] >= w[1]));

    // The later submission sorts before the earlier one
    let position = |id: i64| {
        bookings
            .iter()
            .position(|b| b["id"].as_i64() == Some(id))
            .expect("Booking missing from list")
    };
    assert!(position(second_id) < position(first_id));

    delete_facility(&client, facility_id).await;
}

#[tokio::test]
#[ignore]
async fn test_bookings_filtered_by_status() {
    let client = Client::new();
    let facility_id = create_test_facility(&client).await;

    let booking = create_test_booking(&client, facility_id).await;
    let booking_id = booking["id"].as_i64().expect("No booking ID");

    let response = client
        .get(format!("{}/bookings/status/Pending", BASE_URL))
        .send()
        .await
        .expect("Failed to list bookings");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let bookings = body.as_array().expect("Expected an array");
    assert!(bookings.iter().all(|b| b["status"] == "Pending"));
    assert!(bookings.iter().any(|b| b["id"].as_i64() == Some(booking_id)));

    delete_facility(&client, facility_id).await;
}

#[tokio::test]
#[ignore]
async fn test_facility_delete_cascades_to_bookings() {
    let client = Client::new();
    let facility_id = create_test_facility(&client).await;
    let booking = create_test_booking(&client, facility_id).await;
    let booking_id = booking["id"].as_i64().expect("No booking ID");

    let response = client
        .delete(format!("{}/facilities/{}", BASE_URL, facility_id))
        .send()
        .await
        .expect("Failed to delete facility");
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/bookings/{}", BASE_URL, booking_id))
        .send()
        .await
        .expect("Failed to get booking");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_booking_delete_cascades_to_inspections() {
    let client = Client::new();
    let facility_id = create_test_facility(&client).await;
    let booking = create_test_booking(&client, facility_id).await;
    let booking_id = booking["id"].as_i64().expect("No booking ID");

    let response = client
        .post(format!("{}/inspections", BASE_URL))
        .json(&json!({
            "bookingId": booking_id,
            "inspectorName": "Lee Okafor",
            "inspectorContact": "lee@example.org",
            "conditionBefore": "Clean",
            "conditionAfter": "Scuffed floor",
            "damagesFound": true,
            "damageDescription": "Scratches near the stage",
            "inspectionNotes": "Follow up with requester"
        }))
        .send()
        .await
        .expect("Failed to create inspection");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse inspection");
    let inspection_id = body["id"].as_i64().expect("No inspection ID");

    let response = client
        .delete(format!("{}/bookings/{}", BASE_URL, booking_id))
        .send()
        .await
        .expect("Failed to delete booking");
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/inspections/{}", BASE_URL, inspection_id))
        .send()
        .await
        .expect("Failed to get inspection");
    assert_eq!(response.status(), 404);

    delete_facility(&client, facility_id).await;
}

#[tokio::test]
#[ignore]
async fn test_inspection_update_keeps_booking_status() {
    let client = Client::new();
    let facility_id = create_test_facility(&client).await;
    let booking = create_test_booking(&client, facility_id).await;
    let booking_id = booking["id"].as_i64().expect("No booking ID");

    let response = client
        .post(format!("{}/inspections", BASE_URL))
        .json(&json!({
            "bookingId": booking_id,
            "inspectorName": "Lee Okafor",
            "inspectorContact": "lee@example.org",
            "conditionBefore": "Clean",
            "conditionAfter": "Clean",
            "damagesFound": false,
            "inspectionNotes": ""
        }))
        .send()
        .await
        .expect("Failed to create inspection");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse inspection");
    let inspection_id = body["id"].as_i64().expect("No inspection ID");

    // Nudge the booking off Completed, then update the inspection
    let response = client
        .put(format!(
            "{}/bookings/{}/status?status=Approved",
            BASE_URL, booking_id
        ))
        .send()
        .await
        .expect("Failed to update status");
    assert!(response.status().is_success());

    let response = client
        .put(format!("{}/inspections/{}", BASE_URL, inspection_id))
        .json(&json!({
            "inspectorName": "Lee Okafor",
            "inspectorContact": "lee@example.org",
            "conditionBefore": "Clean",
            "conditionAfter": "Scuffed floor",
            "damagesFound": true,
            "damageDescription": "Scratches near the stage",
            "inspectionNotes": "Revised after photos"
        }))
        .send()
        .await
        .expect("Failed to update inspection");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse inspection");
    assert_eq!(body["damagesFound"], true);

    // Updating an inspection never re-touches the booking
    let response = client
        .get(format!("{}/bookings/{}", BASE_URL, booking_id))
        .send()
        .await
        .expect("Failed to get booking");
    let body: Value = response.json().await.expect("Failed to parse booking");
    assert_eq!(body["status"], "Approved");

    delete_facility(&client, facility_id).await;
}

#[tokio::test]
#[ignore]
async fn test_stats_overview() {
    let client = Client::new();

    let response = client
        .get(format!("{}/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to get stats");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["facilities"]["total"].is_number());
    assert!(body["facilities"]["byType"].is_array());
    assert!(body["bookings"]["total"].is_number());
    assert!(body["bookings"]["pending"].is_number());
    assert!(body["inspections"]["damagesFound"].is_number());
}
