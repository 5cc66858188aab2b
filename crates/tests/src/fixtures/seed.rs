use bson::oid::ObjectId;
use ngo_connect_services::dao::ngo::NgoDao;
use serde_json::Value;

use super::test_app::TestApp;

impl TestApp {
    /// Register a full-profile user and return their id.
    pub async fn register_user(&self, name: &str, email: &str, password: &str) -> String {
        let resp = self
            .client
            .post(self.url("/api/users/register"))
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
                "phone": "1234567890",
            }))
            .send()
            .await
            .expect("Register user request failed");

        let status = resp.status();
        let json: Value = resp.json().await.expect("Failed to parse user response");
        assert_eq!(status.as_u16(), 201, "Register user failed: {}", json);

        json["userId"].as_str().unwrap().to_string()
    }

    /// Register an NGO at the given point and return its id. `push_token`
    /// lands on the document so help-request fan-out can count it.
    pub async fn register_ngo(
        &self,
        slug: &str,
        longitude: f64,
        latitude: f64,
        push_token: Option<&str>,
    ) -> String {
        let mut body = serde_json::json!({
            "name": format!("{} Foundation", slug),
            "email": format!("contact@{}.org", slug),
            "phone": "9876543210",
            "address": format!("1 {} Street", slug),
            "city": "Bengaluru",
            "state": "Karnataka",
            "description": "Test NGO",
            "registrationNumber": format!("REG-{}", slug),
            "location": {
                "type": "Point",
                "coordinates": [longitude, latitude],
            },
        });
        if let Some(token) = push_token {
            body["pushToken"] = serde_json::json!(token);
        }

        let resp = self
            .client
            .post(self.url("/api/ngos/register"))
            .json(&body)
            .send()
            .await
            .expect("Register NGO request failed");

        let status = resp.status();
        let json: Value = resp.json().await.expect("Failed to parse NGO response");
        assert_eq!(status.as_u16(), 201, "Register NGO failed: {}", json);

        json["ngoId"].as_str().unwrap().to_string()
    }

    /// Create a help request and return `(id, full response body)`.
    pub async fn create_help_request(
        &self,
        reporter_id: &str,
        longitude: f64,
        latitude: f64,
    ) -> (String, Value) {
        let resp = self
            .client
            .post(self.url("/api/help-requests"))
            .json(&serde_json::json!({
                "reportedBy": reporter_id,
                "helpType": "food",
                "description": "Family of four needs meals",
                "location": {
                    "type": "Point",
                    "coordinates": [longitude, latitude],
                },
            }))
            .send()
            .await
            .expect("Create help request failed");

        let status = resp.status();
        let json: Value = resp.json().await.expect("Failed to parse response");
        assert_eq!(status.as_u16(), 201, "Create help request failed: {}", json);

        (json["helpRequestId"].as_str().unwrap().to_string(), json)
    }

    /// Flip an NGO's active flag through the DAO; there is no deactivation
    /// endpoint.
    pub async fn deactivate_ngo(&self, ngo_id: &str) {
        let id = ObjectId::parse_str(ngo_id).unwrap();
        NgoDao::new(&self.db)
            .set_active(id, false)
            .await
            .expect("Failed to deactivate NGO");
    }
}
