//! Users: `/User` administration endpoints

use platform::client::ApiClient;
use reqwest::Method;

use crate::error::ResourceResult;
use crate::model::user::{ManagerAssignment, User, UserUpdate};
use crate::service::send_ignoring_body;

#[derive(Debug, Clone)]
pub struct UserService {
    client: ApiClient,
}

impl UserService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ResourceResult<Vec<User>> {
        Ok(self.client.get_json("/User", "Failed to fetch users").await?)
    }

    pub async fn get(&self, id: i64) -> ResourceResult<User> {
        Ok(self
            .client
            .get_json(&format!("/User/{id}"), "Failed to fetch user")
            .await?)
    }

    pub async fn by_hotel_name(&self, hotel_name: &str) -> ResourceResult<Vec<User>> {
        Ok(self
            .client
            .get_json(
                &format!("/User/by-hotel-name/{}", urlencoding::encode(hotel_name)),
                "Failed to fetch users for hotel",
            )
            .await?)
    }

    pub async fn update(&self, id: i64, update: &UserUpdate) -> ResourceResult<()> {
        send_ignoring_body(
            &self.client,
            Method::PUT,
            &format!("/User/{id}"),
            update,
            "Failed to update user",
        )
        .await
    }

    pub async fn delete(&self, id: i64) -> ResourceResult<()> {
        self.client
            .delete(&format!("/User/{id}"), "Failed to delete user")
            .await?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    /// Returns the API's confirmation text
    pub async fn assign_manager(&self, hotel_id: i64, manager_id: i64) -> ResourceResult<String> {
        let body = ManagerAssignment {
            hotel_id,
            manager_id,
        };
        let response = self
            .client
            .send(self.client.request(Method::POST, "/User/assign-manager").json(&body))
            .await?
            .error_for_status("Failed to assign manager to hotel")?;

        tracing::info!(hotel_id, manager_id, "Manager assigned");
        Ok(response
            .server_message()
            .unwrap_or_else(|| "Manager assigned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service(server: &MockServer) -> UserService {
        UserService::new(ApiClient::new(&server.uri(), None).unwrap())
    }

    #[tokio::test]
    async fn test_assign_manager() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/User/assign-manager"))
            .and(body_json(json!({"hotelId": 3, "managerId": 4})))
            .respond_with(ResponseTemplate::new(200).set_body_string("Manager assigned to Seaside"))
            .expect(1)
            .mount(&server)
            .await;

        let message = service(&server).assign_manager(3, 4).await.unwrap();
        assert_eq!(message, "Manager assigned to Seaside");
    }

    #[tokio::test]
    async fn test_by_hotel_name_encodes_segment() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/User/by-hotel-name/Sea%20Side"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"userID": 4, "name": "Mia", "email": "mia@example.com", "role": "manager"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let users = service(&server).by_hotel_name("Sea Side").await.unwrap();
        assert!(users[0].is_manager());
    }
}
