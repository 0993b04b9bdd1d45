//! gRPC client for the user service.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tonic::transport::{Channel, Endpoint};
use tonic::{Request, Status};

use market_proto::user::v1 as pb;
use market_proto::user::v1::user_service_client::UserServiceClient;
use market_types::{NewUser, User};

use crate::ports::UserApi;

/// Lazily connected client; one HTTP/2 channel, cloned per call.
pub struct UserClient {
    channel: Channel,
    timeout: Duration,
}

impl UserClient {
    /// Creates a client for `url` (e.g. `http://localhost:50051`). The
    /// connection is established on first use.
    pub fn connect_lazy(url: &str, timeout: Duration) -> Result<Self, tonic::transport::Error> {
        let channel = Endpoint::from_shared(url.to_owned())?
            .connect_timeout(timeout)
            .connect_lazy();
        Ok(Self { channel, timeout })
    }

    fn request<T>(&self, msg: T) -> Request<T> {
        let mut request = Request::new(msg);
        request.set_timeout(self.timeout);
        request
    }
}

fn decode_user(user: pb::User) -> Result<User, Status> {
    let created_at = decode_timestamp(&user.created_at)?;
    Ok(User {
        id: user.id,
        first_name: user.first_name,
        last_name: user.last_name,
        username: user.username,
        created_at,
    })
}

pub(crate) fn decode_timestamp(raw: &str) -> Result<DateTime<Utc>, Status> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|err| {
            tracing::error!(raw, %err, "malformed timestamp in response");
            Status::internal("malformed timestamp in response")
        })
}

#[async_trait]
impl UserApi for UserClient {
    async fn create(&self, user: NewUser) -> Result<User, Status> {
        let response = UserServiceClient::new(self.channel.clone())
            .create_user(self.request(pb::CreateUserRequest {
                first_name: user.first_name,
                last_name: user.last_name,
                username: user.username,
            }))
            .await?;
        decode_user(response.into_inner())
    }

    async fn get(&self, id: i64) -> Result<User, Status> {
        let response = UserServiceClient::new(self.channel.clone())
            .get_user(self.request(pb::GetUserRequest { id }))
            .await?;
        decode_user(response.into_inner())
    }

    async fn list(&self) -> Result<Vec<User>, Status> {
        let response = UserServiceClient::new(self.channel.clone())
            .list_users(self.request(pb::ListUsersRequest {}))
            .await?;
        response
            .into_inner()
            .users
            .into_iter()
            .map(decode_user)
            .collect()
    }

    async fn update(&self, id: i64, changes: NewUser) -> Result<(), Status> {
        UserServiceClient::new(self.channel.clone())
            .update_user(self.request(pb::UpdateUserRequest {
                id,
                first_name: changes.first_name,
                last_name: changes.last_name,
                username: changes.username,
            }))
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), Status> {
        UserServiceClient::new(self.channel.clone())
            .delete_user(self.request(pb::DeleteUserRequest { id }))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_complete_user() {
        let user = decode_user(pb::User {
            id: 7,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            username: "ada".into(),
            created_at: "2024-05-01T12:00:00+00:00".into(),
        })
        .unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.username, "ada");
        assert_eq!(user.created_at.to_rfc3339(), "2024-05-01T12:00:00+00:00");
    }

    #[test]
    fn malformed_timestamp_is_an_internal_error() {
        let err = decode_timestamp("yesterday").unwrap_err();
        assert_eq!(err.code(), tonic::Code::Internal);
    }

    #[test]
    fn offset_timestamps_normalize_to_utc() {
        let parsed = decode_timestamp("2024-05-01T14:30:00+02:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-05-01T12:30:00+00:00");
    }
}
