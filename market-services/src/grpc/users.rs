//! gRPC server adapter for the user service.

use tonic::{Request, Response, Status};

use market_proto::user::v1 as pb;
use market_types::{NewUser, User, UserRepository};

use crate::status::into_status;
use crate::users::UserService;

/// Implements the generated `UserService` server trait on top of the
/// orchestrator.
pub struct UserGrpc<R: UserRepository> {
    service: UserService<R>,
}

impl<R: UserRepository> UserGrpc<R> {
    pub fn new(service: UserService<R>) -> Self {
        Self { service }
    }
}

fn encode_user(user: User) -> pb::User {
    pb::User {
        id: user.id,
        first_name: user.first_name,
        last_name: user.last_name,
        username: user.username,
        created_at: user.created_at.to_rfc3339(),
    }
}

#[tonic::async_trait]
impl<R: UserRepository> pb::user_service_server::UserService for UserGrpc<R> {
    async fn create_user(
        &self,
        request: Request<pb::CreateUserRequest>,
    ) -> Result<Response<pb::User>, Status> {
        let msg = request.into_inner();
        let user = self
            .service
            .create(NewUser {
                first_name: msg.first_name,
                last_name: msg.last_name,
                username: msg.username,
            })
            .await
            .map_err(into_status)?;

        Ok(Response::new(encode_user(user)))
    }

    async fn get_user(
        &self,
        request: Request<pb::GetUserRequest>,
    ) -> Result<Response<pb::User>, Status> {
        let user = self
            .service
            .get(request.into_inner().id)
            .await
            .map_err(into_status)?;

        Ok(Response::new(encode_user(user)))
    }

    async fn list_users(
        &self,
        _request: Request<pb::ListUsersRequest>,
    ) -> Result<Response<pb::ListUsersResponse>, Status> {
        let users = self.service.list().await.map_err(into_status)?;

        Ok(Response::new(pb::ListUsersResponse {
            users: users.into_iter().map(encode_user).collect(),
        }))
    }

    async fn update_user(
        &self,
        request: Request<pb::UpdateUserRequest>,
    ) -> Result<Response<pb::UpdateUserResponse>, Status> {
        let msg = request.into_inner();
        self.service
            .update(
                msg.id,
                NewUser {
                    first_name: msg.first_name,
                    last_name: msg.last_name,
                    username: msg.username,
                },
            )
            .await
            .map_err(into_status)?;

        Ok(Response::new(pb::UpdateUserResponse {}))
    }

    async fn delete_user(
        &self,
        request: Request<pb::DeleteUserRequest>,
    ) -> Result<Response<pb::DeleteUserResponse>, Status> {
        self.service
            .delete(request.into_inner().id)
            .await
            .map_err(into_status)?;

        Ok(Response::new(pb::DeleteUserResponse {}))
    }
}
