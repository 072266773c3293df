//! # MongoDB 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 사용자를 저장합니다. `username` 필드에는 unique 인덱스가
//! 걸려 있으며 [`MongoUserRepository::create_indexes`]로 생성합니다. 저장 전에
//! 사용자명 중복을 먼저 확인하고, 동시에 들어온 중복 삽입은 인덱스 위반
//! (`11000`)을 `ConflictError`로 바꿔 돌려줍니다.

use std::sync::Arc;

use async_trait::async_trait;
use log::info;
use mongodb::bson::doc;
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::domain::entities::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::UserRepository;

const COLLECTION: &str = "users";
const SEQUENCE: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: i64,
    username: String,
    password: String,
    #[serde(default)]
    roles: Vec<String>,
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        User {
            id: Some(doc.id),
            username: doc.username,
            password: doc.password,
            roles: doc.roles,
        }
    }
}

/// MongoDB 기반 사용자 저장소
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<UserDocument> {
        self.db.collection::<UserDocument>(COLLECTION)
    }

    /// `username` unique 인덱스를 생성합니다. 이미 있으면 아무 일도 하지 않습니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_index(index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("users.username 인덱스 확인 완료");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = self
            .collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(user.map(User::from))
    }

    async fn save(&self, user: User) -> AppResult<User> {
        // 중복 확인
        if self.find_by_username(&user.username).await?.is_some() {
            return Err(username_conflict(&user.username));
        }

        let id = self.db.next_sequence(SEQUENCE).await?;
        let document = UserDocument {
            id,
            username: user.username,
            password: user.password,
            roles: user.roles,
        };

        self.collection()
            .insert_one(&document)
            .await
            .map_err(|e| map_insert_error(&document.username, e))?;

        Ok(document.into())
    }

    async fn count(&self) -> AppResult<u64> {
        self.collection()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

fn username_conflict(username: &str) -> AppError {
    AppError::ConflictError(format!("Username {} already exists", username))
}

fn map_insert_error(username: &str, error: MongoError) -> AppError {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write)) if write.code == DUPLICATE_KEY_CODE => {
            username_conflict(username)
        }
        _ => AppError::DatabaseError(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::error::WriteError;

    fn write_error(code: i32) -> MongoError {
        let write: WriteError = mongodb::bson::from_document(doc! {
            "code": code,
            "errmsg": "E11000 duplicate key error collection: users index: username_unique",
        })
        .unwrap();
        MongoError::from(ErrorKind::Write(WriteFailure::WriteError(write)))
    }

    #[test]
    fn test_duplicate_key_insert_is_conflict() {
        let error = map_insert_error("user", write_error(11000));
        assert!(matches!(error, AppError::ConflictError(msg) if msg == "Username user already exists"));
    }

    #[test]
    fn test_other_write_errors_stay_database_errors() {
        let error = map_insert_error("user", write_error(121));
        assert!(matches!(error, AppError::DatabaseError(_)));
    }

    #[test]
    fn test_document_without_roles_maps_to_empty_roles() {
        let document: UserDocument = mongodb::bson::from_document(doc! {
            "_id": 2_i64,
            "username": "user",
            "password": "hash",
        })
        .unwrap();

        let user: User = document.into();
        assert_eq!(user.id, Some(2));
        assert!(user.roles.is_empty());
    }
}
