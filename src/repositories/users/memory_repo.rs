//! 인메모리 사용자 리포지토리

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::entities::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::UserRepository;

#[derive(Default)]
struct UserTable {
    by_username: HashMap<String, User>,
    sequence: i64,
}

/// 사용자명을 키로 하는 사용자 저장소
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::InternalError("user table lock poisoned".to_string())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.by_username.get(username).cloned())
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        let mut table = self.table.write().map_err(poisoned)?;

        if table.by_username.contains_key(&user.username) {
            return Err(AppError::ConflictError(format!(
                "Username {} already exists",
                user.username
            )));
        }

        table.sequence += 1;
        user.id = Some(table.sequence);
        table.by_username.insert(user.username.clone(), user.clone());

        Ok(user)
    }

    async fn count(&self) -> AppResult<u64> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.by_username.len() as u64)
    }
}
