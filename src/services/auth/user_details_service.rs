//! 사용자 인증 서비스
//!
//! 로그인 시 자격 증명을 확인하고, 요청마다 토큰의 주체를 저장소에서 다시
//! 읽어 인증 주체를 구성합니다. 권한은 토큰이 아니라 저장된 사용자 기준입니다.

use std::sync::Arc;

use log::{debug, info};

use crate::domain::entities::User;
use crate::domain::models::{AuthenticatedUser, JwtClaims};
use crate::errors::{AppError, AppResult};
use crate::repositories::UserRepository;
use crate::services::auth::PasswordEncoder;

const BAD_CREDENTIALS_MESSAGE: &str = "Invalid username/password supplied";

pub struct UserDetailsService {
    users: Arc<dyn UserRepository>,
    encoder: PasswordEncoder,
}

impl UserDetailsService {
    pub fn new(users: Arc<dyn UserRepository>, encoder: PasswordEncoder) -> Self {
        Self { users, encoder }
    }

    /// 사용자명으로 사용자를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UsernameNotFound` - 존재하지 않는 사용자
    pub async fn load_user_by_username(&self, username: &str) -> AppResult<User> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::UsernameNotFound(format!("Username: {} not found", username)))
    }

    /// 사용자명/비밀번호를 검증합니다.
    ///
    /// 존재하지 않는 사용자와 비밀번호 불일치는 같은 `BadCredentials`로 응답합니다.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        let start_time = std::time::Instant::now();

        let user = match self.load_user_by_username(username).await {
            Ok(user) => user,
            Err(AppError::UsernameNotFound(_)) => {
                return Err(AppError::BadCredentials(BAD_CREDENTIALS_MESSAGE.to_string()));
            }
            Err(e) => return Err(e),
        };

        if !self.encoder.matches(password, &user.password) {
            info!("로그인 실패: {}", username);
            return Err(AppError::BadCredentials(BAD_CREDENTIALS_MESSAGE.to_string()));
        }

        debug!("Total authentication took: {:?}", start_time.elapsed());
        Ok(user)
    }

    /// 검증된 토큰 클레임으로 인증 주체를 구성합니다.
    pub async fn get_authentication(&self, claims: &JwtClaims) -> AppResult<AuthenticatedUser> {
        let user = self.load_user_by_username(&claims.sub).await?;
        Ok(AuthenticatedUser::from(&user))
    }

    /// 사용자가 없을 때만 생성합니다. 생성했으면 `true`.
    pub async fn register_if_absent(&self, username: &str, password: &str, roles: &[&str]) -> AppResult<bool> {
        if self.users.find_by_username(username).await?.is_some() {
            return Ok(false);
        }

        let hash = self.encoder.encode(password)?;
        let roles = roles.iter().map(|r| r.to_string()).collect();

        match self.users.save(User::new(username, hash, roles)).await {
            Ok(_) => Ok(true),
            Err(AppError::ConflictError(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
