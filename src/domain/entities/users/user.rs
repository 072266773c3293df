//! User Entity Implementation
//!
//! 인증 주체로만 사용되는 사용자 엔티티입니다.

/// 일반 사용자 권한
pub const ROLE_USER: &str = "ROLE_USER";

/// 관리자 권한
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// 사용자 엔티티
///
/// 사용자명은 시스템 전체에서 유일하며, 비밀번호는 bcrypt 해시로만 보관합니다.
/// 역할은 `ROLE_` 접두사가 붙은 권한 문자열입니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Option<i64>,
    /// 사용자명 (unique)
    pub username: String,
    /// bcrypt 해시된 비밀번호
    pub password: String,
    /// 권한 목록
    pub roles: Vec<String>,
}

impl User {
    /// 아직 저장되지 않은 사용자를 생성합니다.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            password: password_hash.into(),
            roles,
        }
    }

    /// 부여된 권한 목록
    pub fn authorities(&self) -> &[String] {
        &self.roles
    }

    pub fn has_authority(&self, authority: &str) -> bool {
        self.roles.iter().any(|r| r == authority)
    }
}
