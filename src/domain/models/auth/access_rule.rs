//! 경로/메서드 기반 접근 규칙

use actix_web::http::Method;

use super::authenticated_user::AuthenticatedUser;

/// 접근 허용 조건
#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    /// 인증 여부와 관계없이 허용
    PermitAll,
    /// 인증된 주체만 허용
    Authenticated,
    /// 특정 역할을 보유한 주체만 허용 (`ADMIN` 형태)
    HasRole(String),
}

impl Access {
    /// 주어진 주체가 이 조건을 만족하는지 확인
    pub fn is_granted(&self, principal: Option<&AuthenticatedUser>) -> bool {
        match (self, principal) {
            (Access::PermitAll, _) => true,
            (Access::Authenticated, Some(_)) => true,
            (Access::HasRole(role), Some(user)) => user.has_role(role),
            (_, None) => false,
        }
    }
}

/// 경로 패턴
///
/// 정확한 경로 또는 `/**`로 끝나는 접두사 패턴을 지원합니다.
/// `/vehicles/**`는 `/vehicles`와 그 하위 경로 전부에 일치합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPattern {
    pattern: String,
}

impl PathPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self { pattern: pattern.into() }
    }

    pub fn matches(&self, path: &str) -> bool {
        let path = normalize(path);

        match self.pattern.strip_suffix("/**") {
            Some(prefix) => {
                path == prefix
                    || path
                        .strip_prefix(prefix)
                        .is_some_and(|rest| rest.starts_with('/'))
            }
            None => path == normalize(&self.pattern),
        }
    }
}

fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

/// 하나의 접근 규칙. `method`가 `None`이면 모든 메서드에 적용됩니다.
#[derive(Debug, Clone)]
pub struct AccessRule {
    pub method: Option<Method>,
    pub pattern: PathPattern,
    pub access: Access,
}

impl AccessRule {
    pub fn new(method: Option<Method>, pattern: &str, access: Access) -> Self {
        Self {
            method,
            pattern: PathPattern::new(pattern),
            access,
        }
    }

    pub fn applies_to(&self, method: &Method, path: &str) -> bool {
        self.method.as_ref().is_none_or(|m| m == method) && self.pattern.matches(path)
    }
}
