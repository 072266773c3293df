//! 경로별 접근 규칙 목록

use actix_web::http::Method;

use crate::domain::models::{Access, AccessRule};

/// 순서가 있는 접근 규칙 목록. 처음 일치하는 규칙이 적용됩니다.
#[derive(Debug, Clone)]
pub struct SecurityRules {
    rules: Vec<AccessRule>,
    fallback: Access,
}

impl SecurityRules {
    /// 규칙이 없는 목록. 일치하는 규칙이 없으면 인증을 요구합니다.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            fallback: Access::Authenticated,
        }
    }

    pub fn rule(mut self, method: Option<Method>, pattern: &str, access: Access) -> Self {
        self.rules.push(AccessRule::new(method, pattern, access));
        self
    }

    pub fn permit_all(self, method: Method, pattern: &str) -> Self {
        self.rule(Some(method), pattern, Access::PermitAll)
    }

    pub fn has_role(self, method: Method, pattern: &str, role: &str) -> Self {
        self.rule(Some(method), pattern, Access::HasRole(role.to_string()))
    }

    /// 애플리케이션 기본 규칙
    ///
    /// | 메서드 | 경로 | 조건 |
    /// |--------|------|------|
    /// | `POST` | `/auth/signin` | 모두 허용 |
    /// | `GET` | `/health`, `/v3/api-docs` | 모두 허용 |
    /// | `GET` | `/vehicles/**` | 모두 허용 |
    /// | `DELETE` | `/vehicles/**` | `ADMIN` |
    /// | `GET` | `/v1/vehicles/**` | 모두 허용 |
    /// | `DELETE` | `/v1/vehicles/**` | `ADMIN` |
    /// | 그 외 | | 인증 필요 |
    pub fn default_rules() -> Self {
        Self::new()
            .permit_all(Method::POST, "/auth/signin")
            .permit_all(Method::GET, "/health")
            .permit_all(Method::GET, "/v3/api-docs")
            .permit_all(Method::GET, "/vehicles/**")
            .has_role(Method::DELETE, "/vehicles/**", "ADMIN")
            .permit_all(Method::GET, "/v1/vehicles/**")
            .has_role(Method::DELETE, "/v1/vehicles/**", "ADMIN")
    }

    pub fn resolve(&self, method: &Method, path: &str) -> &Access {
        self.rules
            .iter()
            .find(|rule| rule.applies_to(method, path))
            .map(|rule| &rule.access)
            .unwrap_or(&self.fallback)
    }
}

impl Default for SecurityRules {
    fn default() -> Self {
        Self::default_rules()
    }
}
