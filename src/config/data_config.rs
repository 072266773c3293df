//! 실행 환경, 서버, 저장소 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 및 패스워드 해싱 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우 `Development`를 사용합니다.
    /// 인메모리 저장소가 기본값이므로 별도 설정 없이 바로 실행할 수 있도록 합니다.
    pub fn current() -> Self {
        Self::parse(&env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`으로 취급합니다.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 값이면 그대로 사용하고,
    /// 그렇지 않으면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10
    /// - Production: 12
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트. 기본값: 8080
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소. 기본값: "0.0.0.0"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// HTTP 워커 스레드 수. 기본값: 4
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n: &usize| *n > 0)
            .unwrap_or(4)
    }

    /// CORS 허용 Origin 목록
    ///
    /// `CORS_ALLOWED_ORIGINS`를 콤마로 분리하여 읽습니다.
    /// 설정이 없으면 로컬 개발 서버 주소들을 허용합니다.
    pub fn cors_allowed_origins() -> Vec<String> {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(value) => parse_origin_list(&value),
            Err(_) => vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:8080".to_string(),
                "http://127.0.0.1:8080".to_string(),
            ],
        }
    }

    /// `Forwarded`/`X-Forwarded-*` 헤더로 응답 URL을 만들지 여부. 기본값: false
    ///
    /// 헤더를 덮어쓰는 리버스 프록시 뒤에서 실행할 때만 켭니다.
    pub fn trust_forwarded_headers() -> bool {
        env::var("TRUST_FORWARDED_HEADERS")
            .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes" | "on"))
            .unwrap_or(false)
    }
}

fn parse_origin_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// 저장소 백엔드 종류
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    /// 프로세스 메모리에 저장 (재시작 시 초기화)
    Memory,
    /// MongoDB 영구 저장
    MongoDb,
}

impl StorageBackend {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "mongodb" | "mongo" => StorageBackend::MongoDb,
            _ => StorageBackend::Memory,
        }
    }
}

/// 저장소 설정
pub struct StorageConfig;

impl StorageConfig {
    /// `STORAGE_BACKEND` 환경 변수. 기본값: memory
    pub fn backend() -> StorageBackend {
        StorageBackend::parse(&env::var("STORAGE_BACKEND").unwrap_or_else(|_| "memory".to_string()))
    }

    /// MongoDB 연결 URI. 기본값: "mongodb://localhost:27017"
    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 사용할 데이터베이스 이름. 기본값: "vehicle_api_dev"
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "vehicle_api_dev".to_string())
    }

    /// Redis URL. 설정된 경우에만 차량 조회 캐시가 활성화됩니다.
    pub fn redis_url() -> Option<String> {
        env::var("REDIS_URL").ok().filter(|url| !url.trim().is_empty())
    }

    /// 시작 시 샘플 데이터 적재 여부. 기본값: true
    pub fn seed_data() -> bool {
        env::var("SEED_DATA")
            .map(|v| !matches!(v.to_lowercase().as_str(), "false" | "0" | "no" | "off"))
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse("DEV"), Environment::Development);
        assert_eq!(Environment::parse("test"), Environment::Test);
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_storage_backend_parse() {
        assert_eq!(StorageBackend::parse("mongodb"), StorageBackend::MongoDb);
        assert_eq!(StorageBackend::parse("Mongo"), StorageBackend::MongoDb);
        assert_eq!(StorageBackend::parse("memory"), StorageBackend::Memory);
        assert_eq!(StorageBackend::parse(""), StorageBackend::Memory);
    }

    #[test]
    fn test_origin_list_parsing() {
        let origins = parse_origin_list(" http://a.test , ,http://b.test");
        assert_eq!(origins, vec!["http://a.test".to_string(), "http://b.test".to_string()]);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }
}
