//! 차량 REST API 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 저장소와 인증 서비스를 초기화합니다.
//! 기본은 인메모리 저장소이며, `STORAGE_BACKEND=mongodb` 이면 MongoDB와
//! (설정된 경우) Redis를 사용합니다.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use vehicle_api::bootstrap::DataInitializer;
use vehicle_api::config::{ServerConfig, StorageConfig};
use vehicle_api::middlewares::{JwtTokenFilter, SecurityRules};
use vehicle_api::routes::configure_all_routes;
use vehicle_api::state::build_state;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 차량 API 서비스 시작중...");

    let state = build_state().await.map_err(|e| {
        error!("애플리케이션 상태 구성 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    if StorageConfig::seed_data() {
        DataInitializer::new(&state).run().await.map_err(|e| {
            error!("초기 데이터 적재 실패: {}", e);
            std::io::Error::other(e.to_string())
        })?;
    }

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(web::Data::new(state)).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어와 JWT 인증 필터를 포함합니다.
/// `wrap`은 나중에 등록한 것이 바깥쪽에서 먼저 실행됩니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: web::Data<vehicle_api::state::AppState>) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API Docs: http://{}/v3/api-docs", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(JwtTokenFilter::new(SecurityRules::default_rules()))
            .wrap(middleware::NormalizePath::trim())
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 stderr로 출력
    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=vehicle_api::bootstrap=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
    info!(
        "Current profile: {}",
        std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string())
    );
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`에 나열된 Origin만 허용합니다.
fn configure_cors() -> Cors {
    let cors = ServerConfig::cors_allowed_origins()
        .into_iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(&origin));

    cors
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::LOCATION])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
