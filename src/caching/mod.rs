//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 차량 조회 캐시를 제공합니다.
//! MongoDB 저장소를 사용할 때 `REDIS_URL`이 설정된 경우에만 활성화됩니다.
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379
//! ```

pub mod redis;
