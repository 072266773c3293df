//! 초기 데이터 적재
//!
//! 차량 저장소가 비어 있으면 기본 차량을 저장하고, 기본 계정이 없으면 생성합니다.
//! 여러 번 실행해도 데이터가 중복되지 않습니다.
//!
//! | 사용자명 | 비밀번호 | 권한 |
//! |----------|----------|------|
//! | `user` | `password` | `ROLE_USER` |
//! | `admin` | `password` | `ROLE_USER`, `ROLE_ADMIN` |

use log::{debug, info};

use crate::domain::entities::users::{ROLE_ADMIN, ROLE_USER};
use crate::domain::entities::Vehicle;
use crate::errors::AppResult;
use crate::state::AppState;

const DEFAULT_VEHICLES: [&str; 2] = ["moto", "car"];
const DEFAULT_PASSWORD: &str = "password";

pub struct DataInitializer<'a> {
    state: &'a AppState,
}

impl<'a> DataInitializer<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub async fn run(&self) -> AppResult<()> {
        self.seed_vehicles().await?;
        self.seed_users().await?;
        Ok(())
    }

    async fn seed_vehicles(&self) -> AppResult<()> {
        debug!("initializing vehicle data...");

        if self.state.vehicles.count().await? == 0 {
            for name in DEFAULT_VEHICLES {
                self.state.vehicles.save(Vehicle::unsaved(name)).await?;
            }
        }

        debug!("printing all vehicles...");
        for vehicle in self.state.vehicles.find_all().await? {
            debug!(" Vehicle :{:?}", vehicle);
        }

        Ok(())
    }

    async fn seed_users(&self) -> AppResult<()> {
        let accounts: [(&str, &[&str]); 2] = [
            ("user", &[ROLE_USER]),
            ("admin", &[ROLE_USER, ROLE_ADMIN]),
        ];

        for (username, roles) in accounts {
            if self
                .state
                .user_details
                .register_if_absent(username, DEFAULT_PASSWORD, roles)
                .await?
            {
                info!("기본 계정 생성: {} {:?}", username, roles);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtSettings;
    use crate::services::auth::PasswordEncoder;

    #[actix_web::test]
    async fn test_seeding_is_idempotent() {
        let state = AppState::in_memory(JwtSettings::default(), PasswordEncoder::new(4));
        let initializer = DataInitializer::new(&state);

        initializer.run().await.unwrap();
        initializer.run().await.unwrap();

        let names: Vec<String> = state.vehicles.find_all().await.unwrap().into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["moto", "car"]);
        assert_eq!(state.users.count().await.unwrap(), 2);

        let admin = state.user_details.authenticate("admin", "password").await.unwrap();
        assert!(admin.has_authority(ROLE_ADMIN));
        let user = state.user_details.authenticate("user", "password").await.unwrap();
        assert!(!user.has_authority(ROLE_ADMIN));
    }

    #[actix_web::test]
    async fn test_existing_vehicles_are_kept() {
        let state = AppState::in_memory(JwtSettings::default(), PasswordEncoder::new(4));
        state.vehicles.save(Vehicle::unsaved("truck")).await.unwrap();

        DataInitializer::new(&state).run().await.unwrap();

        assert_eq!(state.vehicles.count().await.unwrap(), 1);
    }
}
