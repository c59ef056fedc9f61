use crate::seed::{SeedError, Seeder};
use db::MetricStore;
use db::models::user::{DatabaseUser, RoleGrant};
use log::info;
use std::pin::Pin;

pub const SEED_USER_NAME: &str = "user";
pub const SEED_USER_PASSWORD: &str = "password";

/// Registers the application account as owner of the seeded database.
pub struct UserSeeder {
    user: DatabaseUser,
}

impl UserSeeder {
    pub fn new(database: &str) -> Self {
        Self {
            user: DatabaseUser::new(
                SEED_USER_NAME,
                SEED_USER_PASSWORD,
                vec![RoleGrant::db_owner(database)],
            ),
        }
    }
}

impl Seeder for UserSeeder {
    fn seed<'a>(
        &'a self,
        store: &'a dyn MetricStore,
    ) -> Pin<Box<dyn Future<Output = Result<(), SeedError>> + Send + 'a>> {
        Box::pin(async move {
            // No existence check: a second bootstrap must fail here.
            store.create_user(&self.user).await?;
            info!("Created user {:?}", self.user);
            Ok(())
        })
    }
}
