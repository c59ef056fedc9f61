use colored::*;
use db::{DbError, MetricStore};
use futures::FutureExt;
use std::io::{self, Write};
use std::pin::Pin;
use std::time::{Duration, Instant};

const STATUS_COLUMN: usize = 80;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Store(#[from] DbError),

    #[error("failed to seed random number generator: {0}")]
    RandomGeneration(#[from] rand::Error),
}

pub trait Seeder {
    fn seed<'a>(
        &'a self,
        store: &'a dyn MetricStore,
    ) -> Pin<Box<dyn Future<Output = Result<(), SeedError>> + Send + 'a>>;
}

/// Runs one seeder, printing a status line, and hands back its result.
pub async fn run_seeder<S: Seeder + ?Sized>(
    seeder: &S,
    name: &str,
    store: &dyn MetricStore,
) -> Result<Duration, SeedError> {
    let base_msg = format!("Seeding {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    print!("{}{} ", base_msg, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    let outcome = std::panic::AssertUnwindSafe(seeder.seed(store))
        .catch_unwind()
        .await;

    match outcome {
        Ok(Ok(())) => {
            let elapsed = start.elapsed();
            let time_str = format!("({:.2?})", elapsed).dimmed();
            println!("{} {}", "done".green(), time_str);
            Ok(elapsed)
        }
        Ok(Err(err)) => {
            println!("{}", "failed".red());
            Err(err)
        }
        Err(panic) => {
            println!("{}", "failed".red());
            std::panic::resume_unwind(panic)
        }
    }
}
