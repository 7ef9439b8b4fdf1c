use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use std::io::{Write, stdin, stdout};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date, id, yes } = cmd {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        // Deleting a whole day is destructive enough to confirm.
        if id.is_none() && !yes {
            print!("Delete ALL events for {}? [y/N]: ", date);
            stdout().flush().ok();

            let mut answer = String::new();
            stdin().read_line(&mut answer)?;
            let answer = answer.trim().to_lowercase();

            if !(answer == "y" || answer == "yes") {
                println!("❌ Deletion cancelled.");
                return Ok(());
            }
        }

        let mut pool = DbPool::new(&cfg.database)?;
        DeleteLogic::apply(&mut pool, d, *id)?;
    }

    Ok(())
}
