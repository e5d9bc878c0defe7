//! Migrate command - Applies or inspects the concert schema.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config).await?;

    match args.action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            tracing::info!("Concert schema is up to date");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            tracing::info!("Reverted the latest migration");
        }
        MigrateAction::Status => {
            let migrations = db.migration_status().await?;
            print!("{}", status_report(&migrations));
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables before re-applying migrations");
            db.fresh_migrations().await?;
            tracing::info!("Concert schema recreated");
        }
    }

    Ok(())
}

/// One line per migration followed by a pending count.
fn status_report(migrations: &[(String, bool)]) -> String {
    let mut report = String::new();
    for (name, applied) in migrations {
        let mark = if *applied { "applied" } else { "pending" };
        report.push_str(&format!("[{}] {}\n", mark, name));
    }

    let pending = migrations.iter().filter(|(_, applied)| !applied).count();
    report.push_str(&format!("{} of {} pending\n", pending, migrations.len()));
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_report_lists_each_migration_and_pending_count() {
        let report = status_report(&[
            ("m20240101_000001_create_concerts_table".to_string(), true),
            ("m20240201_000001_add_index".to_string(), false),
        ]);

        assert_eq!(
            report,
            "[applied] m20240101_000001_create_concerts_table\n\
             [pending] m20240201_000001_add_index\n\
             1 of 2 pending\n"
        );
    }

    #[test]
    fn status_report_handles_no_migrations() {
        assert_eq!(status_report(&[]), "0 of 0 pending\n");
    }
}
