use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{pending_migrations, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        if !(*migrate || *check || *vacuum || *show_info) {
            info("Nothing to do. Use --migrate, --check, --vacuum or --info.");
            return Ok(());
        }

        // migrations are explicit here, so open without applying them
        let pool = DbPool::new(&cfg.database)?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            let pending = pending_migrations(&pool.conn)?;
            if pending.is_empty() {
                println!("{}✔ No pending migrations.{}\n", GREEN, RESET);
            } else {
                println!("{}▶ Running migrations…{}", CYAN, RESET);
                for name in &pending {
                    println!("    {name}");
                }
                let applied = run_pending_migrations(&pool.conn)?;
                println!("{}✔ {} migration(s) applied.{}\n", GREEN, applied, RESET);
            }
        }

        //
        // 2) INFO
        //
        if *show_info {
            run_pending_migrations(&pool.conn)?;
            stats::print_db_info(&pool, &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
