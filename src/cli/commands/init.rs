use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing studylog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    println!("✅ Database initialized at {}", &db_path);

    if let Err(e) = log::ttlog(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    println!("🎉 studylog initialization completed!");
    Ok(())
}
