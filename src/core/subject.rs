use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_subject, find_subject, insert_subject, load_subjects, update_subject};
use crate::errors::AppResult;
use crate::models::subject::{Subject, normalize_color, required_name};
use crate::ui::messages::{info, success};
use crate::utils::colors::swatch;
use crate::utils::table::Table;

/// Business logic for the `subject` command.
pub struct SubjectLogic;

impl SubjectLogic {
    pub fn add(pool: &mut DbPool, cfg: &Config, name: &str, color: Option<&str>) -> AppResult<i64> {
        let name = required_name(name, "Subject")?;
        let color = normalize_color(color.unwrap_or(&cfg.default_subject_color))?;

        let id = insert_subject(&pool.conn, &name, &color)?;
        audit(&pool.conn, "add", &format!("subject #{id}"), &format!("Added subject '{name}'"));

        success(format!("Subject #{id} '{name}' added."));
        Ok(id)
    }

    pub fn edit(
        pool: &mut DbPool,
        id: i64,
        name: Option<&str>,
        color: Option<&str>,
    ) -> AppResult<Subject> {
        let mut subject = find_subject(&pool.conn, id)?;

        if let Some(n) = name {
            subject.name = required_name(n, "Subject")?;
        }
        if let Some(c) = color {
            subject.color = normalize_color(c)?;
        }

        update_subject(&pool.conn, &subject)?;
        audit(
            &pool.conn,
            "edit",
            &format!("subject #{id}"),
            &format!("name='{}' color={}", subject.name, subject.color),
        );

        success(format!("Subject #{id} updated."));
        Ok(subject)
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        let subject = find_subject(&pool.conn, id)?;
        delete_subject(&pool.conn, id)?;
        audit(
            &pool.conn,
            "del",
            &format!("subject #{id}"),
            &format!("Deleted subject '{}'", subject.name),
        );

        success(format!("Subject #{id} '{}' deleted.", subject.name));
        Ok(())
    }

    pub fn print_list(pool: &DbPool) -> AppResult<()> {
        let subjects = load_subjects(pool)?;
        if subjects.is_empty() {
            info("No subjects yet. Add one with `studylog subject add <NAME>`.");
            return Ok(());
        }

        let mut table = Table::with_headers(&["ID", "NAME", "COLOR"]);
        for s in &subjects {
            table.add_row(vec![s.id.to_string(), s.name.clone(), s.color.clone()]);
        }
        println!("📚 Subjects:\n");
        print!("{}", table.render());

        println!();
        for s in &subjects {
            println!("  {}  {}", swatch(&s.color), s.name);
        }
        Ok(())
    }
}
