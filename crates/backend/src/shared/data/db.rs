use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Схема таблиц контента: (имя таблицы, DDL)
const TABLES: &[(&str, &str)] = &[
    (
        "a001_team_member",
        r#"
        CREATE TABLE a001_team_member (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            slug TEXT NOT NULL,
            role TEXT NOT NULL,
            bio TEXT NOT NULL DEFAULT '',
            image_url TEXT,
            linkedin_url TEXT,
            published INTEGER NOT NULL DEFAULT 0,
            position INTEGER,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a002_timeline_entry",
        r#"
        CREATE TABLE a002_timeline_entry (
            id TEXT PRIMARY KEY NOT NULL,
            year TEXT NOT NULL,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            published INTEGER NOT NULL DEFAULT 0,
            position INTEGER,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a003_project",
        r#"
        CREATE TABLE a003_project (
            id TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            slug TEXT NOT NULL,
            summary TEXT NOT NULL DEFAULT '',
            content TEXT NOT NULL DEFAULT '',
            image_url TEXT,
            client_name TEXT,
            project_url TEXT,
            technologies TEXT NOT NULL DEFAULT '[]',
            categories TEXT,
            featured INTEGER NOT NULL DEFAULT 0,
            published INTEGER NOT NULL DEFAULT 0,
            position INTEGER,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a004_testimonial",
        r#"
        CREATE TABLE a004_testimonial (
            id TEXT PRIMARY KEY NOT NULL,
            author_name TEXT NOT NULL,
            author_role TEXT NOT NULL DEFAULT '',
            company TEXT NOT NULL DEFAULT '',
            message TEXT NOT NULL,
            rating INTEGER NOT NULL DEFAULT 5,
            avatar_url TEXT,
            verified INTEGER NOT NULL DEFAULT 0,
            published INTEGER NOT NULL DEFAULT 0,
            position INTEGER,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a005_client",
        r#"
        CREATE TABLE a005_client (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            slug TEXT NOT NULL,
            logo_url TEXT,
            website_url TEXT,
            published INTEGER NOT NULL DEFAULT 0,
            position INTEGER,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
];

/// Строка подключения SQLite для файла БД
pub fn database_url(db_file: &Path) -> anyhow::Result<String> {
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db_url = database_url(db_file)?;
    tracing::info!("Opening database: {}", db_url);
    let conn = Database::connect(&db_url).await?;

    ensure_tables(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Создать отсутствующие таблицы (минимальный bootstrap схемы)
pub async fn ensure_tables(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for (table, ddl) in TABLES {
        let check = format!(
            "SELECT name FROM sqlite_master WHERE type='table' AND name='{}';",
            table
        );
        let existing = conn
            .query_all(Statement::from_string(DatabaseBackend::Sqlite, check))
            .await?;

        if existing.is_empty() {
            tracing::info!("Creating {} table", table);
            conn.execute(Statement::from_string(
                DatabaseBackend::Sqlite,
                ddl.to_string(),
            ))
            .await?;
        }
    }
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_team_member::aggregate::TeamMember;
    use contracts::domain::a002_timeline_entry::aggregate::TimelineEntry;
    use contracts::domain::a003_project::aggregate::Project;
    use contracts::domain::a004_testimonial::aggregate::Testimonial;
    use contracts::domain::a005_client::aggregate::Client;
    use contracts::domain::common::AggregateRoot;

    #[test]
    fn test_table_names_follow_aggregates() {
        let names: Vec<String> = TABLES.iter().map(|(name, _)| name.to_string()).collect();
        assert_eq!(
            names,
            vec![
                TeamMember::table_name(),
                TimelineEntry::table_name(),
                Project::table_name(),
                Testimonial::table_name(),
                Client::table_name(),
            ]
        );
    }

    #[test]
    fn test_database_url_for_absolute_path() {
        let url = database_url(Path::new("/var/lib/site/app.db")).unwrap();
        assert_eq!(url, "sqlite:///var/lib/site/app.db?mode=rwc");
    }

    #[test]
    fn test_every_table_has_soft_delete_and_ordering_columns() {
        for (name, ddl) in TABLES {
            assert!(ddl.contains(&format!("CREATE TABLE {}", name)));
            assert!(ddl.contains("is_deleted"), "{}", name);
            assert!(ddl.contains("position INTEGER"), "{}", name);
            assert!(ddl.contains("published"), "{}", name);
        }
    }

    #[tokio::test]
    async fn test_ensure_tables_is_idempotent() {
        let conn = Database::connect("sqlite::memory:").await.unwrap();
        ensure_tables(&conn).await.unwrap();
        ensure_tables(&conn).await.unwrap();

        let rows = conn
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type='table';".to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(rows.len(), TABLES.len());
    }
}
