pub mod model;
pub mod store;

use model::{game, player};
use sea_orm::{ConnectionTrait, DbConn, DbErr, EntityName, EntityTrait, Schema};
use tracing::debug;

use crate::config::DatabaseConfig;

pub fn build_database_conn_string(cfg: &DatabaseConfig) -> String {
    if let Some(url) = &cfg.url {
        return url.to_string();
    }

    let mut conn_string = format!("{}://", cfg.proto);
    if !cfg.user.is_empty() {
        conn_string.push_str(&cfg.user);
        if !cfg.password.is_empty() {
            conn_string.push(':');
            conn_string.push_str(&cfg.password);
        }
        conn_string.push('@');
    }
    if !cfg.host.is_empty() {
        conn_string.push_str(&cfg.host);
        if !cfg.port.is_empty() {
            conn_string.push(':');
            conn_string.push_str(&cfg.port);
        }
    }
    if cfg.proto != "sqlite" {
        // sqlite does not connect to a host, everything else needs the slash
        conn_string.push('/');
    }
    conn_string.push_str(&cfg.name);
    if !cfg.params.is_empty() {
        conn_string.push('?');
        conn_string.push_str(&cfg.params);
    }
    conn_string
}

async fn create_table<E: EntityTrait>(db: &DbConn, entity: E) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    debug!(target: "store", "Table {} ready", entity.table_name());
    Ok(())
}

pub async fn create_tables(db: &DbConn) -> Result<(), DbErr> {
    create_table(db, player::Entity).await?;
    create_table(db, game::Entity).await?;
    Ok(())
}
