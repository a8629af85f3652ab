
use crate::model::{Error, ModelManager, Result};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Postgres};

/// Contract between an entity controller and its backing table.
/// `COLUMNS` is the select list; column names are compile-time
/// constants, never caller input.
pub trait DbBmc {
    const TABLE: &'static str;
    const ENTITY: &'static str;
    const COLUMNS: &'static str;
}

#[derive(Clone, Copy, Debug)]
pub enum OrderDir {
    Asc,
    Desc,
}

impl OrderDir {
    fn as_sql(&self) -> &'static str {
        match self {
            OrderDir::Asc => "ASC",
            OrderDir::Desc => "DESC",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct OrderBy {
    pub column: &'static str,
    pub dir: OrderDir,
}

/// Single equality predicate on one column.
#[derive(Clone, Debug)]
pub struct ListFilter {
    pub column: &'static str,
    pub value: String,
}

fn select_sql<MC: DbBmc>(filter: Option<&ListFilter>, order: Option<&OrderBy>) -> String {
    let mut sql = format!("SELECT {} FROM {}", MC::COLUMNS, MC::TABLE);
    if let Some(filter) = filter {
        sql.push_str(&format!(" WHERE {} = $1", filter.column));
    }
    if let Some(order) = order {
        sql.push_str(&format!(" ORDER BY {} {}", order.column, order.dir.as_sql()));
    }
    sql
}

pub async fn list<MC, E>(
    mm: &ModelManager,
    filter: Option<&ListFilter>,
    order: Option<&OrderBy>,
) -> Result<Vec<E>>
where
    MC: DbBmc,
    E: for<'r> FromRow<'r, PgRow> + Unpin + Send,
{
    let sql = select_sql::<MC>(filter, order);

    let mut query = sqlx::query_as::<_, E>(&sql);
    if let Some(filter) = filter {
        query = query.bind(&filter.value);
    }
    let entities = query.fetch_all(mm.db()).await?;

    Ok(entities)
}

pub async fn get<MC, E, I>(mm: &ModelManager, id: I) -> Result<E>
where
    MC: DbBmc,
    E: for<'r> FromRow<'r, PgRow> + Unpin + Send,
    I: for<'q> sqlx::Encode<'q, Postgres> + sqlx::Type<Postgres> + core::fmt::Display + Send + 'static,
{
    let sql = format!("SELECT {} FROM {} WHERE id = $1", MC::COLUMNS, MC::TABLE);
    let id_str = id.to_string();

    let entity = sqlx::query_as::<_, E>(&sql)
        .bind(id)
        .fetch_optional(mm.db())
        .await?
        .ok_or(Error::EntityNotFound {
            entity: MC::ENTITY,
            id: id_str,
        })?;

    Ok(entity)
}

pub async fn delete<MC, I>(mm: &ModelManager, id: I) -> Result<()>
where
    MC: DbBmc,
    I: for<'q> sqlx::Encode<'q, Postgres> + sqlx::Type<Postgres> + core::fmt::Display + Send + 'static,
{
    let sql = format!("DELETE FROM {} WHERE id = $1", MC::TABLE);
    let id_str = id.to_string();

    let count = sqlx::query(&sql)
        .bind(id)
        .execute(mm.db())
        .await?
        .rows_affected();

    if count == 0 {
        return Err(Error::EntityNotFound {
            entity: MC::ENTITY,
            id: id_str,
        });
    }

    Ok(())
}

pub async fn count<MC: DbBmc>(mm: &ModelManager) -> Result<i64> {
    let sql = format!("SELECT COUNT(*) FROM {}", MC::TABLE);
    let (count,): (i64,) = sqlx::query_as(&sql).fetch_one(mm.db()).await?;

    Ok(count)
}
