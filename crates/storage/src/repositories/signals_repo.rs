use common::models::{Signal, SignalFields};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct SignalsRepository;

impl SignalsRepository {
    pub async fn fetch_all(pool: &SqlitePool) -> Result<Vec<Signal>, sqlx::Error> {
        sqlx::query(
            r#"
                SELECT id, entry_date, stock_name, entry_price, target, stop_loss,
                       exit_date, points, profit_money, status
                FROM signals
                ORDER BY entry_date DESC
            "#,
        )
        .try_map(from_row)
        .fetch_all(pool)
        .await
    }

    pub async fn fetch_by_status(
        pool: &SqlitePool,
        status: &str,
    ) -> Result<Vec<Signal>, sqlx::Error> {
        sqlx::query(
            r#"
                SELECT id, entry_date, stock_name, entry_price, target, stop_loss,
                       exit_date, points, profit_money, status
                FROM signals
                WHERE status = ?
                ORDER BY entry_date DESC
            "#,
        )
        .bind(status)
        .try_map(from_row)
        .fetch_all(pool)
        .await
    }

    pub async fn insert(pool: &SqlitePool, fields: &SignalFields) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
                INSERT INTO signals (
                    entry_date, stock_name, entry_price, target, stop_loss,
                    exit_date, points, profit_money, status
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                RETURNING id
            "#,
        )
        .bind(fields.entry_date)
        .bind(&fields.stock_name)
        .bind(fields.entry_price)
        .bind(fields.target)
        .bind(fields.stop_loss)
        .bind(fields.exit_date)
        .bind(fields.points)
        .bind(fields.profit_money)
        .bind(&fields.status)
        .fetch_one(pool)
        .await
    }

    /// Full overwrite of every mutable column. Returns the number of rows
    /// touched; zero means the id does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        fields: &SignalFields,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
                UPDATE signals SET
                    entry_date = ?, stock_name = ?, entry_price = ?, target = ?,
                    stop_loss = ?, exit_date = ?, points = ?, profit_money = ?, status = ?
                WHERE id = ?
            "#,
        )
        .bind(fields.entry_date)
        .bind(&fields.stock_name)
        .bind(fields.entry_price)
        .bind(fields.target)
        .bind(fields.stop_loss)
        .bind(fields.exit_date)
        .bind(fields.points)
        .bind(fields.profit_money)
        .bind(&fields.status)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM signals WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

fn from_row(row: SqliteRow) -> Result<Signal, sqlx::Error> {
    Ok(Signal {
        id: row.try_get("id")?,
        entry_date: row.try_get("entry_date")?,
        stock_name: row.try_get("stock_name")?,
        entry_price: row.try_get("entry_price")?,
        target: row.try_get("target")?,
        stop_loss: row.try_get("stop_loss")?,
        exit_date: row.try_get("exit_date")?,
        points: row.try_get("points")?,
        profit_money: row.try_get("profit_money")?,
        status: row.try_get("status")?,
    })
}
