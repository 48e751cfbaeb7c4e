use std::path::Path;

use common::models::{Signal, SignalDraft};
use sqlx::SqlitePool;
use tracing::debug;

use crate::db;
use crate::error::StoreError;
use crate::repositories::SignalsRepository;

/// Handle to the durable signal table. Constructed once at startup and handed
/// to whatever presentation layer sits on top; there is no ambient global.
///
/// Every mutation is a single statement committed before the call returns, so
/// callers never observe partial writes.
pub struct SignalStore {
    pool: SqlitePool,
}

impl SignalStore {
    pub async fn open(db_path: &Path) -> Result<Self, StoreError> {
        let pool = db::connect(db_path).await?;
        Ok(Self { pool })
    }

    pub async fn open_in_memory() -> Result<Self, StoreError> {
        let pool = db::connect_in_memory().await?;
        Ok(Self { pool })
    }

    /// All signals, newest entry date first.
    pub async fn list(&self) -> Result<Vec<Signal>, StoreError> {
        Ok(SignalsRepository::fetch_all(&self.pool).await?)
    }

    /// Signals whose status matches exactly, newest entry date first.
    pub async fn list_by_status(&self, status: &str) -> Result<Vec<Signal>, StoreError> {
        Ok(SignalsRepository::fetch_by_status(&self.pool, status).await?)
    }

    /// Validates the draft, inserts it, and returns the assigned id.
    /// Ids are assigned once and never reused, even after deletes.
    pub async fn add(&self, draft: &SignalDraft) -> Result<i64, StoreError> {
        let fields = draft.validate()?;
        let id = SignalsRepository::insert(&self.pool, &fields).await?;
        debug!("added signal {} ({})", id, fields.stock_name);
        Ok(id)
    }

    /// Validates the draft and replaces every mutable field of the record.
    /// This is a full overwrite, not a patch.
    pub async fn update(&self, id: i64, draft: &SignalDraft) -> Result<(), StoreError> {
        let fields = draft.validate()?;
        let affected = SignalsRepository::update(&self.pool, id, &fields).await?;
        if affected == 0 {
            return Err(StoreError::NotFound);
        }
        debug!("updated signal {} ({})", id, fields.stock_name);
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let affected = SignalsRepository::delete(&self.pool, id).await?;
        if affected == 0 {
            return Err(StoreError::NotFound);
        }
        debug!("deleted signal {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use common::error::ValidationError;

    fn draft(entry_date: &str, stock_name: &str, status: &str) -> SignalDraft {
        SignalDraft {
            entry_date: Some(entry_date.into()),
            stock_name: Some(stock_name.into()),
            entry_price: Some(150.0),
            target: Some(160.0),
            stop_loss: Some(145.0),
            status: Some(status.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn add_round_trips_through_list() {
        let store = SignalStore::open_in_memory().await.unwrap();
        let id = store.add(&draft("16/10/2025", "AAPL", "Active")).await.unwrap();

        let signals = store.list().await.unwrap();
        assert_eq!(signals.len(), 1);
        let signal = &signals[0];
        assert_eq!(signal.id, id);
        assert_eq!(signal.entry_date, NaiveDate::from_ymd_opt(2025, 10, 16).unwrap());
        assert_eq!(signal.stock_name, "AAPL");
        assert_eq!(signal.entry_price, 150.0);
        assert_eq!(signal.target, 160.0);
        assert_eq!(signal.stop_loss, 145.0);
        assert_eq!(signal.status, "Active");
        assert_eq!(signal.exit_date, None);
        assert_eq!(signal.points, None);
        assert_eq!(signal.profit_money, None);
    }

    #[tokio::test]
    async fn add_preserves_optional_fields_when_supplied() {
        let store = SignalStore::open_in_memory().await.unwrap();
        let mut input = draft("16/10/2025", "MSFT", "Closed");
        input.exit_date = Some("20/10/2025".into());
        input.points = Some(10.0);
        input.profit_money = Some(250.5);
        store.add(&input).await.unwrap();

        let signal = store.list().await.unwrap().remove(0);
        assert_eq!(
            signal.exit_date,
            Some(NaiveDate::from_ymd_opt(2025, 10, 20).unwrap())
        );
        assert_eq!(signal.points, Some(10.0));
        assert_eq!(signal.profit_money, Some(250.5));
    }

    #[tokio::test]
    async fn add_rejects_missing_required_fields() {
        let store = SignalStore::open_in_memory().await.unwrap();
        let mut input = draft("16/10/2025", "AAPL", "Active");
        input.target = None;

        let err = store.add(&input).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::MissingFields)
        ));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_rejects_bad_date_format() {
        let store = SignalStore::open_in_memory().await.unwrap();
        let err = store
            .add(&draft("2025-10-16", "AAPL", "Active"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::InvalidDate)
        ));
    }

    #[tokio::test]
    async fn list_orders_newest_entry_date_first() {
        let store = SignalStore::open_in_memory().await.unwrap();
        store.add(&draft("10/10/2025", "OLD", "Active")).await.unwrap();
        store.add(&draft("16/10/2025", "NEW", "Active")).await.unwrap();
        store.add(&draft("12/10/2025", "MID", "Closed")).await.unwrap();

        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.stock_name)
            .collect();
        assert_eq!(names, ["NEW", "MID", "OLD"]);
    }

    #[tokio::test]
    async fn list_by_status_is_exact_match_subset_in_same_order() {
        let store = SignalStore::open_in_memory().await.unwrap();
        store.add(&draft("10/10/2025", "A", "Active")).await.unwrap();
        store.add(&draft("16/10/2025", "B", "Closed")).await.unwrap();
        store.add(&draft("12/10/2025", "C", "Active")).await.unwrap();
        store.add(&draft("11/10/2025", "D", "active")).await.unwrap();

        let active = store.list_by_status("Active").await.unwrap();
        let names: Vec<_> = active.iter().map(|s| s.stock_name.as_str()).collect();
        assert_eq!(names, ["C", "A"]);

        let all_active: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .filter(|s| s.status == "Active")
            .map(|s| s.stock_name)
            .collect();
        assert_eq!(all_active, ["C", "A"]);
    }

    #[tokio::test]
    async fn update_replaces_every_field_and_closing_removes_from_active() {
        let store = SignalStore::open_in_memory().await.unwrap();
        let id = store.add(&draft("16/10/2025", "AAPL", "Active")).await.unwrap();

        let mut closed = draft("16/10/2025", "AAPL", "Closed");
        closed.exit_date = Some("20/10/2025".into());
        closed.points = Some(10.0);
        store.update(id, &closed).await.unwrap();

        assert!(store.list_by_status("Active").await.unwrap().is_empty());
        let signal = store.list().await.unwrap().remove(0);
        assert_eq!(signal.id, id);
        assert_eq!(signal.status, "Closed");
        assert_eq!(
            signal.exit_date,
            Some(NaiveDate::from_ymd_opt(2025, 10, 20).unwrap())
        );
        assert_eq!(signal.points, Some(10.0));
    }

    #[tokio::test]
    async fn update_overwrite_clears_omitted_optionals() {
        let store = SignalStore::open_in_memory().await.unwrap();
        let mut input = draft("16/10/2025", "AAPL", "Closed");
        input.points = Some(5.0);
        let id = store.add(&input).await.unwrap();

        store
            .update(id, &draft("16/10/2025", "AAPL", "Active"))
            .await
            .unwrap();
        let signal = store.list().await.unwrap().remove(0);
        assert_eq!(signal.points, None);
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found_and_changes_nothing() {
        let store = SignalStore::open_in_memory().await.unwrap();
        let id = store.add(&draft("16/10/2025", "AAPL", "Active")).await.unwrap();

        let err = store
            .update(id + 1, &draft("01/01/2025", "XXXX", "Closed"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound));

        let signals = store.list().await.unwrap();
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].stock_name, "AAPL");
        assert_eq!(signals[0].status, "Active");
    }

    #[tokio::test]
    async fn update_validates_before_touching_the_record() {
        let store = SignalStore::open_in_memory().await.unwrap();
        let id = store.add(&draft("16/10/2025", "AAPL", "Active")).await.unwrap();

        let err = store
            .update(id, &draft("garbage", "AAPL", "Active"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::InvalidDate)
        ));
        assert_eq!(store.list().await.unwrap()[0].status, "Active");
    }

    #[tokio::test]
    async fn delete_twice_fails_the_second_time() {
        let store = SignalStore::open_in_memory().await.unwrap();
        let id = store.add(&draft("16/10/2025", "AAPL", "Active")).await.unwrap();

        store.delete(id).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());

        let err = store.delete(id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn ids_are_never_reused_after_delete() {
        let store = SignalStore::open_in_memory().await.unwrap();
        let first = store.add(&draft("16/10/2025", "AAPL", "Active")).await.unwrap();
        store.delete(first).await.unwrap();

        let second = store.add(&draft("17/10/2025", "MSFT", "Active")).await.unwrap();
        assert!(second > first);
    }
}
