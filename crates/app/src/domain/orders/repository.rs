//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use railmeal::orders::OrderSummary;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, types::Json};

use crate::{
    domain::orders::{data::NewOrderRecord, records::OrderRecord},
    pnr::Pnr,
};

const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const UPDATE_ORDER_SUMMARY_SQL: &str = include_str!("sql/update_order_summary.sql");
const DELETE_ORDER_SQL: &str = include_str!("sql/delete_order.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        record: &NewOrderRecord,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(record.pnr.as_str())
            .bind(&record.name)
            .bind(&record.phone_number)
            .bind(record.contact_on_whatsapp)
            .bind(record.email.as_deref())
            .bind(&record.berth_number)
            .bind(&record.seat_number)
            .bind(record.payment_method.as_str())
            .bind(&record.selected_station)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        pnr: &Pnr,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(pnr.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_order_summary(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        pnr: &Pnr,
        summary: &OrderSummary,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_ORDER_SUMMARY_SQL)
            .bind(pnr.as_str())
            .bind(Json(summary))
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        pnr: &Pnr,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ORDER_SQL)
            .bind(pnr.as_str())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

fn decode_error(
    column: &str,
    source: impl std::error::Error + Send + Sync + 'static,
) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(source),
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let pnr: String = row.try_get("pnr")?;
        let payment_method: String = row.try_get("payment_method")?;

        Ok(Self {
            pnr: Pnr::parse(&pnr).map_err(|e| decode_error("pnr", e))?,
            name: row.try_get("name")?,
            phone_number: row.try_get("phone_number")?,
            contact_on_whatsapp: row.try_get("contact_on_whatsapp")?,
            email: row.try_get("email")?,
            berth_number: row.try_get("berth_number")?,
            seat_number: row.try_get("seat_number")?,
            payment_method: payment_method
                .parse()
                .map_err(|e| decode_error("payment_method", e))?,
            selected_station: row.try_get("selected_station")?,
            order_summary: row
                .try_get::<Option<Json<OrderSummary>>, _>("order_summary")?
                .map(|Json(summary)| summary),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
