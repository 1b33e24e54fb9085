//! Servicio de agregación del dashboard
//!
//! El predicado de filtro se construye una sola vez (fragmento SQL con el
//! alias `o` + lista de parámetros) y se liga de la misma forma en las
//! cuatro consultas, así todas ven exactamente las mismas filas.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgPool, Postgres};

use crate::models::dashboard::{CompanyOperationCount, DashboardSummary, FinancialTotals, RecentOperation};
use crate::utils::errors::AppResult;

/// Cuántas filas devuelven los rankings del dashboard
pub const TOP_LIMIT: i64 = 5;

/// Filtros opcionales del dashboard; `end_date` incluye el día completo
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub driver_id: Option<i32>,
}

impl DashboardFilter {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none() && self.driver_id.is_none()
    }

    /// Construir el predicado compartido
    pub fn predicate(&self) -> FilterPredicate {
        let mut predicate = FilterPredicate::default();

        if let Some(start) = self.start_date {
            predicate.push("o.operation_date >=", FilterParam::Timestamp(start.and_time(NaiveTime::MIN)));
        }
        // Sin día siguiente representable no hay cota superior
        if let Some(end) = self.end_date.and_then(|end| end.succ_opt()) {
            predicate.push("o.operation_date <", FilterParam::Timestamp(end.and_time(NaiveTime::MIN)));
        }
        if let Some(driver_id) = self.driver_id {
            predicate.push("o.driver_id =", FilterParam::Int(driver_id));
        }

        predicate
    }
}

/// Valor ligado a un placeholder del predicado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterParam {
    Timestamp(NaiveDateTime),
    Int(i32),
}

/// Cláusula WHERE y sus parámetros, en orden de placeholder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPredicate {
    conditions: Vec<String>,
    params: Vec<FilterParam>,
}

impl FilterPredicate {
    fn push(&mut self, condition: &str, param: FilterParam) {
        self.params.push(param);
        self.conditions.push(format!("{} ${}", condition, self.params.len()));
    }

    /// `WHERE ...` o cadena vacía si no hay filtros
    pub fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.conditions.join(" AND "))
        }
    }

    pub fn params(&self) -> &[FilterParam] {
        &self.params
    }

    /// Ligar los parámetros del predicado a una consulta
    pub fn bind_to<'q, O>(
        &self,
        mut query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        for param in &self.params {
            query = match *param {
                FilterParam::Timestamp(value) => query.bind(value),
                FilterParam::Int(value) => query.bind(value),
            };
        }
        query
    }
}

/// SQL de las cuatro consultas, todas sobre el mismo predicado
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardQueries {
    pub count: String,
    pub totals: String,
    pub by_company: String,
    pub recent: String,
}

impl DashboardQueries {
    pub fn new(predicate: &FilterPredicate) -> Self {
        let where_clause = predicate.where_clause();

        Self {
            count: format!("SELECT COUNT(*) FROM operations o {}", where_clause),
            totals: format!(
                "SELECT SUM(o.operation_value) AS total_revenue, \
                 SUM(o.driver_value + o.support_value + o.toll) AS total_cost \
                 FROM operations o {}",
                where_clause
            ),
            by_company: format!(
                "SELECT c.name, COUNT(o.id) AS count \
                 FROM operations o JOIN companies c ON c.id = o.company_id {} \
                 GROUP BY c.id, c.name ORDER BY count DESC, c.name ASC LIMIT {}",
                where_clause, TOP_LIMIT
            ),
            recent: format!(
                "SELECT o.id, c.name AS company_name, o.operation_date AS date, o.operation_value AS value \
                 FROM operations o JOIN companies c ON c.id = o.company_id {} \
                 ORDER BY o.operation_date DESC, o.id DESC LIMIT {}",
                where_clause, TOP_LIMIT
            ),
        }
    }
}

pub struct DashboardService {
    pool: PgPool,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Resumen del dashboard. Si cualquier consulta falla, falla todo.
    pub async fn get_summary(&self, filter: &DashboardFilter) -> AppResult<DashboardSummary> {
        let predicate = filter.predicate();
        let queries = DashboardQueries::new(&predicate);

        tracing::debug!("📊 Dashboard con filtros {:?}", filter);

        let (count, totals, by_company, recent) = futures::try_join!(
            fetch_one::<(i64,)>(&self.pool, &queries.count, &predicate),
            fetch_one::<FinancialTotals>(&self.pool, &queries.totals, &predicate),
            fetch_all::<CompanyOperationCount>(&self.pool, &queries.by_company, &predicate),
            fetch_all::<RecentOperation>(&self.pool, &queries.recent, &predicate),
        )?;

        Ok(DashboardSummary::from_parts(count.0, totals, by_company, recent))
    }
}

async fn fetch_one<O>(pool: &PgPool, sql: &str, predicate: &FilterPredicate) -> Result<O, sqlx::Error>
where
    O: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    predicate.bind_to(sqlx::query_as::<_, O>(sql)).fetch_one(pool).await
}

async fn fetch_all<O>(pool: &PgPool, sql: &str, predicate: &FilterPredicate) -> Result<Vec<O>, sqlx::Error>
where
    O: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    predicate.bind_to(sqlx::query_as::<_, O>(sql)).fetch_all(pool).await
}
