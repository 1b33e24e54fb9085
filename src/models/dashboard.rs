//! Modelos del dashboard
//!
//! Filas agregadas que devuelven las consultas del dashboard y el resumen
//! que se entrega a la API. Nada de esto se persiste.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Totales financieros de las operaciones filtradas
#[derive(Debug, Clone, Default, FromRow)]
pub struct FinancialTotals {
    pub total_revenue: Option<Decimal>,
    pub total_cost: Option<Decimal>,
}

/// Cantidad de operaciones por empresa (gráfico)
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct CompanyOperationCount {
    pub name: String,
    pub count: i64,
}

/// Operación reciente (tabla)
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RecentOperation {
    pub id: i32,
    pub company_name: String,
    pub date: NaiveDateTime,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
}

/// Resumen del dashboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_operations: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_profit: Decimal,
    pub ops_by_company: Vec<CompanyOperationCount>,
    pub recent_operations: Vec<RecentOperation>,
}

impl DashboardSummary {
    /// Armar el resumen: sumas ausentes cuentan como cero
    pub fn from_parts(
        total_operations: i64,
        totals: FinancialTotals,
        ops_by_company: Vec<CompanyOperationCount>,
        recent_operations: Vec<RecentOperation>,
    ) -> Self {
        let total_revenue = totals.total_revenue.unwrap_or(Decimal::ZERO);
        let total_cost = totals.total_cost.unwrap_or(Decimal::ZERO);

        Self {
            total_operations,
            total_revenue,
            total_cost,
            net_profit: total_revenue - total_cost,
            ops_by_company,
            recent_operations,
        }
    }
}
