use crate::dto::dashboard_dto::DashboardQuery;
use crate::models::dashboard::DashboardSummary;
use crate::services::dashboard_service::DashboardService;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct DashboardController {
    service: DashboardService,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            service: DashboardService::new(pool),
        }
    }

    pub async fn summary(&self, query: DashboardQuery) -> Result<DashboardSummary, AppError> {
        let filter = query.into_filter()?;
        self.service.get_summary(&filter).await
    }
}
