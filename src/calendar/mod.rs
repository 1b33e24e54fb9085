//! Motor de layout del calendario semanal
//!
//! Calcula la geometría en píxeles de cada operación dentro de una grilla
//! de 7 días × 24 horas y maneja el redimensionado interactivo de bloques.

pub mod layout;
pub mod resize;
pub mod session;
pub mod week;

use serde::Serialize;

pub use layout::{layout_week, parse_duration_hours, EventGeometry, EventLayout, ViewState};
pub use resize::{LiveGeometry, ResizeCommit, ResizeDirection, ResizeState};
pub use session::{CalendarSession, CommitOutcome, OperationStore, PendingCommit};
pub use week::WeekWindow;

/// Dimensiones de la grilla en píxeles
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarConfig {
    /// Altura que representa una hora
    pub hour_height: f64,
    /// Altura mínima de un bloque durante un resize
    pub min_event_height: f64,
    /// Ancho de la columna de etiquetas horarias
    pub gutter_width: f64,
    /// Ancho total de la grilla, gutter incluido
    pub grid_width: f64,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            hour_height: 80.0,
            min_event_height: 20.0,
            gutter_width: 64.0,
            grid_width: 1184.0,
        }
    }
}

impl CalendarConfig {
    /// Ancho de cada una de las 7 columnas de día
    pub fn column_width(&self) -> f64 {
        ((self.grid_width - self.gutter_width) / 7.0).max(0.0)
    }

    /// Borde izquierdo de la columna `day` (0 = domingo)
    pub fn column_left(&self, day: u32) -> f64 {
        self.gutter_width + f64::from(day) * self.column_width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_split_remaining_width() {
        let config = CalendarConfig::default();
        assert_eq!(config.column_width(), 160.0);
        assert_eq!(config.column_left(0), 64.0);
        assert_eq!(config.column_left(6), 64.0 + 6.0 * 160.0);
    }
}
