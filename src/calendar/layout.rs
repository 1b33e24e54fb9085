//! Geometría de los bloques de operación en la grilla semanal

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use super::week::{day_column, WeekWindow};
use super::CalendarConfig;
use crate::models::operation::Operation;

/// Duración usada cuando `estimated_time` falta o no es numérico
pub const DEFAULT_DURATION_HOURS: f64 = 1.0;

/// Estado de vista explícito: semana de referencia y vehículos seleccionados
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub reference_date: NaiveDate,
    pub selected_vehicles: HashSet<i32>,
}

impl ViewState {
    pub fn new(reference_date: NaiveDate, selected_vehicles: impl IntoIterator<Item = i32>) -> Self {
        Self {
            reference_date,
            selected_vehicles: selected_vehicles.into_iter().collect(),
        }
    }

    pub fn week(&self) -> WeekWindow {
        WeekWindow::containing(self.reference_date)
    }

    /// Una operación sin vehículo nunca queda fuera por el filtro
    pub fn is_selected(&self, operation: &Operation) -> bool {
        operation
            .vehicle_id
            .map_or(true, |vehicle_id| self.selected_vehicles.contains(&vehicle_id))
    }

    /// Alternar un vehículo en la selección; devuelve si quedó seleccionado
    pub fn toggle_vehicle(&mut self, vehicle_id: i32) -> bool {
        if self.selected_vehicles.remove(&vehicle_id) {
            false
        } else {
            self.selected_vehicles.insert(vehicle_id)
        }
    }

    pub fn show_next_week(&mut self) {
        self.reference_date = self.week().next().start();
    }

    pub fn show_previous_week(&mut self) {
        self.reference_date = self.week().previous().start();
    }
}

/// Rectángulo de un bloque en píxeles
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventGeometry {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// Bloque posicionado de una operación visible
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLayout {
    pub operation_id: i32,
    pub day_column: u32,
    pub geometry: EventGeometry,
}

/// Interpretar la duración estimada en horas.
///
/// Toma el prefijo numérico más largo (`"1.5h"` → 1.5). Sin prefijo válido,
/// o con un valor negativo, se usa una hora.
pub fn parse_duration_hours(raw: Option<&str>) -> f64 {
    let Some(raw) = raw.map(str::trim_start) else {
        return DEFAULT_DURATION_HOURS;
    };

    let numeric_end = raw
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(raw.len());

    (1..=numeric_end)
        .rev()
        .find_map(|end| raw[..end].parse::<f64>().ok())
        .filter(|hours| hours.is_finite() && *hours >= 0.0)
        .unwrap_or(DEFAULT_DURATION_HOURS)
}

/// Offset vertical de un instante: horas desde medianoche × altura por hora
pub fn top_offset(start: NaiveDateTime, config: &CalendarConfig) -> f64 {
    (f64::from(start.hour()) + f64::from(start.minute()) / 60.0) * config.hour_height
}

/// Geometría de una operación, sin filtrar por semana
pub fn event_layout(operation: &Operation, config: &CalendarConfig) -> EventLayout {
    let day = day_column(operation.operation_date);
    let duration = parse_duration_hours(operation.estimated_time.as_deref());

    EventLayout {
        operation_id: operation.id,
        day_column: day,
        geometry: EventGeometry {
            top: top_offset(operation.operation_date, config),
            left: config.column_left(day),
            width: config.column_width(),
            height: duration * config.hour_height,
        },
    }
}

/// Layout de las operaciones visibles en la semana de `view`
pub fn layout_week(operations: &[Operation], view: &ViewState, config: &CalendarConfig) -> Vec<EventLayout> {
    let week = view.week();

    operations
        .iter()
        .filter(|op| week.contains(op.operation_date) && view.is_selected(op))
        .map(|op| event_layout(op, config))
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rust_decimal::Decimal;

    pub(crate) fn operation(id: i32, start: NaiveDateTime, duration: Option<&str>, vehicle_id: Option<i32>) -> Operation {
        Operation {
            id,
            company_id: 1,
            vehicle_id,
            driver_id: 1,
            support_id: None,
            operation_value: Decimal::new(50000, 2),
            operation_date: start,
            driver_value: Decimal::new(15000, 2),
            support_value: Decimal::ZERO,
            toll: Decimal::ZERO,
            estimated_time: duration.map(str::to_string),
            status: "Pending".to_string(),
            created_at: start,
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_parse_duration_hours() {
        assert_eq!(parse_duration_hours(Some("2")), 2.0);
        assert_eq!(parse_duration_hours(Some(" 1.5h")), 1.5);
        assert_eq!(parse_duration_hours(Some("0.25")), 0.25);
        assert_eq!(parse_duration_hours(Some("0")), 0.0);
        assert_eq!(parse_duration_hours(Some("2e")), 2.0);
        assert_eq!(parse_duration_hours(Some("abc")), DEFAULT_DURATION_HOURS);
        assert_eq!(parse_duration_hours(Some("")), DEFAULT_DURATION_HOURS);
        assert_eq!(parse_duration_hours(Some("-3")), DEFAULT_DURATION_HOURS);
        assert_eq!(parse_duration_hours(None), DEFAULT_DURATION_HOURS);
    }

    #[test]
    fn test_monday_nine_am_two_hours() {
        // semana del domingo 2024-01-07
        let ops = vec![operation(1, at(2024, 1, 8, 9, 0), Some("2"), Some(10))];
        let view = ViewState::new(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(), [10]);
        let config = CalendarConfig::default();

        let layout = layout_week(&ops, &view, &config);

        assert_eq!(layout.len(), 1);
        assert_eq!(layout[0].day_column, 1);
        assert_eq!(layout[0].geometry.top, 720.0);
        assert_eq!(layout[0].geometry.height, 160.0);
        assert_eq!(layout[0].geometry.left, config.column_left(1));
        assert_eq!(layout[0].geometry.width, config.column_width());
    }

    #[test]
    fn test_deselecting_vehicle_hides_event() {
        let ops = vec![operation(1, at(2024, 1, 8, 9, 0), Some("2"), Some(10))];
        let mut view = ViewState::new(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(), [10]);
        let config = CalendarConfig::default();

        assert!(!view.toggle_vehicle(10));
        assert!(layout_week(&ops, &view, &config).is_empty());

        assert!(view.toggle_vehicle(10));
        assert_eq!(layout_week(&ops, &view, &config).len(), 1);
    }

    #[test]
    fn test_operation_without_vehicle_always_visible() {
        let ops = vec![operation(1, at(2024, 1, 9, 14, 30), None, None)];
        let view = ViewState::new(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(), []);

        let layout = layout_week(&ops, &view, &CalendarConfig::default());

        assert_eq!(layout.len(), 1);
        assert_eq!(layout[0].geometry.top, 14.5 * 80.0);
        assert_eq!(layout[0].geometry.height, 80.0);
    }

    #[test]
    fn test_week_boundaries() {
        let ops = vec![
            operation(1, at(2024, 1, 7, 0, 0), None, None),
            operation(2, at(2024, 1, 14, 0, 0), None, None),
            operation(3, at(2024, 1, 6, 23, 59), None, None),
        ];
        let view = ViewState::new(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(), []);

        let ids: Vec<i32> = layout_week(&ops, &view, &CalendarConfig::default())
            .iter()
            .map(|e| e.operation_id)
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_week_navigation_changes_visible_set() {
        let ops = vec![operation(2, at(2024, 1, 14, 8, 0), None, None)];
        let mut view = ViewState::new(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(), []);
        let config = CalendarConfig::default();

        assert!(layout_week(&ops, &view, &config).is_empty());
        view.show_next_week();
        assert_eq!(layout_week(&ops, &view, &config).len(), 1);
        view.show_previous_week();
        assert!(layout_week(&ops, &view, &config).is_empty());
    }
}
