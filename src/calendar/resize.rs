//! Máquina de estados del redimensionado de bloques
//!
//! `Idle → Resizing{direction, anchor, live} → Idle`. Cada movimiento del
//! puntero recalcula la vista previa; al soltar se confirma la geometría
//! actual. No existe gesto de cancelación.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::layout::EventGeometry;
use super::CalendarConfig;
use crate::dto::operation_dto::OperationPatch;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Borde que se arrastra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeDirection {
    Top,
    Bottom,
}

/// Valores capturados al empezar el arrastre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeAnchor {
    pub pointer_y: f64,
    pub top: f64,
    pub height: f64,
}

/// Geometría vertical de la vista previa
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LiveGeometry {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ResizeState {
    #[default]
    Idle,
    Resizing {
        operation_id: i32,
        direction: ResizeDirection,
        anchor: ResizeAnchor,
        live: LiveGeometry,
    },
}

impl ResizeState {
    /// Empezar un arrastre. Devuelve `false` si ya había uno en curso.
    pub fn begin(&mut self, operation_id: i32, direction: ResizeDirection, pointer_y: f64, geometry: &EventGeometry) -> bool {
        if self.is_resizing() {
            return false;
        }

        *self = ResizeState::Resizing {
            operation_id,
            direction,
            anchor: ResizeAnchor {
                pointer_y,
                top: geometry.top,
                height: geometry.height,
            },
            live: LiveGeometry {
                top: geometry.top,
                height: geometry.height,
            },
        };
        true
    }

    /// Actualizar la vista previa con la posición actual del puntero
    pub fn on_pointer_move(&mut self, pointer_y: f64, config: &CalendarConfig) -> Option<LiveGeometry> {
        match self {
            ResizeState::Resizing {
                direction, anchor, live, ..
            } => {
                *live = preview(*direction, anchor, pointer_y, config.min_event_height);
                Some(*live)
            }
            ResizeState::Idle => None,
        }
    }

    /// Soltar el puntero: confirma la vista previa y vuelve a `Idle`
    pub fn release(&mut self) -> Option<ResizeCommit> {
        match std::mem::take(self) {
            ResizeState::Resizing {
                operation_id,
                direction,
                live,
                ..
            } => Some(ResizeCommit {
                operation_id,
                direction,
                geometry: live,
            }),
            ResizeState::Idle => None,
        }
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, ResizeState::Resizing { .. })
    }

    /// Operación en arrastre y su vista previa
    pub fn preview(&self) -> Option<(i32, LiveGeometry)> {
        match self {
            ResizeState::Resizing { operation_id, live, .. } => Some((*operation_id, *live)),
            ResizeState::Idle => None,
        }
    }
}

/// Geometría de la vista previa para un desplazamiento del puntero.
///
/// Abajo: la altura crece con el puntero, con piso `min_height`.
/// Arriba: el borde inferior queda fijo y el superior sigue al puntero;
/// se congela cuando la altura llega al piso y nunca sube de 0. Un bloque
/// más bajo que el piso crece hacia arriba.
pub fn preview(direction: ResizeDirection, anchor: &ResizeAnchor, pointer_y: f64, min_height: f64) -> LiveGeometry {
    let delta = pointer_y - anchor.pointer_y;

    match direction {
        ResizeDirection::Bottom => LiveGeometry {
            top: anchor.top,
            height: (anchor.height + delta).max(min_height),
        },
        ResizeDirection::Top => {
            let delta = delta
                .min((anchor.height - min_height).max(0.0))
                .max(-anchor.top);
            let bottom = anchor.top + anchor.height;
            let height = (anchor.height - delta).max(min_height);
            LiveGeometry {
                top: (bottom - height).max(0.0),
                height,
            }
        }
    }
}

/// Geometría final de un arrastre, lista para persistir
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeCommit {
    pub operation_id: i32,
    pub direction: ResizeDirection,
    pub geometry: LiveGeometry,
}

impl ResizeCommit {
    pub fn duration_hours(&self, config: &CalendarConfig) -> f64 {
        self.geometry.height / config.hour_height
    }

    /// Nuevo inicio para un arrastre del borde superior, en el mismo día.
    ///
    /// Los minutos se redondean al más cercano; un arrastre inferior no
    /// mueve el inicio.
    pub fn new_start(&self, original_start: NaiveDateTime, config: &CalendarConfig) -> Option<NaiveDateTime> {
        if self.direction != ResizeDirection::Top {
            return None;
        }

        let hours = self.geometry.top / config.hour_height;
        let minutes = ((hours * 60.0).round() as i64).clamp(0, MINUTES_PER_DAY - 1);
        let time = NaiveTime::from_hms_opt((minutes / 60) as u32, (minutes % 60) as u32, 0)?;

        Some(original_start.date().and_time(time))
    }

    /// Patch con la nueva duración y, si corresponde, el nuevo inicio
    pub fn to_patch(&self, original_start: NaiveDateTime, config: &CalendarConfig) -> OperationPatch {
        OperationPatch::reschedule(
            self.new_start(original_start, config),
            format_duration_hours(self.duration_hours(config)),
        )
    }
}

/// Horas como texto corto: `2`, `1.75`, `0.25`
pub fn format_duration_hours(hours: f64) -> String {
    let formatted = format!("{:.4}", hours);
    formatted.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn block(top: f64, height: f64) -> EventGeometry {
        EventGeometry {
            top,
            left: 64.0,
            width: 160.0,
            height,
        }
    }

    fn bottom_resize(height: f64, delta: f64) -> f64 {
        let config = CalendarConfig::default();
        let mut state = ResizeState::Idle;
        assert!(state.begin(1, ResizeDirection::Bottom, 500.0, &block(720.0, height)));
        state.on_pointer_move(500.0 + delta, &config);
        state.release().unwrap().duration_hours(&config)
    }

    #[test]
    fn test_bottom_resize_duration() {
        assert_eq!(bottom_resize(160.0, 40.0), 2.5);
        assert_eq!(bottom_resize(160.0, -40.0), 1.5);
        // max(160 - 150, 20) / 80
        assert_eq!(bottom_resize(160.0, -150.0), 0.25);
    }

    #[test]
    fn test_top_resize_moves_top_and_height() {
        let config = CalendarConfig::default();
        let mut state = ResizeState::Idle;
        state.begin(1, ResizeDirection::Top, 300.0, &block(720.0, 160.0));

        let live = state.on_pointer_move(260.0, &config).unwrap();
        assert_eq!(live, LiveGeometry { top: 680.0, height: 200.0 });
    }

    #[test]
    fn test_top_resize_freezes_at_floor() {
        let config = CalendarConfig::default();
        let mut state = ResizeState::Idle;
        state.begin(1, ResizeDirection::Top, 300.0, &block(720.0, 160.0));

        let at_floor = state.on_pointer_move(440.0, &config).unwrap();
        assert_eq!(at_floor, LiveGeometry { top: 860.0, height: 20.0 });

        let beyond = state.on_pointer_move(600.0, &config).unwrap();
        assert_eq!(beyond, at_floor);
    }

    #[test]
    fn test_top_resize_never_goes_above_midnight() {
        let anchor = ResizeAnchor {
            pointer_y: 100.0,
            top: 40.0,
            height: 80.0,
        };
        let live = preview(ResizeDirection::Top, &anchor, 0.0, 20.0);
        assert_eq!(live, LiveGeometry { top: 0.0, height: 120.0 });
    }

    #[test]
    fn test_top_resize_keeps_bottom_of_short_block() {
        let anchor = ResizeAnchor {
            pointer_y: 100.0,
            top: 400.0,
            height: 8.0,
        };

        let live = preview(ResizeDirection::Top, &anchor, 95.0, 20.0);
        assert_eq!(live, LiveGeometry { top: 388.0, height: 20.0 });
        assert_eq!(live.top + live.height, 408.0);

        let live = preview(ResizeDirection::Top, &anchor, 130.0, 20.0);
        assert_eq!(live.top + live.height, 408.0);
    }

    #[test]
    fn test_state_transitions() {
        let config = CalendarConfig::default();
        let mut state = ResizeState::default();
        assert_eq!(state.on_pointer_move(10.0, &config), None);
        assert_eq!(state.release(), None);

        assert!(state.begin(7, ResizeDirection::Bottom, 0.0, &block(0.0, 80.0)));
        assert!(!state.begin(8, ResizeDirection::Top, 0.0, &block(0.0, 80.0)));
        assert_eq!(state.preview().map(|(id, _)| id), Some(7));

        // soltar sin mover confirma la geometría inicial
        let commit = state.release().unwrap();
        assert_eq!(commit.operation_id, 7);
        assert_eq!(commit.geometry, LiveGeometry { top: 0.0, height: 80.0 });
        assert_eq!(state, ResizeState::Idle);
    }

    #[test]
    fn test_top_commit_keeps_calendar_day() {
        let config = CalendarConfig::default();
        let original = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let commit = ResizeCommit {
            operation_id: 1,
            direction: ResizeDirection::Top,
            geometry: LiveGeometry { top: 820.0, height: 60.0 },
        };

        let start = commit.new_start(original, &config).unwrap();
        assert_eq!(start.date(), original.date());
        assert_eq!((start.hour(), start.minute()), (10, 15));

        let patch = commit.to_patch(original, &config);
        assert_eq!(patch.operation_date, Some(start));
        assert_eq!(patch.estimated_time, Some(Some("0.75".to_string())));
    }

    #[test]
    fn test_top_commit_rounds_minutes() {
        let config = CalendarConfig::default();
        let original = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap().and_hms_opt(9, 0, 0).unwrap();
        // 9h + 59.7 min
        let top = (9.0 + 59.7 / 60.0) * 80.0;
        let commit = ResizeCommit {
            operation_id: 1,
            direction: ResizeDirection::Top,
            geometry: LiveGeometry { top, height: 80.0 },
        };

        let start = commit.new_start(original, &config).unwrap();
        assert_eq!((start.hour(), start.minute()), (10, 0));
    }

    #[test]
    fn test_bottom_commit_keeps_start() {
        let config = CalendarConfig::default();
        let original = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let commit = ResizeCommit {
            operation_id: 1,
            direction: ResizeDirection::Bottom,
            geometry: LiveGeometry { top: 720.0, height: 200.0 },
        };

        assert_eq!(commit.new_start(original, &config), None);
        let patch = commit.to_patch(original, &config);
        assert_eq!(patch.operation_date, None);
        assert_eq!(patch.estimated_time, Some(Some("2.5".to_string())));
    }

    #[test]
    fn test_format_duration_hours() {
        assert_eq!(format_duration_hours(2.0), "2");
        assert_eq!(format_duration_hours(1.75), "1.75");
        assert_eq!(format_duration_hours(0.25), "0.25");
        assert_eq!(format_duration_hours(10.0), "10");
    }
}
