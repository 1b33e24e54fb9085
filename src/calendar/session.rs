//! Sesión interactiva del calendario
//!
//! Mantiene la copia local de las operaciones, el estado de vista y el
//! arrastre en curso. Un resize se aplica localmente al soltar y luego se
//! persiste; si la persistencia falla se recarga el estado autoritativo.

use std::collections::HashSet;

use async_trait::async_trait;

use super::layout::{event_layout, layout_week, EventLayout, ViewState};
use super::resize::{LiveGeometry, ResizeDirection, ResizeState};
use super::CalendarConfig;
use crate::dto::operation_dto::OperationPatch;
use crate::models::operation::Operation;
use crate::utils::errors::{not_found_error, AppError};

/// Fuente de datos de la sesión
#[async_trait]
pub trait OperationStore: Send + Sync {
    async fn list_operations(&self) -> Result<Vec<Operation>, AppError>;

    async fn patch_operation(&self, id: i32, patch: &OperationPatch) -> Result<Operation, AppError>;
}

/// Resize ya aplicado localmente y pendiente de persistir
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCommit {
    pub operation_id: i32,
    pub patch: OperationPatch,
}

/// Resultado de persistir un resize
#[derive(Debug, Clone)]
pub enum CommitOutcome {
    Persisted(Operation),
    /// El guardado falló y se recargaron los datos; `message` es para el usuario
    Reverted { operation_id: i32, message: String },
}

pub struct CalendarSession<S> {
    store: S,
    config: CalendarConfig,
    view: ViewState,
    operations: Vec<Operation>,
    resize: ResizeState,
    in_flight: HashSet<i32>,
}

impl<S: OperationStore> CalendarSession<S> {
    pub fn new(store: S, config: CalendarConfig, view: ViewState) -> Self {
        Self {
            store,
            config,
            view,
            operations: Vec::new(),
            resize: ResizeState::Idle,
            in_flight: HashSet::new(),
        }
    }

    /// Cargar (o recargar) las operaciones desde el store
    pub async fn load(&mut self) -> Result<(), AppError> {
        self.operations = self.store.list_operations().await?;
        tracing::debug!("📅 {} operaciones cargadas en el calendario", self.operations.len());
        Ok(())
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Cambiar semana o selección de vehículos
    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn is_saving(&self, operation_id: i32) -> bool {
        self.in_flight.contains(&operation_id)
    }

    /// Layout de la semana visible, con la vista previa del arrastre en curso
    pub fn layout(&self) -> Vec<EventLayout> {
        let mut events = layout_week(&self.operations, &self.view, &self.config);

        if let Some((operation_id, live)) = self.resize.preview() {
            if let Some(event) = events.iter_mut().find(|e| e.operation_id == operation_id) {
                event.geometry.top = live.top;
                event.geometry.height = live.height;
            }
        }

        events
    }

    /// Empezar a arrastrar un borde de una operación visible
    pub fn begin_resize(&mut self, operation_id: i32, direction: ResizeDirection, pointer_y: f64) -> Result<(), AppError> {
        if self.in_flight.contains(&operation_id) {
            return Err(AppError::Conflict(format!(
                "Operation {} is still being saved",
                operation_id
            )));
        }

        let week = self.view.week();
        let operation = self
            .operations
            .iter()
            .find(|op| op.id == operation_id && week.contains(op.operation_date) && self.view.is_selected(op))
            .ok_or_else(|| not_found_error("Operation"))?;

        let geometry = event_layout(operation, &self.config).geometry;
        if !self.resize.begin(operation_id, direction, pointer_y, &geometry) {
            return Err(AppError::BadRequest("Another resize is in progress".to_string()));
        }

        Ok(())
    }

    pub fn pointer_move(&mut self, pointer_y: f64) -> Option<LiveGeometry> {
        self.resize.on_pointer_move(pointer_y, &self.config)
    }

    /// Soltar el puntero: aplica el resize localmente y bloquea la operación
    /// hasta que `finish_commit` resuelva el guardado
    pub fn release(&mut self) -> Option<PendingCommit> {
        let commit = self.resize.release()?;
        let operation = self.operations.iter_mut().find(|op| op.id == commit.operation_id)?;

        let patch = commit.to_patch(operation.operation_date, &self.config);
        patch.apply_to(operation);
        self.in_flight.insert(commit.operation_id);

        Some(PendingCommit {
            operation_id: commit.operation_id,
            patch,
        })
    }

    /// Persistir un resize liberado con `release`
    pub async fn finish_commit(&mut self, pending: PendingCommit) -> CommitOutcome {
        let result = self.store.patch_operation(pending.operation_id, &pending.patch).await;
        self.in_flight.remove(&pending.operation_id);

        match result {
            Ok(saved) => {
                if let Some(local) = self.operations.iter_mut().find(|op| op.id == saved.id) {
                    *local = saved.clone();
                }
                CommitOutcome::Persisted(saved)
            }
            Err(e) => {
                tracing::warn!("⚠️ No se pudo guardar el resize de la operación {}: {}", pending.operation_id, e);
                if let Err(reload_error) = self.load().await {
                    tracing::error!("❌ Error recargando operaciones: {}", reload_error);
                }
                CommitOutcome::Reverted {
                    operation_id: pending.operation_id,
                    message: "Could not save the new schedule. The calendar was reloaded.".to_string(),
                }
            }
        }
    }

    /// `release` + `finish_commit`
    pub async fn commit(&mut self) -> Option<CommitOutcome> {
        let pending = self.release()?;
        Some(self.finish_commit(pending).await)
    }
}
