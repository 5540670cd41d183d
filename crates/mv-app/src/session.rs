//! Input changed -> compute -> persist -> notify.
//!
//! A session owns the current inputs. Every change recomputes from scratch,
//! saves the inputs, and hands the new snapshot to each subscriber. Inputs
//! only change once they have been saved.

use mv_core::{finite_or, number_or};
use mv_project::InputStore;
use mv_sizing::{InputField, SizingInputs, SizingResults, compute};
use tracing::debug;

use crate::error::AppResult;
use crate::input_service::{reset_inputs, resolve_inputs};

/// Inputs together with the results computed from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub inputs: SizingInputs,
    pub results: SizingResults,
}

type Observer = Box<dyn FnMut(&Snapshot)>;

pub struct SizingSession<S: InputStore> {
    inputs: SizingInputs,
    store: S,
    observers: Vec<Observer>,
}

impl<S: InputStore> SizingSession<S> {
    pub fn new(store: S, inputs: SizingInputs) -> Self {
        Self {
            inputs: inputs.sanitized(&SizingInputs::default()),
            store,
            observers: Vec::new(),
        }
    }

    /// Start from saved inputs with an optional share-link query on top.
    pub fn open(store: S, query: Option<&str>) -> Self {
        let inputs = resolve_inputs(&store, query, &[]);
        Self::new(store, inputs)
    }

    pub fn inputs(&self) -> &SizingInputs {
        &self.inputs
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Fresh results for the current inputs.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            inputs: self.inputs,
            results: compute(&self.inputs),
        }
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&Snapshot) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Set one field; a non-finite value becomes the field's default.
    pub fn set_field(&mut self, field: InputField, value: f64) -> AppResult<Snapshot> {
        let value = finite_or(value, field.default_value());
        self.commit(self.inputs.with(field, value))
    }

    /// Set a field from form text; unparseable text falls back to the
    /// field's default.
    pub fn set_field_text(&mut self, field: InputField, text: &str) -> AppResult<Snapshot> {
        let value = number_or(Some(text), field.default_value());
        self.set_field(field, value)
    }

    pub fn set_inputs(&mut self, inputs: SizingInputs) -> AppResult<Snapshot> {
        self.commit(inputs.sanitized(&SizingInputs::default()))
    }

    /// Forget the saved inputs and go back to the defaults.
    pub fn reset(&mut self) -> AppResult<Snapshot> {
        self.inputs = reset_inputs(&mut self.store)?;
        self.notify()
    }

    /// Recompute, save and notify without changing anything.
    pub fn publish(&mut self) -> AppResult<Snapshot> {
        self.commit(self.inputs)
    }

    fn commit(&mut self, inputs: SizingInputs) -> AppResult<Snapshot> {
        self.store.save(&inputs)?;
        self.inputs = inputs;
        self.notify()
    }

    fn notify(&mut self) -> AppResult<Snapshot> {
        let snapshot = self.snapshot();
        debug!(
            nozzle_qty = snapshot.results.nozzle_qty,
            k_selected = snapshot.results.k_selected,
            valve = %snapshot.results.deluge_valve,
            "recomputed sizing"
        );
        for observer in &mut self.observers {
            observer(&snapshot);
        }
        Ok(snapshot)
    }
}
