//! The form session: walks a borrower through the resolved step list,
//! validating each step before advancing and accumulating one [`FormData`]
//! record along the way.
//!
//! Transition rules:
//!
//! - **Next** requires every required field of the current step to be
//!   non-blank and every attached validator to pass. Failure keeps the
//!   session on the step and records one message per failing field; fields
//!   outside the step keep whatever error state they had.
//! - **Previous** never validates; a borrower can always retreat.
//! - **Field edits** clear that field's error eagerly, before any
//!   re-validation, and persist the whole record to the draft store.
//! - **Next on the review step** submits: the draft slot is cleared and the
//!   accumulated record is returned for the caller's submission sink. The
//!   session does not await or retry the sink.

use std::collections::BTreeMap;

use crate::catalog::resolve_steps;
use crate::models::{FormData, FormField, FormStep, StepId};
use crate::store::{DraftStore, DraftStoreError};

/// Outcome of a [`FormSession::next`] transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Validation passed; now on the step with this id.
    Moved(StepId),

    /// Validation failed; still on the same step, errors recorded.
    Rejected,

    /// The review step was confirmed. The draft slot is already cleared;
    /// the record is ready for the submission sink.
    Submitted(FormData),
}

/// One in-progress loan application.
///
/// Owns the resolved step list, the accumulated record, per-field errors,
/// and the injected draft store. There is one session per application; a
/// new session overwrites the single draft slot on its first mutation.
#[derive(Debug)]
pub struct FormSession<S: DraftStore> {
    steps: Vec<FormStep>,
    current: usize,
    data: FormData,
    errors: BTreeMap<String, String>,
    store: S,
}

impl<S: DraftStore> FormSession<S> {
    /// Starts a session for the given loan-type slug.
    ///
    /// `initial` may carry seeded values (for example from a page-level
    /// pre-qualification widget); `loanType` is filled in from the slug
    /// unless the seed already set it.
    pub fn new(loan_type: &str, initial: FormData, store: S) -> Self {
        let steps = resolve_steps(loan_type);
        let mut data = initial;
        if data.get("loanType").is_none() {
            data.set("loanType", loan_type);
        }
        Self {
            steps,
            current: 0,
            data,
            errors: BTreeMap::new(),
            store,
        }
    }

    pub fn current_step(&self) -> &FormStep {
        &self.steps[self.current]
    }

    pub fn steps(&self) -> &[FormStep] {
        &self.steps
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn is_first_step(&self) -> bool {
        self.current == 0
    }

    /// 1-based position and total step count, for progress display.
    pub fn progress(&self) -> (usize, usize) {
        (self.current + 1, self.steps.len())
    }

    /// Records a field value, clears that field's error (and only that
    /// field's), and persists the whole record to the draft store.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), DraftStoreError> {
        self.data.set(name, value);
        self.errors.remove(name);
        tracing::debug!(field = name, "draft updated");
        self.store.save(&self.data)
    }

    /// Attempts to advance past the current step.
    ///
    /// # Errors
    ///
    /// Only the draft store can fail here; validation failures are the
    /// [`Advance::Rejected`] outcome, not an error.
    pub fn next(&mut self) -> Result<Advance, DraftStoreError> {
        if !self.validate_current_step() {
            return Ok(Advance::Rejected);
        }
        if self.current + 1 == self.steps.len() {
            // Clear the slot before the sink runs; submission is
            // fire-and-forget and the draft must not outlive it.
            self.store.clear()?;
            tracing::info!(fields = self.data.len(), "application submitted");
            return Ok(Advance::Submitted(self.data.clone()));
        }
        self.current += 1;
        self.store.save(&self.data)?;
        Ok(Advance::Moved(self.steps[self.current].id))
    }

    /// Moves to the prior step. Returns `false` on the first step. Never
    /// validates and never rewrites the draft.
    pub fn previous(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Validates the current step's fields, updating error entries for
    /// exactly those fields. Returns `true` when the step is clean.
    fn validate_current_step(&mut self) -> bool {
        let results: Vec<(&'static str, Option<String>)> = self.steps[self.current]
            .fields
            .iter()
            .map(|field| (field.name, Self::field_error(&self.data, field)))
            .collect();

        let mut clean = true;
        for (name, message) in results {
            match message {
                Some(message) => {
                    self.errors.insert(name.to_string(), message);
                    clean = false;
                }
                None => {
                    self.errors.remove(name);
                }
            }
        }
        clean
    }

    /// Required-ness first; a blank required field fails regardless of any
    /// validator. A present value is then run through the field's own
    /// validator, if it has one.
    fn field_error(data: &FormData, field: &FormField) -> Option<String> {
        if field.required && data.is_blank(field.name) {
            return Some(format!("{} is required", field.label));
        }
        if let Some(validator) = field.validator {
            if let Some(value) = data.get(field.name) {
                if !value.trim().is_empty() {
                    return validator(value);
                }
            }
        }
        None
    }
}
