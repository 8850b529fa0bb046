//! In-memory resident list controller.
//!
//! [`ResidentList`] owns the resident collection together with the listing
//! state an operator works with: the search term, the active ordering, the
//! selection used for bulk deletion and the add/edit form. Every mutation is
//! gated by [`validate_submission`] and either applies fully or leaves the
//! list untouched.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use mockable::Clock;
use tracing::{debug, info};

use super::resident::{
    Resident, ResidentDraft, ResidentField, ResidentId, SortField, SortOrder,
};
use super::resident_validation::{
    ResidentErrors, filter_residents, sort_residents, validate_submission,
};

/// Failures reported by [`ResidentList`] mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResidentListError {
    #[error("resident validation failed: {0}")]
    Invalid(ResidentErrors),
    #[error("resident {0} not found")]
    NotFound(ResidentId),
    #[error("no resident form is open")]
    FormClosed,
}

/// Active ordering of the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortConfig {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortConfig {
    /// Ordering after the operator picks `field`: the active field flips
    /// direction, any other field starts ascending.
    #[must_use]
    pub fn toggled(self, field: SortField) -> Self {
        if self.field == field {
            Self {
                field,
                order: self.order.reversed(),
            }
        } else {
            Self {
                field,
                order: SortOrder::Asc,
            }
        }
    }
}

/// What the add/edit form is currently doing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Hidden,
    Creating,
    Editing(ResidentId),
}

/// Add/edit form with pending values and per-field errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidentForm {
    mode: FormMode,
    values: ResidentDraft,
    errors: ResidentErrors,
}

impl ResidentForm {
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn values(&self) -> &ResidentDraft {
        &self.values
    }

    pub fn errors(&self) -> &ResidentErrors {
        &self.errors
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Hidden
    }
}

/// Authoritative resident collection and its listing state.
pub struct ResidentList {
    residents: Vec<Resident>,
    search_term: String,
    sort: SortConfig,
    selected: BTreeSet<ResidentId>,
    form: ResidentForm,
    next_id: u64,
    clock: Arc<dyn Clock>,
}

impl ResidentList {
    /// Create an empty list; "today" for move-in checks comes from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            residents: Vec::new(),
            search_term: String::new(),
            sort: SortConfig::default(),
            selected: BTreeSet::new(),
            form: ResidentForm::default(),
            next_id: 1,
            clock,
        }
    }

    /// All residents in insertion order.
    pub fn residents(&self) -> &[Resident] {
        &self.residents
    }

    pub fn get(&self, id: ResidentId) -> Option<&Resident> {
        self.residents.iter().find(|resident| resident.id() == id)
    }

    pub fn len(&self) -> usize {
        self.residents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residents.is_empty()
    }

    /// Current UTC calendar date.
    pub fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Residents matching the search term, in insertion order.
    pub fn filtered(&self) -> Vec<&Resident> {
        filter_residents(&self.residents, &self.search_term)
    }

    /// Residents matching the search term in the active order.
    pub fn visible(&self) -> Vec<Resident> {
        let filtered: Vec<Resident> = self.filtered().into_iter().cloned().collect();
        sort_residents(&filtered, self.sort.field, self.sort.order)
    }

    pub fn sort_config(&self) -> SortConfig {
        self.sort
    }

    /// Pick the ordering column, flipping direction if it is already active.
    pub fn sort_by(&mut self, field: SortField) {
        self.sort = self.sort.toggled(field);
    }

    /// Validate `draft` and append it with a fresh identifier.
    pub fn create(&mut self, draft: &ResidentDraft) -> Result<&Resident, ResidentListError> {
        let details = validate_submission(draft, &self.residents, None, self.today())
            .map_err(ResidentListError::Invalid)?;
        let id = self.allocate_id();
        self.residents.push(Resident::new(id, details));
        info!(resident_id = %id, flat = %draft.flat, "resident created");
        self.get(id).ok_or(ResidentListError::NotFound(id))
    }

    /// Validate `draft` and replace the resident stored under `id`.
    pub fn update(
        &mut self,
        id: ResidentId,
        draft: &ResidentDraft,
    ) -> Result<&Resident, ResidentListError> {
        let position = self
            .residents
            .iter()
            .position(|resident| resident.id() == id)
            .ok_or(ResidentListError::NotFound(id))?;
        let details = validate_submission(draft, &self.residents, Some(id), self.today())
            .map_err(ResidentListError::Invalid)?;
        let slot = self
            .residents
            .get_mut(position)
            .ok_or(ResidentListError::NotFound(id))?;
        *slot = Resident::new(id, details);
        info!(resident_id = %id, "resident updated");
        Ok(slot)
    }

    /// Remove one resident and drop it from the selection.
    pub fn delete(&mut self, id: ResidentId) -> Result<Resident, ResidentListError> {
        let position = self
            .residents
            .iter()
            .position(|resident| resident.id() == id)
            .ok_or(ResidentListError::NotFound(id))?;
        let removed = self.residents.remove(position);
        self.selected.remove(&id);
        if self.form.mode == FormMode::Editing(id) {
            self.form = ResidentForm::default();
        }
        info!(resident_id = %id, "resident deleted");
        Ok(removed)
    }

    /// Remove every selected resident and clear the selection.
    ///
    /// Returns the number of residents removed; an empty selection is a
    /// no-op.
    pub fn delete_selected(&mut self) -> usize {
        if self.selected.is_empty() {
            return 0;
        }
        let ids = std::mem::take(&mut self.selected);
        self.remove_ids(&ids)
    }

    /// Remove the residents named in `ids`, ignoring unknown identifiers.
    pub fn delete_many(&mut self, ids: &BTreeSet<ResidentId>) -> usize {
        if ids.is_empty() {
            return 0;
        }
        self.selected.retain(|id| !ids.contains(id));
        self.remove_ids(ids)
    }

    fn remove_ids(&mut self, ids: &BTreeSet<ResidentId>) -> usize {
        let before = self.residents.len();
        self.residents.retain(|resident| !ids.contains(&resident.id()));
        if let FormMode::Editing(id) = self.form.mode
            && ids.contains(&id)
        {
            self.form = ResidentForm::default();
        }
        let removed = before - self.residents.len();
        info!(removed, "residents deleted in bulk");
        removed
    }

    pub fn selection(&self) -> &BTreeSet<ResidentId> {
        &self.selected
    }

    pub fn is_selected(&self, id: ResidentId) -> bool {
        self.selected.contains(&id)
    }

    /// Add `id` to the selection, or remove it if already selected.
    pub fn toggle_selection(&mut self, id: ResidentId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Select exactly the filtered residents, or clear the selection when it
    /// already equals them.
    pub fn toggle_select_all(&mut self) {
        let filtered: BTreeSet<ResidentId> =
            self.filtered().into_iter().map(Resident::id).collect();
        if self.selected == filtered {
            self.selected.clear();
        } else {
            self.selected = filtered;
        }
        debug!(selected = self.selected.len(), "select-all toggled");
    }

    pub fn form(&self) -> &ResidentForm {
        &self.form
    }

    /// Open an empty form for a new resident.
    pub fn open_create(&mut self) {
        self.form = ResidentForm {
            mode: FormMode::Creating,
            ..ResidentForm::default()
        };
    }

    /// Open the form pre-populated from the resident stored under `id`.
    pub fn open_edit(&mut self, id: ResidentId) -> Result<(), ResidentListError> {
        let values = self
            .get(id)
            .map(ResidentDraft::from)
            .ok_or(ResidentListError::NotFound(id))?;
        self.form = ResidentForm {
            mode: FormMode::Editing(id),
            values,
            errors: ResidentErrors::new(),
        };
        Ok(())
    }

    /// Close the form and discard pending values.
    pub fn cancel_form(&mut self) {
        self.form = ResidentForm::default();
    }

    /// Change one pending form value and clear that field's error.
    ///
    /// Flat labels are upper-cased as they are entered.
    ///
    /// # Errors
    /// Returns [`ResidentListError::FormClosed`] when no form is open; the
    /// hidden form keeps its empty values.
    pub fn set_form_field(
        &mut self,
        field: ResidentField,
        value: &str,
    ) -> Result<(), ResidentListError> {
        if !self.form.is_open() {
            return Err(ResidentListError::FormClosed);
        }
        let value = match field {
            ResidentField::Flat => value.to_uppercase(),
            _ => value.to_owned(),
        };
        self.form.values.set_field(field, value);
        self.form.errors.clear(field);
        Ok(())
    }

    /// Submit the open form.
    ///
    /// On success the form closes and the stored resident's id is returned.
    /// Validation failures keep the form open with its errors populated.
    pub fn submit_form(&mut self) -> Result<ResidentId, ResidentListError> {
        let values = self.form.values.clone();
        let outcome = match self.form.mode {
            FormMode::Hidden => return Err(ResidentListError::FormClosed),
            FormMode::Creating => self.create(&values).map(Resident::id),
            FormMode::Editing(id) => self.update(id, &values).map(Resident::id),
        };
        match outcome {
            Ok(id) => {
                self.form = ResidentForm::default();
                Ok(id)
            }
            Err(ResidentListError::Invalid(errors)) => {
                debug!(failed_fields = errors.len(), "resident form rejected");
                self.form.errors = errors.clone();
                Err(ResidentListError::Invalid(errors))
            }
            Err(other) => Err(other),
        }
    }

    fn allocate_id(&mut self) -> ResidentId {
        let id = ResidentId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests;
