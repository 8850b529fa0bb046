//! Tests for the resident list controller.

use super::*;
use crate::domain::ResidentValidationError;
use chrono::{DateTime, Local, TimeZone, Utc};
use rstest::{fixture, rstest};

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: Utc
            .with_ymd_and_hms(2024, 6, 1, 23, 30, 0)
            .single()
            .expect("valid fixture timestamp"),
    })
}

fn draft(name: &str, flat: &str, contact: &str, move_in: &str) -> ResidentDraft {
    ResidentDraft::new(name, flat, contact, move_in)
}

#[fixture]
fn empty() -> ResidentList {
    ResidentList::new(fixture_clock())
}

#[fixture]
fn seeded() -> ResidentList {
    let mut list = ResidentList::new(fixture_clock());
    list.create(&draft("Ali Raza", "A-101", "0333-1234567", "2024-01-01"))
        .expect("seed Ali");
    list.create(&draft("Sara Khan", "B-203", "0312-9876543", "2024-02-15"))
        .expect("seed Sara");
    list.create(&draft("bilal ahmed", "C-305", "0300-5556666", "2024-03-20"))
        .expect("seed Bilal");
    list
}

fn ids(residents: &[Resident]) -> Vec<u64> {
    residents.iter().map(|r| r.id().get()).collect()
}

#[rstest]
fn today_is_the_utc_date(empty: ResidentList) {
    assert_eq!(
        empty.today(),
        NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
    );
}

#[rstest]
fn create_with_future_date_leaves_list_unchanged(mut seeded: ResidentList) {
    let before = seeded.residents().to_vec();

    let result = seeded.create(&draft("Omar Farooq", "D-401", "0345-1112222", "2024-06-02"));

    let Err(ResidentListError::Invalid(errors)) = result else {
        panic!("future move-in date should be rejected");
    };
    assert_eq!(
        errors.get(ResidentField::MoveInDate),
        Some(ResidentValidationError::FutureDate)
    );
    assert_eq!(seeded.residents(), before.as_slice());
}

#[rstest]
fn create_with_today_appends_one_fresh_record(mut seeded: ResidentList) {
    let existing: BTreeSet<ResidentId> = seeded.residents().iter().map(Resident::id).collect();

    let id = seeded
        .create(&draft("Omar Farooq", "D-401", "0345-1112222", "2024-06-01"))
        .expect("today is allowed")
        .id();

    assert_eq!(seeded.len(), 4);
    assert!(!existing.contains(&id));
    assert_eq!(seeded.residents().last().map(Resident::id), Some(id));
}

#[rstest]
fn identifiers_are_never_reused(mut seeded: ResidentList) {
    let last = seeded.residents().last().map(Resident::id).expect("seeded");
    seeded.delete(last).expect("delete last");

    let id = seeded
        .create(&draft("Omar Farooq", "D-401", "0345-1112222", "2024-05-01"))
        .expect("valid")
        .id();

    assert!(id > last);
}

#[rstest]
fn update_preserves_id_and_allows_own_flat(mut seeded: ResidentList) {
    let id = ResidentId::new(1);

    let updated = seeded
        .update(id, &draft("Ali Raza Khan", "A-101", "0333-7654321", "2024-01-05"))
        .expect("own flat is not a duplicate");

    assert_eq!(updated.id(), id);
    assert_eq!(updated.name(), "Ali Raza Khan");
    assert_eq!(seeded.len(), 3);
}

#[rstest]
fn update_rejects_a_flat_held_by_someone_else(mut seeded: ResidentList) {
    let result = seeded.update(
        ResidentId::new(1),
        &draft("Ali Raza", "B-203", "0333-1234567", "2024-01-01"),
    );

    let Err(ResidentListError::Invalid(errors)) = result else {
        panic!("occupied flat should be rejected");
    };
    assert_eq!(
        errors.get(ResidentField::Flat),
        Some(ResidentValidationError::DuplicateFlat)
    );
    assert_eq!(seeded.get(ResidentId::new(1)).map(Resident::flat), Some("A-101"));
}

#[rstest]
fn update_of_unknown_resident_is_not_found(mut seeded: ResidentList) {
    let result = seeded.update(
        ResidentId::new(99),
        &draft("Nobody Here", "Z-999", "0333-1234567", "2024-01-01"),
    );
    assert_eq!(result, Err(ResidentListError::NotFound(ResidentId::new(99))));
}

#[rstest]
fn delete_drops_the_id_from_the_selection(mut seeded: ResidentList) {
    seeded.toggle_selection(ResidentId::new(2));
    seeded.toggle_selection(ResidentId::new(3));

    let removed = seeded.delete(ResidentId::new(2)).expect("exists");

    assert_eq!(removed.flat(), "B-203");
    assert_eq!(
        seeded.selection().iter().copied().collect::<Vec<_>>(),
        [ResidentId::new(3)]
    );
    assert_eq!(
        seeded.delete(ResidentId::new(2)),
        Err(ResidentListError::NotFound(ResidentId::new(2)))
    );
}

#[rstest]
fn bulk_delete_with_empty_selection_is_a_no_op(mut seeded: ResidentList) {
    let before = seeded.residents().to_vec();

    assert_eq!(seeded.delete_selected(), 0);
    assert_eq!(seeded.residents(), before.as_slice());
    assert!(seeded.selection().is_empty());
}

#[rstest]
fn bulk_delete_removes_selected_and_clears_selection(mut seeded: ResidentList) {
    seeded.toggle_selection(ResidentId::new(1));
    seeded.toggle_selection(ResidentId::new(3));

    assert_eq!(seeded.delete_selected(), 2);
    assert_eq!(ids(seeded.residents()), [2]);
    assert!(seeded.selection().is_empty());
}

#[rstest]
fn delete_many_ignores_unknown_ids(mut seeded: ResidentList) {
    seeded.toggle_selection(ResidentId::new(1));
    let targets: BTreeSet<ResidentId> = [1, 42].into_iter().map(ResidentId::new).collect();

    assert_eq!(seeded.delete_many(&targets), 1);
    assert_eq!(ids(seeded.residents()), [2, 3]);
    assert!(seeded.selection().is_empty());
}

#[rstest]
fn toggling_selection_twice_restores_it(mut seeded: ResidentList) {
    seeded.toggle_selection(ResidentId::new(1));
    assert!(seeded.is_selected(ResidentId::new(1)));
    seeded.toggle_selection(ResidentId::new(1));
    assert!(!seeded.is_selected(ResidentId::new(1)));
}

#[rstest]
fn select_all_is_scoped_to_the_filtered_view(mut seeded: ResidentList) {
    seeded.set_search_term("khan");

    seeded.toggle_select_all();
    assert_eq!(
        seeded.selection().iter().copied().collect::<Vec<_>>(),
        [ResidentId::new(2)]
    );

    seeded.toggle_select_all();
    assert!(seeded.selection().is_empty());
}

#[rstest]
fn select_all_replaces_a_partial_selection(mut seeded: ResidentList) {
    seeded.toggle_selection(ResidentId::new(1));

    seeded.toggle_select_all();

    assert_eq!(seeded.selection().len(), 3);
}

#[rstest]
fn filter_is_case_insensitive_for_name_and_flat(mut seeded: ResidentList) {
    seeded.set_search_term("c-3");
    assert_eq!(
        seeded.filtered().into_iter().map(Resident::name).collect::<Vec<_>>(),
        ["bilal ahmed"]
    );

    seeded.set_search_term("0312-98");
    assert_eq!(seeded.filtered().len(), 1);
}

#[rstest]
fn sorting_the_same_field_flips_direction(mut seeded: ResidentList) {
    assert_eq!(seeded.sort_config(), SortConfig::default());
    assert_eq!(ids(&seeded.visible()), [1, 3, 2]);

    seeded.sort_by(SortField::Name);
    assert_eq!(seeded.sort_config().order, SortOrder::Desc);
    assert_eq!(ids(&seeded.visible()), [2, 3, 1]);

    seeded.sort_by(SortField::MoveInDate);
    assert_eq!(
        seeded.sort_config(),
        SortConfig {
            field: SortField::MoveInDate,
            order: SortOrder::Asc,
        }
    );
    assert_eq!(ids(&seeded.visible()), [1, 2, 3]);
}

#[rstest]
fn form_creates_and_closes_on_success(mut empty: ResidentList) {
    empty.open_create();
    assert_eq!(empty.form().mode(), FormMode::Creating);

    empty.set_form_field(ResidentField::Name, "Ali Raza").expect("form is open");
    empty.set_form_field(ResidentField::Flat, "a-101").expect("form is open");
    empty.set_form_field(ResidentField::Contact, "0333-1234567").expect("form is open");
    empty.set_form_field(ResidentField::MoveInDate, "2024-01-01").expect("form is open");
    assert_eq!(empty.form().values().flat, "A-101");

    let id = empty.submit_form().expect("valid form");

    assert!(!empty.form().is_open());
    assert_eq!(empty.get(id).map(Resident::flat), Some("A-101"));
}

#[rstest]
fn form_stays_open_with_errors_until_fields_change(mut empty: ResidentList) {
    empty.open_create();

    let result = empty.submit_form();

    assert!(matches!(result, Err(ResidentListError::Invalid(_))));
    assert_eq!(empty.form().mode(), FormMode::Creating);
    assert_eq!(empty.form().errors().len(), 4);
    assert!(empty.is_empty());

    empty.set_form_field(ResidentField::Name, "Ali").expect("form is open");
    assert_eq!(empty.form().errors().get(ResidentField::Name), None);
    assert_eq!(empty.form().errors().len(), 3);
}

#[rstest]
fn edit_form_is_prepopulated_and_updates_in_place(mut seeded: ResidentList) {
    let id = ResidentId::new(2);
    seeded.open_edit(id).expect("exists");
    assert_eq!(seeded.form().mode(), FormMode::Editing(id));
    assert_eq!(seeded.form().values().move_in_date, "2024-02-15");

    seeded.set_form_field(ResidentField::Contact, "0312-0000000").expect("form is open");
    assert_eq!(seeded.submit_form(), Ok(id));

    assert_eq!(seeded.get(id).map(Resident::contact), Some("0312-0000000"));
    assert_eq!(seeded.len(), 3);
}

#[rstest]
fn cancel_discards_pending_values(mut seeded: ResidentList) {
    seeded.open_edit(ResidentId::new(1)).expect("exists");
    seeded.set_form_field(ResidentField::Name, "Changed Name").expect("form is open");

    seeded.cancel_form();

    assert_eq!(seeded.form(), &ResidentForm::default());
    assert_eq!(seeded.get(ResidentId::new(1)).map(Resident::name), Some("Ali Raza"));
}

#[rstest]
fn submitting_a_hidden_form_fails(mut empty: ResidentList) {
    assert_eq!(empty.submit_form(), Err(ResidentListError::FormClosed));
}

#[rstest]
fn editing_a_hidden_form_is_refused(mut empty: ResidentList) {
    assert_eq!(
        empty.set_form_field(ResidentField::Name, "Ghost"),
        Err(ResidentListError::FormClosed)
    );
    assert_eq!(empty.form(), &ResidentForm::default());

    empty.open_create();
    assert_eq!(empty.form().values().name, "");
}

#[rstest]
fn deleting_the_edited_resident_closes_the_form(mut seeded: ResidentList) {
    seeded.open_edit(ResidentId::new(3)).expect("exists");
    seeded.delete(ResidentId::new(3)).expect("exists");
    assert!(!seeded.form().is_open());
}
