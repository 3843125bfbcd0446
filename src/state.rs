use crate::api::models::{ConnectionReport, Person};
use crate::form::PersonForm;

/// Which field the search term filters on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Name,
    Department,
}

impl SearchMode {
    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::Name => "name",
            SearchMode::Department => "department",
        }
    }
}

/// The whole view state as one value. Every mutation goes through a named
/// transition; the async controller only ever applies transitions between
/// awaits, never mid-request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryState {
    pub persons: Vec<Person>,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    pub search_mode: SearchMode,
    pub search_term: String,
    pub modal_open: bool,
    pub editing: Option<Person>,
    pub form: PersonForm,
}

impl DirectoryState {
    /// Initial state, loading until the first fetch resolves
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    /// A read (load or search) is starting
    pub fn begin_request(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// A write (create, update, delete) is starting
    pub fn begin_mutation(&mut self) {
        self.loading = true;
        self.error = None;
        self.success = None;
    }

    pub fn persons_loaded(&mut self, persons: Vec<Person>) {
        self.persons = persons;
        self.loading = false;
    }

    pub fn request_failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Failure of a side operation (the count) that never owned the loading
    /// flag, so it must not clear it either
    pub fn background_failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn search_term_changed(&mut self, term: String) {
        self.search_term = term;
    }

    pub fn search_mode_changed(&mut self, mode: SearchMode) {
        self.search_mode = mode;
    }

    pub fn open_create(&mut self) {
        self.modal_open = true;
    }

    /// Copy a person from the loaded list into the form and open the modal
    /// in edit mode
    pub fn open_edit(&mut self, person: Person) {
        self.form = PersonForm::from_person(&person);
        self.editing = Some(person);
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.editing = None;
        self.form = PersonForm::default();
        self.error = None;
    }

    /// Create or update went through: show the message and reset the modal
    pub fn saved(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.loading = false;
        self.close_modal();
    }

    pub fn deleted(&mut self) {
        self.success = Some("Person deleted successfully!".to_string());
        self.loading = false;
    }

    pub fn count_received(&mut self, count: u64) {
        self.success = Some(format!("Total persons in database: {count}"));
    }

    pub fn connection_ok(&mut self, report: &ConnectionReport) {
        self.success = Some(report.message.clone());
        self.loading = false;
    }

    pub fn clear_success(&mut self) {
        self.success = None;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: i64, name: &str) -> Person {
        Person {
            id: Some(id),
            name: name.to_string(),
            nom: "Doe".to_string(),
            prenom: "Jo".to_string(),
            age: 30,
            email: "jo@x.com".to_string(),
            telephone: String::new(),
            poste: String::new(),
            departement: "IT".to_string(),
            date_embauche: String::new(),
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = DirectoryState::new();
        assert!(state.loading);
        assert!(state.persons.is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_loaded_replaces_list_and_clears_loading() {
        let mut state = DirectoryState::new();
        state.begin_request();
        state.persons_loaded(vec![person(1, "Jo"), person(2, "Max")]);
        assert!(!state.loading);
        assert_eq!(state.persons.len(), 2);
    }

    #[test]
    fn test_failed_request_keeps_previous_list() {
        let mut state = DirectoryState::new();
        state.persons_loaded(vec![person(1, "Jo")]);
        state.begin_request();
        state.request_failed("Failed to load persons: HTTP 500: boom");
        assert!(!state.loading);
        assert_eq!(state.persons.len(), 1);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to load persons: HTTP 500: boom")
        );
    }

    #[test]
    fn test_begin_mutation_clears_both_messages() {
        let mut state = DirectoryState::new();
        state.error = Some("old error".to_string());
        state.success = Some("old success".to_string());
        state.begin_mutation();
        assert!(state.error.is_none());
        assert!(state.success.is_none());
        assert!(state.loading);
    }

    #[test]
    fn test_open_edit_copies_person_into_form() {
        let mut state = DirectoryState::new();
        state.open_edit(person(7, "Jo"));
        assert!(state.modal_open);
        assert_eq!(state.editing.as_ref().and_then(|p| p.id), Some(7));
        assert_eq!(state.form.name, "Jo");
        assert_eq!(state.form.age, "30");
        assert_eq!(state.form.departement, "IT");
    }

    #[test]
    fn test_close_modal_resets_form_edit_target_and_error() {
        let mut state = DirectoryState::new();
        state.open_edit(person(7, "Jo"));
        state.error = Some("Name is required".to_string());
        state.close_modal();
        assert!(!state.modal_open);
        assert!(state.editing.is_none());
        assert_eq!(state.form, PersonForm::default());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_saved_shows_message_and_closes_modal() {
        let mut state = DirectoryState::new();
        state.open_create();
        state.form.name = "Jo".to_string();
        state.saved("Person created successfully!");
        assert_eq!(state.success.as_deref(), Some("Person created successfully!"));
        assert!(!state.modal_open);
        assert_eq!(state.form, PersonForm::default());
    }

    #[test]
    fn test_background_failure_leaves_the_loading_flag_alone() {
        let mut state = DirectoryState::new();
        state.begin_request();
        state.background_failed("HTTP 500: boom");
        assert!(state.loading, "an in-flight load must keep its spinner");
        assert_eq!(state.error.as_deref(), Some("HTTP 500: boom"));

        let mut idle = DirectoryState::new();
        idle.persons_loaded(Vec::new());
        idle.background_failed("HTTP 500: boom");
        assert!(!idle.loading);
    }

    #[test]
    fn test_count_message_format() {
        let mut state = DirectoryState::new();
        state.count_received(5);
        assert_eq!(
            state.success.as_deref(),
            Some("Total persons in database: 5")
        );
    }

    #[test]
    fn test_search_mode_labels() {
        assert_eq!(SearchMode::Name.label(), "name");
        assert_eq!(SearchMode::Department.label(), "department");
    }
}
