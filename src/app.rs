//! Application state and event handling.
//!
//! [`App`] owns the screens, the per-collection state machines, and the
//! signed-in session. All I/O runs in spawned tasks; completions come
//! back as [`AppMessage`] values on the app's channel and are applied on
//! the event-loop thread via [`App::handle_message`].

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::{Map, Value};
use tokio::sync::mpsc;

use crate::adapters::ReqwestHttpClient;
use crate::api::{CollectionClient, Resource};
use crate::auth::{AuthClient, AuthContext, CredentialsManager, StoredCredentials};
use crate::error::ConfigError;
use crate::events::AppMessage;
use crate::models::{EditDraft, Record};
use crate::state::{CollectionState, Phase};

/// Rows shown per table page.
pub const PAGE_SIZE: usize = 5;

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
}

/// Which login input has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

/// State of the sign-in form.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    pub submitting: bool,
    pub error: Option<String>,
}

/// Which edit-dialog input has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    #[default]
    Name,
    Email,
    Role,
    Status,
}

impl EditField {
    const ORDER: [EditField; 4] = [
        EditField::Name,
        EditField::Email,
        EditField::Role,
        EditField::Status,
    ];

    pub fn next(&self) -> Self {
        let idx = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// An open modal dialog.
#[derive(Debug, Clone)]
pub enum Dialog {
    /// User edit form. Owns the scratch draft; the collection sees the
    /// payload only after the server confirms the write.
    EditUser {
        id: String,
        draft: EditDraft,
        focus: EditField,
        error: Option<String>,
        submitting: bool,
    },
    /// Yes/no gate in front of a delete.
    ConfirmDelete { id: String, label: String },
}

/// A mutation request handed to a background task.
#[derive(Debug, Clone)]
enum MutationRequest {
    Update {
        id: String,
        patch: Map<String, Value>,
    },
    Delete {
        id: String,
    },
}

/// Outcome of a dialog key press that needs `&mut self` beyond the
/// dialog itself.
enum DialogAction {
    None,
    Close,
    SubmitEdit,
    ConfirmDelete,
}

/// Application root.
pub struct App {
    pub screen: Screen,
    pub active: Resource,
    pub login: LoginForm,
    pub dialog: Option<Dialog>,
    /// Row index within the visible slice of the active table.
    pub selected: usize,
    pub should_quit: bool,
    auth: Option<AuthContext>,
    leads: CollectionState,
    projects: CollectionState,
    users: CollectionState,
    credentials: Option<CredentialsManager>,
    client: Arc<CollectionClient<ReqwestHttpClient>>,
    auth_client: Arc<AuthClient<ReqwestHttpClient>>,
    tx: mpsc::UnboundedSender<AppMessage>,
    rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Create the app with credentials stored in the home directory.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Self::with_credentials(base_url, CredentialsManager::new())
    }

    /// Create the app with an explicit credentials manager (or none).
    /// Tests use this to avoid touching the real home directory.
    pub fn with_credentials(
        base_url: &str,
        credentials: Option<CredentialsManager>,
    ) -> Result<Self, ConfigError> {
        let http = ReqwestHttpClient::new();
        let (tx, rx) = mpsc::unbounded_channel();

        let stored = credentials
            .as_ref()
            .map(|m| m.load())
            .unwrap_or_else(StoredCredentials::default);
        let auth = stored.as_context();

        let mut login = LoginForm::default();
        if let Some(user) = &stored.user {
            login.email = user.email.clone().unwrap_or_default();
        }

        Ok(Self {
            screen: if auth.is_some() {
                Screen::Dashboard
            } else {
                Screen::Login
            },
            active: Resource::Leads,
            login,
            dialog: None,
            selected: 0,
            should_quit: false,
            auth,
            leads: CollectionState::new(Resource::Leads, PAGE_SIZE)?,
            projects: CollectionState::new(Resource::Projects, PAGE_SIZE)?,
            users: CollectionState::new(Resource::Users, PAGE_SIZE)?,
            credentials,
            client: Arc::new(CollectionClient::new(base_url, http.clone())),
            auth_client: Arc::new(AuthClient::new(base_url, http)),
            tx,
            rx: Some(rx),
        })
    }

    /// Take the message receiver. The event loop owns it; background
    /// tasks keep senders.
    pub fn take_receiver(&mut self) -> Option<mpsc::UnboundedReceiver<AppMessage>> {
        self.rx.take()
    }

    /// The signed-in session, if any.
    pub fn auth(&self) -> Option<&AuthContext> {
        self.auth.as_ref()
    }

    /// State machine for one collection.
    pub fn collection(&self, resource: Resource) -> &CollectionState {
        match resource {
            Resource::Leads => &self.leads,
            Resource::Projects => &self.projects,
            Resource::Users => &self.users,
        }
    }

    fn collection_mut(&mut self, resource: Resource) -> &mut CollectionState {
        match resource {
            Resource::Leads => &mut self.leads,
            Resource::Projects => &mut self.projects,
            Resource::Users => &mut self.users,
        }
    }

    /// State machine backing the active tab.
    pub fn active_collection(&self) -> &CollectionState {
        self.collection(self.active)
    }

    /// The record under the cursor, if any.
    pub fn selected_record(&self) -> Option<&Record> {
        self.active_collection().visible().get(self.selected)
    }

    /// Kick off the initial load when starting already signed in.
    pub fn on_start(&mut self) {
        if self.auth.is_some() {
            self.spawn_load(self.active);
        }
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match self.screen {
            Screen::Login => self.handle_login_key(key),
            Screen::Dashboard => {
                if self.dialog.is_some() {
                    self.handle_dialog_key(key);
                } else {
                    self.handle_table_key(key);
                }
            }
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.login.focus = match self.login.focus {
                    LoginField::Email => LoginField::Password,
                    LoginField::Password => LoginField::Email,
                };
            }
            KeyCode::Enter => self.submit_login(),
            KeyCode::Backspace => {
                match self.login.focus {
                    LoginField::Email => self.login.email.pop(),
                    LoginField::Password => self.login.password.pop(),
                };
            }
            KeyCode::Char(c) => match self.login.focus {
                LoginField::Email => self.login.email.push(c),
                LoginField::Password => self.login.password.push(c),
            },
            _ => {}
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.switch_to(self.active.next()),
            KeyCode::BackTab => self.switch_to(self.active.prev()),
            KeyCode::Char('1') => self.switch_to(Resource::Leads),
            KeyCode::Char('2') => self.switch_to(Resource::Projects),
            KeyCode::Char('3') => self.switch_to(Resource::Users),
            KeyCode::Char('r') => self.spawn_load(self.active),
            KeyCode::Left | KeyCode::Char('h') => {
                self.collection_mut(self.active).prev_page();
                self.selected = 0;
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.collection_mut(self.active).next_page();
                self.selected = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.active_collection().visible().len();
                if len > 0 {
                    self.selected = (self.selected + 1).min(len - 1);
                }
            }
            KeyCode::Char('e') => self.open_edit_dialog(),
            KeyCode::Char('d') => self.open_delete_dialog(),
            KeyCode::Char('o') => self.sign_out(),
            _ => {}
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        let mut action = DialogAction::None;
        match &mut self.dialog {
            Some(Dialog::EditUser {
                draft,
                focus,
                submitting,
                ..
            }) => {
                if *submitting {
                    return;
                }
                match key.code {
                    KeyCode::Esc => action = DialogAction::Close,
                    KeyCode::Enter => action = DialogAction::SubmitEdit,
                    KeyCode::Tab | KeyCode::Down => *focus = focus.next(),
                    KeyCode::BackTab | KeyCode::Up => *focus = focus.prev(),
                    KeyCode::Left => match focus {
                        EditField::Role => draft.role = draft.role.prev(),
                        EditField::Status => draft.status = draft.status.prev(),
                        _ => {}
                    },
                    KeyCode::Right => match focus {
                        EditField::Role => draft.role = draft.role.next(),
                        EditField::Status => draft.status = draft.status.next(),
                        _ => {}
                    },
                    KeyCode::Backspace => {
                        match focus {
                            EditField::Name => draft.name.pop(),
                            EditField::Email => draft.email.pop(),
                            _ => None,
                        };
                    }
                    KeyCode::Char(c) => match focus {
                        EditField::Name => draft.name.push(c),
                        EditField::Email => draft.email.push(c),
                        _ => {}
                    },
                    _ => {}
                }
            }
            Some(Dialog::ConfirmDelete { .. }) => match key.code {
                KeyCode::Char('y') | KeyCode::Enter => action = DialogAction::ConfirmDelete,
                KeyCode::Char('n') | KeyCode::Esc => action = DialogAction::Close,
                _ => {}
            },
            None => {}
        }
        match action {
            DialogAction::None => {}
            DialogAction::Close => self.dialog = None,
            DialogAction::SubmitEdit => self.submit_edit_dialog(),
            DialogAction::ConfirmDelete => self.confirm_delete_dialog(),
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Switch tabs, loading the collection on first visit.
    pub fn switch_to(&mut self, resource: Resource) {
        self.active = resource;
        self.selected = 0;
        if self.collection(resource).phase() == Phase::Idle {
            self.spawn_load(resource);
        }
    }

    /// Sign out: clear stored credentials, drop the session, and return
    /// to the login screen with fresh collection state.
    pub fn sign_out(&mut self) {
        if let Some(manager) = &self.credentials {
            if let Err(err) = manager.clear() {
                tracing::warn!(error = %err, "failed to clear stored credentials");
            }
        }
        self.auth = None;
        self.dialog = None;
        self.selected = 0;
        self.leads.reset();
        self.projects.reset();
        self.users.reset();
        let email = self.login.email.clone();
        self.login = LoginForm {
            email,
            ..LoginForm::default()
        };
        self.screen = Screen::Login;
    }

    // ------------------------------------------------------------------
    // Dialogs
    // ------------------------------------------------------------------

    fn open_edit_dialog(&mut self) {
        if !self.active.supports_mutation() || self.active_collection().is_submitting() {
            return;
        }
        let Some(record) = self.selected_record() else {
            return;
        };
        let Some(id) = record.id() else { return };
        self.dialog = Some(Dialog::EditUser {
            id,
            draft: EditDraft::from_record(record),
            focus: EditField::default(),
            error: None,
            submitting: false,
        });
    }

    fn open_delete_dialog(&mut self) {
        if !self.active.supports_mutation() || self.active_collection().is_submitting() {
            return;
        }
        let Some(record) = self.selected_record() else {
            return;
        };
        let Some(id) = record.id() else { return };
        let label = record_label(record);
        self.dialog = Some(Dialog::ConfirmDelete { id, label });
    }

    fn submit_edit_dialog(&mut self) {
        if self.auth.is_none() {
            return;
        }
        let (id, validation) = match &self.dialog {
            Some(Dialog::EditUser {
                id,
                draft,
                submitting,
                ..
            }) if !*submitting => (id.clone(), draft.validate()),
            _ => return,
        };
        match validation {
            Err(message) => {
                if let Some(Dialog::EditUser { error, .. }) = &mut self.dialog {
                    *error = Some(message);
                }
            }
            Ok(patch) => {
                let resource = self.active;
                let map = patch.to_map();
                if !self.collection_mut(resource).begin_edit(id.clone(), map.clone()) {
                    return;
                }
                if let Some(Dialog::EditUser {
                    submitting, error, ..
                }) = &mut self.dialog
                {
                    *submitting = true;
                    *error = None;
                }
                self.spawn_mutation(resource, MutationRequest::Update { id, patch: map });
            }
        }
    }

    fn confirm_delete_dialog(&mut self) {
        if self.auth.is_none() {
            self.dialog = None;
            return;
        }
        let Some(Dialog::ConfirmDelete { id, .. }) = &self.dialog else {
            return;
        };
        let id = id.clone();
        let resource = self.active;
        self.dialog = None;
        if self.collection_mut(resource).begin_delete(id.clone()) {
            self.spawn_mutation(resource, MutationRequest::Delete { id });
        }
    }

    fn submit_login(&mut self) {
        if self.login.submitting {
            return;
        }
        if self.login.email.trim().is_empty() || self.login.password.is_empty() {
            self.login.error = Some("Email and password are required".to_string());
            return;
        }
        self.login.submitting = true;
        self.login.error = None;

        let auth_client = Arc::clone(&self.auth_client);
        let email = self.login.email.trim().to_string();
        let password = self.login.password.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = auth_client.sign_in(&email, &password).await;
            let _ = tx.send(AppMessage::SignInFinished { result });
        });
    }

    // ------------------------------------------------------------------
    // Background I/O
    // ------------------------------------------------------------------

    fn spawn_load(&mut self, resource: Resource) {
        let Some(auth) = self.auth.clone() else {
            return;
        };
        let seq = self.collection_mut(resource).begin_load();
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.list(resource, &auth).await;
            let _ = tx.send(AppMessage::CollectionLoaded {
                resource,
                seq,
                result,
            });
        });
    }

    fn spawn_mutation(&self, resource: Resource, request: MutationRequest) {
        let Some(auth) = self.auth.clone() else {
            return;
        };
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = match request {
                MutationRequest::Update { id, patch } => {
                    client.update(resource, &id, &patch, &auth).await
                }
                MutationRequest::Delete { id } => client.delete(resource, &id, &auth).await,
            };
            let _ = tx.send(AppMessage::MutationFinished { resource, result });
        });
    }

    // ------------------------------------------------------------------
    // Completions
    // ------------------------------------------------------------------

    /// Apply a completion message from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::CollectionLoaded {
                resource,
                seq,
                result,
            } => {
                self.collection_mut(resource).apply_load(seq, result);
                if resource == self.active {
                    self.clamp_selection();
                }
            }
            AppMessage::MutationFinished { resource, result } => {
                let succeeded = result.is_ok();
                self.collection_mut(resource).apply_mutation(result);
                if succeeded {
                    if matches!(self.dialog, Some(Dialog::EditUser { .. })) {
                        self.dialog = None;
                    }
                    self.clamp_selection();
                } else {
                    // A failed edit keeps the dialog open with the message
                    // inline; a failed delete surfaces via the status line.
                    let message = self
                        .collection(resource)
                        .mutation_error()
                        .map(str::to_string);
                    if let Some(Dialog::EditUser {
                        submitting, error, ..
                    }) = &mut self.dialog
                    {
                        *submitting = false;
                        *error = message;
                    }
                }
            }
            AppMessage::SignInFinished { result } => {
                self.login.submitting = false;
                match result {
                    Ok(user) => {
                        if let Some(manager) = &self.credentials {
                            if let Err(err) =
                                manager.save(&StoredCredentials::from_sign_in(user.clone()))
                            {
                                tracing::warn!(error = %err, "failed to persist credentials");
                            }
                        }
                        if let Some(ctx) = AuthContext::new(user) {
                            self.auth = Some(ctx);
                            self.login.password.clear();
                            self.login.error = None;
                            self.screen = Screen::Dashboard;
                            self.spawn_load(self.active);
                        }
                    }
                    Err(err) => {
                        self.login.error = Some(err.user_message());
                    }
                }
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.active_collection().visible().len();
        self.selected = if len == 0 { 0 } else { self.selected.min(len - 1) };
    }
}

/// Human-facing label for a record in prompts.
fn record_label(record: &Record) -> String {
    for field in ["name", "username", "email", "storeName", "projectName"] {
        if let Some(text) = record.get_str(field) {
            if !text.is_empty() {
                return text.to_string();
            }
        }
    }
    "this record".to_string()
}
