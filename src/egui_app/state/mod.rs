//! Application State
//!
//! Central state shared across the egui views. Requests run on a small tokio
//! runtime owned by the state; their results come back over an mpsc channel
//! and are applied on the UI thread by [`AppState::check_results`].
//!
//! Results are tagged with the sign-in epoch they were started in, so a
//! response that lands after the user logged out is dropped.

use std::future::Future;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::{Duration, Instant};

use eframe::egui;
use tokio::runtime::Runtime;
use uuid::Uuid;

use crate::egui_app::api::{ApiClient, ClientError};
use crate::egui_app::auth::AuthState;
use crate::egui_app::components::expense_form::{ExpenseForm, ADD_FAILED};
use crate::egui_app::config::Config;
use crate::egui_app::session::Session;
use crate::egui_app::types::{AppView, DashboardTab};
use crate::shared::{AuthResponse, DeleteResponse, Expense, LoginRequest, PublicUser, SignupRequest};

/// How long "Expense added successfully!" stays up
pub const SUCCESS_BANNER_DURATION: Duration = Duration::from_secs(3);

pub const FETCH_FAILED: &str = "Failed to fetch expenses. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete expense. Please try again.";
const LOGIN_FAILED: &str = "Failed to login. Please try again.";
const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";

/// Completed background request
#[derive(Debug)]
pub enum ApiEvent {
    /// Signup or login finished
    Auth(Result<AuthResponse, ClientError>),
    /// Expense list fetched
    Fetched(Result<Vec<Expense>, ClientError>),
    /// New expense stored
    Created(Result<Expense, ClientError>),
    /// Delete of the given expense finished
    Deleted(Uuid, Result<DeleteResponse, ClientError>),
}

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub current_view: AppView,
    pub auth_state: AuthState,

    /// The signed-in user's expenses, in server order
    pub expenses: Vec<Expense>,
    pub loading_expenses: bool,
    /// Fetch or delete failure shown above the list
    pub dashboard_error: Option<String>,
    pub form: ExpenseForm,
    pub active_tab: DashboardTab,
    /// Expenses with a delete request in flight
    pub deleting: Vec<Uuid>,

    success_until: Option<Instant>,
    api: ApiClient,
    session: Session,
    runtime: Runtime,
    events_tx: Sender<(u64, ApiEvent)>,
    events_rx: Receiver<(u64, ApiEvent)>,
    repaint: Option<egui::Context>,
    epoch: u64,
    in_flight: usize,
}

impl AppState {
    /**
     * Create the state and its background runtime
     *
     * # Arguments
     * * `config` - Where the expense API lives
     *
     * # Returns
     * The signed-out state, or `ClientError::Runtime` if tokio could not start
     */
    pub fn new(config: Config) -> Result<Self, ClientError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("expense-client")
            .enable_all()
            .build()
            .map_err(|e| ClientError::Runtime(e.to_string()))?;

        let session = Session::new();
        let api = ApiClient::new(config.clone(), session.clone());
        let (events_tx, events_rx) = channel();

        tracing::info!("Client state initialized for {}", config.server_url());

        Ok(Self {
            config,
            current_view: AppView::Login,
            auth_state: AuthState::new(),
            expenses: Vec::new(),
            loading_expenses: false,
            dashboard_error: None,
            form: ExpenseForm::new(),
            active_tab: DashboardTab::default(),
            deleting: Vec::new(),
            success_until: None,
            api,
            session,
            runtime,
            events_tx,
            events_rx,
            repaint: None,
            epoch: 0,
            in_flight: 0,
        })
    }

    /// Let background requests wake the UI when they finish
    pub fn set_repaint_context(&mut self, ctx: egui::Context) {
        self.repaint = Some(ctx);
    }

    /// The signed-in user, if any
    pub fn user(&self) -> Option<PublicUser> {
        self.session.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Apply every finished request. Call once per frame.
    pub fn check_results(&mut self) {
        while let Ok((epoch, event)) = self.events_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.apply_event(epoch, event);
        }

        if self.success_until.is_some_and(|until| Instant::now() >= until) {
            self.success_until = None;
        }
    }

    /// Apply one finished request
    pub fn apply_event(&mut self, epoch: u64, event: ApiEvent) {
        if epoch != self.epoch {
            tracing::debug!("Dropping result from a previous session: {:?}", event);
            return;
        }

        match event {
            ApiEvent::Auth(result) => self.on_auth(result),
            ApiEvent::Fetched(result) => self.on_fetched(result),
            ApiEvent::Created(result) => self.on_created(result),
            ApiEvent::Deleted(id, result) => self.on_deleted(id, result),
        }
    }

    /// Current epoch; results started now are tagged with it
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    fn on_auth(&mut self, result: Result<AuthResponse, ClientError>) {
        self.auth_state.loading = false;
        match result {
            Ok(auth) => {
                tracing::info!("Signed in as {}", auth.result.email);
                self.session.sign_in(&auth);
                self.auth_state.reset();
                self.current_view = AppView::Dashboard;
                self.active_tab = DashboardTab::default();
                self.refresh_expenses();
            }
            Err(e) => {
                let fallback = if self.current_view == AppView::Signup {
                    SIGNUP_FAILED
                } else {
                    LOGIN_FAILED
                };
                tracing::warn!("Authentication failed: {}", e);
                self.auth_state.set_error(server_message(&e).unwrap_or_else(|| fallback.to_string()));
            }
        }
    }

    fn on_fetched(&mut self, result: Result<Vec<Expense>, ClientError>) {
        self.loading_expenses = false;
        match result {
            Ok(expenses) => {
                tracing::debug!("Fetched {} expenses", expenses.len());
                self.expenses = expenses;
                self.dashboard_error = None;
            }
            Err(e) if e.is_unauthorized() => self.session_expired(),
            Err(e) => {
                tracing::warn!("Failed to fetch expenses: {}", e);
                self.dashboard_error = Some(FETCH_FAILED.to_string());
            }
        }
    }

    fn on_created(&mut self, result: Result<Expense, ClientError>) {
        self.form.submitting = false;
        match result {
            Ok(expense) => {
                tracing::info!("Added expense {}", expense.id);
                self.expenses.push(expense);
                self.form.reset();
                self.success_until = Some(Instant::now() + SUCCESS_BANNER_DURATION);
            }
            Err(e) if e.is_unauthorized() => self.session_expired(),
            Err(e) => {
                tracing::warn!("Failed to add expense: {}", e);
                let message = match &e {
                    ClientError::Api { status: 400, message } if !message.is_empty() => message.clone(),
                    _ => ADD_FAILED.to_string(),
                };
                self.form.error = Some(message);
            }
        }
    }

    fn on_deleted(&mut self, id: Uuid, result: Result<DeleteResponse, ClientError>) {
        self.deleting.retain(|pending| *pending != id);
        match result {
            Ok(_) => {
                tracing::info!("Deleted expense {}", id);
                self.expenses.retain(|expense| expense.id != id);
            }
            Err(e) if e.is_unauthorized() => self.session_expired(),
            Err(e) => {
                tracing::warn!("Failed to delete expense {}: {}", id, e);
                self.dashboard_error = Some(DELETE_FAILED.to_string());
            }
        }
    }

    fn session_expired(&mut self) {
        tracing::warn!("Session rejected by server, signing out");
        self.logout();
    }

    /// Submit the login form
    pub fn handle_login(&mut self) {
        let request = LoginRequest {
            email: self.auth_state.email_input.clone(),
            password: self.auth_state.password_input.clone(),
        };
        let request = match request.validate() {
            Ok(request) => request,
            Err(e) => {
                self.auth_state.set_error(e.to_string());
                return;
            }
        };

        self.auth_state.loading = true;
        self.auth_state.clear_error();

        let api = self.api.clone();
        self.spawn(async move { ApiEvent::Auth(api.login(&request).await) });
    }

    /// Submit the signup form
    pub fn handle_signup(&mut self) {
        let request = SignupRequest {
            name: self.auth_state.name_input.clone(),
            email: self.auth_state.email_input.clone(),
            password: self.auth_state.password_input.clone(),
        };
        let request = match request.validate() {
            Ok(request) => request,
            Err(e) => {
                self.auth_state.set_error(e.to_string());
                return;
            }
        };

        self.auth_state.loading = true;
        self.auth_state.clear_error();

        let api = self.api.clone();
        self.spawn(async move { ApiEvent::Auth(api.signup(&request).await) });
    }

    /// Forget the session and every piece of per-user state
    pub fn logout(&mut self) {
        self.session.clear();
        self.epoch += 1;

        self.current_view = AppView::Login;
        self.auth_state.reset();
        self.expenses.clear();
        self.loading_expenses = false;
        self.dashboard_error = None;
        self.form.reset();
        self.active_tab = DashboardTab::default();
        self.deleting.clear();
        self.success_until = None;
    }

    pub fn show_login(&mut self) {
        self.switch_auth_view(AppView::Login);
    }

    pub fn show_signup(&mut self) {
        self.switch_auth_view(AppView::Signup);
    }

    fn switch_auth_view(&mut self, view: AppView) {
        self.current_view = view;
        self.auth_state.clear_error();
        self.auth_state.password_input.clear();
    }

    /// Reload the expense list from the server
    pub fn refresh_expenses(&mut self) {
        self.loading_expenses = true;
        self.dashboard_error = None;

        let api = self.api.clone();
        self.spawn(async move { ApiEvent::Fetched(api.fetch_expenses().await) });
    }

    /// Validate the form and send it
    pub fn submit_expense(&mut self) {
        if self.form.submitting {
            return;
        }
        let request = match self.form.validate() {
            Ok(request) => request,
            Err(e) => {
                self.form.error = Some(e.to_string());
                return;
            }
        };

        self.form.submitting = true;
        self.form.error = None;
        self.success_until = None;

        let api = self.api.clone();
        self.spawn(async move { ApiEvent::Created(api.add_expense(&request).await) });
    }

    /// Ask the server to delete an expense; the row goes once it confirms
    pub fn delete_expense(&mut self, id: Uuid) {
        if self.deleting.contains(&id) {
            return;
        }
        self.deleting.push(id);
        self.dashboard_error = None;

        let api = self.api.clone();
        self.spawn(async move { ApiEvent::Deleted(id, api.delete_expense(id).await) });
    }

    pub fn success_banner_visible(&self) -> bool {
        self.success_until.is_some_and(|until| Instant::now() < until)
    }

    /// Whether the UI should keep polling for results or timers
    pub fn has_pending_work(&self) -> bool {
        self.in_flight > 0 || self.success_until.is_some()
    }

    fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = ApiEvent> + Send + 'static,
    {
        let tx = self.events_tx.clone();
        let repaint = self.repaint.clone();
        let epoch = self.epoch;
        self.in_flight += 1;

        self.runtime.spawn(async move {
            let event = task.await;
            let _ = tx.send((epoch, event));
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }
}

/// The server's explanation, when it sent one
fn server_message(error: &ClientError) -> Option<String> {
    match error {
        ClientError::Api { message, .. } if !message.is_empty() => Some(message.clone()),
        _ => None,
    }
}
