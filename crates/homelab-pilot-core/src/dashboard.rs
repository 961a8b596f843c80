//! Dashboard controller
//!
//! The controller is the only owner of mutable dashboard state. It consumes
//! [`Event`]s (sweep results, key presses, finished detail fetches) and
//! answers with the [`ScheduledWork`] the runtime must start. Nothing here
//! performs I/O, so every transition can be driven from a test with explicit
//! instants through [`Dashboard::handle_at`].

use crate::async_state::AsyncState;
use crate::constants::{
    DETAIL_LOAD_FAILED, INITIAL_SWEEP_DELAY, STATUS_ALL_HEALTHY, STATUS_LOADING, status_unhealthy,
};
use crate::indicators::{HasHealth, aggregate_health};
use crate::registry::{ServiceRegistry, ServiceRuntimeState};
use crate::selection::{SelectableList, step_index};
use crate::stats_cache::{DetailSnapshot, StatsCache};
use crate::view::{Key, Route, Step, ViewState};
use crate::view_model::{DetailView, ServiceRow, ViewModel};
use homelab_rs::{DashboardConfig, DetailPayload, HealthOutcome, HomelabError, SweepResults};
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// A detail payload captured at a point in time
pub type Snapshot = DetailSnapshot<DetailPayload>;

/// Inputs to the controller
#[derive(Debug, Clone)]
pub enum Event {
    /// Results of one full sweep, keyed by service name
    Sweep(SweepResults),
    Input(Key),
    /// A detail fetch finished
    DetailFetched(String, Snapshot),
    /// A detail fetch failed with an operator-facing reason
    DetailFailed(String, String),
}

/// Work the runtime must start on the controller's behalf
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduledWork {
    /// Begin periodic sweeps: first after `first_delay`, then every `interval`
    StartHealthChecks {
        first_delay: Duration,
        interval: Duration,
    },
    /// Fetch the detail payload of the named service
    FetchDetail(String),
}

#[derive(Debug)]
pub struct Dashboard {
    title: String,
    registry: ServiceRegistry,
    services: SelectableList<ServiceRuntimeState>,
    view: ViewState,
    cache: StatsCache<DetailPayload>,
    /// Detail shown for the active service
    detail: AsyncState<Snapshot>,
    detail_row: usize,
    /// Services with a detail fetch in flight
    pending: HashSet<String>,
    status_line: String,
    interval: Duration,
    started: bool,
    sweeps: u64,
}

impl Dashboard {
    pub fn new(
        title: impl Into<String>,
        registry: ServiceRegistry,
        interval: Duration,
        freshness: Duration,
    ) -> Self {
        let services = registry
            .services()
            .iter()
            .cloned()
            .map(ServiceRuntimeState::new)
            .collect();
        Self {
            title: title.into(),
            registry,
            services: SelectableList::new(services),
            view: ViewState::Normal,
            cache: StatsCache::new(freshness),
            detail: AsyncState::new(),
            detail_row: 0,
            pending: HashSet::new(),
            status_line: STATUS_LOADING.to_string(),
            interval,
            started: false,
            sweeps: 0,
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Result<Self, HomelabError> {
        let registry = ServiceRegistry::from_config(config)?;
        Ok(Self::new(
            config.title.clone(),
            registry,
            config.interval(),
            config.detail_freshness(),
        ))
    }

    /// Work to start once the runtime is up; only the first call yields any
    pub fn init(&mut self) -> Vec<ScheduledWork> {
        if self.started || self.view.is_terminated() {
            return Vec::new();
        }
        self.started = true;
        tracing::info!(
            "Monitoring {} services every {}s",
            self.registry.len(),
            self.interval.as_secs()
        );
        vec![ScheduledWork::StartHealthChecks {
            first_delay: INITIAL_SWEEP_DELAY,
            interval: self.interval,
        }]
    }

    pub fn handle(&mut self, event: Event) -> Vec<ScheduledWork> {
        self.handle_at(event, Instant::now())
    }

    /// Apply one event as of `now`
    pub fn handle_at(&mut self, event: Event, now: Instant) -> Vec<ScheduledWork> {
        if self.view.is_terminated() {
            return Vec::new();
        }
        match event {
            Event::Sweep(results) => {
                self.apply_sweep(&results);
                Vec::new()
            }
            Event::Input(key) => self.handle_key(key, now),
            Event::DetailFetched(id, snapshot) => {
                self.on_detail_fetched(id, snapshot);
                Vec::new()
            }
            Event::DetailFailed(id, message) => {
                self.on_detail_failed(&id, &message);
                Vec::new()
            }
        }
    }

    fn apply_sweep(&mut self, results: &SweepResults) {
        for state in self.services.items_mut() {
            let outcome = match results.get(state.name()) {
                Some(outcome) => *outcome,
                None => {
                    tracing::warn!("Sweep returned no result for {}", state.name());
                    HealthOutcome::unreachable()
                }
            };
            state.outcome = Some(outcome);
        }
        self.sweeps += 1;

        self.status_line = match self.services.items().iter().find(|s| !s.is_up()) {
            Some(unhealthy) => status_unhealthy(unhealthy.name()),
            None => STATUS_ALL_HEALTHY.to_string(),
        };
        tracing::debug!("Sweep #{} applied: {}", self.sweeps, self.status_line);
    }

    fn handle_key(&mut self, key: Key, now: Instant) -> Vec<ScheduledWork> {
        match self.view.route(key) {
            Route::Quit => {
                self.terminate();
                Vec::new()
            }
            Route::MoveCursor(Step::Up) => {
                self.services.select_prev_no_wrap();
                Vec::new()
            }
            Route::MoveCursor(Step::Down) => {
                self.services.select_next_no_wrap();
                Vec::new()
            }
            Route::EnterDetail => self.enter_detail(now),
            Route::ExitDetail => {
                self.exit_detail();
                Vec::new()
            }
            Route::ScrollDetail(step) => {
                let rows = self.detail_rows();
                self.detail_row = step_index(self.detail_row, rows, step == Step::Down);
                Vec::new()
            }
            Route::RefreshDetail => self.refresh_detail(),
            Route::Ignore => Vec::new(),
        }
    }

    fn enter_detail(&mut self, now: Instant) -> Vec<ScheduledWork> {
        let Some(target) = self.services.selected() else {
            return Vec::new();
        };
        if !target.supports_detail() {
            tracing::debug!("{} has no detail view", target.name());
            return Vec::new();
        }
        let name = target.name().to_string();

        for state in self.services.items_mut() {
            state.active = state.name() == name;
        }
        self.view = ViewState::Detail(name.clone());
        self.detail_row = 0;

        if let Some(snapshot) = self.cache.fresh(&name, now) {
            tracing::debug!("Serving cached detail for {}", name);
            self.detail = AsyncState::with_data(snapshot.clone());
            return Vec::new();
        }

        // Keep a stale snapshot on screen while the new one loads
        self.detail = match self.cache.get(&name) {
            Some(stale) => {
                let mut state = AsyncState::with_data(stale.clone());
                state.start_loading();
                state
            }
            None => AsyncState::new(),
        };
        self.request_fetch(name)
    }

    fn exit_detail(&mut self) {
        for state in self.services.items_mut() {
            state.active = false;
        }
        self.view = ViewState::Normal;
        self.detail = AsyncState::new();
        self.detail_row = 0;
    }

    fn refresh_detail(&mut self) -> Vec<ScheduledWork> {
        let Some(name) = self.view.detail_target().map(str::to_string) else {
            return Vec::new();
        };
        self.detail.start_loading();
        self.request_fetch(name)
    }

    fn request_fetch(&mut self, name: String) -> Vec<ScheduledWork> {
        if !self.pending.insert(name.clone()) {
            tracing::debug!("Detail fetch for {} already in flight", name);
            return Vec::new();
        }
        tracing::debug!("Requesting detail for {}", name);
        vec![ScheduledWork::FetchDetail(name)]
    }

    fn on_detail_fetched(&mut self, id: String, snapshot: Snapshot) {
        self.pending.remove(&id);
        if !self.registry.contains(&id) {
            tracing::warn!("Dropping detail for unknown service {}", id);
            return;
        }
        if self.view.detail_target() == Some(id.as_str()) {
            let rows = snapshot.payload.row_count();
            self.detail.set_data(snapshot.clone());
            self.detail_row = self.detail_row.min(rows.saturating_sub(1));
        }
        self.cache.insert(id, snapshot);
    }

    fn on_detail_failed(&mut self, id: &str, message: &str) {
        self.pending.remove(id);
        tracing::warn!("Detail fetch for {} failed: {}", id, message);
        if self.view.detail_target() == Some(id) {
            self.detail
                .set_error(format!("{}: {}", DETAIL_LOAD_FAILED, message));
        }
    }

    fn terminate(&mut self) {
        tracing::info!("Quit requested");
        for state in self.services.items_mut() {
            state.active = false;
        }
        self.view = ViewState::Terminated;
    }

    fn detail_rows(&self) -> usize {
        self.detail
            .data()
            .map(|snapshot| snapshot.payload.row_count())
            .unwrap_or(0)
    }

    // ==========================================================================
    // Accessors
    // ==========================================================================

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn is_terminated(&self) -> bool {
        self.view.is_terminated()
    }

    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    pub fn services(&self) -> &[ServiceRuntimeState] {
        self.services.items()
    }

    pub fn service(&self, name: &str) -> Option<&ServiceRuntimeState> {
        self.services.find(|s| s.name() == name)
    }

    /// Service under the list cursor
    pub fn highlighted(&self) -> Option<&ServiceRuntimeState> {
        self.services.selected()
    }

    pub fn cache(&self) -> &StatsCache<DetailPayload> {
        &self.cache
    }

    pub fn detail(&self) -> &AsyncState<Snapshot> {
        &self.detail
    }

    pub fn detail_row(&self) -> usize {
        self.detail_row
    }

    pub fn is_fetch_pending(&self, name: &str) -> bool {
        self.pending.contains(name)
    }

    pub fn sweeps_completed(&self) -> u64 {
        self.sweeps
    }

    /// Project the current state for rendering
    pub fn view(&self) -> ViewModel<'_> {
        self.view_at(Instant::now())
    }

    pub fn view_at(&self, now: Instant) -> ViewModel<'_> {
        let rows = self
            .services
            .iter_with_selection()
            .map(|(_, state, highlighted)| ServiceRow {
                name: state.name(),
                url: &state.descriptor.url,
                description: state.descriptor.description_or_default(),
                kind: state.descriptor.kind,
                health: state.health(),
                status_text: state.status_text(),
                highlighted,
                active: state.active,
                has_detail: state.supports_detail(),
            })
            .collect();

        let detail = self.view.detail_target().and_then(|name| {
            let state = self.service(name)?;
            Some(DetailView {
                service: state.name(),
                kind: state.descriptor.kind,
                health: state.health(),
                state: &self.detail,
                age: self.detail.data().map(|snapshot| snapshot.age(now)),
                selected_row: self.detail_row,
            })
        });

        ViewModel {
            title: &self.title,
            view: &self.view,
            highlighted: self.services.selected_index(),
            rows,
            status_line: &self.status_line,
            overall: aggregate_health(self.services.items()),
            detail,
        }
    }
}
