//! Application state and main loop

use crate::action::Action;
use crate::components::{Component, DetailComponent, ServiceListComponent};
use crate::tui::{self, Tui};
use crate::worker;
use color_eyre::Result;
use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use homelab_pilot_core::{Dashboard, Event, HealthScheduler, ScheduledWork};
use homelab_rs::{DashboardConfig, HomelabClient};
use ratatui::Frame;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// How long to wait for terminal input before draining task results
const TICK_RATE: Duration = Duration::from_millis(100);

/// Main application state
pub struct App {
    dashboard: Dashboard,
    client: HomelabClient,
    service_list: ServiceListComponent,
    detail: DetailComponent,
    tick_rate: Duration,
    /// Channel for background task results
    event_rx: mpsc::UnboundedReceiver<Event>,
    event_tx: mpsc::UnboundedSender<Event>,
    health_task: Option<JoinHandle<()>>,
    fetch_tasks: Vec<JoinHandle<()>>,
}

impl App {
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Ok(Self {
            dashboard: Dashboard::from_config(config)?,
            client: HomelabClient::new(config.probe_timeout())?,
            service_list: ServiceListComponent::new(),
            detail: DetailComponent::new(),
            tick_rate: TICK_RATE,
            event_rx,
            event_tx,
            health_task: None,
            fetch_tasks: Vec::new(),
        })
    }

    /// Run the application
    pub async fn run(&mut self) -> Result<()> {
        tui::install_panic_hook();
        let mut terminal = tui::init()?;

        let result = self.main_loop(&mut terminal).await;

        self.shutdown();
        tui::restore()?;

        result
    }

    /// Main event loop
    async fn main_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let work = self.dashboard.init();
        self.execute(work);

        loop {
            terminal.draw(|frame| self.draw(frame))?;

            // Handle events with timeout
            if event::poll(self.tick_rate)? {
                match event::read()? {
                    TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        if let Some(action) = Action::from_key_event(key) {
                            self.handle_action(action);
                        }
                    }
                    TermEvent::Resize(w, h) => self.handle_action(Action::Resize(w, h)),
                    _ => {}
                }
            }

            // Check async results (non-blocking)
            while let Ok(event) = self.event_rx.try_recv() {
                let work = self.dashboard.handle(event);
                self.execute(work);
            }

            if self.dashboard.is_terminated() {
                break;
            }
        }

        Ok(())
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Key(key) => {
                let work = self.dashboard.handle(Event::Input(key));
                self.execute(work);
            }
            Action::Resize(w, h) => {
                tracing::debug!("Terminal resized to {}x{}", w, h);
            }
        }
    }

    /// Start the background work the controller asked for
    fn execute(&mut self, work: Vec<ScheduledWork>) {
        self.fetch_tasks.retain(|task| !task.is_finished());

        for item in work {
            match item {
                ScheduledWork::StartHealthChecks {
                    first_delay,
                    interval,
                } => {
                    let scheduler = HealthScheduler::new(interval).with_initial_delay(first_delay);
                    let handle = worker::spawn_health_checks(
                        self.client.clone(),
                        self.dashboard.registry().clone(),
                        scheduler,
                        self.event_tx.clone(),
                    );
                    if let Some(previous) = self.health_task.replace(handle) {
                        previous.abort();
                    }
                }
                ScheduledWork::FetchDetail(name) => {
                    let Some(service) = self.dashboard.registry().get(&name).cloned() else {
                        tracing::warn!("Cannot fetch detail for unknown service {}", name);
                        continue;
                    };
                    self.fetch_tasks.push(worker::spawn_detail_fetch(
                        self.client.clone(),
                        service,
                        self.event_tx.clone(),
                    ));
                }
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let view = self.dashboard.view();
        let result = if view.detail.is_some() {
            self.detail.draw(frame, area, &view)
        } else {
            self.service_list.draw(frame, area, &view)
        };
        if let Err(e) = result {
            tracing::error!("Draw failed: {}", e);
        }
    }

    fn shutdown(&mut self) {
        if let Some(task) = self.health_task.take() {
            task.abort();
        }
        for task in self.fetch_tasks.drain(..) {
            task.abort();
        }
        tracing::debug!("Background tasks stopped");
    }
}
