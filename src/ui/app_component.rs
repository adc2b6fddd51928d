//! Top-level application component.
//!
//! Owns all UI components and application state, routes key events and
//! background-task outcomes, and draws every frame.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::constants::{
    SUCCESS_BED_CREATED, SUCCESS_BED_DELETED, SUCCESS_HARVEST_RECORDED, SUCCESS_PLANT_CREATED,
    SUCCESS_PLANT_DELETED, SUCCESS_STATUS_ADVANCED,
};
use crate::garden::{BedDisplay, GardenService, NewBed, NewHarvest, NewPlant, PlantDisplay};
use crate::notify;
use crate::ui::components::{
    DialogComponent, HelpPanel, PlantListComponent, SidebarComponent, StatsPanel, StatusBar,
    ToastManager,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::TaskManager,
    Component, SidebarSelection,
};
use crate::ui::layout::LayoutManager;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub beds: Vec<BedDisplay>,
    pub plants: Vec<PlantDisplay>,
    pub sidebar_selection: SidebarSelection,
    pub loading: bool,
    pub show_help: bool,
}

pub struct AppComponent {
    // Component composition
    sidebar: SidebarComponent,
    plant_list: PlantListComponent,
    stats_panel: StatsPanel,
    dialog: DialogComponent,
    toasts: ToastManager,

    // Application state
    state: AppState,

    // Services
    service: GardenService,
    config: Config,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(service: GardenService, config: Config) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();

        let mut plant_list = PlantListComponent::new();
        plant_list.set_display_options(
            config.display.date_format.clone(),
            config.display.show_varieties,
            config.display.show_notes,
        );

        let toasts = ToastManager::with_ttl(Duration::from_secs(config.notifications.duration_secs));

        let sidebar_selection = match config.ui.default_view.as_str() {
            "stats" => SidebarSelection::Stats,
            _ => SidebarSelection::AllPlants,
        };

        let state = AppState {
            loading: true,
            sidebar_selection: sidebar_selection.clone(),
            ..Default::default()
        };

        let mut sidebar = SidebarComponent::new();
        sidebar.selection = sidebar_selection;

        Self {
            sidebar,
            plant_list,
            stats_panel: StatsPanel::new(),
            dialog: DialogComponent::new(),
            toasts,
            state,
            service,
            config,
            task_manager,
            background_action_rx,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Kick off the first data load on startup
    pub fn trigger_initial_load(&mut self) {
        self.task_manager
            .spawn_data_load(self.service.clone(), self.state.sidebar_selection.clone());
        if self.state.sidebar_selection == SidebarSelection::Stats {
            self.task_manager.spawn_stats_load(self.service.clone());
        }
    }

    /// Drain actions produced by finished background tasks
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    /// Advance time-based state: toast expiry and task bookkeeping.
    ///
    /// Returns true when the screen needs a redraw (a toast was dismissed
    /// or is still counting down).
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let before = self.toasts.len();
        self.toasts.tick(elapsed);
        self.task_manager.cleanup_finished_tasks();
        before != self.toasts.len() || !self.toasts.is_empty()
    }

    pub async fn handle_event(&mut self, event: EventType) -> anyhow::Result<()> {
        if let EventType::Key(key) = event {
            let action = self.route_key_event(key);
            self.handle_action(action).await;
        }
        Ok(())
    }

    /// Translate a key press into an action, respecting modal focus.
    fn route_key_event(&mut self, key: KeyEvent) -> Action {
        // Modal dialogs capture everything
        if self.dialog.is_open() {
            return self.dialog.handle_key_events(key);
        }

        if self.state.show_help {
            return match key.code {
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => Action::ShowHelp(false),
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('?') => Action::ShowHelp(true),
            KeyCode::Char('r') => Action::RefreshData,
            KeyCode::Char('b') => Action::ShowDialog(DialogType::BedCreation),
            KeyCode::Char('p') => match self.sidebar.selected_bed() {
                Some(bed) => Action::ShowDialog(DialogType::PlantCreation { bed_uuid: bed.uuid }),
                None => {
                    self.toasts.warning("Select a bed first (Shift+J/K)");
                    Action::None
                }
            },
            KeyCode::Char('X') => match self.sidebar.selected_bed() {
                Some(bed) => Action::ShowDialog(DialogType::DeleteConfirmation {
                    item_type: "bed".to_string(),
                    item_name: bed.name.clone(),
                    item_uuid: bed.uuid,
                }),
                None => {
                    self.toasts.warning("Select a bed first (Shift+J/K)");
                    Action::None
                }
            },
            _ if key.modifiers.contains(KeyModifiers::SHIFT)
                && matches!(
                    key.code,
                    KeyCode::Char('J') | KeyCode::Char('K') | KeyCode::Down | KeyCode::Up
                ) =>
            {
                self.sidebar.handle_key_events(key)
            }
            _ => {
                if self.state.sidebar_selection == SidebarSelection::Stats {
                    Action::None
                } else {
                    self.plant_list.handle_key_events(key)
                }
            }
        }
    }

    pub async fn handle_action(&mut self, action: Action) {
        match action {
            Action::NavigateToSidebar(selection) => {
                self.sidebar.update(Action::NavigateToSidebar(selection.clone()));
                self.state.sidebar_selection = selection.clone();
                self.state.loading = true;
                self.task_manager.spawn_data_load(self.service.clone(), selection.clone());
                if selection == SidebarSelection::Stats {
                    self.task_manager.spawn_stats_load(self.service.clone());
                }
            }

            Action::CreateBed { name, dimensions } => {
                let service = self.service.clone();
                self.task_manager.spawn_operation(
                    move || async move {
                        service
                            .create_bed(NewBed {
                                name,
                                dimensions,
                                notes: None,
                            })
                            .await
                            .map(|_| ())
                    },
                    SUCCESS_BED_CREATED.to_string(),
                    "Create bed".to_string(),
                );
            }
            Action::DeleteBed(uuid) => {
                let service = self.service.clone();
                self.task_manager.spawn_operation(
                    move || async move { service.delete_bed(&uuid).await },
                    SUCCESS_BED_DELETED.to_string(),
                    "Delete bed".to_string(),
                );
            }

            Action::CreatePlant {
                name,
                variety,
                bed_uuid,
                quantity,
            } => {
                let service = self.service.clone();
                self.task_manager.spawn_operation(
                    move || async move {
                        service
                            .create_plant(NewPlant {
                                name,
                                variety,
                                bed_uuid,
                                quantity,
                                space_required: 1,
                                planting_date: None,
                                season: None,
                                expected_harvest_date: None,
                                notes: None,
                            })
                            .await
                            .map(|_| ())
                    },
                    SUCCESS_PLANT_CREATED.to_string(),
                    "Create plant".to_string(),
                );
            }
            Action::AdvancePlantStatus(uuid) => {
                let service = self.service.clone();
                self.task_manager.spawn_operation(
                    move || async move { service.advance_plant_status(&uuid).await.map(|_| ()) },
                    SUCCESS_STATUS_ADVANCED.to_string(),
                    "Advance plant status".to_string(),
                );
            }
            Action::DeletePlant(uuid) => {
                let service = self.service.clone();
                self.task_manager.spawn_operation(
                    move || async move { service.delete_plant(&uuid).await },
                    SUCCESS_PLANT_DELETED.to_string(),
                    "Delete plant".to_string(),
                );
            }

            Action::RecordHarvest {
                plant_uuid,
                quantity,
                unit,
            } => {
                let service = self.service.clone();
                self.task_manager.spawn_operation(
                    move || async move {
                        service
                            .record_harvest(NewHarvest {
                                plant_uuid,
                                quantity,
                                unit,
                                notes: None,
                            })
                            .await
                            .map(|_| ())
                    },
                    SUCCESS_HARVEST_RECORDED.to_string(),
                    "Record harvest".to_string(),
                );
            }

            Action::DataLoaded { beds, plants } => {
                self.state.beds = beds;
                self.state.plants = plants;
                self.state.loading = false;
                self.sync_component_data();
            }
            Action::StatsLoaded { stats, recent_harvests } => {
                self.stats_panel.update_data(stats, recent_harvests);
                self.state.loading = false;
            }
            Action::RefreshData => {
                self.task_manager
                    .spawn_data_load(self.service.clone(), self.state.sidebar_selection.clone());
                if self.state.sidebar_selection == SidebarSelection::Stats {
                    self.task_manager.spawn_stats_load(self.service.clone());
                }
            }

            Action::ShowToast { message, severity } => {
                self.toasts.show(message, severity);
            }
            Action::ReportError(error) => {
                notify::report_api_error(&mut self.toasts, &error);
            }

            Action::ShowDialog(dialog) => {
                self.dialog.open(dialog);
            }
            Action::ShowHelp(show) => {
                self.state.show_help = show;
            }

            Action::Quit => {
                self.should_quit = true;
            }
            Action::None => {}
        }
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        self.sidebar.update_data(self.state.beds.clone());
        self.plant_list.update_data(
            self.state.plants.clone(),
            self.state.beds.clone(),
            self.state.sidebar_selection.clone(),
        );
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let main_areas = LayoutManager::main_layout(area);
        let panes = LayoutManager::top_pane_layout(main_areas[0], self.config.ui.sidebar_width);

        self.sidebar.render(f, panes[0]);

        if self.state.sidebar_selection == SidebarSelection::Stats {
            self.stats_panel.render(f, panes[1]);
        } else {
            self.plant_list.render(f, panes[1]);
        }

        StatusBar::render(f, main_areas[1], self.state.loading, self.active_task_count());

        if self.dialog.is_open() {
            self.dialog.render(f, area);
        }

        if self.state.show_help {
            HelpPanel::render(f);
        }

        // Toasts draw last so they sit on top of everything
        self.toasts.render(f, area);
    }
}
