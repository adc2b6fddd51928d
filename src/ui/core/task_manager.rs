use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::actions::{Action, SidebarSelection};
use crate::garden::{ApiError, GardenService};
use crate::ui::components::toast::Severity;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Spawns storage operations off the UI thread and feeds their outcomes
/// back into the event loop as actions.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn a background load of beds and the plants for the current view.
    pub fn spawn_data_load(&mut self, service: GardenService, selection: SidebarSelection) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let description = "Loading garden data".to_string();

        let handle = tokio::spawn(async move {
            let beds = match service.get_beds().await {
                Ok(beds) => beds,
                Err(e) => {
                    let _ = action_sender.send(Action::ReportError(e));
                    return;
                }
            };

            let plants = match &selection {
                SidebarSelection::Bed(index) => match beds.get(*index) {
                    Some(bed) => service.get_plants_for_bed(&bed.uuid).await,
                    None => Ok(Vec::new()),
                },
                _ => service.get_plants().await,
            };

            match plants {
                Ok(plants) => {
                    let _ = action_sender.send(Action::DataLoaded { beds, plants });
                }
                Err(e) => {
                    let _ = action_sender.send(Action::ReportError(e));
                }
            }
        });

        self.track(task_id, handle, description);
        task_id
    }

    /// Spawn a background load of garden statistics.
    pub fn spawn_stats_load(&mut self, service: GardenService) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let description = "Loading garden stats".to_string();

        let handle = tokio::spawn(async move {
            match (service.garden_stats().await, service.get_recent_harvests(10).await) {
                (Ok(stats), Ok(recent_harvests)) => {
                    let _ = action_sender.send(Action::StatsLoaded { stats, recent_harvests });
                }
                (Err(e), _) | (_, Err(e)) => {
                    let _ = action_sender.send(Action::ReportError(e));
                }
            }
        });

        self.track(task_id, handle, description);
        task_id
    }

    /// Spawn a mutating garden operation (create, advance, delete, harvest).
    ///
    /// On success the UI gets a success toast and a data refresh; on failure
    /// the error goes through the central reporting pipeline.
    pub fn spawn_operation<F, Fut>(&mut self, operation: F, success_message: String, description: String) -> TaskId
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = Result<(), ApiError>> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let desc_for_task = description.clone();

        let handle = tokio::spawn(async move {
            match operation().await {
                Ok(()) => {
                    let _ = action_sender.send(Action::ShowToast {
                        message: success_message,
                        severity: Severity::Success,
                    });
                    let _ = action_sender.send(Action::RefreshData);
                }
                Err(e) => {
                    log::warn!("{} failed: {}", description, e);
                    let _ = action_sender.send(Action::ReportError(e));
                }
            }
        });

        self.track(task_id, handle, desc_for_task);
        task_id
    }

    fn track(&mut self, task_id: TaskId, handle: JoinHandle<()>, description: String) {
        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };
        self.tasks.insert(task_id, task);
    }

    /// Drop the bookkeeping for tasks that have finished.
    pub fn cleanup_finished_tasks(&mut self) {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in finished {
            self.tasks.remove(&task_id);
        }
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
