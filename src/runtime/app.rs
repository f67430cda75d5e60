use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use crate::commands::Cmd;
use crate::messages::{AppMsg, LayoutMsg, Msg};
use crate::model::AppModel;
use crate::update::update;

use super::picker::{FilePicker, LAYOUT_FILTERS};

/// Drives the update loop and executes the commands it returns
///
/// Pickers and file I/O run on worker threads; their results come back as
/// messages over a channel and are fed through `update` like any other.
pub struct App {
    model: AppModel,
    picker: Arc<dyn FilePicker>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    /// Worker threads that have not reported back yet
    pending: usize,
    quit: bool,
}

impl App {
    pub fn new(model: AppModel, picker: Arc<dyn FilePicker>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            picker,
            msg_tx,
            msg_rx,
            pending: 0,
            quit: false,
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether side effects are still in flight
    pub fn is_busy(&self) -> bool {
        self.pending > 0
    }

    /// Run a message through the update loop; returns whether a redraw is due
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        match update(&mut self.model, msg) {
            Some(cmd) => {
                let needs_redraw = cmd.needs_redraw();
                self.process_cmd(cmd);
                needs_redraw
            }
            None => false,
        }
    }

    /// Block until every in-flight side effect has reported back
    ///
    /// Results can start further work (a picker answer triggers a read), which
    /// is waited for as well.
    pub fn wait_idle(&mut self) -> bool {
        let mut needs_redraw = false;
        while self.pending > 0 {
            let Ok(msg) = self.msg_rx.recv() else {
                break;
            };
            self.pending -= 1;
            needs_redraw |= self.dispatch(msg);
        }
        needs_redraw
    }

    /// Run `work` on a worker thread and count it as pending until it reports
    ///
    /// A panicking worker still reports, as `AppMsg::TaskFailed`, so
    /// `wait_idle` never waits on a message that cannot arrive.
    fn spawn<F>(&mut self, task: &'static str, work: F)
    where
        F: FnOnce() -> Msg + Send + 'static,
    {
        let tx = self.msg_tx.clone();
        self.pending += 1;
        std::thread::spawn(move || {
            let msg = catch_unwind(AssertUnwindSafe(work)).unwrap_or_else(|_| {
                Msg::App(AppMsg::TaskFailed {
                    task: task.to_string(),
                })
            });
            let _ = tx.send(msg);
        });
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::Quit => {
                self.quit = true;
            }

            // =====================================================================
            // File pickers
            // =====================================================================
            Cmd::ShowOpenLayoutDialog { start_dir } => {
                let picker = Arc::clone(&self.picker);
                self.spawn("Open dialog", move || {
                    let path = picker.pick_open_file(LAYOUT_FILTERS, start_dir.as_deref());
                    Msg::Layout(LayoutMsg::OpenDialogResult { path })
                });
            }
            Cmd::ShowSaveLayoutDialog {
                start_dir,
                suggested_name,
                default_extension,
            } => {
                let picker = Arc::clone(&self.picker);
                self.spawn("Save dialog", move || {
                    let path = picker.pick_save_file(
                        LAYOUT_FILTERS,
                        start_dir.as_deref(),
                        &suggested_name,
                        &default_extension,
                    );
                    Msg::Layout(LayoutMsg::SaveDialogResult { path })
                });
            }

            // =====================================================================
            // File I/O
            // =====================================================================
            Cmd::ReadLayout { path } => {
                self.spawn("Reading layout", move || {
                    let result = std::fs::read(&path).map_err(|e| e.to_string());
                    Msg::Layout(LayoutMsg::LayoutRead { path, result })
                });
            }
            Cmd::WriteLayout { path, bytes } => {
                self.spawn("Writing layout", move || {
                    let result = write_file(&path, &bytes).map_err(|e| e.to_string());
                    Msg::Layout(LayoutMsg::LayoutWritten { path, result })
                });
            }
        }
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::runtime::picker::NoDialogs;

    #[test]
    fn test_quit_sets_flag() {
        let mut app = App::new(AppModel::empty(LayoutConfig::default()), Arc::new(NoDialogs));
        assert!(!app.should_quit());
        app.dispatch(Msg::App(AppMsg::Quit));
        assert!(app.should_quit());
    }

    #[test]
    fn test_cancelled_dialog_leaves_app_idle() {
        let mut app = App::new(AppModel::new(LayoutConfig::default()), Arc::new(NoDialogs));
        app.dispatch(Msg::Layout(LayoutMsg::OpenLayout));
        assert!(app.is_busy());
        app.wait_idle();
        assert!(!app.is_busy());
        assert!(app.model().has_layout());
        assert!(app.model().layout_path.is_none());
    }
}
