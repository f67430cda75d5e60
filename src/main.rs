use std::io;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::Parser;

use dock_layout::cli::CliArgs;
use dock_layout::config::LayoutConfig;
use dock_layout::config_paths;
use dock_layout::messages::{LayoutMsg, Msg};
use dock_layout::model::AppModel;
use dock_layout::runtime::{menu, App, FilePicker, NativePicker, NoDialogs};

fn main() -> Result<()> {
    let startup = CliArgs::parse().into_config().map_err(|e| anyhow!(e))?;

    dock_layout::tracing::init();
    config_paths::prepare_layouts_dir();

    let config = LayoutConfig::load();
    let mut model = if startup.wants_default_layout() {
        AppModel::new(config)
    } else {
        AppModel::empty(config)
    };
    if let Some(path) = config_paths::recent_layouts_path() {
        model.attach_recent_store(path);
    }

    let picker: Arc<dyn FilePicker> = if startup.dialogs {
        Arc::new(NativePicker)
    } else {
        Arc::new(NoDialogs)
    };
    let mut app = App::new(model, picker);

    if let Some(path) = startup.layout_file() {
        app.dispatch(Msg::Layout(LayoutMsg::OpenLayoutFile(path.clone())));
        app.wait_idle();
    }

    tracing::info!("Starting menu");
    menu::run(&mut app, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
