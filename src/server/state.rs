use std::sync::{Arc, Mutex};

use crate::reports::ReportStore;
use crate::settings::Settings;
use crate::view::MapView;

// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: ReportStore,
    pub view: Arc<Mutex<MapView>>,
    pub settings: Arc<Mutex<Settings>>,
}

impl AppState {
    pub fn new(store: ReportStore, view: MapView, settings: Settings) -> Self {
        Self {
            store,
            view: Arc::new(Mutex::new(view)),
            settings: Arc::new(Mutex::new(settings)),
        }
    }
}
