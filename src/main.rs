use fltk::app;

use dev_handbook::app::messages::Message;
use dev_handbook::app::state::{start_system_theme_watcher, AppState};

fn main() {
    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut state = AppState::new(sender);
    state.show();
    start_system_theme_watcher(sender);

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            if !state.handle(msg) {
                break;
            }
        }
    }
}
