use capable_site::theme::{Palette, ThemeMode, THEME_STORAGE_KEY};
use std::rc::Rc;
use zoon::{eprintln, *};

/// The active color mode, persisted in `local_storage`.
#[derive(Clone)]
pub struct Theme {
    mode: Mutable<ThemeMode>,
    _store_mode_task: Rc<TaskHandle>,
}

impl Theme {
    pub fn load() -> Self {
        let mode = match local_storage().get::<ThemeMode>(THEME_STORAGE_KEY) {
            Some(Ok(mode)) => mode,
            Some(Err(error)) => {
                eprintln!("[theme] Ignoring stored theme: {error:#?}");
                ThemeMode::default()
            }
            None => ThemeMode::default(),
        };
        let mode = Mutable::new(mode);

        let _store_mode_task = Rc::new(Task::start_droppable(
            mode.signal().for_each_sync(|mode| {
                if let Err(error) = local_storage().insert(THEME_STORAGE_KEY, &mode) {
                    eprintln!("[theme] Failed to store theme: {error:#?}");
                }
            }),
        ));

        Self {
            mode,
            _store_mode_task,
        }
    }

    pub fn toggle(&self) {
        self.mode.update(ThemeMode::toggled);
    }

    pub fn mode_signal(&self) -> impl Signal<Item = ThemeMode> + use<> {
        self.mode.signal()
    }

    /// One palette entry, following the mode.
    pub fn color(&self, pick: fn(&Palette) -> &'static str) -> impl Signal<Item = &'static str> + use<> {
        self.mode.signal().map(move |mode| pick(mode.palette()))
    }
}
