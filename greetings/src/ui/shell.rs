use std::rc::Rc;
use std::time::Duration;

use log::info;
use tuidom::{Buffer, Event, HitMap};

use super::{AppEnv, Frame, GreetingList, OnboardingScreen, Target};
use crate::error::SnapshotError;
use crate::saveable::{Saveable, SavedState};
use crate::state::{AppState, GreetingItem, Screen};

const HAS_ONBOARDED_KEY: &str = "app_shell.has_onboarded";

/// Root of the UI: onboarding until the user continues, then the list.
#[derive(Debug)]
pub struct AppShell {
    env: Rc<AppEnv>,
    items: Rc<[GreetingItem]>,
    state: AppState,
    onboarding: OnboardingScreen,
    /// Mounted when the list view is first shown.
    list: Option<GreetingList>,
    hits: HitMap<Target>,
}

impl AppShell {
    pub fn new(env: Rc<AppEnv>, items: Rc<[GreetingItem]>) -> Self {
        Self {
            env,
            items,
            state: AppState::new(),
            onboarding: OnboardingScreen::new(),
            list: None,
            hits: HitMap::new(),
        }
    }

    /// Build a shell and load `saved` into it before anything is painted.
    pub fn restored(
        env: Rc<AppEnv>,
        items: Rc<[GreetingItem]>,
        saved: &SavedState,
    ) -> Result<Self, SnapshotError> {
        let mut shell = Self::new(env, items);
        shell.restore(saved)?;
        Ok(shell)
    }

    /// Tear this shell down and rebuild it from its own snapshot, the way
    /// the UI is rebuilt when the environment changes under it.
    pub fn recreate(self) -> Result<Self, SnapshotError> {
        let mut saved = SavedState::new();
        self.save(&mut saved)?;
        let bytes = saved.to_bytes()?;
        let (env, items) = (Rc::clone(&self.env), Rc::clone(&self.items));
        drop(self);

        let saved = SavedState::from_bytes(&bytes)?;
        info!("recreating UI from {} byte snapshot", bytes.len());
        Self::restored(env, items, &saved)
    }

    pub fn screen(&self) -> Screen {
        self.state.screen()
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn list(&self) -> Option<&GreetingList> {
        self.list.as_ref()
    }

    pub fn list_mut(&mut self) -> Option<&mut GreetingList> {
        self.list.as_mut()
    }

    /// Move to the list view. Has no effect once already there.
    pub fn complete_onboarding(&mut self) {
        if self.state.complete_onboarding() {
            self.mount_list();
        }
    }

    fn mount_list(&mut self) -> &mut GreetingList {
        let (items, config) = (&self.items, &self.env.config);
        self.list
            .get_or_insert_with(|| GreetingList::new(Rc::clone(items), config))
    }

    /// Route one input event. Returns true if the frame needs repainting.
    pub fn handle(&mut self, event: &Event) -> bool {
        match self.state.screen() {
            Screen::Onboarding => {
                let mut continued = false;
                self.onboarding.handle(event, &self.hits, || continued = true);
                if continued {
                    self.complete_onboarding();
                }
                continued
            }
            Screen::ListView => match self.list.as_mut() {
                Some(list) => list.handle(event, &self.hits),
                None => false,
            },
        }
    }

    pub fn is_animating(&self) -> bool {
        self.list.as_ref().is_some_and(GreetingList::is_animating)
    }

    /// Advance animations by `dt`. Returns true while any is running.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.list.as_mut().is_some_and(|list| list.tick(dt))
    }

    /// Paint a full frame into `buf`.
    pub fn render(&mut self, buf: &mut Buffer) {
        let area = buf.area();
        buf.fill(area, self.env.config.theme.background.to_rgb());
        self.hits.clear();

        let mut frame = Frame {
            buf,
            hits: &mut self.hits,
            env: &self.env,
        };
        match (self.state.screen(), self.list.as_mut()) {
            (Screen::ListView, Some(list)) => list.render(area, &mut frame),
            _ => self.onboarding.render(area, &mut frame),
        }
    }
}

impl Saveable for AppShell {
    fn save(&self, saved: &mut SavedState) -> Result<(), SnapshotError> {
        saved.set(HAS_ONBOARDED_KEY, &self.state)?;
        match &self.list {
            Some(list) => list.save(saved),
            None => Ok(()),
        }
    }

    fn restore(&mut self, saved: &SavedState) -> Result<(), SnapshotError> {
        self.state = saved.get_or(HAS_ONBOARDED_KEY, AppState::new())?;
        if self.state.has_onboarded() {
            self.mount_list().restore(saved)?;
        }
        Ok(())
    }
}
