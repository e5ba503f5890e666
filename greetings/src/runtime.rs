//! Event loop: terminal input and animation frames on one thread.

use std::rc::Rc;
use std::time::Instant;

use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, info};
use tokio::time::{self, MissedTickBehavior};
use tuidom::{Event, Key, Terminal};

use crate::config::GreetingsConfig;
use crate::error::GreetingsError;
use crate::state::GreetingItem;
use crate::ui::{AppEnv, AppShell};

/// What the loop should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Rebuild the UI from a state snapshot.
    Recreate,
    Deliver,
}

/// Keys and events the runtime handles before the UI sees them.
pub fn command_for(event: &Event) -> Command {
    match *event {
        Event::Key { key, modifiers } => match key {
            Key::Char('c') if modifiers.ctrl => Command::Quit,
            Key::Char('q') | Key::Escape => Command::Quit,
            Key::Char('r') | Key::F(5) => Command::Recreate,
            _ => Command::Deliver,
        },
        Event::Resize { .. } => Command::Recreate,
        _ => Command::Deliver,
    }
}

pub struct Runtime {
    env: Rc<AppEnv>,
    items: Rc<[GreetingItem]>,
}

impl Runtime {
    pub fn new(config: GreetingsConfig) -> Self {
        let items = GreetingItem::sequence(config.item_count).into();
        Self {
            env: Rc::new(AppEnv::new(config)),
            items,
        }
    }

    /// Use an explicit list of names instead of the generated sequence.
    pub fn with_items(mut self, items: Vec<GreetingItem>) -> Self {
        self.items = items.into();
        self
    }

    pub fn shell(&self) -> AppShell {
        AppShell::new(Rc::clone(&self.env), Rc::clone(&self.items))
    }

    /// Run until the user quits.
    pub async fn run(self) -> Result<(), GreetingsError> {
        let mut terminal = Terminal::new()?;
        let mut shell = self.shell();
        let mut events = EventStream::new();

        let mut ticker = time::interval(self.env.config.frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last_frame: Option<Instant> = None;

        info!("starting with {} items", self.items.len());
        terminal.draw(|buf| shell.render(buf))?;

        loop {
            let mut dirty = false;

            tokio::select! {
                next = events.next() => {
                    let Some(raw) = next else { break };
                    let Some(event) = Event::from_crossterm(raw?) else { continue };

                    match command_for(&event) {
                        Command::Quit => break,
                        Command::Recreate => {
                            debug!("recreate requested by {:?}", event);
                            shell = shell.recreate()?;
                            last_frame = None;
                            terminal.invalidate();
                            dirty = true;
                        }
                        Command::Deliver => dirty = shell.handle(&event),
                    }
                }
                _ = ticker.tick(), if shell.is_animating() => {
                    let now = Instant::now();
                    let dt = last_frame.map_or(self.env.config.frame_interval, |t| now - t);
                    last_frame = shell.tick(dt).then_some(now);
                    dirty = true;
                }
            }

            if shell.is_animating() && last_frame.is_none() {
                last_frame = Some(Instant::now());
            }
            if dirty {
                terminal.draw(|buf| shell.render(buf))?;
            }
        }

        info!("shutting down");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuidom::Modifiers;

    #[test]
    fn test_quit_keys() {
        assert_eq!(command_for(&Event::key(Key::Char('q'))), Command::Quit);
        assert_eq!(command_for(&Event::key(Key::Escape)), Command::Quit);
        let ctrl_c = Event::Key {
            key: Key::Char('c'),
            modifiers: Modifiers::ctrl(),
        };
        assert_eq!(command_for(&ctrl_c), Command::Quit);
        assert_eq!(command_for(&Event::key(Key::Char('c'))), Command::Deliver);
    }

    #[test]
    fn test_resize_recreates() {
        let resize = Event::Resize {
            width: 80,
            height: 24,
        };
        assert_eq!(command_for(&resize), Command::Recreate);
        assert_eq!(command_for(&Event::key(Key::F(5))), Command::Recreate);
        assert_eq!(command_for(&Event::click(1, 1)), Command::Deliver);
    }

    #[test]
    fn test_runtime_builds_configured_items() {
        let runtime = Runtime::new(GreetingsConfig::new().item_count(12));
        let mut shell = runtime.shell();
        shell.complete_onboarding();
        assert_eq!(shell.list().map(|list| list.len()), Some(12));

        let runtime = runtime.with_items(GreetingItem::from_names(["World", "Compose"]));
        let mut shell = runtime.shell();
        shell.complete_onboarding();
        assert_eq!(shell.list().map(|list| list.items()[1].id()), Some("Compose"));
    }
}
