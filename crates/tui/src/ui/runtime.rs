//! Runtime: event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode,
//!   bracketed paste).
//! - Drive a single event loop that waits on terminal input and Ctrl+C.
//! - Route events to `MainView` and execute the returned `Effect`s.
//!
//! A dedicated input task blocks on `crossterm::event::read()` and forwards
//! events over a channel so `poll()` and `read()` always run on the same
//! thread.

use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use navfilter_types::Effect;
use rat_focus::FocusBuilder;
use ratatui::{Terminal, prelude::*};
use tokio::{signal, sync::mpsc};
use tracing::{debug, info, warn};

use crate::app::{App, TuiConfig};
use crate::ui::components::component::Component;
use crate::ui::main_component::MainView;

/// Whether the loop keeps going after a batch of effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

/// Spawn the input task and return the receiving end of its channel.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    tokio::task::spawn_blocking(move || {
        let poll_interval = Duration::from_millis(50);
        loop {
            if sender.is_closed() {
                break;
            }
            match event::poll(poll_interval) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    warn!("Failed to poll event: {}", e);
                    break;
                }
            }
            match event::read() {
                Ok(event) => {
                    if let Err(e) = sender.blocking_send(event) {
                        debug!("Input channel closed: {}", e);
                        break;
                    }
                }
                Err(e) => {
                    warn!("Failed to read event: {}", e);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableBracketedPaste)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    // Rebuild focus just before rendering so structure changes are reflected
    let old_focus = std::mem::take(&mut app.focus);
    app.focus = Rc::new(FocusBuilder::rebuild_for(&*app, Some(Rc::unwrap_or_clone(old_focus))));
    if app.focus.focused().is_none() {
        main_view.restore_focus(app);
    }
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Paste(text) => main_view.handle_paste(app, &text),
        Event::Resize(..) | Event::Mouse(_) | Event::FocusGained | Event::FocusLost => Vec::new(),
    }
}

fn process_effects(app: &mut App, effects: Vec<Effect>) -> LoopControl {
    for effect in effects {
        match effect {
            Effect::SwitchTo(route) => app.switch_to(&route),
            Effect::Quit => return LoopControl::Exit,
        }
    }
    LoopControl::Continue
}

/// Sets up the terminal, runs the event loop until quit, and restores the
/// terminal even when the loop fails.
pub async fn run_app(config: TuiConfig) -> Result<()> {
    let mut app = App::new(&config);
    let mut main_view = MainView::new();
    let mut input_receiver = spawn_input_thread();
    let mut terminal = setup_terminal()?;
    info!(panel = %config.panel, "started TUI");

    let result = event_loop(&mut terminal, &mut app, &mut main_view, &mut input_receiver).await;
    // Closing the channel stops the input task.
    drop(input_receiver);
    let cleanup = cleanup_terminal(&mut terminal);
    info!("stopped TUI");
    merge_exit_results(result, cleanup)
}

/// The event loop's error wins; a cleanup failure is only returned when the
/// loop itself succeeded.
fn merge_exit_results(result: Result<()>, cleanup: Result<()>) -> Result<()> {
    match (result, cleanup) {
        (Err(error), Err(cleanup_error)) => {
            warn!(error = %cleanup_error, "failed to restore terminal");
            Err(error)
        }
        (result, Ok(())) => result,
        (Ok(()), Err(cleanup_error)) => Err(cleanup_error),
    }
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    main_view: &mut MainView,
    input_receiver: &mut mpsc::Receiver<Event>,
) -> Result<()> {
    render(terminal, app, main_view)?;
    loop {
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(input_event) = maybe_event else {
                    break;
                };
                let effects = handle_input_event(app, main_view, input_event);
                if process_effects(app, effects) == LoopControl::Exit {
                    break;
                }
            }
            _ = signal::ctrl_c() => {
                break;
            }
        }
        render(terminal, app, main_view)?;
    }
    Ok(())
}
