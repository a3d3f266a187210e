mod app;
mod config;
mod error;
mod event;
mod logging;
mod search;
mod state;
mod terminal;
mod ui;

use std::time::Duration;
use tokio::sync::mpsc;

use crate::app::App;
use crate::config::Config;
use crate::event::Event;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let config = Config::load().inspect_err(|err| tracing::error!(error = %err, "config load failed"))?;

    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    // Background thread: read crossterm events and feed into channel
    std::thread::spawn(move || loop {
        if !crossterm::event::poll(Duration::from_millis(250)).unwrap_or(false) {
            if tx.is_closed() {
                break;
            }
            continue;
        }
        let sent = match crossterm::event::read() {
            Ok(crossterm::event::Event::Key(key)) => tx.send(Event::Key(key)),
            Ok(crossterm::event::Event::Resize(_, _)) => tx.send(Event::Resize),
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::warn!(error = %err, "terminal event read failed");
                Ok(())
            }
        };
        if sent.is_err() {
            break;
        }
    });

    let mut terminal = terminal::init()?;
    let mut app = App::new(&config);

    let result = run_loop(&mut terminal, &mut app, &mut rx).await;

    terminal::restore()?;
    tracing::info!("tuiman exiting");
    result
}

async fn run_loop(
    terminal: &mut terminal::Tui,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<Event>,
) -> anyhow::Result<()> {
    loop {
        if app.state.dirty {
            terminal.draw(|frame| ui::layout::render(frame, &app.state))?;
            app.state.dirty = false;
        }

        match rx.recv().await {
            Some(event) => app.handle_event(event),
            None => break,
        }

        if app.state.should_quit {
            break;
        }
    }
    Ok(())
}
