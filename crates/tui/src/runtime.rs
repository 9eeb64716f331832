//! Terminal runtime and event loop.

use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use log::info;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use crate::App;
use crate::outcome::SelectOutcome;

/// Run `app` in the terminal until the user accepts or cancels.
pub fn run(mut app: App<'_>) -> Result<SelectOutcome> {
	app.run()
}

impl App<'_> {
	/// Pump the terminal event loop until the user exits with a result.
	pub fn run(&mut self) -> Result<SelectOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture)?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		// Stamped on arrival; the navigator debounce compares these times.
		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send((event, Instant::now())).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let result: Result<SelectOutcome> = 'event_loop: loop {
			if self.take_dirty() {
				terminal.draw(|frame| self.draw(frame))?;
			}

			let (first, at) = match event_rx.recv_timeout(Duration::from_millis(100)) {
				Ok(received) => received,
				Err(mpsc::RecvTimeoutError::Timeout) => continue,
				Err(mpsc::RecvTimeoutError::Disconnected) => {
					break 'event_loop Err(anyhow!("input event channel disconnected"));
				}
			};

			let mut next = Some((first, at));
			while let Some((event, at)) = next.take() {
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						if let Some(outcome) = self.handle_key(key, at) {
							break 'event_loop Ok(outcome);
						}
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					Event::Resize(_, _) => self.mark_dirty(),
					_ => {}
				}
				next = event_rx.try_recv().ok();
			}
		};

		ratatui::restore();
		execute!(stdout(), DisableMouseCapture)?;

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		if let Ok(outcome) = &result {
			info!(
				"picker closed: accepted={} selected={}",
				outcome.accepted,
				outcome.selected.len()
			);
		}
		result
	}
}
