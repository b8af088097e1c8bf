// UI layer: drives the two screens from the terminal using `dialoguer`.
// Each loop iteration clears the screen, renders the active screen and
// waits for one user action, which becomes an `app::Event`.

use crate::app::{App, Event};
use crate::config::Config;
use crate::contents::contents_json;
use crate::router::Route;
use crate::style::{Palette, Tone};
use crate::upload::{files_from_paths, parse_dropped_paths, Notifier, SelectedFile};
use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Shows the "wrong file" notice and blocks until the user presses Enter.
struct TerminalNotifier {
    palette: Palette,
}

impl Notifier for TerminalNotifier {
    fn notify(&mut self, message: &str) -> io::Result<()> {
        let prompt = format!("{} (press Enter)", self.palette.paint(message, Tone::Error));
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(())
    }
}

/// Main interactive loop. Runs until the user picks "Exit" on either screen.
pub fn run(config: &Config) -> Result<()> {
    let mut app = App::starting_at(config.initial_route);
    let mut notifier = TerminalNotifier { palette: config.palette };
    let mut stdout = io::stdout();

    loop {
        clear_screen(&mut stdout)?;
        app.render(&mut stdout, config.palette)
            .context("Failed to render screen")?;
        writeln!(stdout)?;

        let event = match app.route() {
            Route::Upload => match upload_menu(&mut app, config, &mut notifier)? {
                Some(event) => event,
                None => break,
            },
            Route::Contents => match contents_menu(config.palette)? {
                Some(event) => event,
                None => break,
            },
        };
        validate_with_spinner(&mut app, event, &mut notifier)?;
    }
    Ok(())
}

fn clear_screen(out: &mut io::Stdout) -> Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0)).context("Failed to clear terminal")
}

/// Ask what to do on the upload screen. `None` means exit.
fn upload_menu(app: &mut App, config: &Config, notifier: &mut TerminalNotifier) -> Result<Option<Event>> {
    let items = ["Browse Files", "Drop a file onto this window", "Exit"];
    let selection = Select::new().items(&items).default(0).interact()?;
    match selection {
        0 => Ok(Some(Event::FilesSelected(browse(config)))),
        1 => {
            // The hover lasts for as long as the drop prompt is open.
            app.dispatch(Event::DragEnter, notifier)?;
            clear_screen(&mut io::stdout())?;
            app.render(&mut io::stdout(), config.palette)?;
            let pasted: String = Input::new()
                .with_prompt("Drop the file here, or press Enter to cancel")
                .allow_empty(true)
                .interact_text()?;
            let paths = parse_dropped_paths(&pasted);
            if paths.is_empty() {
                Ok(Some(Event::DragLeave))
            } else {
                Ok(Some(Event::Drop(files_from_paths(paths))))
            }
        }
        _ => Ok(None),
    }
}

/// Native file dialog limited to `.pdf`, like the browser's `accept`.
fn browse(config: &Config) -> Vec<SelectedFile> {
    rfd::FileDialog::new()
        .set_title("Select a PDF")
        .add_filter("PDF", &["pdf"])
        .set_directory(&config.start_dir)
        .pick_file()
        .map(|path| vec![SelectedFile::from_path(&path)])
        .unwrap_or_default()
}

/// Ask what to do on the contents screen. `None` means exit.
fn contents_menu(palette: Palette) -> Result<Option<Event>> {
    loop {
        let items = ["Back to Upload", "Export as JSON", "Exit"];
        let selection = Select::new().items(&items).default(0).interact()?;
        match selection {
            0 => return Ok(Some(Event::NavigateBack)),
            1 => {
                let json = contents_json().context("Serializing table of contents")?;
                println!("{}", palette.paint(&json, Tone::Body));
            }
            _ => return Ok(None),
        }
    }
}

/// Dispatch the event, showing a short spinner while a file is checked.
fn validate_with_spinner(app: &mut App, event: Event, notifier: &mut TerminalNotifier) -> Result<()> {
    let checks_file = matches!(&event, Event::FilesSelected(f) | Event::Drop(f) if !f.is_empty());
    if !checks_file {
        app.dispatch(event, notifier)?;
        return Ok(());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Checking file...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    // short pause so the spinner is visible
    thread::sleep(Duration::from_millis(300));
    spinner.finish_and_clear();

    app.dispatch(event, notifier)
        .context("Rejection notice was not acknowledged")?;
    Ok(())
}
