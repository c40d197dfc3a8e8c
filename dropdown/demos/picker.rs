//! Interactive dropdown demo.
//!
//! Click the control to open the menu, pick an option, click elsewhere
//! to close. Press `q` to quit. Picks are logged to `picker.log`.

use std::fs::File;
use std::io::{self, Write};
use std::sync::Arc;

use dropdown::prelude::*;
use eldom::{render_to_string, Key, TermEvent, Terminal};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("picker.log")?,
    )?;

    let state = DropdownState::new();
    let document = Document::new();
    let _binding = DropdownBinding::mount(&state, &document);
    let registry = HandlerRegistry::new();

    let mut handlers = WidgetHandlers::new();
    let on_change: Handler = Arc::new(|hx: &HandlerContext| {
        if let Some(selection) = hx.data().selection() {
            log::info!("picked {} ({})", selection.label, selection.value);
        }
    });
    handlers.insert("on_change", on_change);

    let mut terminal = Terminal::new()?;
    loop {
        registry.clear();
        let root = Dropdown::new()
            .options([
                DropdownOption::from("apple"),
                DropdownOption::from(("citrus-orange", "Orange")),
                DropdownOption::group("Berries", ["strawberry", "blueberry"]),
            ])
            .placeholder("Pick a fruit...")
            .state(&state)
            .build(&registry, &handlers);
        print_tree(&render_to_string(&root))?;
        document.render(root);
        state.clear_dirty();

        match terminal.next_event(None)? {
            Some(TermEvent::Key(Key::Char('q'))) => break,
            Some(TermEvent::Pointer(event)) => {
                EventDispatcher::new(&registry, &document).dispatch(&event);
            }
            _ => {}
        }
    }
    terminal.restore()?;
    Ok(())
}

/// Raw mode needs explicit carriage returns.
fn print_tree(tree: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\r\n--- dropdown (q quits) ---\r\n")?;
    for line in tree.lines() {
        write!(stdout, "{line}\r\n")?;
    }
    stdout.flush()
}
