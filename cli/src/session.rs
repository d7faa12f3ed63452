//! Interactive loop: render, read a command, apply it to the view.

use std::io::{self, BufRead, Write};

use todo_core::{TodoView, Transport};

use crate::command::{Command, CommandError, HELP};
use crate::console::Console;

const PROMPT: &str = "todo> ";

pub fn run<T, R, W>(view: &mut TodoView<T>, console: &mut Console<R, W>) -> io::Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    view.load();
    console.print(&view.render())?;

    while let Some(line) = console.read_line(PROMPT)? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                console.print(&err.to_string())?;
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => {
                console.print(HELP)?;
                continue;
            }
            Command::Refresh => view.load(),
            Command::Add(title) => {
                if let Some(title) = title {
                    view.set_draft(title);
                }
                if let Some(request) = view.begin_add() {
                    console.print(&view.render())?;
                    let response = view.transport_mut().execute(request);
                    view.finish_add(response);
                }
            }
            Command::Toggle(n) => match view.todos().get(n - 1).map(|t| t.id) {
                Some(id) => view.toggle(id),
                None => {
                    console.print(&format!("no todo #{n}"))?;
                    continue;
                }
            },
            Command::Delete(n) => match view.todos().get(n - 1).map(|t| t.id) {
                Some(id) => view.remove(id, console),
                None => {
                    console.print(&format!("no todo #{n}"))?;
                    continue;
                }
            },
        }
        console.print(&view.render())?;
    }
    Ok(())
}
