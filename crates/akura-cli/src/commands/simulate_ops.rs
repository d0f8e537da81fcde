use std::io::{self, BufRead};

use akura_session::{dispatch, Command, StringSurface, TranslitSession};

/// Drive one session interactively from stdin. Plain lines are typed
/// into the field key by key; ':' lines are simulator commands.
pub fn simulate_cmd() {
    let mut session = TranslitSession::new();
    let mut surface = StringSurface::new();

    println!("Live session simulator. Each line is typed into the field;");
    println!("lines starting with ':' are commands (:help lists them).");
    print_state(&session, &surface);

    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        if let Some(command) = line.strip_prefix(':') {
            if !run_command(command, &mut session, &mut surface) {
                return;
            }
        } else if !line.is_empty() {
            dispatch(&mut session, &mut surface, Command::TypeText(line));
        }
        print_state(&session, &surface);
    }
}

fn run_command(command: &str, session: &mut TranslitSession, surface: &mut StringSurface) -> bool {
    let mut parts = command.split_whitespace();
    match parts.next() {
        Some("q") | Some("quit") => return false,
        Some("backspace") | Some("bs") => {
            let count = match parts.next() {
                Some(arg) => match arg.parse() {
                    Ok(n) => n,
                    Err(_) => {
                        eprintln!("not a count: {arg}");
                        return true;
                    }
                },
                None => 1,
            };
            dispatch(session, surface, Command::Backspace { count });
        }
        Some("flush") => {
            session.flush();
        }
        Some("toggle") => {
            session.set_translit_enabled(!session.translit_enabled());
        }
        Some("clear") => dispatch(session, surface, Command::ClearAll),
        Some("left") => dispatch(session, surface, Command::CursorLeft),
        Some("right") => dispatch(session, surface, Command::CursorRight),
        Some("help") => print_help(),
        Some(other) => eprintln!("unknown command :{other} (:help lists commands)"),
        None => eprintln!("empty command (:help lists commands)"),
    }
    true
}

fn print_state(session: &TranslitSession, surface: &StringSurface) {
    let chars: Vec<char> = surface.text().chars().collect();
    let (before, after) = chars.split_at(surface.cursor());
    let before: String = before.iter().collect();
    let after: String = after.iter().collect();
    let mode = if session.translit_enabled() {
        "translit"
    } else {
        "passthrough"
    };
    println!(
        "[{before}|{after}]  buffer={:?}  mode={mode}",
        session.buffer()
    );
}

fn print_help() {
    println!(":q            quit");
    println!(":backspace N  press backspace N times (default 1)");
    println!(":flush        abandon the buffer, keep the text");
    println!(":toggle       switch between transliteration and passthrough");
    println!(":clear        wipe the field");
    println!(":left :right  move the cursor");
}
