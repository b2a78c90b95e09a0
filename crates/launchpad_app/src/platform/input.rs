//! Line commands typed by the user.

use launchpad_core::{AppViewModel, LaunchId, Msg, Route, ScreenView, SortKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadMore,
    Sort(SortKey),
    /// 1-based row number on the list screen.
    OpenRow(usize),
    OpenId(String),
    Go(String),
    Back,
    /// 1-based slide number.
    Slide(usize),
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();
    if words.next().is_some() {
        return Err(format!("too many arguments for '{verb}'"));
    }

    let command = match (verb.to_ascii_lowercase().as_str(), arg) {
        ("more" | "m", None) => Command::LoadMore,
        ("sort", Some("name")) | ("n", None) => Command::Sort(SortKey::MissionName),
        ("sort", Some("date")) | ("d", None) => Command::Sort(SortKey::LaunchDate),
        ("sort", _) => return Err("usage: sort name|date".to_string()),
        ("open" | "o", Some(target)) => match target.parse::<usize>() {
            Ok(row) => Command::OpenRow(row),
            Err(_) => Command::OpenId(target.to_string()),
        },
        ("go", Some(path)) => Command::Go(path.to_string()),
        ("back" | "b", None) => Command::Back,
        ("slide", Some(number)) => match number.parse::<usize>() {
            Ok(number) if number >= 1 => Command::Slide(number),
            _ => return Err(format!("no slide '{number}'")),
        },
        ("help" | "h" | "?", None) => Command::Help,
        ("quit" | "q" | "exit", None) => Command::Quit,
        _ => return Err(format!("unknown command '{}'", line.trim())),
    };
    Ok(Some(command))
}

/// Turns a command into a core message against what is currently on screen.
///
/// `Help` and `Quit` are handled by the caller and are rejected here.
pub fn to_msg(command: Command, view: &AppViewModel) -> Result<Msg, String> {
    match command {
        Command::LoadMore => match &view.screen {
            ScreenView::List(list) if list.show_load_more => Ok(Msg::LoadMoreClicked),
            ScreenView::List(_) => Err("no more launches to load".to_string()),
            ScreenView::Detail(_) => Err("'more' is only available on the list".to_string()),
        },
        Command::Sort(key) => match &view.screen {
            ScreenView::List(_) => Ok(Msg::SortClicked(key)),
            ScreenView::Detail(_) => Err("'sort' is only available on the list".to_string()),
        },
        Command::OpenRow(row) => {
            let ScreenView::List(list) = &view.screen else {
                return Err("row numbers refer to the list; use 'back' first".to_string());
            };
            row.checked_sub(1)
                .and_then(|index| list.rows.get(index))
                .map(|row| Msg::Navigate(Route::Launch(row.id.clone())))
                .ok_or_else(|| format!("no row {row}"))
        }
        Command::OpenId(id) => Ok(Msg::Navigate(Route::Launch(LaunchId::new(id)))),
        Command::Go(path) => Route::parse(&path)
            .map(Msg::Navigate)
            .ok_or_else(|| format!("unknown path '{path}'")),
        Command::Back => Ok(Msg::Navigate(Route::List)),
        Command::Slide(number) if (1..=view.slide.count).contains(&number) => {
            Ok(Msg::SlideSelected(number - 1))
        }
        Command::Slide(number) => Err(format!("no slide {number}")),
        Command::Help | Command::Quit => Err("not a screen command".to_string()),
    }
}
