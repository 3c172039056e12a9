use daisywheel::{Orientation, PointerButton, Vec2};
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Keyword {
    Press,
    Release,
    Hover,
    Focus,
    Disable,
    Enable,
    Pointer,
    Axis,
    Click,
    Submit,
    Tick,
    Items,
    Spacing,
    #[strum(to_string = "deadzone", serialize = "dead-zone")]
    DeadZone,
    Orientation,
    Quit,
}

/// One line of the driver protocol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Press,
    Release,
    Hover,
    Focus,
    Disable,
    Enable,
    Pointer(Option<Vec2>),
    Axis(Option<Vec2>),
    Click(PointerButton),
    Submit,
    Tick(usize),
    Items(usize),
    Spacing(f64),
    DeadZone(f64),
    Orientation(Orientation),
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum TraceError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{0}' is missing an argument")]
    MissingArgument(Keyword),
    #[error("invalid value '{value}' for '{keyword}'")]
    InvalidValue { keyword: Keyword, value: String },
    #[error("unexpected trailing input '{0}'")]
    TrailingInput(String),
}

/// Parses one line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, TraceError> {
    let line = line.split('#').next().unwrap_or_default().trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let keyword: Keyword = head
        .parse()
        .map_err(|_| TraceError::UnknownCommand(head.to_string()))?;
    let args: Vec<&str> = words.collect();

    let command = match keyword {
        Keyword::Press => no_args(Command::Press, &args)?,
        Keyword::Release => no_args(Command::Release, &args)?,
        Keyword::Hover => no_args(Command::Hover, &args)?,
        Keyword::Focus => no_args(Command::Focus, &args)?,
        Keyword::Disable => no_args(Command::Disable, &args)?,
        Keyword::Enable => no_args(Command::Enable, &args)?,
        Keyword::Submit => no_args(Command::Submit, &args)?,
        Keyword::Quit => no_args(Command::Quit, &args)?,
        Keyword::Pointer => Command::Pointer(optional_vector(keyword, &args)?),
        Keyword::Axis => Command::Axis(optional_vector(keyword, &args)?),
        Keyword::Click => match args.as_slice() {
            [] => Command::Click(PointerButton::Primary),
            [button] => Command::Click(parse_value(keyword, button)?),
            [_, rest @ ..] => return Err(TraceError::TrailingInput(rest.join(" "))),
        },
        Keyword::Tick => match args.as_slice() {
            [] => Command::Tick(1),
            [n] => Command::Tick(parse_value(keyword, n)?),
            [_, rest @ ..] => return Err(TraceError::TrailingInput(rest.join(" "))),
        },
        Keyword::Items => Command::Items(single(keyword, &args)?),
        Keyword::Spacing => Command::Spacing(single(keyword, &args)?),
        Keyword::DeadZone => Command::DeadZone(single(keyword, &args)?),
        Keyword::Orientation => Command::Orientation(single(keyword, &args)?),
    };
    Ok(Some(command))
}

fn no_args(command: Command, args: &[&str]) -> Result<Command, TraceError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(TraceError::TrailingInput(args.join(" ")))
    }
}

fn parse_value<T: std::str::FromStr>(keyword: Keyword, value: &str) -> Result<T, TraceError> {
    value.parse().map_err(|_| TraceError::InvalidValue {
        keyword,
        value: value.to_string(),
    })
}

fn single<T: std::str::FromStr>(keyword: Keyword, args: &[&str]) -> Result<T, TraceError> {
    match args {
        [] => Err(TraceError::MissingArgument(keyword)),
        [value] => parse_value(keyword, value),
        [_, rest @ ..] => Err(TraceError::TrailingInput(rest.join(" "))),
    }
}

fn optional_vector(keyword: Keyword, args: &[&str]) -> Result<Option<Vec2>, TraceError> {
    match args {
        [] => Err(TraceError::MissingArgument(keyword)),
        [none] if none.eq_ignore_ascii_case("none") => Ok(None),
        [_] => Err(TraceError::MissingArgument(keyword)),
        [x, y] => Ok(Some(Vec2::new(
            parse_value(keyword, x)?,
            parse_value(keyword, y)?,
        ))),
        [_, _, rest @ ..] => Err(TraceError::TrailingInput(rest.join(" "))),
    }
}
