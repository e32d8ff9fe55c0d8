#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    RotateRight,
    RotateLeft,
    Move,
}

impl Command {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'R' => Some(Command::RotateRight),
            'L' => Some(Command::RotateLeft),
            'M' => Some(Command::Move),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Command::RotateRight => 'R',
            Command::RotateLeft => 'L',
            Command::Move => 'M',
        }
    }

    /// Commands in input order. Characters outside `R`, `L`, `M` are dropped.
    pub fn parse(input: &str) -> impl Iterator<Item = Command> + '_ {
        input.chars().filter_map(|c| {
            let command = Command::from_char(c);
            if command.is_none() {
                tracing::trace!("ignoring command character {:?}", c);
            }
            command
        })
    }
}
