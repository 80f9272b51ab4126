use std::fmt;

/// A player's mark. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub fn opposite(&self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'X' => Some(Self::X),
            'O' => Some(Self::O),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Content of a single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Symbol::X),
            Cell::O => Some(Symbol::O),
        }
    }

    /// Parses the board text format: `X`, `O`, or `.`/space for empty.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | ' ' | '_' => Some(Cell::Empty),
            _ => Symbol::from_char(c).map(Cell::from),
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

impl From<Symbol> for Cell {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::X => Cell::X,
            Symbol::O => Cell::O,
        }
    }
}

impl PartialEq<Symbol> for Cell {
    fn eq(&self, other: &Symbol) -> bool {
        *self == Cell::from(*other)
    }
}
