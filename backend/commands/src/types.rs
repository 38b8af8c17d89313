/// Contact console command types.
use labconsole_core::Outcome;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Parsed command
// ---------------------------------------------------------------------------

/// Arguments extracted from `send_message("<email>", "<body>")`, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessage {
    pub email: String,
    pub body: String,
}

/// Result of matching one line of input against the command grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandMatch {
    Recognized(SendMessage),
    Unrecognized(GrammarMismatch),
}

impl CommandMatch {
    pub fn is_recognized(&self) -> bool {
        matches!(self, Self::Recognized(_))
    }

    /// Transcript outcome recorded for this match.
    pub fn outcome(&self) -> Outcome {
        match self {
            Self::Recognized(_) => Outcome::Success,
            Self::Unrecognized(_) => Outcome::Failure,
        }
    }
}

// ---------------------------------------------------------------------------
// Mismatch reasons
// ---------------------------------------------------------------------------

/// Why a line failed to parse. Offsets are byte offsets into the raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarMismatch {
    #[error("input is empty")]
    Empty,

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("expected `(` at offset {0}")]
    ExpectedOpenParen(usize),

    #[error("expected `\"` at offset {0}")]
    ExpectedQuote(usize),

    #[error("unterminated string starting at offset {0}")]
    UnterminatedString(usize),

    #[error("recipient must not be empty")]
    EmptyRecipient,

    #[error("expected `,` at offset {0}")]
    ExpectedComma(usize),

    #[error("missing message argument")]
    MissingArgument,

    #[error("too many arguments")]
    TooManyArguments,

    #[error("expected `)` at offset {0}")]
    ExpectedCloseParen(usize),

    #[error("unexpected input at offset {0}")]
    TrailingInput(usize),
}
