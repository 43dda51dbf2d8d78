use std::path::PathBuf;

/// Alias for `Result<T, ConfigError>`.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors detected while loading a world configuration.
///
/// Every variant is fatal: a world is either fully valid or not built at all.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not match the schema.
    #[error("malformed configuration at {path}: {message}")]
    Parse {
        /// JSON path of the offending value (`.` for the document root).
        path: String,
        /// Parser message.
        message: String,
    },

    /// The configuration declares no rooms.
    #[error("world has no rooms")]
    EmptyWorld,

    /// The start room is not one of the declared rooms.
    #[error("start room \"{0}\" is not defined")]
    UnknownStartRoom(String),

    /// Two objects in the same room share an identifier.
    #[error("room \"{room}\" declares object \"{object}\" more than once")]
    DuplicateObject {
        /// Room key.
        room: String,
        /// Repeated object id.
        object: String,
    },

    /// An object's rectangle has a non-positive dimension.
    #[error("object \"{object}\" in room \"{room}\" has empty bounds ({width}x{height})")]
    InvalidBounds {
        /// Room key.
        room: String,
        /// Object id.
        object: String,
        /// Declared width.
        width: i32,
        /// Declared height.
        height: i32,
    },

    /// A verb key is empty, padded, or not lower-case.
    #[error("object \"{object}\" in room \"{room}\" has invalid verb \"{verb}\" (verbs must be non-empty lower-case words)")]
    InvalidVerb {
        /// Room key.
        room: String,
        /// Object id.
        object: String,
        /// Offending verb.
        verb: String,
    },

    /// A puzzle identifier is declared more than once.
    #[error("puzzle \"{id}\" is declared in both \"{first}\" and \"{second}\"")]
    DuplicatePuzzle {
        /// Repeated puzzle id.
        id: String,
        /// Object path of the first declaration.
        first: String,
        /// Object path of the second declaration.
        second: String,
    },

    /// An interaction references a puzzle nobody declares.
    #[error("interaction \"{verb}\" on \"{room}/{object}\" references unknown puzzle \"{puzzle}\"")]
    UnknownPuzzle {
        /// Room key.
        room: String,
        /// Object id.
        object: String,
        /// Interaction verb.
        verb: String,
        /// Missing puzzle id.
        puzzle: String,
    },

    /// An item reference is missing from the declared item catalog.
    #[error("{context} references unknown item \"{item}\"")]
    UnknownItem {
        /// Where the reference appears.
        context: String,
        /// Missing item id.
        item: String,
    },
}
