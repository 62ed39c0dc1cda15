//! Delimiters recognized by the parser and emitted by the builder.

/// Terminates the scheme.
pub const SCHEME_TERMINATOR: char = ':';

/// Splits the user-info segment into user and password.
pub const USER_TERMINATOR: char = ':';

/// Separates the host from the port.
pub const PORT_SEPARATOR: char = ':';

/// Terminates the user-info segment of the authority.
pub const USER_INFO_TERMINATOR: char = '@';

/// Introduces the path after the authority.
pub const PATH_SEPARATOR: char = '/';

/// Introduces the query.
pub const QUERY_SEPARATOR: char = '?';

/// Introduces the fragment.
pub const FRAGMENT_SEPARATOR: char = '#';

/// Splits a parameter into key and value.
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Emitted by the builder between the scheme and the authority.
pub const AUTHORITY_PREFIX: &str = "://";

/// Well-known scheme names.
pub mod schemes {
    /// Hypertext Transfer Protocol.
    pub const HTTP: &str = "http";

    /// Hypertext Transfer Protocol over TLS.
    pub const HTTPS: &str = "https";
}
