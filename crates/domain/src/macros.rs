//! Macro for implementing Display and FromStr for wire-vocabulary enums
//!
//! The backend spells enum values in SCREAMING_SNAKE_CASE but is not always
//! consistent about case, so parsing is case-insensitive while `Display`
//! always produces the canonical wire token.
//!
//! # Example
//!
//! ```rust
//! use promohub_domain::impl_wire_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Channel {
//!     Email,
//!     Sms,
//! }
//!
//! impl_wire_enum_conversions!(Channel {
//!     Email => "EMAIL",
//!     Sms => "SMS",
//! });
//!
//! assert_eq!("email".parse::<Channel>().unwrap(), Channel::Email);
//! assert_eq!(Channel::Sms.to_string(), "SMS");
//! ```

/// Implements Display and FromStr for enums carried as wire tokens.
#[macro_export]
macro_rules! impl_wire_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: '{}'", stringify!($enum_name), s))
            }
        }
    };
}
