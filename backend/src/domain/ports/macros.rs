//! Helper macro for port error enums.
//!
//! Every storage failure the ports report is a category plus the adapter's
//! description, so each generated variant carries a single `message` and a
//! snake-case constructor accepting anything convertible into a `String`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $prefix:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error("{prefix}: {message}", prefix = $prefix)]
                $variant {
                    /// Adapter-supplied failure description.
                    message: String,
                },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = concat!("Build a `", stringify!($variant), "` error.")]
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant {
                            message: message.into(),
                        }
                    }
                }
            )*

            /// Adapter-supplied failure description.
            #[must_use]
            pub fn message(&self) -> &str {
                match self {
                    $( Self::$variant { message } => message, )*
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum LedgerError {
            Offline => "ledger offline",
            WriteConflict => "ledger write conflict",
        }
    }

    #[test]
    fn constructors_are_snake_case_and_accept_str() {
        let err = LedgerError::write_conflict("row 7");
        assert_eq!(err, LedgerError::WriteConflict { message: "row 7".to_owned() });
    }

    #[test]
    fn display_prefixes_the_category() {
        assert_eq!(
            LedgerError::offline(String::from("no route")).to_string(),
            "ledger offline: no route"
        );
    }

    #[test]
    fn message_returns_the_description_only() {
        assert_eq!(LedgerError::offline("no route").message(), "no route");
    }
}
