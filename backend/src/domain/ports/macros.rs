//! Generates repository error enums with `impl Into` constructors.

/// Declare a `thiserror` enum whose struct variants each get a snake_case
/// constructor, e.g. `Connection { message: String }` yields
/// `fn connection(message: impl Into<String>) -> Self`.
macro_rules! define_port_error {
    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*)) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant () () $( $field : $ty, )*);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum ProbeError {
            Unreachable { message: String } => "unreachable: {message}",
            Rejected { table: String, rows: usize } => "{table} rejected {rows} rows",
        }
    }

    #[test]
    fn string_fields_accept_str() {
        assert_eq!(ProbeError::unreachable("pool").to_string(), "unreachable: pool");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = ProbeError::rejected("events", 3_usize);
        assert_eq!(
            err,
            ProbeError::Rejected {
                table: "events".to_owned(),
                rows: 3
            }
        );
        assert_eq!(err.to_string(), "events rejected 3 rows");
    }
}
