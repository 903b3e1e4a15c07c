//! Helper macro generating `thiserror` enums for port failures.
//!
//! Each variant gets a snake-case constructor whose fields accept anything
//! convertible into the declared type, so adapters can write
//! `UserPersistenceError::query("database error")`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
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
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Unavailable => "sample port unavailable",
            Query { message: String } => "query failed: {message}",
            Rows { table: String, affected: u64 } => "{table}: {affected} rows",
        }
    }

    #[test]
    fn unit_variants_get_constructors() {
        assert_eq!(
            SamplePortError::unavailable().to_string(),
            "sample port unavailable"
        );
    }

    #[test]
    fn string_fields_accept_str() {
        let err = SamplePortError::query("syntax error");
        assert_eq!(err, SamplePortError::Query { message: "syntax error".to_owned() });
        assert_eq!(err.to_string(), "query failed: syntax error");
    }

    #[test]
    fn mixed_fields_preserve_types() {
        let err = SamplePortError::rows("users", 0_u64);
        assert_eq!(err.to_string(), "users: 0 rows");
    }
}
