//! Impls shared by `better_int_enum!` and `better_str_enum!`

/// Hash, ordenação, Display e conversão para `Coerce`, todos pelo valor do
/// membro; `FromStr` pelo nome.
#[doc(hidden)]
#[macro_export]
macro_rules! __better_enum_common {
    ($name:ident) => {
        // Hash igual ao do primitivo, para lookups via `Borrow`
        impl ::core::hash::Hash for $name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&<Self as $crate::EnumMixin>::value(self), state)
            }
        }

        impl ::core::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }

        impl ::core::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                ::core::cmp::Ord::cmp(
                    &<Self as $crate::EnumMixin>::value(self),
                    &<Self as $crate::EnumMixin>::value(other),
                )
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&<Self as $crate::EnumMixin>::value(self), f)
            }
        }

        /// Interpreta o *nome* de um membro
        impl ::core::str::FromStr for $name {
            type Err = $crate::EnumError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as $crate::EnumMixin>::get_by_name(s)
            }
        }

        impl<'a> ::core::convert::From<$name> for $crate::Coerce<'a, $name> {
            fn from(member: $name) -> Self {
                $crate::Coerce::Member(member)
            }
        }
    };
}

/// Aritmética entre membros e inteiros puros, sempre resultando em `i64`
#[doc(hidden)]
#[macro_export]
macro_rules! __better_int_enum_ops {
    ($name:ident; $($trait:ident $method:ident $op:tt),*) => {$(
        impl ::core::ops::$trait<i64> for $name {
            type Output = i64;

            fn $method(self, rhs: i64) -> i64 {
                <Self as $crate::EnumMixin>::value(&self) $op rhs
            }
        }

        impl ::core::ops::$trait for $name {
            type Output = i64;

            fn $method(self, rhs: Self) -> i64 {
                <Self as $crate::EnumMixin>::value(&self)
                    $op <Self as $crate::EnumMixin>::value(&rhs)
            }
        }

        impl ::core::ops::$trait<$name> for i64 {
            type Output = i64;

            fn $method(self, rhs: $name) -> i64 {
                self $op <$name as $crate::EnumMixin>::value(&rhs)
            }
        }
    )*};
}
