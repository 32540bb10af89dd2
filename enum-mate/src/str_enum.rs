//! Enums com valores string

use crate::coerce::Coerce;
use crate::error::EnumResult;
use crate::mixin::EnumMixin;
use serde_json::Value as Json;

/// Um [`EnumMixin`] cujos membros carregam uma `&'static str`.
///
/// Declarado com [`better_str_enum!`](crate::better_str_enum). Membros fazem
/// deref para `str`, então todo método de string funciona direto neles, e se
/// comparam, fazem hash e se ordenam como o valor.
pub trait BetterStrEnum: EnumMixin<Primitive = str> {
    /// Devolve a string pura de um membro, ou de uma string crua depois de
    /// verificar que algum membro a carrega.
    fn ensure_str<'a>(value: impl Into<Coerce<'a, Self>>) -> EnumResult<String> {
        Self::coerce(value.into())
    }

    /// Como [`ensure_str`](Self::ensure_str), para entrada não tipada
    fn ensure_str_dyn(value: &Json) -> EnumResult<String> {
        Self::coerce_dyn(value)
    }
}

/// Declara um enum de valores string com as operações de [`BetterStrEnum`].
///
/// ```ignore
/// better_str_enum! {
///     pub enum StatusEnum {
///         Succeeded = "SUCCEEDED",
///         Failed = "FAILED",
///     }
/// }
/// ```
///
/// Mesmos derives e opções de [`better_int_enum!`](crate::better_int_enum).
/// Valores devem ser constantes `&'static str`.
#[macro_export]
macro_rules! better_str_enum {
    (@qualname $qualname:literal; $($rest:tt)*) => {
        $crate::__better_str_enum! { ::core::option::Option::Some($qualname); $($rest)* }
    };
    ($($rest:tt)*) => {
        $crate::__better_str_enum! { ::core::option::Option::None; $($rest)* }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __better_str_enum {
    (
        $qualname:expr;
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$member_meta:meta])*
                $member:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$member_meta])*
                $member,
            )*
        }

        impl $crate::EnumMixin for $name {
            type Primitive = str;

            const MEMBERS: &'static [Self] = &[$(Self::$member),*];
            const TYPE_NAME: &'static str = ::core::stringify!($name);
            const MODULE_PATH: &'static str = ::core::module_path!();
            const QUALNAME: ::core::option::Option<&'static str> = $qualname;

            fn name(&self) -> &'static str {
                match *self {
                    $(Self::$member => ::core::stringify!($member),)*
                }
            }

            fn value(&self) -> &'static str {
                match *self {
                    $(Self::$member => $value,)*
                }
            }

            fn index() -> &'static $crate::EnumIndex<Self> {
                static INDEX: $crate::__private::Lazy<$crate::EnumIndex<$name>> =
                    $crate::__private::Lazy::new($crate::EnumIndex::build);
                &INDEX
            }
        }

        impl $crate::BetterStrEnum for $name {}

        $crate::__better_enum_common!($name);

        impl ::core::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                <Self as $crate::EnumMixin>::value(self)
            }
        }

        impl ::core::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                <Self as $crate::EnumMixin>::value(self)
            }
        }

        impl ::core::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                <Self as $crate::EnumMixin>::value(self)
            }
        }

        impl ::core::cmp::PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                <Self as $crate::EnumMixin>::value(self) == other
            }
        }

        impl<'a> ::core::cmp::PartialEq<&'a str> for $name {
            fn eq(&self, other: &&'a str) -> bool {
                <Self as $crate::EnumMixin>::value(self) == *other
            }
        }

        impl ::core::cmp::PartialEq<::std::string::String> for $name {
            fn eq(&self, other: &::std::string::String) -> bool {
                <Self as $crate::EnumMixin>::value(self) == other.as_str()
            }
        }

        impl ::core::cmp::PartialEq<$name> for str {
            fn eq(&self, other: &$name) -> bool {
                self == <$name as $crate::EnumMixin>::value(other)
            }
        }

        impl<'a> ::core::cmp::PartialEq<$name> for &'a str {
            fn eq(&self, other: &$name) -> bool {
                *self == <$name as $crate::EnumMixin>::value(other)
            }
        }

        impl ::core::cmp::PartialEq<$name> for ::std::string::String {
            fn eq(&self, other: &$name) -> bool {
                self.as_str() == <$name as $crate::EnumMixin>::value(other)
            }
        }

        impl<'a> ::core::ops::Add<&'a str> for $name {
            type Output = ::std::string::String;

            fn add(self, rhs: &'a str) -> ::std::string::String {
                let mut out =
                    ::std::string::String::from(<Self as $crate::EnumMixin>::value(&self));
                out.push_str(rhs);
                out
            }
        }

        impl ::core::ops::Add<$name> for ::std::string::String {
            type Output = ::std::string::String;

            fn add(mut self, rhs: $name) -> ::std::string::String {
                self.push_str(<$name as $crate::EnumMixin>::value(&rhs));
                self
            }
        }

        impl<'a> ::core::ops::Add<$name> for &'a str {
            type Output = ::std::string::String;

            fn add(self, rhs: $name) -> ::std::string::String {
                let mut out = ::std::string::String::from(self);
                out.push_str(<$name as $crate::EnumMixin>::value(&rhs));
                out
            }
        }

        impl ::core::convert::From<$name> for &'static str {
            fn from(member: $name) -> &'static str {
                <$name as $crate::EnumMixin>::value(&member)
            }
        }

        impl ::core::convert::From<$name> for ::std::string::String {
            fn from(member: $name) -> ::std::string::String {
                ::std::string::String::from(<$name as $crate::EnumMixin>::value(&member))
            }
        }

        impl<'a> ::core::convert::TryFrom<&'a str> for $name {
            type Error = $crate::EnumError;

            fn try_from(value: &'a str) -> ::core::result::Result<Self, Self::Error> {
                <Self as $crate::EnumMixin>::get_by_value(value)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(<Self as $crate::EnumMixin>::value(self))
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw: ::std::string::String =
                    $crate::__private::serde::Deserialize::deserialize(deserializer)?;
                <Self as $crate::EnumMixin>::get_by_value(raw.as_str())
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}
