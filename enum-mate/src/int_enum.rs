//! Enums com valores inteiros

use crate::coerce::Coerce;
use crate::error::EnumResult;
use crate::mixin::EnumMixin;
use serde_json::Value as Json;

/// Um [`EnumMixin`] cujos membros carregam um `i64`.
///
/// Declarado com [`better_int_enum!`](crate::better_int_enum). Membros se
/// comparam, fazem hash e se ordenam como o valor, participam de `+`, `-` e
/// `*` com inteiros e fazem deref para `i64`.
pub trait BetterIntEnum: EnumMixin<Primitive = i64> {
    /// Devolve o inteiro puro de um membro, ou de um inteiro cru depois de
    /// verificar que algum membro o carrega.
    ///
    /// ```ignore
    /// assert_eq!(CodeEnum::ensure_int(CodeEnum::Succeeded)?, 1);
    /// assert_eq!(CodeEnum::ensure_int(0)?, 0);
    /// assert!(CodeEnum::ensure_int(999).is_err());
    /// ```
    fn ensure_int<'a>(value: impl Into<Coerce<'a, Self>>) -> EnumResult<i64> {
        Self::coerce(value.into())
    }

    /// Como [`ensure_int`](Self::ensure_int), para entrada não tipada.
    /// Qualquer coisa que não seja um número inteiro é `TypeMismatch`.
    fn ensure_int_dyn(value: &Json) -> EnumResult<i64> {
        Self::coerce_dyn(value)
    }
}

/// Declara um enum de valores inteiros com as operações de [`BetterIntEnum`].
///
/// ```ignore
/// better_int_enum! {
///     pub enum CodeEnum {
///         Succeeded = 1,
///         Failed = 0,
///     }
/// }
/// ```
///
/// Valores devem ser expressões constantes e podem referir consts externas.
/// `Debug`, `Clone`, `Copy`, `PartialEq` e `Eq` são derivados; `Hash`, `Ord`,
/// `Display`, `FromStr`, serde e os impls de interoperação com inteiros são
/// gerados. Um `@qualname "pkg.CodeEnum";` inicial substitui o nome
/// qualificado mostrado nos erros.
#[macro_export]
macro_rules! better_int_enum {
    (@qualname $qualname:literal; $($rest:tt)*) => {
        $crate::__better_int_enum! { ::core::option::Option::Some($qualname); $($rest)* }
    };
    ($($rest:tt)*) => {
        $crate::__better_int_enum! { ::core::option::Option::None; $($rest)* }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __better_int_enum {
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
            type Primitive = i64;

            const MEMBERS: &'static [Self] = &[$(Self::$member),*];
            const TYPE_NAME: &'static str = ::core::stringify!($name);
            const MODULE_PATH: &'static str = ::core::module_path!();
            const QUALNAME: ::core::option::Option<&'static str> = $qualname;

            fn name(&self) -> &'static str {
                match *self {
                    $(Self::$member => ::core::stringify!($member),)*
                }
            }

            fn value(&self) -> i64 {
                *::core::ops::Deref::deref(self)
            }

            fn index() -> &'static $crate::EnumIndex<Self> {
                static INDEX: $crate::__private::Lazy<$crate::EnumIndex<$name>> =
                    $crate::__private::Lazy::new($crate::EnumIndex::build);
                &INDEX
            }
        }

        impl $crate::BetterIntEnum for $name {}

        $crate::__better_enum_common!($name);
        $crate::__better_int_enum_ops!($name; Add add +, Sub sub -, Mul mul *);

        impl ::core::ops::Deref for $name {
            type Target = i64;

            fn deref(&self) -> &i64 {
                match *self {
                    $(Self::$member => {
                        // Nome de item não é higiênico: não pode colidir com `$value`
                        const __ENUM_MATE_MEMBER_VALUE: i64 = $value;
                        &__ENUM_MATE_MEMBER_VALUE
                    })*
                }
            }
        }

        impl ::core::borrow::Borrow<i64> for $name {
            fn borrow(&self) -> &i64 {
                ::core::ops::Deref::deref(self)
            }
        }

        impl ::core::cmp::PartialEq<i64> for $name {
            fn eq(&self, other: &i64) -> bool {
                <Self as $crate::EnumMixin>::value(self) == *other
            }
        }

        impl ::core::cmp::PartialEq<$name> for i64 {
            fn eq(&self, other: &$name) -> bool {
                *self == <$name as $crate::EnumMixin>::value(other)
            }
        }

        impl ::core::cmp::PartialOrd<i64> for $name {
            fn partial_cmp(&self, other: &i64) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(
                    &<Self as $crate::EnumMixin>::value(self),
                    other,
                ))
            }
        }

        impl ::core::cmp::PartialOrd<$name> for i64 {
            fn partial_cmp(&self, other: &$name) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(
                    self,
                    &<$name as $crate::EnumMixin>::value(other),
                ))
            }
        }

        impl ::core::convert::From<$name> for i64 {
            fn from(member: $name) -> i64 {
                <$name as $crate::EnumMixin>::value(&member)
            }
        }

        impl ::core::convert::TryFrom<i64> for $name {
            type Error = $crate::EnumError;

            fn try_from(value: i64) -> ::core::result::Result<Self, Self::Error> {
                <Self as $crate::EnumMixin>::get_by_value(&value)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_i64(<Self as $crate::EnumMixin>::value(self))
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw =
                    <i64 as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::EnumMixin>::get_by_value(&raw)
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}
