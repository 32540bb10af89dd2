//! Entrada "primitivo ou membro" de `ensure_int` / `ensure_str`

use crate::mixin::EnumMixin;
use std::borrow::Cow;

/// Um primitivo puro ou um membro de `E`.
///
/// Construído implicitamente via `From`: inteiros e `&str`/`String` viram
/// `Raw`, membros do enum viram `Member` (as macros de declaração emitem esse
/// impl para cada enum).
pub enum Coerce<'a, E: EnumMixin> {
    Raw(Cow<'a, E::Primitive>),
    Member(E),
}

impl<'a, E: EnumMixin> Coerce<'a, E> {
    /// Envolve um membro
    pub fn member(member: E) -> Self {
        Coerce::Member(member)
    }

    /// Verdadeiro para `Member`
    pub fn is_member(&self) -> bool {
        matches!(self, Coerce::Member(_))
    }
}

macro_rules! impl_raw_from_ints {
    ($($ty:ty),*) => {$(
        impl<'a, E: EnumMixin<Primitive = i64>> From<$ty> for Coerce<'a, E> {
            #[inline]
            fn from(value: $ty) -> Self {
                Coerce::Raw(Cow::Owned(i64::from(value)))
            }
        }
    )*};
}

// Só conversões sem perda; u64/usize/i128 exigiriam conversão falível
impl_raw_from_ints!(i8, i16, i32, i64, u8, u16, u32);

impl<'a, E: EnumMixin<Primitive = str>> From<&'a str> for Coerce<'a, E> {
    fn from(value: &'a str) -> Self {
        Coerce::Raw(Cow::Borrowed(value))
    }
}

impl<'a, E: EnumMixin<Primitive = str>> From<&'a String> for Coerce<'a, E> {
    fn from(value: &'a String) -> Self {
        Coerce::Raw(Cow::Borrowed(value.as_str()))
    }
}

impl<'a, E: EnumMixin<Primitive = str>> From<String> for Coerce<'a, E> {
    fn from(value: String) -> Self {
        Coerce::Raw(Cow::Owned(value))
    }
}
