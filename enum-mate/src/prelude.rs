//! # Prelude — Re-exportações Convenientes
//!
//! ```
//! use enum_mate::prelude::*;
//! ```

// Traits
pub use crate::mixin::EnumMixin;
pub use crate::int_enum::BetterIntEnum;
pub use crate::str_enum::BetterStrEnum;

// Tipos de suporte
pub use crate::coerce::Coerce;
pub use crate::error::{EnumError, EnumResult, ErrorKind};
pub use crate::index::EnumIndex;
pub use crate::primitive::{Primitive, PrimitiveKind};

// Macros de declaração
pub use crate::{better_int_enum, better_str_enum};
