//! # 🔎 enum-mate — Lookup e Validação para Enums
//!
//! Acrescenta a um enum fechado e ordenado o que um enum Rust puro não
//! oferece: lookup por nome, lookup por valor, testes de pertinência,
//! coerção para o primitivo e erros descritivos.
//!
//! Dois backings compartilham o mesmo contrato ([`EnumMixin`]):
//!
//! | Trait | Primitivo | Macro | Coerção |
//! |:------|:----------|:------|:--------|
//! | [`BetterIntEnum`] | `i64` | [`better_int_enum!`] | `ensure_int` |
//! | [`BetterStrEnum`] | `&'static str` | [`better_str_enum!`] | `ensure_str` |
//!
//! ## Exemplo
//!
//! ```
//! use enum_mate::prelude::*;
//!
//! better_str_enum! {
//!     pub enum StatusEnum {
//!         Succeeded = "SUCCEEDED",
//!         Failed = "FAILED",
//!     }
//! }
//!
//! assert_eq!(StatusEnum::get_names(), ["Succeeded", "Failed"]);
//! assert_eq!(StatusEnum::get_by_value("FAILED").unwrap(), StatusEnum::Failed);
//! assert!(!StatusEnum::is_valid_value("failed"));
//! assert_eq!(StatusEnum::ensure_str(StatusEnum::Succeeded).unwrap(), "SUCCEEDED");
//! ```
//!
//! ## Índice reverso
//!
//! Cada tipo tem exatamente um [`EnumIndex`], construído no primeiro uso
//! (`once_cell::sync::Lazy`) e nunca mais alterado. Consultas são O(1).
//!
//! ## Módulos
//!
//! - [`mixin`]: o trait [`EnumMixin`]
//! - [`int_enum`] / [`str_enum`]: especializações e macros de declaração
//! - [`index`]: o índice reverso por tipo
//! - [`primitive`]: os dois primitivos e a renderização usada nos erros
//! - [`coerce`]: entrada "primitivo ou membro"
//! - [`dynamic`]: lookups sobre `serde_json::Value`
//! - [`error`]: `EnumError` (`NameMiss`, `InvalidValue`, `TypeMismatch`)

pub mod error;
pub mod primitive;
pub mod index;
pub mod mixin;
pub mod coerce;
pub mod dynamic;
pub mod int_enum;
pub mod str_enum;
pub mod prelude;

mod macros;

pub use error::{EnumError, EnumResult, ErrorKind};
pub use primitive::{Primitive, PrimitiveKind};
pub use index::EnumIndex;
pub use mixin::{EnumMixin, OwnedOf, ValueOf};
pub use coerce::Coerce;
pub use int_enum::BetterIntEnum;
pub use str_enum::BetterStrEnum;

/// Superfície pública do pacote, sob o nome histórico
pub use prelude as api;

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
    pub use serde;
}
