//! Lookups sobre entrada não tipada (`serde_json::Value`)
//!
//! Chamadas tipadas não conseguem passar uma lista ou um mapa para
//! `get_by_name`; o erro `TypeMismatch` só existe aqui. A regra é a mesma
//! para os dois backings:
//!
//! - arrays e objetos não são hasheáveis: `TypeMismatch`, nunca absorvido;
//! - qualquer outro escalar do tipo errado (número para um enum string, float
//!   ou `null` para um enum inteiro) apenas não é membro: `NameMiss` ou
//!   `InvalidValue`, que os predicados transformam em `false`;
//! - a coerção (`coerce_dyn`, `ensure_int_dyn`, `ensure_str_dyn`) reporta um
//!   escalar do tipo errado como `TypeMismatch`, pois não produz o primitivo
//!   pedido.
//!
//! Nas mensagens, `null`, `true` e `false` aparecem como `None`, `True` e
//! `False`, como no restante da renderização (strings entre aspas simples).

use crate::error::{EnumError, EnumResult};
use crate::mixin::{EnumMixin, OwnedOf, invalid_value};
use crate::primitive::{Primitive, quote_str};
use serde_json::Value as Json;

/// Nome curto do tipo de um valor não tipado, usado em `TypeMismatch`
pub fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(n) if n.is_f64() => "float",
        Json::Number(_) => "int",
        Json::String(_) => "str",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

/// Renderiza um valor não tipado para mensagens de erro
pub fn json_repr(value: &Json) -> String {
    match value {
        Json::Null => "None".to_string(),
        Json::Bool(true) => "True".to_string(),
        Json::Bool(false) => "False".to_string(),
        Json::String(s) => quote_str(s),
        other => other.to_string(),
    }
}

fn is_hashable(value: &Json) -> bool {
    !matches!(value, Json::Array(_) | Json::Object(_))
}

fn type_mismatch<E: EnumMixin>(expected: &'static str, value: &Json) -> EnumError {
    let err = EnumError::TypeMismatch {
        enum_name: E::qualified_name(),
        expected,
        found: json_kind(value),
    };
    tracing::debug!(enum_name = E::qualified_name(), "{err}");
    err
}

/// [`EnumMixin::get_by_name`] sobre entrada não tipada
pub fn get_by_name<E: EnumMixin>(name: &Json) -> EnumResult<E> {
    if !is_hashable(name) {
        return Err(type_mismatch::<E>("str", name));
    }
    match name.as_str() {
        Some(name) => E::get_by_name(name),
        None => Err(EnumError::NameMiss {
            enum_name: E::qualified_name(),
            repr: json_repr(name),
        }),
    }
}

/// Absorve `NameMiss`; propaga `TypeMismatch`
pub fn is_valid_name<E: EnumMixin>(name: &Json) -> EnumResult<bool> {
    absorb_miss(get_by_name::<E>(name))
}

/// [`EnumMixin::get_by_value`] sobre entrada não tipada
pub fn get_by_value<E: EnumMixin>(value: &Json) -> EnumResult<E> {
    if !is_hashable(value) {
        return Err(type_mismatch::<E>(<E::Primitive as Primitive>::KIND.as_str(), value));
    }
    match <E::Primitive as Primitive>::from_json(value) {
        Some(key) => E::get_by_value(&key),
        None => Err(invalid_value::<E>(json_repr(value))),
    }
}

/// Absorve `InvalidValue`; propaga `TypeMismatch`
pub fn is_valid_value<E: EnumMixin>(value: &Json) -> EnumResult<bool> {
    absorb_miss(get_by_value::<E>(value))
}

/// [`EnumMixin::ensure_is_valid_value`] sobre entrada não tipada
pub fn ensure_is_valid_value<E: EnumMixin>(value: &Json) -> EnumResult<()> {
    if is_valid_value::<E>(value)? {
        return Ok(());
    }
    let err = invalid_value::<E>(json_repr(value));
    tracing::debug!(enum_name = E::qualified_name(), "{err}");
    Err(err)
}

/// Coerção para o primitivo; escalar do tipo errado é `TypeMismatch`
pub fn coerce<E: EnumMixin>(value: &Json) -> EnumResult<OwnedOf<E>> {
    let expected = <E::Primitive as Primitive>::KIND.as_str();
    if !is_hashable(value) {
        return Err(type_mismatch::<E>(expected, value));
    }
    let key = <E::Primitive as Primitive>::from_json(value)
        .ok_or_else(|| type_mismatch::<E>(expected, value))?;
    E::ensure_is_valid_value(&key)?;
    Ok(key.into_owned())
}

fn absorb_miss<E>(result: EnumResult<E>) -> EnumResult<bool> {
    match result {
        Ok(_) => Ok(true),
        Err(err) if err.is_lookup_miss() => Ok(false),
        Err(err) => Err(err),
    }
}
