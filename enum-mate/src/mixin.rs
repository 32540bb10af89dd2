//! # EnumMixin — lookup, validação e coerção
//!
//! Capacidades acrescentadas a um enum fechado e ordenado cujos membros
//! carregam um valor primitivo único:
//!
//! | Operação | Retorno | Falha |
//! |:---------|:--------|:------|
//! | [`get_names`](EnumMixin::get_names) | nomes em ordem de declaração | — |
//! | [`get_values`](EnumMixin::get_values) | valores em ordem de declaração | — |
//! | [`get_by_name`](EnumMixin::get_by_name) | membro | `NameMiss` |
//! | [`get_by_value`](EnumMixin::get_by_value) | membro | `InvalidValue` |
//! | [`is_valid_name`](EnumMixin::is_valid_name) | `bool` | — |
//! | [`is_valid_value`](EnumMixin::is_valid_value) | `bool` | — |
//! | [`ensure_is_valid_value`](EnumMixin::ensure_is_valid_value) | `()` | `InvalidValue` |
//!
//! Todas as operações são do tipo (`CodeEnum::get_by_name("Succeeded")`),
//! nunca da instância. Consultas são O(1) sobre o [`EnumIndex`] do tipo.
//!
//! As variantes `*_dyn` aceitam entrada não tipada (`serde_json::Value`); ver
//! [`crate::dynamic`].

use crate::coerce::Coerce;
use crate::dynamic;
use crate::error::{EnumError, EnumResult};
use crate::index::EnumIndex;
use crate::primitive::Primitive;
use serde_json::Value as Json;
use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;

/// Forma armazenada do valor dos membros de um enum
pub type ValueOf<E> = <<E as EnumMixin>::Primitive as Primitive>::Value;

/// Primitivo próprio devolvido pela coerção (`i64` ou `String`)
pub type OwnedOf<E> = <<E as EnumMixin>::Primitive as ToOwned>::Owned;

/// Lookup, validação e coerção para um enum fechado de valores únicos
pub trait EnumMixin: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Tipo da chave de lookup: `i64` ou `str`
    type Primitive: Primitive + ?Sized;

    /// Membros em ordem de declaração
    const MEMBERS: &'static [Self];

    /// Nome do tipo, como declarado
    const TYPE_NAME: &'static str;

    /// `module_path!()` do local da declaração
    const MODULE_PATH: &'static str;

    /// Substitui o nome qualificado derivado nas mensagens de erro
    const QUALNAME: Option<&'static str> = None;

    /// Nome do membro (o identificador da variante)
    fn name(&self) -> &'static str;

    /// Valor do membro
    fn value(&self) -> ValueOf<Self>;

    /// Índice reverso compartilhado do tipo
    fn index() -> &'static EnumIndex<Self>;

    /// Nome qualificado com pontos, como aparece nas mensagens de erro
    fn qualified_name() -> &'static str {
        Self::index().qualified_name()
    }

    /// Membros em ordem de declaração
    fn members() -> &'static [Self] {
        Self::MEMBERS
    }

    /// Nomes em ordem de declaração; vazio para um enum sem membros
    fn get_names() -> Vec<&'static str> {
        Self::index().names().to_vec()
    }

    /// Valores em ordem de declaração
    fn get_values() -> Vec<ValueOf<Self>> {
        Self::index().values().to_vec()
    }

    /// Lookup exato por nome, sensível a maiúsculas
    fn get_by_name(name: &str) -> EnumResult<Self> {
        Self::index()
            .position_of_name(name)
            .map(|position| Self::MEMBERS[position])
            .ok_or_else(|| EnumError::NameMiss {
                enum_name: Self::qualified_name(),
                repr: name.repr(),
            })
    }

    /// Lookup por valor, com a igualdade do próprio primitivo
    fn get_by_value(value: &Self::Primitive) -> EnumResult<Self> {
        Self::index()
            .position_of_value(value)
            .map(|position| Self::MEMBERS[position])
            .ok_or_else(|| invalid_value::<Self>(value.repr()))
    }

    /// Verdadeiro se algum membro tem este nome
    fn is_valid_name(name: &str) -> bool {
        Self::index().position_of_name(name).is_some()
    }

    /// Verdadeiro se algum membro tem este valor
    fn is_valid_value(value: &Self::Primitive) -> bool {
        Self::index().position_of_value(value).is_some()
    }

    /// Falha com [`EnumError::InvalidValue`] se nenhum membro tem `value`.
    ///
    /// A mensagem é ``Invalid `class pkg.Tipo`: <repr>``.
    fn ensure_is_valid_value(value: &Self::Primitive) -> EnumResult<()> {
        if Self::is_valid_value(value) {
            return Ok(());
        }
        let err = invalid_value::<Self>(value.repr());
        tracing::debug!(enum_name = Self::qualified_name(), "{err}");
        Err(err)
    }

    /// Normaliza "primitivo ou membro" para o primitivo puro, validando a
    /// entrada crua
    fn coerce(value: Coerce<'_, Self>) -> EnumResult<OwnedOf<Self>> {
        match value {
            Coerce::Member(member) => {
                let value = member.value();
                let key: &Self::Primitive = value.borrow();
                Ok(<Self::Primitive as ToOwned>::to_owned(key))
            }
            Coerce::Raw(raw) => {
                Self::ensure_is_valid_value(&raw)?;
                Ok(raw.into_owned())
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════
    // Entrada não tipada
    // ═══════════════════════════════════════════════════════════════

    /// Ver [`dynamic::get_by_name`]
    fn get_by_name_dyn(name: &Json) -> EnumResult<Self> {
        dynamic::get_by_name(name)
    }

    /// Ver [`dynamic::is_valid_name`]
    fn is_valid_name_dyn(name: &Json) -> EnumResult<bool> {
        dynamic::is_valid_name::<Self>(name)
    }

    /// Ver [`dynamic::get_by_value`]
    fn get_by_value_dyn(value: &Json) -> EnumResult<Self> {
        dynamic::get_by_value(value)
    }

    /// Ver [`dynamic::is_valid_value`]
    fn is_valid_value_dyn(value: &Json) -> EnumResult<bool> {
        dynamic::is_valid_value::<Self>(value)
    }

    /// Ver [`dynamic::ensure_is_valid_value`]
    fn ensure_is_valid_value_dyn(value: &Json) -> EnumResult<()> {
        dynamic::ensure_is_valid_value::<Self>(value)
    }

    /// Ver [`dynamic::coerce`]
    fn coerce_dyn(value: &Json) -> EnumResult<OwnedOf<Self>> {
        dynamic::coerce::<Self>(value)
    }
}

pub(crate) fn invalid_value<E: EnumMixin>(repr: String) -> EnumError {
    EnumError::InvalidValue {
        enum_name: E::qualified_name(),
        repr,
    }
}
