//! Índice reverso por tipo de enum
//!
//! Construído uma única vez a partir de [`EnumMixin::MEMBERS`] e imutável
//! depois disso. Cada tipo declarado com `better_int_enum!` ou
//! `better_str_enum!` guarda o seu em um `static` próprio.

use crate::mixin::{EnumMixin, ValueOf};
use std::collections::HashMap;

/// Tabelas de lookup reverso de um tipo de enum.
///
/// Posições são índices em `E::MEMBERS`: um acerto devolve o próprio membro
/// declarado.
#[derive(Debug)]
pub struct EnumIndex<E: EnumMixin> {
    qualified_name: String,
    names: Vec<&'static str>,
    values: Vec<ValueOf<E>>,
    by_name: HashMap<&'static str, usize>,
    by_value: HashMap<ValueOf<E>, usize>,
}

impl<E: EnumMixin> EnumIndex<E> {
    /// Constrói o índice a partir dos membros declarados
    pub fn build() -> Self {
        Self::from_members(qualified_name::<E>(), E::MEMBERS)
    }

    /// Constrói o índice sobre `members`; as posições só são válidas se
    /// `members` for `E::MEMBERS`
    pub(crate) fn from_members(qualified_name: String, members: &[E]) -> Self {
        let mut names = Vec::with_capacity(members.len());
        let mut values = Vec::with_capacity(members.len());
        let mut by_name = HashMap::with_capacity(members.len());
        let mut by_value = HashMap::with_capacity(members.len());

        for (position, member) in members.iter().enumerate() {
            let name = member.name();
            let value = member.value();

            let prev_name = by_name.insert(name, position);
            debug_assert!(
                prev_name.is_none(),
                "duplicate member name `{name}` in {qualified_name}"
            );
            let prev_value = by_value.insert(value, position);
            debug_assert!(
                prev_value.is_none(),
                "duplicate member value {value:?} in {qualified_name}"
            );

            names.push(name);
            values.push(value);
        }

        tracing::trace!(
            enum_name = %qualified_name,
            members = members.len(),
            "built reverse-lookup index"
        );

        Self {
            qualified_name,
            names,
            values,
            by_name,
            by_value,
        }
    }

    /// Nome qualificado com pontos (`crate.modulo.Tipo`)
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Nomes em ordem de declaração
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    /// Valores em ordem de declaração
    pub fn values(&self) -> &[ValueOf<E>] {
        &self.values
    }

    /// Número de membros
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Verdadeiro para um enum sem membros
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Posição do membro com este nome, se houver
    pub fn position_of_name(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Posição do membro com este valor, se houver
    pub fn position_of_value(&self, value: &E::Primitive) -> Option<usize> {
        self.by_value.get(value).copied()
    }
}

/// Nome qualificado com pontos (`crate.modulo.Tipo`), a menos que a
/// declaração o substitua
fn qualified_name<E: EnumMixin>() -> String {
    match E::QUALNAME {
        Some(qualname) => qualname.to_string(),
        None => format!("{}.{}", E::MODULE_PATH.replace("::", "."), E::TYPE_NAME),
    }
}
