//! Erros de lookup e validação

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Resultado de operações de lookup e validação
pub type EnumResult<T> = Result<T, EnumError>;

/// Erros de lookup, validação e coerção
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnumError {
    /// Nenhum membro tem o nome pedido (sensível a maiúsculas)
    #[error("Invalid name for `class {enum_name}`: {repr}")]
    NameMiss { enum_name: &'static str, repr: String },

    /// Nenhum membro tem o valor pedido
    #[error("Invalid `class {enum_name}`: {repr}")]
    InvalidValue { enum_name: &'static str, repr: String },

    /// Entrada que não pode participar de um lookup (lista, mapa)
    #[error("Type mismatch for `class {enum_name}`: expected {expected}, found {found}")]
    TypeMismatch {
        enum_name: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

/// Tipo de um [`EnumError`], sem os dados
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NameMiss,
    InvalidValue,
    TypeMismatch,
}

impl EnumError {
    /// Retorna o tipo do erro
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnumError::NameMiss { .. } => ErrorKind::NameMiss,
            EnumError::InvalidValue { .. } => ErrorKind::InvalidValue,
            EnumError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }

    /// Verdadeiro para os dois tipos de falha de lookup, que os predicados
    /// `is_valid_*` absorvem
    pub fn is_lookup_miss(&self) -> bool {
        !matches!(self, EnumError::TypeMismatch { .. })
    }

    /// Nome qualificado do enum que gerou o erro
    pub fn enum_name(&self) -> &'static str {
        match self {
            EnumError::NameMiss { enum_name, .. }
            | EnumError::InvalidValue { enum_name, .. }
            | EnumError::TypeMismatch { enum_name, .. } => enum_name,
        }
    }
}
