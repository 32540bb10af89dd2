//! Primitivos que podem sustentar um enum
//!
//! Dois backings são suportados: inteiro (`i64`) e string (`str`, armazenado
//! como `&'static str`). O trait [`Primitive`] é implementado no tipo de
//! *chave* (o tipo usado nas consultas), e [`Primitive::Value`] é a forma
//! armazenada em cada membro.

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use std::borrow::{Borrow, Cow};
use std::fmt;
use std::hash::Hash;

/// Tipo primitivo de um enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Int,
    Str,
}

impl PrimitiveKind {
    /// Nome curto usado nas mensagens (`int`, `str`)
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::Int => "int",
            PrimitiveKind::Str => "str",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primitivo que sustenta um enum, implementado no tipo de chave
pub trait Primitive: ToOwned + Eq + Hash + 'static {
    /// Forma armazenada em cada membro
    type Value: Copy + Eq + Hash + Borrow<Self> + fmt::Debug + Send + Sync + 'static;

    /// Tipo do primitivo
    const KIND: PrimitiveKind;

    /// Renderiza a chave para mensagens de erro: strings entre aspas,
    /// números sem aspas
    fn repr(&self) -> String;

    /// Extrai uma chave deste tipo de uma entrada não tipada, se a entrada
    /// for deste tipo
    fn from_json(value: &Json) -> Option<Cow<'_, Self>>;
}

impl Primitive for i64 {
    type Value = i64;

    const KIND: PrimitiveKind = PrimitiveKind::Int;

    fn repr(&self) -> String {
        self.to_string()
    }

    fn from_json(value: &Json) -> Option<Cow<'_, Self>> {
        // as_i64 é None para floats: 1.0 nunca casa com 1
        value.as_i64().map(Cow::Owned)
    }
}

impl Primitive for str {
    type Value = &'static str;

    const KIND: PrimitiveKind = PrimitiveKind::Str;

    fn repr(&self) -> String {
        quote_str(self)
    }

    fn from_json(value: &Json) -> Option<Cow<'_, Self>> {
        value.as_str().map(Cow::Borrowed)
    }
}

/// Coloca uma string entre aspas como as mensagens de erro a mostram.
///
/// Usa aspas simples, a menos que o texto contenha aspas simples e nenhuma
/// aspa dupla. Escapa barras invertidas, a aspa escolhida e todo caractere
/// não imprimível (`\xNN`, `\uNNNN` ou `\UNNNNNNNN`).
pub fn quote_str(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if is_printable(c) => out.push(c),
            c => out.push_str(&escape_code_point(c)),
        }
    }
    out.push(quote);
    out
}

/// Imprimível: não é controle, formato, uso privado, não atribuído nem
/// separador (exceto o espaço ASCII).
fn is_printable(c: char) -> bool {
    if c.is_ascii() {
        return c == ' ' || c.is_ascii_graphic();
    }
    // Marcas combinantes só são escapadas por escape_debug em posição inicial
    let pair: String = ['a', c].iter().collect();
    pair.escape_debug().count() == 2
}

fn escape_code_point(c: char) -> String {
    match c as u32 {
        code @ 0..=0xff => format!("\\x{code:02x}"),
        code @ 0x100..=0xffff => format!("\\u{code:04x}"),
        code => format!("\\U{code:08x}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_repr_int_is_bare() {
        assert_eq!(999i64.repr(), "999");
        assert_eq!((-999i64).repr(), "-999");
    }

    #[test]
    fn test_repr_str_is_quoted() {
        assert_eq!("SUCCESS".repr(), "'SUCCESS'");
        assert_eq!("".repr(), "''");
        assert_eq!("it's".repr(), "\"it's\"");
        assert_eq!("a'b\"c".repr(), "'a\\'b\"c'");
        assert_eq!("tab\there".repr(), "'tab\\there'");
    }

    #[test]
    fn test_repr_escapes_non_printable() {
        assert_eq!("\u{7}".repr(), "'\\x07'");
        assert_eq!("\u{7f}".repr(), "'\\x7f'");
        assert_eq!("\u{a0}".repr(), "'\\xa0'");
        assert_eq!("a\u{200b}b".repr(), "'a\\u200bb'");
        assert_eq!("\u{2028}".repr(), "'\\u2028'");
        assert_eq!("\u{e000}".repr(), "'\\ue000'");
        assert_eq!("\u{f0000}".repr(), "'\\U000f0000'");
    }

    #[test]
    fn test_repr_keeps_printable_unicode() {
        assert_eq!("ação".repr(), "'ação'");
        assert_eq!("e\u{301}".repr(), "'e\u{301}'");
        assert_eq!("\u{301}".repr(), "'\u{301}'");
        assert_eq!("日本".repr(), "'日本'");
        assert_eq!("🎉".repr(), "'🎉'");
    }

    #[test]
    fn test_from_json_int() {
        assert_eq!(i64::from_json(&json!(1)).as_deref(), Some(&1));
        assert_eq!(i64::from_json(&json!(-5)).as_deref(), Some(&-5));
        assert!(i64::from_json(&json!(1.5)).is_none());
        assert!(i64::from_json(&json!(1.0)).is_none());
        assert!(i64::from_json(&json!("1")).is_none());
        assert!(i64::from_json(&json!(u64::MAX)).is_none());
    }

    #[test]
    fn test_from_json_str() {
        assert_eq!(<str as Primitive>::from_json(&json!("A")).as_deref(), Some("A"));
        assert!(<str as Primitive>::from_json(&json!(1)).is_none());
        assert!(<str as Primitive>::from_json(&json!(null)).is_none());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(PrimitiveKind::Int.to_string(), "int");
        assert_eq!(<str as Primitive>::KIND, PrimitiveKind::Str);
    }
}
