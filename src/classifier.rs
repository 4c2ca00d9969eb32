//! Type Classifier
//!
//! Decomposes a type expression into atomic tokens and classifies each one:
//!
//! - **Primitive**: a built-in type name (`number`, `string`, ...), a literal type,
//!   `this`, a `typeof` query or an `infer` clause
//! - **UserDefined**: a name in the file's [`SymbolTable`] or an ambient library type
//! - **FreeGeneric**: anything else - an unbound type parameter that the emitted
//!   interface member has to re-declare
//!
//! Compound expressions split on `|`, `&` and the keyword `extends` at the outer
//! nesting level. Each segment is then decomposed recursively:
//!
//! - generic applications (`Map<K, V>`), array and indexed-access suffixes (`T[]`, `T[K]`)
//! - parenthesized types and `keyof`/`readonly`/`unique` prefixes
//! - tuples, including named, optional and rest elements
//! - function and constructor types: every parameter annotation, then the return type
//! - object literal types: property, method, call, index and mapped members
//! - template literal types: every `${...}` placeholder
//! - conditional branches and type predicates (`x is T`)
//!
//! Type parameters declared by a function type, method member or mapped type
//! are bound inside that type only.

use crate::config::{ConverterConfig, BASE_PRIMITIVES, KEYWORD_PRIMITIVES};
use crate::symbols::{generic_name, SymbolTable};
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier regex is valid"));

static QUALIFIED_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)+$")
        .expect("qualified name regex is valid")
});

static NUMERIC_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?(0[xXoObB][0-9a-fA-F_]+|[0-9][0-9_]*(\.[0-9_]+)?([eE][+-]?[0-9]+)?)n?$")
        .expect("numeric literal regex is valid")
});

static TYPE_PREDICATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(?:asserts\s+)?(?:this|[A-Za-z_$][A-Za-z0-9_$]*)\s+is\s+(.+)$")
        .expect("type predicate regex is valid")
});

static MAPPED_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^([A-Za-z_$][A-Za-z0-9_$]*)\s+in\s+(.+)$").expect("mapped key regex is valid")
});

/// Prefix operators that do not change which names a type refers to
const TRANSPARENT_PREFIXES: &[&str] = &["keyof ", "readonly ", "unique "];

/// Modifiers that may precede an object literal member
const MEMBER_MODIFIERS: &[&str] = &["+readonly ", "-readonly ", "readonly "];

/// Returns the byte length of the separator starting at `i`, if one does
type Separator = fn(&[u8], usize) -> Option<usize>;

/// Classification of one atomic type token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeKind {
    Primitive,
    UserDefined,
    FreeGeneric,
}

/// Classifier bound to a primitive set and ambient library types
#[derive(Debug, Clone)]
pub struct TypeClassifier {
    primitives: HashSet<String>,
    ambient: HashSet<String>,
}

impl Default for TypeClassifier {
    fn default() -> Self {
        Self::from_config(&ConverterConfig::default())
    }
}

impl TypeClassifier {
    pub fn from_config(config: &ConverterConfig) -> Self {
        Self {
            primitives: config.primitives().into_iter().collect(),
            ambient: config.ambient_types.iter().cloned().collect(),
        }
    }

    /// Classifier that knows only the built-in primitives - no ambient types
    pub fn strict() -> Self {
        Self {
            primitives: BASE_PRIMITIVES
                .iter()
                .chain(KEYWORD_PRIMITIVES)
                .map(|s| s.to_string())
                .collect(),
            ambient: HashSet::new(),
        }
    }

    pub fn is_primitive(&self, token: &str) -> bool {
        self.primitives.contains(token)
    }

    /// Classify one atomic token; the primitive check always comes first
    pub fn classify_token(&self, token: &str, table: &SymbolTable) -> TypeKind {
        if self.is_primitive(token) {
            TypeKind::Primitive
        } else if table.contains(token) || self.ambient.contains(token) {
            TypeKind::UserDefined
        } else {
            TypeKind::FreeGeneric
        }
    }

    /// Classify every atomic token of an expression, in order of appearance
    pub fn classify_tokens(&self, expr: &str, table: &SymbolTable) -> Vec<(String, TypeKind)> {
        let mut tokens = Vec::new();
        self.visit_expression(expr, table, &mut |token, kind| {
            tokens.push((token.to_string(), kind));
        });
        tokens
    }

    /// Classify a whole expression
    ///
    /// Primitive when every token is primitive, FreeGeneric when any token is
    /// free, UserDefined otherwise. Blank expressions are Primitive.
    pub fn classify(&self, expr: &str, table: &SymbolTable) -> TypeKind {
        let kinds: Vec<TypeKind> = self
            .classify_tokens(expr, table)
            .into_iter()
            .map(|(_, kind)| kind)
            .collect();

        if kinds.contains(&TypeKind::FreeGeneric) {
            TypeKind::FreeGeneric
        } else if kinds.iter().all(|kind| *kind == TypeKind::Primitive) {
            TypeKind::Primitive
        } else {
            TypeKind::UserDefined
        }
    }

    /// Free generics of an expression in first-occurrence order, duplicates removed
    pub fn collect_free_generics(&self, expr: Option<&str>, table: &SymbolTable) -> IndexSet<String> {
        let mut free = IndexSet::new();
        if let Some(expr) = expr {
            self.visit_expression(expr, table, &mut |token, kind| {
                if kind == TypeKind::FreeGeneric {
                    free.insert(token.to_string());
                }
            });
        }
        free
    }

    fn visit_expression(&self, expr: &str, table: &SymbolTable, visit: &mut dyn FnMut(&str, TypeKind)) {
        for segment in split_top_level(expr, compound_separator) {
            self.visit_token(segment.trim(), table, visit);
        }
    }

    fn visit_token(&self, token: &str, table: &SymbolTable, visit: &mut dyn FnMut(&str, TypeKind)) {
        if token.is_empty() {
            return;
        }

        for prefix in TRANSPARENT_PREFIXES {
            if let Some(rest) = token.strip_prefix(prefix) {
                return self.visit_expression(rest, table, visit);
            }
        }

        // `typeof value` queries a value, not a type name
        if token.starts_with("typeof ")
            || token.starts_with("infer ")
            || token == "this"
            || is_literal(token)
        {
            return visit(token, TypeKind::Primitive);
        }

        if token.starts_with('`') {
            return self.visit_template(token, table, visit);
        }

        if let Some(captures) = TYPE_PREDICATE.captures(token) {
            let narrowed = captures.get(1).map_or("", |m| m.as_str());
            return self.visit_expression(narrowed, table, visit);
        }

        // `B ? X : Y`, what remains of a conditional type after its `extends` split
        if let Some((question, _)) = find_top_level(token, 0, question_separator) {
            if let Some((colon, _)) = find_top_level(token, question + 1, colon_separator) {
                self.visit_expression(&token[..question], table, visit);
                self.visit_expression(&token[question + 1..colon], table, visit);
                return self.visit_expression(&token[colon + 1..], table, visit);
            }
        }

        if let Some((arrow, len)) = find_top_level(token, 0, arrow_separator) {
            return self.visit_function_type(&token[..arrow], &token[arrow + len..], table, visit);
        }

        if token.starts_with('{') && matching_close(token, 0) == Some(token.len() - 1) {
            return self.visit_object_literal(&token[1..token.len() - 1], table, visit);
        }

        if let Some((open, close)) = trailing_group(token) {
            let head = token[..open].trim();
            let inner = &token[open + 1..token.len() - 1];
            match (close, head.is_empty()) {
                // (A | B)
                (b')', true) => return self.visit_expression(inner, table, visit),
                // [A, B]
                (b']', true) => {
                    for element in split_top_level(inner, comma_separator) {
                        self.visit_tuple_element(element.trim(), table, visit);
                    }
                    return;
                }
                // T[] and T[K]
                (b']', false) => {
                    self.visit_token(head, table, visit);
                    return self.visit_expression(inner, table, visit);
                }
                // Head<A, B>
                (b'>', false) => {
                    self.visit_token(head, table, visit);
                    for argument in split_top_level(inner, comma_separator) {
                        self.visit_expression(argument, table, visit);
                    }
                    return;
                }
                _ => {}
            }
        }

        if IDENTIFIER.is_match(token) {
            return visit(token, self.classify_token(token, table));
        }

        if QUALIFIED_NAME.is_match(token) {
            // A type parameter is always a bare identifier, so `ns.Type` is never free
            return visit(token, TypeKind::UserDefined);
        }

        visit(token, TypeKind::Primitive)
    }

    /// `` `prefix-${K}` ``: every placeholder is a type expression
    fn visit_template(&self, token: &str, table: &SymbolTable, visit: &mut dyn FnMut(&str, TypeKind)) {
        let bytes = token.as_bytes();
        let mut placeholders = 0;
        let mut i = 1;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => i += 2,
                b'$' if bytes.get(i + 1) == Some(&b'{') => {
                    let Some(close) = matching_close(token, i + 1) else {
                        break;
                    };
                    self.visit_expression(&token[i + 2..close], table, visit);
                    placeholders += 1;
                    i = close + 1;
                }
                _ => i += 1,
            }
        }

        if placeholders == 0 {
            visit(token, TypeKind::Primitive);
        }
    }

    /// `(a: A) => R`, `new (a: A) => R` and `<G>(a: G) => G`
    fn visit_function_type(
        &self,
        signature: &str,
        return_type: &str,
        table: &SymbolTable,
        visit: &mut dyn FnMut(&str, TypeKind),
    ) {
        let mut signature = signature.trim();
        for keyword in ["abstract", "new"] {
            if let Some(rest) = signature.strip_prefix(keyword) {
                if rest.starts_with(|c: char| c == ' ' || c == '(' || c == '<') {
                    signature = rest.trim_start();
                }
            }
        }

        match trailing_group(signature) {
            Some((open, b')')) => self.visit_signature(
                &signature[..open],
                &signature[open + 1..signature.len() - 1],
                Some(return_type),
                table,
                visit,
            ),
            _ => self.visit_expression(return_type, table, visit),
        }
    }

    /// Parameter annotations left to right, then the return type
    ///
    /// `head` is whatever precedes the parameter list: a member name, type
    /// parameters, or both. Type parameters declared there are bound.
    fn visit_signature(
        &self,
        head: &str,
        parameters: &str,
        return_type: Option<&str>,
        table: &SymbolTable,
        visit: &mut dyn FnMut(&str, TypeKind),
    ) {
        let bound = declared_type_parameters(head);
        let scoped;
        let table = if bound.is_empty() {
            table
        } else {
            scoped = table.extended(bound);
            &scoped
        };

        for parameter in split_top_level(parameters, comma_separator) {
            if let Some((colon, len)) = find_top_level(parameter, 0, colon_separator) {
                self.visit_expression(&parameter[colon + len..], table, visit);
            }
        }
        if let Some(return_type) = return_type {
            self.visit_expression(return_type, table, visit);
        }
    }

    fn visit_tuple_element(&self, element: &str, table: &SymbolTable, visit: &mut dyn FnMut(&str, TypeKind)) {
        let element = element.strip_prefix("...").unwrap_or(element);
        match find_top_level(element, 0, colon_separator) {
            // first: K, rest?: K
            Some((colon, len)) => self.visit_expression(&element[colon + len..], table, visit),
            // K?
            None => self.visit_expression(element.strip_suffix('?').unwrap_or(element), table, visit),
        }
    }

    fn visit_object_literal(&self, body: &str, table: &SymbolTable, visit: &mut dyn FnMut(&str, TypeKind)) {
        for member in split_top_level(body, member_separator) {
            let member = member.trim();
            let member = MEMBER_MODIFIERS
                .iter()
                .find_map(|modifier| member.strip_prefix(modifier))
                .unwrap_or(member)
                .trim_start();
            if member.starts_with('[') {
                self.visit_keyed_member(member, table, visit);
            } else {
                self.visit_named_member(member, table, visit);
            }
        }
    }

    /// Index signatures, mapped types and computed keys
    fn visit_keyed_member(&self, member: &str, table: &SymbolTable, visit: &mut dyn FnMut(&str, TypeKind)) {
        let Some(close) = matching_close(member, 0) else {
            return;
        };
        let key = member[1..close].trim();
        let rest = member[close + 1..].trim_start().trim_start_matches(|c: char| c == '+' || c == '-');

        // [P in keyof T as `get${P}`]: T[P]
        if let Some(captures) = MAPPED_KEY.captures(key) {
            let parameter = captures.get(1).map_or("", |m| m.as_str());
            let constraint = captures.get(2).map_or("", |m| m.as_str());
            let scoped = table.extended([parameter]);
            match find_top_level(constraint, 0, as_separator) {
                Some((at, len)) => {
                    self.visit_expression(&constraint[..at], table, visit);
                    self.visit_expression(&constraint[at + len..], &scoped, visit);
                }
                None => self.visit_expression(constraint, table, visit),
            }
            return self.visit_named_member(rest, &scoped, visit);
        }

        // [key: string]: T
        if let Some((colon, len)) = find_top_level(key, 0, colon_separator) {
            self.visit_expression(&key[colon + len..], table, visit);
        }
        self.visit_named_member(rest, table, visit)
    }

    /// `key?: T`, `method<G>(a: A): R`, `(a: A): R` and `new (a: A): R`
    fn visit_named_member(&self, member: &str, table: &SymbolTable, visit: &mut dyn FnMut(&str, TypeKind)) {
        let (signature, annotation) = match find_top_level(member, 0, colon_separator) {
            Some((colon, len)) => (member[..colon].trim_end(), Some(&member[colon + len..])),
            None => (member.trim_end(), None),
        };

        match trailing_group(signature) {
            Some((open, b')')) => self.visit_signature(
                &signature[..open],
                &signature[open + 1..signature.len() - 1],
                annotation,
                table,
                visit,
            ),
            _ => {
                if let Some(annotation) = annotation {
                    self.visit_expression(annotation, table, visit);
                }
            }
        }
    }
}

/// Names declared by a trailing `<G, H extends X>` clause of a signature head
fn declared_type_parameters(head: &str) -> Vec<&str> {
    let head = head.trim();
    let Some((open, b'>')) = trailing_group(head) else {
        return Vec::new();
    };
    split_top_level(&head[open + 1..head.len() - 1], comma_separator)
        .into_iter()
        .filter_map(|parameter| generic_name(parameter).ok())
        .collect()
}

/// `|`, `&` and the whole word `extends`
fn compound_separator(bytes: &[u8], i: usize) -> Option<usize> {
    match bytes[i] {
        b'|' | b'&' => Some(1),
        b'e' if is_keyword_at(bytes, i, b"extends") => Some(b"extends".len()),
        _ => None,
    }
}

fn comma_separator(bytes: &[u8], i: usize) -> Option<usize> {
    (bytes[i] == b',').then_some(1)
}

fn colon_separator(bytes: &[u8], i: usize) -> Option<usize> {
    (bytes[i] == b':').then_some(1)
}

fn question_separator(bytes: &[u8], i: usize) -> Option<usize> {
    (bytes[i] == b'?').then_some(1)
}

fn member_separator(bytes: &[u8], i: usize) -> Option<usize> {
    matches!(bytes[i], b';' | b',' | b'\n').then_some(1)
}

fn arrow_separator(bytes: &[u8], i: usize) -> Option<usize> {
    bytes[i..].starts_with(b"=>").then_some(2)
}

fn as_separator(bytes: &[u8], i: usize) -> Option<usize> {
    is_keyword_at(bytes, i, b"as").then_some(2)
}

fn is_keyword_at(bytes: &[u8], i: usize, keyword: &[u8]) -> bool {
    let end = i + keyword.len();
    bytes.len() >= end
        && &bytes[i..end] == keyword
        && (i == 0 || !is_ident_byte(bytes[i - 1]))
        && !matches!(bytes.get(end), Some(b) if is_ident_byte(*b))
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}

fn is_literal(token: &str) -> bool {
    matches!(token.as_bytes().first(), Some(b'"' | b'\''))
        || token == "true"
        || token == "false"
        || NUMERIC_LITERAL.is_match(token)
}

/// First separator match at or after `from` that sits outside brackets and string literals
///
/// `from` must itself be at nesting depth zero.
fn find_top_level(expr: &str, from: usize, separator: Separator) -> Option<(usize, usize)> {
    let bytes = expr.as_bytes();
    let mut depth = 0usize;
    let mut i = from;

    while i < bytes.len() {
        match bytes[i] {
            b'"' | b'\'' | b'`' => {
                i = skip_string(bytes, i);
                continue;
            }
            // Arrow of a function type, not a closing angle bracket
            b'=' if bytes.get(i + 1) == Some(&b'>') => {
                if depth == 0 {
                    if let Some(len) = separator(bytes, i) {
                        return Some((i, len));
                    }
                }
                i += 2;
                continue;
            }
            b'<' | b'(' | b'[' | b'{' => depth += 1,
            b'>' | b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            _ if depth == 0 => {
                if let Some(len) = separator(bytes, i) {
                    return Some((i, len));
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Split `expr` wherever `separator` matches outside brackets and string literals
fn split_top_level(expr: &str, separator: Separator) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    while let Some((at, len)) = find_top_level(expr, start, separator) {
        parts.push(&expr[start..at]);
        start = at + len;
    }
    parts.push(&expr[start..]);
    parts
}

/// Byte offset of the bracket closing the one opened at `open`
fn matching_close(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'"' | b'\'' | b'`' => {
                i = skip_string(bytes, i);
                continue;
            }
            b'=' if bytes.get(i + 1) == Some(&b'>') => {
                i += 2;
                continue;
            }
            b'<' | b'(' | b'[' | b'{' => depth += 1,
            b'>' | b')' | b']' | b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Locate the bracket group closing the token, e.g. `<K, V>` in `Map<K, V>`
///
/// Returns the byte offset of the matching opener and the closing byte.
fn trailing_group(token: &str) -> Option<(usize, u8)> {
    let bytes = token.as_bytes();
    let close = *bytes.last()?;
    if !matches!(close, b'>' | b')' | b']') {
        return None;
    }

    let mut stack = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'"' | b'\'' | b'`' => {
                i = skip_string(bytes, i);
                continue;
            }
            b'=' if bytes.get(i + 1) == Some(&b'>') => {
                i += 2;
                continue;
            }
            b'<' | b'(' | b'[' | b'{' => stack.push(i),
            b'>' | b')' | b']' | b'}' => {
                let open = stack.pop()?;
                if i == bytes.len() - 1 {
                    return Some((open, close));
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Index just past the string literal starting at `start`
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}
