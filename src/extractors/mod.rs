//! Declaration extractors
//!
//! Tree-sitter based extraction of the declarations the converter reads. Each
//! extractor parses nothing itself: it walks a tree produced by
//! [`crate::source::SourceFile::parse`] and returns owned data.
//!
//! - `base` - shared extractor utilities and the owned declaration types
//! - `typescript` - TypeScript/TSX declarations, imports and class members

pub mod base;
pub mod typescript;

pub use base::{
    ClassDecl, Declaration, DeclarationTree, Import, MethodMember, Parameter, PropertyMember,
    Visibility,
};
pub use typescript::TypeScriptExtractor;
