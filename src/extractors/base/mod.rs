// Base extractor types and helpers shared by the TypeScript extractor
//
// - types.rs: Declaration tree data structures (DeclarationTree, ClassDecl, members, imports)
// - extractor.rs: BaseExtractor implementation (text accessors)
// - tree_methods.rs: Tree navigation and error lookup

pub mod extractor;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use extractor::BaseExtractor;
pub use types::{
    ClassDecl, Declaration, DeclarationTree, EnumDecl, Import, ImportSpecifier, InterfaceDecl,
    MethodMember, Parameter, PropertyMember, TypeAliasDecl, Visibility,
};
