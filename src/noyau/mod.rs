//! Noyau arbre d'expressions
//!
//! Organisation interne :
//! - expr.rs   : AST f64 + constructeurs + profondeur/compte + Drop itératif
//! - eval.rs   : évaluation (pli récursif, IEEE-754)
//! - format.rs : rendu texte borné (le coeur) + marque de troncature

pub mod eval;
pub mod expr;
pub mod format;



// API publique minimale
pub use eval::evalue;
pub use expr::{compte, profondeur, ErreurArbre, Expr, Operateur};
pub use format::{rend_borne, ErreurRendu, MARQUE_TRONCATURE};
