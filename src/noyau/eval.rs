//! Noyau — évaluation (pli récursif f64)
//!
//! Pas de cache : chaque appel re-parcourt l'arbre. L'enfant gauche est
//! évalué avant le droit (Sub/Div/Pow sont sensibles à l'ordre).
//! Les cas limites numériques suivent IEEE-754 : x/0.0 donne ±Inf ou NaN,
//! une base négative avec exposant fractionnaire donne NaN via powf —
//! aucun de ces cas n'est une erreur signalée.

use super::expr::Expr;

/// Évalue l'arbre. Un arbre absent vaut 0.0 (sentinelle, pas une erreur).
pub fn evalue(arbre: Option<&Expr>) -> f64 {
    match arbre {
        None => 0.0,
        Some(e) => evalue_noeud(e),
    }
}

fn evalue_noeud(e: &Expr) -> f64 {
    match e {
        Expr::Nombre(v) => *v,
        Expr::Neg(x) => -evalue_noeud(x),
        Expr::Add(a, b) => evalue_noeud(a) + evalue_noeud(b),
        Expr::Sub(a, b) => evalue_noeud(a) - evalue_noeud(b),
        Expr::Mul(a, b) => evalue_noeud(a) * evalue_noeud(b),
        Expr::Div(a, b) => evalue_noeud(a) / evalue_noeud(b),
        Expr::Pow(a, b) => evalue_noeud(a).powf(evalue_noeud(b)),
    }
}
