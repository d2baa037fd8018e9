// src/noyau/expr.rs
//
// AST arithmétique (flottants f64).
// - Nombre : feuille littérale
// - Neg    : négation unaire (un seul enfant)
// - Add/Sub/Mul/Div/Pow : opérateurs binaires (deux enfants)
//
// Les invariants de forme sont portés par le type : une feuille n'a pas
// d'enfant, Neg n'a pas d'opérande droite, un opérateur binaire a toujours
// ses deux opérandes. L'arbre est strict (jamais un DAG, jamais cyclique) :
// chaque sous-arbre appartient à exactement un parent (Box), la racine à
// l'appelant. Immuable après construction.

use std::fmt;

use thiserror::Error;
use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),

    Neg(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
}

/// Genre d'opérateur pour la construction générique.
///
/// Pas de variante « littéral » ici : la feuille a son propre constructeur,
/// donc « opérateur littéral » est irreprésentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operateur {
    /// Symbole de rendu (Neg et Sub partagent '-').
    pub fn symbole(self) -> char {
        match self {
            Operateur::Neg | Operateur::Sub => '-',
            Operateur::Add => '+',
            Operateur::Mul => '*',
            Operateur::Div => '/',
            Operateur::Pow => '^',
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurArbre {
    #[error("opérande droite manquante pour l'opérateur binaire '{0}'")]
    OperandeDroiteManquante(Operateur),

    #[error("opérande droite en trop pour l'opérateur unaire '{0}'")]
    OperandeDroiteEnTrop(Operateur),
}

impl Expr {
    /// Feuille littérale. Aucune validation de plage (NaN/∞ acceptés tels
    /// quels : garbage in, garbage out).
    pub fn nombre(valeur: f64) -> Expr {
        Expr::Nombre(valeur)
    }

    /// Noeud opérateur générique : `droite` doit être None ssi `op == Neg`.
    /// La propriété des opérandes est transférée au nouveau noeud.
    pub fn operateur(
        op: Operateur,
        gauche: Expr,
        droite: Option<Expr>,
    ) -> Result<Expr, ErreurArbre> {
        let gauche = Box::new(gauche);
        match (op, droite) {
            (Operateur::Neg, None) => Ok(Expr::Neg(gauche)),
            (Operateur::Neg, Some(_)) => {
                debug!(op = %op, "construction rejetée : opérande droite en trop");
                Err(ErreurArbre::OperandeDroiteEnTrop(op))
            }
            (_, None) => {
                debug!(op = %op, "construction rejetée : opérande droite manquante");
                Err(ErreurArbre::OperandeDroiteManquante(op))
            }
            (Operateur::Add, Some(d)) => Ok(Expr::Add(gauche, Box::new(d))),
            (Operateur::Sub, Some(d)) => Ok(Expr::Sub(gauche, Box::new(d))),
            (Operateur::Mul, Some(d)) => Ok(Expr::Mul(gauche, Box::new(d))),
            (Operateur::Div, Some(d)) => Ok(Expr::Div(gauche, Box::new(d))),
            (Operateur::Pow, Some(d)) => Ok(Expr::Pow(gauche, Box::new(d))),
        }
    }

    /// Profondeur : 1 pour une feuille ; l'enfant droit absent de Neg
    /// compte pour 0.
    pub fn profondeur(&self) -> usize {
        match self {
            Expr::Nombre(_) => 1,
            Expr::Neg(x) => 1 + x.profondeur(),
            Expr::Add(a, b)
            | Expr::Sub(a, b)
            | Expr::Mul(a, b)
            | Expr::Div(a, b)
            | Expr::Pow(a, b) => 1 + a.profondeur().max(b.profondeur()),
        }
    }

    /// Nombre total de noeuds.
    pub fn compte(&self) -> usize {
        match self {
            Expr::Nombre(_) => 1,
            Expr::Neg(x) => 1 + x.compte(),
            Expr::Add(a, b)
            | Expr::Sub(a, b)
            | Expr::Mul(a, b)
            | Expr::Div(a, b)
            | Expr::Pow(a, b) => 1 + a.compte() + b.compte(),
        }
    }
}

/* ------------------------ Requêtes sur arbre optionnel ------------------------ */

/// Profondeur, 0 pour un arbre absent.
pub fn profondeur(arbre: Option<&Expr>) -> usize {
    arbre.map_or(0, Expr::profondeur)
}

/// Compte de noeuds, 0 pour un arbre absent.
pub fn compte(arbre: Option<&Expr>) -> usize {
    arbre.map_or(0, Expr::compte)
}

/* ------------------------ Libération itérative (anti pile) ------------------------ */

// La libération récursive implicite suivrait la profondeur de l'arbre.
// On détache les enfants dans une pile explicite : relâcher une chaîne
// très profonde reste en profondeur de pile constante.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pile: Vec<Expr> = Vec::new();
        detache_enfants(self, &mut pile);
        while let Some(mut e) = pile.pop() {
            detache_enfants(&mut e, &mut pile);
        }
    }
}

fn detache_enfants(e: &mut Expr, pile: &mut Vec<Expr>) {
    match e {
        Expr::Nombre(_) => {}
        Expr::Neg(x) => pile.push(std::mem::replace(&mut **x, Expr::Nombre(0.0))),
        Expr::Add(a, b)
        | Expr::Sub(a, b)
        | Expr::Mul(a, b)
        | Expr::Div(a, b)
        | Expr::Pow(a, b) => {
            pile.push(std::mem::replace(&mut **a, Expr::Nombre(0.0)));
            pile.push(std::mem::replace(&mut **b, Expr::Nombre(0.0)));
        }
    }
}

/* ------------------------ Affichage debug (le rendu réel est dans format.rs) ------------------------ */

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;
        match self {
            Nombre(v) => write!(f, "{v}"),
            Neg(x) => write!(f, "(-{x})"),
            Add(a, b) => write!(f, "({a}+{b})"),
            Sub(a, b) => write!(f, "({a}-{b})"),
            Mul(a, b) => write!(f, "({a}*{b})"),
            Div(a, b) => write!(f, "({a}/{b})"),
            Pow(a, b) => write!(f, "({a}^{b})"),
        }
    }
}
