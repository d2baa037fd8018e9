//! Arbre d'expressions arithmétiques — bibliothèque feuille.
//!
//! Un seul type de données (`Expr`) : arbre binaire strict représentant
//! littéraux, négation unaire et opérateurs binaires (+ - * / ^).
//! L'appelant construit l'arbre de bas en haut par appels directs
//! (aucun parseur ici), l'interroge autant de fois que voulu
//! (profondeur, compte, évaluation), puis le relâche (Drop).
//!
//! LE COEUR est `rend_borne` : rendu texte intégralement parenthésé,
//! borné par une capacité en octets, avec marque de troncature `$`.

pub mod noyau;

pub use noyau::{
    compte, evalue, profondeur, rend_borne, ErreurArbre, ErreurRendu, Expr, Operateur,
    MARQUE_TRONCATURE,
};
