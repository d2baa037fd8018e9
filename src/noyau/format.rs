// src/noyau/format.rs
//
// LE COEUR : rendu texte borné.
//
// Règles :
// - littéral entier -> pas de point décimal, jamais de notation scientifique
// - littéral fractionnaire -> forme décimale minimale qui round-trip
// - Neg -> (-enfant) ; un littéral négatif est isolé : (-(-0.125))
// - binaire -> (gauche op droite), TOUJOURS parenthésé, sans égard à la
//   précédence réelle de ^ vs * vs +
// - si le rendu complet dépasse `capacite`, la sortie garde les
//   `capacite - 1` premiers octets corrects et se termine par '$'
//
// Le tampon est unique et borné en haut (pas de tampons divisés par deux à
// chaque niveau de récursion) : la troncature est décidée en un seul endroit.

use thiserror::Error;
use tracing::trace;

use super::expr::Expr;

/// Marque écrite en dernière position quand le rendu est coupé.
pub const MARQUE_TRONCATURE: char = '$';

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurRendu {
    #[error("capacité nulle : impossible d'écrire le moindre caractère")]
    CapaciteNulle,
}

/// Rend l'arbre en texte, borné à `capacite` octets.
///
/// La longueur retournée ne dépasse jamais `capacite`. Un rendu complet qui
/// tient exactement ne porte aucune marque. Sinon la sortie fait exactement
/// `capacite` octets et se termine par [`MARQUE_TRONCATURE`].
/// Déterministe : mêmes (arbre, capacite) => même sortie, octet pour octet.
pub fn rend_borne(expr: &Expr, capacite: usize) -> Result<String, ErreurRendu> {
    if capacite == 0 {
        return Err(ErreurRendu::CapaciteNulle);
    }

    let mut tampon = TamponBorne::nouveau(capacite);
    rend_noeud(expr, &mut tampon);

    if tampon.deborde {
        trace!(capacite, "rendu tronqué");
    }
    Ok(tampon.finalise())
}

/* ------------------------ Tampon borné ------------------------ */

struct TamponBorne {
    texte: String,
    capacite: usize,
    deborde: bool,
}

impl TamponBorne {
    fn nouveau(capacite: usize) -> Self {
        Self {
            texte: String::new(),
            capacite,
            deborde: false,
        }
    }

    /// Pousse `s` en respectant la capacité.
    /// NOTE: le rendu est ASCII pur => la découpe par octets est sûre.
    fn pousse(&mut self, s: &str) {
        if self.deborde {
            return;
        }
        let reste = self.capacite - self.texte.len();
        if s.len() <= reste {
            self.texte.push_str(s);
        } else {
            self.texte.push_str(&s[..reste]);
            self.deborde = true;
        }
    }

    /// Remplace le dernier octet par la marque si le rendu a débordé.
    fn finalise(mut self) -> String {
        if self.deborde {
            self.texte.truncate(self.capacite - 1);
            self.texte.push(MARQUE_TRONCATURE);
        }
        self.texte
    }
}

/* ------------------------ Descente récursive ------------------------ */

fn rend_noeud(e: &Expr, tampon: &mut TamponBorne) {
    if tampon.deborde {
        return;
    }
    match e {
        Expr::Nombre(v) => tampon.pousse(&format_nombre(*v)),

        Expr::Neg(x) => {
            tampon.pousse("(-");
            match x.as_ref() {
                // un littéral négatif rendu nu donnerait "--" : on l'isole
                Expr::Nombre(v) => {
                    let s = format_nombre(*v);
                    if s.starts_with('-') {
                        tampon.pousse("(");
                        tampon.pousse(&s);
                        tampon.pousse(")");
                    } else {
                        tampon.pousse(&s);
                    }
                }
                autre => rend_noeud(autre, tampon),
            }
            tampon.pousse(")");
        }

        Expr::Add(a, b) => rend_binaire(a, " + ", b, tampon),
        Expr::Sub(a, b) => rend_binaire(a, " - ", b, tampon),
        Expr::Mul(a, b) => rend_binaire(a, " * ", b, tampon),
        Expr::Div(a, b) => rend_binaire(a, " / ", b, tampon),
        Expr::Pow(a, b) => rend_binaire(a, " ^ ", b, tampon),
    }
}

/// (gauche op droite) — un opérande littéral reste nu, un opérande
/// opérateur arrive déjà parenthésé par son propre rendu.
fn rend_binaire(gauche: &Expr, op: &str, droite: &Expr, tampon: &mut TamponBorne) {
    tampon.pousse("(");
    rend_noeud(gauche, tampon);
    tampon.pousse(op);
    rend_noeud(droite, tampon);
    tampon.pousse(")");
}

/* ------------------------ Nombres ------------------------ */

/// Valeur entière -> "{:.0}" (pas de point décimal, jamais de notation
/// scientifique, même pour 1e18). Sinon, forme décimale minimale de Rust,
/// qui round-trip et reste décimale.
fn format_nombre(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}
