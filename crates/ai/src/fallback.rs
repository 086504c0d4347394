//! Local quotes used when the model is unavailable.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::prompt::ThemeContext;

const ROCKET_LEAGUE: &[&str] = &[
    "Chaque arrêt impossible commence par la décision de ne jamais lâcher le ballon des yeux.",
    "Le boost ne sert à rien sans direction : vise le but, puis accélère.",
    "Un but aérien se prépare au sol, dans la patience et le jeu collectif.",
];

const SPIDER_MAN: &[&str] = &[
    "Un grand pouvoir appelle une grande responsabilité, et chaque défi est une toile à tisser.",
    "On ne tombe jamais pour rien : chaque chute prépare le prochain élan.",
    "Protège ce qui compte avec courage, même quand personne ne te regarde.",
];

const FOOTBALL: &[&str] = &[
    "Sur le terrain comme dans la vie, la plus belle passe est celle qui fait briller l'équipe.",
    "Dribble les obstacles un par un, le but finit toujours par s'ouvrir.",
    "Une défaite n'est qu'une mi-temps : la seconde se joue avec ce que tu as appris.",
];

const BASKETBALL: &[&str] = &[
    "Chaque panier réussi cache des centaines de tirs manqués à l'entraînement.",
    "Pour dunker sur tes doutes, il faut un élan parfait et une volonté sans faille.",
    "Le collectif gagne les matchs, la persévérance gagne les saisons.",
];

const GENERAL: &[&str] = &[
    "Le {theme} n'est pas une destination, c'est un voyage qui forge l'âme.",
    "Le {theme} naît dans l'action, jamais dans l'attente.",
    "Chaque jour est une nouvelle occasion de cultiver le {theme}.",
    "Le {theme} authentique commence par croire en ses propres rêves.",
    "Le {theme} n'est pas un don, c'est une décision quotidienne.",
];

fn table_for(context: ThemeContext) -> &'static [&'static str] {
    match context {
        ThemeContext::RocketLeague => ROCKET_LEAGUE,
        ThemeContext::SpiderMan => SPIDER_MAN,
        ThemeContext::Football => FOOTBALL,
        ThemeContext::Basketball => BASKETBALL,
        _ => GENERAL,
    }
}

/// Draws a local quote matching `theme`. Generic entries embed the theme.
pub fn fallback_quote<R: Rng + ?Sized>(theme: &str, rng: &mut R) -> String {
    let theme = theme.trim();
    let table = table_for(ThemeContext::detect(theme));
    let template = table
        .choose(rng)
        .copied()
        .unwrap_or("Le {theme} réside en chacun de nous, il suffit de le réveiller.");
    template.replace("{theme}", &theme.to_lowercase())
}
