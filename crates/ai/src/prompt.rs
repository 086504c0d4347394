//! Prompt construction for themed quotes.
//!
//! The model is asked for a short French quote that stays inside the
//! universe of the theme. A context hint, picked from keywords in the
//! theme, tells the model which imagery to draw on.

/// Broad family a theme falls into, detected from keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeContext {
    RocketLeague,
    SpiderMan,
    Football,
    BattleRoyale,
    Minecraft,
    Batman,
    Basketball,
    Tennis,
    Programming,
    Music,
    General,
}

impl ThemeContext {
    /// First matching context wins; ordering matters for overlapping keywords.
    ///
    /// Keywords match whole words, or word prefixes for stems such as
    /// `programm` and `basket`, so "frustration" never reads as Rust.
    pub fn detect(theme: &str) -> Self {
        let lower = theme.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        let word = |needle: &str| words.iter().any(|w| *w == needle);
        let stem = |prefix: &str| words.iter().any(|w| w.starts_with(prefix));
        let pair = |first: &str, second: &str| {
            words.windows(2).any(|p| p[0] == first && p[1] == second)
        };

        if pair("rocket", "league") {
            ThemeContext::RocketLeague
        } else if pair("spider", "man") || word("spiderman") {
            ThemeContext::SpiderMan
        } else if word("fifa") || word("foot") || stem("football") {
            ThemeContext::Football
        } else if word("fortnite") {
            ThemeContext::BattleRoyale
        } else if word("minecraft") {
            ThemeContext::Minecraft
        } else if word("batman") {
            ThemeContext::Batman
        } else if stem("basket") {
            ThemeContext::Basketball
        } else if word("tennis") {
            ThemeContext::Tennis
        } else if stem("programm") || word("code") || word("rust") {
            ThemeContext::Programming
        } else if stem("music") || stem("musique") {
            ThemeContext::Music
        } else {
            ThemeContext::General
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            ThemeContext::RocketLeague => {
                "Football en voitures : arrêts acrobatiques, boost, jeu collectif, buts aériens"
            }
            ThemeContext::SpiderMan => {
                "Super-héros araignée : responsabilité, agilité, la toile, protéger la ville"
            }
            ThemeContext::Football => {
                "Football : technique, passes décisives, esprit d'équipe, tactique, le ballon"
            }
            ThemeContext::BattleRoyale => {
                "Battle royale : construire, survivre, s'adapter, décrocher la victoire"
            }
            ThemeContext::Minecraft => {
                "Monde de blocs : créativité, exploration, ressources, bâtir pierre après pierre"
            }
            ThemeContext::Batman => {
                "Justicier de Gotham : détermination, gadgets, nuit, protéger les innocents"
            }
            ThemeContext::Basketball => {
                "Basket : tirs, dunks, adresse, collectif, dépassement physique"
            }
            ThemeContext::Tennis => {
                "Tennis : précision, échanges, concentration, endurance, mental"
            }
            ThemeContext::Programming => {
                "Programmation : algorithmes, débogage, logique, créer à partir de rien"
            }
            ThemeContext::Music => "Musique : harmonie, rythme, émotion, expression, la scène",
            ThemeContext::General => {
                "Thème libre : métaphores concrètes et références précises au domaine cité"
            }
        }
    }
}

/// Builds the user prompt sent to the model for `theme`.
pub fn build_prompt(theme: &str) -> String {
    let theme = theme.trim();
    let context = ThemeContext::detect(theme);

    format!(
        "Écris une citation inspirante et motivante sur le thème : \"{theme}\".\n\
Contraintes :\n\
- deux lignes maximum, en français\n\
- reste dans l'univers du thème \"{theme}\"\n\
- contexte : {hint}\n\
Réponds uniquement avec la citation, sans guillemets ni introduction.",
        theme = theme,
        hint = context.hint(),
    )
}
