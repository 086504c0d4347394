/// Quotes inserted into an empty store at startup.
pub const DEFAULT_QUOTES: &[(&str, &str)] = &[
    ("Stay hungry, stay foolish.", "Steve Jobs"),
    (
        "La vie, c'est comme une bicyclette, il faut avancer pour ne pas perdre l'équilibre.",
        "Albert Einstein",
    ),
    (
        "Le succès n'est pas final, l'échec n'est pas fatal : c'est le courage de continuer qui compte.",
        "Winston Churchill",
    ),
    (
        "Ils ne savaient pas que c'était impossible, alors ils l'ont fait.",
        "Mark Twain",
    ),
    (
        "Il n'y a qu'une façon d'échouer, c'est d'abandonner avant d'avoir réussi.",
        "Georges Clemenceau",
    ),
    (
        "Choisissez un travail que vous aimez et vous n'aurez pas à travailler un seul jour de votre vie.",
        "Confucius",
    ),
    (
        "Le pessimiste se plaint du vent, l'optimiste espère qu'il va changer, le réaliste ajuste ses voiles.",
        "William Arthur Ward",
    ),
    ("Fais de ta vie un rêve, et d'un rêve, une réalité.", "Antoine de Saint-Exupéry"),
];
