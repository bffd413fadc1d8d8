/// Topic mapping from download folder names to asset folder names
pub const TOPIC_MAPPING: &[(&str, &str)] = &[
    ("Fahrzeug", "fahrzeug"),
    ("Kleidung", "kleidung"),
    ("Natur", "natur"),
    ("Stadt", "stadt"),
    ("Tiere", "tiere"),
    ("Тело - Körper", "korper"),
    ("Wohnung", "wohnung"),
];

/// Order in which the card generator walks topic folders
pub const CARD_TOPICS: &[&str] = &[
    "fahrzeug", "kleidung", "natur", "stadt", "tiere", "korper", "wohnung",
];

// ============================================================================
// Filename Tokens
// ============================================================================

/// Image extensions picked up by the optimizer and validator
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Spellings of the Russian "black-and-white" marker used in downloads
pub const GRAY_MARKERS: &[&str] = &["ч.б", "ч б", "_чб", "чб"];

/// Suffix appended to greyscale variants
pub const GRAY_SUFFIX: &str = "_gray";

/// Wohnung: Russian filename tokens to German slugs
pub const WOHNUNG_TOKENS: &[(&str, &str)] = &[
    ("дверь", "tuer"),
    ("балкон", "balkon"),
    ("квартира", "wohnung"),
    ("лифт", "aufzug"),
    ("коридор", "flur"),
    ("окно", "fenster"),
    ("потолок", "decke"),
    ("пол", "boden"),
    ("стена", "wand"),
    ("лестница", "treppe"),
    ("подвал", "keller"),
    ("чердак", "dachboden"),
    ("шкаф", "schrank"),
    ("стул", "stuhl"),
    ("стол", "tisch"),
    ("кровать", "bett"),
    ("кресло", "sessel"),
    ("душ", "dusche"),
    ("диван", "sofa"),
    ("ковёр", "teppich"),
    ("занавеска", "vorhang"),
    ("зеркало", "spiegel"),
    ("розетка", "steckdose"),
    ("обогреватель", "heizung"),
    ("холодильник", "kuehlschrank"),
    ("телевизор", "fernseher"),
    ("ванна", "badewanne"),
    // truncated spelling seen in downloads
    ("туале", "toilette"),
    ("туалет", "toilette"),
    ("гостиная", "wohnzimmer"),
    ("спальня", "schlafzimmer"),
    ("кухня", "kueche"),
    ("ванная", "badezimmer"),
    ("комната", "zimmer"),
];

/// Körper: Russian filename tokens to German slugs
pub const KORPER_TOKENS: &[(&str, &str)] = &[
    ("бедро", "oberschenkel"),
    ("бровь", "augenbraue"),
    ("волосы", "haare"),
    ("глаз", "auge"),
    ("голова", "kopf"),
    ("горло", "hals"),
    ("грудь", "brust"),
    ("губа", "lippe"),
    ("зуб", "zahn"),
    ("кисть", "hand"),
    ("колено", "knie"),
    ("кулак", "faust"),
    ("лицо", "gesicht"),
    ("лоб", "stirn"),
    ("локоть", "ellbogen"),
    ("нога", "bein"),
    ("ноготь", "nagel"),
    ("нос", "nase"),
    ("палец", "finger"),
    ("плечо", "schulter"),
    ("подбородок", "kinn"),
    ("пятка", "ferse"),
    ("рот", "mund"),
    ("рука", "arm"),
    ("спина", "ruecken"),
    ("ухо", "ohr"),
];

/// Get the filename token table used for a download folder, if any
pub fn get_token_table(source: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match source {
        "Wohnung" => Some(WOHNUNG_TOKENS),
        "Тело - Körper" => Some(KORPER_TOKENS),
        _ => None,
    }
}

// ============================================================================
// Articles and Translations
// ============================================================================

/// Known articles by noun slug. Anything missing falls back to suffix rules.
pub const KNOWN_ARTICLES: &[(&str, &str)] = &[
    // Wohnung
    ("zimmer", "das"), ("wohnzimmer", "das"), ("schlafzimmer", "das"), ("badezimmer", "das"),
    ("kueche", "die"), ("badewanne", "die"), ("toilette", "die"), ("tuer", "die"),
    ("fenster", "das"), ("decke", "die"), ("wand", "die"), ("treppe", "die"),
    ("flur", "der"), ("balkon", "der"), ("aufzug", "der"), ("keller", "der"),
    ("dachboden", "der"), ("schrank", "der"), ("stuhl", "der"), ("tisch", "der"),
    ("bett", "das"), ("sessel", "der"), ("dusche", "die"), ("sofa", "das"),
    ("teppich", "der"), ("vorhang", "der"), ("spiegel", "der"), ("steckdose", "die"),
    ("heizung", "die"), ("kuehlschrank", "der"), ("fernseher", "der"), ("boden", "der"),
    // Körper
    ("kopf", "der"), ("auge", "das"), ("nase", "die"), ("mund", "der"),
    ("ohr", "das"), ("zahn", "der"), ("haar", "das"), ("haare", "die"),
    ("hand", "die"), ("arm", "der"), ("bein", "das"), ("fuss", "der"),
    ("finger", "der"), ("knie", "das"), ("schulter", "die"), ("ruecken", "der"),
    ("brust", "die"), ("bauch", "der"), ("hals", "der"), ("gesicht", "das"),
    ("stirn", "die"), ("kinn", "das"), ("lippe", "die"), ("augenbraue", "die"),
    ("ellbogen", "der"), ("faust", "die"), ("ferse", "die"), ("nagel", "der"),
    ("oberschenkel", "der"),
    // Transport
    ("auto", "das"), ("bus", "der"), ("zug", "der"), ("flugzeug", "das"),
    ("fahrrad", "das"), ("motorrad", "das"), ("schiff", "das"), ("boot", "das"),
    ("ampel", "die"), ("strasse", "die"), ("autobahn", "die"), ("bahnhof", "der"),
    ("flughafen", "der"), ("haltestelle", "die"), ("parkplatz", "der"),
    ("tunnel", "der"), ("bruecke", "die"), ("kreuzung", "die"),
    ("buergersteig", "der"), ("fussgaenger", "der"),
    // Stadt
    ("haus", "das"), ("gebaeude", "das"), ("schule", "die"), ("kirche", "die"),
    ("krankenhaus", "das"), ("apotheke", "die"), ("bank", "die"), ("post", "die"),
    ("restaurant", "das"), ("cafe", "das"), ("hotel", "das"), ("park", "der"),
    ("platz", "der"), ("markt", "der"), ("geschaeft", "das"), ("supermarkt", "der"),
    ("kino", "das"), ("theater", "das"), ("museum", "das"), ("bibliothek", "die"),
    ("rathaus", "das"), ("polizei", "die"), ("feuerwehr", "die"),
    ("stadt", "die"), ("dorf", "das"),
    // Tiere
    ("hund", "der"), ("katze", "die"), ("pferd", "das"), ("kuh", "die"),
    ("schwein", "das"), ("schaf", "das"), ("ziege", "die"), ("huhn", "das"),
    ("vogel", "der"), ("fisch", "der"), ("maus", "die"), ("elefant", "der"),
    ("loewe", "der"), ("tiger", "der"), ("baer", "der"), ("affe", "der"),
    ("schlange", "die"), ("frosch", "der"), ("schmetterling", "der"),
    ("biene", "die"), ("fliege", "die"), ("spinne", "die"), ("delfin", "der"),
    ("ente", "die"), ("gans", "die"), ("buer", "der"), ("eichhoernchen", "das"),
    ("igel", "der"), ("hase", "der"), ("fuchs", "der"), ("hirsch", "der"),
    // Natur
    ("baum", "der"), ("blume", "die"), ("gras", "das"), ("wald", "der"),
    ("berg", "der"), ("fluss", "der"), ("see", "der"), ("meer", "das"),
    ("himmel", "der"), ("sonne", "die"), ("mond", "der"), ("stern", "der"),
    ("wolke", "die"), ("regen", "der"), ("schnee", "der"), ("wind", "der"),
    ("blatt", "das"), ("wurzel", "die"), ("ast", "der"), ("pilz", "der"),
    ("stein", "der"), ("sand", "der"), ("erde", "die"), ("wasser", "das"),
    ("feuer", "das"), ("regenbogen", "der"), ("nebel", "der"), ("gewitter", "das"),
    ("bach", "der"), ("beere", "die"), ("zapfen", "der"), ("hain", "der"),
    ("koralle", "die"), ("riff", "das"), ("sturm", "der"), ("orkan", "der"),
    ("reif", "der"), ("eiszapfen", "der"),
    // Kleidung
    ("hose", "die"), ("hemd", "das"), ("kleid", "das"), ("rock", "der"),
    ("jacke", "die"), ("mantel", "der"), ("pullover", "der"), ("tshirt", "das"),
    ("schuh", "der"), ("socke", "die"), ("hut", "der"), ("muetze", "die"),
    ("handschuh", "der"), ("schal", "der"), ("guertel", "der"),
    ("bluse", "die"), ("anzug", "der"), ("jeans", "die"), ("stiefel", "der"),
    ("tasche", "die"), ("rucksack", "der"), ("krawatte", "die"),
    ("schlafanzug", "der"), ("unterhemd", "das"), ("shorts", "die"),
];

/// Russian translations by noun slug (Wohnung and Körper only)
pub const RUS_TRANSLATIONS: &[(&str, &str)] = &[
    // Wohnung
    ("tuer", "дверь"), ("balkon", "балкон"), ("wohnung", "квартира"),
    ("aufzug", "лифт"), ("flur", "коридор"), ("fenster", "окно"),
    ("decke", "потолок"), ("boden", "пол"), ("wand", "стена"),
    ("treppe", "лестница"), ("keller", "подвал"), ("dachboden", "чердак"),
    ("schrank", "шкаф"), ("stuhl", "стул"), ("tisch", "стол"),
    ("bett", "кровать"), ("sessel", "кресло"), ("dusche", "душ"),
    ("sofa", "диван"), ("teppich", "ковёр"), ("vorhang", "занавеска"),
    ("spiegel", "зеркало"), ("steckdose", "розетка"), ("heizung", "обогреватель"),
    ("kuehlschrank", "холодильник"), ("fernseher", "телевизор"),
    ("badewanne", "ванна"), ("toilette", "туалет"), ("wohnzimmer", "гостиная"),
    ("schlafzimmer", "спальня"), ("kueche", "кухня"), ("badezimmer", "ванная"),
    ("zimmer", "комната"),
    // Körper
    ("oberschenkel", "бедро"), ("augenbraue", "бровь"), ("haare", "волосы"),
    ("auge", "глаз"), ("kopf", "голова"), ("hals", "горло"),
    ("brust", "грудь"), ("lippe", "губа"), ("zahn", "зуб"),
    ("hand", "кисть"), ("knie", "колено"), ("faust", "кулак"),
    ("gesicht", "лицо"), ("stirn", "лоб"), ("ellbogen", "локоть"),
    ("bein", "нога"), ("nagel", "ноготь"), ("nase", "нос"),
    ("finger", "палец"), ("schulter", "плечо"), ("kinn", "подбородок"),
    ("ferse", "пятка"), ("mund", "рот"), ("arm", "рука"),
    ("ruecken", "спина"), ("ohr", "ухо"),
];

/// Russian topic titles whose Ukrainian form is known
pub const RU_TO_UK_TITLES: &[(&str, &str)] = &[
    ("Квартира", "Квартира"),
    ("Транспорт", "Транспорт"),
    ("Одежда", "Одяг"),
    ("Природа", "Природа"),
    ("Город", "Місто"),
    ("Животные", "Тварини"),
    ("Тело", "Тіло"),
];

/// Adjective endings rewritten from Russian to Ukrainian, checked in order
pub const RU_TO_UK_ENDINGS: &[(&str, &str)] = &[("ый", "ий"), ("ая", "а"), ("ое", "е")];

/// Look up a value in one of the static `(key, value)` tables
pub fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|&&(k, _)| k == key)
        .map(|&(_, value)| value)
}

// ============================================================================
// Image Optimization
// ============================================================================

pub const MAX_WIDTH: u32 = 800;
pub const MAX_HEIGHT: u32 = 800;
pub const JPEG_QUALITY: u8 = 85;
pub const TARGET_SIZE_KB: u64 = 150;

/// Downloads saved twice by the browser carry this marker and are skipped
pub const DUPLICATE_MARKER: &str = " 2.";

/// Check whether a file name carries one of the given extensions
pub fn has_extension(filename: &str, extensions: &[&str]) -> bool {
    filename
        .rsplit_once('.')
        .is_some_and(|(_, ext)| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}
