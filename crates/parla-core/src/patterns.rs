//! Lexical markers per language, scored by [`crate::detect::LanguageDetector`].
//!
//! One entry per catalog language, in the order used to break score ties.

#[derive(Debug)]
pub struct LanguagePattern {
    pub code: &'static str,
    /// Function words, matched as whole words
    pub common_words: &'static [&'static str],
    /// Vocabulary typical for the language
    pub specific_words: &'static [&'static str],
    pub special_chars: &'static [char],
    /// Matched anywhere in the text
    pub suffixes: &'static [&'static str],
    /// Whether the script separates words with spaces. When false,
    /// words are matched as plain substrings.
    pub spaced: bool,
}

pub static PATTERNS: &[LanguagePattern] = &[
    LanguagePattern {
        code: "EN",
        common_words: &[
            "the", "and", "of", "to", "in", "is", "that", "for", "with", "on", "are", "this",
        ],
        specific_words: &[
            "hello", "hi", "goodbye", "bye", "thanks", "thank you", "please", "yes", "very",
            "good", "bad", "house", "water", "food", "time", "person", "year", "day", "life",
            "world", "work", "family", "friend", "love", "money", "country", "city", "name",
            "place", "way", "hour", "hand", "eye", "head", "heart", "word", "question",
            "answer", "problem",
        ],
        special_chars: &[],
        suffixes: &["ing", "tion", "ness", "ed", "er", "ly"],
        spaced: true,
    },
    LanguagePattern {
        code: "ES",
        common_words: &[
            "el", "la", "de", "que", "en", "es", "se", "con", "por", "para", "una", "del",
        ],
        specific_words: &[
            "hola", "adiós", "gracias", "por favor", "buenos días", "buenas tardes",
            "buenas noches", "sí", "muy", "bien", "casa", "agua", "comida", "tiempo", "persona",
            "año", "día", "vida", "mundo", "trabajo", "familia", "amigo", "amor", "dinero",
            "país", "ciudad", "nombre", "lugar", "manera", "vez", "hora", "mano", "ojo",
            "cabeza", "corazón", "palabra", "pregunta", "respuesta", "problema", "solución",
        ],
        special_chars: &['ñ', '¿', '¡', 'á', 'é', 'í', 'ó', 'ú'],
        suffixes: &["ción", "dad", "mente", "ando", "iendo", "ado", "ido"],
        spaced: true,
    },
    LanguagePattern {
        code: "FR",
        common_words: &[
            "le", "la", "de", "et", "est", "dans", "avec", "pour", "que", "une", "des", "du",
        ],
        specific_words: &[
            "bonjour", "bonsoir", "salut", "merci", "au revoir", "oui", "non", "très", "bien",
            "maison", "eau", "nourriture", "temps", "personne", "année", "jour", "vie", "monde",
            "travail", "famille", "ami", "amour", "argent", "pays", "ville", "nom", "lieu",
            "manière", "fois", "heure", "main", "œil", "tête", "cœur", "mot", "réponse",
            "problème",
        ],
        special_chars: &['ç', 'à', 'é', 'è', 'ê', 'ë', 'î', 'ï', 'ô', 'ù', 'û', 'ü', 'ÿ'],
        suffixes: &["tion", "ment", "ique", "ant", "ent", "é", "er"],
        spaced: true,
    },
    LanguagePattern {
        code: "DE",
        common_words: &[
            "der", "die", "das", "und", "ist", "mit", "von", "zu", "auf", "für", "ein", "eine",
        ],
        specific_words: &[
            "hallo", "guten tag", "auf wiedersehen", "danke", "bitte", "ja", "nein", "sehr",
            "gut", "schlecht", "haus", "wasser", "essen", "zeit", "jahr", "tag", "leben", "welt",
            "arbeit", "familie", "freund", "liebe", "geld", "land", "stadt", "teil", "ort",
            "weise", "stunde", "auge", "kopf", "herz", "wort", "frage", "antwort", "lösung",
        ],
        special_chars: &['ä', 'ö', 'ü', 'ß'],
        suffixes: &["ung", "keit", "lich", "end", "ern", "en", "er"],
        spaced: true,
    },
    LanguagePattern {
        code: "IT",
        common_words: &[
            "il", "la", "di", "che", "con", "per", "una", "del", "della", "sono", "essere",
        ],
        specific_words: &[
            "ciao", "buongiorno", "buonasera", "arrivederci", "grazie", "prego", "sì", "molto",
            "bene", "male", "casa", "acqua", "cibo", "tempo", "persona", "anno", "giorno",
            "vita", "mondo", "lavoro", "famiglia", "amico", "amore", "denaro", "paese", "città",
            "nome", "luogo", "modo", "volta", "ora", "mano", "occhio", "testa", "cuore",
            "parola", "domanda", "risposta", "problema", "soluzione",
        ],
        special_chars: &['à', 'è', 'é', 'ì', 'í', 'î', 'ò', 'ó', 'ù', 'ú'],
        suffixes: &["zione", "mente", "ità", "ando", "endo", "ato", "ito"],
        spaced: true,
    },
    LanguagePattern {
        code: "PT",
        common_words: &[
            "o", "a", "de", "que", "em", "para", "com", "uma", "do", "da", "são", "ser",
        ],
        specific_words: &[
            "olá", "oi", "tchau", "obrigado", "obrigada", "por favor", "bom dia", "boa tarde",
            "boa noite", "sim", "não", "muito", "bem", "casa", "água", "comida", "tempo",
            "pessoa", "ano", "dia", "vida", "mundo", "trabalho", "família", "amigo", "amor",
            "dinheiro", "país", "cidade", "nome", "lugar", "maneira", "vez", "hora", "mão",
            "olho", "cabeça", "coração", "palavra", "pergunta", "resposta", "problema", "solução",
        ],
        special_chars: &['ã', 'õ', 'ç', 'á', 'à', 'â', 'é', 'ê', 'í', 'ó', 'ô', 'ú'],
        suffixes: &["ção", "mente", "dade", "ando", "endo", "ado", "ido"],
        spaced: true,
    },
    LanguagePattern {
        code: "RU",
        common_words: &[
            "и", "в", "не", "на", "с", "что", "как", "по", "за", "от", "для",
        ],
        specific_words: &[
            "привет", "пока", "спасибо", "пожалуйста", "да", "нет", "очень", "хорошо", "плохо",
            "дом", "вода", "еда", "время", "человек", "год", "день", "жизнь", "мир", "работа",
            "семья", "друг", "любовь", "деньги", "страна", "город", "имя", "часть", "место",
            "случай", "способ", "раз", "час", "рука", "глаз", "голова", "сердце", "слово",
            "вопрос", "ответ", "проблема", "решение",
        ],
        special_chars: &[
            'а', 'б', 'в', 'г', 'д', 'е', 'ё', 'ж', 'з', 'и', 'й', 'к', 'л', 'м', 'н', 'о', 'п',
            'р', 'с', 'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ъ', 'ы', 'ь', 'э', 'ю', 'я',
        ],
        suffixes: &[],
        spaced: true,
    },
    LanguagePattern {
        code: "JA",
        common_words: &[],
        specific_words: &[
            "こんにちは", "ありがとう", "おはよう", "さようなら", "すみません", "です", "ます",
            "ください",
        ],
        special_chars: &[
            'の', 'は', 'を', 'に', 'が', 'で', 'と', 'た', 'し', 'て', 'す', 'ま', 'か', 'な',
            'い', 'る', 'ア', 'イ', 'ン', 'ス', 'ト', 'ル', 'ー',
        ],
        suffixes: &[],
        spaced: false,
    },
    LanguagePattern {
        code: "ZH",
        common_words: &[],
        specific_words: &[
            "你好", "谢谢", "再见", "我们", "他们", "什么", "没有", "这个", "那个", "可以",
        ],
        special_chars: &['的', '这', '们', '么', '吗', '说', '没', '个', '为', '会', '对', '还'],
        suffixes: &[],
        spaced: false,
    },
];
