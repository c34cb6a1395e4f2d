//! Static morphology tables: known base forms and irregular inflections.
//!
//! Base forms validate candidate lemmas produced by the detachment rules; the
//! exception tables map irregular inflections straight to their lemma. All
//! entries are lowercase.

/// Noun base forms.
pub const NOUNS: &[&str] = &[
    "ability", "access", "account", "action", "activity", "address", "age", "air", "algorithm",
    "analysis", "animal", "answer", "apple", "area", "argument", "art", "article", "axis", "baby",
    "back", "bag", "ball", "bank", "base", "bed", "bird", "body", "book", "box", "boy", "brain",
    "branch", "brush", "bus", "business", "cactus", "calf", "car", "card", "case", "cat", "cause",
    "century", "chair", "chaos", "character", "child", "church", "city", "class", "code", "college",
    "community", "company", "computer", "corpus", "country", "course", "crisis", "criterion",
    "culture", "cup", "data", "database", "datum", "day", "death", "dish", "document", "dog",
    "door", "dream", "earth", "economy", "education", "effect", "energy", "engine", "example",
    "eye", "face", "fact", "family", "father", "feature", "field", "file", "fish", "flower",
    "focus", "food", "foot", "form", "fox", "friend", "fungus", "game", "gas", "glass", "goose",
    "government", "grammar", "group", "half", "hand", "head", "health", "heart", "hero", "history",
    "home", "horse", "hour", "house", "idea", "index", "information", "interest", "issue", "job",
    "key", "kid", "kind", "knife", "knowledge", "lady", "land", "language", "law", "leaf",
    "lens", "level", "library", "life", "light", "line", "list", "loaf", "louse", "machine",
    "man", "market", "match", "matrix", "meaning", "member", "method", "mind", "minute", "model",
    "moment", "money", "month", "morning", "mother", "mouse", "movie", "music", "name", "nation",
    "nature", "network", "news", "night", "number", "office", "order", "ox", "page", "paper",
    "parent", "part", "party", "pattern", "people", "person", "phenomenon", "phone", "picture",
    "piece", "place", "plan", "plant", "point", "policy", "potato", "power", "problem", "process",
    "product", "program", "question", "rate", "reason", "research", "result", "right", "river",
    "road", "room", "rule", "school", "science", "sentence", "series", "service", "shelf", "shoe",
    "side", "sky", "society", "software", "son", "song", "species", "state", "stem", "story",
    "street", "student", "study", "system", "table", "task", "teacher", "team", "technology",
    "term", "test", "text", "thesis", "thief", "thing", "time", "token", "tomato", "tooth", "town",
    "tree", "type", "university", "user", "value", "vector", "view", "village", "voice", "war",
    "watch", "water", "way", "week", "wife", "window", "wish", "wolf", "woman", "word", "work",
    "world", "year",
];

/// Verb base forms.
pub const VERBS: &[&str] = &[
    "accept", "add", "agree", "allow", "answer", "appear", "apply", "arrive", "ask", "bake",
    "be", "become", "begin", "believe", "break", "bring", "build", "buy", "call", "carry",
    "catch", "change", "chase", "choose", "clean", "close", "come", "compute", "consider",
    "contain", "continue", "cook", "cost", "count", "create", "cry", "cut", "dance", "decide",
    "describe", "develop", "die", "do", "draw", "dream", "drink", "drive", "eat", "embed",
    "enjoy", "explain", "extract", "fall", "feel", "fight", "filter", "find", "finish", "fly",
    "follow", "forget", "get", "give", "go", "grow", "happen", "hate", "have", "hear", "help",
    "hide", "hit", "hold", "hope", "hurry", "include", "jump", "keep", "kill", "know", "lead",
    "learn", "leave", "let", "lie", "like", "listen", "live", "look", "lose", "love", "make",
    "marry", "mean", "meet", "move", "need", "offer", "open", "parse", "pay", "plan", "play",
    "prefer", "prepare", "process", "provide", "put", "read", "reach", "receive", "remain",
    "remember", "remove", "report", "require", "rise", "ride", "run", "say", "see", "seek",
    "seem", "sell", "send", "serve", "set", "shake", "show", "sing", "sit", "sleep", "smile",
    "speak", "spend", "stand", "start", "stay", "stem", "stop", "strike", "study", "suggest",
    "swim", "take", "talk", "teach", "tell", "tend", "think", "throw", "tie", "tokenize", "touch",
    "travel", "try", "turn", "understand", "use", "visit", "wait", "wake", "walk", "want",
    "watch", "wear", "win", "wish", "wonder", "work", "worry", "write",
];

/// Adjective base forms.
pub const ADJECTIVES: &[&str] = &[
    "able", "bad", "big", "black", "blue", "bright", "brown", "busy", "calm", "cheap", "clean",
    "clear", "close", "cold", "common", "cool", "dark", "deep", "different", "early", "easy",
    "empty", "far", "fast", "few", "fine", "free", "full", "good", "great", "green", "happy",
    "hard", "heavy", "high", "hot", "important", "large", "late", "lazy", "little", "long",
    "loud", "low", "modern", "natural", "near", "new", "nice", "old", "open", "poor", "possible",
    "pretty", "public", "quick", "quiet", "ready", "real", "red", "rich", "right", "sad", "safe",
    "short", "simple", "slow", "small", "smart", "soft", "strong", "sure", "tall", "thin",
    "true", "warm", "weak", "white", "wide", "wise", "wrong", "young",
];

/// Irregular noun plurals.
pub const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("analyses", "analysis"), ("axes", "axis"), ("cacti", "cactus"), ("calves", "calf"),
    ("children", "child"), ("corpora", "corpus"), ("crises", "crisis"),
    ("criteria", "criterion"), ("feet", "foot"), ("fungi", "fungus"), ("geese", "goose"),
    ("halves", "half"), ("indices", "index"), ("knives", "knife"), ("leaves", "leaf"),
    ("lice", "louse"), ("lives", "life"), ("loaves", "loaf"), ("matrices", "matrix"),
    ("men", "man"), ("mice", "mouse"), ("oxen", "ox"), ("phenomena", "phenomenon"),
    ("shelves", "shelf"), ("teeth", "tooth"), ("theses", "thesis"), ("thieves", "thief"),
    ("wives", "wife"), ("wolves", "wolf"), ("women", "woman"),
];

/// Irregular verb inflections.
pub const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("am", "be"), ("are", "be"), ("ate", "eat"), ("became", "become"), ("began", "begin"),
    ("begun", "begin"), ("been", "be"), ("being", "be"), ("bought", "buy"), ("broke", "break"),
    ("broken", "break"), ("brought", "bring"), ("built", "build"), ("came", "come"),
    ("caught", "catch"), ("chose", "choose"), ("chosen", "choose"), ("did", "do"),
    ("does", "do"), ("done", "do"), ("drank", "drink"), ("drawn", "draw"), ("drew", "draw"),
    ("driven", "drive"), ("drove", "drive"), ("drunk", "drink"), ("dying", "die"),
    ("eaten", "eat"), ("fallen", "fall"), ("fell", "fall"), ("felt", "feel"),
    ("flew", "fly"), ("flown", "fly"), ("forgot", "forget"), ("forgotten", "forget"),
    ("fought", "fight"), ("found", "find"), ("gave", "give"), ("given", "give"),
    ("gone", "go"), ("got", "get"), ("gotten", "get"), ("grew", "grow"), ("grown", "grow"),
    ("had", "have"), ("has", "have"), ("having", "have"), ("heard", "hear"),
    ("held", "hold"), ("hid", "hide"), ("hidden", "hide"), ("is", "be"), ("kept", "keep"),
    ("knew", "know"), ("known", "know"), ("lain", "lie"), ("led", "lead"), ("left", "leave"),
    ("lost", "lose"), ("lying", "lie"), ("made", "make"), ("meant", "mean"), ("met", "meet"),
    ("paid", "pay"), ("ran", "run"), ("ridden", "ride"), ("risen", "rise"), ("rode", "ride"),
    ("rose", "rise"), ("said", "say"), ("sang", "sing"), ("sat", "sit"), ("saw", "see"),
    ("seen", "see"), ("sent", "send"), ("shaken", "shake"), ("shook", "shake"),
    ("slept", "sleep"), ("sold", "sell"), ("sought", "seek"), ("spent", "spend"),
    ("spoke", "speak"), ("spoken", "speak"), ("stood", "stand"), ("struck", "strike"),
    ("sung", "sing"), ("swam", "swim"), ("swum", "swim"), ("taken", "take"),
    ("taught", "teach"), ("thought", "think"), ("threw", "throw"), ("thrown", "throw"),
    ("took", "take"), ("told", "tell"), ("tying", "tie"), ("understood", "understand"),
    ("was", "be"), ("went", "go"), ("were", "be"), ("woke", "wake"), ("woken", "wake"),
    ("won", "win"), ("wore", "wear"), ("worn", "wear"), ("written", "write"),
    ("wrote", "write"),
];

/// Irregular adjective comparatives and superlatives.
pub const ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("best", "good"), ("better", "good"), ("bigger", "big"), ("biggest", "big"),
    ("farther", "far"), ("farthest", "far"), ("further", "far"), ("furthest", "far"),
    ("hotter", "hot"), ("hottest", "hot"), ("worse", "bad"), ("worst", "bad"),
];

/// Irregular adverb comparatives and superlatives.
pub const ADVERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("best", "well"), ("better", "well"), ("deeper", "deeply"), ("farther", "far"),
    ("further", "far"), ("harder", "hard"), ("hardest", "hard"),
];
