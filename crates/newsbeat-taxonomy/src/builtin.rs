//! Built-in editorial taxonomy tables.
//!
//! Section segments are lowercase; keyword and byline patterns are compiled
//! case-insensitively. Context indicators are plain substrings, not regexes.

/// Section segment → implied beats. A segment may imply several beats.
pub(crate) const SECTIONS: &[(&str, &[&str])] = &[
    ("ai", &["artificial intelligence", "technology"]),
    ("business", &["business"]),
    ("climate", &["climate"]),
    ("culture", &["entertainment"]),
    ("economy", &["business", "finance"]),
    ("election", &["politics"]),
    ("elections", &["politics"]),
    ("entertainment", &["entertainment"]),
    ("environment", &["climate"]),
    ("finance", &["finance"]),
    ("health", &["healthcare"]),
    ("healthcare", &["healthcare"]),
    ("markets", &["finance"]),
    ("media", &["media"]),
    ("money", &["finance"]),
    ("politics", &["politics"]),
    ("science", &["science"]),
    ("sport", &["sports"]),
    ("sports", &["sports"]),
    ("startups", &["technology", "business"]),
    ("tech", &["technology"]),
    ("technology", &["technology"]),
];

/// Beat → keyword regexes matched anywhere in title + body.
pub(crate) const KEYWORDS: &[(&str, &[&str])] = &[
    (
        "artificial intelligence",
        &[
            r"\bai\b",
            r"artificial intelligence",
            r"machine learning",
            r"neural network",
            r"large language model",
            r"chatbot",
        ],
    ),
    (
        "technology",
        &[
            r"\bsoftware\b",
            r"\bhardware\b",
            r"silicon valley",
            r"cybersecurity",
            r"semiconductor",
            r"\bstartups?\b",
        ],
    ),
    (
        "business",
        &[
            r"\bmergers?\b",
            r"\bacquisitions?\b",
            r"\bearnings\b",
            r"quarterly results",
            r"\bipo\b",
        ],
    ),
    (
        "finance",
        &[
            r"stock market",
            r"interest rates?",
            r"\binflation\b",
            r"hedge fund",
            r"cryptocurrency",
        ],
    ),
    (
        "politics",
        &[
            r"\bcongress\b",
            r"\bsenate\b",
            r"\bparliament\b",
            r"\blegislation\b",
            r"white house",
            r"\bcampaign\b",
        ],
    ),
    (
        "healthcare",
        &[
            r"\bhospitals?\b",
            r"clinical trial",
            r"\bvaccines?\b",
            r"public health",
            r"\bfda\b",
        ],
    ),
    (
        "sports",
        &[
            r"\bchampionship\b",
            r"\bplayoffs?\b",
            r"\btournament\b",
            r"\bolympics?\b",
            r"\bleague\b",
        ],
    ),
    (
        "entertainment",
        &[
            r"box office",
            r"\bstreaming\b",
            r"film festival",
            r"\bcelebrity\b",
            r"\balbum\b",
        ],
    ),
    (
        "science",
        &[
            r"\bresearchers?\b",
            r"peer.reviewed",
            r"\blaboratory\b",
            r"\bnasa\b",
            r"\btelescope\b",
            r"\bgenome\b",
        ],
    ),
    (
        "climate",
        &[
            r"climate change",
            r"carbon emissions",
            r"renewable energy",
            r"global warming",
        ],
    ),
];

/// Beat → plain indicator words, matched by substring containment. A beat
/// needs at least two distinct indicators present to register.
pub(crate) const CONTEXTS: &[(&str, &[&str])] = &[
    (
        "technology",
        &["startup", "developer", "platform", "cloud", "digital", "software"],
    ),
    (
        "artificial intelligence",
        &["model", "training", "algorithm", "automation", "inference"],
    ),
    (
        "business",
        &["ceo", "investor", "market share", "profit", "enterprise"],
    ),
    (
        "finance",
        &["investment", "funding", "capital", "valuation", "portfolio", "shares"],
    ),
    (
        "politics",
        &["policy", "government", "regulation", "lawmaker", "ballot"],
    ),
    (
        "healthcare",
        &["treatment", "diagnosis", "medical", "clinic", "patient"],
    ),
    ("sports", &["coach", "season", "team", "player", "stadium"]),
    (
        "entertainment",
        &["actor", "director", "premiere", "studio", "soundtrack"],
    ),
    (
        "science",
        &["experiment", "hypothesis", "study", "discovery", "specimen"],
    ),
    (
        "climate",
        &["emissions", "warming", "sustainability", "renewable", "drought"],
    ),
];

/// Byline role pattern → beat. A byline can match several entries.
pub(crate) const BYLINES: &[(&str, &str)] = &[
    (r"technology|tech", "technology"),
    (r"business|finance", "business"),
    (r"politics|political", "politics"),
    (r"health|medical", "healthcare"),
    (r"sports", "sports"),
    (r"entertainment", "entertainment"),
    (r"science", "science"),
];
