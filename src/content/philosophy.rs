pub struct Principle {
    pub title: &'static str,
    pub description: &'static str,
}

/// The "compass" grid: the practices and interests that shape the work.
pub const PRINCIPLES: &[Principle] = &[
    Principle {
        title: "Vedic Astrology",
        description: "Pattern recognition in cosmic cycles and human behavior",
    },
    Principle {
        title: "Hatha Yoga",
        description: "Embodied discipline, breath work, and mindful movement",
    },
    Principle {
        title: "Japandi Aesthetics",
        description: "Minimalism meets warmth, intentional design, and negative space",
    },
    Principle {
        title: "Stoic Philosophy",
        description: "Rational clarity, acceptance, and virtuous action",
    },
    Principle {
        title: "Buddhist Mindfulness",
        description: "Present-moment awareness and compassionate observation",
    },
    Principle {
        title: "Systems Thinking",
        description: "Interconnection, emergence, and holistic problem-solving",
    },
    Principle {
        title: "Clinical Ethics",
        description: "Human-centered impact and responsible healthcare innovation",
    },
    Principle {
        title: "Open Source Values",
        description: "Shared knowledge, collaboration, and transparent iteration",
    },
    Principle {
        title: "AGI Futures",
        description: "Responsible intelligence design and consciousness research",
    },
];
