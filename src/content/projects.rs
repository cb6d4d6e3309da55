pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub repo_url: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Clinical Analytics Pipeline",
        description: "End-to-end data pipeline with robust validation, anomaly \
                      detection, and automated QA, reducing manual review time by 40%.",
        tech: &["Python", "SQL", "Pandas & NumPy", "ETL Pipelines"],
        repo_url: "https://github.com/jbanmol/Touchdata_Analysis_clinical.git",
    },
    Project {
        title: "Neuro-Diverse Medical Classification",
        description: "Statistical modeling and cohort analysis distilling user \
                      behavior data into actionable product insights for a \
                      neuro-diverse context.",
        tech: &["Python", "scikit-learn", "Statistical Modeling", "RAG"],
        repo_url: "https://github.com/jbanmol/binary_classification_clinical.git",
    },
    Project {
        title: "AI Builder & Deployer",
        description: "AI agent built on GPT-4o-mini that automatically builds, \
                      deploys, and updates projects on GitHub from natural \
                      language queries.",
        tech: &["Python", "OpenAI", "LangChain", "Hugging Face", "Docker"],
        repo_url: "https://github.com/jbanmol/Build_Deploy_gpt-4o-mini-IITM",
    },
    Project {
        title: "Movie Review Sentiment Analyzer",
        description: "High-accuracy sentiment analysis model built with Gemini \
                      Flash 2.0 to classify movie reviews, tuning responses \
                      with temperature control.",
        tech: &["Python", "Gemini API", "Pandas & NumPy"],
        repo_url: "https://github.com/jbanmol/movie_Review_Sentiment_Analyzer",
    },
];
