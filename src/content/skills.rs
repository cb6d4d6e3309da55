pub const SKILLS: &[&str] = &[
    "Python",
    "SQL",
    "PostgreSQL",
    "scikit-learn",
    "Pandas & NumPy",
    "ETL Pipelines",
    "Statistical Modeling",
    "A/B Testing",
    "Flask",
    "FastAPI",
    "Hugging Face",
    "LangChain",
    "Docker",
    "S3 (AWS)",
    "Feature Engineering",
    "Git",
    "Bash",
    "RAG",
    "Tableau",
    "Power BI",
    "Google Workspace",
    "Vue3",
    "OpenAI",
    "Claude",
];
