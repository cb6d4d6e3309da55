pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub points: &'static [&'static str],
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        role: "Data Scientist (Part-time)",
        company: "Kidaura",
        period: "Mar 2025 - Current",
        points: &[
            "Developed ETL pipelines with Python, reducing data processing time by 30%.",
            "Built scikit-learn models achieving 95% accuracy and 25% error reduction.",
            "Performed anomaly detection and custom analysis for clinical stakeholders.",
        ],
    },
    Experience {
        role: "Founder's Office - Analytics & Partnerships",
        company: "Tummo Labs",
        period: "Jun 2024 - Oct 2024",
        points: &[
            "Led analytics for a product launch reaching 47,000+ users in 3 months.",
            "Designed and interpreted A/B tests, increasing user retention by 25%.",
            "Created dashboards for cross-functional data-driven decision making.",
        ],
    },
    Experience {
        role: "Administrator",
        company: "Shloka",
        period: "May 2023 - Dec 2023",
        points: &[
            "Improved data collection, achieving 98% data integrity across 50+ groups.",
            "Analyzed engagement metrics with SQL to create stakeholder reports.",
        ],
    },
];
