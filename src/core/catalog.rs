use crate::models::{ProfileField, ScholarshipDefinition};
use crate::models::ProfileField::{Average, FinancialNeed, SchoolType, Talent, University};

/// The scholarship catalog, in display order
///
/// Order matters: ties in score keep this order.
pub static CATALOG: [ScholarshipDefinition; 10] = [
    ScholarshipDefinition {
        name: "Ateneo Freshmen Merit Scholarship",
        university: "Ateneo de Manila University",
        description: "Top 50 applicants based on academic ranking and ACET scores get free tuition and ₱50,000 annual allowance.",
        tags: &["Merit-based", "Full Tuition", "Allowance"],
        criteria: &[(University, &["ateneo"]), (Average, &["95", "top", "excellent"])],
        weight: &[(University, 3), (Average, 2)],
    },
    ScholarshipDefinition {
        name: "Director's List Scholarship",
        university: "Ateneo de Manila University",
        description: "150 applicants with outstanding high school averages and extracurricular activities receive a ₱100,000 grant.",
        tags: &["Academic Excellence", "₱100,000 Grant"],
        criteria: &[
            (University, &["ateneo"]),
            (Average, &["90", "high"]),
            (Talent, &["extra", "arts", "sports"]),
        ],
        weight: &[(University, 3), (Average, 2), (Talent, 1)],
    },
    ScholarshipDefinition {
        name: "DLSU Archer Achiever Scholarship",
        university: "De La Salle University",
        description: "Top students from science or public high schools get a full waiver of tuition and other fees.",
        tags: &["Full Tuition Waiver", "Entrance Exam"],
        criteria: &[
            (University, &["dlsu"]),
            (Average, &["90", "high"]),
            (SchoolType, &["science", "public"]),
        ],
        weight: &[(University, 3), (Average, 2)],
    },
    ScholarshipDefinition {
        name: "Star Scholars Program",
        university: "De La Salle University",
        description: "Integrated scholarship covering college and postgraduate programs such as master's, law, or medicine.",
        tags: &["Integrated", "Graduate", "Full Scholarship"],
        criteria: &[
            (University, &["dlsu"]),
            (Average, &["95"]),
            (FinancialNeed, &["no"]),
        ],
        weight: &[(University, 3), (Average, 2)],
    },
    ScholarshipDefinition {
        name: "UST Santo Tomas College Scholarship",
        university: "University of Santo Tomas",
        description: "For students with excellent academic performance.",
        tags: &["Academic Excellence", "Merit-based"],
        criteria: &[(University, &["ust"]), (Average, &["high", "90", "95"])],
        weight: &[(University, 3), (Average, 2)],
    },
    ScholarshipDefinition {
        name: "San Lorenzo Ruiz Student Assistance",
        university: "University of Santo Tomas",
        description: "For students in need of financial aid who can work 20–30 hours a week at the university.",
        tags: &["Financial Aid", "Work-study"],
        criteria: &[
            (University, &["ust"]),
            (FinancialNeed, &["yes"]),
            (Talent, &["work", "volunteer"]),
        ],
        weight: &[(University, 2), (FinancialNeed, 3)],
    },
    ScholarshipDefinition {
        name: "Vaugirard Scholarship Program",
        university: "De La Salle University",
        description: "50 public high school graduates get free tuition and living allowances.",
        tags: &["Public School", "Full Tuition", "Allowance"],
        criteria: &[(SchoolType, &["public"]), (FinancialNeed, &["yes", "need"])],
        weight: &[(SchoolType, 2), (FinancialNeed, 3)],
    },
    ScholarshipDefinition {
        name: "Don Tomas Mapua Scholarship",
        university: "Mapúa University",
        description: "Mapúa students with an average of 1.5 to 1.0 receive 100% tuition discount.",
        tags: &["Academic Excellence", "Full Tuition"],
        criteria: &[
            (University, &["mapua"]),
            (Average, &["95"]),
            (SchoolType, &["science", "public"]),
        ],
        weight: &[(University, 3), (Average, 2)],
    },
    ScholarshipDefinition {
        name: "Financial Aid Grant",
        university: "Various Universities",
        description: "Provides tuition discounts, dormitory assistance, and allowances for books, food, and transportation.",
        tags: &["Financial Aid", "Assistance", "Allowance"],
        criteria: &[(FinancialNeed, &["yes", "need"]), (SchoolType, &["public", "private"])],
        weight: &[(FinancialNeed, 3)],
    },
    ScholarshipDefinition {
        name: "Athletic or Arts Scholarship",
        university: "Various Universities",
        description: "Full or partial scholarships for one year, renewable based on performance.",
        tags: &["Athletic", "Arts", "Renewable"],
        criteria: &[(Talent, &["arts", "sports"])],
        weight: &[(Talent, 3)],
    },
];

/// Look up a scholarship by its display name
pub fn find_by_name(name: &str) -> Option<&'static ScholarshipDefinition> {
    CATALOG.iter().find(|s| s.name == name)
}
