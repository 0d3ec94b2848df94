use crate::models::resume::{
    EducationEntry, ExperienceEntry, Links, Personal, ProjectEntry, ResumeDocument, Skills,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A fully-populated sample résumé for demonstrations. Scores 100.
pub fn load_preset() -> ResumeDocument {
    ResumeDocument {
        personal: Personal {
            name: "Alex Taylor".into(),
            email: "alex.taylor@example.com".into(),
            phone: "+1 (555) 123-4567".into(),
            location: "San Francisco, CA".into(),
        },
        summary: "Creative and detail-oriented Frontend Engineer with 4+ years of experience \
                  building scalable web applications. Proven track record of improving site \
                  performance by 40% and leading cross-functional teams. Expert in React \
                  ecosystem and UI/UX design principles."
            .into(),
        experience: vec![
            ExperienceEntry {
                company: "TechFlow Solutions".into(),
                role: "Senior Frontend Developer".into(),
                duration: "2022 - Present".into(),
                description: "Led the migration of a legacy monorepo to a micro-frontend \
                              architecture, reducing build times by 60%. Mentored 3 junior \
                              developers and established code quality standards."
                    .into(),
            },
            ExperienceEntry {
                company: "Creative Pulse".into(),
                role: "Web Developer".into(),
                duration: "2019 - 2022".into(),
                description: "Developed responsive marketing sites for Fortune 500 clients. \
                              Collaborated with designers to implement pixel-perfect UIs using \
                              React and GSAP."
                    .into(),
            },
        ],
        projects: vec![
            ProjectEntry {
                id: "1".into(),
                title: "E-Commerce Dashboard".into(),
                description: "Built a comprehensive analytics dashboard for online retailers. \
                              Integrated Stripe API for real-time revenue tracking and \
                              visualized data using Recharts."
                    .into(),
                tech_stack: strings(&["React", "TypeScript", "Node.js", "Stripe"]),
                live_url: "https://demo-dashboard.com".into(),
                github_url: "https://github.com/alex/dashboard".into(),
            },
            ProjectEntry {
                id: "2".into(),
                title: "TaskMaster AI".into(),
                description: "Productivity app utilizing OpenAI API to auto-generate subtasks. \
                              Implemented offline-first capability using PWA standards and \
                              IndexedDB."
                    .into(),
                tech_stack: strings(&["Next.js", "OpenAI", "PWA", "Tailwind"]),
                live_url: "https://taskmaster.ai".into(),
                github_url: "https://github.com/alex/taskmaster".into(),
            },
        ],
        education: vec![EducationEntry {
            institution: "University of California, Berkeley".into(),
            degree: "B.S. Computer Science".into(),
            year: "2019".into(),
        }],
        skills: Skills {
            technical: strings(&[
                "React",
                "JavaScript (ES6+)",
                "TypeScript",
                "Next.js",
                "Tailwind CSS",
            ]),
            soft: strings(&["Leadership", "Problem Solving", "Agile/Scrum"]),
            tools: strings(&["Git", "Figma", "Docker", "VS Code"]),
        },
        links: Links {
            github: "github.com/alextaylor".into(),
            linkedin: "linkedin.com/in/alextaylor".into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ats::score;

    #[test]
    fn test_preset_is_constant() {
        assert_eq!(load_preset(), load_preset());
    }

    #[test]
    fn test_preset_scores_full_marks() {
        let result = score(&load_preset());
        assert_eq!(result.score, 100);
        assert!(result.improvements.is_empty());
    }
}
