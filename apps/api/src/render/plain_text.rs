use crate::models::resume::ResumeDocument;
use crate::render::parts;

/// Clipboard transcript of a document, independent of the chosen template.
///
/// Line 1 is the uppercased name, line 2 the contact fields joined by ` | `;
/// SUMMARY, EXPERIENCE, PROJECTS, EDUCATION and SKILLS follow as blocks
/// separated by a blank line, each only when it has content.
pub fn to_plain_text(doc: &ResumeDocument) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(if doc.personal.name.is_empty() {
        "NAME".to_string()
    } else {
        doc.personal.name.to_uppercase()
    });

    let contact = parts::contact_items(doc);
    if !contact.is_empty() {
        lines.push(contact.join(" | "));
    }

    if !doc.summary.is_empty() {
        start_block(&mut lines, "SUMMARY");
        lines.push(doc.summary.clone());
    }

    if !doc.experience.is_empty() {
        start_block(&mut lines, "EXPERIENCE");
        for exp in &doc.experience {
            lines.push(format!("{} at {} ({})", exp.role, exp.company, exp.duration));
            if !exp.description.is_empty() {
                lines.push(exp.description.clone());
            }
        }
    }

    if !doc.projects.is_empty() {
        start_block(&mut lines, "PROJECTS");
        for project in &doc.projects {
            if project.live_url.is_empty() {
                lines.push(project.title.clone());
            } else {
                lines.push(format!("{} ({})", project.title, project.live_url));
            }
            if !project.tech_stack.is_empty() {
                lines.push(format!("Tech Stack: {}", project.tech_stack.join(", ")));
            }
            if !project.description.is_empty() {
                lines.push(project.description.clone());
            }
        }
    }

    if !doc.education.is_empty() {
        start_block(&mut lines, "EDUCATION");
        for edu in &doc.education {
            lines.push(format!("{} - {} ({})", edu.institution, edu.degree, edu.year));
        }
    }

    let skill_rows = parts::skill_rows(doc);
    if !skill_rows.is_empty() {
        start_block(&mut lines, "SKILLS");
        for (label, skills) in skill_rows {
            lines.push(format!("{label}: {}", skills.join(", ")));
        }
    }

    lines.join("\n")
}

fn start_block(lines: &mut Vec<String>, title: &str) {
    lines.push(String::new());
    lines.push(title.to_string());
}
