//! The portfolio's skill list.

use super::skill::Skill;

/// (id, name, category, color, icon)
const PORTFOLIO_SKILLS: &[(&str, &str, &str, &str, &str)] = &[
    // Languages
    ("python", "Python", "Languages", "bg-yellow-500", "si-python"),
    ("javascript", "JavaScript", "Languages", "bg-yellow-400", "si-javascript"),
    ("typescript", "TypeScript", "Languages", "bg-blue-600", "si-typescript"),
    ("sql", "SQL", "Languages", "bg-blue-500", "si-mysql"),
    ("graphql", "GraphQL", "Languages", "bg-purple-600", "si-graphql"),
    ("java", "Java", "Languages", "bg-orange-600", "fa-java"),
    ("csharp", "C#", "Languages", "bg-purple-500", "tb-brand-csharp"),
    ("html", "HTML", "Languages", "bg-orange-500", "si-html5"),
    ("css", "CSS", "Languages", "bg-blue-500", "si-css3"),
    // Frameworks
    ("nodejs", "Node.js", "Frameworks", "bg-green-600", "si-nodedotjs"),
    ("react", "React.js", "Frameworks", "bg-blue-500", "si-react"),
    ("nextjs", "Next.js", "Frameworks", "bg-black", "si-nextdotjs"),
    ("express", "Express", "Frameworks", "bg-gray-600", "si-express"),
    ("tailwind", "TailwindCSS", "Frameworks", "bg-cyan-500", "si-tailwindcss"),
    ("flask", "Flask", "Frameworks", "bg-gray-300", "si-flask"),
    ("numpy", "NumPy", "Frameworks", "bg-blue-400", "si-numpy"),
    ("opencv", "OpenCV", "Frameworks", "bg-green-500", "si-opencv"),
    // Tools
    ("aws", "AWS", "Tools", "bg-orange-500", "fa-aws"),
    ("azure", "Azure", "Tools", "bg-blue-600", "vsc-azure"),
    ("docker", "Docker", "Tools", "bg-blue-500", "si-docker"),
    ("kubernetes", "Kubernetes", "Tools", "bg-blue-600", "si-kubernetes"),
    ("git", "Git", "Tools", "bg-orange-600", "si-git"),
    ("linux", "Linux", "Tools", "bg-yellow-500", "si-linux"),
    ("mysql", "MySQL", "Tools", "bg-blue-500", "si-mysql"),
    ("postgresql", "PostgreSQL", "Tools", "bg-blue-600", "si-postgresql"),
    ("cursor", "Cursor", "Tools", "bg-purple-600", "bs-cursor-fill"),
];

/// The skills shown on the Tools page, in display order.
#[must_use]
pub fn portfolio_skills() -> Vec<Skill> {
    PORTFOLIO_SKILLS
        .iter()
        .map(|&(id, name, category, color, icon)| {
            Skill::new(id, name, category).with_color(color).with_icon(icon)
        })
        .collect()
}
