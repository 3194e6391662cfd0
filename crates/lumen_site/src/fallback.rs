//! Static datasets
//!
//! Content that renders without the backend: the single fallback project,
//! plus the education, experience, and skills data the sections are
//! seeded with. The projects fallback is deliberately one record - it
//! substitutes only when the backend fails.

use lumen_data::{EducationEntry, ExperienceEntry, Project, SkillGroup};

/// The one project shown when the backend is unreachable
pub fn projects() -> Vec<Project> {
    vec![Project {
        title: "Analytics Dashboard".into(),
        description: "Comprehensive analytics dashboard with real-time data visualization, \
                      team collaboration features, and advanced metrics tracking."
            .into(),
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=600&fit=crop"
            .into(),
        tags: vec![
            "Vue.js".into(),
            "Django".into(),
            "D3.js".into(),
            "PostgreSQL".into(),
        ],
        link: "#".into(),
        github: "#".into(),
    }]
}

pub fn education() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            degree: "Bachelor of Science in Computer Science".into(),
            institution: "University of Technology".into(),
            year: "2020 - 2024".into(),
            description: "Focus on software engineering and web development".into(),
            gpa: "3.8/4.0".into(),
        },
        EducationEntry {
            degree: "Full-Stack Web Development Bootcamp".into(),
            institution: "Tech Academy".into(),
            year: "2020".into(),
            description: "Intensive training in MERN stack and modern development practices"
                .into(),
            gpa: "Graduated with Distinction".into(),
        },
        EducationEntry {
            degree: "Advanced JavaScript & React Certification".into(),
            institution: "Online Learning Platform".into(),
            year: "2021".into(),
            description: "Advanced concepts in JavaScript, React, and performance optimization"
                .into(),
            gpa: "Certified".into(),
        },
    ]
}

pub fn experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            title: "Senior Frontend Developer".into(),
            company: "Tech Innovations Inc.".into(),
            period: "2023 - Present".into(),
            description: "Leading frontend architecture and mentoring junior developers. \
                          Implemented advanced animations and improved performance by 40%."
                .into(),
            highlights: vec![
                "React & Next.js".into(),
                "Team Leadership".into(),
                "Performance Optimization".into(),
            ],
        },
        ExperienceEntry {
            title: "Full-Stack Developer".into(),
            company: "Digital Solutions Ltd.".into(),
            period: "2021 - 2023".into(),
            description: "Developed and maintained full-stack web applications. Collaborated \
                          with UX designers and backend teams to deliver seamless user \
                          experiences."
                .into(),
            highlights: vec![
                "Django & React".into(),
                "Database Design".into(),
                "API Development".into(),
            ],
        },
        ExperienceEntry {
            title: "Junior Web Developer".into(),
            company: "StartUp Labs".into(),
            period: "2020 - 2021".into(),
            description: "Built responsive web applications and learned modern development \
                          practices. Contributed to multiple client projects with high \
                          satisfaction."
                .into(),
            highlights: vec![
                "HTML/CSS/JS".into(),
                "First Projects".into(),
                "Learning & Growth".into(),
            ],
        },
    ]
}

pub fn skills() -> Vec<SkillGroup> {
    vec![
        SkillGroup {
            category: "Frontend".into(),
            skills: vec![
                "React".into(),
                "Next.js".into(),
                "TypeScript".into(),
                "Tailwind CSS".into(),
                "GSAP".into(),
                "Three.js".into(),
            ],
        },
        SkillGroup {
            category: "Backend".into(),
            skills: vec![
                "Django".into(),
                "Node.js".into(),
                "Python".into(),
                "PostgreSQL".into(),
                "REST APIs".into(),
                "GraphQL".into(),
            ],
        },
        SkillGroup {
            category: "Tools & DevOps".into(),
            skills: vec![
                "Git".into(),
                "Docker".into(),
                "Vercel".into(),
                "AWS".into(),
                "GitHub".into(),
                "VS Code".into(),
            ],
        },
        SkillGroup {
            category: "Design".into(),
            skills: vec![
                "UI/UX Design".into(),
                "Figma".into(),
                "Responsive Design".into(),
                "Animation".into(),
                "Accessibility".into(),
                "Web Performance".into(),
            ],
        },
    ]
}

/// Proficiency bars under the skills grid: (label, percentage)
pub fn proficiencies() -> Vec<(&'static str, u32)> {
    vec![
        ("Frontend Development", 95),
        ("Backend Development", 85),
        ("UI/UX Design", 90),
    ]
}

/// Hero stats row: (value, label)
pub fn hero_stats() -> Vec<(&'static str, &'static str)> {
    vec![
        ("50+", "Projects Completed"),
        ("5+", "Years Experience"),
        ("100%", "Client Satisfaction"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_fallback_is_exactly_one_record() {
        let fallback = projects();
        assert_eq!(fallback.len(), 1);
        assert_eq!(fallback[0].title, "Analytics Dashboard");
        assert_eq!(fallback[0].tags.len(), 4);
    }

    #[test]
    fn test_static_datasets_are_populated() {
        assert_eq!(education().len(), 3);
        assert_eq!(experience().len(), 3);
        assert_eq!(skills().len(), 4);
        assert_eq!(proficiencies().len(), 3);
        assert_eq!(hero_stats().len(), 3);
    }
}
