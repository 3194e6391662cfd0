//! Page composition

use lumen_data::{Project, Reconciled};

use crate::section::Section;
use crate::sections::{
    AboutSection, EducationSection, ExperienceSection, FooterSection, HeaderSection, HeroSection,
    ProjectsSection, SkillsSection,
};

/// The portfolio page: an ordered list of sections
pub struct Page {
    sections: Vec<Box<dyn Section>>,
}

impl Page {
    /// The standard section order
    ///
    /// `projects` carries the reconciled state of the one live-data
    /// section; everything else renders from static data.
    pub fn standard(projects: Reconciled<Project>) -> Self {
        Self {
            sections: vec![
                Box::new(HeaderSection),
                Box::new(HeroSection),
                Box::new(AboutSection),
                Box::new(EducationSection),
                Box::new(SkillsSection),
                Box::new(ExperienceSection),
                Box::new(ProjectsSection::new(projects)),
                Box::new(FooterSection),
            ],
        }
    }

    pub fn sections(&self) -> &[Box<dyn Section>] {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_page_order() {
        let page = Page::standard(Reconciled::Loading);
        let ids: Vec<&str> = page.sections().iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            vec![
                "header",
                "hero",
                "about",
                "education",
                "skills",
                "experience",
                "projects",
                "footer"
            ]
        );
    }
}
